//! Bet-size optimization.
//!
//! ## Modules
//!
//! - `discretize`: candidate bet-size enumeration and action labels
//! - `ev`: opponent response model and expected-value calculation
//! - `heuristic`: ceiling estimates guiding the informed search
//! - `search`: A* search with a brute-force enumeration oracle

pub mod discretize;
pub mod ev;
pub mod heuristic;
pub mod search;

// Re-export commonly used types
pub use discretize::{candidate_sizes, classify_action, ActionKind, SizingOptions};
pub use ev::{adjusted_response, bet_ev, fold_ev, BetSizeCategory, ResponseProfile, BASE_POT_SIZE};
pub use heuristic::{estimate_ceiling, HeuristicKind};
pub use search::{a_star, brute_force, SearchMethod, SearchOutcome};

use crate::logic::scenario::{OpponentTendency, Position};

/// One betting decision point: the scenario every sizing computation
/// shares. Constructed fresh per decision call.
#[derive(Debug, Clone, Copy)]
pub struct SpotParams<'a> {
    /// Hero's starting hand, in any accepted notation.
    pub hand: &'a str,
    /// Hero's seat.
    pub position: Position,
    /// (own, opponent) stacks in BB.
    pub stacks: (u32, u32),
    /// Opponent archetype.
    pub tendency: OpponentTendency,
    /// Bet currently faced, if any (`None` means hero opens the action).
    pub facing_bet: Option<f64>,
    /// Current pot in BB, including any amount the opponent has bet.
    pub pot_size: f64,
}

impl<'a> SpotParams<'a> {
    /// Spot with the standard heads-up blind pot and no bet faced.
    pub fn new(
        hand: &'a str,
        position: Position,
        stacks: (u32, u32),
        tendency: OpponentTendency,
    ) -> Self {
        Self {
            hand,
            position,
            stacks,
            tendency,
            facing_bet: None,
            pot_size: BASE_POT_SIZE,
        }
    }

    /// Face an opponent bet of the given size.
    pub fn with_facing_bet(mut self, bet: f64) -> Self {
        self.facing_bet = Some(bet);
        self
    }

    /// Override the pot size.
    pub fn with_pot_size(mut self, pot: f64) -> Self {
        self.pot_size = pot;
        self
    }

    /// Hero's stack in BB.
    pub fn own_stack(&self) -> u32 {
        self.stacks.0
    }
}
