//! Unified decision entry point.
//!
//! Applies the playability decision as a pre-filter, then runs the
//! bet-size search, returning a single recommendation. Every call is a
//! pure function of its arguments and the immutable equity table, so
//! independent callers (including a parallel sweep over the full range)
//! need no locking.

use crate::config::AdvisorConfig;
use crate::hands::equity::EquityTable;
use crate::hands::ranking::{Tier, HAND_RANK_LIST};
use crate::logic::playability::{decide_playability, PlayabilityResult};
use crate::logic::scenario::{OpponentTendency, Position};
use crate::sizing::discretize::{ActionKind, SizingOptions};
use crate::sizing::ev::BASE_POT_SIZE;
use crate::sizing::heuristic::HeuristicKind;
use crate::sizing::search::{a_star, brute_force, SearchMethod, SearchOutcome};
use crate::sizing::SpotParams;
use rayon::prelude::*;
use serde::Serialize;

/// One bet recommendation request.
#[derive(Debug, Clone)]
pub struct BetRequest<'a> {
    /// Hero's starting hand.
    pub hand: &'a str,
    /// Hero's position as given by the caller.
    pub position: &'a str,
    /// (own, opponent) stacks in BB.
    pub stacks: (u32, u32),
    /// Opponent archetype.
    pub tendency: OpponentTendency,
    /// Bet currently faced, if any.
    pub facing_bet: Option<f64>,
    /// Current pot in BB.
    pub pot_size: f64,
    /// Search algorithm to run.
    pub search: SearchMethod,
    /// Heuristic for the informed search.
    pub heuristic: HeuristicKind,
    /// Bet-size discretization options.
    pub sizing: SizingOptions,
    /// Check playability before searching.
    pub use_playability_filter: bool,
    /// Reuse an already-computed playability result instead of deciding
    /// again.
    pub precomputed_playability: Option<PlayabilityResult>,
}

impl<'a> BetRequest<'a> {
    /// Request with the standard defaults: blind pot, A* with the
    /// hand-strength heuristic, playability filter on.
    pub fn new(
        hand: &'a str,
        position: &'a str,
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
            search: SearchMethod::AStar,
            heuristic: HeuristicKind::HandStrength,
            sizing: SizingOptions::default(),
            use_playability_filter: true,
            precomputed_playability: None,
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

    /// Choose the search algorithm.
    pub fn with_search(mut self, search: SearchMethod) -> Self {
        self.search = search;
        self
    }

    /// Choose the search heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Override the discretization options.
    pub fn with_sizing(mut self, sizing: SizingOptions) -> Self {
        self.sizing = sizing;
        self
    }

    /// Enable or disable the playability pre-filter.
    pub fn with_playability_filter(mut self, enabled: bool) -> Self {
        self.use_playability_filter = enabled;
        self
    }

    /// Supply a precomputed playability result.
    pub fn with_precomputed_playability(mut self, result: PlayabilityResult) -> Self {
        self.precomputed_playability = Some(result);
        self
    }

    /// Apply pot, sizing, heuristic, and search settings from a
    /// configuration.
    pub fn with_config(mut self, config: &AdvisorConfig) -> Self {
        self.pot_size = config.pot_size;
        self.sizing = config.sizing.clone();
        self.heuristic = config.heuristic;
        self.search = config.search;
        self
    }
}

/// A single action recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Recommended action.
    pub action: ActionKind,
    /// Recommended bet size in BB (0 for a fold).
    pub bet_size: f64,
    /// Expected value of the action in BB.
    pub expected_value: f64,
    /// Plain-language justification.
    pub reason: String,
    /// Algorithm that produced the recommendation.
    pub search_algorithm: SearchMethod,
    /// The playability decision, when one was made or supplied.
    pub playability_result: Option<PlayabilityResult>,
}

/// Recommend an action and bet size for a scenario.
///
/// With the playability filter on, a hand judged unplayable folds
/// immediately with the playability reason and the search never runs.
/// Otherwise the chosen algorithm searches the discretized bet-size
/// space for the max-EV action.
pub fn recommend_bet(request: BetRequest<'_>, equity_table: &EquityTable) -> Recommendation {
    let playability = if request.use_playability_filter {
        Some(request.precomputed_playability.unwrap_or_else(|| {
            decide_playability(
                request.hand,
                request.position,
                request.stacks.0,
                request.tendency,
                request.facing_bet,
            )
        }))
    } else {
        request.precomputed_playability
    };

    if request.use_playability_filter {
        if let Some(result) = playability.as_ref().filter(|r| !r.playable) {
            let reason = result.reason.clone();
            return Recommendation {
                action: ActionKind::Fold,
                bet_size: 0.0,
                expected_value: 0.0,
                reason,
                search_algorithm: request.search,
                playability_result: playability,
            };
        }
    }

    let position = match Position::parse(request.position) {
        Some(p) => p,
        None => {
            return Recommendation {
                action: ActionKind::Fold,
                bet_size: 0.0,
                expected_value: 0.0,
                reason: "Invalid position; must be Button or Big Blind.".to_string(),
                search_algorithm: request.search,
                playability_result: playability,
            };
        }
    };

    let spot = SpotParams {
        hand: request.hand,
        position,
        stacks: request.stacks,
        tendency: request.tendency,
        facing_bet: request.facing_bet,
        pot_size: request.pot_size,
    };

    let outcome = match request.search {
        SearchMethod::AStar => a_star(&spot, request.heuristic, &request.sizing, equity_table),
        SearchMethod::BruteForce => brute_force(&spot, &request.sizing, equity_table),
    };

    Recommendation {
        action: outcome.action,
        bet_size: outcome.bet_size,
        expected_value: outcome.ev,
        reason: describe_outcome(&outcome),
        search_algorithm: outcome.search_method,
        playability_result: playability,
    }
}

/// Reason text for a search outcome, per action type.
fn describe_outcome(outcome: &SearchOutcome) -> String {
    match outcome.action {
        ActionKind::Fold => format!(
            "Fold: no action beats folding (EV {:.2} BB, {} search).",
            outcome.ev, outcome.search_method
        ),
        ActionKind::Call => format!(
            "Call {:.1} BB (EV {:.2} BB, {} search).",
            outcome.bet_size, outcome.ev, outcome.search_method
        ),
        ActionKind::Raise => format!(
            "Raise to {:.1}x BB (EV {:.2} BB, {} search).",
            outcome.bet_size, outcome.ev, outcome.search_method
        ),
        ActionKind::Open => format!(
            "Open to {:.1}x BB (EV {:.2} BB, {} search).",
            outcome.bet_size, outcome.ev, outcome.search_method
        ),
    }
}

/// Strategy entry for one hand of a range sweep.
#[derive(Debug, Clone, Serialize)]
pub struct RangeEntry {
    /// Canonical hand label.
    pub hand: &'static str,
    /// 1-based rank.
    pub rank: u8,
    /// Strength tier.
    pub tier: Tier,
    /// Whether the playability filter admitted the hand.
    pub playable: bool,
    /// Recommended action.
    pub action: ActionKind,
    /// Recommended bet size in BB.
    pub bet_size: f64,
    /// Expected value of the recommendation in BB.
    pub expected_value: f64,
}

/// Evaluate every canonical hand for one scenario, in parallel.
///
/// Each hand is an independent, side-effect-free decision call with its
/// own fact store and search nodes, so the sweep parallelizes without
/// locking. `progress` is invoked once per completed hand. Entries come
/// back in rank order.
pub fn sweep_range<F>(
    position: &str,
    stacks: (u32, u32),
    tendency: OpponentTendency,
    config: &AdvisorConfig,
    equity_table: &EquityTable,
    progress: F,
) -> Vec<RangeEntry>
where
    F: Fn() + Sync,
{
    HAND_RANK_LIST
        .par_iter()
        .enumerate()
        .map(|(i, &hand)| {
            let request =
                BetRequest::new(hand, position, stacks, tendency).with_config(config);
            let recommendation = recommend_bet(request, equity_table);
            progress();
            let rank = (i + 1) as u8;
            RangeEntry {
                hand,
                rank,
                tier: Tier::from_rank(rank),
                playable: recommendation
                    .playability_result
                    .as_ref()
                    .map(|p| p.playable)
                    .unwrap_or(false),
                action: recommendation.action,
                bet_size: recommendation.bet_size,
                expected_value: recommendation.expected_value,
            }
        })
        .collect()
}
