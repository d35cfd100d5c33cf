//! Expected-value model for candidate bet sizes.
//!
//! Models the outcome of a bet as a branching event: the opponent folds,
//! calls, or raises with probabilities taken from a per-archetype base
//! table and adjusted by the category of the proposed size. The raise
//! branch is modeled conservatively as a full loss of the investment.

use super::discretize::ActionKind;
use super::SpotParams;
use crate::hands::equity::EquityTable;
use crate::logic::scenario::OpponentTendency;

/// Heads-up preflop starting pot (small blind + big blind).
pub const BASE_POT_SIZE: f64 = 1.5;

/// Largest bet counted as small.
pub const BET_SIZE_SMALL_MAX: f64 = 2.5;
/// Largest bet counted as medium; anything above is large.
pub const BET_SIZE_MEDIUM_MAX: f64 = 4.0;

/// Probability mass moved between fold and call per category step.
const CATEGORY_SHIFT: f64 = 0.10;

/// Coarse size category of a proposed bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetSizeCategory {
    /// At most [`BET_SIZE_SMALL_MAX`] BB.
    Small,
    /// Between small and [`BET_SIZE_MEDIUM_MAX`] BB.
    Medium,
    /// Above [`BET_SIZE_MEDIUM_MAX`] BB.
    Large,
}

impl BetSizeCategory {
    /// Category of a bet size in BB.
    pub fn from_size(bet_size: f64) -> Self {
        if bet_size <= BET_SIZE_SMALL_MAX {
            BetSizeCategory::Small
        } else if bet_size <= BET_SIZE_MEDIUM_MAX {
            BetSizeCategory::Medium
        } else {
            BetSizeCategory::Large
        }
    }
}

/// Opponent fold/call/raise probabilities. Always sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseProfile {
    /// Probability the opponent folds.
    pub fold: f64,
    /// Probability the opponent calls.
    pub call: f64,
    /// Probability the opponent raises.
    pub raise: f64,
}

impl ResponseProfile {
    /// Sum of the three probabilities.
    pub fn total(&self) -> f64 {
        self.fold + self.call + self.raise
    }
}

/// Base response probabilities per opponent archetype.
pub fn base_response(tendency: OpponentTendency) -> ResponseProfile {
    match tendency {
        OpponentTendency::Tight => ResponseProfile {
            fold: 0.70,
            call: 0.25,
            raise: 0.05,
        },
        OpponentTendency::Loose => ResponseProfile {
            fold: 0.30,
            call: 0.45,
            raise: 0.25,
        },
        OpponentTendency::Aggressive => ResponseProfile {
            fold: 0.20,
            call: 0.30,
            raise: 0.50,
        },
        OpponentTendency::Passive => ResponseProfile {
            fold: 0.40,
            call: 0.55,
            raise: 0.05,
        },
        OpponentTendency::Unknown => ResponseProfile {
            fold: 0.40,
            call: 0.40,
            raise: 0.20,
        },
    }
}

/// Response probabilities adjusted for the proposed bet's size category.
///
/// Small bets move mass from folding to calling, large bets the reverse;
/// medium bets use the base table. The shift keeps the triple summing to
/// 1 for every archetype.
pub fn adjusted_response(tendency: OpponentTendency, bet_size: f64) -> ResponseProfile {
    let base = base_response(tendency);
    match BetSizeCategory::from_size(bet_size) {
        BetSizeCategory::Small => ResponseProfile {
            fold: base.fold - CATEGORY_SHIFT,
            call: base.call + CATEGORY_SHIFT,
            raise: base.raise,
        },
        BetSizeCategory::Medium => base,
        BetSizeCategory::Large => ResponseProfile {
            fold: base.fold + CATEGORY_SHIFT,
            call: base.call - CATEGORY_SHIFT,
            raise: base.raise,
        },
    }
}

/// Expected value in BB of folding. Folding invests nothing further;
/// blinds already posted are sunk.
pub fn fold_ev() -> f64 {
    0.0
}

/// Expected value in BB of a candidate bet size.
///
/// `EV = fold_prob × P + call_prob × (e × total_pot_if_called − I)
///      + raise_prob × (−I)`
/// where `P` includes the opponent's bet when one is faced and the
/// investment `I` is capped at hero's stack. A zero or negative capped
/// investment yields 0 (no action taken), as does a fold.
pub fn bet_ev(
    bet_size: f64,
    action: ActionKind,
    spot: &SpotParams<'_>,
    equity_table: &EquityTable,
) -> f64 {
    let own_stack = f64::from(spot.own_stack());

    let (raw_investment, pot) = match (spot.facing_bet, action) {
        (_, ActionKind::Fold) => return fold_ev(),
        (Some(faced), ActionKind::Call) => (faced, spot.pot_size + faced),
        (Some(faced), ActionKind::Raise) => (bet_size, spot.pot_size + faced),
        (None, _) | (Some(_), ActionKind::Open) => (bet_size, spot.pot_size),
    };

    let investment = raw_investment.min(own_stack);
    if investment <= 0.0 {
        return 0.0;
    }

    let probs = adjusted_response(spot.tendency, bet_size);
    let equity = equity_table.equity(spot.hand);

    let total_pot_if_called = match (spot.facing_bet, action) {
        (Some(_), ActionKind::Call) => pot + investment,
        (Some(faced), ActionKind::Raise) => pot + investment + (investment - faced),
        _ => pot + investment + investment,
    };

    let ev_fold = probs.fold * pot;
    let ev_call = probs.call * (equity * total_pot_if_called - investment);
    let ev_raise = probs.raise * (-investment);

    ev_fold + ev_call + ev_raise
}
