//! Bet-size discretization.
//!
//! Enumerates the candidate bet-size space for opening and facing-a-bet
//! scenarios. Sizes are handled internally in centi-BB integers so that
//! repeated increments and deduplication stay exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard bet-size ladder in multiples of the big blind.
pub const STANDARD_BET_SIZES: [f64; 10] = [2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0];

/// Minimum opening raise size.
pub const MIN_OPEN_SIZE: f64 = 2.0;

/// Ladder ceiling; stacks beyond this get an explicit all-in candidate.
pub const MAX_STANDARD_BET_SIZE: f64 = 10.0;

/// Tolerance for treating a bet size as equal to the faced bet (a call).
pub const CALL_TOLERANCE: f64 = 0.01;

/// Options controlling candidate generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingOptions {
    /// Step between generated sizes when not using the standard ladder.
    #[serde(default = "default_increment")]
    pub increment: f64,
    /// Use the fixed standard ladder instead of incremental generation.
    #[serde(default = "default_true")]
    pub use_standard_ladder: bool,
    /// Append an all-in candidate when the stack exceeds the ladder
    /// ceiling.
    #[serde(default = "default_true")]
    pub include_all_in: bool,
}

fn default_increment() -> f64 {
    0.5
}

fn default_true() -> bool {
    true
}

impl Default for SizingOptions {
    fn default() -> Self {
        Self {
            increment: default_increment(),
            use_standard_ladder: true,
            include_all_in: true,
        }
    }
}

/// Convert a bet size in BB to centi-BB.
#[inline]
fn to_centi(bb: f64) -> i64 {
    (bb * 100.0).round() as i64
}

/// Convert centi-BB back to BB.
#[inline]
fn to_bb(centi: i64) -> f64 {
    centi as f64 / 100.0
}

/// Candidate bet sizes for a scenario, deduplicated and sorted ascending.
///
/// Opening (no bet faced): sizes from the minimum open up to
/// `min(stack, 10)` BB. Facing a bet: the exact call amount (capped at
/// the stack) plus raise sizes from twice the faced bet upward. An
/// all-in candidate is appended when the stack exceeds the ladder
/// ceiling. Never returns a size above the stack or a nonpositive size.
pub fn candidate_sizes(stack: u32, facing_bet: Option<f64>, opts: &SizingOptions) -> Vec<f64> {
    let stack_bb = f64::from(stack);
    let mut centi: Vec<i64> = Vec::new();

    match facing_bet {
        None => {
            if opts.use_standard_ladder {
                centi.extend(
                    STANDARD_BET_SIZES
                        .iter()
                        .filter(|&&s| s <= stack_bb)
                        .map(|&s| to_centi(s)),
                );
            } else {
                let cap = to_centi(stack_bb.min(MAX_STANDARD_BET_SIZE));
                let step = to_centi(opts.increment);
                let mut current = to_centi(MIN_OPEN_SIZE);
                while current <= cap {
                    centi.push(current);
                    current += step;
                }
            }
        }
        Some(faced) => {
            let call = faced.min(stack_bb);
            if call > 0.0 {
                centi.push(to_centi(call));
            }
            let min_raise = faced * 2.0;
            if opts.use_standard_ladder {
                centi.extend(
                    STANDARD_BET_SIZES
                        .iter()
                        .filter(|&&s| s <= stack_bb && s > call && s >= min_raise)
                        .map(|&s| to_centi(s)),
                );
            } else {
                let cap = to_centi(stack_bb.min(MAX_STANDARD_BET_SIZE));
                let step = to_centi(opts.increment);
                let mut current = to_centi(min_raise);
                while current <= cap {
                    if current > to_centi(call) {
                        centi.push(current);
                    }
                    current += step;
                }
            }
        }
    }

    if opts.include_all_in && stack_bb > MAX_STANDARD_BET_SIZE {
        centi.push(to_centi(stack_bb));
    }

    centi.sort_unstable();
    centi.dedup();
    centi.retain(|&c| c > 0);
    centi.into_iter().map(to_bb).collect()
}

/// Action label for a candidate bet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Put no more money in.
    Fold,
    /// Match the faced bet.
    Call,
    /// Bet over the faced bet.
    Raise,
    /// Make the first bet.
    Open,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Fold => "fold",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
            ActionKind::Open => "open",
        };
        write!(f, "{}", name)
    }
}

/// Classify a bet size into an action for the given scenario.
///
/// Zero is a fold. When facing a bet, a size within [`CALL_TOLERANCE`] of
/// the faced bet is a call and anything larger a raise; a smaller nonzero
/// size is invalid and classified as a fold so it can never be chosen.
pub fn classify_action(bet_size: f64, facing_bet: Option<f64>) -> ActionKind {
    if bet_size <= 0.0 {
        return ActionKind::Fold;
    }
    match facing_bet {
        None => ActionKind::Open,
        Some(faced) => {
            if (bet_size - faced).abs() < CALL_TOLERANCE {
                ActionKind::Call
            } else if bet_size > faced {
                ActionKind::Raise
            } else {
                ActionKind::Fold
            }
        }
    }
}
