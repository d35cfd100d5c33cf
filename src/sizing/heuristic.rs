//! Ceiling estimates for the informed search.
//!
//! A heuristic estimates the maximum EV achievable in a scenario. It is
//! constant across all candidate bet sizes of one search. Neither
//! estimate is guaranteed admissible (both can overestimate), so the
//! search using them is validated against brute-force enumeration rather
//! than trusted for optimality.

use super::SpotParams;
use crate::hands::equity::EquityTable;
use crate::logic::scenario::{OpponentTendency, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference bet size used when estimating an opening scenario.
const REFERENCE_OPEN_SIZE: f64 = 3.0;

/// Which ceiling estimate to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// Equity-, position-, and tendency-weighted estimate (the default).
    HandStrength,
    /// Bare equity-times-pot estimate; faster, less informed.
    Optimistic,
}

impl HeuristicKind {
    /// Resolve a heuristic by name.
    ///
    /// # Panics
    ///
    /// Panics on an unknown name. Passing one is a programmer error in
    /// the caller's wiring, not a recoverable runtime condition, and
    /// silently falling back could mask it.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hand_strength" => HeuristicKind::HandStrength,
            "optimistic" => HeuristicKind::Optimistic,
            other => panic!(
                "Unknown heuristic type: {}. Use 'hand_strength' or 'optimistic'.",
                other
            ),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::HandStrength => write!(f, "hand_strength"),
            HeuristicKind::Optimistic => write!(f, "optimistic"),
        }
    }
}

/// Estimated EV ceiling for a scenario under the chosen heuristic.
pub fn estimate_ceiling(
    kind: HeuristicKind,
    spot: &SpotParams<'_>,
    equity_table: &EquityTable,
) -> f64 {
    match kind {
        HeuristicKind::HandStrength => hand_strength_estimate(spot, equity_table),
        HeuristicKind::Optimistic => optimistic_estimate(spot, equity_table),
    }
}

/// Equity-based estimate weighted by position and opponent tendency.
/// May overestimate; not admissible in general.
fn hand_strength_estimate(spot: &SpotParams<'_>, equity_table: &EquityTable) -> f64 {
    let equity = equity_table.equity(spot.hand);
    let own_stack = f64::from(spot.own_stack());

    let base_ev = match spot.facing_bet {
        None => {
            let estimated_bet = REFERENCE_OPEN_SIZE.min(own_stack);
            equity * (spot.pot_size + estimated_bet * 2.0) - estimated_bet
        }
        Some(faced) => equity * (spot.pot_size + faced * 2.0) - faced,
    };

    let position_multiplier = if spot.position == Position::Button {
        1.05
    } else {
        1.0
    };
    let tendency_adjustment = match spot.tendency {
        OpponentTendency::Tight => 1.0,
        OpponentTendency::Loose => 0.95,
        OpponentTendency::Aggressive => 0.7,
        OpponentTendency::Passive => 1.0,
        OpponentTendency::Unknown => 0.95,
    };

    (base_ev * position_multiplier * tendency_adjustment).max(0.0)
}

/// Assume the pot is simply won in proportion to equity. Overestimates
/// freely; not admissible.
fn optimistic_estimate(spot: &SpotParams<'_>, equity_table: &EquityTable) -> f64 {
    let equity = equity_table.equity(spot.hand);
    match spot.facing_bet {
        None => equity * (spot.pot_size + REFERENCE_OPEN_SIZE),
        Some(faced) => equity * (spot.pot_size + faced) - faced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot<'a>(hand: &'a str) -> SpotParams<'a> {
        SpotParams::new(hand, Position::Button, (50, 50), OpponentTendency::Tight)
    }

    #[test]
    fn test_hand_strength_estimate_is_nonnegative() {
        let table = EquityTable::builtin();
        for hand in ["AA", "KAs", "89s", "27o", "23o"] {
            let h = estimate_ceiling(HeuristicKind::HandStrength, &spot(hand), &table);
            assert!(h >= 0.0, "{}: {}", hand, h);
        }
    }

    #[test]
    fn test_stronger_hands_estimate_higher() {
        let table = EquityTable::builtin();
        let aa = estimate_ceiling(HeuristicKind::HandStrength, &spot("AA"), &table);
        let trash = estimate_ceiling(HeuristicKind::HandStrength, &spot("27o"), &table);
        assert!(aa > trash);
    }

    #[test]
    fn test_aggressive_opponent_lowers_estimate() {
        let table = EquityTable::builtin();
        let vs_tight = estimate_ceiling(HeuristicKind::HandStrength, &spot("AA"), &table);
        let mut aggressive = spot("AA");
        aggressive.tendency = OpponentTendency::Aggressive;
        let vs_aggressive =
            estimate_ceiling(HeuristicKind::HandStrength, &aggressive, &table);
        assert!(vs_aggressive < vs_tight);
    }

    #[test]
    fn test_optimistic_estimate() {
        let table = EquityTable::builtin();
        let open = estimate_ceiling(HeuristicKind::Optimistic, &spot("AA"), &table);
        assert!((open - 0.8507 * 4.5).abs() < 1e-9);

        let facing = spot("AA").with_facing_bet(3.0);
        let h = estimate_ceiling(HeuristicKind::Optimistic, &facing, &table);
        assert!((h - (0.8507 * 4.5 - 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            HeuristicKind::from_name("hand_strength"),
            HeuristicKind::HandStrength
        );
        assert_eq!(
            HeuristicKind::from_name("optimistic"),
            HeuristicKind::Optimistic
        );
    }

    #[test]
    #[should_panic(expected = "Unknown heuristic type")]
    fn test_unknown_heuristic_name_panics() {
        HeuristicKind::from_name("nonsense");
    }
}
