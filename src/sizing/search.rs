//! Bet-size search: A* over candidate sizes, with brute-force
//! enumeration as a correctness oracle.
//!
//! Each candidate size is one node; `g(n)` is its modeled EV and `h(n)`
//! a scenario-level ceiling estimate shared by all siblings, so ordering
//! by `f = g + h` processes the most promising sizes first and the
//! search can stop as soon as `f` drops below the best EV seen. Because
//! the heuristics are not proven admissible the A* result is validated
//! against [`brute_force`] rather than trusted for optimality.

use super::discretize::{candidate_sizes, classify_action, ActionKind, SizingOptions};
use super::ev::{bet_ev, fold_ev};
use super::heuristic::{estimate_ceiling, HeuristicKind};
use super::SpotParams;
use crate::hands::equity::EquityTable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// Which algorithm produced a search outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    /// Informed search ordered by `f = g + h`.
    AStar,
    /// Exhaustive enumeration of every candidate.
    BruteForce,
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMethod::AStar => write!(f, "a_star"),
            SearchMethod::BruteForce => write!(f, "brute_force"),
        }
    }
}

/// Result of one bet-size search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Chosen action.
    pub action: ActionKind,
    /// Chosen bet size in BB (0 for a fold).
    pub bet_size: f64,
    /// Expected value of the chosen action in BB.
    pub ev: f64,
    /// Algorithm that produced this outcome.
    pub search_method: SearchMethod,
    /// Nodes evaluated before termination.
    pub nodes_explored: usize,
}

/// One candidate in the search space. Exists only for the duration of a
/// single search call.
#[derive(Debug, Clone)]
struct SearchNode {
    bet_size: f64,
    ev: f64,
    f_score: f64,
    action: ActionKind,
}

impl SearchNode {
    fn fold(h_score: f64) -> Self {
        Self {
            bet_size: 0.0,
            ev: fold_ev(),
            f_score: fold_ev() + h_score,
            action: ActionKind::Fold,
        }
    }
}

// Max-heap order: higher f first; ties go to the smaller bet size so the
// informed search picks the same representative as the enumeration.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| other.bet_size.total_cmp(&self.bet_size))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

/// Fold-only outcome for an empty candidate space.
fn fold_outcome(method: SearchMethod) -> SearchOutcome {
    SearchOutcome {
        action: ActionKind::Fold,
        bet_size: 0.0,
        ev: fold_ev(),
        search_method: method,
        nodes_explored: 0,
    }
}

/// A* search for the max-EV action.
///
/// All candidate nodes share one heuristic value, so processing in
/// descending `f` order visits descending `g`; tracking the best `g`
/// seen lets the loop stop once `f` falls below it, since no remaining
/// node can do better. An empty candidate set (for instance a zero
/// stack) yields a fold with zero EV.
pub fn a_star(
    spot: &SpotParams<'_>,
    heuristic: HeuristicKind,
    sizing: &SizingOptions,
    equity_table: &EquityTable,
) -> SearchOutcome {
    let candidates = candidate_sizes(spot.own_stack(), spot.facing_bet, sizing);
    if candidates.is_empty() {
        return fold_outcome(SearchMethod::AStar);
    }

    let h_score = estimate_ceiling(heuristic, spot, equity_table);

    let mut best = SearchNode::fold(h_score);
    let mut open_set = BinaryHeap::new();
    for bet_size in candidates {
        let action = classify_action(bet_size, spot.facing_bet);
        if action == ActionKind::Fold {
            continue;
        }
        let g_score = bet_ev(bet_size, action, spot, equity_table);
        open_set.push(SearchNode {
            bet_size,
            ev: g_score,
            f_score: g_score + h_score,
            action,
        });
    }

    let mut nodes_explored = 0;
    while let Some(current) = open_set.pop() {
        nodes_explored += 1;
        if current.ev > best.ev {
            best = current.clone();
        }
        if current.f_score < best.ev {
            break;
        }
    }

    SearchOutcome {
        action: best.action,
        bet_size: best.bet_size,
        ev: best.ev,
        search_method: SearchMethod::AStar,
        nodes_explored,
    }
}

/// Evaluate every candidate with no pruning. Slower than [`a_star`] but
/// with no dependence on the heuristic; the two must agree on the chosen
/// action and EV, and a disagreement indicates a pruning error or an EV
/// model bug.
pub fn brute_force(
    spot: &SpotParams<'_>,
    sizing: &SizingOptions,
    equity_table: &EquityTable,
) -> SearchOutcome {
    let candidates = candidate_sizes(spot.own_stack(), spot.facing_bet, sizing);
    if candidates.is_empty() {
        return fold_outcome(SearchMethod::BruteForce);
    }

    let mut best = SearchNode::fold(0.0);
    let mut nodes_explored = 0;
    for bet_size in candidates {
        let action = classify_action(bet_size, spot.facing_bet);
        if action == ActionKind::Fold {
            continue;
        }
        let ev = bet_ev(bet_size, action, spot, equity_table);
        nodes_explored += 1;
        if ev > best.ev {
            best = SearchNode {
                bet_size,
                ev,
                f_score: ev,
                action,
            };
        }
    }

    SearchOutcome {
        action: best.action,
        bet_size: best.bet_size,
        ev: best.ev,
        search_method: SearchMethod::BruteForce,
        nodes_explored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scenario::{OpponentTendency, Position};

    fn spot<'a>(hand: &'a str, tendency: OpponentTendency) -> SpotParams<'a> {
        SpotParams::new(hand, Position::Button, (50, 50), tendency)
    }

    #[test]
    fn test_a_star_premium_hand_opens() {
        let table = EquityTable::builtin();
        let result = a_star(
            &spot("AA", OpponentTendency::Tight),
            HeuristicKind::HandStrength,
            &SizingOptions::default(),
            &table,
        );
        assert_eq!(result.action, ActionKind::Open);
        assert!(result.bet_size >= 2.0);
        assert!(result.bet_size <= 50.0);
        assert!(result.ev > 0.0);
        assert!(result.nodes_explored >= 1);
        assert_eq!(result.search_method, SearchMethod::AStar);
    }

    #[test]
    fn test_a_star_agrees_with_brute_force() {
        let table = EquityTable::builtin();
        let result_a = a_star(
            &spot("AA", OpponentTendency::Tight),
            HeuristicKind::HandStrength,
            &SizingOptions::default(),
            &table,
        );
        let result_b = brute_force(
            &spot("AA", OpponentTendency::Tight),
            &SizingOptions::default(),
            &table,
        );
        assert_eq!(result_a.action, result_b.action);
        assert!((result_a.bet_size - result_b.bet_size).abs() < 0.01);
        assert!((result_a.ev - result_b.ev).abs() < 0.01);
    }

    #[test]
    fn test_agreement_across_scenarios() {
        let table = EquityTable::builtin();
        let sizing = SizingOptions::default();
        for hand in ["AA", "KAs", "89s", "27o"] {
            for tendency in OpponentTendency::all() {
                for facing in [None, Some(3.0), Some(8.0)] {
                    let mut s = spot(hand, tendency);
                    s.facing_bet = facing;
                    if facing.is_some() {
                        s.position = Position::BigBlind;
                    }
                    for heuristic in [HeuristicKind::HandStrength, HeuristicKind::Optimistic] {
                        let a = a_star(&s, heuristic, &sizing, &table);
                        let b = brute_force(&s, &sizing, &table);
                        assert_eq!(
                            a.action, b.action,
                            "{} vs {:?} facing {:?} ({})",
                            hand, tendency, facing, heuristic
                        );
                        assert!(
                            (a.ev - b.ev).abs() < 1e-9,
                            "{} vs {:?} facing {:?}: {} != {}",
                            hand,
                            tendency,
                            facing,
                            a.ev,
                            b.ev
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_facing_bet_yields_call_raise_or_fold() {
        let table = EquityTable::builtin();
        let s = SpotParams::new("KAs", Position::BigBlind, (50, 50), OpponentTendency::Tight)
            .with_facing_bet(3.0);
        let result = a_star(
            &s,
            HeuristicKind::HandStrength,
            &SizingOptions::default(),
            &table,
        );
        assert!(matches!(
            result.action,
            ActionKind::Fold | ActionKind::Call | ActionKind::Raise
        ));
        if result.action == ActionKind::Call {
            assert!((result.bet_size - 3.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_trash_hand_folds_to_big_bet() {
        let table = EquityTable::builtin();
        let s = SpotParams::new("27o", Position::BigBlind, (50, 50), OpponentTendency::Aggressive)
            .with_facing_bet(8.0);
        let result = a_star(
            &s,
            HeuristicKind::HandStrength,
            &SizingOptions::default(),
            &table,
        );
        assert_eq!(result.action, ActionKind::Fold);
        assert_eq!(result.bet_size, 0.0);
        assert_eq!(result.ev, 0.0);
    }

    #[test]
    fn test_zero_stack_folds() {
        let table = EquityTable::builtin();
        let s = SpotParams::new("AA", Position::Button, (0, 50), OpponentTendency::Tight);
        for result in [
            a_star(&s, HeuristicKind::HandStrength, &SizingOptions::default(), &table),
            brute_force(&s, &SizingOptions::default(), &table),
        ] {
            assert_eq!(result.action, ActionKind::Fold);
            assert_eq!(result.ev, 0.0);
            assert_eq!(result.nodes_explored, 0);
        }
    }

    #[test]
    fn test_nodes_explored_bounded_by_candidates() {
        let table = EquityTable::builtin();
        let s = spot("AA", OpponentTendency::Tight);
        let candidates = candidate_sizes(50, None, &SizingOptions::default());
        let result = a_star(
            &s,
            HeuristicKind::HandStrength,
            &SizingOptions::default(),
            &table,
        );
        assert!(result.nodes_explored <= candidates.len());
        let exhaustive = brute_force(&s, &SizingOptions::default(), &table);
        assert_eq!(exhaustive.nodes_explored, candidates.len());
    }
}
