//! Hand playability decision.
//!
//! A fixed ten-rule CNF knowledge base decides whether a starting hand
//! should be played at all, producing a verdict, a human-readable reason,
//! and a full inference trace. Backward chaining is attempted for the
//! intermediate `stack_ok` and final verdicts, with a direct rule
//! evaluation as the authoritative fallback; the trace records which path
//! produced each conclusion.

use super::cnf::{CnfRule, Literal};
use super::facts;
use super::kb::{KbSnapshot, KnowledgeBase};
use super::scenario::{
    derive_facts, OpponentTendency, Position, SHORT_STACK_MAX, ULTRA_SHORT_STACK_MAX,
};
use crate::hands::ranking::{self, Tier};
use serde::Serialize;

/// Result of a playability decision.
#[derive(Debug, Clone, Serialize)]
pub struct PlayabilityResult {
    /// Final verdict.
    pub playable: bool,
    /// Which condition decided the verdict, in plain language.
    pub reason: String,
    /// Canonical form of the input hand, when it resolved.
    pub hand_normalized: Option<String>,
    /// 1-based rank of the hand, when it resolved.
    pub hand_rank: Option<u8>,
    /// Strength tier of the hand, when it resolved.
    pub hand_tier: Option<Tier>,
    /// Snapshot of the rules, facts, and trace.
    pub knowledge_base: KbSnapshot,
    /// Ordered derivation trace.
    pub inference_chain: Vec<String>,
}

/// The fixed rule set: position gate, the position/opponent strength
/// table, stack adequacy, and the final conjunction.
pub fn ruleset() -> Vec<CnfRule> {
    vec![
        CnfRule::new(
            "Rule 1: Valid Position",
            vec![
                vec![
                    Literal::neg(facts::POSITION_VALID),
                    Literal::pos(facts::CAN_PROCEED),
                ],
                vec![
                    Literal::pos(facts::POSITION_VALID),
                    Literal::pos(facts::NOT_PLAYABLE),
                ],
            ],
            "Position must be Button or Big Blind to proceed",
        ),
        CnfRule::new(
            "Rule 2: Button vs Aggressive/Loose",
            vec![vec![
                Literal::neg(facts::POSITION_BUTTON),
                Literal::neg(facts::HAND_STRENGTH_STRONG),
                Literal::neg(facts::OPPONENT_AGGRESSIVE_LOOSE),
                Literal::pos(facts::PLAYABLE),
            ]],
            "Button with Strong+ hands vs Aggressive/Loose opponent → playable",
        ),
        CnfRule::new(
            "Rule 3: Button vs Tight",
            vec![vec![
                Literal::neg(facts::POSITION_BUTTON),
                Literal::neg(facts::HAND_STRENGTH_MARGINAL),
                Literal::neg(facts::OPPONENT_TIGHT),
                Literal::pos(facts::PLAYABLE),
            ]],
            "Button with Marginal+ hands vs Tight opponent → playable",
        ),
        CnfRule::new(
            "Rule 4: Button vs Passive",
            vec![vec![
                Literal::neg(facts::POSITION_BUTTON),
                Literal::neg(facts::HAND_STRENGTH_PLAYABLE),
                Literal::neg(facts::OPPONENT_PASSIVE),
                Literal::pos(facts::PLAYABLE),
            ]],
            "Button with Playable+ hands vs Passive opponent → playable",
        ),
        CnfRule::new(
            "Rule 5: Button vs Unknown",
            vec![vec![
                Literal::neg(facts::POSITION_BUTTON),
                Literal::neg(facts::HAND_STRENGTH_PLAYABLE),
                Literal::neg(facts::OPPONENT_UNKNOWN),
                Literal::pos(facts::PLAYABLE),
            ]],
            "Button with Playable+ hands vs Unknown opponent → playable",
        ),
        CnfRule::new(
            "Rule 6: Big Blind vs Unknown",
            vec![vec![
                Literal::neg(facts::POSITION_BIG_BLIND),
                Literal::neg(facts::HAND_STRENGTH_STRONG),
                Literal::neg(facts::OPPONENT_UNKNOWN),
                Literal::pos(facts::PLAYABLE),
            ]],
            "Big Blind with Strong+ hands vs Unknown opponent → playable",
        ),
        CnfRule::new(
            "Rule 7: Ultra-Short Stack Premium",
            vec![vec![
                Literal::neg(facts::STACK_SIZE_ULTRA_SHORT),
                Literal::neg(facts::HAND_STRENGTH_PREMIUM),
                Literal::pos(facts::PLAYABLE),
            ]],
            "Ultra-short stack (<10 BB) requires Premium hands",
        ),
        CnfRule::new(
            "Rule 8: Short Stack Strong",
            vec![vec![
                Literal::neg(facts::STACK_SIZE_SHORT),
                Literal::neg(facts::HAND_STRENGTH_STRONG),
                Literal::pos(facts::PLAYABLE),
            ]],
            "Short stack (10-20 BB) requires Strong+ hands",
        ),
        CnfRule::new(
            "Rule 9: Adequate Stack",
            vec![vec![
                Literal::neg(facts::STACK_SIZE_ADEQUATE),
                Literal::neg(facts::CAN_PROCEED),
                Literal::pos(facts::STACK_OK),
            ]],
            "Adequate stack (≥20 BB) allows all playable hands",
        ),
        CnfRule::new(
            "Rule 10: Final Decision",
            vec![vec![
                Literal::neg(facts::CAN_PROCEED),
                Literal::neg(facts::STACK_OK),
                Literal::neg(facts::PLAYABLE),
                Literal::pos(facts::FINAL_PLAYABLE),
            ]],
            "All conditions met → hand is playable",
        ),
    ]
}

/// Decide whether a hand should be played at all.
///
/// Invalid inputs never panic: an unrecognized position or hand yields a
/// not-playable verdict with a specific reason and a partial trace.
pub fn decide_playability(
    hand: &str,
    position: &str,
    stack_size: u32,
    tendency: OpponentTendency,
    facing_bet: Option<f64>,
) -> PlayabilityResult {
    let mut kb = KnowledgeBase::new();
    for rule in ruleset() {
        kb.add_rule(rule);
    }

    let scenario = derive_facts(&mut kb, hand, position, stack_size, tendency, facing_bet);
    kb.extend_trace(scenario.facts_added);

    let hand_normalized = ranking::normalize(hand).map(str::to_string);

    let position = match scenario.position {
        Some(p) => p,
        None => {
            return invalid_input_result(
                kb,
                hand_normalized,
                "Invalid position; must be Button or Big Blind.",
            );
        }
    };
    let profile = match scenario.hand {
        Some(p) => p,
        None => {
            return invalid_input_result(kb, None, "Unrecognized hand; cannot evaluate.");
        }
    };

    // Rule 1: a valid position lets the decision proceed. The playable
    // and stack_ok conclusions are established by targeted evaluation
    // below rather than a blanket forward pass: rules 7 and 8 conclude
    // `playable` for short stacks, which would race the position/opponent
    // table for seats it never admits.
    kb.add_fact(facts::CAN_PROCEED, true);
    kb.push_trace("Rule 1: position_valid → can_proceed");

    derive_stack_ok(&mut kb, stack_size);
    derive_playable(&mut kb, position);

    // Rule 10: backward chaining first, direct conjunction as the
    // authoritative fallback; both paths must agree.
    let (chained, chain) = kb.query(facts::FINAL_PLAYABLE);
    let direct = kb.holds(facts::CAN_PROCEED)
        && kb.holds(facts::STACK_OK)
        && kb.holds(facts::PLAYABLE);
    if chained {
        kb.extend_trace(chain);
        kb.push_trace("Rule 10: can_proceed AND stack_ok AND playable → final_playable");
    } else {
        kb.add_fact(facts::FINAL_PLAYABLE, false);
        kb.push_trace("Rule 10: conditions not met → not final_playable");
    }
    let playable = direct;

    let reason = build_reason(&kb, playable, &profile, position, stack_size, tendency);

    let inference_chain = kb.trace().to_vec();
    PlayabilityResult {
        playable,
        reason,
        hand_normalized,
        hand_rank: Some(profile.rank),
        hand_tier: Some(profile.tier),
        knowledge_base: kb.snapshot(),
        inference_chain,
    }
}

/// Result for an input rejected before inference ran.
fn invalid_input_result(
    kb: KnowledgeBase,
    hand_normalized: Option<String>,
    reason: &str,
) -> PlayabilityResult {
    let inference_chain = kb.trace().to_vec();
    PlayabilityResult {
        playable: false,
        reason: reason.to_string(),
        hand_normalized,
        hand_rank: None,
        hand_tier: None,
        knowledge_base: kb.snapshot(),
        inference_chain,
    }
}

/// Establish `stack_ok`: backward chaining when it can prove the goal
/// (adequate stacks via Rule 9), otherwise the stack rules applied
/// directly.
fn derive_stack_ok(kb: &mut KnowledgeBase, stack_size: u32) {
    let (chained, chain) = kb.query(facts::STACK_OK);
    if chained {
        kb.extend_trace(chain);
        kb.push_trace("Backward chaining proved stack_ok");
        return;
    }
    kb.push_trace("Backward chaining could not prove stack_ok; applying stack rules directly");

    if stack_size < ULTRA_SHORT_STACK_MAX {
        if kb.holds(facts::HAND_STRENGTH_PREMIUM) {
            kb.add_fact(facts::STACK_OK, true);
            kb.push_trace("Rule 7: ultra-short stack with premium hand → stack_ok");
        } else {
            kb.add_fact(facts::STACK_OK, false);
            kb.push_trace("Rule 7: ultra-short stack requires premium hand");
        }
    } else if stack_size < SHORT_STACK_MAX {
        if kb.holds(facts::HAND_STRENGTH_STRONG) {
            kb.add_fact(facts::STACK_OK, true);
            kb.push_trace("Rule 8: short stack with strong+ hand → stack_ok");
        } else {
            kb.add_fact(facts::STACK_OK, false);
            kb.push_trace("Rule 8: short stack requires strong+ hand");
        }
    } else {
        kb.add_fact(facts::STACK_OK, true);
        kb.push_trace("Rule 9: adequate stack → stack_ok");
    }
}

/// Evaluate the five playability rules in table order, first match wins.
fn derive_playable(kb: &mut KnowledgeBase, position: Position) {
    let mut derived = false;
    if position == Position::Button {
        if kb.holds(facts::OPPONENT_AGGRESSIVE_LOOSE) && kb.holds(facts::HAND_STRENGTH_STRONG) {
            kb.add_fact(facts::PLAYABLE, true);
            kb.push_trace("Rule 2: Button vs Aggressive/Loose with Strong+ → playable");
            derived = true;
        } else if kb.holds(facts::OPPONENT_TIGHT) && kb.holds(facts::HAND_STRENGTH_MARGINAL) {
            kb.add_fact(facts::PLAYABLE, true);
            kb.push_trace("Rule 3: Button vs Tight with Marginal+ → playable");
            derived = true;
        } else if kb.holds(facts::OPPONENT_PASSIVE) && kb.holds(facts::HAND_STRENGTH_PLAYABLE) {
            kb.add_fact(facts::PLAYABLE, true);
            kb.push_trace("Rule 4: Button vs Passive with Playable+ → playable");
            derived = true;
        } else if kb.holds(facts::OPPONENT_UNKNOWN) && kb.holds(facts::HAND_STRENGTH_PLAYABLE) {
            kb.add_fact(facts::PLAYABLE, true);
            kb.push_trace("Rule 5: Button vs Unknown with Playable+ → playable");
            derived = true;
        }
    }
    if !derived
        && position == Position::BigBlind
        && kb.holds(facts::OPPONENT_UNKNOWN)
        && kb.holds(facts::HAND_STRENGTH_STRONG)
    {
        kb.add_fact(facts::PLAYABLE, true);
        kb.push_trace("Rule 6: Big Blind vs Unknown with Strong+ → playable");
        derived = true;
    }
    if !derived {
        kb.add_fact(facts::PLAYABLE, false);
        kb.push_trace("No rule satisfied → not playable");
    }
}

/// Reason text, in priority order: strength, then stack, then generic.
/// (Invalid position and unrecognized hand return earlier.)
fn build_reason(
    kb: &KnowledgeBase,
    playable: bool,
    profile: &super::scenario::HandProfile,
    position: Position,
    stack_size: u32,
    tendency: OpponentTendency,
) -> String {
    if playable {
        return format!(
            "Play {}: {} hand, {}, {} BB vs {}.",
            profile.canonical, profile.tier, position, stack_size, tendency
        );
    }
    let detail = if !kb.holds(facts::PLAYABLE) {
        format!("too weak for {} vs {}", position, tendency)
    } else if !kb.holds(facts::STACK_OK) {
        format!("stack too short ({} BB)", stack_size)
    } else {
        "does not meet playability criteria".to_string()
    };
    format!("Hand {} ({}) {}.", profile.canonical, profile.tier, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(
        hand: &str,
        position: &str,
        stack: u32,
        tendency: OpponentTendency,
    ) -> PlayabilityResult {
        decide_playability(hand, position, stack, tendency, None)
    }

    #[test]
    fn test_premium_hand_on_button_is_playable() {
        let result = decide("AA", "Button", 50, OpponentTendency::Tight);
        assert!(result.playable);
        assert_eq!(result.hand_rank, Some(1));
        assert_eq!(result.hand_tier, Some(Tier::Premium));
        assert!(result.reason.starts_with("Play AA"));
    }

    #[test]
    fn test_weakest_hand_is_not_playable() {
        let result = decide("72o", "Button", 50, OpponentTendency::Tight);
        assert!(!result.playable);
        assert_eq!(result.hand_tier, Some(Tier::Weak));
        assert!(result.reason.contains("too weak"));
    }

    #[test]
    fn test_invalid_position() {
        let result = decide("AA", "Cutoff", 50, OpponentTendency::Tight);
        assert!(!result.playable);
        assert!(result.reason.contains("Invalid position"));
        // Position is rejected before the hand is examined.
        assert_eq!(result.hand_normalized, Some("AA".to_string()));
        assert!(result
            .inference_chain
            .iter()
            .any(|l| l.contains("position_valid = false")));
    }

    #[test]
    fn test_unrecognized_hand() {
        let result = decide("ZZ", "Button", 50, OpponentTendency::Tight);
        assert!(!result.playable);
        assert!(result.reason.contains("Unrecognized hand"));
        assert_eq!(result.hand_normalized, None);
        assert_eq!(result.hand_rank, None);
    }

    #[test]
    fn test_strength_table_per_opponent() {
        // Rank 61 ("4Ks") is Playable: too weak vs Aggressive (Strong
        // needed), fine vs Passive or Unknown, fine vs Tight (Marginal+).
        assert!(!decide("4Ks", "Button", 50, OpponentTendency::Aggressive).playable);
        assert!(decide("4Ks", "Button", 50, OpponentTendency::Passive).playable);
        assert!(decide("4Ks", "Button", 50, OpponentTendency::Unknown).playable);
        assert!(decide("4Ks", "Button", 50, OpponentTendency::Tight).playable);

        // Rank 89 ("5Js") is Marginal: only the Tight rule admits it.
        assert!(decide("5Js", "Button", 50, OpponentTendency::Tight).playable);
        assert!(!decide("5Js", "Button", 50, OpponentTendency::Passive).playable);
        assert!(!decide("5Js", "Button", 50, OpponentTendency::Loose).playable);
    }

    #[test]
    fn test_big_blind_only_plays_vs_unknown() {
        assert!(decide("AA", "Big Blind", 50, OpponentTendency::Unknown).playable);
        // No rule exists for the Big Blind against a read opponent.
        assert!(!decide("AA", "Big Blind", 50, OpponentTendency::Tight).playable);
        assert!(!decide("AA", "Big Blind", 50, OpponentTendency::Loose).playable);
        assert!(!decide("AA", "Big Blind", 50, OpponentTendency::Aggressive).playable);
        assert!(!decide("AA", "Big Blind", 50, OpponentTendency::Passive).playable);
    }

    #[test]
    fn test_stack_boundaries() {
        // Rank 31 ("8Ao") is Strong but not Premium.
        let ultra = decide("8Ao", "Button", 9, OpponentTendency::Tight);
        assert!(!ultra.playable);
        assert!(ultra.reason.contains("stack too short"));

        // At 10 BB the stack is merely short, and Strong suffices.
        assert!(decide("8Ao", "Button", 10, OpponentTendency::Tight).playable);

        // Rank 61 ("4Ks") is Playable but not Strong: blocked at 19 BB,
        // fine at 20 BB.
        assert!(!decide("4Ks", "Button", 19, OpponentTendency::Tight).playable);
        assert!(decide("4Ks", "Button", 20, OpponentTendency::Tight).playable);
    }

    #[test]
    fn test_monotonicity_in_hand_rank() {
        // Holding scenario fixed, a strictly better-ranked hand is
        // playable whenever a worse one is.
        let scenarios = [
            ("Button", OpponentTendency::Tight, 50u32),
            ("Button", OpponentTendency::Aggressive, 50),
            ("Button", OpponentTendency::Unknown, 15),
            ("Big Blind", OpponentTendency::Unknown, 50),
        ];
        for (position, tendency, stack) in scenarios {
            let mut weaker_played = false;
            // Walk from the worst rank to the best; once any hand is
            // playable, every better-ranked hand must be too.
            for hand in ranking::HAND_RANK_LIST.iter().rev() {
                let playable = decide(hand, position, stack, tendency).playable;
                if weaker_played {
                    assert!(
                        playable,
                        "{} unplayable though a weaker hand passed ({} vs {:?}, {} BB)",
                        hand, position, tendency, stack
                    );
                }
                weaker_played = weaker_played || playable;
            }
        }
    }

    #[test]
    fn test_trace_records_rule_firings() {
        let result = decide("AA", "Button", 50, OpponentTendency::Tight);
        let chain = &result.inference_chain;
        assert!(chain.iter().any(|l| l.contains("Rule 1")));
        assert!(chain.iter().any(|l| l.contains("Rule 3")));
        assert!(chain.iter().any(|l| l.contains("Rule 10")));
        // The snapshot carries the same trace.
        assert_eq!(&result.knowledge_base.inference_chain, chain);
    }

    #[test]
    fn test_backward_and_direct_paths_agree() {
        // The chained and direct evaluations of the final verdict must
        // agree on representative scenarios.
        for (hand, stack, tendency) in [
            ("AA", 50u32, OpponentTendency::Tight),
            ("8Ao", 9, OpponentTendency::Tight),
            ("4Ks", 19, OpponentTendency::Tight),
            ("27o", 50, OpponentTendency::Loose),
        ] {
            let result = decide(hand, "Button", stack, tendency);
            let final_fact = result.knowledge_base.facts.get("final_playable").copied();
            assert_eq!(
                result.playable,
                final_fact == Some(true),
                "paths disagree for {} at {} BB",
                hand,
                stack
            );
        }
    }

    #[test]
    fn test_decision_is_reproducible() {
        let a = decide("JKs", "Button", 25, OpponentTendency::Passive);
        let b = decide("JKs", "Button", 25, OpponentTendency::Passive);
        assert_eq!(a.playable, b.playable);
        assert_eq!(a.inference_chain, b.inference_chain);
        assert_eq!(a.reason, b.reason);
    }
}
