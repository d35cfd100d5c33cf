//! Scenario fact derivation.
//!
//! Turns raw scenario inputs (hand, position, stack, opponent tendency,
//! optional facing bet) into base facts for the knowledge base.

use super::facts;
use super::kb::KnowledgeBase;
use crate::hands::ranking::{self, Tier, MARGINAL_MAX_RANK, PLAYABLE_MAX_RANK, PREMIUM_MAX_RANK, STRONG_MAX_RANK};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Stack below this many BB is ultra-short.
pub const ULTRA_SHORT_STACK_MAX: u32 = 10;
/// Stack below this many BB (and at least [`ULTRA_SHORT_STACK_MAX`]) is short.
pub const SHORT_STACK_MAX: u32 = 20;

/// Facing-bet bucket boundaries in BB.
pub const FACING_BET_SMALL_MAX: f64 = 3.0;
/// Upper bound of the medium facing-bet bucket.
pub const FACING_BET_MEDIUM_MAX: f64 = 6.0;

/// One of the two heads-up seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    /// The button (small blind, acts first preflop).
    Button,
    /// The big blind.
    BigBlind,
}

impl Position {
    /// Parse a position string, accepting common synonyms.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_lowercase().replace('_', " ");
        match key.as_str() {
            "button" | "btn" => Some(Position::Button),
            "big blind" | "bb" | "bigblind" => Some(Position::BigBlind),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Button => write!(f, "Button"),
            Position::BigBlind => write!(f, "Big Blind"),
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

/// Error for an unrecognized position string.
#[derive(Debug, Clone)]
pub struct ParsePositionError(pub String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized position: {}", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

/// Discrete opponent tendency archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OpponentTendency {
    /// Folds often, plays few hands.
    Tight,
    /// Calls and raises with a wide range.
    Loose,
    /// Raises frequently.
    Aggressive,
    /// Calls much, rarely raises.
    Passive,
    /// No read; balanced default.
    Unknown,
}

impl OpponentTendency {
    /// All five archetypes.
    pub fn all() -> [OpponentTendency; 5] {
        [
            OpponentTendency::Tight,
            OpponentTendency::Loose,
            OpponentTendency::Aggressive,
            OpponentTendency::Passive,
            OpponentTendency::Unknown,
        ]
    }
}

impl fmt::Display for OpponentTendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpponentTendency::Tight => "Tight",
            OpponentTendency::Loose => "Loose",
            OpponentTendency::Aggressive => "Aggressive",
            OpponentTendency::Passive => "Passive",
            OpponentTendency::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OpponentTendency {
    type Err = ParseTendencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tight" => Ok(OpponentTendency::Tight),
            "loose" => Ok(OpponentTendency::Loose),
            "aggressive" => Ok(OpponentTendency::Aggressive),
            "passive" => Ok(OpponentTendency::Passive),
            "unknown" => Ok(OpponentTendency::Unknown),
            _ => Err(ParseTendencyError(s.to_string())),
        }
    }
}

/// Error for an unrecognized tendency string.
#[derive(Debug, Clone)]
pub struct ParseTendencyError(pub String);

impl fmt::Display for ParseTendencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized opponent tendency: {}", self.0)
    }
}

impl std::error::Error for ParseTendencyError {}

/// Resolved hand identity used by decision results.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HandProfile {
    /// Canonical label.
    pub canonical: &'static str,
    /// 1-based rank, 1 = best.
    pub rank: u8,
    /// Strength tier derived from the rank.
    pub tier: Tier,
}

/// Outcome of fact derivation: what resolved, and the base facts recorded.
#[derive(Debug, Clone)]
pub struct ScenarioFacts {
    /// Resolved position, if the string was recognized.
    pub position: Option<Position>,
    /// Resolved hand, if recognized (only attempted for a valid position).
    pub hand: Option<HandProfile>,
    /// Human-readable record of the base facts added, in order.
    pub facts_added: Vec<String>,
}

/// Derive base facts from scenario inputs into the knowledge base.
///
/// An unrecognized position records only `position_valid = false` and
/// returns early; an unrecognized hand stops after the position facts.
/// Otherwise records cumulative strength facts, mutually-exclusive
/// opponent facts plus the Aggressive/Loose union, the three stack
/// buckets, and facing-bet facts when a positive bet size is supplied.
pub fn derive_facts(
    kb: &mut KnowledgeBase,
    hand: &str,
    position: &str,
    stack_size: u32,
    tendency: OpponentTendency,
    facing_bet: Option<f64>,
) -> ScenarioFacts {
    let mut facts_added = Vec::new();

    let parsed_position = Position::parse(position);
    match parsed_position {
        Some(Position::Button) => {
            kb.add_fact(facts::POSITION_BUTTON, true);
            kb.add_fact(facts::POSITION_BIG_BLIND, false);
            facts_added.push("position_Button = true".to_string());
        }
        Some(Position::BigBlind) => {
            kb.add_fact(facts::POSITION_BUTTON, false);
            kb.add_fact(facts::POSITION_BIG_BLIND, true);
            facts_added.push("position_Big_Blind = true".to_string());
        }
        None => {
            kb.add_fact(facts::POSITION_VALID, false);
            facts_added.push("position_valid = false".to_string());
            return ScenarioFacts {
                position: None,
                hand: None,
                facts_added,
            };
        }
    }
    kb.add_fact(facts::POSITION_VALID, true);
    facts_added.push("position_valid = true".to_string());

    let rank = match ranking::rank(hand) {
        Some(r) => r,
        None => {
            return ScenarioFacts {
                position: parsed_position,
                hand: None,
                facts_added,
            };
        }
    };
    let canonical = ranking::normalize(hand).unwrap_or("?");
    let tier = Tier::from_rank(rank);

    // Cumulative strength facts: each tier includes the stricter ones.
    kb.add_fact(facts::HAND_STRENGTH_PREMIUM, rank <= PREMIUM_MAX_RANK);
    kb.add_fact(facts::HAND_STRENGTH_STRONG, rank <= STRONG_MAX_RANK);
    kb.add_fact(facts::HAND_STRENGTH_PLAYABLE, rank <= PLAYABLE_MAX_RANK);
    kb.add_fact(facts::HAND_STRENGTH_MARGINAL, rank <= MARGINAL_MAX_RANK);
    facts_added.push(format!(
        "hand_strength_{} = true (rank {})",
        tier.to_string().to_lowercase(),
        rank
    ));

    kb.add_fact(facts::OPPONENT_TIGHT, tendency == OpponentTendency::Tight);
    kb.add_fact(facts::OPPONENT_LOOSE, tendency == OpponentTendency::Loose);
    kb.add_fact(
        facts::OPPONENT_AGGRESSIVE,
        tendency == OpponentTendency::Aggressive,
    );
    kb.add_fact(facts::OPPONENT_PASSIVE, tendency == OpponentTendency::Passive);
    kb.add_fact(facts::OPPONENT_UNKNOWN, tendency == OpponentTendency::Unknown);
    kb.add_fact(
        facts::OPPONENT_AGGRESSIVE_LOOSE,
        matches!(
            tendency,
            OpponentTendency::Aggressive | OpponentTendency::Loose
        ),
    );
    facts_added.push(format!("opponent_{} = true", tendency));

    kb.add_fact(
        facts::STACK_SIZE_ULTRA_SHORT,
        stack_size < ULTRA_SHORT_STACK_MAX,
    );
    kb.add_fact(
        facts::STACK_SIZE_SHORT,
        (ULTRA_SHORT_STACK_MAX..SHORT_STACK_MAX).contains(&stack_size),
    );
    kb.add_fact(facts::STACK_SIZE_ADEQUATE, stack_size >= SHORT_STACK_MAX);
    facts_added.push(format!(
        "stack_size_adequate = {}",
        stack_size >= SHORT_STACK_MAX
    ));

    match facing_bet {
        Some(bet) if bet > 0.0 => {
            kb.add_fact(facts::FACING_BET, true);
            kb.add_fact(facts::facing_bet_bucket("small"), bet <= FACING_BET_SMALL_MAX);
            kb.add_fact(
                facts::facing_bet_bucket("medium"),
                bet > FACING_BET_SMALL_MAX && bet <= FACING_BET_MEDIUM_MAX,
            );
            kb.add_fact(facts::facing_bet_bucket("large"), bet > FACING_BET_MEDIUM_MAX);
            facts_added.push(format!("facing_bet = true ({:.1} BB)", bet));
        }
        _ => {
            kb.add_fact(facts::FACING_BET, false);
            facts_added.push("facing_bet = false".to_string());
        }
    }

    ScenarioFacts {
        position: parsed_position,
        hand: Some(HandProfile {
            canonical,
            rank,
            tier,
        }),
        facts_added,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_synonyms() {
        assert_eq!(Position::parse("Button"), Some(Position::Button));
        assert_eq!(Position::parse("btn"), Some(Position::Button));
        assert_eq!(Position::parse("Big Blind"), Some(Position::BigBlind));
        assert_eq!(Position::parse("big_blind"), Some(Position::BigBlind));
        assert_eq!(Position::parse("BB"), Some(Position::BigBlind));
        assert_eq!(Position::parse("cutoff"), None);
    }

    #[test]
    fn test_tendency_parsing() {
        assert_eq!(
            "aggressive".parse::<OpponentTendency>().unwrap(),
            OpponentTendency::Aggressive
        );
        assert_eq!(
            " Tight ".parse::<OpponentTendency>().unwrap(),
            OpponentTendency::Tight
        );
        assert!("maniac".parse::<OpponentTendency>().is_err());
    }

    #[test]
    fn test_invalid_position_returns_early() {
        let mut kb = KnowledgeBase::new();
        let facts = derive_facts(&mut kb, "AA", "cutoff", 50, OpponentTendency::Tight, None);
        assert!(facts.position.is_none());
        assert!(facts.hand.is_none());
        assert_eq!(kb.get_fact("position_valid"), Some(false));
        // No hand or stack facts were derived.
        assert_eq!(kb.get_fact("hand_strength_premium"), None);
        assert_eq!(kb.get_fact("stack_size_adequate"), None);
    }

    #[test]
    fn test_unrecognized_hand_stops_after_position() {
        let mut kb = KnowledgeBase::new();
        let facts = derive_facts(
            &mut kb,
            "not-a-hand",
            "Button",
            50,
            OpponentTendency::Tight,
            None,
        );
        assert_eq!(facts.position, Some(Position::Button));
        assert!(facts.hand.is_none());
        assert_eq!(kb.get_fact("position_valid"), Some(true));
        assert_eq!(kb.get_fact("hand_strength_premium"), None);
    }

    #[test]
    fn test_strength_facts_are_cumulative() {
        // Rank 31 is Strong: strong/playable/marginal hold, premium does not.
        let mut kb = KnowledgeBase::new();
        let facts = derive_facts(&mut kb, "8Ao", "Button", 50, OpponentTendency::Unknown, None);
        assert_eq!(facts.hand.unwrap().rank, 31);
        assert_eq!(kb.get_fact("hand_strength_premium"), Some(false));
        assert_eq!(kb.get_fact("hand_strength_strong"), Some(true));
        assert_eq!(kb.get_fact("hand_strength_playable"), Some(true));
        assert_eq!(kb.get_fact("hand_strength_marginal"), Some(true));
    }

    #[test]
    fn test_opponent_facts_mutually_exclusive() {
        let mut kb = KnowledgeBase::new();
        derive_facts(&mut kb, "AA", "Button", 50, OpponentTendency::Loose, None);
        assert_eq!(kb.get_fact("opponent_Loose"), Some(true));
        assert_eq!(kb.get_fact("opponent_Tight"), Some(false));
        assert_eq!(kb.get_fact("opponent_Aggressive"), Some(false));
        assert_eq!(kb.get_fact("opponent_Passive"), Some(false));
        assert_eq!(kb.get_fact("opponent_Unknown"), Some(false));
        assert_eq!(kb.get_fact("opponent_Aggressive_Loose"), Some(true));
    }

    #[test]
    fn test_stack_bucket_boundaries() {
        for (stack, ultra, short, adequate) in [
            (9u32, true, false, false),
            (10, false, true, false),
            (19, false, true, false),
            (20, false, false, true),
            (50, false, false, true),
        ] {
            let mut kb = KnowledgeBase::new();
            derive_facts(&mut kb, "AA", "Button", stack, OpponentTendency::Unknown, None);
            assert_eq!(kb.get_fact("stack_size_ultra_short"), Some(ultra), "stack {}", stack);
            assert_eq!(kb.get_fact("stack_size_short"), Some(short), "stack {}", stack);
            assert_eq!(kb.get_fact("stack_size_adequate"), Some(adequate), "stack {}", stack);
        }
    }

    #[test]
    fn test_facing_bet_buckets() {
        let mut kb = KnowledgeBase::new();
        derive_facts(&mut kb, "AA", "Big Blind", 50, OpponentTendency::Unknown, Some(3.0));
        assert_eq!(kb.get_fact("facing_bet"), Some(true));
        assert_eq!(kb.get_fact("facing_bet_small"), Some(true));
        assert_eq!(kb.get_fact("facing_bet_medium"), Some(false));

        let mut kb = KnowledgeBase::new();
        derive_facts(&mut kb, "AA", "Big Blind", 50, OpponentTendency::Unknown, Some(8.0));
        assert_eq!(kb.get_fact("facing_bet_large"), Some(true));

        // Absent or nonpositive bet means no bet is faced.
        let mut kb = KnowledgeBase::new();
        derive_facts(&mut kb, "AA", "Big Blind", 50, OpponentTendency::Unknown, None);
        assert_eq!(kb.get_fact("facing_bet"), Some(false));
        let mut kb = KnowledgeBase::new();
        derive_facts(&mut kb, "AA", "Big Blind", 50, OpponentTendency::Unknown, Some(0.0));
        assert_eq!(kb.get_fact("facing_bet"), Some(false));
    }
}
