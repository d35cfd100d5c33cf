//! Names of the fixed proposition vocabulary.
//!
//! The fact store itself is an open name-to-bool mapping; these constants
//! cover the propositions the built-in rules mention. Bet-size bucket
//! facts extend the vocabulary with formatted names (see
//! [`facing_bet_bucket`]).

/// Position resolved to one of the two supported seats.
pub const POSITION_VALID: &str = "position_valid";
/// Acting from the Button.
pub const POSITION_BUTTON: &str = "position_Button";
/// Acting from the Big Blind.
pub const POSITION_BIG_BLIND: &str = "position_Big_Blind";

/// Hand rank within the Premium tier.
pub const HAND_STRENGTH_PREMIUM: &str = "hand_strength_premium";
/// Hand rank within Strong or better.
pub const HAND_STRENGTH_STRONG: &str = "hand_strength_strong";
/// Hand rank within Playable or better.
pub const HAND_STRENGTH_PLAYABLE: &str = "hand_strength_playable";
/// Hand rank within Marginal or better.
pub const HAND_STRENGTH_MARGINAL: &str = "hand_strength_marginal";

/// Opponent archetype facts, mutually exclusive.
pub const OPPONENT_TIGHT: &str = "opponent_Tight";
/// Loose opponent.
pub const OPPONENT_LOOSE: &str = "opponent_Loose";
/// Aggressive opponent.
pub const OPPONENT_AGGRESSIVE: &str = "opponent_Aggressive";
/// Passive opponent.
pub const OPPONENT_PASSIVE: &str = "opponent_Passive";
/// Unknown opponent.
pub const OPPONENT_UNKNOWN: &str = "opponent_Unknown";
/// Convenience union of Aggressive and Loose.
pub const OPPONENT_AGGRESSIVE_LOOSE: &str = "opponent_Aggressive_Loose";

/// Stack below 10 BB.
pub const STACK_SIZE_ULTRA_SHORT: &str = "stack_size_ultra_short";
/// Stack in [10, 20) BB.
pub const STACK_SIZE_SHORT: &str = "stack_size_short";
/// Stack of 20 BB or more.
pub const STACK_SIZE_ADEQUATE: &str = "stack_size_adequate";

/// A positive bet is being faced.
pub const FACING_BET: &str = "facing_bet";

/// Intermediate conclusions.
pub const CAN_PROCEED: &str = "can_proceed";
/// Stack is deep enough for the hand.
pub const STACK_OK: &str = "stack_ok";
/// Hand clears the position/opponent strength requirement.
pub const PLAYABLE: &str = "playable";
/// Final verdict.
pub const FINAL_PLAYABLE: &str = "final_playable";
/// Negative gate fact used by the position rule.
pub const NOT_PLAYABLE: &str = "not_playable";

/// Name of a coarse facing-bet size bucket fact ("small", "medium",
/// "large").
pub fn facing_bet_bucket(bucket: &str) -> String {
    format!("facing_bet_{}", bucket)
}
