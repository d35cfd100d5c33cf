//! Hand equity lookup.
//!
//! Win probabilities for the 169 starting-hand classes in a heads-up
//! all-in scenario. The table is built once at process start (from the
//! embedded data or an external JSON source) and passed by reference into
//! the EV model; it is never mutated after load, so it is safe to share
//! across parallel decision calls.

use super::ranking::{normalize, HAND_RANK_LIST};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Equity used when a hand is missing from the table (coin flip).
pub const DEFAULT_EQUITY: f64 = 0.5;

/// Approximate equity vs a random hand for all 169 hand classes.
/// Order: pairs (22-AA), suited grouped by low card (32s..A2s, 43s..A3s,
/// ..., AKs), offsuit in the same layout.
const EQUITY_VS_RANDOM: [f64; 169] = [
    // Pairs: 22-AA
    0.5021, 0.5369, 0.5706, 0.6032, 0.6348, 0.6655, 0.6951, 0.7236,
    0.7510, 0.7773, 0.7973, 0.8227, 0.8507,
    // Suited hands (78): 32s..A2s, 43s..A3s, ..., AKs
    0.3744, 0.3840, 0.3939, 0.4041, 0.4147, 0.4257, 0.4371, 0.4491, 0.4616, 0.4747, 0.4884, 0.5028,
    0.3909, 0.4010, 0.4114, 0.4222, 0.4335, 0.4453, 0.4577, 0.4707, 0.4844, 0.4988, 0.5140,
    0.4078, 0.4184, 0.4295, 0.4410, 0.4531, 0.4659, 0.4793, 0.4934, 0.5083, 0.5241,
    0.4249, 0.4359, 0.4474, 0.4595, 0.4722, 0.4856, 0.4998, 0.5148, 0.5307,
    0.4424, 0.4539, 0.4659, 0.4786, 0.4920, 0.5061, 0.5211, 0.5371,
    0.4604, 0.4724, 0.4851, 0.4984, 0.5126, 0.5276, 0.5436,
    0.4789, 0.4915, 0.5048, 0.5189, 0.5339, 0.5499,
    0.4981, 0.5113, 0.5253, 0.5402, 0.5562,
    0.5181, 0.5320, 0.5469, 0.5628,
    0.5391, 0.5538, 0.5697,
    0.5611, 0.5768,
    0.5844,
    // Offsuit hands (78): 32o..A2o, 43o..A3o, ..., AKo
    0.3457, 0.3551, 0.3648, 0.3749, 0.3854, 0.3963, 0.4077, 0.4196, 0.4322, 0.4454, 0.4593, 0.4740,
    0.3617, 0.3716, 0.3818, 0.3925, 0.4037, 0.4154, 0.4277, 0.4407, 0.4544, 0.4689, 0.4843,
    0.3782, 0.3885, 0.3993, 0.4106, 0.4225, 0.4350, 0.4483, 0.4623, 0.4772, 0.4931,
    0.3949, 0.4057, 0.4170, 0.4289, 0.4414, 0.4547, 0.4688, 0.4838, 0.4998,
    0.4121, 0.4233, 0.4352, 0.4477, 0.4609, 0.4750, 0.4899, 0.5059,
    0.4297, 0.4415, 0.4540, 0.4672, 0.4812, 0.4961, 0.5121,
    0.4479, 0.4603, 0.4735, 0.4874, 0.5023, 0.5183,
    0.4668, 0.4799, 0.4938, 0.5086, 0.5245,
    0.4866, 0.5003, 0.5150, 0.5309,
    0.5073, 0.5219, 0.5377,
    0.5291, 0.5448,
    0.5522,
];

/// Numeric rank of a card character (2 -> 0, ..., A -> 12).
fn card_rank(c: char) -> Option<u8> {
    match c {
        '2' => Some(0),
        '3' => Some(1),
        '4' => Some(2),
        '5' => Some(3),
        '6' => Some(4),
        '7' => Some(5),
        '8' => Some(6),
        '9' => Some(7),
        'T' => Some(8),
        'J' => Some(9),
        'Q' => Some(10),
        'K' => Some(11),
        'A' => Some(12),
        _ => None,
    }
}

/// Index into [`EQUITY_VS_RANDOM`] for a canonical hand label.
fn equity_index(label: &str) -> Option<usize> {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    let r1 = card_rank(chars[0])?;
    let r2 = card_rank(chars[1])?;
    let (high, low) = (r1.max(r2) as usize, r1.min(r2) as usize);

    if high == low {
        return Some(low);
    }
    // Rows are grouped by low card: the row for low card l holds 12 - l
    // entries and starts after all lower rows.
    let row_offset = low * 12 - low * (low.saturating_sub(1)) / 2;
    let within = high - low - 1;
    let idx = row_offset + within;
    match chars.get(2) {
        Some('s') => Some(13 + idx),
        Some('o') => Some(13 + 78 + idx),
        _ => None,
    }
}

/// Immutable mapping from canonical hand label to win probability.
#[derive(Debug, Clone)]
pub struct EquityTable {
    map: FxHashMap<String, f64>,
}

impl EquityTable {
    /// Build the table from the embedded equity-vs-random data, covering
    /// all 169 canonical hands.
    pub fn builtin() -> Self {
        let mut map = FxHashMap::default();
        for hand in HAND_RANK_LIST {
            if let Some(idx) = equity_index(hand) {
                map.insert(hand.to_string(), EQUITY_VS_RANDOM[idx]);
            }
        }
        Self { map }
    }

    /// Parse a table from a JSON object mapping hand labels to equities.
    /// Keys are normalized to canonical labels; values must lie in [0, 1].
    pub fn from_json_str(json: &str) -> Result<Self, EquityError> {
        let raw: FxHashMap<String, f64> =
            serde_json::from_str(json).map_err(|e| EquityError::ParseError(e.to_string()))?;

        let mut map = FxHashMap::default();
        for (hand, value) in raw {
            let canonical =
                normalize(&hand).ok_or_else(|| EquityError::UnknownHand(hand.clone()))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(EquityError::OutOfRange { hand, value });
            }
            map.insert(canonical.to_string(), value);
        }
        Ok(Self { map })
    }

    /// Load a JSON table from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EquityError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| EquityError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Equity of a hand given in any accepted notation. Unrecognized or
    /// missing hands default to [`DEFAULT_EQUITY`].
    pub fn equity(&self, hand: &str) -> f64 {
        normalize(hand)
            .and_then(|canonical| self.map.get(canonical).copied())
            .unwrap_or(DEFAULT_EQUITY)
    }

    /// Raw lookup by canonical label, without normalization or defaulting.
    pub fn get(&self, canonical: &str) -> Option<f64> {
        self.map.get(canonical).copied()
    }

    /// Number of hands in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for EquityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Error type for equity table loading.
#[derive(Debug, Clone)]
pub enum EquityError {
    /// File could not be read.
    IoError(String),
    /// JSON was malformed.
    ParseError(String),
    /// A key did not resolve to a canonical hand.
    UnknownHand(String),
    /// A value fell outside [0, 1].
    OutOfRange {
        /// The offending hand label.
        hand: String,
        /// The rejected value.
        value: f64,
    },
}

impl std::fmt::Display for EquityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {}", e),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::UnknownHand(h) => write!(f, "Unknown hand label: {}", h),
            Self::OutOfRange { hand, value } => {
                write!(f, "Equity {} for {} outside [0, 1]", value, hand)
            }
        }
    }
}

impl std::error::Error for EquityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_hands() {
        let table = EquityTable::builtin();
        assert_eq!(table.len(), 169);
        for hand in HAND_RANK_LIST {
            let e = table.get(hand).unwrap();
            assert!((0.0..=1.0).contains(&e), "{} out of range: {}", hand, e);
        }
    }

    #[test]
    fn test_known_equities() {
        let table = EquityTable::builtin();
        assert!((table.equity("AA") - 0.8507).abs() < 1e-9);
        assert!((table.equity("KK") - 0.8227).abs() < 1e-9);
        assert!((table.equity("22") - 0.5021).abs() < 1e-9);
        // "AKs" normalizes to the canonical "KAs".
        assert!((table.equity("AKs") - 0.5844).abs() < 1e-9);
    }

    #[test]
    fn test_stronger_pairs_have_more_equity() {
        let table = EquityTable::builtin();
        assert!(table.equity("AA") > table.equity("KK"));
        assert!(table.equity("KK") > table.equity("22"));
        assert!(table.equity("AA") > table.equity("23o"));
    }

    #[test]
    fn test_unknown_hand_defaults_to_coin_flip() {
        let table = EquityTable::builtin();
        assert_eq!(table.equity("XX"), DEFAULT_EQUITY);
        assert_eq!(table.equity(""), DEFAULT_EQUITY);
    }

    #[test]
    fn test_from_json() {
        let table = EquityTable::from_json_str(r#"{"AA": 0.85, "AKs": 0.67}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert!((table.equity("AA") - 0.85).abs() < 1e-9);
        // Stored under the canonical label.
        assert!((table.equity("KAs") - 0.67).abs() < 1e-9);
        // Missing hands fall back to the default.
        assert_eq!(table.equity("72o"), DEFAULT_EQUITY);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            EquityTable::from_json_str(r#"{"AA": 1.2}"#),
            Err(EquityError::OutOfRange { .. })
        ));
        assert!(matches!(
            EquityTable::from_json_str(r#"{"not-a-hand": 0.5}"#),
            Err(EquityError::UnknownHand(_))
        ));
    }
}
