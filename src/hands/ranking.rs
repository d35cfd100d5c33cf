//! Canonical starting-hand ranking table.
//!
//! All 169 starting-hand classes in a fixed total order (rank 1 = best).
//! Canonical labels write the lower card first for non-pairs ("KAs" is
//! Ace-King suited); user-facing notation like "AKs" is accepted through
//! normalization.

use serde::Serialize;
use std::fmt;

/// Ordered list of the 169 starting-hand classes, rank 1 ("AA") to rank
/// 169 ("23o").
pub const HAND_RANK_LIST: [&str; 169] = [
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "KAs", "QAs", "JAs", "KAo", "QAo", "TAs",
    "66", "JAo", "QKs", "9As", "TAo", "JKs", "8As", "TKs", "5As", "QKo", "9Ao", "JKo", "7As",
    "TKo", "JQs", "6As", "8Ao", "4As", "55", "9Ks", "3As", "6Ao", "8Ks", "TQs", "JQo", "2As",
    "9Ko", "9Qs", "TJs", "7Ks", "5Ao", "4Ao", "7Ao", "6Ks", "44", "TQo", "7Ko", "3Ao", "9Qo",
    "8Qs", "8Ko", "9Js", "TJo", "5Ks", "2Ao", "6Ko", "4Ks", "33", "8Js", "7Qs", "9Jo", "5Ko",
    "3Ks", "8Qo", "9Ts", "5Qs", "2Ks", "6Qs", "9To", "7Js", "3Ko", "3Qs", "4Qs", "8Ts", "4Ko",
    "8Jo", "6Qo", "6Js", "2Qs", "7Qo", "89s", "22", "2Ko", "7Ts", "5Js", "8To", "4Js", "5Qo",
    "7Jo", "4Qo", "79s", "6Ts", "3Qo", "7To", "3Js", "6Jo", "89o", "5Jo", "2Js", "69s", "5Ts",
    "2Qo", "78s", "68s", "79o", "4Ts", "6To", "4Jo", "3Jo", "59s", "67s", "3Ts", "2Ts", "2Jo",
    "78o", "58s", "5To", "69o", "49s", "57s", "39s", "4To", "48s", "29s", "56s", "3To", "68o",
    "59o", "67o", "47s", "45s", "58o", "2To", "49o", "38s", "57o", "39o", "46s", "35s", "28s",
    "37s", "29o", "56o", "34s", "36s", "48o", "47o", "45o", "46o", "27s", "25s", "26s", "24s",
    "37o", "28o", "38o", "36o", "35o", "34o", "23s", "27o", "25o", "26o", "24o", "23o",
];

/// Phrase aliases accepted by [`normalize`], matched after lowercasing and
/// separator cleanup.
const HAND_ALIASES: [(&str, &str); 10] = [
    ("ace king suited", "KAs"),
    ("aks", "KAs"),
    ("ace king offsuit", "KAo"),
    ("ako", "KAo"),
    ("pocket aces", "AA"),
    ("aces", "AA"),
    ("aa", "AA"),
    ("kings", "KK"),
    ("queens", "QQ"),
    ("jj", "JJ"),
];

/// Coarse strength bucket derived from a hand's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    /// Rank 1-30.
    Premium,
    /// Rank 31-60.
    Strong,
    /// Rank 61-87.
    Playable,
    /// Rank 88-116.
    Marginal,
    /// Rank 117-169.
    Weak,
}

/// Rank thresholds for the tiers: Premium/Strong/Playable/Marginal end at
/// these ranks; everything above [`MARGINAL_MAX_RANK`] is Weak.
pub const PREMIUM_MAX_RANK: u8 = 30;
/// Last rank counted as Strong.
pub const STRONG_MAX_RANK: u8 = 60;
/// Last rank counted as Playable.
pub const PLAYABLE_MAX_RANK: u8 = 87;
/// Last rank counted as Marginal.
pub const MARGINAL_MAX_RANK: u8 = 116;

impl Tier {
    /// Map a 1-based rank to its tier.
    pub fn from_rank(rank: u8) -> Self {
        if rank <= PREMIUM_MAX_RANK {
            Tier::Premium
        } else if rank <= STRONG_MAX_RANK {
            Tier::Strong
        } else if rank <= PLAYABLE_MAX_RANK {
            Tier::Playable
        } else if rank <= MARGINAL_MAX_RANK {
            Tier::Marginal
        } else {
            Tier::Weak
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Premium => "Premium",
            Tier::Strong => "Strong",
            Tier::Playable => "Playable",
            Tier::Marginal => "Marginal",
            Tier::Weak => "Weak",
        };
        write!(f, "{}", name)
    }
}

/// Find a canonical label in the rank list.
fn lookup(label: &str) -> Option<&'static str> {
    HAND_RANK_LIST.iter().find(|&&h| h == label).copied()
}

/// Normalize a raw hand string to its canonical label.
///
/// Resolution order: exact match, phrase aliases (case/separator
/// insensitive), two-character-plus-suffix heuristic, then the
/// character-order-swapped variant (the canonical list fixes one card
/// order; user input may give either). Returns `None` for anything
/// unrecognized. Pure function of the input and the fixed hand list.
pub fn normalize(raw: &str) -> Option<&'static str> {
    let h = raw.trim();
    if let Some(exact) = lookup(h) {
        return Some(exact);
    }

    let key = h.replace('-', " ").replace("  ", " ").to_lowercase();
    for (alias, canonical) in HAND_ALIASES {
        if key == alias {
            return lookup(canonical);
        }
    }

    let chars: Vec<char> = h.chars().collect();
    if chars.len() >= 2 {
        let two: String = chars[..2].iter().collect::<String>().to_uppercase();
        let rest: String = chars[2..].iter().collect::<String>().trim().to_lowercase();
        let suited_suffix = matches!(rest.as_str(), "s" | "suit" | "suited" | "");
        let offsuit_suffix = matches!(rest.as_str(), "o" | "off" | "offsuit" | "");

        if suited_suffix {
            if let Some(hit) = lookup(&format!("{}s", two)) {
                return Some(hit);
            }
        }
        if offsuit_suffix {
            if let Some(hit) = lookup(&format!("{}o", two)) {
                return Some(hit);
            }
        }
        if rest.is_empty() || rest.contains("pair") {
            if let Some(hit) = lookup(&two) {
                return Some(hit);
            }
        }

        // Swapped card order, e.g. "AKs" for the canonical "KAs".
        let swapped: String = [chars[1], chars[0]]
            .iter()
            .collect::<String>()
            .to_uppercase();
        if suited_suffix {
            if let Some(hit) = lookup(&format!("{}s", swapped)) {
                return Some(hit);
            }
        }
        if offsuit_suffix {
            if let Some(hit) = lookup(&format!("{}o", swapped)) {
                return Some(hit);
            }
        }
    }

    None
}

/// Return the 1-based rank (1 = best) of a hand, or `None` if the input
/// does not resolve to a canonical hand.
pub fn rank(raw: &str) -> Option<u8> {
    let canonical = normalize(raw)?;
    HAND_RANK_LIST
        .iter()
        .position(|&h| h == canonical)
        .map(|i| (i + 1) as u8)
}

/// Tier of a hand, or `None` if the input is unrecognized.
pub fn tier(raw: &str) -> Option<Tier> {
    rank(raw).map(Tier::from_rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_list_is_complete_and_unique() {
        let unique: HashSet<&str> = HAND_RANK_LIST.iter().copied().collect();
        assert_eq!(unique.len(), 169);
    }

    #[test]
    fn test_tier_thresholds_partition_rank_range() {
        assert_eq!(Tier::from_rank(1), Tier::Premium);
        assert_eq!(Tier::from_rank(30), Tier::Premium);
        assert_eq!(Tier::from_rank(31), Tier::Strong);
        assert_eq!(Tier::from_rank(60), Tier::Strong);
        assert_eq!(Tier::from_rank(61), Tier::Playable);
        assert_eq!(Tier::from_rank(87), Tier::Playable);
        assert_eq!(Tier::from_rank(88), Tier::Marginal);
        assert_eq!(Tier::from_rank(116), Tier::Marginal);
        assert_eq!(Tier::from_rank(117), Tier::Weak);
        assert_eq!(Tier::from_rank(169), Tier::Weak);

        // No gaps: every rank maps to exactly one of the five tiers.
        for r in 1..=169u8 {
            let t = Tier::from_rank(r);
            assert!(matches!(
                t,
                Tier::Premium | Tier::Strong | Tier::Playable | Tier::Marginal | Tier::Weak
            ));
        }
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(normalize("AA"), Some("AA"));
        assert_eq!(normalize("23o"), Some("23o"));
        assert_eq!(rank("AA"), Some(1));
        assert_eq!(rank("23o"), Some(169));
    }

    #[test]
    fn test_alias_round_trip() {
        assert_eq!(normalize("AKs"), Some("KAs"));
        assert_eq!(normalize("KAs"), Some("KAs"));
        assert_eq!(normalize("pocket aces"), Some("AA"));
        assert_eq!(normalize("Ace-King suited"), Some("KAs"));
        assert_eq!(normalize("ako"), Some("KAo"));
    }

    #[test]
    fn test_swapped_card_order() {
        assert_eq!(normalize("72o"), Some("27o"));
        assert_eq!(normalize("QJs"), Some("JQs"));
        assert_eq!(normalize("98s"), Some("89s"));
    }

    #[test]
    fn test_suffix_words() {
        assert_eq!(normalize("KA suited"), Some("KAs"));
        assert_eq!(normalize("KA offsuit"), Some("KAo"));
        assert_eq!(normalize("QQ pair"), Some("QQ"));
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(normalize("invalid-hand"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("Z9s"), None);
        assert_eq!(rank("invalid-hand"), None);
    }

    #[test]
    fn test_every_canonical_hand_resolves_to_itself() {
        for (i, hand) in HAND_RANK_LIST.iter().enumerate() {
            assert_eq!(normalize(hand), Some(*hand));
            assert_eq!(rank(hand), Some((i + 1) as u8));
        }
    }
}
