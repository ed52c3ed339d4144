//! Tier name to display color lookup.

/// Tailwind background classes for the tier vocabulary, in display order.
pub const TIER_COLORS: [(&str, &str); 6] = [
    ("S", "bg-red-500"),
    ("A", "bg-green-500"),
    ("B", "bg-blue-500"),
    ("C", "bg-indigo-500"),
    ("D", "bg-purple-500"),
    ("E", "bg-pink-500"),
];

/// Neutral class used for tier names outside [`TIER_COLORS`].
pub const FALLBACK_TIER_COLOR: &str = "bg-gray-500";

#[must_use]
pub fn tier_color(name: &str) -> Option<&'static str> {
    TIER_COLORS
        .iter()
        .find(|(tier, _)| *tier == name)
        .map(|(_, class)| *class)
}

/// Color class for a tier header, falling back to [`FALLBACK_TIER_COLOR`].
#[must_use]
pub fn tier_color_or_fallback(name: &str) -> &'static str {
    tier_color(name).unwrap_or(FALLBACK_TIER_COLOR)
}

#[must_use]
pub fn is_known_tier(name: &str) -> bool {
    tier_color(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_standard_tier_has_a_distinct_color() {
        for (tier, class) in TIER_COLORS {
            assert_eq!(tier_color(tier), Some(class));
            assert_ne!(class, FALLBACK_TIER_COLOR);
        }
        let mut classes: Vec<_> = TIER_COLORS.iter().map(|(_, c)| *c).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), TIER_COLORS.len());
    }

    #[test]
    fn unknown_tiers_use_the_neutral_fallback() {
        assert_eq!(tier_color("F"), None);
        assert_eq!(tier_color("s"), None);
        assert_eq!(tier_color_or_fallback("F"), FALLBACK_TIER_COLOR);
        assert_eq!(tier_color_or_fallback("S"), "bg-red-500");
        assert!(!is_known_tier("SS"));
        assert!(is_known_tier("E"));
    }
}
