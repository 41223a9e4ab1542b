//! Property-based tests for the version parser.

use boostcheck_types::SemanticVersion;
use proptest::prelude::*;

proptest! {
    /// Formatting a triple and parsing it back yields the same triple.
    #[test]
    fn triple_round_trips(major in 0u32..10_000, minor in 0u32..10_000, patch in 0u32..10_000) {
        let version = SemanticVersion::new(major, minor, patch);
        let parsed: SemanticVersion = version.to_string().parse().expect("round-trip parse");
        prop_assert_eq!(parsed, version);
    }

    /// Non-padded inputs reproduce themselves byte-identically.
    #[test]
    fn non_padded_strings_round_trip(major in 0u32..10_000, minor in 0u32..10_000, patch in 0u32..10_000) {
        let input = format!("{major}.{minor}.{patch}");
        let parsed: SemanticVersion = input.parse().expect("parse");
        prop_assert_eq!(parsed.to_string(), input);
    }

    /// Anything that isn't exactly three components is rejected.
    #[test]
    fn wrong_component_counts_fail(parts in prop::collection::vec(0u32..100, 1..6)) {
        prop_assume!(parts.len() != 3);
        let input = parts
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(".");
        prop_assert!(input.parse::<SemanticVersion>().is_err());
    }

    /// Ordering agrees with the numeric triple ordering.
    #[test]
    fn ordering_matches_triples(
        a in (0u32..50, 0u32..50, 0u32..50),
        b in (0u32..50, 0u32..50, 0u32..50),
    ) {
        let va = SemanticVersion::new(a.0, a.1, a.2);
        let vb = SemanticVersion::new(b.0, b.1, b.2);
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
    }
}
