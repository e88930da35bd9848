//! Property tests for variable name validation.

use proptest::prelude::*;

use envprobe::VarName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics and accepts exactly the names
    /// without `=` or NUL.
    #[test]
    fn property_validation_matches_rule(s in "(?s).{0,64}") {
        let valid = !s.is_empty() && !s.contains('=') && !s.contains('\0');
        prop_assert_eq!(VarName::new(s.clone()).is_ok(), valid);
    }

    /// PROPERTY: a comma-joined list of valid names parses back to the same names.
    #[test]
    fn property_list_preserves_order(
        names in proptest::collection::vec("[A-Z_][A-Z0-9_]{0,15}", 0..6)
    ) {
        let parsed = VarName::parse_list(&names.join(",")).unwrap();
        let parsed: Vec<&str> = parsed.iter().map(VarName::as_str).collect();
        prop_assert_eq!(parsed, names.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
