//! Structural properties of the conversion pipeline

use proptest::prelude::*;

use kazoe_core::{apply_case, get_rules, grammar, CaseStyle};

proptest! {
    /// Chunk conversion is consistent with manual digit decomposition
    /// for every value the chunk converter handles.
    #[test]
    fn default_chunk_decomposition(n in 1u64..=999) {
        let rules = get_rules("en").unwrap();
        let tokens = grammar::spell(n, &rules).unwrap();

        let hundreds = n / 100;
        let rest = n % 100;

        let mut expected = Vec::new();
        if hundreds > 0 {
            expected.push(rules.unit(hundreds as usize).to_string());
            expected.push(rules.hundred_word().to_string());
        }
        if (10..20).contains(&rest) {
            expected.push(rules.teen(rest).to_string());
        } else {
            if rest >= 20 {
                expected.push(rules.tens_word(rest / 10).to_string());
            }
            if rest % 10 > 0 {
                expected.push(rules.unit((rest % 10) as usize).to_string());
            }
        }

        prop_assert_eq!(tokens, expected);
    }

    /// Apart mode yields exactly one token per decimal digit, in
    /// reading order.
    #[test]
    fn apart_token_count_matches_digit_count(n in any::<u64>()) {
        let rules = get_rules("en").unwrap();
        let digits = n.to_string();
        let tokens = grammar::spell_digits(n, &rules);
        prop_assert_eq!(tokens.len(), digits.len());
        for (token, digit) in tokens.iter().zip(digits.bytes()) {
            prop_assert_eq!(token.as_str(), rules.unit((digit - b'0') as usize));
        }
    }

    /// The default case style never alters its input.
    #[test]
    fn default_case_style_is_identity(n in any::<u64>()) {
        let rules = get_rules("en").unwrap();
        let joined = grammar::spell(n, &rules).unwrap().join(" ");
        prop_assert_eq!(apply_case(CaseStyle::Default, &joined), joined);
    }

    /// Both grammars accept the full u64 range with the embedded
    /// tables and never produce empty output.
    #[test]
    fn embedded_tables_cover_u64(n in any::<u64>()) {
        let en = get_rules("en").unwrap();
        let ja = get_rules("ja").unwrap();
        prop_assert!(!grammar::spell(n, &en).unwrap().is_empty());
        prop_assert!(!grammar::spell(n, &ja).unwrap().is_empty());
    }

    /// Group order: the most significant group's tokens come first.
    /// Appending three zero digits shifts every magnitude up but keeps
    /// the leading token identical for chunk-aligned values.
    #[test]
    fn scaling_by_thousand_preserves_the_leading_token(n in 1u64..1000) {
        let rules = get_rules("en").unwrap();
        let small = grammar::spell(n, &rules).unwrap();
        let big = grammar::spell(n * 1000, &rules).unwrap();
        prop_assert_eq!(&small[0], &big[0]);
    }
}
