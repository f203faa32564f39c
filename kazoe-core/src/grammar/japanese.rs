//! Recursive base-10000 grammar
//!
//! East Asian numbering groups by 10^4: the magnitude ladder is 万,
//! 億, 兆, 京 (10000^1..4 in the embedded table). Each magnitude's
//! multiplier is itself spelled with this grammar, then the magnitude
//! label follows. The 0-9999 residue goes through the sub-chunk
//! converter, whose thousands/hundreds/tens tables carry the
//! multiplier word directly (千, 二千, ...), so no digit word precedes
//! them.

use crate::error::{CoreError, Result};
use crate::language::RuleSet;

/// Spell a number with the recursive base-10000 grammar.
pub fn spell(n: u64, rules: &RuleSet) -> Result<Vec<String>> {
    if n == 0 {
        return Ok(vec![rules.zero().to_string()]);
    }

    // Reject anything past the magnitude ladder before recursing, so
    // a multiplier can never itself need a missing magnitude. Table
    // validation caps the ladder at 4 entries, keeping this in u128
    // range.
    let limit = 10000u128.pow(rules.magnitude_count() as u32 + 1);
    if (n as u128) >= limit {
        return Err(CoreError::UnsupportedNumber {
            number: n,
            limit: limit - 1,
        });
    }

    let mut out = Vec::new();
    push_number(n, rules, &mut out);
    Ok(out)
}

fn push_number(n: u64, rules: &RuleSet, out: &mut Vec<String>) {
    let mut rest = n as u128;

    for level in (1..=rules.magnitude_count()).rev() {
        let value = 10000u128.pow(level as u32);
        if rest >= value {
            // Multiplier is strictly smaller than n and below the
            // lowest magnitude after the top-level bound check, so
            // this recursion is bounded.
            push_number((rest / value) as u64, rules, out);
            if let Some(label) = rules.magnitude(level) {
                out.push(label.to_string());
            }
            rest %= value;
        }
    }

    push_sub_chunk(rest as u64, rules, out);
}

/// Convert a 0-9999 sub-chunk into tokens.
fn push_sub_chunk(value: u64, rules: &RuleSet, out: &mut Vec<String>) {
    debug_assert!(value < 10000);

    let mut rest = value;
    if rest >= 1000 {
        out.push(rules.thousands_multiplier(rest / 1000).to_string());
        rest %= 1000;
    }
    if rest >= 100 {
        out.push(rules.hundreds_multiplier(rest / 100).to_string());
        rest %= 100;
    }
    if rest >= 10 {
        out.push(rules.tens_multiplier(rest / 10).to_string());
        rest %= 10;
    }
    if rest > 0 {
        out.push(rules.unit(rest as usize).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{get_rules, get_rules_with_overrides, RuleOverrides};

    fn words(n: u64) -> String {
        let rules = get_rules("ja").unwrap();
        spell(n, &rules).unwrap().join("")
    }

    #[test]
    fn zero_is_the_zero_word() {
        assert_eq!(words(0), "〇");
    }

    #[test]
    fn digits_and_multipliers() {
        assert_eq!(words(5), "五");
        assert_eq!(words(10), "十");
        assert_eq!(words(11), "十一");
        assert_eq!(words(38), "三十八");
        assert_eq!(words(300), "三百");
        assert_eq!(words(1000), "千");
        assert_eq!(words(8000), "八千");
    }

    #[test]
    fn sub_chunks_compose() {
        assert_eq!(words(4434), "四千四百三十四");
        assert_eq!(words(9999), "九千九百九十九");
    }

    #[test]
    fn magnitudes_take_recursive_multipliers() {
        assert_eq!(words(10000), "一万");
        assert_eq!(words(10001), "一万一");
        assert_eq!(words(24434), "二万四千四百三十四");
        assert_eq!(words(100_000_000), "一億");
        assert_eq!(words(123_456_789), "一億二千三百四十五万六千七百八十九");
    }

    #[test]
    fn intermediate_zero_magnitudes_are_skipped() {
        // 100000001 has empty 万 group
        assert_eq!(words(100_000_001), "一億一");
    }

    #[test]
    fn covers_u64_range() {
        // 18446744073709551615 = 1844京 6744兆 0737億 0955万 1615
        assert_eq!(
            words(u64::MAX),
            "千八百四十四京六千七百四十四兆七百三十七億九百五十五万千六百十五"
        );
    }

    #[test]
    fn short_magnitude_table_fails_deterministically() {
        let overrides = RuleOverrides {
            magnitudes: Some(vec!["万".into()]),
            ..Default::default()
        };
        let rules = get_rules_with_overrides("ja", &overrides).unwrap();
        assert!(spell(99_999_999, &rules).is_ok());
        let err = spell(100_000_000, &rules).unwrap_err();
        assert!(
            matches!(err, CoreError::UnsupportedNumber { number, limit }
                if number == 100_000_000 && limit == 99_999_999)
        );
    }
}
