//! Base-1000 grammar
//!
//! Splits the number into thousand-groups, renders each group through
//! the 0-999 chunk converter and attaches the group's magnitude word.
//! Groups come out least-significant first and are prepended, so the
//! final token order is most-significant first.

use crate::error::{CoreError, Result};
use crate::language::RuleSet;

/// Spell a number with the default base-1000 grammar.
pub fn spell(n: u64, rules: &RuleSet) -> Result<Vec<String>> {
    if n == 0 {
        return Ok(vec![rules.zero().to_string()]);
    }

    let mut result: Vec<String> = Vec::new();
    let mut rest = n;
    let mut group_index = 0usize;

    while rest > 0 {
        let group = rest % 1000;
        if group != 0 {
            let mut tokens = Vec::new();
            push_chunk(group, rules, &mut tokens);
            if group_index > 0 {
                // Zero groups above never reach here, so a missing
                // magnitude word means the table cannot express n.
                let magnitude =
                    rules
                        .magnitude(group_index)
                        .ok_or(CoreError::UnsupportedNumber {
                            number: n,
                            limit: max_expressible(rules),
                        })?;
                tokens.push(magnitude.to_string());
            }
            tokens.append(&mut result);
            result = tokens;
        }
        rest /= 1000;
        group_index += 1;
    }

    Ok(result)
}

/// Largest value the table's magnitude sequence can express.
fn max_expressible(rules: &RuleSet) -> u128 {
    1000u128.pow(rules.magnitude_count() as u32 + 1) - 1
}

/// Convert a 0-999 chunk into tokens.
///
/// Teens are checked before tens: 10-19 come from the teens table and
/// absorb the units digit; 20+ use the tens table (tens digit - 2)
/// followed by a units word when the last digit is nonzero.
fn push_chunk(value: u64, rules: &RuleSet, out: &mut Vec<String>) {
    debug_assert!(value < 1000);

    let hundreds = value / 100;
    let rest = value % 100;
    if hundreds > 0 {
        out.push(rules.unit(hundreds as usize).to_string());
        out.push(rules.hundred_word().to_string());
    }

    if (10..20).contains(&rest) {
        out.push(rules.teen(rest).to_string());
        return;
    }
    if rest >= 20 {
        out.push(rules.tens_word(rest / 10).to_string());
    }

    let unit = rest % 10;
    if unit > 0 {
        out.push(rules.unit(unit as usize).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{get_rules, get_rules_with_overrides, RuleOverrides};

    fn words(n: u64) -> String {
        let rules = get_rules("en").unwrap();
        spell(n, &rules).unwrap().join(" ")
    }

    #[test]
    fn zero_is_the_zero_word() {
        assert_eq!(words(0), "zero");
    }

    #[test]
    fn single_digits() {
        assert_eq!(words(7), "seven");
        assert_eq!(words(9), "nine");
    }

    #[test]
    fn teens_absorb_the_units_digit() {
        assert_eq!(words(10), "ten");
        assert_eq!(words(13), "thirteen");
        assert_eq!(words(19), "nineteen");
    }

    #[test]
    fn tens_and_units() {
        assert_eq!(words(20), "twenty");
        assert_eq!(words(42), "forty two");
        assert_eq!(words(99), "ninety nine");
    }

    #[test]
    fn hundreds() {
        assert_eq!(words(100), "one hundred");
        assert_eq!(words(101), "one hundred one");
        assert_eq!(words(115), "one hundred fifteen");
        assert_eq!(words(999), "nine hundred ninety nine");
    }

    #[test]
    fn groups_are_ordered_most_significant_first() {
        assert_eq!(words(1000), "one thousand");
        assert_eq!(
            words(24434),
            "twenty four thousand four hundred thirty four"
        );
        assert_eq!(
            words(123_456_789),
            "one hundred twenty three million four hundred fifty six thousand seven hundred eighty nine"
        );
    }

    #[test]
    fn zero_groups_emit_no_magnitude() {
        assert_eq!(words(1_000_000), "one million");
        assert_eq!(words(1_000_001), "one million one");
        assert_eq!(words(2_000_300), "two million three hundred");
    }

    #[test]
    fn covers_u64_range() {
        assert_eq!(
            words(u64::MAX),
            "eighteen quintillion four hundred forty six quadrillion seven hundred forty four \
             trillion seventy three billion seven hundred nine million five hundred fifty one \
             thousand six hundred fifteen"
        );
    }

    #[test]
    fn short_magnitude_table_fails_deterministically() {
        let overrides = RuleOverrides {
            magnitudes: Some(vec!["thousand".into()]),
            ..Default::default()
        };
        let rules = get_rules_with_overrides("en", &overrides).unwrap();
        assert!(spell(999_999, &rules).is_ok());
        let err = spell(1_000_000, &rules).unwrap_err();
        assert!(
            matches!(err, CoreError::UnsupportedNumber { number, limit }
                if number == 1_000_000 && limit == 999_999)
        );
    }
}
