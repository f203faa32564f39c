//! Digit-separated spelling ("apart" mode)
//!
//! Bypasses grouping entirely: every decimal digit maps independently
//! through the units table, left to right. Numbering system and
//! simplification do not apply.

use crate::language::RuleSet;

/// Spell each decimal digit of `n` as its own token.
pub fn spell_digits(n: u64, rules: &RuleSet) -> Vec<String> {
    n.to_string()
        .bytes()
        .map(|b| rules.unit((b - b'0') as usize).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_rules;

    #[test]
    fn one_token_per_digit_in_reading_order() {
        let rules = get_rules("en").unwrap();
        assert_eq!(
            spell_digits(24434, &rules),
            vec!["two", "four", "four", "three", "four"]
        );
    }

    #[test]
    fn zero_is_a_single_token() {
        let rules = get_rules("en").unwrap();
        assert_eq!(spell_digits(0, &rules), vec!["zero"]);
    }

    #[test]
    fn works_for_any_table() {
        let rules = get_rules("ja").unwrap();
        assert_eq!(spell_digits(105, &rules), vec!["一", "〇", "五"]);
    }
}
