//! Validated runtime rule table
//!
//! A [`RuleSet`] is built once from a parsed configuration and is the
//! only table form the grammars see. Validation at construction time
//! guarantees the digit-indexed accessors never go out of range, so
//! conversion can never fail on table shape.

use crate::error::Result;
use crate::language::config::{NumberingSystem, RuleConfig};

/// Immutable, validated rule table for one language.
///
/// Safely shareable across threads; nothing is mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct RuleSet {
    code: String,
    name: String,
    numbering_system: NumberingSystem,
    units: Vec<String>,
    teens: Vec<String>,
    tens: Vec<String>,
    hundred_word: Option<String>,
    hundreds: Vec<String>,
    thousands: Vec<String>,
    magnitudes: Vec<String>,
    simply_word: String,
    simplify_triggers: Vec<String>,
}

impl RuleSet {
    /// Validate a configuration and build the runtime table
    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        config.validate()?;
        let rules = &config.rules;
        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            numbering_system: rules.numbering_system,
            units: rules.units.clone(),
            teens: rules.teens.clone(),
            tens: rules.tens.clone(),
            hundred_word: rules.hundred_word.clone(),
            hundreds: rules.hundreds.clone(),
            thousands: rules.thousands.clone(),
            magnitudes: rules.magnitudes.clone(),
            simply_word: rules.simply_word.clone(),
            simplify_triggers: rules.simplify_triggers.clone(),
        })
    }

    /// Language code ("en", "ja", ...)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grammar variant this table drives
    pub fn numbering_system(&self) -> NumberingSystem {
        self.numbering_system
    }

    /// Word for a single digit 0-9
    #[inline]
    pub fn unit(&self, digit: usize) -> &str {
        debug_assert!(digit < 10);
        &self.units[digit]
    }

    /// The zero word, `units[0]`
    pub fn zero(&self) -> &str {
        &self.units[0]
    }

    /// The one word, `units[1]` (the simplifier's fusion subject)
    pub fn one(&self) -> &str {
        &self.units[1]
    }

    /// Default grammar: word for a value 10-19
    #[inline]
    pub fn teen(&self, value: u64) -> &str {
        debug_assert!((10..20).contains(&value));
        &self.teens[(value - 10) as usize]
    }

    /// Default grammar: word for a multiple of ten, tens digit 2-9
    #[inline]
    pub fn tens_word(&self, tens_digit: u64) -> &str {
        debug_assert!((2..10).contains(&tens_digit));
        &self.tens[(tens_digit - 2) as usize]
    }

    /// Default grammar: the hundred-multiplier word
    pub fn hundred_word(&self) -> &str {
        self.hundred_word.as_deref().unwrap_or_default()
    }

    /// Magnitude word for a 1-based group index, `None` when the table
    /// cannot express that group
    #[inline]
    pub fn magnitude(&self, group_index: usize) -> Option<&str> {
        debug_assert!(group_index >= 1);
        self.magnitudes.get(group_index - 1).map(String::as_str)
    }

    /// Number of magnitude entries in the table
    pub fn magnitude_count(&self) -> usize {
        self.magnitudes.len()
    }

    /// Japanese grammar: tens multiplier word, leading digit 1-9
    #[inline]
    pub fn tens_multiplier(&self, digit: u64) -> &str {
        debug_assert!((1..10).contains(&digit));
        &self.teens[(digit - 1) as usize]
    }

    /// Japanese grammar: hundreds multiplier word, leading digit 1-9
    #[inline]
    pub fn hundreds_multiplier(&self, digit: u64) -> &str {
        debug_assert!((1..10).contains(&digit));
        &self.hundreds[(digit - 1) as usize]
    }

    /// Japanese grammar: thousands multiplier word, leading digit 1-9
    #[inline]
    pub fn thousands_multiplier(&self, digit: u64) -> &str {
        debug_assert!((1..10).contains(&digit));
        &self.thousands[(digit - 1) as usize]
    }

    /// The simplifier's fusion prefix word
    pub fn simply_word(&self) -> &str {
        &self.simply_word
    }

    /// The table's default simplifier trigger set
    pub fn simplify_triggers(&self) -> &[String] {
        &self.simplify_triggers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_rules;

    #[test]
    fn english_accessors_follow_documented_indexing() {
        let rules = get_rules("en").unwrap();
        assert_eq!(rules.zero(), "zero");
        assert_eq!(rules.one(), "one");
        assert_eq!(rules.unit(7), "seven");
        assert_eq!(rules.teen(13), "thirteen");
        assert_eq!(rules.tens_word(2), "twenty");
        assert_eq!(rules.tens_word(9), "ninety");
        assert_eq!(rules.hundred_word(), "hundred");
        assert_eq!(rules.magnitude(1), Some("thousand"));
        assert_eq!(rules.magnitude(2), Some("million"));
        assert_eq!(rules.magnitude(99), None);
    }

    #[test]
    fn japanese_multiplier_accessors() {
        let rules = get_rules("ja").unwrap();
        assert_eq!(rules.zero(), "〇");
        assert_eq!(rules.tens_multiplier(1), "十");
        assert_eq!(rules.tens_multiplier(9), "九十");
        assert_eq!(rules.hundreds_multiplier(3), "三百");
        assert_eq!(rules.thousands_multiplier(8), "八千");
        assert_eq!(rules.magnitude(1), Some("万"));
        assert_eq!(rules.magnitude(4), Some("京"));
    }
}
