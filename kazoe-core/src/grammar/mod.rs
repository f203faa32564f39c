//! Number-to-token grammars
//!
//! Two grammar variants, selected by the rule table: base-1000
//! grouping (most Western/SEA languages) and recursive base-10000
//! grouping (East Asian languages). Digit-separated spelling sits
//! outside both.

pub mod default;
pub mod digits;
pub mod japanese;

use crate::error::Result;
use crate::language::{NumberingSystem, RuleSet};

pub use digits::spell_digits;

/// Spell a number with the grammar the rule table selects.
pub fn spell(n: u64, rules: &RuleSet) -> Result<Vec<String>> {
    match rules.numbering_system() {
        NumberingSystem::Default => default::spell(n, rules),
        NumberingSystem::Japanese => japanese::spell(n, rules),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_rules;

    #[test]
    fn dispatches_on_the_table_grammar() {
        let en = get_rules("en").unwrap();
        let ja = get_rules("ja").unwrap();
        assert_eq!(spell(24434, &en).unwrap().len(), 7);
        assert_eq!(spell(24434, &ja).unwrap().join(""), "二万四千四百三十四");
    }
}
