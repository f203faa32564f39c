//! Configuration structures and validation
//!
//! This module defines the schema shared by the embedded TOML language
//! files and user-supplied override files (TOML or JSON).
//!
//! Table indexing convention (part of the file-format contract):
//! - default grammar: `teens` covers 10-19, `tens` starts at the word
//!   for 20 (index = tens digit - 2, exactly 8 entries).
//! - japanese grammar: `teens`, `hundreds` and `thousands` hold the
//!   multiplier words indexed by leading digit minus 1 (exactly 9
//!   entries each).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Language identification
    pub metadata: Metadata,
    /// The token tables
    pub rules: Rules,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Short language code ("en", "ja")
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// Grammar variant selected by a rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingSystem {
    /// Base-1000 grouping (thousand, million, ...)
    Default,
    /// Recursive base-10000 grouping (10^4, 10^8, ...)
    Japanese,
}

/// Token tables for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rules {
    /// Grammar variant this table drives
    pub numbering_system: NumberingSystem,
    /// Digit words, index = digit value; index 0 is the zero word
    pub units: Vec<String>,
    /// Default grammar: values 10-19. Japanese grammar: tens
    /// multipliers, index = tens digit - 1
    #[serde(default)]
    pub teens: Vec<String>,
    /// Default grammar only: multiples of ten from 20, index = tens
    /// digit - 2
    #[serde(default)]
    pub tens: Vec<String>,
    /// Default grammar only: the hundred-multiplier word
    #[serde(default)]
    pub hundred_word: Option<String>,
    /// Japanese grammar only: hundreds multipliers, index = digit - 1
    #[serde(default)]
    pub hundreds: Vec<String>,
    /// Japanese grammar only: thousands multipliers, index = digit - 1
    #[serde(default)]
    pub thousands: Vec<String>,
    /// Large-scale magnitude words. Default grammar: thousand and up
    /// (the hundred word is kept separate). Japanese grammar: the
    /// 10000^k ladder in ascending order
    #[serde(default)]
    pub magnitudes: Vec<String>,
    /// Prefix word fused onto a magnitude by the simplifier ("a")
    #[serde(default)]
    pub simply_word: String,
    /// Magnitude words eligible for "one"-fusion by default
    #[serde(default)]
    pub simplify_triggers: Vec<String>,
}

/// Partial rule table merged over a base language's full table.
///
/// Override wins per field; arrays are replaced wholesale, never
/// element-merged. The merged result is re-validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleOverrides {
    /// Replacement grammar variant
    pub numbering_system: Option<NumberingSystem>,
    /// Replacement digit words
    pub units: Option<Vec<String>>,
    /// Replacement teens / tens-multiplier words
    pub teens: Option<Vec<String>>,
    /// Replacement tens words
    pub tens: Option<Vec<String>>,
    /// Replacement hundred-multiplier word
    pub hundred_word: Option<String>,
    /// Replacement hundreds multipliers
    pub hundreds: Option<Vec<String>>,
    /// Replacement thousands multipliers
    pub thousands: Option<Vec<String>>,
    /// Replacement magnitude words
    pub magnitudes: Option<Vec<String>>,
    /// Replacement fusion prefix
    pub simply_word: Option<String>,
    /// Replacement default trigger set
    pub simplify_triggers: Option<Vec<String>>,
}

impl Rules {
    /// Apply overrides, producing a new table. Does not validate.
    pub fn merged(&self, overrides: &RuleOverrides) -> Rules {
        Rules {
            numbering_system: overrides
                .numbering_system
                .unwrap_or(self.numbering_system),
            units: overrides.units.clone().unwrap_or_else(|| self.units.clone()),
            teens: overrides.teens.clone().unwrap_or_else(|| self.teens.clone()),
            tens: overrides.tens.clone().unwrap_or_else(|| self.tens.clone()),
            hundred_word: overrides
                .hundred_word
                .clone()
                .or_else(|| self.hundred_word.clone()),
            hundreds: overrides
                .hundreds
                .clone()
                .unwrap_or_else(|| self.hundreds.clone()),
            thousands: overrides
                .thousands
                .clone()
                .unwrap_or_else(|| self.thousands.clone()),
            magnitudes: overrides
                .magnitudes
                .clone()
                .unwrap_or_else(|| self.magnitudes.clone()),
            simply_word: overrides
                .simply_word
                .clone()
                .unwrap_or_else(|| self.simply_word.clone()),
            simplify_triggers: overrides
                .simplify_triggers
                .clone()
                .unwrap_or_else(|| self.simplify_triggers.clone()),
        }
    }
}

impl RuleConfig {
    /// Validate table arities for the selected grammar
    pub(crate) fn validate(&self) -> Result<()> {
        let rules = &self.rules;
        if rules.units.len() != 10 {
            return Err(CoreError::invalid(format!(
                "units must have exactly 10 entries, got {}",
                rules.units.len()
            )));
        }

        match rules.numbering_system {
            NumberingSystem::Default => {
                if rules.teens.len() != 10 {
                    return Err(CoreError::invalid(format!(
                        "teens must have exactly 10 entries, got {}",
                        rules.teens.len()
                    )));
                }
                if rules.tens.len() != 8 {
                    return Err(CoreError::invalid(format!(
                        "tens must have exactly 8 entries (twenty through ninety), got {}",
                        rules.tens.len()
                    )));
                }
                match &rules.hundred_word {
                    Some(word) if !word.is_empty() => {}
                    _ => {
                        return Err(CoreError::invalid(
                            "hundred_word is required for the default numbering system",
                        ))
                    }
                }
            }
            NumberingSystem::Japanese => {
                if rules.teens.len() != 9 {
                    return Err(CoreError::invalid(format!(
                        "teens must have exactly 9 tens-multiplier entries, got {}",
                        rules.teens.len()
                    )));
                }
                if rules.hundreds.len() != 9 {
                    return Err(CoreError::invalid(format!(
                        "hundreds must have exactly 9 entries, got {}",
                        rules.hundreds.len()
                    )));
                }
                if rules.thousands.len() != 9 {
                    return Err(CoreError::invalid(format!(
                        "thousands must have exactly 9 entries, got {}",
                        rules.thousands.len()
                    )));
                }
                // 10000^5 already exceeds u64; longer ladders are
                // unreachable and would overflow the grammar's bound
                // arithmetic.
                if rules.magnitudes.len() > 4 {
                    return Err(CoreError::invalid(format!(
                        "magnitudes must have at most 4 entries for the japanese numbering system, got {}",
                        rules.magnitudes.len()
                    )));
                }
            }
        }

        Ok(())
    }
}
