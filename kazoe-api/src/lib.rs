//! Public API for kazoe number-to-words conversion
//!
//! The entry point is [`convert`], which returns a configurable
//! builder:
//!
//! ```
//! use kazoe_api::convert;
//!
//! let words = convert(24434).render().unwrap();
//! assert_eq!(words, "twenty four thousand four hundred thirty four");
//! ```
//!
//! Callers converting many numbers under one configuration can build
//! a reusable [`Converter`] instead.
//!
//! Input is `u64`, so negative and non-integral numbers are
//! unrepresentable by construction. Conversion can still fail when a
//! custom rule table's magnitude sequence cannot express the input.

#![warn(missing_docs)]

pub mod config;
pub mod error;

use std::path::Path;
use std::sync::Arc;

use kazoe_core::language::{get_rules, get_rules_with_overrides};
use kazoe_core::{format, grammar, RuleSet};

pub use config::{Config, ConfigBuilder, Simplify};
pub use error::{ApiError, Result};
pub use kazoe_core::{CaseStyle, CoreError, NumberingSystem, RuleOverrides};

/// Reusable conversion handle: a resolved rule table plus render
/// options.
///
/// Cheap to clone; the rule table is shared, immutable, and safe to
/// use from multiple threads.
#[derive(Debug, Clone)]
pub struct Converter {
    rules: Arc<RuleSet>,
    config: Config,
}

impl Converter {
    /// Create a converter with default configuration (English)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a converter for a specific language
    pub fn with_language(code: &str) -> Result<Self> {
        Self::with_config(Config::builder().language(code)?.build()?)
    }

    /// Create a converter from a full configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let rules = match &config.overrides {
            Some(overrides) => get_rules_with_overrides(&config.language, overrides)?,
            None => get_rules(&config.language)?,
        };
        Ok(Self { rules, config })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The resolved rule table
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Spell a number.
    ///
    /// Pipeline: grammar (or digit splitting in apart mode) →
    /// optional simplifier → space join → separator substitution or
    /// case-style rewrite. A non-default case style overrides the
    /// configured separator.
    pub fn to_words(&self, number: u64) -> Result<String> {
        let tokens = if self.config.apart {
            grammar::spell_digits(number, &self.rules)
        } else {
            let tokens = grammar::spell(number, &self.rules)?;
            match &self.config.simplify {
                Simplify::Off => tokens,
                Simplify::TableDefaults => {
                    format::simplify(tokens, &self.rules, self.rules.simplify_triggers())
                }
                Simplify::Triggers(triggers) => format::simplify(tokens, &self.rules, triggers),
            }
        };

        let joined = tokens.join(" ");
        Ok(match self.config.case_style {
            CaseStyle::Default => {
                if self.config.separator == " " {
                    joined
                } else {
                    joined.replace(' ', &self.config.separator)
                }
            }
            style => format::apply_case(style, &joined),
        })
    }
}

/// Start a conversion for one number.
pub fn convert(number: u64) -> Builder {
    Builder {
        number,
        builder: Config::builder(),
    }
}

/// Per-number conversion builder returned by [`convert`].
#[derive(Debug)]
pub struct Builder {
    number: u64,
    builder: ConfigBuilder,
}

impl Builder {
    /// Select the language table by code
    pub fn language(mut self, code: &str) -> Result<Self> {
        self.builder = self.builder.language(code)?;
        Ok(self)
    }

    /// Merge a partial rule table over the selected language's table
    pub fn custom_rules(mut self, overrides: RuleOverrides) -> Result<Self> {
        self.builder = self.builder.custom_rules(overrides)?;
        Ok(self)
    }

    /// Load a partial rule table from a `.toml` or `.json` file
    pub fn custom_rules_from_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.builder = self.builder.custom_rules_from_file(path)?;
        Ok(self)
    }

    /// Spell each decimal digit independently
    pub fn apart(mut self, apart: bool) -> Self {
        self.builder = self.builder.apart(apart);
        self
    }

    /// Word separator for the default case style
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.builder = self.builder.separator(separator);
        self
    }

    /// Enable or disable fusion with the table's default triggers
    pub fn simplify(mut self, on: bool) -> Self {
        self.builder = self.builder.simplify(on);
        self
    }

    /// Enable fusion with an explicit trigger set
    pub fn simplify_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builder = self.builder.simplify_triggers(triggers);
        self
    }

    /// Output case style
    pub fn case_style(mut self, style: CaseStyle) -> Self {
        self.builder = self.builder.case_style(style);
        self
    }

    /// Execute the pipeline and return the final string
    pub fn render(self) -> Result<String> {
        Converter::with_config(self.builder.build()?)?.to_words(self.number)
    }
}

// Convenience functions

/// Spell a number with default configuration (English)
pub fn to_words(number: u64) -> Result<String> {
    convert(number).render()
}

/// Spell a number in a specific language
pub fn to_words_with_language(number: u64, code: &str) -> Result<String> {
    convert(number).language(code)?.render()
}
