//! High-level configuration API

use std::path::Path;

use kazoe_core::language::{get_rules, get_rules_with_overrides, overrides_from_file};
use kazoe_core::{CaseStyle, RuleOverrides};

use crate::error::Result;

/// How the simplifier is driven for a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Simplify {
    /// No fusion pass
    #[default]
    Off,
    /// Fuse using the rule table's default trigger set
    TableDefaults,
    /// Fuse using an explicit trigger set; an empty set never fires
    Triggers(Vec<String>),
}

/// Full conversion configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) language: String,
    pub(crate) overrides: Option<RuleOverrides>,
    pub(crate) apart: bool,
    pub(crate) separator: String,
    pub(crate) simplify: Simplify,
    pub(crate) case_style: CaseStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            overrides: None,
            apart: false,
            separator: " ".to_string(),
            simplify: Simplify::Off,
            case_style: CaseStyle::Default,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The selected language code
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Configuration builder
///
/// Rule-affecting steps (`language`, `custom_rules`) resolve eagerly,
/// so an unknown language or malformed override fails at the step
/// that introduced it rather than at render time.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Select the language table by code
    pub fn language(mut self, code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        // Eager resolution; also re-checks any overrides already set
        // against the new base table.
        match &self.config.overrides {
            Some(overrides) => {
                get_rules_with_overrides(&code, overrides)?;
            }
            None => {
                get_rules(&code)?;
            }
        }
        self.config.language = code;
        Ok(self)
    }

    /// Merge a partial rule table over the selected language's table
    pub fn custom_rules(mut self, overrides: RuleOverrides) -> Result<Self> {
        get_rules_with_overrides(&self.config.language, &overrides)?;
        self.config.overrides = Some(overrides);
        Ok(self)
    }

    /// Load a partial rule table from a `.toml` or `.json` file
    pub fn custom_rules_from_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let overrides = overrides_from_file(path.as_ref())?;
        self.custom_rules(overrides)
    }

    /// Spell each decimal digit independently
    pub fn apart(mut self, apart: bool) -> Self {
        self.config.apart = apart;
        self
    }

    /// Word separator for the default case style
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Enable or disable fusion with the table's default triggers
    pub fn simplify(mut self, on: bool) -> Self {
        self.config.simplify = if on {
            Simplify::TableDefaults
        } else {
            Simplify::Off
        };
        self
    }

    /// Enable fusion with an explicit trigger set
    pub fn simplify_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.simplify = Simplify::Triggers(triggers.into_iter().map(Into::into).collect());
        self
    }

    /// Output case style
    pub fn case_style(mut self, style: CaseStyle) -> Self {
        self.config.case_style = style;
        self
    }

    /// Finalize the configuration
    pub fn build(self) -> Result<Config> {
        Ok(self.config)
    }
}
