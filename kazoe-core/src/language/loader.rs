//! Language rule loader
//!
//! Manages the embedded language tables with process-wide caching and
//! merges user-supplied overrides. Custom-rule data never touches
//! global state; it is merged per call over a cached base table.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};
use crate::language::config::{RuleConfig, RuleOverrides};
use crate::language::runtime::RuleSet;

/// A parsed embedded language: the raw config is kept for override
/// merging, the validated table for direct use.
struct LoadedLanguage {
    config: RuleConfig,
    rules: Arc<RuleSet>,
}

static EMBEDDED: OnceLock<HashMap<String, Arc<LoadedLanguage>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<LoadedLanguage>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (code, alias, toml_str) in [
            (
                "en",
                "english",
                include_str!("../../configs/languages/english.toml"),
            ),
            (
                "ja",
                "japanese",
                include_str!("../../configs/languages/japanese.toml"),
            ),
        ] {
            match load_embedded_language(code, toml_str) {
                Ok(lang) => {
                    tracing::debug!(code, "loaded embedded language table");
                    map.insert(code.to_string(), lang.clone());
                    map.insert(alias.to_string(), lang);
                }
                Err(e) => {
                    tracing::warn!(code, error = %e, "failed to load embedded language table");
                }
            }
        }

        map
    })
}

fn load_embedded_language(code: &str, toml_str: &str) -> Result<Arc<LoadedLanguage>> {
    let config: RuleConfig = toml::from_str(toml_str)
        .map_err(|e| CoreError::invalid(format!("failed to parse {code} config: {e}")))?;
    let rules = Arc::new(RuleSet::from_config(&config)?);
    Ok(Arc::new(LoadedLanguage { config, rules }))
}

/// Resolve a rule table by language code.
///
/// Codes are case-insensitive; full names ("english", "japanese") are
/// accepted as aliases.
pub fn get_rules(code: &str) -> Result<Arc<RuleSet>> {
    embedded()
        .get(&code.to_ascii_lowercase())
        .map(|lang| lang.rules.clone())
        .ok_or_else(|| CoreError::RuleNotFound {
            code: code.to_string(),
        })
}

/// Resolve a base table and merge a partial override over it.
///
/// Override wins per field; arrays replace the base arrays wholesale.
/// The merged table is re-validated, so a malformed override fails
/// here rather than deep inside conversion.
pub fn get_rules_with_overrides(code: &str, overrides: &RuleOverrides) -> Result<Arc<RuleSet>> {
    let base = embedded()
        .get(&code.to_ascii_lowercase())
        .ok_or_else(|| CoreError::RuleNotFound {
            code: code.to_string(),
        })?;

    let merged = RuleConfig {
        metadata: base.config.metadata.clone(),
        rules: base.config.rules.merged(overrides),
    };
    tracing::debug!(code, "merged custom rules over base table");
    Ok(Arc::new(RuleSet::from_config(&merged)?))
}

/// Parse a partial rule table from a `.toml` or `.json` file.
///
/// A missing or unreadable file is invalid rule data, consistent with
/// treating the path as the override payload.
pub fn overrides_from_file(path: &Path) -> Result<RuleOverrides> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CoreError::invalid(format!("cannot read rule file '{}': {e}", path.display()))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            CoreError::invalid(format!("invalid TOML in '{}': {e}", path.display()))
        }),
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            CoreError::invalid(format!("invalid JSON in '{}': {e}", path.display()))
        }),
        _ => Err(CoreError::invalid(format!(
            "unsupported rule file format: '{}' (expected .toml or .json)",
            path.display()
        ))),
    }
}
