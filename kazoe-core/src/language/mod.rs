//! Language rule tables
//!
//! Data-driven token tables for number-to-words conversion. Tables are
//! parsed from embedded TOML configs (or user overrides), validated
//! once, and shared immutably.

pub mod config;
pub mod loader;
pub mod runtime;

pub use config::{Metadata, NumberingSystem, RuleConfig, RuleOverrides, Rules};
pub use loader::{get_rules, get_rules_with_overrides, overrides_from_file};
pub use runtime::RuleSet;
