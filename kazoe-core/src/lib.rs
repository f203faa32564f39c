//! Number-to-words conversion engine
//!
//! Converts non-negative integers into their natural-language word
//! representation using data-driven, per-language rule tables. Two
//! grammar variants are supported: base-1000 grouping (English and
//! most Western/SEA languages) and recursive base-10000 grouping
//! (Japanese-style). Post-processing covers lexical simplification
//! ("one thousand" → "a thousand"), digit-separated spelling, and
//! case-style rewriting.
//!
//! Conversions are pure: the only shared state is the read-only cache
//! of embedded language tables. See `kazoe-api` for the public
//! builder interface.

#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod grammar;
pub mod language;

pub use error::{CoreError, Result};
pub use format::{apply_case, simplify, CaseStyle};
pub use language::{
    get_rules, get_rules_with_overrides, overrides_from_file, NumberingSystem, RuleOverrides,
    RuleSet,
};
