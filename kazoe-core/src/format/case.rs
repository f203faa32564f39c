//! Case-style rewriting of the joined phrase
//!
//! Operates on the space-joined token string. Styles that impose their
//! own delimiter (everything but `Default`) subsume the configured
//! separator.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Output case style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// No transformation
    #[default]
    Default,
    /// twentyFourThousand
    Camel,
    /// TwentyFourThousand
    Pascal,
    /// twenty_four_thousand
    Snake,
    /// twenty-four-thousand
    Kebab,
    /// TWENTY_FOUR_THOUSAND
    Macro,
    /// Twenty-Four-Thousand
    Train,
}

impl FromStr for CaseStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(CaseStyle::Default),
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            "snake" => Ok(CaseStyle::Snake),
            "kebab" => Ok(CaseStyle::Kebab),
            "macro" => Ok(CaseStyle::Macro),
            "train" => Ok(CaseStyle::Train),
            other => Err(CoreError::invalid(format!("unknown case style '{other}'"))),
        }
    }
}

/// Apply a case style to a word-joined string.
pub fn apply_case(style: CaseStyle, input: &str) -> String {
    match style {
        CaseStyle::Default => input.to_string(),
        CaseStyle::Camel => {
            let mut words = split_words(input).into_iter();
            let mut result = String::with_capacity(input.len());
            if let Some(first) = words.next() {
                result.push_str(&first.to_lowercase());
            }
            for word in words {
                result.push_str(&title_word(&word));
            }
            result
        }
        CaseStyle::Pascal => split_words(input)
            .iter()
            .map(|w| title_word(w))
            .collect(),
        CaseStyle::Snake => split_words(input)
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("_"),
        CaseStyle::Kebab => split_words(input)
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("-"),
        CaseStyle::Macro => split_words(input)
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
        CaseStyle::Train => split_words(input)
            .iter()
            .map(|w| title_word(w))
            .collect::<Vec<_>>()
            .join("-"),
    }
}

/// Split on whitespace, hyphens and underscores.
fn split_words(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uppercase the first character, lowercase the rest.
fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "twenty four thousand";

    #[test]
    fn default_is_identity() {
        assert_eq!(apply_case(CaseStyle::Default, PHRASE), PHRASE);
        assert_eq!(apply_case(CaseStyle::Default, "a >//< b"), "a >//< b");
    }

    #[test]
    fn camel_lowercases_the_first_word() {
        assert_eq!(apply_case(CaseStyle::Camel, PHRASE), "twentyFourThousand");
    }

    #[test]
    fn pascal_title_cases_every_word() {
        assert_eq!(apply_case(CaseStyle::Pascal, PHRASE), "TwentyFourThousand");
    }

    #[test]
    fn delimiter_styles() {
        assert_eq!(apply_case(CaseStyle::Snake, PHRASE), "twenty_four_thousand");
        assert_eq!(apply_case(CaseStyle::Kebab, PHRASE), "twenty-four-thousand");
        assert_eq!(apply_case(CaseStyle::Macro, PHRASE), "TWENTY_FOUR_THOUSAND");
        assert_eq!(apply_case(CaseStyle::Train, PHRASE), "Twenty-Four-Thousand");
    }

    #[test]
    fn underscores_count_as_word_boundaries() {
        assert_eq!(apply_case(CaseStyle::Camel, "a_b c"), "aBC");
    }

    #[test]
    fn parses_style_tags() {
        assert_eq!("camel".parse::<CaseStyle>().unwrap(), CaseStyle::Camel);
        assert_eq!("macro".parse::<CaseStyle>().unwrap(), CaseStyle::Macro);
        assert!("shouting".parse::<CaseStyle>().is_err());
    }
}
