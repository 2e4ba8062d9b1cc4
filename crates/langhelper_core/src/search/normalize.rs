//! Text normalization and tokenization shared by tables and resolver.
//!
//! # Invariants
//! - Normalization is lowercase + trim only; inner whitespace and punctuation
//!   are preserved so substring scans see the text as typed.
//! - Token length is measured in Unicode scalar values.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

/// Tokens must be longer than this to take part in the partial scan.
pub const MIN_PARTIAL_TOKEN_CHARS: usize = 3;

/// Lowercases and trims raw input.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Returns whether `value` is already in normalized form.
pub fn is_normalized(value: &str) -> bool {
    normalize(value) == value
}

/// Splits text into Unicode word tokens, left to right.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|token| token.as_str())
}

/// Word tokens long enough for the partial scan.
pub fn partial_tokens(text: &str) -> impl Iterator<Item = &str> {
    word_tokens(text).filter(|token| token.chars().count() > MIN_PARTIAL_TOKEN_CHARS)
}

#[cfg(test)]
mod tests {
    use super::{is_normalized, normalize, partial_tokens, word_tokens};

    #[test]
    fn normalize_lowercases_cyrillic_and_trims() {
        assert_eq!(normalize("  КРАСНАЯ Площадь \n"), "красная площадь");
        assert_eq!(normalize("Saint Basil's"), "saint basil's");
        assert!(is_normalized("биг бен"));
        assert!(!is_normalized(" Биг бен"));
    }

    #[test]
    fn word_tokens_split_on_punctuation() {
        let tokens: Vec<&str> = word_tokens("биг-бен, big ben!").collect();
        assert_eq!(tokens, vec!["биг", "бен", "big", "ben"]);
    }

    #[test]
    fn partial_tokens_skip_short_words() {
        let tokens: Vec<&str> = partial_tokens("где тут собор и мост").collect();
        assert_eq!(tokens, vec!["собор", "мост"]);
    }
}
