// file: src/index/tokenizer.rs
// description: word-boundary tokenization for index terms
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    // Maximal runs of letters, numbers and underscore. Combining marks and
    // other connector punctuation separate terms.
    pub static ref WORD: Regex = Regex::new(r"[\p{L}\p{N}_]+").expect("WORD regex is valid");
}

/// Lowercases `text` and returns every word run in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct terms of a single document.
pub fn unique_terms(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("The cat sat."), vec!["the", "cat", "sat"]);
        assert_eq!(
            tokenize("A cat and a dog."),
            vec!["a", "cat", "and", "a", "dog"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscore() {
        assert_eq!(
            tokenize("snake_case 2024 v1.2"),
            vec!["snake_case", "2024", "v1", "2"]
        );
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("Café MÜDE!"), vec!["café", "müde"]);
    }

    #[test]
    fn test_tokenize_letter_and_number_classes_only() {
        assert_eq!(
            tokenize("x\u{b2} e\u{301}t\u{e9} a\u{203f}b"),
            vec!["x\u{b2}", "e", "t\u{e9}", "a", "b"]
        );
        assert_eq!(tokenize("\u{2167} items"), vec!["\u{2177}", "items"]);
    }

    #[test]
    fn test_tokenize_separators_only() {
        assert!(tokenize("?!... --- ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_unique_terms_dedups() {
        let terms = unique_terms("A cat and a dog.");
        let expected: BTreeSet<String> = ["a", "and", "cat", "dog"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(terms, expected);
    }
}
