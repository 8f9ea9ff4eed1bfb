use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s']").unwrap());
static APOSTROPHE_TRIM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^'+|'+$").unwrap());

/// Split text into lowercase words. Punctuation separates words;
/// apostrophes inside a word are kept ("ain't").
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = NON_WORD.replace_all(text, " ");
    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(|t| APOSTROPHE_TRIM.replace_all(t, "").to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whether `phrase` occurs in `text` as whole words, in order.
/// "up" matches "power up!" but not "power setup" or "supply".
pub fn contains_words(text: &str, phrase: &str) -> bool {
    let needle = tokenize(phrase);
    if needle.is_empty() {
        return false;
    }
    tokenize(text)
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenize() {
        assert_eq!(tokenize("Power UP, for good!"), vec!["power", "up", "for", "good"]);
    }

    #[test]
    fn test_apostrophe_preserved() {
        assert_eq!(tokenize("That ain't 'right'"), vec!["that", "ain't", "right"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("  \t ").is_empty());
    }

    #[test]
    fn test_whole_word_match() {
        assert!(contains_words("power up for good", "up"));
        assert!(contains_words("power, up!", "up"));
        assert!(!contains_words("power setup", "up"));
        assert!(!contains_words("power supply", "up"));
        assert!(!contains_words("that is quite something", "quit"));
        assert!(!contains_words("i need help", "dee"));
    }

    #[test]
    fn test_phrase_match() {
        assert!(contains_words("power up for good", "for good"));
        assert!(!contains_words("power up for the good", "for good"));
    }

    #[test]
    fn test_blank_phrase_never_matches() {
        assert!(!contains_words("anything", "  "));
    }
}
