use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern is valid"));

/// Words carrying no scent information.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "in", "of", "on", "for", "to", "with", "by", "it", "is", "are",
    "this",
];

/// Splits `text` into runs of ASCII letters, dropping stop words.
///
/// Order and duplicates are kept. Matching against [`STOP_WORDS`] is exact,
/// so callers lower-case the text first when they want "The" dropped too.
pub fn extract_keywords(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
