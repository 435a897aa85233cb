//! Word tokenizer shared by indexing and querying
//!
//! A token is a maximal run of Unicode word characters (letters, digits,
//! marks, connector punctuation such as `_`), lowercased. Everything else
//! separates tokens. There are no stopwords and no stemming; one-letter
//! parameter names are kept.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of word characters (`\w` is Unicode-aware)
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Lazily yield the lowercase tokens of `text`
///
/// Each call starts a fresh pass over `text`.
///
/// # Example
///
/// ```
/// use vcdb_search::tokenizer::tokens;
///
/// let mut it = tokens("Hello, World!");
/// assert_eq!(it.next().as_deref(), Some("hello"));
/// assert_eq!(it.next().as_deref(), Some("world"));
/// assert_eq!(it.next(), None);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Tokenize text into lowercase words
///
/// # Example
///
/// ```
/// use vcdb_search::tokenizer::tokenize;
///
/// let tokens = tokenize("add | Adds two numbers. Parameters: a, b.");
/// assert_eq!(tokens, vec!["add", "adds", "two", "numbers", "parameters", "a", "b"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).collect()
}
