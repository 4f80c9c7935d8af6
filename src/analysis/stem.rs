//! Naive suffix stripping.
//!
//! This is deliberately not a linguistic stemmer: it removes at most one
//! English inflectional suffix from the end of a token, in a single pass.
//! It is kept as its own pure unit so it can be swapped without touching
//! the rest of the normalization pipeline.

/// Default English inflectional suffixes stripped during normalization.
pub const DEFAULT_SUFFIXES: &[&str] = &["ing", "ed", "ly", "es", "s"];

/// Strips one suffix from the end of a token, non-recursively.
///
/// When several suffixes match the token's end (e.g. `es` and `s` on
/// `goes`), the longest one is stripped.
///
/// # Examples
///
/// ```
/// use sentimen::analysis::SuffixStripper;
///
/// let stripper = SuffixStripper::new();
/// assert_eq!(stripper.strip("testing"), "test");
/// assert_eq!(stripper.strip("goes"), "go");
/// assert_eq!(stripper.strip("bagus"), "bagu");
/// assert_eq!(stripper.strip("good"), "good");
/// ```
#[derive(Debug, Clone)]
pub struct SuffixStripper {
    /// Suffixes ordered longest first, so the longest match wins.
    suffixes: Vec<String>,
}

impl SuffixStripper {
    /// Create a stripper with the default suffix list.
    pub fn new() -> Self {
        Self::with_suffixes(DEFAULT_SUFFIXES.iter().map(|&s| s.to_string()).collect())
    }

    /// Create a stripper with custom suffixes.
    pub fn with_suffixes(suffixes: Vec<String>) -> Self {
        let mut suffixes = suffixes;
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.len()));
        SuffixStripper { suffixes }
    }

    /// Strip one matching suffix, if any. One pass only: the result is
    /// never re-examined, so `classes` becomes `class`, not `clas`.
    pub fn strip<'a>(&self, word: &'a str) -> &'a str {
        for suffix in &self.suffixes {
            if word.len() > suffix.len() && word.ends_with(suffix.as_str()) {
                return &word[..word.len() - suffix.len()];
            }
            // A token that is exactly a suffix strips to nothing.
            if word == suffix.as_str() {
                return "";
            }
        }
        word
    }
}

impl Default for SuffixStripper {
    fn default() -> Self {
        Self::new()
    }
}
