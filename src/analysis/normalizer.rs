//! Text normalizer.
//!
//! Turns a raw comment into an ordered sequence of lowercase alphabetic
//! tokens. Every step is total: malformed input never fails, it just
//! produces fewer tokens. The same input string always yields the same
//! token sequence.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use regex::Regex;

use crate::analysis::stem::SuffixStripper;
use crate::analysis::tables::{DEFAULT_CONTRACTIONS, DEFAULT_SLANG, DEFAULT_STOP_WORDS_SET};

/// Immutable configuration for a [`Normalizer`].
///
/// Defaults carry the English contraction table, the Indonesian slang map
/// and the merged Indonesian + English stopword set from
/// [`tables`](crate::analysis::tables).
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Contraction replacements, applied in declared order. The order is
    /// significant and must be preserved for reproducibility.
    pub contractions: Vec<(String, String)>,
    /// Slang-to-canonical token replacements.
    pub slang: Vec<(String, String)>,
    /// Tokens removed entirely.
    pub stopwords: HashSet<String>,
    /// Minimum token length kept (checked before suffix stripping).
    pub min_token_len: usize,
    /// Unicode code points removed as emoji.
    pub emoji_range: RangeInclusive<u32>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            contractions: DEFAULT_CONTRACTIONS
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            slang: DEFAULT_SLANG
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            stopwords: DEFAULT_STOP_WORDS_SET.clone(),
            min_token_len: 3,
            emoji_range: 0x1F000..=0x1FAFF,
        }
    }
}

/// Deterministic text-to-tokens transform.
///
/// Steps, in order, each applied to the whole input:
///
/// 1. lowercase
/// 2. contraction expansion (table order)
/// 3. strip URLs, @/# mentions and digit runs; replace anything outside
///    `[a-z\s]` with a space
/// 4. remove emoji code points
/// 5. collapse whitespace and split into tokens
/// 6. per token: slang lookup, length filter, stopword filter, one-pass
///    suffix strip
///
/// # Examples
///
/// ```
/// use sentimen::analysis::Normalizer;
///
/// let normalizer = Normalizer::new();
/// assert_eq!(
///     normalizer.normalize("I LOVED this film!! 10/10 @someone"),
///     vec!["lov".to_string(), "film".to_string()]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    slang: ahash::AHashMap<String, String>,
    stripper: SuffixStripper,
    url_pattern: Regex,
    mention_pattern: Regex,
    digit_pattern: Regex,
    symbol_pattern: Regex,
    whitespace_pattern: Regex,
}

impl Normalizer {
    /// Create a normalizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    /// Create a normalizer with a custom configuration.
    pub fn with_config(config: NormalizerConfig) -> Self {
        Self::with_config_and_stripper(config, SuffixStripper::new())
    }

    /// Create a normalizer with a custom configuration and suffix stripper.
    pub fn with_config_and_stripper(config: NormalizerConfig, stripper: SuffixStripper) -> Self {
        let slang = config
            .slang
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        // These patterns are fixed and known-valid, so the unwraps cannot
        // fire at runtime.
        Normalizer {
            slang,
            stripper,
            url_pattern: Regex::new(r"[a-z][a-z0-9+.-]*://\S+").unwrap(),
            mention_pattern: Regex::new(r"[@#]\w+").unwrap(),
            digit_pattern: Regex::new(r"[0-9]+").unwrap(),
            symbol_pattern: Regex::new(r"[^a-z\s]").unwrap(),
            whitespace_pattern: Regex::new(r"\s+").unwrap(),
            config,
        }
    }

    /// Access the configuration this normalizer was built with.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a raw text into its token sequence.
    ///
    /// Returns an empty vector when nothing survives filtering. The caller
    /// decides what that means: training drops the sample, inference maps
    /// it to an undetermined result.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let mut text = text.to_lowercase();

        for (pattern, replacement) in &self.config.contractions {
            if text.contains(pattern.as_str()) {
                text = text.replace(pattern.as_str(), replacement);
            }
        }

        let text = self.url_pattern.replace_all(&text, "");
        let text = self.mention_pattern.replace_all(&text, "");
        let text = self.digit_pattern.replace_all(&text, "");
        let text = self.symbol_pattern.replace_all(&text, " ");
        let text: String = text
            .chars()
            .filter(|c| !self.config.emoji_range.contains(&(*c as u32)))
            .collect();
        let text = self.whitespace_pattern.replace_all(&text, " ");

        let mut tokens = Vec::new();
        for word in text.trim().split(' ') {
            if word.is_empty() {
                continue;
            }

            let word = match self.slang.get(word) {
                Some(canonical) => canonical.as_str(),
                None => word,
            };

            if word.len() < self.config.min_token_len {
                continue;
            }

            if self.config.stopwords.contains(word) {
                continue;
            }

            let stemmed = self.stripper.strip(word);
            if !stemmed.is_empty() {
                tokens.push(stemmed.to_string());
            }
        }

        tokens
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
