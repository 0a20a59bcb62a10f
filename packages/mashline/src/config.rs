//! Configuration constants and options for the splicer.

/// Default minimum number of words in an acceptable mashup.
pub const DEFAULT_MIN_WORDS: usize = 3;

/// Default maximum number of splice attempts before giving up.
///
/// Each attempt draws a fresh separator and line pair; rejected outputs
/// (source-line collisions, short results, collapsed candidate pools)
/// consume an attempt. Can be overridden via the CLI --attempts flag.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Tuning knobs for a splice run.
#[derive(Debug, Clone, Copy)]
pub struct SpliceOptions {
    /// Minimum number of whitespace-delimited words in an acceptable mashup.
    pub min_words: usize,

    /// Maximum number of attempts before the run fails with
    /// `AttemptsExhausted`.
    pub max_attempts: u32,
}

impl SpliceOptions {
    /// Set the minimum word count.
    #[must_use]
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set the attempt ceiling.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for SpliceOptions {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SpliceOptions::default();
        assert_eq!(options.min_words, DEFAULT_MIN_WORDS);
        assert_eq!(options.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_builder_setters() {
        let options = SpliceOptions::default()
            .with_min_words(5)
            .with_max_attempts(10);
        assert_eq!(options.min_words, 5);
        assert_eq!(options.max_attempts, 10);
    }
}
