//! Core selection-and-splice algorithm.
//!
//! A splice takes two distinct corpus lines that share a separator word,
//! keeps the first line up to the separator and the second line after it,
//! and joins the halves at the separator:
//!
//! ```text
//! Theresa May throws Tories into disarray
//! UN Inspectors move into Kinshasa
//!       -> Theresa May throws Tories into Kinshasa
//! ```
//!
//! Degenerate results (a mashup equal to a source line, or shorter than the
//! configured word floor) are rejected and the whole draw is retried, up to
//! a bounded number of attempts.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SpliceOptions;
use crate::error::{MashlineError, Result};

/// Check whether `line` contains `word` as a whole whitespace-delimited word.
fn contains_word(line: &str, word: &str) -> bool {
    line.split_whitespace().any(|w| w == word)
}

/// Gather the lines that contain `word` as a whole word, preserving order.
///
/// # Arguments
/// * `word` - Separator candidate, already trimmed
/// * `lines` - The corpus
///
/// # Examples
/// ```
/// use mashline::splicer::lines_containing_word;
///
/// let lines = vec!["A into B".to_string(), "C over D".to_string()];
/// assert_eq!(lines_containing_word("into", &lines), vec!["A into B"]);
/// ```
#[must_use]
pub fn lines_containing_word<'a>(word: &str, lines: &'a [String]) -> Vec<&'a str> {
    lines
        .iter()
        .map(String::as_str)
        .filter(|line| contains_word(line, word))
        .collect()
}

/// Check whether `word` is usable as a separator: it must appear as a whole
/// word in strictly more than one corpus line.
#[must_use]
pub fn has_usable_separator(word: &str, lines: &[String]) -> bool {
    lines_containing_word(word, lines).len() > 1
}

/// Splice two lines at a separator word.
///
/// Keeps everything of `line1` before the first occurrence of the padded
/// token `" separator "`, everything of `line2` after its last occurrence,
/// and joins the trimmed halves with the separator in between.
///
/// When the separator sits at a line boundary (first word of `line1` or last
/// word of `line2`) the padded token does not occur and the whole line is
/// kept as prefix or suffix. Callers rely on output validation to weed out
/// the degenerate results this can produce.
#[must_use]
pub fn splice(line1: &str, line2: &str, separator: &str) -> String {
    let token = format!(" {separator} ");
    let prefix = line1.split(token.as_str()).next().unwrap_or(line1).trim();
    let suffix = line2.rsplit(token.as_str()).next().unwrap_or(line2).trim();
    format!("{prefix} {separator} {suffix}")
}

/// Splices corpus lines into new sentences at shared separator words.
///
/// Holds borrowed, immutable inputs plus the random source; every call to
/// [`Splicer::produce`] is an independent draw.
pub struct Splicer<'a, R: Rng> {
    lines: &'a [String],
    separators: &'a [String],
    options: SpliceOptions,
    rng: R,
}

impl<'a, R: Rng> Splicer<'a, R> {
    /// Create a new splicer over a corpus and a separator list.
    #[must_use]
    pub fn new(
        lines: &'a [String],
        separators: &'a [String],
        options: SpliceOptions,
        rng: R,
    ) -> Self {
        Self {
            lines,
            separators,
            options,
            rng,
        }
    }

    /// Produce one spliced sentence.
    ///
    /// Draws a separator and a pair of distinct lines, splices them, and
    /// validates the result; rejected draws are retried up to the configured
    /// attempt ceiling.
    ///
    /// # Errors
    /// * `NoUsableSeparator` if no separator word appears in two or more
    ///   corpus lines (this also covers empty inputs)
    /// * `AttemptsExhausted` if every attempt produced a rejected result
    pub fn produce(&mut self) -> Result<String> {
        // Fail fast instead of redrawing separators forever on a corpus
        // that cannot satisfy any of them.
        if !self
            .separators
            .iter()
            .any(|s| has_usable_separator(s.trim(), self.lines))
        {
            return Err(MashlineError::NoUsableSeparator);
        }

        for attempt in 0..self.options.max_attempts {
            if attempt > 0 {
                tracing::debug!(attempt, "retrying splice");
            }

            let separator = self.choose_separator();
            let mut matches = lines_containing_word(&separator, self.lines);
            matches.shuffle(&mut self.rng);

            let Some(line1) = matches.pop().map(str::trim) else {
                continue;
            };
            let Some(line2) = draw_distinct(&mut matches, line1) else {
                tracing::debug!(
                    separator = %separator,
                    "candidate pool held no line distinct from the first draw"
                );
                continue;
            };

            let output = splice(line1, line2, &separator);
            if output == line1 || output == line2 {
                tracing::debug!(separator = %separator, "mashup reproduced a source line");
                continue;
            }
            if output.split_whitespace().count() < self.options.min_words {
                tracing::debug!(
                    separator = %separator,
                    min_words = self.options.min_words,
                    "mashup below minimum word count"
                );
                continue;
            }

            return Ok(output);
        }

        Err(MashlineError::AttemptsExhausted {
            attempts: self.options.max_attempts,
        })
    }

    /// Draw separators uniformly at random until one is usable.
    ///
    /// # Panics
    /// Debug builds panic if no usable separator exists; `produce` verifies
    /// feasibility before drawing.
    fn choose_separator(&mut self) -> String {
        debug_assert!(
            self.separators
                .iter()
                .any(|s| has_usable_separator(s.trim(), self.lines)),
            "feasibility must be checked before drawing separators"
        );
        loop {
            if let Some(word) = self.separators.choose(&mut self.rng) {
                let word = word.trim();
                if has_usable_separator(word, self.lines) {
                    return word.to_string();
                }
            }
        }
    }
}

/// Pop from the shuffled pool until a line textually distinct from `line1`
/// turns up. Returns `None` when the pool runs out first.
fn draw_distinct<'b>(pool: &mut Vec<&'b str>, line1: &str) -> Option<&'b str> {
    while let Some(candidate) = pool.pop() {
        let candidate = candidate.trim();
        if candidate != line1 {
            return Some(candidate);
        }
    }
    None
}
