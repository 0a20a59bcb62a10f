//! Error types for mashline.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the mashline library.
#[derive(Debug, Error)]
pub enum MashlineError {
    /// An input collection contained nothing usable.
    #[error("{what} is empty: provide at least one non-blank line")]
    EmptyInput {
        /// Which input was empty ("lines file" or "separators file").
        what: &'static str,
    },

    /// No separator word appears as a whole word in two or more distinct lines.
    #[error("no separator word appears in at least two lines of the corpus")]
    NoUsableSeparator,

    /// The attempt ceiling was reached without an acceptable mashup.
    #[error("gave up after {attempts} attempts without an acceptable mashup")]
    AttemptsExhausted { attempts: u32 },

    /// Failed to read an input file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for mashline operations.
pub type Result<T> = std::result::Result<T, MashlineError>;
