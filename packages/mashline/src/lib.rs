//! Mashline - splice headlines into new sentences at a shared connector word.
//!
//! Given a corpus of lines and a list of separator words, mashline picks a
//! separator that appears as a whole word in at least two distinct lines,
//! keeps the first line up to the separator and the second line after it,
//! and joins the halves into a new sentence. Degenerate results are rejected
//! and redrawn, up to a bounded number of attempts.
//!
//! # Example
//!
//! ```
//! use mashline::{SpliceOptions, Splicer};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let lines = vec![
//!     "Theresa May throws Tories into disarray".to_string(),
//!     "UN Inspectors move into Kinshasa".to_string(),
//! ];
//! let separators = vec!["into".to_string()];
//!
//! let rng = StdRng::seed_from_u64(7);
//! let mut splicer = Splicer::new(&lines, &separators, SpliceOptions::default(), rng);
//!
//! let mashup = splicer.produce();
//! assert!(mashup.is_ok());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: defaults and splice options
//! - [`corpus`]: loading of line-delimited text inputs
//! - [`error`]: error types and Result alias
//! - [`splicer`]: the selection-and-splice algorithm
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod splicer;

// Re-export commonly used items
pub use config::SpliceOptions;
pub use error::{MashlineError, Result};
pub use splicer::{has_usable_separator, lines_containing_word, splice, Splicer};
