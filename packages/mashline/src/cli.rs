//! Command-line interface for mashline.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{self, SpliceOptions};
use crate::corpus::{ensure_non_empty, read_lines};
use crate::error::Result;
use crate::splicer::Splicer;

/// Mashline - splice headlines into new sentences at a shared connector word.
#[derive(Parser)]
#[command(name = "mashline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File with source lines, one headline or sentence per line
    pub lines_file: PathBuf,

    /// File with separator words, one per line
    pub separators_file: PathBuf,

    /// Minimum number of words in an acceptable mashup
    #[arg(short = 'm', long = "at-least", default_value_t = config::DEFAULT_MIN_WORDS)]
    pub at_least: usize,

    /// Number of mashups to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,

    /// Maximum splice attempts per mashup before giving up
    #[arg(long, default_value_t = config::DEFAULT_MAX_ATTEMPTS)]
    pub attempts: u32,

    /// Seed for the random source, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let lines = read_lines(&cli.lines_file)?;
    let separators = read_lines(&cli.separators_file)?;

    // Reject structurally invalid input before the splicer runs.
    ensure_non_empty(&lines, "lines file")?;
    ensure_non_empty(&separators, "separators file")?;

    let options = SpliceOptions::default()
        .with_min_words(cli.at_least)
        .with_max_attempts(cli.attempts);

    match cli.seed {
        Some(seed) => generate(
            Splicer::new(&lines, &separators, options, StdRng::seed_from_u64(seed)),
            cli.count,
        ),
        None => generate(
            Splicer::new(&lines, &separators, options, rand::thread_rng()),
            cli.count,
        ),
    }
}

/// Produce `count` mashups and print each surrounded by blank lines.
fn generate<R: Rng>(mut splicer: Splicer<'_, R>, count: u32) -> Result<()> {
    for _ in 0..count {
        let mashup = splicer.produce()?;
        println!();
        println!("   {}", style(&mashup).cyan());
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["mashline", "headlines.txt", "separators.txt"]);

        assert_eq!(cli.lines_file, PathBuf::from("headlines.txt"));
        assert_eq!(cli.separators_file, PathBuf::from("separators.txt"));
        assert_eq!(cli.at_least, config::DEFAULT_MIN_WORDS);
        assert_eq!(cli.count, 1);
        assert_eq!(cli.attempts, config::DEFAULT_MAX_ATTEMPTS);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from([
            "mashline",
            "headlines.txt",
            "separators.txt",
            "--at-least",
            "5",
            "-n",
            "3",
            "--attempts",
            "20",
            "--seed",
            "42",
        ]);

        assert_eq!(cli.at_least, 5);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.attempts, 20);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_cli_parse_short_min_words() {
        let cli = Cli::parse_from(["mashline", "h.txt", "s.txt", "-m", "4"]);
        assert_eq!(cli.at_least, 4);
    }
}
