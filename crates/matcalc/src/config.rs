//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::Parser;

use matcalc_core::constants::MAX_CLI_DIMENSION;
use matcalc_core::{Element, Options, DEFAULT_RANDOM_MAX, DEFAULT_RANDOM_MIN};

/// MatCalc-rs: multiply matrices with brute-force, divide-and-conquer
/// and Strassen, and check that they agree.
#[derive(Parser, Debug)]
#[command(name = "matcalc", version, about)]
pub struct AppConfig {
    /// Rows of the left operand.
    #[arg(short = 'm', long, default_value = "64", value_parser = dimension_parser())]
    pub rows: usize,

    /// Shared inner dimension (left columns, right rows).
    #[arg(short = 'k', long, default_value = "64", value_parser = dimension_parser())]
    pub inner: usize,

    /// Columns of the right operand.
    #[arg(short = 'n', long, default_value = "64", value_parser = dimension_parser())]
    pub cols: usize,

    /// Algorithm to use: bf, dac, strassen, strassen-padded, a
    /// comma-separated list of those, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Seed for random operands (fresh entropy when absent).
    #[arg(long, env = "MATCALC_SEED")]
    pub seed: Option<u64>,

    /// Smallest random entry.
    #[arg(long, default_value_t = DEFAULT_RANDOM_MIN, allow_negative_numbers = true)]
    pub min: Element,

    /// Largest random entry.
    #[arg(long, default_value_t = DEFAULT_RANDOM_MAX, allow_negative_numbers = true)]
    pub max: Element,

    /// JSON file holding the left operand as nested rows.
    #[arg(long, requires = "right")]
    pub left: Option<PathBuf>,

    /// JSON file holding the right operand as nested rows.
    #[arg(long, requires = "left")]
    pub right: Option<PathBuf>,

    /// Write the product to this file as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the product matrix.
    #[arg(short, long)]
    pub print: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (print large products in full).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Leaf size below which padded Strassen switches to brute force.
    #[arg(long, default_value = "0")]
    pub strassen_threshold: usize,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

fn dimension_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(0..=MAX_CLI_DIMENSION)
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options built from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            strassen_threshold: self.strassen_threshold,
            random_min: self.min,
            random_max: self.max,
        }
        .normalize()
    }
}
