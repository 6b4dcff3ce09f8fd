//! Command-line interface definitions
//!
//! Lives in the library so that `xtask` can generate man pages and
//! completions from the same definitions the binary parses.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::theme::ThemeName;
use crate::trace::Locale;

/// Version string including git commit hash for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("QSS_BUILD_DATE"),
    ")"
);

/// Version string for release builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("QSS_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "qss")]
#[command(version = VERSION)]
#[command(about = "Quick Sort Studio - watch quicksort partition an array, step by step")]
#[command(
    long_about = "Quick Sort Studio records every comparison, swap and pivot placement of an \
in-place quicksort and lets you replay them forwards, backwards or automatically.\n\n\
Logging is enabled with QSS_LOG (e.g. QSS_LOG=debug)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the sort interactively in the terminal
    #[command(long_about = "Open the interactive player.\n\n\
Keys: space play/pause, arrows step, +/- speed, r new array, ? help, q quit.")]
    Play(PlayArgs),

    /// Print every step of the sort
    Trace(TraceArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where the array to sort comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Values to sort (a random array is used when omitted)
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Number of random values
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// Seed for reproducible random values
    #[arg(long)]
    pub seed: Option<u64>,

    /// Narration language [en, ja]
    #[arg(long)]
    pub locale: Option<Locale>,
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Initial speed, 100 (slowest) to 980 (fastest)
    #[arg(long, value_parser = clap::value_parser!(u16).range(100..=980))]
    pub speed: Option<u16>,

    /// Color theme [studio, classic, ocean]
    #[arg(long)]
    pub theme: Option<ThemeName>,
}

#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = TraceFormat::Text)]
    pub format: TraceFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceFormat {
    /// One line per step
    Text,
    /// A single JSON document
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Add missing fields to the config file
    Migrate {
        /// Apply without asking
        #[arg(long, short)]
        yes: bool,
    },
}
