//! Development tasks for qss
//!
//! ```text
//! cargo run -p xtask -- man [--out DIR]
//! cargo run -p xtask -- completions [--out DIR]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use qss::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for qss")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for qss and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man(&out),
        Task::Completions { out } => generate_completions(&out),
    }
}

fn generate_man(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;
    let cmd = Cli::command();
    clap_mangen::generate_to(cmd, out).context("Failed to generate man pages")?;
    println!("Man pages written to {}", out.display());
    Ok(())
}

fn generate_completions(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;
    let mut cmd = Cli::command();
    for shell in Shell::value_variants() {
        let path = clap_complete::generate_to(*shell, &mut cmd, "qss", out)
            .with_context(|| format!("Failed to generate {} completions", shell))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
