//! Quick Sort Studio CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use qss::cli::{Cli, Commands, ConfigCommands};
use qss::logging::{default_log_file, init_logging, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The player owns the terminal; everything else can log to stderr.
    let target = match cli.command {
        Commands::Play(_) => LogTarget::File(default_log_file()),
        _ => LogTarget::Stderr,
    };
    init_logging(target)?;

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Trace(args) => commands::trace::handle(args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "qss", &mut std::io::stdout());
            Ok(())
        }
    }
}
