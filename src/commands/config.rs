//! `qss config` handlers

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use qss::config::migrate_config;
use qss::theme::{stdout_supports_color, Theme};
use qss::Config;

fn cli_theme() -> Theme {
    Theme::default().with_ansi(stdout_supports_color())
}

/// Print the effective configuration (file values over defaults).
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let rendered = toml::to_string_pretty(&config)?;
    println!("{}", cli_theme().primary_text(rendered.trim_end()));
    Ok(())
}

pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Fill in fields missing from the config file.
///
/// Lists what would be added, then writes only after confirmation. `yes`
/// skips the prompt; without a terminal on stdin nothing is written.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = cli_theme();
    let path = Config::config_path()?;
    let existing = read_existing(&path)?;

    let result = migrate_config(existing.as_deref().unwrap_or_default())?;
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    let heading = match existing {
        Some(_) => format!("{} field(s) missing from {}:", result.added_fields.len(), path.display()),
        None => format!("{} does not exist; it will be created with:", path.display()),
    };
    println!("{}", theme.primary_text(&heading));
    for field in &result.added_fields {
        println!("{}", theme.success_text(&format!("+ {}", field)));
    }
    println!();

    if !yes && !confirm("Write these changes?", &theme)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(&path, &result.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{}", theme.success_text("Config updated."));
    Ok(())
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content))
}

/// Ask a y/N question on stdin. Anything but `y`/`yes` is a no, and so is a
/// non-terminal stdin.
fn confirm(question: &str, theme: &Theme) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("stdin is not a terminal; rerun with --yes to write the file")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(question));
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
