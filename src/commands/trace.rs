//! Trace subcommand handler

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use qss::cli::{TraceArgs, TraceFormat};
use qss::theme::{stdout_supports_color, Theme};
use qss::trace::{generate_with_locale, Locale, Trace, REFERENCE_LISTING};
use qss::Config;

use super::resolve_input;

/// Narration is wrapped to this many columns in text output.
const NARRATION_WIDTH: usize = 72;

/// JSON document written by `--format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceDocument<'a> {
    generated_at: String,
    locale: Locale,
    input: &'a [i64],
    listing: &'a [&'a str],
    steps: &'a Trace,
}

/// Print the trace for the resolved input.
pub fn handle(args: TraceArgs) -> Result<()> {
    let config = Config::load()?;
    let input = resolve_input(&args.input, &config)?;
    let trace = generate_with_locale(&input.values, input.locale)?;
    info!(len = input.values.len(), steps = trace.len(), "trace generated");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match args.format {
        TraceFormat::Json => {
            let doc = TraceDocument {
                generated_at: chrono::Utc::now().to_rfc3339(),
                locale: input.locale,
                input: &input.values,
                listing: REFERENCE_LISTING,
                steps: &trace,
            };
            write_json(&mut out, &doc)
        }
        TraceFormat::Text => {
            let theme = Theme::from_name(config.display.theme).with_ansi(stdout_supports_color());
            write_text(&mut out, &input.values, &trace, &theme)
        }
    };

    // A closed reader (`qss trace | head`) just ends the output.
    match written {
        Err(e) if is_broken_pipe(&e) => {
            debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}

fn write_json(out: &mut impl Write, doc: &TraceDocument<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, doc)?;
    writeln!(out)?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        let kind = cause
            .downcast_ref::<io::Error>()
            .map(io::Error::kind)
            .or_else(|| {
                cause
                    .downcast_ref::<serde_json::Error>()
                    .and_then(serde_json::Error::io_error_kind)
            });
        kind == Some(io::ErrorKind::BrokenPipe)
    })
}

fn write_text(out: &mut impl Write, input: &[i64], trace: &Trace, theme: &Theme) -> Result<()> {
    writeln!(
        out,
        "{}",
        theme.accent_text(&format!("Input: {:?} ({} steps)", input, trace.len()))
    )?;
    for (i, step) in trace.iter().enumerate() {
        writeln!(out, "#{:<3} {}", i, theme.primary_text(&step.to_string()))?;
        for line in wrap_to_width(step.narration(), NARRATION_WIDTH) {
            writeln!(out, "     {}", theme.secondary_text(&line))?;
        }
    }
    Ok(())
}

/// Wrap `text` into lines no wider than `max` terminal columns.
///
/// Breaks after spaces where possible; text without spaces (Japanese)
/// breaks between characters.
fn wrap_to_width(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut width = 0;

    for word in text.split_inclusive(' ') {
        if width > 0 && width + word.trim_end().width() > max {
            lines.push(line.trim_end().to_string());
            line.clear();
            width = 0;
        }
        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if width + w > max && !ch.is_whitespace() {
                lines.push(line.trim_end().to_string());
                line.clear();
                width = 0;
            }
            line.push(ch);
            width += w;
        }
    }
    if !line.trim().is_empty() {
        lines.push(line.trim_end().to_string());
    }
    lines
}
