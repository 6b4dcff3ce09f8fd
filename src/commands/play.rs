//! Play subcommand handler

use anyhow::{bail, Result};
use tracing::info;

use qss::cli::PlayArgs;
use qss::player::{run_player, PlaybackController, PlayerApp, Speed};
use qss::theme::Theme;
use qss::Config;

use super::resolve_input;

/// Open the interactive player.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("qss play needs an interactive terminal; use `qss trace` for piped output");
    }

    let config = Config::load()?;
    let input = resolve_input(&args.input, &config)?;
    let speed = Speed::new(args.speed.unwrap_or(config.playback.speed));
    let theme = Theme::from_name(args.theme.unwrap_or(config.display.theme));

    info!(len = input.values.len(), speed = speed.value(), locale = %input.locale, "starting player");

    let controller = PlaybackController::from_input(&input.values, speed, input.locale)?;
    let mut app = PlayerApp::new(controller, input.sampler, theme);
    run_player(&mut app)
}
