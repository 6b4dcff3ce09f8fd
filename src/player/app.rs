//! Player application state
//!
//! Everything the interactive player needs between frames: the playback
//! controller, the sampler used for fresh inputs, the theme and UI toggles.

use tracing::debug;

use crate::player::controller::PlaybackController;
use crate::sample::InputSampler;
use crate::theme::Theme;
use crate::trace::TraceError;

/// State of the interactive player.
#[derive(Debug)]
pub struct PlayerApp {
    pub controller: PlaybackController,
    pub sampler: InputSampler,
    pub theme: Theme,
    /// Whether the help overlay is visible
    pub show_help: bool,
}

impl PlayerApp {
    pub fn new(controller: PlaybackController, sampler: InputSampler, theme: Theme) -> Self {
        Self {
            controller,
            sampler,
            theme,
            show_help: false,
        }
    }

    /// Draw a new random input and restart playback on it.
    pub fn reshuffle(&mut self) -> Result<(), TraceError> {
        let input = self.sampler.sample();
        debug!(?input, "reshuffling");
        self.controller.reset(&input)
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
