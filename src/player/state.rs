//! Player state types
//!
//! Shared value types used by the controller, input handlers and renderers.

use std::time::Duration;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Running state of the playback state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Running,
}

/// Playback speed in `[Speed::MIN, Speed::MAX]`.
///
/// Higher is faster: the tick period is `1001 - speed` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u16);

impl Speed {
    pub const MIN: u16 = 100;
    pub const MAX: u16 = 980;
    pub const DEFAULT: u16 = 700;
    /// Increment used by the speed up/down keys.
    pub const STEP: u16 = 40;

    /// Create a speed, clamping out-of-range values.
    pub fn new(value: u16) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Delay between automatic ticks.
    pub fn period(&self) -> Duration {
        Duration::from_millis(1001 - u64::from(self.0))
    }

    /// Speed as a percentage of the maximum, for display.
    pub fn percent(&self) -> u8 {
        ((f64::from(self.0) / f64::from(Self::MAX)) * 100.0).round() as u8
    }

    pub fn faster(&self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn slower(&self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
