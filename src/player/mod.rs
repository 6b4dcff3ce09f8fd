//! Quicksort trace player
//!
//! Replays a generated trace step by step, manually or automatically.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `controller`: `PlaybackController`, the cursor/running state machine
//! - `timer`: `Ticker`, the cancellable scheduled tick
//! - `state`: shared value types (`Speed`, `PlayState`, `InputResult`)
//! - `app`: `PlayerApp`, state of the interactive player between frames
//! - `input/`: Keyboard input handling
//! - `render/`: UI rendering (bars, timeline, listing, status, help)
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use qss::player::{PlaybackController, Speed};
//! use qss::trace::Locale;
//!
//! let mut ctl = PlaybackController::from_input(&[5, 2, 8, 1], Speed::new(980), Locale::En).unwrap();
//! let start = Instant::now();
//! ctl.play(start);
//! ctl.tick(start + Duration::from_millis(21));
//! assert_eq!(ctl.cursor(), 1);
//! ```

pub mod app;
mod controller;
pub(crate) mod input;
mod native;
pub mod render;
pub mod state;
mod timer;

pub use app::PlayerApp;
pub use controller::PlaybackController;
pub use native::run_player;
pub use state::{InputResult, PlayState, Speed};
pub use timer::Ticker;
