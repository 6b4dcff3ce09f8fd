//! Quick Sort Studio
//!
//! Step-by-step visualizer for in-place quicksort (Lomuto partition, last
//! element as pivot).
//!
//! - [`trace`] turns an input array into an immutable, replayable list of
//!   annotated steps.
//! - [`player`] moves a cursor through that trace, manually or on a timer,
//!   and draws it in the terminal.
//!
//! ```
//! let trace = qss::trace::generate(&[5, 2, 8, 1]).unwrap();
//! assert_eq!(trace.sorted(), &[1, 2, 5, 8]);
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod sample;
pub mod theme;
pub mod trace;

pub use config::Config;
pub use player::PlaybackController;
pub use trace::{generate, Step, StepKind, Trace};
