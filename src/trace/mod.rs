//! Trace generation for the quicksort visualizer.
//!
//! Runs an instrumented in-place quicksort (Lomuto partition, pivot = last
//! element of the range) and records every intermediate state as a `Step`.
//!
//! # Module Structure
//!
//! - [`generator`] - The instrumented sort and accumulator
//! - [`step`] - `Step`, `StepKind`, `ActiveRange` and `Trace`
//! - [`narration`] - Localized narration text
//! - [`listing`] - Reference source listing indexed by `Step::source_line`

mod error;
mod generator;
mod listing;
mod narration;
mod step;

pub use error::TraceError;
pub use generator::{generate, generate_with_locale};
pub use listing::{LISTING_LANGUAGE, REFERENCE_LISTING};
pub use narration::Locale;
pub use step::{ActiveRange, Step, StepKind, Trace};
