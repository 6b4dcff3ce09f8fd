//! Trace generation errors.

/// Errors that can occur while generating a trace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: &'static str },
}
