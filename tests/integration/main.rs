//! Integration tests for qss

mod helpers;

mod cli_test;
mod playback_test;
mod trace_test;
