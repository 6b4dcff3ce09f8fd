//! Playback controller
//!
//! Owns a trace, a cursor into it, and the running/stopped state machine.
//! Time is passed in explicitly so that automatic advance is driven by
//! whoever owns the event loop (and is deterministic in tests).

use std::time::{Duration, Instant};

use tracing::debug;

use crate::player::state::{PlayState, Speed};
use crate::player::timer::Ticker;
use crate::trace::{generate_with_locale, Locale, Step, Trace, TraceError};

/// A trace together with the cursor pointing into it.
///
/// Replaced as a single value on reset so the cursor is never paired with
/// the wrong trace.
#[derive(Debug, Clone)]
struct Session {
    trace: Trace,
    cursor: usize,
}

impl Session {
    fn new(trace: Trace) -> Self {
        Self { trace, cursor: 0 }
    }

    fn last(&self) -> usize {
        self.trace.last_index()
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.last()
    }
}

/// Timeline state machine over a generated trace.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    session: Session,
    state: PlayState,
    speed: Speed,
    ticker: Ticker,
    locale: Locale,
}

impl PlaybackController {
    /// Wrap an existing trace. Starts stopped at the first step.
    pub fn new(trace: Trace, speed: Speed, locale: Locale) -> Self {
        Self {
            session: Session::new(trace),
            state: PlayState::Stopped,
            speed,
            ticker: Ticker::new(),
            locale,
        }
    }

    /// Generate a trace for `input` and wrap it.
    pub fn from_input(input: &[i64], speed: Speed, locale: Locale) -> Result<Self, TraceError> {
        let trace = generate_with_locale(input, locale)?;
        Ok(Self::new(trace, speed, locale))
    }

    // === Observers ===

    pub fn current_step(&self) -> &Step {
        // The cursor is always clamped into the trace.
        &self.session.trace.steps()[self.session.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.session.cursor
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn trace_len(&self) -> usize {
        self.session.trace.len()
    }

    pub fn trace(&self) -> &Trace {
        &self.session.trace
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Instant of the next automatic tick, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    /// How long an event loop may wait before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.remaining(now)
    }

    // === Cursor movement ===

    /// Advance one step; no-op at the end. Reaching the end stops playback.
    pub fn step_forward(&mut self) {
        let last = self.session.last();
        self.session.cursor = (self.session.cursor + 1).min(last);
        if self.session.at_end() {
            self.stop();
        }
    }

    /// Go back one step; no-op at the start.
    pub fn step_backward(&mut self) {
        self.session.cursor = self.session.cursor.saturating_sub(1);
    }

    /// Jump to the first step.
    pub fn seek_start(&mut self) {
        self.session.cursor = 0;
    }

    /// Jump to the final step. Stops playback.
    pub fn seek_end(&mut self) {
        self.session.cursor = self.session.last();
        self.stop();
    }

    // === Running state ===

    /// Start automatic advance. Ignored when already running or at the end.
    pub fn play(&mut self, now: Instant) {
        if self.is_running() || self.session.at_end() {
            return;
        }
        self.state = PlayState::Running;
        self.ticker.schedule(now, self.speed.period());
        debug!(cursor = self.session.cursor, speed = self.speed.value(), "playback started");
    }

    /// Stop automatic advance and retract any pending tick. Idempotent.
    pub fn pause(&mut self) {
        if self.is_running() {
            debug!(cursor = self.session.cursor, "playback paused");
        }
        self.stop();
    }

    /// Pause if running, otherwise play.
    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Change speed. A tick already scheduled keeps its deadline; the new
    /// period applies from the next one.
    pub fn set_speed(&mut self, value: u16) {
        self.speed = Speed::new(value);
    }

    /// Fire the pending tick if it is due.
    ///
    /// Returns true if the cursor advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running() || !self.ticker.due(now) {
            return false;
        }
        self.step_forward();
        if self.is_running() {
            self.ticker.schedule(now, self.speed.period());
        } else {
            debug!("playback reached the end");
        }
        true
    }

    /// Replace the trace with one generated from `input`.
    ///
    /// The new trace is built before anything is touched: on error the
    /// current session and state are left as they were.
    pub fn reset(&mut self, input: &[i64]) -> Result<(), TraceError> {
        let trace = generate_with_locale(input, self.locale)?;
        self.replace_trace(trace);
        Ok(())
    }

    /// Swap in an already generated trace, stopped at its first step.
    pub fn replace_trace(&mut self, trace: Trace) {
        self.stop();
        debug!(steps = trace.len(), "trace replaced");
        self.session = Session::new(trace);
    }

    fn stop(&mut self) {
        self.state = PlayState::Stopped;
        self.ticker.cancel();
    }
}
