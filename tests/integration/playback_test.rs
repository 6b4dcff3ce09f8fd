//! Playback controller driven through a simulated clock

use std::time::{Duration, Instant};

use qss::player::{PlayState, PlaybackController, Speed};
use qss::trace::{Locale, StepKind};

fn controller(input: &[i64], speed: u16) -> PlaybackController {
    PlaybackController::from_input(input, Speed::new(speed), Locale::En).unwrap()
}

/// Fire ticks at exactly each deadline until playback stops.
fn run_to_completion(ctl: &mut PlaybackController, start: Instant) -> usize {
    let mut now = start;
    let mut ticks = 0;
    while let Some(deadline) = ctl.next_deadline() {
        now = now.max(deadline);
        assert!(ctl.tick(now));
        ticks += 1;
    }
    ticks
}

#[test]
fn autoplay_walks_every_step_then_stops() {
    let mut ctl = controller(&[5, 2, 8, 1], 900);
    let start = Instant::now();
    ctl.play(start);

    let ticks = run_to_completion(&mut ctl, start);

    assert_eq!(ticks, ctl.trace_len() - 1);
    assert_eq!(ctl.cursor(), ctl.trace_len() - 1);
    assert_eq!(ctl.state(), PlayState::Stopped);
    assert_eq!(ctl.current_step().kind(), StepKind::Complete);
}

#[test]
fn cursor_clamps_at_last_step() {
    let mut ctl = controller(&[3, 1, 2], 700);
    for _ in 0..(ctl.trace_len() * 3) {
        ctl.step_forward();
    }
    assert_eq!(ctl.cursor(), ctl.trace_len() - 1);
    assert!(!ctl.is_running());
}

#[test]
fn cursor_clamps_at_first_step() {
    let mut ctl = controller(&[3, 1, 2], 700);
    ctl.step_backward();
    ctl.step_backward();
    assert_eq!(ctl.cursor(), 0);
    assert_eq!(ctl.current_step().kind(), StepKind::Init);
}

#[test]
fn pause_retracts_pending_tick() {
    let mut ctl = controller(&[4, 3, 2, 1], 500);
    let start = Instant::now();
    ctl.play(start);
    ctl.pause();

    assert_eq!(ctl.next_deadline(), None);
    assert!(!ctl.tick(start + Duration::from_secs(60)));
    assert_eq!(ctl.cursor(), 0);
}

#[test]
fn tick_before_deadline_does_nothing() {
    let mut ctl = controller(&[4, 3, 2, 1], 501);
    let start = Instant::now();
    ctl.play(start);

    assert!(!ctl.tick(start + Duration::from_millis(499)));
    assert_eq!(ctl.cursor(), 0);
    assert!(ctl.tick(start + Duration::from_millis(500)));
    assert_eq!(ctl.cursor(), 1);
}

#[test]
fn speed_change_applies_from_next_tick() {
    let mut ctl = controller(&[4, 3, 2, 1], 101);
    let start = Instant::now();
    ctl.play(start);
    let first = ctl.next_deadline().unwrap();

    ctl.set_speed(901);
    assert_eq!(ctl.next_deadline(), Some(first));

    assert!(ctl.tick(first));
    assert_eq!(ctl.next_deadline(), Some(first + Duration::from_millis(100)));
}

#[test]
fn reset_swaps_trace_and_stops() {
    let mut ctl = controller(&[4, 3, 2, 1], 700);
    let start = Instant::now();
    ctl.play(start);
    ctl.step_forward();
    ctl.step_forward();

    ctl.reset(&[9, 8]).unwrap();

    assert_eq!(ctl.cursor(), 0);
    assert_eq!(ctl.state(), PlayState::Stopped);
    assert_eq!(ctl.next_deadline(), None);
    assert_eq!(ctl.current_step().array(), &[9, 8]);
    assert!(!ctl.tick(start + Duration::from_secs(60)));
}

#[test]
fn failed_reset_keeps_current_session() {
    let mut ctl = controller(&[4, 3, 2, 1], 700);
    ctl.step_forward();
    let len = ctl.trace_len();

    assert!(ctl.reset(&[]).is_err());

    assert_eq!(ctl.cursor(), 1);
    assert_eq!(ctl.trace_len(), len);
    assert_eq!(ctl.trace().get(0).unwrap().array(), &[4, 3, 2, 1]);
}

#[test]
fn play_at_end_is_ignored() {
    let mut ctl = controller(&[2, 1], 700);
    ctl.seek_end();
    ctl.play(Instant::now());
    assert!(!ctl.is_running());
    assert_eq!(ctl.next_deadline(), None);
}

#[test]
fn seek_start_after_end_allows_replay() {
    let mut ctl = controller(&[2, 1], 700);
    ctl.seek_end();
    ctl.seek_start();
    let start = Instant::now();
    ctl.play(start);
    assert!(ctl.is_running());
    assert_eq!(run_to_completion(&mut ctl, start), ctl.trace_len() - 1);
}
