// Host-side tests for the frame loop bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn new_loop_is_idle_and_runs_nothing() {
    let mut s = LoopState::new();
    assert_eq!(s.phase(), LoopPhase::Idle);
    assert!(!s.is_running());
    assert!(!s.begin_tick());
    assert!(!s.scheduled(1));
    assert_eq!(s.pending(), None);
}

#[test]
fn running_loop_tracks_each_request() {
    let mut s = LoopState::new();
    assert!(s.start());
    assert!(s.scheduled(1));
    assert_eq!(s.pending(), Some(1));

    assert!(s.begin_tick());
    assert_eq!(s.pending(), None);
    assert!(s.scheduled(2));
    assert!(s.begin_tick());
    assert!(s.scheduled(3));
    assert_eq!(s.ticks(), 2);
    assert_eq!(s.pending(), Some(3));
}

#[test]
fn stop_returns_the_pending_request() {
    let mut s = LoopState::new();
    s.start();
    s.scheduled(7);
    assert_eq!(s.stop(), Some(7));
    assert_eq!(s.phase(), LoopPhase::Stopped);
    assert_eq!(s.pending(), None);
}

#[test]
fn stop_twice_is_harmless() {
    let mut s = LoopState::new();
    s.start();
    s.scheduled(4);
    assert_eq!(s.stop(), Some(4));
    assert_eq!(s.stop(), None);
    assert_eq!(s.phase(), LoopPhase::Stopped);
}

#[test]
fn no_frame_runs_after_stop() {
    let mut s = LoopState::new();
    s.start();
    s.scheduled(1);
    assert!(s.begin_tick());
    s.scheduled(2);
    s.stop();

    // A callback that was already queued by the host fires anyway
    assert!(!s.begin_tick());
    // and a late request is refused so the caller cancels it
    assert!(!s.scheduled(3));
    assert_eq!(s.pending(), None);
    assert_eq!(s.ticks(), 1);
}

#[test]
fn stopped_loop_cannot_restart() {
    let mut s = LoopState::new();
    assert!(s.start());
    assert!(!s.start());
    s.stop();
    assert!(!s.start());
    assert!(!s.is_running());
}

#[test]
fn stop_before_start_is_harmless() {
    let mut s = LoopState::default();
    assert_eq!(s.stop(), None);
    assert!(!s.start());
}
