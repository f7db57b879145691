// Host-side tests for pointer presence across input devices.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod pointer {
    include!("../src/core/pointer.rs");
}

use glam::Vec2;
use pointer::*;

const AT: Vec2 = Vec2::new(40.0, 60.0);

#[test]
fn dom_pointer_types_map_to_devices() {
    assert_eq!(PointerKind::from_dom("mouse"), PointerKind::Mouse);
    assert_eq!(PointerKind::from_dom("pen"), PointerKind::Pen);
    assert_eq!(PointerKind::from_dom("touch"), PointerKind::Touch);
    assert_eq!(PointerKind::from_dom(""), PointerKind::Mouse);
    assert_eq!(PointerKind::from_dom("eye-tracker"), PointerKind::Mouse);
}

#[test]
fn any_device_sets_the_pointer_on_move() {
    for kind in [PointerKind::Mouse, PointerKind::Pen, PointerKind::Touch] {
        assert_eq!(next_pointer(None, kind, PointerSignal::Moved(AT)), Some(AT));
    }
}

#[test]
fn lifting_a_touch_or_pen_clears_the_pointer() {
    assert_eq!(next_pointer(Some(AT), PointerKind::Touch, PointerSignal::Up), None);
    assert_eq!(next_pointer(Some(AT), PointerKind::Pen, PointerSignal::Up), None);
    assert_eq!(next_pointer(Some(AT), PointerKind::Mouse, PointerSignal::Up), Some(AT));
}

#[test]
fn cancel_always_clears() {
    for kind in [PointerKind::Mouse, PointerKind::Pen, PointerKind::Touch] {
        assert_eq!(next_pointer(Some(AT), kind, PointerSignal::Cancel), None);
    }
}

#[test]
fn only_leaving_the_window_clears_on_out() {
    let between_elements = PointerSignal::Out { left_window: false };
    let off_window = PointerSignal::Out { left_window: true };
    assert_eq!(next_pointer(Some(AT), PointerKind::Mouse, between_elements), Some(AT));
    assert_eq!(next_pointer(Some(AT), PointerKind::Mouse, off_window), None);
    assert_eq!(next_pointer(Some(AT), PointerKind::Touch, off_window), None);
}
