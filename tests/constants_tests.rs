// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn counts_and_breakpoint_are_positive() {
    assert!(NARROW_BREAKPOINT_PX > 0.0);
    assert!(PARTICLE_COUNT_NARROW > 0);
    assert!(PARTICLE_COUNT_WIDE > 0);
    assert!(PARTICLE_COUNT_NARROW < PARTICLE_COUNT_WIDE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphas_are_valid_opacities() {
    assert!(LINK_MAX_ALPHA > 0.0 && LINK_MAX_ALPHA <= 1.0);
    assert!(POINTER_LINK_MAX_ALPHA > 0.0 && POINTER_LINK_MAX_ALPHA <= 1.0);
    // Pointer lines stand out against the particle web
    assert!(POINTER_LINK_MAX_ALPHA > LINK_MAX_ALPHA);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_and_sizes_are_small_and_positive() {
    assert!(MAX_SPEED > 0.0 && MAX_SPEED < 5.0);
    assert!(DRIFT_SPEED > 0.0 && DRIFT_SPEED < 5.0);
    assert!(RADIUS_MIN > 0.0);
    assert!(RADIUS_SPAN >= 0.0);
    assert!(LINE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_radii_have_logical_relationships() {
    assert!(CONNECT_DISTANCE > 0.0);
    assert!(POINTER_RADIUS >= CONNECT_DISTANCE);
    assert_ne!(LINK_COLOR, POINTER_LINK_COLOR);
    assert!(!BRAND_PALETTE.is_empty());
    assert_eq!(MONO_PALETTE.len(), 1);
}

#[test]
fn backdrop_style_keeps_canvas_out_of_the_way() {
    assert!(BACKDROP_STYLE.contains("position:fixed"));
    assert!(BACKDROP_STYLE.contains("pointer-events:none"));
    assert!(BACKDROP_STYLE.contains("z-index:-"));
    assert!(DATA_VARIANT.starts_with("data-"));
    assert!(DATA_SEED.starts_with("data-"));
    assert!(!DEFAULT_CANVAS_ID.is_empty());
}

#[test]
fn pointer_events_come_from_one_family() {
    // Set and clear must see the same devices
    for name in [
        EVENT_POINTER_MOVE,
        EVENT_POINTER_OUT,
        EVENT_POINTER_UP,
        EVENT_POINTER_CANCEL,
    ] {
        assert!(name.starts_with("pointer"), "{name}");
    }
    assert_eq!(EVENT_POINTER_OUT, "pointerout");
}
