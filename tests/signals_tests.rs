// Host-side tests for input smoothing, scroll progress and the scene clock.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod clock {
        include!("../src/core/clock.rs");
    }
    pub mod signals {
        include!("../src/core/signals.rs");
    }
}

use crate::core::clock::SceneClock;
use crate::core::signals::*;
use glam::Vec2;
use std::time::Duration;

#[test]
fn ease_toward_closes_fraction_of_gap() {
    assert!((ease_toward(0.0_f32, 10.0, 0.06) - 0.6).abs() < 1e-6);
    let v = ease_toward(Vec2::ZERO, Vec2::new(1.0, -1.0), 0.5);
    assert_eq!(v, Vec2::new(0.5, -0.5));
}

#[test]
fn smoothing_converges_without_overshoot() {
    let mut s = Smoothed::new(0.0_f32, constants::SCROLL_SMOOTHING);
    s.set_target(800.0);
    let mut prev = s.value;
    for _ in 0..2000 {
        let v = s.step();
        assert!(v >= prev, "smoothed value went backwards");
        assert!(v <= 800.0, "overshoot: {v}");
        prev = v;
    }
    assert!((s.value - 800.0).abs() < 1e-2);

    // once close, it stays close
    let eps = 1e-2;
    for _ in 0..100 {
        s.step();
        assert!((s.value - 800.0).abs() < eps);
    }
}

#[test]
fn pointer_smoothing_uses_slower_rate() {
    let mut signals = InputSignals::new(1000.0);
    assert_eq!(signals.pointer.rate(), constants::POINTER_SMOOTHING);
    assert_eq!(signals.scroll.rate(), constants::SCROLL_SMOOTHING);

    signals.on_pointer_move(1000.0, 0.0, 1000.0, 800.0);
    assert_eq!(signals.pointer.target, Vec2::new(1.0, -1.0));
    // handlers never touch the displayed value
    assert_eq!(signals.pointer.value, Vec2::ZERO);

    signals.tick();
    assert!((signals.pointer.value.x - 0.03).abs() < 1e-6);
    assert!((signals.pointer.value.y + 0.03).abs() < 1e-6);
}

#[test]
fn normalized_pointer_maps_viewport_to_unit_square() {
    assert_eq!(normalized_pointer(500.0, 400.0, 1000.0, 800.0), Vec2::ZERO);
    assert_eq!(normalized_pointer(0.0, 800.0, 1000.0, 800.0), Vec2::new(-1.0, 1.0));
    // pointer captured outside the window
    assert_eq!(normalized_pointer(-300.0, 5000.0, 1000.0, 800.0), Vec2::new(-1.0, 1.0));
    assert_eq!(normalized_pointer(10.0, 10.0, 0.0, 800.0), Vec2::ZERO);
}

#[test]
fn scroll_progress_is_always_in_unit_interval() {
    for (scroll, max) in [
        (0.0, 1000.0),
        (500.0, 1000.0),
        (1500.0, 1000.0),
        (-40.0, 1000.0),
        (f32::NAN, 1000.0),
        (f32::INFINITY, 1000.0),
    ] {
        let p = scroll_progress(scroll, max);
        assert!((0.0..=1.0).contains(&p), "{scroll}/{max} -> {p}");
    }
    assert_eq!(scroll_progress(500.0, 1000.0), 0.5);
}

#[test]
fn non_scrollable_page_has_zero_progress() {
    let mut signals = InputSignals::new(0.0);
    signals.on_scroll(250.0);
    for _ in 0..200 {
        signals.tick();
        assert_eq!(signals.scroll_progress(), 0.0);
    }
    signals.set_max_scroll(-10.0);
    assert_eq!(signals.max_scroll(), 0.0);
}

#[test]
fn progress_follows_smoothed_scroll_not_raw_target() {
    let mut signals = InputSignals::new(1000.0);
    signals.on_scroll(1000.0);
    assert_eq!(signals.scroll_progress(), 0.0);
    signals.tick();
    assert!((signals.scroll_progress() - 0.06).abs() < 1e-5);

    // a resize that shrinks the page re-bases progress immediately
    signals.set_max_scroll(30.0);
    assert_eq!(signals.scroll_progress(), 1.0);
}

#[test]
fn clock_reports_seconds_since_start() {
    let clock = SceneClock::start();
    let later = instant::Instant::now() + Duration::from_millis(1500);
    let t = clock.elapsed_at(later);
    assert!((1.5..1.6).contains(&t), "t = {t}");
    assert!(clock.elapsed() >= 0.0);
}
