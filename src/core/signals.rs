use crate::constants::{POINTER_SMOOTHING, SCROLL_SMOOTHING};
use glam::Vec2;
use std::ops::{Add, Mul, Sub};

/// One step of exponential smoothing: close fraction `k` of the gap to `target`.
#[inline]
pub fn ease_toward<T>(current: T, target: T, k: f32) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    current + (target - current) * k
}

/// A raw target written by input events and a displayed value that follows it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Smoothed<T> {
    pub target: T,
    pub value: T,
    rate: f32,
}

impl<T> Smoothed<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    pub fn new(initial: T, rate: f32) -> Self {
        Self {
            target: initial,
            value: initial,
            rate,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Advance the displayed value by one frame.
    #[inline]
    pub fn step(&mut self) -> T {
        self.value = ease_toward(self.value, self.target, self.rate);
        self.value
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }
}

/// Map client coordinates to [-1, 1] offsets from the viewport centre.
#[inline]
pub fn normalized_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = ((client_x / width - 0.5) * 2.0) as f32;
    let y = ((client_y / height - 0.5) * 2.0) as f32;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Pointer and scroll state shared between event handlers and the frame tick.
///
/// Handlers only touch targets; `tick` is the only writer of the smoothed values.
#[derive(Clone, Debug)]
pub struct InputSignals {
    pub pointer: Smoothed<Vec2>,
    pub scroll: Smoothed<f32>,
    max_scroll: f32,
}

impl Default for InputSignals {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl InputSignals {
    pub fn new(max_scroll: f32) -> Self {
        Self {
            pointer: Smoothed::new(Vec2::ZERO, POINTER_SMOOTHING),
            scroll: Smoothed::new(0.0, SCROLL_SMOOTHING),
            max_scroll: max_scroll.max(0.0),
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        self.pointer
            .set_target(normalized_pointer(client_x, client_y, width, height));
    }

    pub fn on_scroll(&mut self, offset_px: f64) {
        self.scroll.set_target(offset_px as f32);
    }

    pub fn set_max_scroll(&mut self, max_scroll_px: f32) {
        self.max_scroll = max_scroll_px.max(0.0);
    }

    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    pub fn tick(&mut self) {
        self.pointer.step();
        self.scroll.step();
    }

    /// Smoothed scroll over the scrollable distance, clamped to [0, 1].
    pub fn scroll_progress(&self) -> f32 {
        scroll_progress(self.scroll.value, self.max_scroll)
    }
}

#[inline]
pub fn scroll_progress(scroll_px: f32, max_scroll_px: f32) -> f32 {
    if max_scroll_px > 0.0 && scroll_px.is_finite() {
        (scroll_px / max_scroll_px).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
