//! Tutor photo carousel.
//!
//! A small state machine over the active slide index. Rotation is driven by an
//! interval timer on the shared [`TimerQueue`]; the carousel owns the only
//! handle to it and cancels it before starting another, so at most one
//! rotation timer is ever live.
//!
//! | Event            | Index                | Timer                      |
//! |------------------|----------------------|----------------------------|
//! | construction     | 0                    | start `initial` (if N > 1) |
//! | tick             | (i + 1) mod N        | unchanged                  |
//! | indicator click  | clicked index        | restart at `resume`        |
//! | pointer enter    | unchanged            | cancel                     |
//! | pointer leave    | unchanged            | restart at `resume`        |
//!
//! A single-slide carousel is static: no timer, and every event is a no-op.

use crate::timers::{TimerId, TimerQueue};
use std::time::Duration;

/// Auto-advance periods.
///
/// `initial` runs from page load until the first interaction, `resume` after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub initial: Duration,
    pub resume: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(2500),
            resume: Duration::from_millis(4000),
        }
    }
}

#[derive(Debug)]
pub struct Carousel {
    slide_count: usize,
    index: usize,
    timing: CarouselTiming,
    timer: Option<TimerId>,
}

impl Carousel {
    /// Create a carousel showing slide 0. Rotation starts immediately when
    /// there is more than one slide.
    pub fn new(slide_count: usize, timing: CarouselTiming, timers: &mut TimerQueue) -> Self {
        let mut carousel = Self {
            slide_count: slide_count.max(1),
            index: 0,
            timing,
            timer: None,
        };
        if carousel.rotates() {
            carousel.restart(timers, timing.initial);
        }
        carousel
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the carousel auto-advances at all.
    pub fn rotates(&self) -> bool {
        self.slide_count > 1
    }

    /// Whether a rotation timer is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Handle a fired timer. Returns `true` if it was this carousel's tick.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.index = (self.index + 1) % self.slide_count;
        true
    }

    /// Indicator click: jump to `index` and restart rotation at the resume period.
    /// Indices past the last slide are ignored.
    pub fn select(&mut self, timers: &mut TimerQueue, index: usize) {
        if !self.rotates() || index >= self.slide_count {
            return;
        }
        self.index = index;
        self.restart(timers, self.timing.resume);
    }

    /// Pause rotation while the pointer is over the carousel.
    pub fn pointer_enter(&mut self, timers: &mut TimerQueue) {
        self.stop(timers);
    }

    /// Resume rotation at the resume period.
    pub fn pointer_leave(&mut self, timers: &mut TimerQueue) {
        if self.rotates() {
            self.restart(timers, self.timing.resume);
        }
    }

    /// Indicator states, `true` for the active one. Exactly one is active.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.slide_count).map(|i| i == self.index).collect()
    }

    /// Horizontal track translation, in percent of the slide width.
    pub fn track_offset_percent(&self) -> usize {
        self.index * 100
    }

    fn restart(&mut self, timers: &mut TimerQueue, period: Duration) {
        self.stop(timers);
        self.timer = Some(timers.set_interval(period));
    }

    fn stop(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.timer.take() {
            timers.clear(id);
        }
    }
}
