//! Hero slider state machine.
//!
//! The server renders the initial state; `static/js/slider.js` runs the same
//! transitions in the browser. A timer tick only advances while auto-play is
//! on, and any manual navigation turns auto-play off for good.

use serde::{Deserialize, Serialize};

/// Default auto-advance interval.
pub const DEFAULT_INTERVAL_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderState {
    slide_count: usize,
    current: usize,
    is_auto_playing: bool,
    interval_ms: u32,
}

impl SliderState {
    /// A slider at the first slide with auto-play on.
    ///
    /// Auto-play is off when there is at most one slide.
    #[must_use]
    pub const fn new(slide_count: usize, interval_ms: u32) -> Self {
        Self {
            slide_count,
            current: 0,
            is_auto_playing: slide_count > 1,
            interval_ms,
        }
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn is_auto_playing(&self) -> bool {
        self.is_auto_playing
    }

    #[must_use]
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Timer tick. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_auto_playing || self.slide_count < 2 {
            return false;
        }
        self.current = (self.current + 1) % self.slide_count;
        true
    }

    /// Manual "next" button.
    pub fn next(&mut self) {
        self.is_auto_playing = false;
        if self.slide_count > 0 {
            self.current = (self.current + 1) % self.slide_count;
        }
    }

    /// Manual "previous" button.
    pub fn prev(&mut self) {
        self.is_auto_playing = false;
        if self.slide_count > 0 {
            self.current = (self.current + self.slide_count - 1) % self.slide_count;
        }
    }

    /// Manual dot navigation. Out-of-range indices are ignored but still
    /// stop auto-play.
    pub fn go_to(&mut self, index: usize) {
        self.is_auto_playing = false;
        if index < self.slide_count {
            self.current = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut slider = SliderState::new(3, DEFAULT_INTERVAL_MS);
        assert!(slider.is_auto_playing());
        assert!(slider.tick());
        assert_eq!(slider.current(), 1);
        slider.tick();
        slider.tick();
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn test_manual_navigation_stops_auto_play() {
        let mut slider = SliderState::new(3, DEFAULT_INTERVAL_MS);
        slider.tick();
        slider.next();
        assert_eq!(slider.current(), 2);
        assert!(!slider.is_auto_playing());
        assert!(!slider.tick());
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn test_prev_wraps_backwards() {
        let mut slider = SliderState::new(3, DEFAULT_INTERVAL_MS);
        slider.prev();
        assert_eq!(slider.current(), 2);
        assert!(!slider.is_auto_playing());
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut slider = SliderState::new(3, DEFAULT_INTERVAL_MS);
        slider.go_to(1);
        assert_eq!(slider.current(), 1);
        slider.go_to(7);
        assert_eq!(slider.current(), 1);
        assert!(!slider.is_auto_playing());
    }

    #[test]
    fn test_single_slide_never_auto_plays() {
        let mut slider = SliderState::new(1, DEFAULT_INTERVAL_MS);
        assert!(!slider.is_auto_playing());
        assert!(!slider.tick());
        slider.next();
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn test_empty_slider_is_inert() {
        let mut slider = SliderState::new(0, DEFAULT_INTERVAL_MS);
        slider.next();
        slider.prev();
        assert_eq!(slider.current(), 0);
    }
}
