//! Hardware-independent debounce state machine.
//!
//! Provides [`Debouncer`], which turns a stream of raw "pressed" samples into a
//! debounced pressed state and a one-shot click flag. [`Button`](crate::Button)
//! wraps it with a GPIO read; use it directly when samples come from elsewhere
//! (a shift register, a key matrix scan, a test).

use crate::types::{DebounceMethod, Edge};

/// Debounce state for a single input.
///
/// The counter stays within `[0, threshold]` across every update and every
/// threshold change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    threshold: u8,
    counter: u8,
    pressed: bool,
    clicked: bool,
}

impl Debouncer {
    /// Creates a released debouncer with a zeroed counter.
    ///
    /// `threshold` is the number of polls needed to confirm a state change.
    pub const fn new(threshold: u8) -> Self {
        Self {
            threshold,
            counter: 0,
            pressed: false,
            clicked: false,
        }
    }

    /// Feeds one sample through the selected algorithm.
    #[inline]
    pub fn update(&mut self, method: DebounceMethod, raw_pressed: bool) -> Option<Edge> {
        match method {
            DebounceMethod::Average => self.update_average(raw_pressed),
            DebounceMethod::Scan => self.update_scan(raw_pressed),
        }
    }

    /// Average filter (leaky integrator).
    ///
    /// A sample that contradicts the debounced state counts the counter up; a
    /// sample that confirms it leaks the counter down, never below zero. The
    /// state flips when the counter reaches the threshold.
    ///
    /// # Returns
    /// The edge if the debounced state flipped on this sample.
    pub fn update_average(&mut self, raw_pressed: bool) -> Option<Edge> {
        if raw_pressed == self.pressed {
            self.counter = self.counter.saturating_sub(1);
            None
        } else {
            self.advance()
        }
    }

    /// Scan state (run-length counter).
    ///
    /// A sample that confirms the debounced state resets the counter at once,
    /// so only `threshold` consecutive contradicting samples flip the state.
    ///
    /// # Returns
    /// The edge if the debounced state flipped on this sample.
    pub fn update_scan(&mut self, raw_pressed: bool) -> Option<Edge> {
        if raw_pressed == self.pressed {
            self.counter = 0;
            None
        } else {
            self.advance()
        }
    }

    fn advance(&mut self) -> Option<Edge> {
        self.counter = self.counter.saturating_add(1);
        if self.counter < self.threshold {
            return None;
        }

        self.pressed = !self.pressed;
        self.counter = 0;

        if self.pressed {
            self.clicked = true;
            Some(Edge::Pressed)
        } else {
            Some(Edge::Released)
        }
    }

    /// Changes the threshold, clamping the counter into the new range.
    pub fn set_threshold(&mut self, threshold: u8) {
        self.threshold = threshold;
        self.counter = self.counter.min(threshold);
    }

    /// Returns to the initial released state, keeping the threshold.
    pub fn reset(&mut self) {
        self.counter = 0;
        self.pressed = false;
        self.clicked = false;
    }

    /// Returns the debounced pressed state.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns true if a press was detected and not yet cleared.
    #[inline]
    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    /// Returns the click flag and clears it.
    #[inline]
    pub fn take_click(&mut self) -> bool {
        core::mem::take(&mut self.clicked)
    }

    /// Clears the click flag.
    #[inline]
    pub fn clear_click(&mut self) {
        self.clicked = false;
    }

    /// Returns the current counter value.
    #[inline]
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Returns the configured threshold.
    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}
