//! Shared test infrastructure for button-debouncer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_debouncer::{DigitalInput, TimeDuration};
use heapless::{Deque, Vec};

// ============================================================================
// Mock Duration
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// Mock GPIO
// ============================================================================

pub const HIGH: bool = true;
pub const LOW: bool = false;

/// Mock GPIO that replays scripted levels and records pin configuration.
///
/// Once the script runs out, the last level is held.
pub struct MockGpio {
    script: Deque<bool, 256>,
    level: bool,
    configured_pins: Vec<u8, 8>,
    reads: Vec<u8, 256>,
}

impl MockGpio {
    /// Creates a GPIO whose input idles HIGH (released).
    pub fn new() -> Self {
        Self {
            script: Deque::new(),
            level: HIGH,
            configured_pins: Vec::new(),
            reads: Vec::new(),
        }
    }

    /// Sets the level returned by every read after the script is exhausted.
    pub fn hold(&mut self, level: bool) {
        self.script.clear();
        self.level = level;
    }

    /// Queues levels to return on subsequent reads.
    pub fn push_levels(&mut self, levels: &[bool]) {
        for &level in levels {
            self.script.push_back(level).unwrap();
        }
    }

    pub fn configured_pins(&self) -> &[u8] {
        &self.configured_pins
    }

    /// Pins read so far, in order.
    pub fn reads(&self) -> &[u8] {
        &self.reads
    }
}

impl DigitalInput for MockGpio {
    fn configure_input_pullup(&mut self, pin: u8) {
        self.configured_pins.push(pin).unwrap();
    }

    fn read_digital(&mut self, pin: u8) -> bool {
        let _ = self.reads.push(pin);
        if let Some(level) = self.script.pop_front() {
            self.level = level;
        }
        self.level
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Deterministic pseudo-random level sequence (xorshift)
pub fn noise(seed: u32, len: usize) -> Vec<bool, 256> {
    let mut state = seed.max(1);
    let mut levels = Vec::new();
    for _ in 0..len.min(256) {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        levels.push(state & 1 == 1).unwrap();
    }
    levels
}
