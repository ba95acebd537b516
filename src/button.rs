//! Polled push button with debounced state and click detection.
//!
//! Provides [`Button`], which owns a [`DigitalInput`] and samples one pulled-up
//! pin per poll. A released button reads HIGH, a pressed button reads LOW.

use crate::debouncer::Debouncer;
use crate::gpio::DigitalInput;
use crate::time::{TimeDuration, polls_for};
use crate::types::{ConfigError, DebounceMethod, Edge};

/// A debounced push button on a single input pin.
///
/// Call [`filter_average`](Self::filter_average) or
/// [`scan_state`](Self::scan_state) (or [`poll`](Self::poll)) at a fixed
/// cadence; the threshold is counted in polls, so the poll period sets the
/// debounce time.
///
/// # Type Parameters
/// * `G` - GPIO implementation type
pub struct Button<G: DigitalInput> {
    gpio: G,
    pin: u8,
    debouncer: Debouncer,
}

impl<G: DigitalInput> Button<G> {
    /// Creates a released button and configures `pin` as a pulled-up input.
    pub fn new(mut gpio: G, pin: u8, threshold: u8) -> Self {
        gpio.configure_input_pullup(pin);

        Self {
            gpio,
            pin,
            debouncer: Debouncer::new(threshold),
        }
    }

    /// Creates a button whose threshold covers `debounce` at the given poll period.
    ///
    /// The threshold is `debounce / poll_period` rounded up, capped at `u8::MAX`.
    ///
    /// # Returns
    /// * `Err(ConfigError::ZeroPollPeriod)` - `poll_period` is zero
    pub fn with_debounce_time<D: TimeDuration>(
        gpio: G,
        pin: u8,
        debounce: D,
        poll_period: D,
    ) -> Result<Self, ConfigError> {
        let threshold = polls_for(debounce, poll_period).ok_or(ConfigError::ZeroPollPeriod)?;
        Ok(Self::new(gpio, pin, threshold))
    }

    /// Moves the button to another pin and threshold.
    ///
    /// The new pin is configured as a pulled-up input. Debounced state and
    /// click flag are kept; the counter is clamped to the new threshold.
    pub fn set_pin_time(&mut self, pin: u8, threshold: u8) {
        self.pin = pin;
        self.debouncer.set_threshold(threshold);
        self.gpio.configure_input_pullup(pin);

        #[cfg(feature = "defmt")]
        defmt::debug!("button reconfigured: pin {}, threshold {}", pin, threshold);
    }

    /// Samples the pin and runs the selected algorithm.
    #[inline]
    pub fn poll(&mut self, method: DebounceMethod) -> Option<Edge> {
        let raw_pressed = self.read_pressed();
        let edge = self.debouncer.update(method, raw_pressed);
        self.log_edge(edge);
        edge
    }

    /// Samples the pin and runs the average filter.
    ///
    /// See [`Debouncer::update_average`].
    pub fn filter_average(&mut self) -> Option<Edge> {
        self.poll(DebounceMethod::Average)
    }

    /// Samples the pin and runs the scan-state counter.
    ///
    /// See [`Debouncer::update_scan`].
    pub fn scan_state(&mut self) -> Option<Edge> {
        self.poll(DebounceMethod::Scan)
    }

    fn read_pressed(&mut self) -> bool {
        // Pulled up: pressed pulls the line low
        !self.gpio.read_digital(self.pin)
    }

    #[inline]
    fn log_edge(&self, _edge: Option<Edge>) {
        #[cfg(feature = "defmt")]
        {
            if let Some(edge) = _edge {
                defmt::debug!("button on pin {}: {}", self.pin, edge);
            }
        }
    }

    /// Returns the debounced pressed state.
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }

    /// Returns true if a press was detected and not yet cleared.
    pub fn is_clicked(&self) -> bool {
        self.debouncer.is_clicked()
    }

    /// Returns the click flag and clears it.
    pub fn take_click(&mut self) -> bool {
        self.debouncer.take_click()
    }

    /// Clears the click flag after the press has been handled.
    pub fn clear_click(&mut self) {
        self.debouncer.clear_click();
    }

    /// Returns the current counter value.
    pub fn counter(&self) -> u8 {
        self.debouncer.counter()
    }

    /// Returns the threshold in polls.
    pub fn threshold(&self) -> u8 {
        self.debouncer.threshold()
    }

    /// Returns the input pin number.
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Returns the underlying state machine.
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Returns a reference to the GPIO.
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Returns a mutable reference to the GPIO.
    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    /// Consumes the button and returns the GPIO.
    pub fn release(self) -> G {
        self.gpio
    }
}
