//! GPIO abstraction for reading the button input.
//!
//! Defines the [`DigitalInput`] trait the [`Button`](crate::Button) reads through,
//! and, with the `embedded-hal` feature, [`HalInput`] which adapts an
//! `embedded_hal::digital::InputPin`.

/// Trait for abstracting the digital input hardware.
///
/// Implement this for your GPIO port (register access, a HAL, an Arduino-style
/// `pinMode`/`digitalRead` shim) to let the button configure and sample its pin.
/// Invalid pin numbers are the implementation's concern; both methods are
/// infallible, so handle any hardware errors internally.
pub trait DigitalInput {
    /// Configures `pin` as an input with the internal pull-up enabled.
    fn configure_input_pullup(&mut self, pin: u8);

    /// Reads the level of `pin`. Returns `true` for HIGH.
    fn read_digital(&mut self, pin: u8) -> bool;
}

impl<T: DigitalInput + ?Sized> DigitalInput for &mut T {
    fn configure_input_pullup(&mut self, pin: u8) {
        (**self).configure_input_pullup(pin);
    }

    fn read_digital(&mut self, pin: u8) -> bool {
        (**self).read_digital(pin)
    }
}

#[cfg(feature = "embedded-hal")]
pub use hal::HalInput;

#[cfg(feature = "embedded-hal")]
mod hal {
    use super::DigitalInput;
    use embedded_hal::digital::InputPin;

    /// Adapts a single `embedded-hal` input pin to [`DigitalInput`].
    ///
    /// The pin must already be in pull-up input mode (HALs encode this in the
    /// pin's type), so `configure_input_pullup` does nothing. The pin number
    /// passed by the button is ignored. A failed read reports HIGH, i.e.
    /// released.
    pub struct HalInput<P> {
        pin: P,
    }

    impl<P: InputPin> HalInput<P> {
        /// Wraps an input pin.
        pub fn new(pin: P) -> Self {
            Self { pin }
        }

        /// Returns the wrapped pin.
        pub fn into_inner(self) -> P {
            self.pin
        }
    }

    impl<P: InputPin> DigitalInput for HalInput<P> {
        fn configure_input_pullup(&mut self, _pin: u8) {}

        fn read_digital(&mut self, _pin: u8) -> bool {
            match self.pin.is_high() {
                Ok(high) => high,
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("input read failed: {}", defmt::Debug2Format(&_e));
                    true
                }
            }
        }
    }
}
