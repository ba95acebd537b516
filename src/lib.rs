#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: A push button on one pulled-up input pin, polled at a fixed cadence
//! - **`Debouncer`**: The hardware-independent state machine behind `Button`
//! - **`DebounceMethod`**: Which algorithm a poll runs (`Average` leaky integrator or `Scan` run-length counter)
//! - **`Edge`**: A debounced state change (`Pressed` or `Released`) reported by a poll
//! - **`DigitalInput`**: Trait to implement for your GPIO hardware
//! - **`TimeDuration`**: Trait to implement for your duration type, to configure in milliseconds
//!
//! The threshold is counted in polls. A pressed button reads LOW (the input is
//! pulled up), and each press sets a click flag the caller consumes with
//! `take_click` or `clear_click`.

pub mod button;
pub mod debouncer;
pub mod gpio;
pub mod time;
pub mod types;

pub use button::Button;
pub use debouncer::Debouncer;
pub use gpio::DigitalInput;
#[cfg(feature = "embedded-hal")]
pub use gpio::HalInput;
pub use time::TimeDuration;
pub use types::{ConfigError, DebounceMethod, Edge};
