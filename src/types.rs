//! Core types shared by the debouncer and the button.

/// Which debounce algorithm a poll should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceMethod {
    /// Leaky integrator: disagreeing samples count up, agreeing samples leak
    /// the counter back down toward zero.
    #[default]
    Average,

    /// Run-length counter: any agreeing sample resets the counter to zero.
    Scan,
}

/// A debounced state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Debounced state became pressed.
    Pressed,

    /// Debounced state became released.
    Released,
}

/// Button configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Poll period of zero cannot be converted into a poll count.
    ZeroPollPeriod,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPollPeriod => {
                write!(f, "poll period must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
