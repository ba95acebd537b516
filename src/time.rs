//! Time abstraction for converting a debounce time into a poll count.

/// Trait abstraction for duration types.
///
/// Implement this for your platform's duration type (e.g. `embassy_time::Duration`
/// or a SysTick millisecond count) to configure a [`Button`](crate::Button) in
/// real time units instead of poll counts.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Number of polls of `poll_period` needed to cover `debounce`, rounded up.
///
/// Saturates at `u8::MAX`. Returns `None` if `poll_period` is zero.
pub(crate) fn polls_for<D: TimeDuration>(debounce: D, poll_period: D) -> Option<u8> {
    let period = poll_period.as_millis();
    if period == 0 {
        return None;
    }

    let polls = debounce.as_millis().div_ceil(period);
    Some(u8::try_from(polls).unwrap_or(u8::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Millis(u64);

    impl TimeDuration for Millis {
        fn as_millis(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn exact_multiple() {
        assert_eq!(polls_for(Millis(20), Millis(5)), Some(4));
    }

    #[test]
    fn partial_poll_rounds_up() {
        assert_eq!(polls_for(Millis(21), Millis(5)), Some(5));
    }

    #[test]
    fn saturates_at_u8_max() {
        assert_eq!(polls_for(Millis(10_000), Millis(1)), Some(u8::MAX));
    }

    #[test]
    fn zero_period_is_rejected() {
        assert_eq!(polls_for(Millis(20), Millis(0)), None);
    }

    #[test]
    fn zero_debounce_needs_no_polls() {
        assert_eq!(polls_for(Millis(0), Millis(5)), Some(0));
    }
}
