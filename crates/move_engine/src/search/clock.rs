//! Wall-clock budget for a search
//!
//! The clock starts when the driver starts. The negamax searcher checks it on
//! every entry; the driver checks it before each new depth. A disarmed clock
//! never reports a timeout to the searcher, which is how the first depth is
//! guaranteed to finish.

use crate::error::SearchAbort;
use instant::Instant;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchClock {
    start: Instant,
    budget: Duration,
    armed: bool,
}

impl SearchClock {
    pub(crate) fn start(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
            armed: true,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once strictly more than the budget has elapsed
    pub(crate) fn is_exhausted(&self) -> bool {
        self.elapsed() > self.budget
    }

    pub(crate) fn set_armed(&mut self, armed: bool) {
        self.armed = armed;
    }

    /// Searcher entry check
    pub(crate) fn check(&self) -> Result<(), SearchAbort> {
        if self.armed && self.is_exhausted() {
            Err(SearchAbort::TimeExceeded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_clock_is_not_exhausted() {
        let clock = SearchClock::start(Duration::from_secs(60));
        assert!(!clock.is_exhausted());
        assert_eq!(clock.check(), Ok(()));
    }

    #[test]
    fn test_exhausted_clock_aborts() {
        let clock = SearchClock::start(Duration::from_nanos(1));
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.is_exhausted());
        assert_eq!(clock.check(), Err(SearchAbort::TimeExceeded));
    }

    #[test]
    fn test_disarmed_clock_never_aborts() {
        let mut clock = SearchClock::start(Duration::from_nanos(1));
        std::thread::sleep(Duration::from_millis(2));
        clock.set_armed(false);
        assert!(clock.is_exhausted(), "Elapsed time is still reported");
        assert_eq!(clock.check(), Ok(()));

        clock.set_armed(true);
        assert_eq!(clock.check(), Err(SearchAbort::TimeExceeded));
    }
}
