//! Sources of the current date.

use chrono::{Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_frozen() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock(date);
        assert_eq!(date, clock.today());
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn borrowed_clock_delegates() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        let clock = FixedClock(date);
        fn read(clock: impl Clock) -> NaiveDate {
            clock.today()
        }
        assert_eq!(date, read(&clock));
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.today() > NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }
}
