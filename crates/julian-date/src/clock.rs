//! Sources for the current calendar date.
//!
//! [`CalendarDate`] never reads the wall clock on its own when given a [`Clock`], which keeps
//! anything built on top of it deterministic under test:
//!
//! ```
//! use julian_date::clock::FixedClock;
//! use julian_date::{CalendarDate, date};
//!
//! let clock = FixedClock(date!(2020 - 6 - 12));
//! assert_eq!(CalendarDate::today_with(&clock).unwrap(), date!(2020 - 6 - 12));
//! ```
//!
//! [`CalendarDate`]: crate::CalendarDate

use chrono::Datelike;

use crate::CalendarDate;

/// Something that knows what day it is, as a '(year, month, day)' triple.
pub trait Clock {
    /// Returns today's '(year, month, day)'.
    fn today(&self) -> (i64, u8, u8);
}

/// Reads the system clock, in either the local time zone or UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SystemClock {
    /// The date in the local system time zone.
    #[default]
    Local,
    /// The date in UTC.
    Utc,
}

impl SystemClock {
    /// Today's date, as a [`chrono::NaiveDate`].
    pub fn today_naive(&self) -> chrono::NaiveDate {
        match self {
            Self::Local => chrono::Local::now().date_naive(),
            Self::Utc => chrono::Utc::now().date_naive(),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> (i64, u8, u8) {
        let today = self.today_naive();
        (today.year() as i64, today.month() as u8, today.day() as u8)
    }
}

/// A [`Clock`] that's stuck on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    #[inline]
    fn today(&self) -> (i64, u8, u8) {
        self.0.as_ymd_int()
    }
}

impl<F> Clock for F
where
    F: Fn() -> (i64, u8, u8),
{
    #[inline]
    fn today(&self) -> (i64, u8, u8) {
        (self)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date!(2020 - 2 - 29));
        assert_eq!(clock.today(), (2020, 2, 29));
    }

    #[test]
    fn test_closure_clock() {
        let clock = || (2019, 12, 31);
        assert_eq!(Clock::today(&clock), (2019, 12, 31));
    }

    #[test]
    fn test_system_clock_is_valid() {
        for clock in [SystemClock::Local, SystemClock::Utc] {
            let (year, month, day) = clock.today();
            assert!(CalendarDate::new(year, month, day).is_ok());
        }
    }
}
