//! [`Weekday`], numbered the ISO 8601 way.
use std::fmt;

/// A day of the week, with Monday as the first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

#[cfg(feature = "deepsize")]
deepsize::known_deep_size!(0; Weekday);

impl Weekday {
    /// Returns the weekday a Julian day number falls on. Julian day 0 is a Monday.
    pub const fn from_day_number(day_number: i64) -> Self {
        match day_number.rem_euclid(7) {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// ISO weekday number, 1 (Monday) through 7 (Sunday).
    #[inline]
    pub const fn iso_number(self) -> u8 {
        self as u8
    }

    /// Days since the previous Sunday, 0 (Sunday) through 6 (Saturday).
    #[inline]
    pub const fn days_from_sunday(self) -> u8 {
        self as u8 % 7
    }

    /// The full english name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// The 3 letter english abbreviation.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[test]
fn test_weekday_from_day_number() {
    // 2000-01-01
    assert_eq!(Weekday::from_day_number(2_451_545), Weekday::Saturday);
    assert_eq!(Weekday::from_day_number(0), Weekday::Monday);
    assert_eq!(Weekday::from_day_number(-1), Weekday::Sunday);
    assert_eq!(Weekday::Sunday.days_from_sunday(), 0);
    assert_eq!(Weekday::Saturday.days_from_sunday(), 6);
    assert_eq!(Weekday::Friday.iso_number(), 5);
}
