//! [`Unit`], the calendar granularity used for navigation and arithmetic.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;

/// Enum with the calendar units used by [`CalendarDate::first_of`], [`CalendarDate::last_of`]
/// and [`CalendarDate::add_unit`].
///
/// [`CalendarDate::first_of`]: crate::CalendarDate::first_of
/// [`CalendarDate::last_of`]: crate::CalendarDate::last_of
/// [`CalendarDate::add_unit`]: crate::CalendarDate::add_unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// A single day.
    Day,
    /// An ISO week, Monday through Sunday.
    Week,
    /// A calendar month.
    Month,
    /// A calendar year.
    Year,
}

#[cfg(feature = "deepsize")]
deepsize::known_deep_size!(0; Unit);

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Returns a `&'static [`str`]` with the name of the unit for formatting
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// The numeric code for this unit, '1 = Day' through '4 = Year'.
    #[inline]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Day => 1,
            Self::Week => 2,
            Self::Month => 3,
            Self::Year => 4,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl TryFrom<u8> for Unit {
    type Error = InvalidArgument;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Day),
            2 => Ok(Self::Week),
            3 => Ok(Self::Month),
            4 => Ok(Self::Year),
            _ => Err(InvalidArgument::new(code)),
        }
    }
}

impl FromStr for Unit {
    type Err = InvalidArgument;

    /// Parses a unit name, ignoring case and a trailing plural 's' ('Days', 'week', ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let singular = name
            .strip_suffix(|ch: char| ch.eq_ignore_ascii_case(&'s'))
            .unwrap_or(name);

        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(singular))
            .ok_or_else(|| InvalidArgument::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::Unit;

    #[test]
    fn test_parse_unit() {
        assert_eq!("day".parse::<Unit>(), Ok(Unit::Day));
        assert_eq!("Weeks".parse::<Unit>(), Ok(Unit::Week));
        assert_eq!(" MONTH ".parse::<Unit>(), Ok(Unit::Month));
        assert_eq!("years".parse::<Unit>(), Ok(Unit::Year));

        let err = "fortnight".parse::<Unit>().unwrap_err();
        assert_eq!(err.value(), "fortnight");
        assert!("".parse::<Unit>().is_err());
        assert!("s".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_codes() {
        for unit in Unit::ALL {
            assert_eq!(Unit::try_from(unit.code()), Ok(unit));
        }

        assert!(Unit::try_from(0u8).is_err());
        assert_eq!(Unit::try_from(5u8).unwrap_err().value(), "5");
    }

    #[test]
    fn test_unit_serde() {
        assert_eq!(serde_json::to_string(&Unit::Month).unwrap(), "\"month\"");
        assert_eq!(
            serde_json::from_str::<Unit>("\"week\"").unwrap(),
            Unit::Week
        );
        assert!(serde_json::from_str::<Unit>("\"hour\"").is_err());
    }
}
