//! Conversions between proleptic Gregorian calendar dates and Julian day numbers.
//!
//! Everything here is `const` and works on `i128` internally, so no valid input can overflow.
//! Public functions reject (or can't be given) components outside the calendar, the crate
//! internal helpers assume a month within '1..=12' and a day within the month.

use crate::Month;
use crate::util::saturate_i64;

/// Julian day number of '1970-01-01'.
const UNIX_EPOCH_JDN: i128 = 2_440_588;

/// Days between '0000-03-01' (the start of the shifted calendar used below) and '1970-01-01'.
const SHIFTED_EPOCH_OFFSET: i128 = 719_468;

/// Days in a 400 year Gregorian cycle.
const DAYS_PER_ERA: i128 = 146_097;

/// Converts a calendar date into a Julian day number, without narrowing. The year is shifted to
/// start on March 1st, so the leap day falls at the end of the shifted year.
pub(crate) const fn to_julian_wide(year: i128, month: u8, day: u8) -> i128 {
    let month = month as i128;
    let day = day as i128;

    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;

    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - SHIFTED_EPOCH_OFFSET + UNIX_EPOCH_JDN
}

/// Inverse of [`to_julian_wide`].
pub(crate) const fn from_julian_wide(day_number: i128) -> (i128, u8, u8) {
    let days = day_number - UNIX_EPOCH_JDN + SHIFTED_EPOCH_OFFSET;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;

    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);

    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };

    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

    (year, month as u8, day as u8)
}

/// Returns the Julian day number for the given date, or [`None`] if the month isn't within
/// '1..=12', the day isn't within the month, or the day number doesn't fit in an [`i64`].
///
/// ```
/// use julian_date::calendar::calendar_to_julian;
///
/// assert_eq!(calendar_to_julian(2000, 1, 1), Some(2_451_545));
/// assert_eq!(calendar_to_julian(2019, 2, 29), None);
/// assert_eq!(calendar_to_julian(2020, 13, 1), None);
/// ```
pub const fn calendar_to_julian(year: i64, month: u8, day: u8) -> Option<i64> {
    if !matches!(month, 1..=12) || day == 0 || month_length(year, month) < day {
        return None;
    }

    let wide = to_julian_wide(year as i128, month, day);

    if wide < (i64::MIN as i128) || (i64::MAX as i128) < wide {
        None
    } else {
        Some(wide as i64)
    }
}

/// Returns the '(year, month, day)' that a Julian day number falls on. Total over every [`i64`].
pub const fn julian_to_calendar(day_number: i64) -> (i64, u8, u8) {
    let (year, month, day) = from_julian_wide(day_number as i128);
    // a day number within i64 always lands on a year that's ~365x smaller in magnitude.
    (year as i64, month, day)
}

/// Returns the number of days in the given month of 'year'.
///
/// ```
/// use julian_date::{Month, calendar::days_in_month};
///
/// assert_eq!(days_in_month(2020, Month::February), 29);
/// ```
#[inline]
pub const fn days_in_month(year: i64, month: Month) -> u8 {
    month_length(year, month.number())
}

/// The distance between the first day of the month and the first day of the month after it.
/// 'month' must be within '1..=12'.
pub(crate) const fn month_length(year: i64, month: u8) -> u8 {
    let year = year as i128;

    let first = to_julian_wide(year, month, 1);
    let next_first = if month >= 12 {
        to_julian_wide(year + 1, 1, 1)
    } else {
        to_julian_wide(year, month + 1, 1)
    };

    (next_first - first) as u8
}

/// Returns whether the year has a February 29th.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    month_length(year, 2) == 29
}

/// Returns the ISO 8601 week-based year and week number (1..=53) for a day number.
pub(crate) const fn iso_week(day_number: i64) -> (i64, u8) {
    let day_number = day_number as i128;
    // Monday = 0 .. Sunday = 6; Julian day 0 is a Monday.
    let weekday = day_number.rem_euclid(7);

    // the ISO year of a week is the year its Thursday falls in.
    let thursday = day_number - weekday + 3;
    let (iso_year, _, _) = from_julian_wide(thursday);

    let week = (thursday - to_julian_wide(iso_year, 1, 1)).div_euclid(7) + 1;

    (saturate_i64(iso_year), week as u8)
}
