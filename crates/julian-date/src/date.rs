//! [`CalendarDate`] and associated impls.
use std::str::FromStr;
use std::{fmt, ops};

use crate::calendar::{self, julian_to_calendar, to_julian_wide};
use crate::clock::{Clock, SystemClock};
use crate::error::{DateField, Error, RangeError};
use crate::util::saturate_i64;
use crate::{Month, Unit, Weekday};

/// Julian day number of '0000-12-31', the day before chrono's "days from CE" counting starts.
const CE_DAY_ZERO: i64 = 1_721_425;

/// An immutable proleptic Gregorian calendar date, stored as a Julian day number.
///
/// Every operation that "changes" a date returns a new one. Calendar arithmetic never clamps:
/// adding a month to '2020-05-31' is an error, not '2020-06-30'.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    day_number: i64,
}

#[cfg(feature = "deepsize")]
deepsize::known_deep_size!(0; CalendarDate);

/// Constructs a [`CalendarDate`] at compile time, panicking (at compile time) if the date
/// isn't a legal calendar date.
///
/// ```
/// # use julian_date::date;
/// let date = date!(2020 - 06 - 12);
/// assert_eq!(date.to_string(), "2020-06-12");
/// ```
#[macro_export]
macro_rules! date {
    ($year:literal - $month:literal - $day:literal) => {{
        const DATE: $crate::CalendarDate =
            match $crate::CalendarDate::from_ymd_opt($year, $month, $day) {
                Some(date) => date,
                None => panic!("invalid calendar date"),
            };
        DATE
    }};
}

/// Range of day numbers used when generating dates, spanning '-9999-01-01' to '9999-12-31'.
#[cfg(any(feature = "rand", feature = "arbitrary"))]
const GENERATED_RANGE: std::ops::RangeInclusive<i64> =
    date!(-9999 - 1 - 1).day_number()..=date!(9999 - 12 - 31).day_number();

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for CalendarDate {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let day_number = u.int_in_range(GENERATED_RANGE)?;
        Ok(Self::from_day_number(day_number))
    }
}

#[cfg(feature = "rand")]
impl rand::distr::Distribution<CalendarDate> for rand::distr::StandardUniform {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> CalendarDate {
        CalendarDate::from_day_number(rng.random_range(GENERATED_RANGE))
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let (year, month, day) = self.as_ymd_int();

        formatter
            .debug_struct("CalendarDate")
            .field("day_number", &self.day_number)
            .field("year", &year)
            .field("month", &month)
            .field("day", &day)
            .finish()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        crate::format::iso_into(self, formatter)
    }
}

impl Default for CalendarDate {
    /// Today, in the local time zone. See [`CalendarDate::today`].
    fn default() -> Self {
        Self::today()
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parses a 'YEAR-MM-DD' date, see [`CalendarDate::from_string`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// Validates the components, returning the day number they fall on.
const fn validate(year: i64, month: u8, day: u8) -> Result<i64, RangeError> {
    match (month, day) {
        (0 | 13.., _) => return Err(RangeError::new(DateField::Month)),
        (_, 0) => return Err(RangeError::new(DateField::Day)),
        _ => (),
    }

    // every month has at least 28 days.
    if 28 < day && calendar::month_length(year, month) < day {
        return Err(RangeError::new(DateField::Day));
    }

    match calendar::calendar_to_julian(year, month, day) {
        Some(day_number) => Ok(day_number),
        None => Err(RangeError::new(DateField::Year)),
    }
}

impl CalendarDate {
    /// The date with the smallest representable day number.
    pub const MIN: Self = Self::from_day_number(i64::MIN);

    /// The date with the largest representable day number.
    pub const MAX: Self = Self::from_day_number(i64::MAX);

    /// Builds a date from its components, failing with [`Error::Range`] if the month is outside
    /// '1..=12', or the day is 0 or past the end of the month (leap years included).
    ///
    /// ```
    /// # use julian_date::CalendarDate;
    /// assert!(CalendarDate::new(2020, 2, 29).is_ok());
    /// assert!(CalendarDate::new(2019, 2, 29).is_err());
    /// assert!(CalendarDate::new(2020, 6, 31).is_err());
    /// ```
    #[inline]
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, Error> {
        Self::new_checked(year, month, day).map_err(Error::from)
    }

    /// Const variant of [`CalendarDate::new`], returning the bare [`RangeError`].
    pub const fn new_checked(year: i64, month: u8, day: u8) -> Result<Self, RangeError> {
        match validate(year, month, day) {
            Ok(day_number) => Ok(Self::from_day_number(day_number)),
            Err(err) => Err(err),
        }
    }

    /// Identical to [`CalendarDate::new_checked`], but discards the reason for invalid dates.
    pub const fn from_ymd_opt(year: i64, month: u8, day: u8) -> Option<Self> {
        match validate(year, month, day) {
            Ok(day_number) => Some(Self::from_day_number(day_number)),
            Err(_) => None,
        }
    }

    /// Builds a date directly from a Julian day number. Every day number is a valid date.
    #[inline]
    pub const fn from_day_number(day_number: i64) -> Self {
        Self { day_number }
    }

    /// Parses a date formatted as 'YEAR-MM-DD', where the month and day are exactly 2 digits,
    /// and the year is 1 or more digits.
    ///
    /// Fails with [`Error::InvalidFormat`] if the string doesn't follow that grammar, or with
    /// [`Error::Range`] if it does, but isn't a legal date (i.e '2020-06-31').
    ///
    /// ```
    /// # use julian_date::{CalendarDate, Error};
    /// let dune = CalendarDate::from_string("10191-03-06").unwrap();
    /// assert_eq!(dune.year(), 10191);
    ///
    /// assert!(matches!(CalendarDate::from_string("Bogus"), Err(Error::InvalidFormat(_))));
    /// assert!(matches!(CalendarDate::from_string("2020-06-31"), Err(Error::Range(_))));
    /// ```
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let parts = crate::parse::parse_iso(s)?;
        Self::new(parts.year, parts.month, parts.day)
    }

    /// Returns today's date in the local system time zone.
    pub fn today() -> Self {
        Self::from(SystemClock::Local.today_naive())
    }

    /// Returns today's date in UTC.
    pub fn today_utc() -> Self {
        Self::from(SystemClock::Utc.today_naive())
    }

    /// Returns today's date, as reported by the given [`Clock`]. Fails if the clock reports an
    /// invalid date.
    pub fn today_with<C>(clock: &C) -> Result<Self, Error>
    where
        C: Clock + ?Sized,
    {
        let (year, month, day) = clock.today();
        tracing::trace!(year, month, day, "read current date");
        Self::new(year, month, day)
    }

    /// Returns the Julian day number.
    #[inline]
    pub const fn day_number(&self) -> i64 {
        self.day_number
    }

    /// Returns the components of this date, as a tuple of the year, month and day.
    #[inline]
    pub const fn as_ymd(&self) -> (i64, Month, u8) {
        let (year, month, day) = julian_to_calendar(self.day_number);

        match Month::from_number(month) {
            Some(month) => (year, month, day),
            None => unreachable!(),
        }
    }

    /// Identical to [`CalendarDate::as_ymd`], but with the month converted to an integer
    /// (starting with January = 1).
    #[inline]
    pub const fn as_ymd_int(&self) -> (i64, u8, u8) {
        julian_to_calendar(self.day_number)
    }

    /// Returns the year containing this date.
    #[inline]
    pub const fn year(&self) -> i64 {
        self.as_ymd_int().0
    }

    /// Returns the month containing this date.
    #[inline]
    pub const fn month(&self) -> Month {
        self.as_ymd().1
    }

    /// Returns the day of the month, '1..=31'.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.as_ymd_int().2
    }

    /// Returns the day of the week.
    #[inline]
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number)
    }

    /// Returns the ISO day of the week, 1 (Monday) through 7 (Sunday).
    #[inline]
    pub const fn iso_weekday(&self) -> u8 {
        self.weekday().iso_number()
    }

    /// Returns the number of days in the month containing this date.
    pub const fn days_in_month(&self) -> u8 {
        let (year, month, _) = self.as_ymd_int();
        calendar::month_length(year, month)
    }

    /// Returns the day of the year, starting with January 1st = 1.
    pub const fn day_of_year(&self) -> u16 {
        let (year, _, _) = self.as_ymd_int();
        let jan_first = to_julian_wide(year as i128, 1, 1);
        (self.day_number as i128 - jan_first + 1) as u16
    }

    /// Returns whether this date falls in a leap year.
    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year())
    }

    /// Returns the ISO 8601 week-based year, and the week number within it ('1..=53').
    #[inline]
    pub const fn iso_week(&self) -> (i64, u8) {
        calendar::iso_week(self.day_number)
    }

    /// Formats this date using a PHP `date()` style pattern. See [`crate::format`] for the
    /// supported characters.
    ///
    /// ```
    /// # use julian_date::CalendarDate;
    /// let date = CalendarDate::from_day_number(2_451_545);
    /// assert_eq!(date.format("Y-m-d"), "2000-01-01");
    /// assert_eq!(date.format("l, F jS"), "Saturday, January 1st");
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        let mut dst = String::with_capacity(pattern.len() * 2);
        self.append_to_string(pattern, &mut dst);
        dst
    }

    /// Formats 'self' into an existing [`fmt::Write`] type, following 'pattern'.
    #[inline]
    pub fn format_into<W: fmt::Write>(&self, pattern: &str, w: &mut W) -> fmt::Result {
        crate::format::format_into(self, pattern, w)
    }

    /// Formats 'self' onto the end of an existing [`String`]. Infallible, unlike the
    /// [`fmt::Write`] methods.
    pub fn append_to_string(&self, pattern: &str, dst: &mut String) {
        // writing to a String never fails.
        let _ = crate::format::format_into(self, pattern, dst);
    }

    /// Returns the date as 'YYYY-MM-DD'. Identical to the [`fmt::Display`] output.
    #[inline]
    pub fn to_iso_date(self) -> String {
        self.to_string()
    }

    /// Returns the first day of the [`Unit`] containing this date:
    ///
    /// - [`Unit::Day`]: the date itself.
    /// - [`Unit::Week`]: the Monday of the ISO week.
    /// - [`Unit::Month`]: the 1st of the month.
    /// - [`Unit::Year`]: January 1st.
    ///
    /// Saturates at [`CalendarDate::MIN`].
    pub const fn first_of(self, unit: Unit) -> Self {
        let (year, month, _) = self.as_ymd_int();

        match unit {
            Unit::Day => self,
            Unit::Week => self.offset_saturating(1 - self.iso_weekday() as i128),
            Unit::Month => Self::from_wide(to_julian_wide(year as i128, month, 1)),
            Unit::Year => Self::from_wide(to_julian_wide(year as i128, 1, 1)),
        }
    }

    /// Returns the last day of the [`Unit`] containing this date:
    ///
    /// - [`Unit::Day`]: the date itself.
    /// - [`Unit::Week`]: the Sunday of the ISO week.
    /// - [`Unit::Month`]: the last day of the month.
    /// - [`Unit::Year`]: December 31st.
    ///
    /// Saturates at [`CalendarDate::MAX`].
    pub const fn last_of(self, unit: Unit) -> Self {
        let (year, month, _) = self.as_ymd_int();

        match unit {
            Unit::Day => self,
            Unit::Week => self.offset_saturating(7 - self.iso_weekday() as i128),
            Unit::Month => Self::from_wide(to_julian_wide(
                year as i128,
                month,
                calendar::month_length(year, month),
            )),
            Unit::Year => Self::from_wide(to_julian_wide(year as i128, 12, 31)),
        }
    }

    #[inline]
    const fn from_wide(day_number: i128) -> Self {
        Self::from_day_number(saturate_i64(day_number))
    }

    #[inline]
    const fn offset_saturating(self, days: i128) -> Self {
        Self::from_wide(self.day_number as i128 + days)
    }

    /// Adds 'amount' of 'unit' to this date (subtracting for negative amounts).
    ///
    /// Days and weeks always land on a valid date. Months and years keep the day of the month,
    /// and fail with [`Error::Range`] when that day doesn't exist in the resulting month, rather
    /// than clamping it. Months that run past December (or before January) roll over into the
    /// next (or previous) year instead of failing, so '2020-11-15' + 3 months is '2021-02-15':
    ///
    /// ```
    /// # use julian_date::{Unit, date};
    /// let date = date!(2020 - 6 - 12);
    /// assert_eq!(date.add_unit(38, Unit::Month).unwrap(), date!(2023 - 8 - 12));
    /// assert_eq!(date.add_unit(-38, Unit::Month).unwrap(), date!(2017 - 4 - 12));
    ///
    /// assert_eq!(date!(2020 - 11 - 15).add_unit(3, Unit::Month).unwrap(), date!(2021 - 2 - 15));
    /// assert_eq!(date!(2020 - 2 - 15).add_unit(-3, Unit::Month).unwrap(), date!(2019 - 11 - 15));
    ///
    /// assert!(date!(2020 - 5 - 31).add_unit(1, Unit::Month).is_err());
    /// assert!(date!(2020 - 2 - 29).add_unit(1, Unit::Year).is_err());
    /// ```
    pub fn add_unit(self, amount: i64, unit: Unit) -> Result<Self, Error> {
        if amount == 0 {
            return Ok(self);
        }

        let result = match unit {
            Unit::Day => self.add_days(amount),
            Unit::Week => self.add_weeks(amount),
            Unit::Month => self.add_months(amount),
            Unit::Year => self.add_years(amount),
        };

        if let Err(ref error) = result {
            tracing::debug!(
                message = "calendar arithmetic out of range",
                date = %self,
                amount,
                %unit,
                %error
            );
        }

        result
    }

    /// Adds a number of days. Only fails if the day number overflows.
    pub fn add_days(self, days: i64) -> Result<Self, Error> {
        self.day_number
            .checked_add(days)
            .map(Self::from_day_number)
            .ok_or(Error::range(DateField::DayNumber))
    }

    /// Adds a number of 7 day weeks. Only fails if the day number overflows.
    pub fn add_weeks(self, weeks: i64) -> Result<Self, Error> {
        weeks
            .checked_mul(7)
            .ok_or(Error::range(DateField::DayNumber))
            .and_then(|days| self.add_days(days))
    }

    /// Adds a number of months, keeping the day of the month. The whole years in 'amount' are
    /// split off with the same sign as 'amount', and the remaining months roll over into the
    /// next (or previous) year when they pass December (or January).
    pub fn add_months(self, amount: i64) -> Result<Self, Error> {
        let (year, month, day) = self.as_ymd_int();

        // both truncate toward zero, so they share the sign of 'amount'.
        let whole_years = amount / 12;
        let months = amount % 12 + month as i64;

        // 'months' is within -10..=23 here, bring it back into 1..=12.
        let years = whole_years + (months - 1).div_euclid(12);
        let month = (months - 1).rem_euclid(12) + 1;

        let year = year
            .checked_add(years)
            .ok_or(Error::range(DateField::Year))?;

        Self::new(year, month as u8, day)
    }

    /// Adds a number of years, keeping the month and day. Fails on February 29th when the
    /// resulting year isn't a leap year.
    pub fn add_years(self, amount: i64) -> Result<Self, Error> {
        let (year, month, day) = self.as_ymd_int();

        let year = year
            .checked_add(amount)
            .ok_or(Error::range(DateField::Year))?;

        Self::new(year, month, day)
    }

    /// Returns the number of days from 'self' to 'other' (negative if 'other' is earlier),
    /// saturating on overflow.
    #[inline]
    pub const fn days_until(self, other: Self) -> i64 {
        other.day_number.saturating_sub(self.day_number)
    }
}

impl ops::Sub for CalendarDate {
    type Output = i64;

    /// The number of days between 2 dates.
    fn sub(self, rhs: Self) -> Self::Output {
        rhs.days_until(self)
    }
}

impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;

        Self::from_day_number(date.num_days_from_ce() as i64 + CE_DAY_ZERO)
    }
}

impl TryFrom<CalendarDate> for chrono::NaiveDate {
    type Error = RangeError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        date.day_number
            .checked_sub(CE_DAY_ZERO)
            .and_then(|days| i32::try_from(days).ok())
            .and_then(chrono::NaiveDate::from_num_days_from_ce_opt)
            .ok_or(RangeError::new(DateField::DayNumber))
    }
}

impl From<time::Date> for CalendarDate {
    fn from(date: time::Date) -> Self {
        Self::from_day_number(date.to_julian_day() as i64)
    }
}

impl TryFrom<CalendarDate> for time::Date {
    type Error = RangeError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        i32::try_from(date.day_number)
            .ok()
            .and_then(|day_number| time::Date::from_julian_day(day_number).ok())
            .ok_or(RangeError::new(DateField::DayNumber))
    }
}
