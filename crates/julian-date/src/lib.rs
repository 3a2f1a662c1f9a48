#![deny(clippy::suspicious, clippy::complexity, clippy::perf, clippy::style)]
#![deny(missing_docs)]
//! A [`CalendarDate`], a proleptic Gregorian date stored as a Julian day number.
//!
//! Dates are immutable values. They can be built from calendar components (validated),
//! parsed from 'YEAR-MM-DD' strings, or taken straight from a day number, and support:
//!
//! - navigation to the first/last day of the surrounding [`Unit`] (day, ISO week, month, year).
//! - calendar arithmetic in any [`Unit`], which fails with [`Error::Range`] instead of clamping
//!   when the result isn't a legal date (i.e '2020-05-31' + 1 month).
//! - PHP `date()` style pattern formatting, see [`format`].
//!
//! ```
//! use julian_date::{CalendarDate, Unit, date};
//!
//! let date: CalendarDate = "2020-06-12".parse().unwrap();
//! assert_eq!(date, date!(2020 - 06 - 12));
//!
//! assert_eq!(date.first_of(Unit::Week).to_iso_date(), "2020-06-08");
//! assert_eq!(date.last_of(Unit::Month).to_iso_date(), "2020-06-30");
//! assert_eq!(date.add_unit(38, Unit::Month).unwrap().to_iso_date(), "2023-08-12");
//! ```
//!
//! Conversions to and from [`chrono::NaiveDate`] and [`time::Date`] are provided.

pub mod calendar;
pub mod clock;
pub mod date;
mod de;
pub mod error;
pub mod format;
mod month;
mod parse;
mod ser;
mod unit;
pub(crate) mod util;
mod weekday;

pub use crate::date::CalendarDate;
pub use crate::error::Error;
pub use crate::month::Month;
pub use crate::unit::Unit;
pub use crate::weekday::Weekday;
