//! Pattern based formatting for [`CalendarDate`], using the single character vocabulary of PHP's
//! `date()` (restricted to the date fields). Names are always english.
//!
//! | char | output                                              |
//! |------|-----------------------------------------------------|
//! | `d`  | day of the month, 2 digits                          |
//! | `j`  | day of the month, no padding                        |
//! | `D`  | weekday abbreviation, 'Mon'..'Sun'                  |
//! | `l`  | weekday name, 'Monday'..'Sunday'                    |
//! | `N`  | ISO weekday, 1 (Monday)..7 (Sunday)                 |
//! | `w`  | weekday, 0 (Sunday)..6 (Saturday)                   |
//! | `S`  | english ordinal suffix for the day of the month     |
//! | `z`  | day of the year, starting at 0                      |
//! | `W`  | ISO week number, 2 digits                           |
//! | `o`  | ISO week-based year                                 |
//! | `F`  | month name, 'January'..'December'                   |
//! | `M`  | month abbreviation, 'Jan'..'Dec'                    |
//! | `m`  | month, 2 digits                                     |
//! | `n`  | month, no padding                                   |
//! | `t`  | number of days in the month                         |
//! | `L`  | '1' in a leap year, '0' otherwise                   |
//! | `Y`  | year, at least 4 digits, with a leading '-' if < 0  |
//! | `y`  | year, 2 digits                                      |
//! | `\`  | writes the next character as-is                     |
//!
//! Any other character is written as-is.
//!
//! [`CalendarDate`]: crate::CalendarDate
use std::fmt;

use crate::CalendarDate;

/// Writes 'n', left padded with zeros to at least 'width' digits. Negative numbers get their sign
/// ahead of the padding.
fn write_padded<W: fmt::Write>(w: &mut W, n: i64, width: usize) -> fmt::Result {
    let mut buf = itoa::Buffer::new();

    if n < 0 {
        w.write_char('-')?;
    }

    let digits = buf.format(n.unsigned_abs());

    for _ in 0..width.saturating_sub(digits.len()) {
        w.write_char('0')?;
    }

    w.write_str(digits)
}

#[inline]
fn write_int<W: fmt::Write>(w: &mut W, n: i64) -> fmt::Result {
    write_padded(w, n, 0)
}

const fn ordinal_suffix(day: u8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Writes 'date' into 'w', following 'pattern'.
pub(crate) fn format_into<W: fmt::Write>(
    date: &CalendarDate,
    pattern: &str,
    w: &mut W,
) -> fmt::Result {
    let (year, month, day) = date.as_ymd();

    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        match ch {
            'd' => write_padded(w, day as i64, 2)?,
            'j' => write_int(w, day as i64)?,
            'D' => w.write_str(date.weekday().abbreviation())?,
            'l' => w.write_str(date.weekday().name())?,
            'N' => write_int(w, date.iso_weekday() as i64)?,
            'w' => write_int(w, date.weekday().days_from_sunday() as i64)?,
            'S' => w.write_str(ordinal_suffix(day))?,
            'z' => write_int(w, date.day_of_year() as i64 - 1)?,
            'W' => write_padded(w, date.iso_week().1 as i64, 2)?,
            'o' => write_int(w, date.iso_week().0)?,
            'F' => w.write_str(month.name())?,
            'M' => w.write_str(month.abbreviation())?,
            'm' => write_padded(w, month.number() as i64, 2)?,
            'n' => write_int(w, month.number() as i64)?,
            't' => write_int(w, date.days_in_month() as i64)?,
            'L' => w.write_char(if date.is_leap_year() { '1' } else { '0' })?,
            'Y' => write_padded(w, year, 4)?,
            'y' => write_padded(w, year.rem_euclid(100), 2)?,
            '\\' => {
                if let Some(escaped) = chars.next() {
                    w.write_char(escaped)?;
                }
            }
            other => w.write_char(other)?,
        }
    }

    Ok(())
}

/// Writes the iso date, 'YYYY-MM-DD', with a natural width year and 2 digit month + day.
pub(crate) fn iso_into<W: fmt::Write>(date: &CalendarDate, w: &mut W) -> fmt::Result {
    let (year, month, day) = date.as_ymd_int();

    write_int(w, year)?;
    w.write_char('-')?;
    write_padded(w, month as i64, 2)?;
    w.write_char('-')?;
    write_padded(w, day as i64, 2)
}
