//! Parsing for the 'YEAR-MM-DD' iso date grammar.
//!
//! ```markdown
//! [0-9]+ '-' [0-9]{2} '-' [0-9]{2}
//! ------     -------      -------
//!  year       month         day
//! ```
//!
//! The year has no fixed width, nothing may lead or trail the date (no sign, no whitespace).

use crate::error::{DateField, Error, InvalidFormat, RangeError};

/// The raw components of a syntactically valid date string. The values aren't checked against
/// the calendar yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IsoParts {
    pub(crate) year: i64,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

/// Splits the input into its 3 components, returning [`None`] on any deviation from the grammar.
fn split(s: &str) -> Option<(&[u8], [u8; 2], [u8; 2])> {
    let bytes = s.as_bytes();

    // the fixed-width tail is '-MM-DD', 6 bytes. The year needs at least 1 more.
    if bytes.len() < 7 {
        return None;
    }

    let (year, tail) = bytes.split_at(bytes.len() - 6);

    match tail {
        [b'-', m0, m1, b'-', d0, d1] => Some((year, [*m0, *m1], [*d0, *d1])),
        _ => None,
    }
}

#[inline]
const fn two_digits(digits: [u8; 2]) -> Option<u8> {
    match digits {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => Some((tens - b'0') * 10 + (ones - b'0')),
        _ => None,
    }
}

/// Parses the digits of a year, returning a [`RangeError`] if it's all digits but too large for
/// an [`i64`].
fn year_digits(digits: &[u8]) -> Option<Result<i64, RangeError>> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut year: i64 = 0;

    for digit in digits {
        let next = year
            .checked_mul(10)
            .and_then(|year| year.checked_add((digit - b'0') as i64));

        match next {
            Some(next) => year = next,
            None => return Some(Err(RangeError::new(DateField::Year))),
        }
    }

    Some(Ok(year))
}

/// Parses a date string into its components.
pub(crate) fn parse_iso(s: &str) -> Result<IsoParts, Error> {
    let invalid = || Error::from(InvalidFormat::new(s));

    let (year, month, day) = split(s).ok_or_else(invalid)?;

    let month = two_digits(month).ok_or_else(invalid)?;
    let day = two_digits(day).ok_or_else(invalid)?;
    let year = year_digits(year).ok_or_else(invalid)??;

    Ok(IsoParts { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(year: i64, month: u8, day: u8) -> IsoParts {
        IsoParts { year, month, day }
    }

    #[test]
    fn test_valid_shapes() {
        assert_eq!(parse_iso("2020-06-12"), Ok(parts(2020, 6, 12)));
        assert_eq!(parse_iso("202-03-06"), Ok(parts(202, 3, 6)));
        assert_eq!(parse_iso("10191-03-06"), Ok(parts(10191, 3, 6)));
        assert_eq!(parse_iso("0-01-01"), Ok(parts(0, 1, 1)));
        // shape only, calendar validation happens later
        assert_eq!(parse_iso("2020-13-32"), Ok(parts(2020, 13, 32)));
    }

    #[test]
    fn test_invalid_shapes() {
        for bad in [
            "",
            "Bogus",
            "-06-12",
            "2020--12",
            "2020-06-",
            "2020-6-12",
            "2020-06-1",
            "2020-006-12",
            "2020/06/12",
            " 2020-06-12",
            "2020-06-12 ",
            "2020-06-12T00:00:00",
            "+2020-06-12",
            "-2020-06-12",
            "20x0-06-12",
            "2020-0a-12",
            "٢٠٢٠-06-12",
        ] {
            let err = parse_iso(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidFormat(ref inner) if inner.input() == bad),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_year_overflow() {
        let err = parse_iso("99999999999999999999-01-01").unwrap_err();
        assert_eq!(err, Error::Range(RangeError::new(DateField::Year)));
    }
}
