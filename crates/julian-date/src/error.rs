//! Possible error types encountered while constructing, parsing, or performing calendar
//! arithmetic on a [`CalendarDate`].
//!
//! [`CalendarDate`]: crate::CalendarDate

use std::fmt;

use serde::de::{self, Unexpected};

/// The calendar component that was found to be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "deepsize", derive(deepsize::DeepSizeOf))]
pub enum DateField {
    /// The year, either too large to be represented as a day number, or too large to parse.
    Year,
    /// The month, outside of '1..=12'.
    Month,
    /// The day of the month, either 0 or past the end of the month.
    Day,
    /// The Julian day number itself overflowed.
    DayNumber,
}

impl DateField {
    /// Returns a `&'static [`str`]` with the name of the field for formatting.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::DayNumber => "day number",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A month, day or derived date that falls outside of the legal calendar range.
///
/// This is [`Copy`] (and has no destructor) so `const` construction paths can return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "deepsize", derive(deepsize::DeepSizeOf))]
pub struct RangeError {
    field: DateField,
}

impl RangeError {
    pub(crate) const fn new(field: DateField) -> Self {
        Self { field }
    }

    /// The component that was out of range.
    #[inline]
    pub const fn field(&self) -> DateField {
        self.field
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{} is out of range", self.field)
    }
}

impl std::error::Error for RangeError {}

/// A string that doesn't follow the 'YEAR-MM-DD' grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "deepsize", derive(deepsize::DeepSizeOf))]
pub struct InvalidFormat {
    input: String,
}

impl InvalidFormat {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "invalid iso date '{}', must be YYYY-MM-DD",
            self.input
        )
    }
}

impl std::error::Error for InvalidFormat {}

/// A value that doesn't name one of the allowed [`Unit`]s.
///
/// [`Unit`]: crate::Unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "deepsize", derive(deepsize::DeepSizeOf))]
pub struct InvalidArgument {
    value: String,
}

impl InvalidArgument {
    pub(crate) fn new<V: fmt::Display>(value: V) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// The rejected value, as a string.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "'{}' is not an allowed unit, expected one of day, week, month or year",
            self.value
        )
    }
}

impl std::error::Error for InvalidArgument {}

/// Error types that can be encountered
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A calendar component (or the result of calendar arithmetic) is out of range.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// A date string didn't match 'YEAR-MM-DD'.
    #[error(transparent)]
    InvalidFormat(#[from] InvalidFormat),
    /// A unit outside of the closed set of [`Unit`]s was requested.
    ///
    /// [`Unit`]: crate::Unit
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

impl Error {
    /// Shortcut for building a [`Error::Range`] for the given field.
    #[inline]
    pub(crate) const fn range(field: DateField) -> Self {
        Self::Range(RangeError::new(field))
    }

    /// Returns the [`RangeError`], if this is [`Error::Range`].
    pub const fn as_range(&self) -> Option<&RangeError> {
        match self {
            Self::Range(range) => Some(range),
            _ => None,
        }
    }

    /// Formats 'self' as an arbitrary [`serde::de::Error`], given the invalid
    /// value we tried to parse from.
    pub fn into_de_error<E>(self, unexpected: Unexpected<'_>) -> E
    where
        E: de::Error,
    {
        match self {
            Self::Range(range) => de::Error::invalid_value(unexpected, &range.to_string().as_str()),
            Self::InvalidFormat(_) => {
                de::Error::invalid_value(unexpected, &"an iso date formatted as YYYY-MM-DD")
            }
            Self::InvalidArgument(_) => {
                de::Error::invalid_value(unexpected, &"one of day, week, month or year")
            }
        }
    }
}
