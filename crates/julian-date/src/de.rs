//! [`CalendarDate`] deserialization methods + impl
use std::fmt;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};

use crate::CalendarDate;

/// Accepts either an iso date string ('YYYY-MM-DD'), or an integer Julian day number.
struct CalendarDateVisitor;

impl<'de> de::Visitor<'de> for CalendarDateVisitor {
    type Value = CalendarDate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an iso date string (YYYY-MM-DD) or an integer Julian day number")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        CalendarDate::from_string(v).map_err(|err| err.into_de_error(Unexpected::Str(v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(CalendarDate::from_day_number(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(CalendarDate::from_day_number)
            .map_err(|_| de::Error::invalid_value(Unexpected::Unsigned(v), &self))
    }
}

impl CalendarDate {
    /// Deserializes a [`CalendarDate`], expecting to find an iso date string or an integer day
    /// number. The default [`Deserialize`] impl calls this under the hood.
    pub fn deserialize_iso_or_day_number<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CalendarDateVisitor)
    }

    /// Deserializes a [`CalendarDate`] from an iso date string only, for non self-describing
    /// formats.
    pub fn deserialize_iso<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(CalendarDateVisitor)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::deserialize_iso_or_day_number(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::{CalendarDate, date};

    #[derive(Debug, Deserialize)]
    struct Entry {
        #[serde(deserialize_with = "CalendarDate::deserialize_iso")]
        date: CalendarDate,
    }

    #[test]
    fn test_deserialize_iso_only() {
        let entry: Entry = serde_json::from_str(r#"{"date":"2020-06-12"}"#).unwrap();
        assert_eq!(entry.date, date!(2020 - 6 - 12));

        assert!(serde_json::from_str::<Entry>(r#"{"date":2451545}"#).is_err());
        assert!(serde_json::from_str::<Entry>(r#"{"date":"2020-13-01"}"#).is_err());
    }

    #[test]
    fn test_deserialize_iso() {
        let date: CalendarDate = serde_json::from_str(r#""2020-06-12""#).unwrap();
        assert_eq!(date, date!(2020 - 6 - 12));

        let dune: CalendarDate = serde_json::from_str(r#""10191-03-06""#).unwrap();
        assert_eq!(dune.year(), 10191);
    }

    #[test]
    fn test_deserialize_day_number() {
        let date: CalendarDate = serde_json::from_str("2451545").unwrap();
        assert_eq!(date, date!(2000 - 1 - 1));

        let negative: CalendarDate = serde_json::from_str("-1").unwrap();
        assert_eq!(negative.as_ymd_int(), (-4713, 11, 23));

        assert!(serde_json::from_str::<CalendarDate>("18446744073709551615").is_err());
    }

    #[test]
    fn test_deserialize_errors() {
        let bogus = serde_json::from_str::<CalendarDate>(r#""Bogus""#).unwrap_err();
        assert!(bogus.to_string().contains("YYYY-MM-DD"), "{bogus}");

        let range = serde_json::from_str::<CalendarDate>(r#""2020-06-31""#).unwrap_err();
        assert!(range.to_string().contains("day is out of range"), "{range}");

        assert!(serde_json::from_str::<CalendarDate>("1.5").is_err());
    }

    #[test]
    fn test_round_trip() {
        let date = date!(2019 - 2 - 28);
        let json = serde_json::to_string(&date).unwrap();

        assert_eq!(json, r#""2019-02-28""#);
        assert_eq!(serde_json::from_str::<CalendarDate>(&json).unwrap(), date);
    }
}
