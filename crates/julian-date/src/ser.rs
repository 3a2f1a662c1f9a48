//! [`CalendarDate`] serialization methods + impl

use serde::{Serialize, Serializer};

use crate::CalendarDate;

// Serialization functions
impl CalendarDate {
    /// Serializes as an iso date string, 'YYYY-MM-DD'. The default implementation of
    /// [`Serialize::serialize`] calls this under the hood.
    pub fn serialize_as_iso_date<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }

    /// Serializes as the raw Julian day number. This is the internal representation of a
    /// [`CalendarDate`].
    pub fn serialize_as_day_number<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.day_number())
    }

    /// If [`Some`], behaves like [`CalendarDate::serialize_as_iso_date`], otherwise calls
    /// [`Serializer::serialize_none`]
    pub fn serialize_opt_as_iso_date<S>(opt: &Option<Self>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match opt.as_ref() {
            Some(date) => serializer.serialize_some(&date.to_iso_date()),
            None => serializer.serialize_none(),
        }
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.serialize_as_iso_date(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use crate::{CalendarDate, date};

    #[derive(Serialize)]
    struct Entry {
        date: CalendarDate,
        #[serde(serialize_with = "CalendarDate::serialize_as_day_number")]
        julian: CalendarDate,
        #[serde(serialize_with = "CalendarDate::serialize_opt_as_iso_date")]
        until: Option<CalendarDate>,
    }

    #[test]
    fn test_serialize() {
        let entry = Entry {
            date: date!(2020 - 6 - 12),
            julian: date!(2000 - 1 - 1),
            until: None,
        };

        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"date":"2020-06-12","julian":2451545,"until":null}"#
        );
    }
}
