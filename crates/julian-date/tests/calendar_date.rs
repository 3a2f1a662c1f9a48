use julian_date::error::DateField;
use julian_date::{CalendarDate, Error, Unit, date};

fn ymd(year: i64, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn assert_range_err(result: Result<CalendarDate, Error>, field: DateField) {
    match result {
        Err(Error::Range(range)) => assert_eq!(range.field(), field),
        other => panic!("expected a {field} range error, got {other:?}"),
    }
}

fn assert_format_err(input: &str) {
    match CalendarDate::from_string(input) {
        Err(Error::InvalidFormat(invalid)) => assert_eq!(invalid.input(), input),
        other => panic!("expected '{input}' to be rejected as malformed, got {other:?}"),
    }
}

#[test]
fn test_day_number_conversions() {
    assert_eq!(ymd(2000, 1, 1).day_number(), 2_451_545);
    assert_eq!(
        CalendarDate::from_day_number(2_451_545).format("Y-m-d"),
        "2000-01-01"
    );
}

#[test]
fn test_from_string() {
    assert_eq!(CalendarDate::from_string("2020-06-12"), Ok(ymd(2020, 6, 12)));
    assert_eq!(CalendarDate::from_string("202-03-06"), Ok(ymd(202, 3, 6)));
    assert_eq!(
        CalendarDate::from_string("10191-03-06"),
        Ok(ymd(10191, 3, 6))
    );

    assert_format_err("Bogus");
    assert_format_err("-06-12");
    assert_format_err("2020--12");
    assert_format_err("2020-06-");

    assert_range_err(CalendarDate::from_string("2020-06-31"), DateField::Day);
    assert_range_err(CalendarDate::from_string("2020-00-12"), DateField::Month);
}

#[test]
fn test_construct() {
    assert_eq!(ymd(2020, 6, 12).to_iso_date(), "2020-06-12");
    assert_eq!(ymd(2020, 4, 18).to_iso_date(), "2020-04-18");
    assert_eq!(ymd(2020, 2, 29).to_string(), "2020-02-29");

    assert_range_err(CalendarDate::new(2020, 0, 31), DateField::Month);
    assert_range_err(CalendarDate::new(2020, 13, 31), DateField::Month);
    assert_range_err(CalendarDate::new(2020, 6, 0), DateField::Day);
    assert_range_err(CalendarDate::new(2020, 6, 31), DateField::Day);
    assert_range_err(CalendarDate::new(2019, 2, 29), DateField::Day);
}

#[test]
fn test_format_weekday() {
    let date = CalendarDate::from_string("2020-06-12").unwrap();
    assert_eq!(date.format("N"), "5");
}

#[test]
fn test_first_and_last_of_day() {
    let date = date!(2020 - 06 - 12);

    assert_eq!(date.first_of(Unit::Day), date);
    assert_eq!(date.last_of(Unit::Day), date);
}

#[test]
fn test_week_window() {
    for day in 8..=14 {
        let date = ymd(2020, 6, day);

        assert_eq!(date.first_of(Unit::Week).to_iso_date(), "2020-06-08");
        assert_eq!(date.last_of(Unit::Week).to_iso_date(), "2020-06-14");
    }
}

#[test]
fn test_first_of_month() {
    for month in 1..=12 {
        let date = ymd(2020, month, 8);
        assert_eq!(
            date.first_of(Unit::Month).to_iso_date(),
            format!("2020-{month:02}-01")
        );
    }
}

#[test]
fn test_first_of_year() {
    let date = date!(2020 - 06 - 12);
    assert_eq!(date.first_of(Unit::Year).to_iso_date(), "2020-01-01");
}

#[test]
fn test_last_of_year() {
    let date = date!(2020 - 06 - 12);
    assert_eq!(date.last_of(Unit::Year).to_iso_date(), "2020-12-31");
    assert_eq!(date!(2019 - 12 - 31).last_of(Unit::Year), date!(2019 - 12 - 31));
}

#[test]
fn test_last_of_month() {
    const STANDARD: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    const LEAP: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    for (year, lengths) in [(2019, STANDARD), (2020, LEAP)] {
        for (idx, length) in lengths.into_iter().enumerate() {
            let month = idx as u8 + 1;
            let date = ymd(year, month, 12);

            assert_eq!(
                date.last_of(Unit::Month).to_iso_date(),
                format!("{year}-{month:02}-{length}")
            );
        }
    }
}

#[test]
fn test_add_zero_is_identity() {
    let date = date!(2020 - 05 - 31);

    for unit in Unit::ALL {
        assert_eq!(date.add_unit(0, unit), Ok(date));
    }
}

#[test]
fn test_add_units() {
    let date = date!(2020 - 06 - 12);

    let cases = [
        (5, Unit::Day, "2020-06-17"),
        (-5, Unit::Day, "2020-06-07"),
        (2, Unit::Week, "2020-06-26"),
        (-2, Unit::Week, "2020-05-29"),
        (3, Unit::Month, "2020-09-12"),
        (-3, Unit::Month, "2020-03-12"),
        (38, Unit::Month, "2023-08-12"),
        (-38, Unit::Month, "2017-04-12"),
        (7, Unit::Year, "2027-06-12"),
        (-3, Unit::Year, "2017-06-12"),
    ];

    for (amount, unit, expected) in cases {
        let added = date.add_unit(amount, unit).unwrap();
        assert_eq!(added.to_iso_date(), expected, "{date} + {amount} {unit}");
    }
}

#[test]
fn test_add_units_never_clamp() {
    let end_of_may = date!(2020 - 05 - 31);
    assert_range_err(end_of_may.add_unit(1, Unit::Month), DateField::Day);
    assert_range_err(end_of_may.add_unit(-1, Unit::Month), DateField::Day);

    let leap_day = date!(2020 - 02 - 29);
    assert_range_err(leap_day.add_unit(1, Unit::Year), DateField::Day);
    assert_range_err(leap_day.add_unit(-1, Unit::Year), DateField::Day);
    assert_eq!(leap_day.add_unit(4, Unit::Year), Ok(date!(2024 - 02 - 29)));
}

#[test]
fn test_unit_from_untrusted_input() {
    let unit: Unit = "weeks".parse().unwrap();
    assert_eq!(
        date!(2020 - 06 - 12).add_unit(2, unit),
        Ok(date!(2020 - 06 - 26))
    );

    assert!(matches!(
        "fortnight".parse::<Unit>().map_err(Error::from),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        Unit::try_from(5u8).map_err(Error::from),
        Err(Error::InvalidArgument(_))
    ));
}
