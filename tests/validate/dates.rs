use chrono::{NaiveDate, TimeZone, Utc};
use marketstack_rs::{validate_date, MsError};

#[test]
fn plain_dates_are_returned_unchanged() {
    for s in ["2023-01-01", "1999-12-31", "2024-02-29", "2000-06-15"] {
        assert_eq!(validate_date(s).unwrap(), s);
    }
}

#[test]
fn midnight_datetimes_collapse_to_the_date() {
    assert_eq!(validate_date("2023-01-01T00:00:00").unwrap(), "2023-01-01");

    let dt = NaiveDate::from_ymd_opt(2022, 7, 4)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(validate_date(dt).unwrap(), "2022-07-04");

    let utc = Utc.with_ymd_and_hms(2021, 3, 9, 0, 0, 0).unwrap();
    assert_eq!(validate_date(utc).unwrap(), "2021-03-09");
}

#[test]
fn non_midnight_datetimes_keep_their_time() {
    for s in ["2023-01-01T09:30:00", "2023-12-31T23:59:59", "2024-02-29T00:00:01"] {
        assert_eq!(validate_date(s).unwrap(), s);
    }

    let dt = NaiveDate::from_ymd_opt(2023, 5, 1)
        .unwrap()
        .and_hms_milli_opt(14, 5, 7, 250)
        .unwrap();
    assert_eq!(validate_date(dt).unwrap(), "2023-05-01T14:05:07");
}

#[test]
fn structured_dates_are_formatted() {
    let d = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    assert_eq!(validate_date(d).unwrap(), "2020-01-02");
}

#[test]
fn other_formats_are_rejected() {
    for s in [
        "",
        "01/02/2023",
        "2023-13-01",
        "2023-02-30",
        "2023-01-01 10:00:00",
        "2023-01-01T10:00",
        "2023-01-01T10:00:00Z",
        "yesterday",
    ] {
        match validate_date(s) {
            Err(MsError::InvalidDateFormat(got)) => assert_eq!(got, s),
            other => panic!("expected InvalidDateFormat for {s:?}, got {other:?}"),
        }
    }
}
