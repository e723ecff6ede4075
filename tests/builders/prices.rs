use crate::common;
use marketstack_rs::{EndOfDay, Intraday, IntradayInterval, MsError, Sort};

#[test]
fn eod_latest_targets_latest_with_symbols() {
    let client = common::offline_client();
    let eod = EndOfDay::new(&client, "AAPL").latest().unwrap();

    let target = eod.request().target().unwrap();
    assert!(target.as_str().ends_with("/v1/eod/latest"), "{target}");
    assert_eq!(eod.request().param("symbols"), Some("AAPL"));
    assert_eq!(eod.request().param("access_key"), Some(common::TEST_KEY));
}

#[test]
fn latest_twice_is_idempotent() {
    let client = common::offline_client();
    let once = EndOfDay::new(&client, "AAPL").latest().unwrap();
    let twice = once.clone().latest().unwrap();
    assert_eq!(once.request().target().unwrap(), twice.request().target().unwrap());
    assert_eq!(twice.request().segments(), ["latest"]);
}

#[test]
fn shared_parameters_are_validated_and_inserted() {
    let client = common::offline_client();
    let eod = EndOfDay::new(&client, "AAPL,MSFT")
        .exchange("XNAS")
        .sort(Sort::Asc)
        .date_from("2024-01-01T00:00:00")
        .unwrap()
        .date_to("2024-01-31")
        .unwrap()
        .limit(250)
        .unwrap()
        .offset(0)
        .unwrap();

    let req = eod.request();
    assert_eq!(req.param("symbols"), Some("AAPL,MSFT"));
    assert_eq!(req.param("exchange"), Some("XNAS"));
    assert_eq!(req.param("sort"), Some("asc"));
    assert_eq!(req.param("date_from"), Some("2024-01-01"));
    assert_eq!(req.param("date_to"), Some("2024-01-31"));
    assert_eq!(req.param("limit"), Some("250"));
    assert_eq!(req.param("offset"), Some("0"));

    let url = req.url().unwrap();
    assert!(url.query().unwrap().contains("access_key=test-key"));
}

#[test]
fn invalid_parameters_fail_at_the_offending_call() {
    let client = common::offline_client();
    assert!(matches!(
        EndOfDay::new(&client, "AAPL").limit(0),
        Err(MsError::InvalidLimit(0))
    ));
    assert!(matches!(
        EndOfDay::new(&client, "AAPL").offset(1001),
        Err(MsError::InvalidOffset(1001))
    ));
    assert!(matches!(
        EndOfDay::new(&client, "AAPL").date_from("01-01-2024"),
        Err(MsError::InvalidDateFormat(_))
    ));
}

#[test]
fn historical_single_date_appends_a_segment() {
    let client = common::offline_client();
    let eod = EndOfDay::new(&client, "AAPL").historical("2023-06-01").unwrap();
    assert!(eod
        .request()
        .target()
        .unwrap()
        .as_str()
        .ends_with("/eod/2023-06-01"));
    assert_eq!(eod.request().param("date_from"), None);
}

#[test]
fn historical_range_sets_parameters() {
    let client = common::offline_client();
    let eod = EndOfDay::new(&client, "AAPL")
        .historical_range("2023-01-01", "2023-02-01T12:00:00")
        .unwrap();
    assert!(eod.request().segments().is_empty());
    assert_eq!(eod.request().param("date_from"), Some("2023-01-01"));
    assert_eq!(eod.request().param("date_to"), Some("2023-02-01T12:00:00"));
}

#[test]
fn historical_range_rejects_an_existing_range() {
    let client = common::offline_client();
    let err = EndOfDay::new(&client, "AAPL")
        .date_from("2023-01-01")
        .unwrap()
        .historical_range("2023-01-01", "2023-02-01")
        .unwrap_err();
    assert!(matches!(err, MsError::DuplicateDateRange));

    let err = EndOfDay::new(&client, "AAPL")
        .date_to("2023-03-01")
        .unwrap()
        .historical_range("2023-01-01", "2023-02-01")
        .unwrap_err();
    assert!(matches!(err, MsError::DuplicateDateRange));
}

#[test]
fn single_date_and_range_are_mutually_exclusive() {
    let client = common::offline_client();

    let err = EndOfDay::new(&client, "AAPL")
        .historical("2023-01-05")
        .unwrap()
        .historical_range("2023-01-01", "2023-02-01")
        .unwrap_err();
    assert!(matches!(err, MsError::DuplicateDateRange));

    let err = EndOfDay::new(&client, "AAPL")
        .historical_range("2023-01-01", "2023-02-01")
        .unwrap()
        .historical("2023-01-05")
        .unwrap_err();
    assert!(matches!(err, MsError::DuplicateDateRange));

    let err = EndOfDay::new(&client, "AAPL")
        .historical("2023-01-05")
        .unwrap()
        .date_from("2023-01-01")
        .unwrap_err();
    assert!(matches!(err, MsError::DuplicateDateRange));
}

#[test]
fn a_date_and_latest_conflict() {
    let client = common::offline_client();
    let err = EndOfDay::new(&client, "AAPL")
        .latest()
        .unwrap()
        .historical("2023-01-05")
        .unwrap_err();
    assert!(matches!(err, MsError::Conflict(_)));

    let err = Intraday::new(&client, "AAPL")
        .historical("2023-01-05")
        .unwrap()
        .latest()
        .unwrap_err();
    assert!(matches!(err, MsError::Conflict(_)));
}

#[test]
fn intraday_latest_and_interval() {
    let client = common::offline_client();
    let intraday = Intraday::new(&client, "MSFT")
        .interval(IntradayInterval::M15)
        .latest()
        .unwrap();
    assert!(intraday
        .request()
        .target()
        .unwrap()
        .as_str()
        .ends_with("/v1/intraday/latest"));
    assert_eq!(intraday.request().param("interval"), Some("15min"));
}
