use crate::common;
use marketstack_rs::{Currencies, Dividends, Endpoint, MsError, Sort, Splits, Timezones};

#[test]
fn splits_and_dividends_take_symbols_and_ranges() {
    let client = common::offline_client();

    let splits = Splits::new(&client, "AAPL")
        .sort(Sort::Desc)
        .date_from("2010-01-01")
        .unwrap();
    assert_eq!(splits.request().endpoint(), Endpoint::Splits);
    assert!(splits.request().target().unwrap().as_str().ends_with("/v1/splits"));
    assert_eq!(splits.request().param("symbols"), Some("AAPL"));
    assert_eq!(splits.request().param("date_from"), Some("2010-01-01"));

    let dividends = Dividends::new(&client, "KO").limit(10).unwrap();
    assert!(dividends.request().target().unwrap().as_str().ends_with("/v1/dividends"));
    assert_eq!(dividends.request().param("limit"), Some("10"));
}

#[test]
fn shared_setters_validate_on_every_builder() {
    let client = common::offline_client();

    let dividends = Dividends::new(&client, "KO")
        .sort(Sort::Asc)
        .date_from("2020-01-01")
        .unwrap()
        .date_to("2020-12-31")
        .unwrap()
        .offset(0)
        .unwrap();
    assert_eq!(dividends.request().param("sort"), Some("asc"));
    assert_eq!(dividends.request().param("date_to"), Some("2020-12-31"));
    assert_eq!(dividends.request().param("offset"), Some("0"));

    assert!(matches!(Splits::new(&client, "AAPL").offset(1001), Err(MsError::InvalidOffset(1001))));
    assert!(matches!(Splits::new(&client, "AAPL").limit(0), Err(MsError::InvalidLimit(0))));
    assert!(matches!(
        Dividends::new(&client, "KO").date_to("31/12/2020"),
        Err(MsError::InvalidDateFormat(_))
    ));
    assert!(matches!(Currencies::new(&client).offset(-1), Err(MsError::InvalidOffset(-1))));
}

#[test]
fn reference_listings_only_page() {
    let client = common::offline_client();

    let currencies = Currencies::new(&client).limit(5).unwrap().offset(10).unwrap();
    let params = currencies.request().params();
    assert_eq!(params.len(), 3, "{params:?}");
    assert!(currencies.request().target().unwrap().as_str().ends_with("/v1/currencies"));

    let tz = Timezones::new(&client);
    assert_eq!(tz.request().params().keys().collect::<Vec<_>>(), ["access_key"]);
    assert!(matches!(Timezones::new(&client).limit(1001), Err(MsError::InvalidLimit(1001))));
}

#[test]
fn builders_capture_the_key_at_construction() {
    let mut client = common::offline_client();
    let before = Currencies::new(&client);

    client.set_api_key("rotated");
    let after = Currencies::new(&client);

    assert_eq!(before.request().param("access_key"), Some(common::TEST_KEY));
    assert_eq!(after.request().param("access_key"), Some("rotated"));
}
