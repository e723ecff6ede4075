use crate::common;
use httpmock::Method::GET;
use marketstack_rs::{Currencies, EndOfDay, Response, Tickers};
use serde_json::json;

#[tokio::test]
async fn paginated_body_yields_its_records() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/eod/latest")
            .query_param("symbols", "AAPL")
            .query_param("access_key", common::TEST_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"pagination": {"limit": 100, "offset": 0, "count": 1, "total": 1}, "data": [{"close": 10.5}]}"#);
    });

    let client = common::client_for(&server);
    let resp = EndOfDay::new(&client, "AAPL")
        .latest()
        .unwrap()
        .execute()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(resp.records(), [json!({"close": 10.5})]);
    let page = resp.as_page().expect("paginated response");
    assert!(!page.has_more());

    let table = resp.to_table();
    assert_eq!(table.len(), 1);
    assert_eq!(table.columns(), ["close"]);
    assert_eq!(table.column("close").unwrap(), [&json!(10.5)]);
}

#[tokio::test]
async fn unpaginated_body_is_a_single_record() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/tickers/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("tickers", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let resp = Tickers::new(&client)
        .symbol("AAPL")
        .unwrap()
        .execute()
        .await
        .unwrap();
    mock.assert();

    match &resp {
        Response::Single(v) => assert_eq!(v["name"], "Apple Inc"),
        other => panic!("expected single record, got {other:?}"),
    }
    assert_eq!(resp.to_table().len(), 1);
}

#[tokio::test]
async fn typed_bars_and_first_page_only() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/eod").query_param("symbols", "GLDM");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("eod", "GLDM", "json"));
    });

    let client = common::client_for(&server);
    let eod = EndOfDay::new(&client, "GLDM");

    let resp = eod.execute().await.unwrap();
    let page = resp.as_page().unwrap();
    assert_eq!(page.data.len(), 2);
    assert!(page.has_more(), "total 250 > count 2");

    mock.assert();

    let bars = page.records::<marketstack_rs::EodBar>().unwrap();
    assert_eq!(bars[0].close, Some(40.5));
    assert_eq!(bars[1].exchange.as_deref(), Some("ARCX"));
    assert!(bars[0].timestamp().unwrap() > bars[1].timestamp().unwrap());
}

#[tokio::test]
async fn nested_ticker_listing_is_kept_as_one_record() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/tickers/AAPL/eod/2023-01-03");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("tickers_eod", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let resp = Tickers::new(&client)
        .symbol("AAPL")
        .unwrap()
        .eod()
        .unwrap()
        .historical("2023-01-03")
        .unwrap()
        .execute()
        .await
        .unwrap();
    mock.assert();

    let records = resp.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["eod"][0]["close"], json!(125.07));
}

#[tokio::test]
async fn range_parameters_are_sent() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/eod")
            .query_param("symbols", "AAPL")
            .query_param("date_from", "2024-01-02")
            .query_param("date_to", "2024-01-04")
            .query_param("sort", "asc");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("eod", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let table = EndOfDay::new(&client, "AAPL")
        .sort(marketstack_rs::Sort::Asc)
        .historical_range("2024-01-02", "2024-01-04")
        .unwrap()
        .fetch_table()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(table.len(), 3);
    assert!(table.columns().iter().any(|c| c == "adj_close"));
}

#[tokio::test]
async fn empty_pagination_block_is_not_a_page() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/currencies");
        then.status(200)
            .body(r#"{"pagination": {}, "data": [{"code": "USD"}]}"#);
    });

    let client = common::client_for(&server);
    let resp = Currencies::new(&client).execute().await.unwrap();
    assert!(resp.as_page().is_none());
    assert!(matches!(resp, Response::Single(_)));
}
