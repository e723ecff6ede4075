use crate::common;
use httpmock::Method::GET;
use marketstack_rs::{Currencies, EndOfDay, MarketstackClient, MsError};
use std::time::Duration;
use url::Url;

#[tokio::test]
async fn placeholder_key_is_rejected_before_any_request() {
    // Any request that got through would succeed against this mock.
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/eod");
        then.status(200).body("{}");
    });

    let client = MarketstackClient::builder()
        .base_url(Url::parse(&format!("{}/v1/", server.base_url())).unwrap())
        .build()
        .unwrap();
    assert!(!client.has_api_key());

    let err = EndOfDay::new(&client, "AAPL").execute().await.unwrap_err();
    assert!(matches!(err, MsError::MisconfiguredClient(_)), "{err:?}");

    let explicit = MarketstackClient::builder()
        .api_key("YOUR_API_KEY")
        .base_url(Url::parse(&format!("{}/v1/", server.base_url())).unwrap())
        .build()
        .unwrap();
    let err = Currencies::new(&explicit).execute().await.unwrap_err();
    assert!(matches!(err, MsError::MisconfiguredClient(_)), "{err:?}");
}

#[tokio::test]
async fn setting_a_key_enables_later_builders() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/currencies")
            .query_param("access_key", "fresh");
        then.status(200).body(r#"{"pagination": {"count": 0, "total": 0}, "data": []}"#);
    });

    let mut client = MarketstackClient::builder()
        .base_url(Url::parse(&format!("{}/v1/", server.base_url())).unwrap())
        .build()
        .unwrap();
    let stale = Currencies::new(&client);
    client.set_api_key("fresh");

    assert!(matches!(
        stale.execute().await,
        Err(MsError::MisconfiguredClient(_))
    ));

    let table = Currencies::new(&client).fetch_table().await.unwrap();
    assert!(table.is_empty());
    mock.assert();
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/eod");
        then.status(200)
            .delay(Duration::from_millis(800))
            .body(r#"{"data": []}"#);
    });

    let client = MarketstackClient::builder()
        .api_key(common::TEST_KEY)
        .base_url(Url::parse(&format!("{}/v1/", server.base_url())).unwrap())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = EndOfDay::new(&client, "AAPL").execute().await.unwrap_err();
    assert!(matches!(err, MsError::Timeout(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = common::offline_client();
    let err = EndOfDay::new(&client, "AAPL").execute().await.unwrap_err();
    assert!(matches!(err, MsError::Transport(_)), "{err:?}");
}
