//! Report facade tests against the transport double.

mod common;

use bytes::Bytes;
use common::{config, MockApiClient};
use domain_types::{
    errors::{ConfigurationError, ReportError},
    router_response_types::Response,
};
use rocketgate_gateway::ReportClient;

fn reply(content_type: &'static str, body: &str) -> Response {
    let mut headers = http::HeaderMap::new();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static(content_type),
    );
    Response {
        headers: Some(headers),
        response: Bytes::from(body.to_string()),
        status_code: 200,
    }
}

#[tokio::test]
async fn a_json_reply_is_unwrapped_from_its_guard_prefix() {
    let client = MockApiClient::with_replies(vec![reply(
        "application/json",
        "//{\"DATA\":[[\"1000175A34\",\"SETTLED\"]],\"COLUMNS\":[\"GUID\",\"STATE\"]}",
    )]);
    let report = ReportClient::with_client(&config(), client.clone()).unwrap();

    let payload = report
        .lookup_transaction(&[("trans_id".to_string(), "1000175A34".to_string())])
        .await
        .unwrap();

    assert_eq!(payload["COLUMNS"][0], "GUID");
    assert_eq!(payload["DATA"][0][1], "SETTLED");

    let requests = client.recorded();
    assert_eq!(requests.len(), 1);
    let url = &requests[0].url;
    assert!(url.starts_with("https://my.rocketgate.com/com/rocketgate/gateway/xml/Transactions.cfc?"));
    assert!(url.contains("trans_id=1000175A34"));
    assert!(url.contains("method=lookupTransaction"));
    assert!(url.contains("returnFormat=JSON"));
    assert!(url.contains("merch_id=1"));
    assert!(url.contains("gatewayPassword=testpassword"));
}

#[tokio::test]
async fn an_xml_reply_is_the_error_envelope() {
    let client = MockApiClient::with_replies(vec![reply(
        "text/xml; charset=utf-8",
        "<xml><error>Invalid merchant login</error><detail>access denied</detail></xml>",
    )]);
    let report = ReportClient::with_client(&config(), client).unwrap();

    let error = report.lookup_transaction(&[]).await.unwrap_err();

    match error.current_context() {
        ReportError::ErrorEnvelope { fields } => {
            assert_eq!(
                fields.get("error").map(String::as_str),
                Some("Invalid merchant login")
            );
            assert_eq!(
                fields.get("detail").map(String::as_str),
                Some("access denied")
            );
        }
        other => panic!("expected an error envelope, got {other:?}"),
    }
}

#[tokio::test]
async fn a_transport_failure_surfaces_as_a_report_transport_error() {
    let client = MockApiClient::with_replies(vec![]);
    let report = ReportClient::with_client(&config(), client).unwrap();

    let error = report.lookup_transaction(&[]).await.unwrap_err();
    assert_eq!(*error.current_context(), ReportError::Transport);
}

#[tokio::test]
async fn test_mode_queries_the_sandbox_endpoint() {
    let mut sandbox_config = config();
    sandbox_config.test_mode = true;

    let client = MockApiClient::with_replies(vec![reply("application/json", "//{}")]);
    let report = ReportClient::with_client(&sandbox_config, client.clone()).unwrap();

    report.lookup_transaction(&[]).await.unwrap();

    let requests = client.recorded();
    assert!(requests[0].url.starts_with("https://dev-my.rocketgate.com/"));
}

#[test]
fn missing_credentials_are_rejected_at_construction() {
    let client = MockApiClient::with_replies(vec![]);
    let error = ReportClient::with_client(
        &rocketgate_gateway::GatewayConfig::new("", ""),
        client,
    )
    .unwrap_err();

    assert_eq!(
        *error.current_context(),
        ConfigurationError::MissingMerchantId
    );
}
