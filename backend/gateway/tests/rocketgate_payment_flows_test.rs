//! End-to-end flow tests against an in-process transport double.

mod common;

use common::*;
use domain_types::{
    errors::{ConfigurationError, GatewayClientError},
    types::{ExtraFields, Order, PeriodUnit, Prospect, SubscriptionPlan},
};
use rocketgate_gateway::{PaymentGateway, RocketgateGateway};
use time::macros::datetime;

#[tokio::test]
async fn submit_transaction_issues_purchase_then_confirm() {
    let client = MockApiClient::with_replies(vec![
        xml_reply(&success_body()),
        xml_reply(&confirm_body()),
    ]);
    let gateway = gateway(client.clone());

    let result = gateway
        .submit_transaction(
            Order::new("3.99"),
            card(),
            prospect(),
            ExtraFields::default(),
        )
        .await
        .unwrap();

    assert_eq!(result.transaction_id.as_deref(), Some(GUID));
    assert_eq!(result.auth_code.as_deref(), Some(AUTH_NO));
    assert_eq!(result.response.guid_no(), Some(GUID));

    let requests = client.recorded();
    assert_eq!(requests.len(), 2, "purchase must be followed by a confirm");

    let purchase = &requests[0];
    assert_eq!(
        purchase.url,
        "https://gw-16.rocketgate.com:443/gateway/servlet/ServiceDispatcherAccess"
    );
    let purchase_body = purchase.body.as_deref().unwrap();
    assert!(purchase_body.contains("<transactionType>CC_PURCHASE</transactionType>"));
    assert!(purchase_body.contains("<amount>3.99</amount>"));
    assert!(purchase_body.contains("<merchantID>1</merchantID>"));
    assert!(purchase_body.contains("<version>R1.2</version>"));

    let confirm = &requests[1];
    assert_eq!(
        confirm.url,
        "https://gw-1.rocketgate.com:443/gateway/servlet/ServiceDispatcherAccess",
        "confirm must be routed by the transaction id"
    );
    let confirm_request_body = confirm.body.as_deref().unwrap();
    assert!(confirm_request_body.contains("<transactionType>CC_CONFIRM</transactionType>"));
    assert!(confirm_request_body.contains(&format!("<referenceGUID>{GUID}</referenceGUID>")));
}

#[tokio::test]
async fn authorize_transaction_runs_the_same_two_phase_shape() {
    let client = MockApiClient::with_replies(vec![
        xml_reply(&success_body()),
        xml_reply(&confirm_body()),
    ]);
    let gateway = gateway(client.clone());

    let result = gateway
        .authorize_transaction(
            Order::new("3.99"),
            card(),
            prospect(),
            ExtraFields::default(),
        )
        .await
        .unwrap();

    assert_eq!(result.transaction_id.as_deref(), Some(GUID));

    let requests = client.recorded();
    assert_eq!(requests.len(), 2);
    assert!(requests[0]
        .body
        .as_deref()
        .unwrap()
        .contains("<transactionType>CC_AUTH</transactionType>"));
    assert!(requests[1]
        .body
        .as_deref()
        .unwrap()
        .contains("<transactionType>CC_CONFIRM</transactionType>"));
}

#[tokio::test]
async fn a_decline_surfaces_the_table_message_and_original_payload() {
    let client = MockApiClient::with_replies(vec![xml_reply(&decline_body(407))]);
    let gateway = gateway(client.clone());

    let error = gateway
        .submit_transaction(
            Order::new("3.99"),
            card(),
            prospect(),
            ExtraFields::default(),
        )
        .await
        .unwrap_err();

    let decline = error
        .current_context()
        .as_declined()
        .expect("a non-zero reason code must surface as a decline");
    assert_eq!(decline.reason_code, 407);
    assert_eq!(decline.message, "Rejected - Invalid Card Number");
    assert_eq!(decline.response.guid_no(), Some(GUID));

    assert_eq!(
        client.recorded().len(),
        1,
        "a declined purchase must not be confirmed"
    );
}

#[tokio::test]
async fn an_unlisted_reason_code_gets_the_generic_message() {
    let client = MockApiClient::with_replies(vec![xml_reply(&decline_body(876))]);
    let gateway = gateway(client);

    let error = gateway
        .submit_transaction(
            Order::new("3.99"),
            card(),
            prospect(),
            ExtraFields::default(),
        )
        .await
        .unwrap_err();

    let decline = error.current_context().as_declined().unwrap();
    assert_eq!(decline.message, "Unknown error from the gateway");
    assert_eq!(decline.reason_code, 876);
}

#[tokio::test]
async fn a_confirm_failure_propagates_like_a_first_leg_failure() {
    let client = MockApiClient::with_replies(vec![
        xml_reply(&success_body()),
        xml_reply(&decline_body(100)),
    ]);
    let gateway = gateway(client.clone());

    let error = gateway
        .submit_transaction(
            Order::new("3.99"),
            card(),
            prospect(),
            ExtraFields::default(),
        )
        .await
        .unwrap_err();

    let decline = error.current_context().as_declined().unwrap();
    assert_eq!(decline.message, "Declined – No matching transaction");
    assert_eq!(client.recorded().len(), 2);
}

#[tokio::test]
async fn a_transport_failure_propagates_without_retry() {
    let client = MockApiClient::with_replies(vec![]);
    let gateway = gateway(client.clone());

    let error = gateway
        .submit_transaction(
            Order::new("3.99"),
            card(),
            prospect(),
            ExtraFields::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error.current_context(),
        GatewayClientError::Transport
    ));
    assert_eq!(client.recorded().len(), 1);
}

#[tokio::test]
async fn void_is_a_single_trip_routed_by_the_transaction_id() {
    let client = MockApiClient::with_replies(vec![xml_reply(&confirm_body())]);
    let gateway = gateway(client.clone());

    let result = gateway
        .void_transaction(GUID, ExtraFields::default())
        .await
        .unwrap();
    assert_eq!(result.response.reason_code, 0);

    let requests = client.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "https://gw-1.rocketgate.com:443/gateway/servlet/ServiceDispatcherAccess"
    );
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("<transactionType>CC_VOID</transactionType>"));
    assert!(body.contains(&format!("<referenceGUID>{GUID}</referenceGUID>")));
}

#[tokio::test]
async fn refund_is_a_single_credit_trip() {
    let client = MockApiClient::with_replies(vec![xml_reply(&confirm_body())]);
    let gateway = gateway(client.clone());

    gateway
        .refund_transaction(GUID, ExtraFields::default())
        .await
        .unwrap();

    let requests = client.recorded();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .body
        .as_deref()
        .unwrap()
        .contains("<transactionType>CC_CREDIT</transactionType>"));
}

#[tokio::test]
async fn create_customer_profile_authorizes_one_unit_and_returns_the_card_hash() {
    let client = MockApiClient::with_replies(vec![
        xml_reply(&success_body()),
        xml_reply(&confirm_body()),
    ]);
    let gateway = gateway(client.clone());

    let billing = Prospect {
        first_name: Some("Bob".to_string()),
        email: Some("bob@example.com".to_string()),
        ..Default::default()
    };
    let shipping = Prospect {
        shipping_address: Some("12 Main Street".to_string()),
        ..Default::default()
    };

    let profile = gateway
        .create_customer_profile(card(), Some(billing), Some(shipping), ExtraFields::default())
        .await
        .unwrap();

    assert_eq!(profile.profile_id.as_deref(), Some(CARD_HASH));

    let requests = client.recorded();
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("<transactionType>CC_AUTH</transactionType>"));
    assert!(body.contains("<amount>1</amount>"));
    assert!(body.contains("<customerFirstName>Bob</customerFirstName>"));
    assert!(body.contains("<email>bob@example.com</email>"));
}

#[tokio::test]
async fn charge_customer_transmits_the_stored_profile_instead_of_card_data() {
    let client = MockApiClient::with_replies(vec![
        xml_reply(&success_body()),
        xml_reply(&confirm_body()),
    ]);
    let gateway = gateway(client.clone());

    let prospect = Prospect {
        profile_id: Some(CARD_HASH.to_string()),
        id: Some("42".to_string()),
        ..Default::default()
    };

    let result = gateway
        .charge_customer(Order::new("23.40"), prospect, ExtraFields::default())
        .await
        .unwrap();
    assert_eq!(result.transaction_id.as_deref(), Some(GUID));

    let requests = client.recorded();
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("<transactionType>CC_PURCHASE</transactionType>"));
    assert!(body.contains(&format!("<cardHash>{CARD_HASH}</cardHash>")));
    assert!(body.contains("<merchantCustomerID>42</merchantCustomerID>"));
    assert!(!body.contains("<cardNo>"));
}

#[tokio::test]
async fn charge_customer_without_profile_sends_empty_lookup_fields() {
    let client = MockApiClient::with_replies(vec![xml_reply(&decline_body(415))]);
    let gateway = gateway(client.clone());

    let error = gateway
        .charge_customer(
            Order::new("23.40"),
            Prospect::default(),
            ExtraFields::default(),
        )
        .await
        .unwrap_err();

    let decline = error.current_context().as_declined().unwrap();
    assert_eq!(decline.message, "Rejected - Invalid Customer ID");

    let requests = client.recorded();
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("<cardHash/>"));
    assert!(body.contains("<merchantCustomerID/>"));
}

#[tokio::test]
async fn create_subscription_registers_the_derived_rebill_parameters() {
    let client = MockApiClient::with_replies(vec![
        xml_reply(&success_body()),
        xml_reply(&confirm_body()),
    ]);
    let gateway = gateway(client.clone());

    let plan = SubscriptionPlan {
        amount: "5.55".to_string(),
        iteration_count: 5,
        period_unit: PeriodUnit::Months,
        period_length: 1,
        trial_amount: Some("1.00".to_string()),
        trial_count: None,
        starting_date: datetime!(2030-01-01 0:00 UTC),
    };

    let subscription = gateway
        .create_subscription(card(), prospect(), plan, ExtraFields::default())
        .await
        .unwrap();

    assert_eq!(subscription.subscription_id.as_deref(), Some(GUID));

    let requests = client.recorded();
    assert_eq!(requests.len(), 2);
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("<amount>1.00</amount>"), "trial amount is the initial fee");
    assert!(body.contains("<rebillAmount>5.55</rebillAmount>"));
    assert!(body.contains("<rebillCount>5</rebillCount>"));
    assert!(body.contains("<rebillFrequency>MONTHLY</rebillFrequency>"));
    assert!(body.contains("<rebillStart>"));
}

#[tokio::test]
async fn missing_credentials_are_rejected_before_any_network_activity() {
    let client = MockApiClient::with_replies(vec![]);

    let error = RocketgateGateway::with_client(
        rocketgate_gateway::GatewayConfig::new("", "secret"),
        client.clone(),
    )
    .unwrap_err();
    assert_eq!(
        *error.current_context(),
        ConfigurationError::MissingMerchantId
    );

    let error =
        RocketgateGateway::with_client(rocketgate_gateway::GatewayConfig::new("1", ""), client)
            .unwrap_err();
    assert_eq!(
        *error.current_context(),
        ConfigurationError::MissingMerchantPassword
    );
}
