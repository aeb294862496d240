//! Shared fixtures for the gateway integration tests: an in-process
//! transport returning canned gateway bodies, plus builders for the domain
//! objects the flows exchange.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use common_utils::{
    request::{Method, Request},
    CustomResult,
};
use domain_types::{
    errors::ApiClientError,
    router_response_types::Response,
    types::{CreditCard, Prospect},
};
use hyperswitch_masking::{ExposeInterface, Secret};
use interfaces::api_client::ApiClient;
use rocketgate_gateway::{GatewayConfig, RocketgateGateway};

pub const GUID: &str = "1000175A34";
pub const AUTH_NO: &str = "OK1234";
pub const CARD_HASH: &str = "m77vGkSBTTWsfGh9XGzSvQ";

#[derive(Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// Transport double: hands out queued replies in order and records every
/// request it saw, with the body rendered to its wire form.
pub struct MockApiClient {
    replies: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockApiClient {
    pub fn with_replies(replies: Vec<Response>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn send(&self, request: Request) -> CustomResult<Response, ApiClientError> {
        let body = request
            .body
            .as_ref()
            .map(|content| content.get_inner_value().expose());
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method,
            url: request.url,
            body,
        });
        self.replies.lock().unwrap().pop_front().ok_or_else(|| {
            error_stack::report!(ApiClientError::RequestNotSent(
                "no canned reply left".to_string()
            ))
        })
    }
}

pub fn xml_reply(body: &str) -> Response {
    let mut headers = http::HeaderMap::new();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("text/xml"),
    );
    Response {
        headers: Some(headers),
        response: Bytes::from(body.to_string()),
        status_code: 200,
    }
}

pub fn success_body() -> String {
    format!(
        "<gatewayResponse><reasonCode>0</reasonCode><guidNo>{GUID}</guidNo>\
         <authNo>{AUTH_NO}</authNo><cardHash>{CARD_HASH}</cardHash></gatewayResponse>"
    )
}

pub fn confirm_body() -> String {
    format!("<gatewayResponse><reasonCode>0</reasonCode><guidNo>{GUID}</guidNo></gatewayResponse>")
}

pub fn decline_body(reason_code: i64) -> String {
    format!(
        "<gatewayResponse><reasonCode>{reason_code}</reasonCode>\
         <guidNo>{GUID}</guidNo></gatewayResponse>"
    )
}

pub fn config() -> GatewayConfig {
    GatewayConfig::new("1", "testpassword")
}

pub fn gateway(client: Arc<MockApiClient>) -> RocketgateGateway {
    RocketgateGateway::with_client(config(), client).expect("valid test configuration")
}

pub fn card() -> CreditCard {
    CreditCard {
        number: Some(Secret::new("4111111111111111".to_string())),
        expire_month: Some(Secret::new("02".to_string())),
        expire_year: Some(Secret::new("2016".to_string())),
        cvv: Some(Secret::new("999".to_string())),
        first_name: None,
        last_name: None,
    }
}

pub fn prospect() -> Prospect {
    Prospect {
        first_name: Some("Ellen".to_string()),
        last_name: Some("Johnson".to_string()),
        email: Some("ellen@example.com".to_string()),
        billing_address: Some("14 Main Street".to_string()),
        billing_city: Some("Pecan Springs".to_string()),
        billing_state: Some("TX".to_string()),
        billing_zip: Some("44628".to_string()),
        ..Default::default()
    }
}
