//! reqwest-backed implementation of the transport seam.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use common_utils::{
    request::{Method, Request, RequestContent},
    CustomResult,
};
use domain_types::{errors::ApiClientError, router_response_types::Response};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{ErasedMaskSerialize as _, Maskable, PeekInterface};
use interfaces::api_client::ApiClient;

/// Transport used by default in production: one shared connection pool,
/// rustls, no redirects, and the connect timeout taken from the gateway
/// configuration. Retrying is deliberately absent; failed exchanges surface
/// to the caller untouched.
pub struct ReqwestApiClient {
    client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(connect_timeout: Duration) -> CustomResult<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .connect_timeout(connect_timeout)
            .use_rustls_tls()
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn send(&self, request: Request) -> CustomResult<Response, ApiClientError> {
        let url = reqwest::Url::parse(&request.url)
            .change_context(ApiClientError::UrlEncodingFailed)?;
        let start = Instant::now();

        let mut builder = match request.method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
        };

        for (name, value) in &request.headers {
            let value = match value {
                Maskable::Masked(inner) => inner.peek().clone(),
                Maskable::Normal(inner) => inner.clone(),
            };
            builder = builder.header(name.as_str(), value);
        }

        if let Some(body) = &request.body {
            let RequestContent::Xml(payload) = body;
            let masked_body = payload.masked_serialize().unwrap_or_else(|_| {
                serde_json::json!({ "error": "failed to mask serialize gateway request" })
            });
            tracing::debug!(request_body = %masked_body, "Dispatching gateway request");
            builder = builder.body(body.get_body_bytes());
        }

        let response = builder.send().await.map_err(|error| {
            if error.is_timeout() {
                report!(ApiClientError::RequestTimeoutReceived)
            } else {
                report!(ApiClientError::RequestNotSent(error.to_string()))
            }
        })?;

        let status_code = response.status().as_u16();
        let headers = Some(response.headers().clone());
        let body = response
            .bytes()
            .await
            .change_context(ApiClientError::ResponseDecodingFailed)?;

        tracing::info!(
            url = %url,
            status_code,
            latency = start.elapsed().as_millis() as u64,
            "Outgoing gateway request completed"
        );

        Ok(Response {
            headers,
            response: body,
            status_code,
        })
    }
}
