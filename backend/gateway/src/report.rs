//! The transaction report facade.
//!
//! Independent of the transaction client: one parameterized GET against the
//! reporting endpoint. The service answers JSON on success and signals
//! errors by switching the reply to an XML envelope, distinguished by the
//! response content type.

use std::sync::Arc;

use common_utils::{
    ext_traits::{ByteSliceExt, XmlExt},
    request::{Method, Request},
    CustomResult,
};
use domain_types::errors::{ConfigurationError, ReportError};
use error_stack::{report, Report, ResultExt};
use external_services::ReqwestApiClient;
use hyperswitch_masking::{PeekInterface, Secret};
use interfaces::api_client::ApiClient;

use crate::config::GatewayConfig;

const LOOKUP_METHOD: &str = "lookupTransaction";

pub struct ReportClient {
    endpoint: &'static str,
    merchant_id: Secret<String>,
    merchant_password: Secret<String>,
    http_client: Arc<dyn ApiClient>,
}

impl std::fmt::Debug for ReportClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportClient")
            .field("endpoint", &self.endpoint)
            .field("merchant_id", &self.merchant_id)
            .field("merchant_password", &self.merchant_password)
            .finish_non_exhaustive()
    }
}

impl ReportClient {
    pub fn new(config: &GatewayConfig) -> CustomResult<Self, ConfigurationError> {
        let http_client = ReqwestApiClient::new(config.connect_timeout())
            .change_context(ConfigurationError::HttpClientConstruction)?;
        Self::with_client(config, Arc::new(http_client))
    }

    pub fn with_client(
        config: &GatewayConfig,
        http_client: Arc<dyn ApiClient>,
    ) -> CustomResult<Self, ConfigurationError> {
        config.validate().map_err(Report::new)?;
        Ok(Self {
            endpoint: config.report_endpoint(),
            merchant_id: config.merchant_id.clone(),
            merchant_password: config.merchant_password.clone(),
            http_client,
        })
    }

    /// Runs one lookup query. Caller parameters are merged with the fixed
    /// method/format selectors and the merchant credentials.
    pub async fn lookup_transaction(
        &self,
        params: &[(String, String)],
    ) -> CustomResult<serde_json::Value, ReportError> {
        let mut query: Vec<(String, String)> = params.to_vec();
        query.push(("method".to_string(), LOOKUP_METHOD.to_string()));
        query.push(("returnFormat".to_string(), "JSON".to_string()));
        query.push(("merch_id".to_string(), self.merchant_id.peek().clone()));
        query.push((
            "gatewayPassword".to_string(),
            self.merchant_password.peek().clone(),
        ));

        let url = url::Url::parse_with_params(self.endpoint, &query)
            .change_context(ReportError::RequestEncodingFailed)?;

        let response = self
            .http_client
            .send(Request::new(Method::Get, url.as_str()))
            .await
            .change_context(ReportError::Transport)?;

        let body = String::from_utf8(response.response.to_vec())
            .change_context(ReportError::ResponseDecodingFailed)?;

        let content_type = response
            .headers
            .as_ref()
            .and_then(|headers| headers.get(http::header::CONTENT_TYPE))
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        // An XML reply is the service's error envelope, whatever the status.
        if content_type.contains("xml") {
            let fields = body
                .parse_flat_xml()
                .change_context(ReportError::ResponseDecodingFailed)?;
            return Err(report!(ReportError::ErrorEnvelope { fields }));
        }

        // Successful payloads are guarded with a leading comment marker.
        let payload = body.strip_prefix("//").unwrap_or(&body);
        payload
            .as_bytes()
            .parse_struct("LookupResponse")
            .change_context(ReportError::ResponseDecodingFailed)
    }
}
