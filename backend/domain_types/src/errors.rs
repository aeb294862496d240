//! Error taxonomy of the adapter.
//!
//! Four kinds surface to callers: configuration errors (before any network
//! activity), gateway declines (non-zero reason code, carrying the original
//! payload), transport failures, and report-facade errors. None of them is
//! ever retried here.

use std::collections::BTreeMap;

use crate::types::GatewayResponse;

/// Fatal construction-time failures. Raised synchronously, before any
/// network activity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("MERCHANT_ID is a mandatory field")]
    MissingMerchantId,
    #[error("MERCHANT_PASSWORD is a mandatory field")]
    MissingMerchantPassword,
    #[error("Failed to construct the HTTP transport")]
    HttpClientConstruction,
}

/// A business decline from the processor: the reply parsed cleanly but its
/// reason code was non-zero. Carries the resolved message and the full
/// original response for manual auditing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub reason_code: i64,
    pub message: String,
    pub response: GatewayResponse,
}

impl Default for GatewayError {
    // Placeholder occupying the response slot of a router data before the
    // exchange has run; never observable through the public surface.
    fn default() -> Self {
        Self {
            reason_code: 0,
            message: "Something went wrong".to_string(),
            response: GatewayResponse::default(),
        }
    }
}

/// Failures while building the outbound request or interpreting the reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Failed to encode the gateway request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize the gateway response")]
    ResponseDeserializationFailed,
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Transaction identifier {0:?} does not map to a gateway site")]
    InvalidTransactionId(String),
    #[error("Failed to obtain the integration URL")]
    FailedToObtainIntegrationUrl,
}

/// Transport-level failures, propagated to callers without retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiClientError {
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("The request URL could not be parsed")]
    UrlEncodingFailed,
    #[error("The connection timed out")]
    RequestTimeoutReceived,
    #[error("Failed to send the request: {0}")]
    RequestNotSent(String),
    #[error("Failed to read the response body")]
    ResponseDecodingFailed,
}

/// The error surface of the gateway client facade.
#[derive(Debug, thiserror::Error)]
pub enum GatewayClientError {
    #[error("{0}")]
    Declined(GatewayError),
    #[error("Failed to reach the gateway")]
    Transport,
    #[error("Failed to process the gateway exchange")]
    Connector,
}

impl GatewayClientError {
    /// The decline carried by this error, when it is one.
    pub fn as_declined(&self) -> Option<&GatewayError> {
        match self {
            Self::Declined(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Failures of the report facade. The processor signals errors by answering
/// the JSON query with an XML envelope; its fields are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("The report service returned an error envelope")]
    ErrorEnvelope { fields: BTreeMap<String, String> },
    #[error("Failed to encode the report query")]
    RequestEncodingFailed,
    #[error("Failed to reach the report service")]
    Transport,
    #[error("Failed to decode the report payload")]
    ResponseDecodingFailed,
}
