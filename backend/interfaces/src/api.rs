//! Connector-wide behavior shared by every flow.

use domain_types::{errors::GatewayError, types::GatewayResponse};

pub trait ConnectorCommon {
    fn id(&self) -> &'static str;

    /// Content type of every outbound request body.
    fn common_get_content_type(&self) -> &'static str;

    /// Turns a parsed reply that carries a non-zero reason code into the
    /// decline error surfaced to callers.
    fn build_error_response(&self, response: GatewayResponse) -> GatewayError;
}
