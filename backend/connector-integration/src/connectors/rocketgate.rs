pub mod reason_codes;
pub mod transformers;

use common_utils::{
    request::RequestContent,
    CustomResult,
};
use domain_types::{
    connector_flow::{AuthOnly, Confirm, Credit, Purchase, Void},
    connector_types::{
        GatewayEndpoints, PaymentsAuthorizeData, PaymentsResponseData, ReferencedTransactionData,
    },
    errors::{ConnectorError, GatewayError},
    router_data::RouterData,
    router_response_types::Response,
    types::GatewayResponse,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::Maskable;
use interfaces::{api::ConnectorCommon, connector_integration::ConnectorIntegration};

use transformers::GatewayRequest;

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const USER_AGENT: &str = "User-Agent";
}

/// The RocketGate connector. Stateless: everything a call needs travels in
/// its router data, so one instance serves any number of concurrent flows.
#[derive(Debug, Clone, Default)]
pub struct Rocketgate;

impl Rocketgate {
    pub fn new() -> Self {
        Self
    }
}

/// Candidate hostnames for a request, in preference order.
///
/// Without a transaction guid the configured pool is returned whole. With a
/// guid the leading one or two characters (two once the guid outgrows 15
/// characters) are read as a hexadecimal site selector and spliced into the
/// routing DNS name's subdomain, so repeat calls about one transaction land
/// on the shard that owns it. In test mode the first test host doubles as
/// the routing DNS name.
pub fn resolve_hosts(
    endpoints: &GatewayEndpoints,
    reference_guid: Option<&str>,
) -> CustomResult<Vec<String>, ConnectorError> {
    let pool = if endpoints.test_mode {
        &endpoints.test_hosts
    } else {
        &endpoints.live_hosts
    };
    let routing_dns = if endpoints.test_mode {
        endpoints
            .test_hosts
            .first()
            .map(String::as_str)
            .unwrap_or(endpoints.routing_dns.as_str())
    } else {
        endpoints.routing_dns.as_str()
    };

    let Some(guid) = reference_guid else {
        return Ok(pool.clone());
    };

    let selector_len = if guid.len() > 15 { 2 } else { 1 };
    let site = guid
        .get(..selector_len)
        .and_then(|prefix| u64::from_str_radix(prefix, 16).ok())
        .ok_or_else(|| report!(ConnectorError::InvalidTransactionId(guid.to_string())))?;

    let (subdomain, rest) = routing_dns
        .split_once('.')
        .ok_or_else(|| report!(ConnectorError::FailedToObtainIntegrationUrl))?;

    Ok(vec![format!("{subdomain}-{site}.{rest}")])
}

impl Rocketgate {
    fn build_headers<F, Req, Res>(
        &self,
        req: &RouterData<F, Req, Res>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(vec![
            (
                headers::CONTENT_TYPE.to_string(),
                self.common_get_content_type().to_string().into(),
            ),
            (
                headers::USER_AGENT.to_string(),
                req.resource_common_data.endpoints.user_agent.clone().into(),
            ),
        ])
    }

    fn servlet_url<F, Req, Res>(
        &self,
        req: &RouterData<F, Req, Res>,
    ) -> CustomResult<String, ConnectorError> {
        let endpoints = &req.resource_common_data.endpoints;
        let hosts = resolve_hosts(
            endpoints,
            req.resource_common_data.reference_guid.as_deref(),
        )?;
        let host = hosts
            .first()
            .ok_or_else(|| report!(ConnectorError::FailedToObtainIntegrationUrl))?;
        Ok(format!(
            "https://{host}:{port}{path}",
            port = endpoints.port,
            path = endpoints.servlet_path
        ))
    }

    /// The success/failure decision shared by every flow: parse the body,
    /// then read the reason code. Zero is the sole success signal; anything
    /// else becomes the decline carrying the untouched original payload.
    fn interpret_response(
        &self,
        res: &Response,
    ) -> CustomResult<Result<PaymentsResponseData, GatewayError>, ConnectorError> {
        let body = String::from_utf8(res.response.to_vec())
            .change_context(ConnectorError::ResponseDeserializationFailed)?;
        let response = transformers::parse_gateway_response(&body)?;

        if response.reason_code == reason_codes::SUCCESS_REASON_CODE {
            Ok(Ok(PaymentsResponseData::from(response)))
        } else {
            Ok(Err(self.build_error_response(response)))
        }
    }
}

impl ConnectorCommon for Rocketgate {
    fn id(&self) -> &'static str {
        "rocketgate"
    }

    fn common_get_content_type(&self) -> &'static str {
        "text/xml"
    }

    fn build_error_response(&self, response: GatewayResponse) -> GatewayError {
        GatewayError {
            reason_code: response.reason_code,
            message: reason_codes::reason_message(response.reason_code)
                .unwrap_or(reason_codes::UNKNOWN_ERROR_MESSAGE)
                .to_string(),
            response,
        }
    }
}

macro_rules! rocketgate_flow_integration {
    ($flow:ty, $request_data:ty) => {
        impl ConnectorIntegration<$flow, $request_data, PaymentsResponseData> for Rocketgate {
            fn get_headers(
                &self,
                req: &RouterData<$flow, $request_data, PaymentsResponseData>,
            ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
                self.build_headers(req)
            }

            fn get_url(
                &self,
                req: &RouterData<$flow, $request_data, PaymentsResponseData>,
            ) -> CustomResult<String, ConnectorError> {
                self.servlet_url(req)
            }

            fn get_request_body(
                &self,
                req: &RouterData<$flow, $request_data, PaymentsResponseData>,
            ) -> CustomResult<RequestContent, ConnectorError> {
                let connector_req = GatewayRequest::from(req);
                Ok(RequestContent::Xml(Box::new(connector_req)))
            }

            fn handle_response(
                &self,
                data: RouterData<$flow, $request_data, PaymentsResponseData>,
                res: Response,
            ) -> CustomResult<
                RouterData<$flow, $request_data, PaymentsResponseData>,
                ConnectorError,
            > {
                let outcome = self.interpret_response(&res)?;
                Ok(data.set_response(outcome))
            }
        }
    };
}

rocketgate_flow_integration!(Purchase, PaymentsAuthorizeData);
rocketgate_flow_integration!(AuthOnly, PaymentsAuthorizeData);
rocketgate_flow_integration!(Confirm, ReferencedTransactionData);
rocketgate_flow_integration!(Void, ReferencedTransactionData);
rocketgate_flow_integration!(Credit, ReferencedTransactionData);
