//! The per-call container threaded through a connector integration.

use std::marker::PhantomData;

use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

use crate::{connector_types::PaymentFlowData, errors::GatewayError};

/// Merchant credentials merged into every outbound request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayAuth {
    pub merchant_id: Secret<String>,
    pub merchant_password: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct RouterData<Flow, FlowSpecificRequest, FlowSpecificResponse> {
    pub flow: PhantomData<Flow>,
    pub resource_common_data: PaymentFlowData,
    pub connector_auth: GatewayAuth,
    /// Flow-specific data required to construct the outbound request.
    pub request: FlowSpecificRequest,
    /// Flow-specific data the gateway responds with.
    pub response: Result<FlowSpecificResponse, GatewayError>,
}

impl<Flow, FlowSpecificRequest, FlowSpecificResponse>
    RouterData<Flow, FlowSpecificRequest, FlowSpecificResponse>
{
    pub fn new(
        connector_auth: GatewayAuth,
        resource_common_data: PaymentFlowData,
        request: FlowSpecificRequest,
    ) -> Self {
        Self {
            flow: PhantomData,
            resource_common_data,
            connector_auth,
            request,
            response: Err(GatewayError::default()),
        }
    }

    pub fn set_response(
        mut self,
        response: Result<FlowSpecificResponse, GatewayError>,
    ) -> Self {
        self.response = response;
        self
    }
}
