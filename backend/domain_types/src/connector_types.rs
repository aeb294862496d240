//! Flow-specific request and response data carried through the router data.

use serde::{Deserialize, Serialize};

use crate::types::{
    CreditCard, ExtraFields, GatewayResponse, Order, Prospect, RebillParams, StoredProfile,
};

/// Endpoint and routing configuration resolved once at construction and
/// shared read-only by every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayEndpoints {
    /// DNS name split for guid-derived shard routing (live mode).
    pub routing_dns: String,
    pub live_hosts: Vec<String>,
    pub test_hosts: Vec<String>,
    pub servlet_path: String,
    pub port: u16,
    pub user_agent: String,
    pub test_mode: bool,
}

/// Common data shared by every gateway flow: where to send the request and,
/// for referencing flows, the transaction identifier that keys shard routing.
#[derive(Debug, Clone)]
pub struct PaymentFlowData {
    pub endpoints: GatewayEndpoints,
    pub reference_guid: Option<String>,
}

/// Request data for the purchase and auth-only flows.
#[derive(Debug, Clone, Default)]
pub struct PaymentsAuthorizeData {
    pub order: Order,
    pub card: CreditCard,
    pub prospect: Prospect,
    /// Present only when the purchase registers a subscription.
    pub rebill: Option<RebillParams>,
    /// Present only when charging a stored card profile.
    pub stored_profile: Option<StoredProfile>,
    pub extra: ExtraFields,
}

/// Request data for flows referencing an existing transaction
/// (confirm, void, credit).
#[derive(Debug, Clone, Default)]
pub struct ReferencedTransactionData {
    pub reference_guid: String,
    pub extra: ExtraFields,
}

/// Normalized response data produced by every gateway flow.
#[derive(Debug, Clone, Default)]
pub struct PaymentsResponseData {
    pub transaction_id: Option<String>,
    pub auth_code: Option<String>,
    pub card_hash: Option<String>,
    pub response: GatewayResponse,
}

impl From<GatewayResponse> for PaymentsResponseData {
    fn from(response: GatewayResponse) -> Self {
        Self {
            transaction_id: response.guid_no().map(str::to_string),
            auth_code: response.auth_no().map(str::to_string),
            card_hash: response.card_hash().map(str::to_string),
            response,
        }
    }
}
