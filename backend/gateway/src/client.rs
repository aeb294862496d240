//! The transaction client: builds gateway requests through the connector,
//! dispatches them over the transport and normalizes the outcome.
//!
//! Monetary operations are one round trip each, except purchase and
//! authorization: the gateway does not consider those final until a confirm
//! referencing the returned transaction id succeeds, so both always run the
//! two-phase sequence. A confirm-leg failure propagates exactly like a
//! first-leg failure; reconciling the already-authorized first leg is the
//! caller's responsibility.

use std::sync::Arc;

use async_trait::async_trait;
use common_utils::CustomResult;
use connector_integration::connectors::rocketgate::transformers::derive_rebill_schedule;
use connector_integration::Rocketgate;
use domain_types::{
    connector_flow::{AuthOnly, Confirm, Credit, FlowName, Purchase, Void},
    connector_types::{
        PaymentFlowData, PaymentsAuthorizeData, PaymentsResponseData, ReferencedTransactionData,
    },
    errors::{ConfigurationError, ConnectorError, GatewayClientError},
    router_data::RouterData,
    types::{
        CreditCard, ExtraFields, Order, ProfileResult, Prospect, StoredProfile, SubscriptionPlan,
        SubscriptionResult, TransactionResult,
    },
};
use error_stack::{report, Report, ResultExt};
use external_services::ReqwestApiClient;
use interfaces::{
    api_client::ApiClient, connector_integration::ConnectorIntegration,
    connector_types::PaymentGateway,
};
use time::OffsetDateTime;

use crate::config::GatewayConfig;

/// Nominal amount authorized when tokenizing a card; the gateway has no
/// dedicated tokenize verb.
const PROFILE_AUTH_AMOUNT: &str = "1";

/// The RocketGate implementation of [`PaymentGateway`]. Holds only the
/// immutable configuration and the transport handle; safe for concurrent
/// reuse.
pub struct RocketgateGateway {
    config: GatewayConfig,
    connector: Rocketgate,
    http_client: Arc<dyn ApiClient>,
}

impl std::fmt::Debug for RocketgateGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RocketgateGateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RocketgateGateway {
    /// Validates the configuration and builds the default transport.
    pub fn new(config: GatewayConfig) -> CustomResult<Self, ConfigurationError> {
        let http_client = ReqwestApiClient::new(config.connect_timeout())
            .change_context(ConfigurationError::HttpClientConstruction)?;
        Self::with_client(config, Arc::new(http_client))
    }

    /// Same as [`new`](Self::new) with an injected transport.
    pub fn with_client(
        config: GatewayConfig,
        http_client: Arc<dyn ApiClient>,
    ) -> CustomResult<Self, ConfigurationError> {
        config.validate().map_err(Report::new)?;
        Ok(Self {
            config,
            connector: Rocketgate::new(),
            http_client,
        })
    }

    fn flow_data(&self, reference_guid: Option<String>) -> PaymentFlowData {
        PaymentFlowData {
            endpoints: self.config.endpoints(),
            reference_guid,
        }
    }

    /// The shared primitive behind every operation: build the outbound
    /// request, run exactly one HTTP exchange, let the connector interpret
    /// the reply. No retries at any layer.
    async fn execute<F, Req>(
        &self,
        flow: FlowName,
        router_data: RouterData<F, Req, PaymentsResponseData>,
    ) -> CustomResult<PaymentsResponseData, GatewayClientError>
    where
        F: Send + Sync,
        Req: Send + Sync,
        Rocketgate: ConnectorIntegration<F, Req, PaymentsResponseData>,
    {
        let request = self
            .connector
            .build_request(&router_data)
            .change_context(GatewayClientError::Connector)?;

        tracing::info!(flow = %flow, url = %request.url, "Dispatching gateway operation");

        let response = self
            .http_client
            .send(request)
            .await
            .change_context(GatewayClientError::Transport)?;

        let router_data = self
            .connector
            .handle_response(router_data, response)
            .change_context(GatewayClientError::Connector)?;

        router_data.response.map_err(|decline| {
            tracing::warn!(
                flow = %flow,
                reason_code = decline.reason_code,
                "Gateway declined the operation"
            );
            report!(GatewayClientError::Declined(decline))
        })
    }

    /// Purchase/authorization followed by the mandatory confirm. The confirm
    /// reply's body is discarded; only its success matters. The returned
    /// result carries the first leg's identifiers and payload.
    async fn two_phase<F>(
        &self,
        flow: FlowName,
        data: PaymentsAuthorizeData,
    ) -> CustomResult<TransactionResult, GatewayClientError>
    where
        F: Send + Sync,
        Rocketgate: ConnectorIntegration<F, PaymentsAuthorizeData, PaymentsResponseData>,
    {
        let router_data = RouterData::<F, _, _>::new(
            self.config.auth(),
            self.flow_data(None),
            data,
        );
        let first = self.execute(flow, router_data).await?;

        let guid = first.transaction_id.clone().ok_or_else(|| {
            Report::new(ConnectorError::MissingRequiredField {
                field_name: "guidNo",
            })
            .change_context(GatewayClientError::Connector)
        })?;
        self.confirm_leg(&guid).await?;

        Ok(TransactionResult {
            transaction_id: first.transaction_id,
            auth_code: first.auth_code,
            response: first.response,
        })
    }

    async fn confirm_leg(
        &self,
        transaction_id: &str,
    ) -> CustomResult<PaymentsResponseData, GatewayClientError> {
        let router_data = RouterData::<Confirm, _, _>::new(
            self.config.auth(),
            self.flow_data(Some(transaction_id.to_string())),
            ReferencedTransactionData {
                reference_guid: transaction_id.to_string(),
                extra: ExtraFields::default(),
            },
        );
        self.execute(FlowName::Confirm, router_data).await
    }

    /// Single-trip flow referencing an earlier transaction; the transaction
    /// id also keys shard routing so the call lands where the transaction
    /// lives.
    async fn referencing<F>(
        &self,
        flow: FlowName,
        transaction_id: &str,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError>
    where
        F: Send + Sync,
        Rocketgate: ConnectorIntegration<F, ReferencedTransactionData, PaymentsResponseData>,
    {
        let router_data = RouterData::<F, _, _>::new(
            self.config.auth(),
            self.flow_data(Some(transaction_id.to_string())),
            ReferencedTransactionData {
                reference_guid: transaction_id.to_string(),
                extra,
            },
        );
        let response = self.execute(flow, router_data).await?;

        Ok(TransactionResult {
            transaction_id: response.transaction_id,
            auth_code: response.auth_code,
            response: response.response,
        })
    }
}

#[async_trait]
impl PaymentGateway for RocketgateGateway {
    async fn submit_transaction(
        &self,
        order: Order,
        card: CreditCard,
        prospect: Prospect,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError> {
        self.two_phase::<Purchase>(
            FlowName::Purchase,
            PaymentsAuthorizeData {
                order,
                card,
                prospect,
                extra,
                ..Default::default()
            },
        )
        .await
    }

    async fn authorize_transaction(
        &self,
        order: Order,
        card: CreditCard,
        prospect: Prospect,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError> {
        self.two_phase::<AuthOnly>(
            FlowName::AuthOnly,
            PaymentsAuthorizeData {
                order,
                card,
                prospect,
                extra,
                ..Default::default()
            },
        )
        .await
    }

    async fn confirm_transaction(
        &self,
        transaction_id: &str,
    ) -> CustomResult<TransactionResult, GatewayClientError> {
        let response = self.confirm_leg(transaction_id).await?;
        Ok(TransactionResult {
            transaction_id: response.transaction_id,
            auth_code: response.auth_code,
            response: response.response,
        })
    }

    async fn void_transaction(
        &self,
        transaction_id: &str,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError> {
        self.referencing::<Void>(FlowName::Void, transaction_id, extra)
            .await
    }

    async fn refund_transaction(
        &self,
        transaction_id: &str,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError> {
        self.referencing::<Credit>(FlowName::Credit, transaction_id, extra)
            .await
    }

    async fn create_subscription(
        &self,
        card: CreditCard,
        prospect: Prospect,
        plan: SubscriptionPlan,
        extra: ExtraFields,
    ) -> CustomResult<SubscriptionResult, GatewayClientError> {
        let schedule = derive_rebill_schedule(&plan, OffsetDateTime::now_utc());

        let result = self
            .two_phase::<Purchase>(
                FlowName::Purchase,
                PaymentsAuthorizeData {
                    order: Order::new(schedule.fee_amount),
                    card,
                    prospect,
                    rebill: Some(schedule.rebill),
                    extra,
                    ..Default::default()
                },
            )
            .await?;

        Ok(SubscriptionResult {
            subscription_id: result.transaction_id,
            response: result.response,
        })
    }

    async fn create_customer_profile(
        &self,
        card: CreditCard,
        billing: Option<Prospect>,
        shipping: Option<Prospect>,
        extra: ExtraFields,
    ) -> CustomResult<ProfileResult, GatewayClientError> {
        let prospect = billing
            .unwrap_or_default()
            .overlay(shipping.unwrap_or_default());

        let result = self
            .two_phase::<AuthOnly>(
                FlowName::AuthOnly,
                PaymentsAuthorizeData {
                    order: Order::new(PROFILE_AUTH_AMOUNT),
                    card,
                    prospect,
                    extra,
                    ..Default::default()
                },
            )
            .await?;

        Ok(ProfileResult {
            profile_id: result.response.card_hash().map(str::to_string),
            response: result.response,
        })
    }

    async fn charge_customer(
        &self,
        order: Order,
        prospect: Prospect,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError> {
        // The lookup fields are always transmitted, empty when the prospect
        // carries none, so the processor can report the precise failure.
        let stored_profile = StoredProfile {
            card_hash: prospect.profile_id.clone().unwrap_or_default(),
            merchant_customer_id: prospect.id.clone().unwrap_or_default(),
        };

        self.two_phase::<Purchase>(
            FlowName::Purchase,
            PaymentsAuthorizeData {
                order,
                card: CreditCard::default(),
                prospect,
                stored_profile: Some(stored_profile),
                extra,
                ..Default::default()
            },
        )
        .await
    }
}
