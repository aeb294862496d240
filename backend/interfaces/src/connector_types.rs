//! The abstract payment-operation surface.

use async_trait::async_trait;
use common_utils::CustomResult;
use domain_types::{
    errors::GatewayClientError,
    types::{
        CreditCard, ExtraFields, Order, ProfileResult, Prospect, SubscriptionPlan,
        SubscriptionResult, TransactionResult,
    },
};

/// Capability interface over a payment processor. This workspace ships one
/// implementation (RocketGate); callers program against this trait so that
/// processors stay swappable.
///
/// Every method is a single logical operation of one or two sequential
/// network round trips. Implementations hold no per-call mutable state and
/// are safe for concurrent reuse.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Purchase: funds are captured. Two round trips, the purchase itself and
    /// then the mandatory confirm referencing the returned transaction id.
    async fn submit_transaction(
        &self,
        order: Order,
        card: CreditCard,
        prospect: Prospect,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError>;

    /// Authorization without capture; same two-phase shape as
    /// [`submit_transaction`](Self::submit_transaction).
    async fn authorize_transaction(
        &self,
        order: Order,
        card: CreditCard,
        prospect: Prospect,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError>;

    /// Second leg of the two-phase protocol; also usable standalone.
    async fn confirm_transaction(
        &self,
        transaction_id: &str,
    ) -> CustomResult<TransactionResult, GatewayClientError>;

    async fn void_transaction(
        &self,
        transaction_id: &str,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError>;

    async fn refund_transaction(
        &self,
        transaction_id: &str,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError>;

    /// Registers a recurring-billing plan by purchasing its initial fee with
    /// the derived rebill parameters attached.
    async fn create_subscription(
        &self,
        card: CreditCard,
        prospect: Prospect,
        plan: SubscriptionPlan,
        extra: ExtraFields,
    ) -> CustomResult<SubscriptionResult, GatewayClientError>;

    /// Tokenizes a card through a nominal authorization; the processor has no
    /// native tokenize verb. The returned profile id is the reply's card
    /// hash.
    async fn create_customer_profile(
        &self,
        card: CreditCard,
        billing: Option<Prospect>,
        shipping: Option<Prospect>,
        extra: ExtraFields,
    ) -> CustomResult<ProfileResult, GatewayClientError>;

    /// Purchase against a stored card profile: no card data crosses the wire,
    /// the processor looks the card up from the prospect's profile token and
    /// merchant customer id.
    async fn charge_customer(
        &self,
        order: Order,
        prospect: Prospect,
        extra: ExtraFields,
    ) -> CustomResult<TransactionResult, GatewayClientError>;
}
