//! Wire envelope structures and the field mappings that fill them.
//!
//! The gateway speaks a flat XML protocol: every request is a single
//! `<gatewayRequest>` element whose children are scalar fields, and every
//! reply is a `<gatewayResponse>` of the same shape. Fields that are unset on
//! the domain objects are omitted from the envelope; the processor reports
//! anything it misses through a reason code.

use common_utils::ext_traits::XmlExt;
use domain_types::{
    connector_flow::{AuthOnly, Confirm, Credit, Purchase, Void},
    connector_types::{PaymentsAuthorizeData, PaymentsResponseData, ReferencedTransactionData},
    errors::ConnectorError,
    router_data::{GatewayAuth, RouterData},
    types::{
        CreditCard, ExtraFields, GatewayResponse, PeriodUnit, Prospect, RebillFrequency,
        RebillParams, StoredProfile, SubscriptionPlan,
    },
};
use error_stack::ResultExt;
use hyperswitch_masking::Secret;
use serde::Serialize;
use time::OffsetDateTime;

/// Protocol version tag included in every request body.
pub const GATEWAY_VERSION: &str = "R1.2";

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum TransactionType {
    #[serde(rename = "CC_PURCHASE")]
    #[strum(serialize = "CC_PURCHASE")]
    Purchase,
    #[serde(rename = "CC_AUTH")]
    #[strum(serialize = "CC_AUTH")]
    AuthOnly,
    #[serde(rename = "CC_CONFIRM")]
    #[strum(serialize = "CC_CONFIRM")]
    Confirm,
    #[serde(rename = "CC_VOID")]
    #[strum(serialize = "CC_VOID")]
    Void,
    #[serde(rename = "CC_CREDIT")]
    #[strum(serialize = "CC_CREDIT")]
    Credit,
}

/// The flat request envelope, serialized under `<gatewayRequest>`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "gatewayRequest", rename_all = "camelCase")]
pub struct GatewayRequest {
    pub transaction_type: TransactionType,
    #[serde(rename = "merchantID")]
    pub merchant_id: Secret<String>,
    pub merchant_password: Secret<String>,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "referenceGUID", skip_serializing_if = "Option::is_none")]
    pub reference_guid: Option<String>,

    // Card fields.
    #[serde(rename = "cardNo", skip_serializing_if = "Option::is_none")]
    pub card_no: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_month: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_year: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv2: Option<Secret<String>>,

    // Customer fields. Name fields may come from the card holder and be
    // overridden by the prospect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_zip_code: Option<String>,

    // Recurring-billing fields, present only when registering a subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebill_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebill_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebill_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebill_start: Option<i64>,

    // Stored-profile fields, present only when charging a stored card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_hash: Option<String>,
    #[serde(rename = "merchantCustomerID", skip_serializing_if = "Option::is_none")]
    pub merchant_customer_id: Option<String>,

    // Caller-supplied passthrough fields.
    #[serde(rename = "merchantSiteID", skip_serializing_if = "Option::is_none")]
    pub merchant_site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    #[serde(rename = "merchantInvoiceID", skip_serializing_if = "Option::is_none")]
    pub merchant_invoice_id: Option<String>,
    #[serde(rename = "merchantProductID", skip_serializing_if = "Option::is_none")]
    pub merchant_product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "ipAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv2_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udf01: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udf02: Option<String>,
}

impl GatewayRequest {
    fn new(transaction_type: TransactionType, auth: &GatewayAuth) -> Self {
        Self {
            transaction_type,
            merchant_id: auth.merchant_id.clone(),
            merchant_password: auth.merchant_password.clone(),
            version: GATEWAY_VERSION,
            amount: None,
            reference_guid: None,
            card_no: None,
            expire_month: None,
            expire_year: None,
            cvv2: None,
            customer_first_name: None,
            customer_last_name: None,
            email: None,
            billing_address: None,
            billing_city: None,
            billing_state: None,
            billing_zip_code: None,
            rebill_count: None,
            rebill_amount: None,
            rebill_frequency: None,
            rebill_start: None,
            card_hash: None,
            merchant_customer_id: None,
            merchant_site_id: None,
            merchant_account: None,
            merchant_invoice_id: None,
            merchant_product_id: None,
            currency: None,
            ip_address: None,
            avs_check: None,
            cvv2_check: None,
            scrub: None,
            udf01: None,
            udf02: None,
        }
    }

    fn apply_card(&mut self, card: &CreditCard) {
        self.card_no = card.number.clone();
        self.expire_month = card.expire_month.clone();
        self.expire_year = card.expire_year.clone();
        self.cvv2 = card.cvv.clone();
        self.customer_first_name = card.first_name.clone();
        self.customer_last_name = card.last_name.clone();
    }

    fn apply_prospect(&mut self, prospect: &Prospect) {
        if prospect.first_name.is_some() {
            self.customer_first_name = prospect.first_name.clone();
        }
        if prospect.last_name.is_some() {
            self.customer_last_name = prospect.last_name.clone();
        }
        self.email = prospect.email.clone();
        self.billing_address = prospect.billing_address.clone();
        self.billing_city = prospect.billing_city.clone();
        self.billing_state = prospect.billing_state.clone();
        self.billing_zip_code = prospect.billing_zip.clone();
    }

    fn apply_extra(&mut self, extra: &ExtraFields) {
        self.merchant_site_id = extra.merchant_site_id.clone();
        self.merchant_account = extra.merchant_account.clone();
        self.merchant_customer_id = extra.merchant_customer_id.clone();
        self.merchant_invoice_id = extra.merchant_invoice_id.clone();
        self.merchant_product_id = extra.merchant_product_id.clone();
        self.currency = extra.currency.clone();
        self.ip_address = extra.ip_address.clone();
        self.avs_check = extra.avs_check.clone();
        self.cvv2_check = extra.cvv2_check.clone();
        self.scrub = extra.scrub.clone();
        self.udf01 = extra.udf01.clone();
        self.udf02 = extra.udf02.clone();
    }

    fn apply_rebill(&mut self, rebill: &RebillParams) {
        self.rebill_count = Some(rebill.count);
        self.rebill_amount = Some(rebill.amount.clone());
        self.rebill_frequency = Some(rebill.frequency.to_wire_value());
        self.rebill_start = Some(rebill.start_days);
    }

    // Applied last: a stored profile pins the lookup fields even when the
    // caller left them empty, so the processor reports the precise failure.
    fn apply_stored_profile(&mut self, profile: &StoredProfile) {
        self.card_hash = Some(profile.card_hash.clone());
        self.merchant_customer_id = Some(profile.merchant_customer_id.clone());
    }
}

fn payment_request(
    transaction_type: TransactionType,
    auth: &GatewayAuth,
    data: &PaymentsAuthorizeData,
) -> GatewayRequest {
    let mut request = GatewayRequest::new(transaction_type, auth);
    request.amount = Some(data.order.amount.clone());
    request.apply_card(&data.card);
    request.apply_prospect(&data.prospect);
    request.apply_extra(&data.extra);
    if let Some(rebill) = &data.rebill {
        request.apply_rebill(rebill);
    }
    if let Some(profile) = &data.stored_profile {
        request.apply_stored_profile(profile);
    }
    request
}

fn referencing_request(
    transaction_type: TransactionType,
    auth: &GatewayAuth,
    data: &ReferencedTransactionData,
) -> GatewayRequest {
    let mut request = GatewayRequest::new(transaction_type, auth);
    request.reference_guid = Some(data.reference_guid.clone());
    request.apply_extra(&data.extra);
    request
}

impl From<&RouterData<Purchase, PaymentsAuthorizeData, PaymentsResponseData>> for GatewayRequest {
    fn from(item: &RouterData<Purchase, PaymentsAuthorizeData, PaymentsResponseData>) -> Self {
        payment_request(TransactionType::Purchase, &item.connector_auth, &item.request)
    }
}

impl From<&RouterData<AuthOnly, PaymentsAuthorizeData, PaymentsResponseData>> for GatewayRequest {
    fn from(item: &RouterData<AuthOnly, PaymentsAuthorizeData, PaymentsResponseData>) -> Self {
        payment_request(TransactionType::AuthOnly, &item.connector_auth, &item.request)
    }
}

impl From<&RouterData<Confirm, ReferencedTransactionData, PaymentsResponseData>> for GatewayRequest {
    fn from(item: &RouterData<Confirm, ReferencedTransactionData, PaymentsResponseData>) -> Self {
        referencing_request(TransactionType::Confirm, &item.connector_auth, &item.request)
    }
}

impl From<&RouterData<Void, ReferencedTransactionData, PaymentsResponseData>> for GatewayRequest {
    fn from(item: &RouterData<Void, ReferencedTransactionData, PaymentsResponseData>) -> Self {
        referencing_request(TransactionType::Void, &item.connector_auth, &item.request)
    }
}

impl From<&RouterData<Credit, ReferencedTransactionData, PaymentsResponseData>> for GatewayRequest {
    fn from(item: &RouterData<Credit, ReferencedTransactionData, PaymentsResponseData>) -> Self {
        referencing_request(TransactionType::Credit, &item.connector_auth, &item.request)
    }
}

/// Decodes a reply body into the response map. The envelope's root element
/// name is not inspected; its children become the preserved field set.
pub fn parse_gateway_response(body: &str) -> error_stack::Result<GatewayResponse, ConnectorError> {
    let fields = body
        .parse_flat_xml()
        .change_context(ConnectorError::ResponseDeserializationFailed)?;
    GatewayResponse::from_fields(fields)
        .change_context(ConnectorError::ResponseDeserializationFailed)
}

/// Initial fee plus recurring parameters derived from a subscription plan.
#[derive(Debug, Clone, PartialEq)]
pub struct RebillSchedule {
    pub fee_amount: String,
    pub rebill: RebillParams,
}

/// Derives the gateway's rebill parameter set from a caller-facing plan.
///
/// A distinct trial amount turns the initial purchase into the trial charge:
/// the recurring amount stays at the plan's base amount and the trial
/// consumes one extra billing slot. A bare trial count only extends the
/// rebill count; the initial fee is intentionally left at the base amount.
pub fn derive_rebill_schedule(plan: &SubscriptionPlan, now: OffsetDateTime) -> RebillSchedule {
    let mut count = plan.iteration_count - 1;
    let mut fee_amount = plan.amount.clone();

    let frequency = match plan.period_unit {
        PeriodUnit::Months => match plan.period_length {
            4 => RebillFrequency::Quarterly,
            6 => RebillFrequency::SemiAnnually,
            12 => RebillFrequency::Annually,
            _ => RebillFrequency::Monthly,
        },
        PeriodUnit::Days => RebillFrequency::Days(plan.period_length),
    };

    if let Some(trial_amount) = &plan.trial_amount {
        fee_amount = trial_amount.clone();
        count += 1;
    } else if let Some(trial_count) = plan.trial_count {
        count += trial_count;
    }

    let start_days = (plan.starting_date - now)
        .whole_seconds()
        .div_euclid(SECONDS_PER_DAY);

    RebillSchedule {
        fee_amount,
        rebill: RebillParams {
            count,
            amount: plan.amount.clone(),
            frequency,
            start_days,
        },
    }
}
