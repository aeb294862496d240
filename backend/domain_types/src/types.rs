//! Caller-facing value objects and normalized results.
//!
//! All of these are request-scoped values: they are assembled by the caller,
//! mapped onto the wire envelope, and dropped when the operation resolves.
//! Values are passed through to the processor untouched; rejecting malformed
//! card numbers or amounts is the processor's job, not this adapter's.

use std::collections::BTreeMap;

use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use common_utils::errors::ParsingError;

/// A monetary order. The amount is a major-unit decimal string
/// (e.g. `"3.99"`) forwarded verbatim to the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    pub amount: String,
}

impl Order {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
        }
    }
}

/// Card data as supplied by the caller. Every field is optional; unset fields
/// are omitted from the wire request and the gateway reports whatever it is
/// missing through a reason code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditCard {
    pub number: Option<Secret<String>>,
    pub expire_month: Option<Secret<String>>,
    pub expire_year: Option<Secret<String>>,
    pub cvv: Option<Secret<String>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Customer billing and shipping details.
///
/// Only the billing side and the name/email fields have wire mappings; the
/// shipping fields are carried for the caller's bookkeeping and never leave
/// the process. `profile_id` holds a previously issued stored-card token and
/// `id` the merchant-side customer identifier, both used when charging a
/// stored profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prospect {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub billing_address: Option<String>,
    pub billing_city: Option<String>,
    pub billing_state: Option<String>,
    pub billing_zip: Option<String>,
    pub billing_country: Option<String>,
    pub shipping_first_name: Option<String>,
    pub shipping_last_name: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_zip: Option<String>,
    pub shipping_country: Option<String>,
    pub profile_id: Option<String>,
    pub id: Option<String>,
}

macro_rules! take_if_set {
    ($target:expr, $overlay:expr, $($field:ident),+ $(,)?) => {
        $(
            if $overlay.$field.is_some() {
                $target.$field = $overlay.$field;
            }
        )+
    };
}

impl Prospect {
    /// Merges `overlay` into `self`, letting set fields of `overlay` win.
    /// Used by profile creation, where separate billing and shipping records
    /// collapse into a single prospect payload.
    pub fn overlay(mut self, overlay: Self) -> Self {
        take_if_set!(
            self,
            overlay,
            first_name,
            last_name,
            email,
            billing_address,
            billing_city,
            billing_state,
            billing_zip,
            billing_country,
            shipping_first_name,
            shipping_last_name,
            shipping_address,
            shipping_city,
            shipping_state,
            shipping_zip,
            shipping_country,
            profile_id,
            id,
        );
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Months,
    Days,
}

/// A recurring-billing plan in caller vocabulary. The gateway-specific rebill
/// parameters are derived from this by the connector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub amount: String,
    pub iteration_count: i64,
    pub period_unit: PeriodUnit,
    pub period_length: i64,
    pub trial_amount: Option<String>,
    pub trial_count: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub starting_date: OffsetDateTime,
}

/// Rebill frequency in the gateway's vocabulary. Month-based plans map onto
/// the named frequencies; day-based plans transmit the raw day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebillFrequency {
    Monthly,
    Quarterly,
    SemiAnnually,
    Annually,
    Days(i64),
}

impl RebillFrequency {
    pub fn to_wire_value(&self) -> String {
        match self {
            Self::Monthly => "MONTHLY".to_string(),
            Self::Quarterly => "QUARTERLY".to_string(),
            Self::SemiAnnually => "SEMI-ANNUALLY".to_string(),
            Self::Annually => "ANNUALLY".to_string(),
            Self::Days(days) => days.to_string(),
        }
    }
}

/// Derived recurring-billing parameters transmitted alongside the initial
/// purchase of a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebillParams {
    pub count: i64,
    pub amount: String,
    pub frequency: RebillFrequency,
    /// Whole days between "now" and the plan's starting date. Negative when
    /// the starting date lies in the past; not validated here.
    pub start_days: i64,
}

/// Reference to a stored card profile used when charging without card data.
/// Both fields are always transmitted, empty when the prospect carries none,
/// so the processor can report the precise lookup failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredProfile {
    pub card_hash: String,
    pub merchant_customer_id: String,
}

/// Optional passthrough fields accepted by every monetary operation. Unset
/// fields are omitted from the wire request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraFields {
    pub merchant_site_id: Option<String>,
    pub merchant_account: Option<String>,
    pub merchant_customer_id: Option<String>,
    pub merchant_invoice_id: Option<String>,
    pub merchant_product_id: Option<String>,
    pub currency: Option<String>,
    pub ip_address: Option<String>,
    pub avs_check: Option<String>,
    pub cvv2_check: Option<String>,
    pub scrub: Option<String>,
    pub udf01: Option<String>,
    pub udf02: Option<String>,
}

/// The parsed gateway reply. Every child element of the response envelope is
/// preserved verbatim in `fields`; the typed accessors read the handful of
/// fields this adapter interprets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub reason_code: i64,
    pub fields: BTreeMap<String, String>,
}

impl GatewayResponse {
    /// Builds a response from the decoded envelope. `reasonCode` is the
    /// protocol's sole outcome signal; a reply without a parseable one is
    /// malformed.
    pub fn from_fields(fields: BTreeMap<String, String>) -> Result<Self, ParsingError> {
        let reason_code = fields
            .get("reasonCode")
            .and_then(|code| code.trim().parse::<i64>().ok())
            .ok_or(ParsingError::StructParseFailure("GatewayResponse"))?;
        Ok(Self {
            reason_code,
            fields,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn guid_no(&self) -> Option<&str> {
        self.get("guidNo")
    }

    pub fn auth_no(&self) -> Option<&str> {
        self.get("authNo")
    }

    pub fn card_hash(&self) -> Option<&str> {
        self.get("cardHash")
    }
}

/// Normalized success value for monetary operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResult {
    pub transaction_id: Option<String>,
    pub auth_code: Option<String>,
    pub response: GatewayResponse,
}

/// Result of tokenizing a card through a nominal authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResult {
    /// The processor-issued stored-card token (`cardHash`).
    pub profile_id: Option<String>,
    pub response: GatewayResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionResult {
    pub subscription_id: Option<String>,
    pub response: GatewayResponse,
}
