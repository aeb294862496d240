//! Marker types for the gateway transaction flows.
//!
//! Every monetary flow maps to one `transactionType` tag on the wire; the
//! markers select the matching `ConnectorIntegration` implementation.

#[derive(Debug, Clone)]
pub struct Purchase;

#[derive(Debug, Clone)]
pub struct AuthOnly;

#[derive(Debug, Clone)]
pub struct Confirm;

#[derive(Debug, Clone)]
pub struct Void;

#[derive(Debug, Clone)]
pub struct Credit;

#[derive(strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FlowName {
    Purchase,
    AuthOnly,
    Confirm,
    Void,
    Credit,
}
