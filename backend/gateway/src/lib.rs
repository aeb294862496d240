//! Client for the RocketGate payment gateway.
//!
//! The gateway speaks a flat XML protocol over HTTPS and requires every
//! purchase or authorization to be confirmed in a second call before it is
//! final. This crate exposes the abstract [`PaymentGateway`] operations,
//! translates them through the RocketGate connector and normalizes replies
//! into uniform results and errors. The independent report facade lives in
//! [`report`].

pub mod client;
pub mod config;
pub mod report;

pub use client::RocketgateGateway;
pub use config::GatewayConfig;
pub use interfaces::connector_types::PaymentGateway;
pub use report::ReportClient;
