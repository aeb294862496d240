//! Outbound HTTP services.

pub mod service;

pub use service::ReqwestApiClient;
