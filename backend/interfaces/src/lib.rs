//! Trait seams between the gateway facade, the connector implementation and
//! the HTTP transport.

pub mod api;
pub mod api_client;
pub mod connector_integration;
pub mod connector_types;
