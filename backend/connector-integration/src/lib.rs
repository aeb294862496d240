//! Connector implementations. One processor lives here today; the module
//! listing mirrors the registry every new connector joins.

pub mod connectors;

pub use connectors::Rocketgate;
