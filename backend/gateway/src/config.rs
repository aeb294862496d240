//! Immutable gateway configuration.
//!
//! Everything here is fixed at construction; the client holds no other
//! state, which is what makes it safe to share across concurrent calls.

use std::time::Duration;

use hyperswitch_masking::{PeekInterface, Secret};
use serde::Deserialize;

use domain_types::{
    connector_types::GatewayEndpoints, errors::ConfigurationError, router_data::GatewayAuth,
};

pub const LIVE_ROUTING_DNS: &str = "gw.rocketgate.com";
pub const LIVE_HOSTS: [&str; 2] = ["gw-16.rocketgate.com", "gw-17.rocketgate.com"];
pub const TEST_HOSTS: [&str; 1] = ["dev-gw.rocketgate.com"];
pub const SERVLET_PATH: &str = "/gateway/servlet/ServiceDispatcherAccess";
pub const GATEWAY_PORT: u16 = 443;
pub const USER_AGENT: &str = "RG Client - Rust 1.0";
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

pub const LIVE_REPORT_ENDPOINT: &str =
    "https://my.rocketgate.com/com/rocketgate/gateway/xml/Transactions.cfc";
pub const TEST_REPORT_ENDPOINT: &str =
    "https://dev-my.rocketgate.com/com/rocketgate/gateway/xml/Transactions.cfc";

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub merchant_id: Secret<String>,
    pub merchant_password: Secret<String>,
    /// Routes every call to the sandbox host pool.
    #[serde(default)]
    pub test_mode: bool,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_routing_dns")]
    pub routing_dns: String,
    #[serde(default = "default_live_hosts")]
    pub live_hosts: Vec<String>,
    #[serde(default = "default_test_hosts")]
    pub test_hosts: Vec<String>,
    #[serde(default = "default_servlet_path")]
    pub servlet_path: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_connect_timeout_secs() -> u64 {
    CONNECT_TIMEOUT_SECS
}

fn default_routing_dns() -> String {
    LIVE_ROUTING_DNS.to_string()
}

fn default_live_hosts() -> Vec<String> {
    LIVE_HOSTS.map(str::to_string).to_vec()
}

fn default_test_hosts() -> Vec<String> {
    TEST_HOSTS.map(str::to_string).to_vec()
}

fn default_servlet_path() -> String {
    SERVLET_PATH.to_string()
}

fn default_port() -> u16 {
    GATEWAY_PORT
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

impl GatewayConfig {
    /// A configuration with production defaults for everything except the
    /// credentials.
    pub fn new(merchant_id: impl Into<String>, merchant_password: impl Into<String>) -> Self {
        Self {
            merchant_id: Secret::new(merchant_id.into()),
            merchant_password: Secret::new(merchant_password.into()),
            test_mode: false,
            connect_timeout_secs: default_connect_timeout_secs(),
            routing_dns: default_routing_dns(),
            live_hosts: default_live_hosts(),
            test_hosts: default_test_hosts(),
            servlet_path: default_servlet_path(),
            port: default_port(),
            user_agent: default_user_agent(),
        }
    }

    /// Checks the mandatory credentials. Runs before any network activity;
    /// a failure here is fatal for the client being constructed.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.merchant_id.peek().is_empty() {
            return Err(ConfigurationError::MissingMerchantId);
        }
        if self.merchant_password.peek().is_empty() {
            return Err(ConfigurationError::MissingMerchantPassword);
        }
        Ok(())
    }

    pub fn endpoints(&self) -> GatewayEndpoints {
        GatewayEndpoints {
            routing_dns: self.routing_dns.clone(),
            live_hosts: self.live_hosts.clone(),
            test_hosts: self.test_hosts.clone(),
            servlet_path: self.servlet_path.clone(),
            port: self.port,
            user_agent: self.user_agent.clone(),
            test_mode: self.test_mode,
        }
    }

    pub fn auth(&self) -> GatewayAuth {
        GatewayAuth {
            merchant_id: self.merchant_id.clone(),
            merchant_password: self.merchant_password.clone(),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn report_endpoint(&self) -> &'static str {
        if self.test_mode {
            TEST_REPORT_ENDPOINT
        } else {
            LIVE_REPORT_ENDPOINT
        }
    }
}
