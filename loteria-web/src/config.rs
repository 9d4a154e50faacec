//! # Network Configuration
//!
//! Which chain the wallet control targets, which RPC endpoint wallets are given
//! for it, and which connectors the dropdown offers.
//!
//! The RPC endpoint can be overridden with `LOTERIA_RPC_URL`. A browser bundle has
//! no process environment, so the variable is captured when the crate is built
//! (`LOTERIA_RPC_URL=https://... trunk build`). Unset or empty falls back to the
//! chain's public endpoint.
//!
//! ## Global Config Access
//!
//! [`init_config()`] validates and installs the configuration once at startup;
//! [`network_config()`] reads it afterwards and falls back to the defaults if
//! initialization failed.

use std::sync::OnceLock;

use shared::dto::chain::Chain;

use crate::error::ConfigError;
use crate::wallet::connector::ConnectorKind;

/// Build-time variable overriding the RPC endpoint.
pub const RPC_URL_ENV: &str = "LOTERIA_RPC_URL";

/// Chain, RPC endpoint and connectors the app is wired to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub chain: Chain,

    /// Endpoint handed to wallets that do not know the chain yet.
    pub rpc_url: String,

    /// Connector strategies, in dropdown order.
    pub connectors: Vec<ConnectorKind>,
}

impl NetworkConfig {
    /// Configuration with the RPC override captured at build time.
    pub fn from_env() -> Self {
        Self::with_rpc_override(option_env!("LOTERIA_RPC_URL"))
    }

    /// Sepolia with MetaMask, using `rpc_override` when it is non-empty.
    pub fn with_rpc_override(rpc_override: Option<&str>) -> Self {
        let chain = Chain::sepolia();
        let rpc_url = resolve_rpc_url(rpc_override, &chain.default_rpc_url);
        Self {
            chain,
            rpc_url,
            connectors: vec![ConnectorKind::MetaMask],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rpc_url.starts_with("https://") || self.rpc_url.starts_with("http://")) {
            return Err(ConfigError::InvalidRpcUrl(self.rpc_url.clone()));
        }

        if self.connectors.is_empty() {
            return Err(ConfigError::NoConnectors);
        }

        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::with_rpc_override(None)
    }
}

/// The override verbatim when set and non-blank, otherwise `default_url`.
pub fn resolve_rpc_url(rpc_override: Option<&str>, default_url: &str) -> String {
    match rpc_override {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => default_url.to_string(),
    }
}

static CONFIG: OnceLock<NetworkConfig> = OnceLock::new();

/// Validate the build-time configuration and install it.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or was already installed.
/// [`network_config()`] then serves the defaults.
pub fn init_config() -> Result<&'static NetworkConfig, ConfigError> {
    let config = NetworkConfig::from_env();
    config.validate()?;

    CONFIG.set(config).map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(network_config())
}

/// The installed configuration, or the defaults when none was installed.
pub fn network_config() -> &'static NetworkConfig {
    CONFIG.get_or_init(NetworkConfig::default)
}
