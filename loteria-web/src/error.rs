//! # Error Types
//!
//! [`WalletError`] covers everything that can go wrong while talking to a browser
//! wallet. [`ConfigError`] covers network configuration validation.
//!
//! ## Failure Policy
//!
//! Wallet failures fall in two classes, told apart by [`WalletError::is_user_rejection`]:
//!
//! - **User rejection** (EIP-1193 code `4001`, or a "User rejected" message): logged at
//!   info level and otherwise ignored.
//! - **Everything else**: logged as an unexpected error.
//!
//! Neither class is retried and neither is fatal.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// EIP-1193 "User Rejected Request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// EIP-3326 "Unrecognized chain", returned by `wallet_switchEthereumChain`.
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// Browser wallet error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The user dismissed or declined the wallet prompt.
    #[error("User rejected the request: {0}")]
    UserRejected(String),

    /// No provider for the selected connector was injected into the page.
    #[error("Wallet not installed: {0}")]
    NotInstalled(String),

    /// The selected connector id is not part of the configuration.
    #[error("Unknown connector: {0}")]
    UnknownConnector(String),

    /// Any other error returned by the provider.
    #[error("Provider error {code}: {message}")]
    Provider { code: i64, message: String },

    /// The provider answered with something we could not interpret.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl WalletError {
    /// Classify a provider RPC error by code and message.
    pub fn from_rpc(code: Option<i64>, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == Some(USER_REJECTED_CODE) || message.contains("User rejected") {
            return WalletError::UserRejected(message);
        }
        WalletError::Provider {
            code: code.unwrap_or_default(),
            message,
        }
    }

    /// Classify an error thrown by the injected provider.
    ///
    /// Providers throw objects carrying `code` and `message`; plain strings and
    /// anything else are kept as the message.
    pub fn from_js(value: &JsValue) -> Self {
        let code = js_sys::Reflect::get(value, &JsValue::from_str("code"))
            .ok()
            .and_then(|code| code.as_f64())
            .map(|code| code as i64);

        let message = js_sys::Reflect::get(value, &JsValue::from_str("message"))
            .ok()
            .and_then(|message| message.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));

        Self::from_rpc(code, message)
    }

    /// Whether the user declined the request.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::UserRejected(_))
    }

    /// Provider error code, when the provider supplied one.
    pub fn code(&self) -> Option<i64> {
        match self {
            WalletError::UserRejected(_) => Some(USER_REJECTED_CODE),
            WalletError::Provider { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Network configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("RPC URL must start with http:// or https://, got {0:?}")]
    InvalidRpcUrl(String),

    #[error("At least one wallet connector must be configured")]
    NoConnectors,

    #[error("Network configuration has already been initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_by_code() {
        let err = WalletError::from_rpc(Some(4001), "MetaMask Tx Signature: denied");
        assert!(err.is_user_rejection());
        assert_eq!(err.code(), Some(USER_REJECTED_CODE));
    }

    #[test]
    fn test_rejection_by_message() {
        let err = WalletError::from_rpc(None, "User rejected the request.");
        assert_eq!(err, WalletError::UserRejected("User rejected the request.".to_string()));
    }

    #[test]
    fn test_other_provider_errors_are_unexpected() {
        let err = WalletError::from_rpc(Some(-32002), "Request already pending");
        assert!(!err.is_user_rejection());
        assert_eq!(
            err,
            WalletError::Provider {
                code: -32002,
                message: "Request already pending".to_string()
            }
        );
        assert_eq!(err.to_string(), "Provider error -32002: Request already pending");
    }

    #[test]
    fn test_local_errors_are_not_rejections() {
        assert!(!WalletError::NotInstalled("MetaMask".to_string()).is_user_rejection());
        assert!(!WalletError::UnknownConnector("ledger".to_string()).is_user_rejection());
        assert_eq!(WalletError::NotInstalled("MetaMask".to_string()).code(), None);
    }
}
