//! Wallet connectors: named strategies for reaching a wallet.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::WalletError;

/// Connector strategies the app ships with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    /// MetaMask's injected provider (`isMetaMask`).
    MetaMask,
    /// Whatever EIP-1193 provider sits at `window.ethereum`.
    Injected,
}

impl ConnectorKind {
    pub fn id(&self) -> &'static str {
        match self {
            ConnectorKind::MetaMask => "metamask",
            ConnectorKind::Injected => "injected",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConnectorKind::MetaMask => "MetaMask",
            ConnectorKind::Injected => "Browser Wallet",
        }
    }

    pub fn info(&self) -> ConnectorInfo {
        ConnectorInfo::new(self.id(), self.name())
    }
}

/// What the dropdown shows for a connector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectorInfo {
    pub id: String,
    pub name: String,
}

impl ConnectorInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Result of a successful connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub address: String,
    pub chain_id: Option<u64>,
}

/// Notifications a wallet pushes after connecting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectorEvent {
    /// New account list; empty means the site lost access.
    AccountsChanged(Vec<String>),
    ChainChanged(u64),
    Disconnected,
}

/// A way of reaching a wallet.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait Connector: Send + Sync {
    fn info(&self) -> ConnectorInfo;

    /// Whether the wallet this connector targets is present in the page.
    fn is_available(&self) -> bool;

    /// Ask the wallet for access. May prompt the user.
    async fn connect(&self) -> Result<Connection, WalletError>;

    /// Resume an earlier authorization without prompting.
    ///
    /// `Ok(None)` when the site is not authorized.
    async fn reconnect(&self) -> Result<Option<Connection>, WalletError>;

    /// Drop the site's access where the wallet supports it.
    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Forward wallet notifications to `handler` for the lifetime of the page.
    fn watch(&self, handler: Arc<dyn Fn(ConnectorEvent) + Send + Sync>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_kind_info() {
        assert_eq!(ConnectorKind::MetaMask.info(), ConnectorInfo::new("metamask", "MetaMask"));
        assert_eq!(ConnectorKind::Injected.id(), "injected");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ConnectorKind::MetaMask.id(), ConnectorKind::Injected.id());
    }
}
