//! # Wallet Session
//!
//! The record of whether a wallet is connected and which address is active.
//!
//! UI code only sees the [`WalletSession`] trait: it reads the [`Account`], asks for
//! a connection through a connector id, or asks for a disconnect. It never writes
//! the account itself.
//!
//! [`ConnectorSession`] is the implementation the app uses. It is generic over an
//! [`AccountStore`] so the same logic runs against a Leptos signal in the browser
//! and a plain cell in tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::WalletError;
use crate::wallet::connector::{Connection, Connector, ConnectorEvent, ConnectorInfo};

/// Lifecycle of the session's account.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AccountStatus {
    #[default]
    Idle,
    Connecting,
    Connected,
    Error(WalletError),
}

/// The active account, if any.
///
/// The address is present exactly when the status is [`AccountStatus::Connected`];
/// the constructors are the only way to build one.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Account {
    address: Option<String>,
    chain_id: Option<u64>,
    connector_id: Option<String>,
    status: AccountStatus,
}

impl Account {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn connecting(connector_id: impl Into<String>) -> Self {
        Self {
            connector_id: Some(connector_id.into()),
            status: AccountStatus::Connecting,
            ..Self::default()
        }
    }

    pub fn connected(connector_id: impl Into<String>, connection: Connection) -> Self {
        Self {
            address: Some(connection.address),
            chain_id: connection.chain_id,
            connector_id: Some(connector_id.into()),
            status: AccountStatus::Connected,
        }
    }

    pub fn failed(error: WalletError) -> Self {
        Self {
            status: AccountStatus::Error(error),
            ..Self::default()
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    pub fn connector_id(&self) -> Option<&str> {
        self.connector_id.as_deref()
    }

    pub fn status(&self) -> &AccountStatus {
        &self.status
    }

    pub fn is_connected(&self) -> bool {
        self.status == AccountStatus::Connected
    }

    pub fn is_connecting(&self) -> bool {
        self.status == AccountStatus::Connecting
    }

    pub fn is_idle(&self) -> bool {
        self.status == AccountStatus::Idle
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, AccountStatus::Error(_))
    }

    pub fn error(&self) -> Option<&WalletError> {
        match &self.status {
            AccountStatus::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Address in header form (first 6, last 4).
    pub fn display_address(&self) -> Option<String> {
        self.address().map(shared::utils::truncate_address)
    }

    /// Apply a wallet notification from `connector_id`.
    ///
    /// Returns `None` when the event does not change anything, including events
    /// from a connector other than the one the account is connected through.
    pub fn on_connector_event(&self, connector_id: &str, event: &ConnectorEvent) -> Option<Account> {
        if !self.is_connected() || self.connector_id() != Some(connector_id) {
            return None;
        }

        match event {
            ConnectorEvent::AccountsChanged(accounts) => match accounts.first() {
                None => Some(Account::idle()),
                Some(address) if Some(address.as_str()) == self.address() => None,
                Some(address) => Some(Account {
                    address: Some(address.clone()),
                    ..self.clone()
                }),
            },
            ConnectorEvent::ChainChanged(chain_id) if Some(*chain_id) == self.chain_id => None,
            ConnectorEvent::ChainChanged(chain_id) => Some(Account {
                chain_id: Some(*chain_id),
                ..self.clone()
            }),
            ConnectorEvent::Disconnected => Some(Account::idle()),
        }
    }
}

/// Storage backing a session's account.
pub trait AccountStore {
    /// Read the account, subscribing the caller where the store is reactive.
    fn load(&self) -> Account;

    /// Read the account without subscribing.
    fn load_untracked(&self) -> Account {
        self.load()
    }

    fn store(&self, account: Account);
}

/// Session state as the UI sees it.
#[async_trait(?Send)]
pub trait WalletSession {
    fn account(&self) -> Account;

    fn connectors(&self) -> Vec<ConnectorInfo>;

    /// Connect through the connector with `connector_id` and return the address.
    async fn connect(&self, connector_id: &str) -> Result<String, WalletError>;

    async fn disconnect(&self);
}

/// Session driven by a fixed set of connectors.
#[derive(Clone)]
pub struct ConnectorSession<S> {
    store: S,
    connectors: Vec<Arc<dyn Connector>>,
}

impl<S: AccountStore> ConnectorSession<S> {
    pub fn new(store: S, connectors: Vec<Arc<dyn Connector>>) -> Self {
        Self { store, connectors }
    }

    fn find(&self, connector_id: &str) -> Option<&Arc<dyn Connector>> {
        self.connectors
            .iter()
            .find(|connector| connector.info().id == connector_id)
    }

    /// Resume an earlier authorization without prompting the user.
    ///
    /// Tries available connectors in configuration order and returns the
    /// address of the first one that is still authorized.
    pub async fn reconnect(&self) -> Option<String> {
        if self.store.load_untracked().is_connected() {
            return self.store.load_untracked().address().map(str::to_string);
        }

        for connector in self.connectors.iter().filter(|c| c.is_available()) {
            let info = connector.info();
            match connector.reconnect().await {
                Ok(Some(connection)) => {
                    log::info!("Reconnected {} via {}", connection.address, info.name);
                    let address = connection.address.clone();
                    self.store.store(Account::connected(info.id, connection));
                    return Some(address);
                }
                Ok(None) => log::debug!("{} has no authorized account", info.name),
                Err(e) => log::warn!("Silent reconnect via {} failed: {}", info.name, e),
            }
        }
        None
    }
}

impl<S: AccountStore + Clone + Send + Sync + 'static> ConnectorSession<S> {
    /// Follow account, chain and disconnect notifications from every connector.
    pub fn watch(&self) {
        for connector in &self.connectors {
            let store = self.store.clone();
            let connector_id = connector.info().id;
            connector.watch(Arc::new(move |event: ConnectorEvent| {
                let current = store.load_untracked();
                if let Some(next) = current.on_connector_event(&connector_id, &event) {
                    log::debug!("Wallet event from {}: {:?}", connector_id, event);
                    store.store(next);
                }
            }));
        }
    }
}

#[async_trait(?Send)]
impl<S: AccountStore> WalletSession for ConnectorSession<S> {
    fn account(&self) -> Account {
        self.store.load()
    }

    fn connectors(&self) -> Vec<ConnectorInfo> {
        self.connectors.iter().map(|connector| connector.info()).collect()
    }

    async fn connect(&self, connector_id: &str) -> Result<String, WalletError> {
        let connector = match self.find(connector_id) {
            Some(connector) => connector.clone(),
            None => {
                let err = WalletError::UnknownConnector(connector_id.to_string());
                self.store.store(Account::failed(err.clone()));
                return Err(err);
            }
        };

        self.store.store(Account::connecting(connector_id));

        match connector.connect().await {
            Ok(connection) => {
                let address = connection.address.clone();
                self.store.store(Account::connected(connector_id, connection));
                Ok(address)
            }
            Err(err) => {
                log::debug!("Connection via {} failed: {}", connector_id, err);
                self.store.store(Account::failed(err.clone()));
                Err(err)
            }
        }
    }

    async fn disconnect(&self) {
        let account = self.store.load_untracked();
        self.store.store(Account::idle());

        let Some(connector) = account.connector_id().and_then(|id| self.find(id)) else {
            return;
        };
        if let Err(e) = connector.disconnect().await {
            log::debug!("Wallet kept its permissions after disconnect: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::testing::{memory_session, MockConnector, Outcome, ADDRESS, OTHER_ADDRESS};

    #[test]
    fn test_address_present_iff_connected() {
        let connection = Connection { address: ADDRESS.to_string(), chain_id: Some(11_155_111) };
        let states = [
            Account::idle(),
            Account::connecting("metamask"),
            Account::connected("metamask", connection),
            Account::failed(WalletError::UserRejected("no".to_string())),
        ];
        for account in states {
            assert_eq!(account.address().is_some(), account.is_connected(), "{:?}", account);
        }
    }

    #[test]
    fn test_display_address() {
        let connection = Connection { address: ADDRESS.to_string(), chain_id: None };
        let account = Account::connected("metamask", connection);
        assert_eq!(account.display_address().as_deref(), Some("0x5290...9EE7"));
        assert_eq!(Account::idle().display_address(), None);
    }

    #[tokio::test]
    async fn test_connect_success_updates_account() {
        let (session, store) = memory_session(vec![MockConnector::new("metamask", Outcome::Connect(ADDRESS))]);

        let address = session.connect("metamask").await.unwrap();

        assert_eq!(address, ADDRESS);
        let account = store.load();
        assert!(account.is_connected());
        assert_eq!(account.address(), Some(ADDRESS));
        assert_eq!(account.connector_id(), Some("metamask"));
        assert_eq!(account.chain_id(), Some(11_155_111));
    }

    #[tokio::test]
    async fn test_connect_rejected_records_error() {
        let (session, store) = memory_session(vec![MockConnector::new("metamask", Outcome::Reject)]);

        let err = session.connect("metamask").await.unwrap_err();

        assert!(err.is_user_rejection());
        let account = store.load();
        assert!(account.is_error());
        assert_eq!(account.address(), None);
    }

    #[tokio::test]
    async fn test_connect_unknown_connector() {
        let (session, store) = memory_session(vec![MockConnector::new("metamask", Outcome::Connect(ADDRESS))]);

        let err = session.connect("ledger").await.unwrap_err();

        assert_eq!(err, WalletError::UnknownConnector("ledger".to_string()));
        assert!(store.load().is_error());
    }

    #[tokio::test]
    async fn test_disconnect_clears_account_and_revokes() {
        let connector = MockConnector::new("metamask", Outcome::Connect(ADDRESS));
        let disconnects = connector.disconnect_calls();
        let (session, store) = memory_session(vec![connector]);

        session.connect("metamask").await.unwrap();
        session.disconnect().await;

        assert!(store.load().is_idle());
        assert_eq!(store.load().address(), None);
        assert_eq!(disconnects.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_disconnect_while_idle_is_noop() {
        let connector = MockConnector::new("metamask", Outcome::Connect(ADDRESS));
        let disconnects = connector.disconnect_calls();
        let (session, store) = memory_session(vec![connector]);

        session.disconnect().await;

        assert!(store.load().is_idle());
        assert_eq!(disconnects.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_reconnect_uses_first_authorized_connector() {
        let (session, store) = memory_session(vec![
            MockConnector::new("metamask", Outcome::Reject),
            MockConnector::new("injected", Outcome::Connect(OTHER_ADDRESS)).authorized(),
        ]);

        let address = session.reconnect().await;

        assert_eq!(address.as_deref(), Some(OTHER_ADDRESS));
        assert_eq!(store.load().connector_id(), Some("injected"));
    }

    #[tokio::test]
    async fn test_reconnect_without_authorization_stays_idle() {
        let (session, store) = memory_session(vec![MockConnector::new("metamask", Outcome::Connect(ADDRESS))]);

        assert_eq!(session.reconnect().await, None);
        assert!(store.load().is_idle());
    }

    #[tokio::test]
    async fn test_watch_follows_wallet_events() {
        let connector = MockConnector::new("metamask", Outcome::Connect(ADDRESS));
        let emitter = connector.emitter();
        let (session, store) = memory_session(vec![connector]);
        session.watch();
        session.connect("metamask").await.unwrap();

        emitter.emit(ConnectorEvent::AccountsChanged(vec![OTHER_ADDRESS.to_string()]));
        assert_eq!(store.load().address(), Some(OTHER_ADDRESS));

        emitter.emit(ConnectorEvent::ChainChanged(1));
        assert_eq!(store.load().chain_id(), Some(1));

        emitter.emit(ConnectorEvent::AccountsChanged(vec![]));
        assert!(store.load().is_idle());
    }

    #[test]
    fn test_events_from_other_connectors_are_ignored() {
        let connection = Connection { address: ADDRESS.to_string(), chain_id: Some(1) };
        let account = Account::connected("metamask", connection);

        assert_eq!(account.on_connector_event("injected", &ConnectorEvent::Disconnected), None);
        assert_eq!(account.on_connector_event("metamask", &ConnectorEvent::ChainChanged(1)), None);
        assert_eq!(
            account.on_connector_event("metamask", &ConnectorEvent::Disconnected),
            Some(Account::idle())
        );
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let event = ConnectorEvent::AccountsChanged(vec![ADDRESS.to_string()]);
        assert_eq!(Account::idle().on_connector_event("metamask", &event), None);
    }
}
