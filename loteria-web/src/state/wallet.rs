//! Wallet state management

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::NetworkConfig;
use crate::services::wallet::InjectedConnector;
use crate::wallet::{Account, AccountStore, Connector, ConnectorSession};

/// Global wallet context: the session over the configured connectors,
/// with its account held in a signal so views re-render on change.
pub type WalletContext = ConnectorSession<RwSignal<Account>>;

impl AccountStore for RwSignal<Account> {
    fn load(&self) -> Account {
        self.get()
    }

    fn load_untracked(&self) -> Account {
        self.get_untracked()
    }

    fn store(&self, account: Account) {
        self.set(account);
    }
}

/// One injected connector per configured kind.
pub fn connectors_from_config(config: &NetworkConfig) -> Vec<Arc<dyn Connector>> {
    config
        .connectors
        .iter()
        .map(|kind| {
            Arc::new(InjectedConnector::new(*kind, config.chain.clone(), config.rpc_url.clone()))
                as Arc<dyn Connector>
        })
        .collect()
}

/// Create the wallet session, start following wallet events and try a
/// silent reconnect.
pub fn provide_wallet_context(config: &NetworkConfig) -> WalletContext {
    let context = ConnectorSession::new(RwSignal::new(Account::idle()), connectors_from_config(config));
    provide_context(context.clone());

    context.watch();

    let session = context.clone();
    leptos::task::spawn_local(async move {
        if session.reconnect().await.is_none() {
            log::debug!("No previously authorized wallet");
        }
    });

    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
