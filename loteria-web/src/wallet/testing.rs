//! Test doubles for connectors and account storage.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::WalletError;
use crate::wallet::connector::{Connection, Connector, ConnectorEvent, ConnectorInfo};
use crate::wallet::session::{Account, AccountStore, ConnectorSession};

pub const ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";
pub const OTHER_ADDRESS: &str = "0x8617E340B3D01FA5F11F306F4090FD50E238070D";
pub const SEPOLIA_ID: u64 = 11_155_111;

/// How a [`MockConnector`] answers a connection request.
#[derive(Clone, Copy, Debug)]
pub enum Outcome {
    Connect(&'static str),
    Reject,
    Fail,
}

#[derive(Clone, Default)]
pub struct MemoryStore(Arc<Mutex<Account>>);

impl AccountStore for MemoryStore {
    fn load(&self) -> Account {
        self.0.lock().unwrap().clone()
    }

    fn store(&self, account: Account) {
        *self.0.lock().unwrap() = account;
    }
}

type Handler = Arc<dyn Fn(ConnectorEvent) + Send + Sync>;

/// Pushes events to whatever subscribed through [`Connector::watch`].
#[derive(Clone, Default)]
pub struct Emitter(Arc<Mutex<Vec<Handler>>>);

impl Emitter {
    pub fn emit(&self, event: ConnectorEvent) {
        let handlers = self.0.lock().unwrap().clone();
        for handler in handlers {
            handler(event.clone());
        }
    }
}

pub struct MockConnector {
    info: ConnectorInfo,
    outcome: Outcome,
    authorized: bool,
    disconnects: Arc<AtomicUsize>,
    emitter: Emitter,
}

impl MockConnector {
    pub fn new(id: &str, outcome: Outcome) -> Self {
        Self {
            info: ConnectorInfo::new(id, format!("{} wallet", id)),
            outcome,
            authorized: false,
            disconnects: Arc::default(),
            emitter: Emitter::default(),
        }
    }

    /// Answer silent reconnects with the connect outcome's address.
    pub fn authorized(mut self) -> Self {
        self.authorized = true;
        self
    }

    pub fn disconnect_calls(&self) -> Arc<AtomicUsize> {
        self.disconnects.clone()
    }

    pub fn emitter(&self) -> Emitter {
        self.emitter.clone()
    }

    fn connection(address: &str) -> Connection {
        Connection {
            address: address.to_string(),
            chain_id: Some(SEPOLIA_ID),
        }
    }
}

#[async_trait(?Send)]
impl Connector for MockConnector {
    fn info(&self) -> ConnectorInfo {
        self.info.clone()
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn connect(&self) -> Result<Connection, WalletError> {
        match self.outcome {
            Outcome::Connect(address) => Ok(Self::connection(address)),
            Outcome::Reject => Err(WalletError::from_rpc(Some(4001), "User rejected the request.")),
            Outcome::Fail => Err(WalletError::from_rpc(Some(-32603), "Internal JSON-RPC error.")),
        }
    }

    async fn reconnect(&self) -> Result<Option<Connection>, WalletError> {
        match self.outcome {
            Outcome::Connect(address) if self.authorized => Ok(Some(Self::connection(address))),
            _ => Ok(None),
        }
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn watch(&self, handler: Arc<dyn Fn(ConnectorEvent) + Send + Sync>) {
        self.emitter.0.lock().unwrap().push(handler);
    }
}

/// A session over `connectors` backed by an in-memory store.
pub fn memory_session(connectors: Vec<MockConnector>) -> (ConnectorSession<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    let connectors = connectors
        .into_iter()
        .map(|connector| Arc::new(connector) as Arc<dyn Connector>)
        .collect();
    (ConnectorSession::new(store.clone(), connectors), store)
}
