//! EIP-1193 Wallet Integration via wasm-bindgen
//!
//! JavaScript interop with the provider browser wallets inject at `window.ethereum`.
//! When several extensions are installed, MetaMask and friends expose each of them
//! in `window.ethereum.providers`; the connector kind picks one.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use shared::dto::chain::{AddChainParams, Chain, SwitchChainParams};
use shared::utils::parse_chain_id;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{WalletError, UNRECOGNIZED_CHAIN_CODE};
use crate::wallet::connector::{Connection, Connector, ConnectorEvent, ConnectorInfo, ConnectorKind};

// ============================================================================
// PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function providerFor(kind) {
    const ethereum = window.ethereum;
    if (!ethereum) {
        return null;
    }
    const candidates = Array.isArray(ethereum.providers) && ethereum.providers.length > 0
        ? ethereum.providers
        : [ethereum];

    if (kind === 'metamask') {
        return candidates.find((p) => p && p.isMetaMask) || null;
    }
    return candidates[0] || null;
}

export function hasProvider(kind) {
    return providerFor(kind) !== null;
}

export async function providerRequest(kind, method, params) {
    const provider = providerFor(kind);
    if (!provider) {
        throw { code: 0, message: 'No ' + kind + ' provider in this page' };
    }
    const args = params === undefined || params === null ? { method } : { method, params };
    return await provider.request(args);
}

export function onProviderEvent(kind, event, callback) {
    const provider = providerFor(kind);
    if (!provider || typeof provider.on !== 'function') {
        return false;
    }
    provider.on(event, callback);
    return true;
}
")]
extern "C" {
    /// Whether a provider for `kind` is injected.
    #[wasm_bindgen(js_name = hasProvider)]
    fn has_provider(kind: &str) -> bool;

    /// `provider.request({ method, params })`; rejects with the provider's error object.
    #[wasm_bindgen(js_name = providerRequest, catch)]
    async fn provider_request(kind: &str, method: &str, params: JsValue) -> Result<JsValue, JsValue>;

    /// `provider.on(event, callback)`; false when there is no provider.
    #[wasm_bindgen(js_name = onProviderEvent)]
    fn on_provider_event(kind: &str, event: &str, callback: &js_sys::Function) -> bool;
}

// ============================================================================
// TYPED REQUESTS
// ============================================================================

async fn request(kind: ConnectorKind, method: &str, params: JsValue) -> Result<JsValue, WalletError> {
    provider_request(kind.id(), method, params)
        .await
        .map_err(|e| WalletError::from_js(&e))
}

fn to_params<T: Serialize>(params: &T) -> Result<JsValue, WalletError> {
    serde_wasm_bindgen::to_value(&[params]).map_err(|e| WalletError::InvalidResponse(e.to_string()))
}

fn parse_accounts(value: JsValue) -> Result<Vec<String>, WalletError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::InvalidResponse(e.to_string()))
}

/// `eth_requestAccounts`: prompts the user when the site is not authorized yet.
pub async fn request_accounts(kind: ConnectorKind) -> Result<Vec<String>, WalletError> {
    parse_accounts(request(kind, "eth_requestAccounts", JsValue::UNDEFINED).await?)
}

/// `eth_accounts`: authorized accounts, never prompts.
pub async fn authorized_accounts(kind: ConnectorKind) -> Result<Vec<String>, WalletError> {
    parse_accounts(request(kind, "eth_accounts", JsValue::UNDEFINED).await?)
}

/// `eth_chainId`
pub async fn chain_id(kind: ConnectorKind) -> Result<u64, WalletError> {
    let value = request(kind, "eth_chainId", JsValue::UNDEFINED).await?;
    value
        .as_string()
        .as_deref()
        .and_then(parse_chain_id)
        .ok_or_else(|| WalletError::InvalidResponse(format!("eth_chainId returned {:?}", value)))
}

/// `wallet_switchEthereumChain`
pub async fn switch_chain(kind: ConnectorKind, chain: &Chain) -> Result<(), WalletError> {
    let params = to_params(&SwitchChainParams { chain_id: chain.id_hex() })?;
    request(kind, "wallet_switchEthereumChain", params).await.map(|_| ())
}

/// `wallet_addEthereumChain`: wallets switch to the chain once it is added.
pub async fn add_chain(kind: ConnectorKind, params: &AddChainParams) -> Result<(), WalletError> {
    request(kind, "wallet_addEthereumChain", to_params(params)?).await.map(|_| ())
}

/// `wallet_revokePermissions` for `eth_accounts`.
pub async fn revoke_permissions(kind: ConnectorKind) -> Result<(), WalletError> {
    #[derive(Serialize)]
    struct EthAccounts {
        eth_accounts: Empty,
    }
    #[derive(Serialize)]
    struct Empty {}

    let params = to_params(&EthAccounts { eth_accounts: Empty {} })?;
    request(kind, "wallet_revokePermissions", params).await.map(|_| ())
}

// ============================================================================
// INJECTED CONNECTOR
// ============================================================================

/// Connector over an injected EIP-1193 provider.
pub struct InjectedConnector {
    kind: ConnectorKind,
    chain: Chain,
    rpc_url: String,
}

impl InjectedConnector {
    pub fn new(kind: ConnectorKind, chain: Chain, rpc_url: impl Into<String>) -> Self {
        Self {
            kind,
            chain,
            rpc_url: rpc_url.into(),
        }
    }

    /// Move the wallet to the configured chain, adding it first if the wallet
    /// does not know it. Returns the chain the wallet ends up on.
    async fn ensure_chain(&self, current: u64) -> u64 {
        if current == self.chain.id {
            return current;
        }

        log::info!("Wallet is on chain {}, switching to {}", current, self.chain.name);
        let switched = match switch_chain(self.kind, &self.chain).await {
            Err(e) if e.code() == Some(UNRECOGNIZED_CHAIN_CODE) => {
                add_chain(self.kind, &AddChainParams::new(&self.chain, &self.rpc_url)).await
            }
            other => other,
        };

        match switched {
            Ok(()) => self.chain.id,
            Err(e) => {
                log::warn!("Staying on chain {}: could not switch to {}: {}", current, self.chain.name, e);
                current
            }
        }
    }
}

#[async_trait(?Send)]
impl Connector for InjectedConnector {
    fn info(&self) -> ConnectorInfo {
        self.kind.info()
    }

    fn is_available(&self) -> bool {
        has_provider(self.kind.id())
    }

    async fn connect(&self) -> Result<Connection, WalletError> {
        if !self.is_available() {
            return Err(WalletError::NotInstalled(self.kind.name().to_string()));
        }

        let address = request_accounts(self.kind)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WalletError::InvalidResponse("wallet returned no accounts".to_string()))?;

        let chain_id = match chain_id(self.kind).await {
            Ok(current) => Some(self.ensure_chain(current).await),
            Err(e) => {
                log::warn!("Could not read wallet chain: {}", e);
                None
            }
        };

        Ok(Connection { address, chain_id })
    }

    async fn reconnect(&self) -> Result<Option<Connection>, WalletError> {
        if !self.is_available() {
            return Ok(None);
        }

        let Some(address) = authorized_accounts(self.kind).await?.into_iter().next() else {
            return Ok(None);
        };
        let chain_id = chain_id(self.kind).await.ok();

        Ok(Some(Connection { address, chain_id }))
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        if !self.is_available() {
            return Ok(());
        }
        revoke_permissions(self.kind).await
    }

    fn watch(&self, handler: Arc<dyn Fn(ConnectorEvent) + Send + Sync>) {
        let on_accounts = {
            let handler = handler.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| match parse_accounts(value) {
                Ok(accounts) => handler(ConnectorEvent::AccountsChanged(accounts)),
                Err(e) => log::warn!("Ignoring accountsChanged: {}", e),
            })
        };
        let on_chain = {
            let handler = handler.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
                match value.as_string().as_deref().and_then(parse_chain_id) {
                    Some(chain_id) => handler(ConnectorEvent::ChainChanged(chain_id)),
                    None => log::warn!("Ignoring chainChanged: {:?}", value),
                }
            })
        };
        let on_disconnect =
            Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| handler(ConnectorEvent::Disconnected));

        let kind = self.kind.id();
        let subscribed = on_provider_event(kind, "accountsChanged", on_accounts.as_ref().unchecked_ref())
            && on_provider_event(kind, "chainChanged", on_chain.as_ref().unchecked_ref())
            && on_provider_event(kind, "disconnect", on_disconnect.as_ref().unchecked_ref());
        if !subscribed {
            log::debug!("{} provider not present, not watching wallet events", self.kind.name());
        }

        // Subscriptions last as long as the page.
        on_accounts.forget();
        on_chain.forget();
        on_disconnect.forget();
    }
}
