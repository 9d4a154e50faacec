//! Chain descriptions handed to browser wallets.

use serde::{Deserialize, Serialize};

use crate::utils::chain_id_hex;

/// Native currency of a chain, as wallets display it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// An EVM chain the app can target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chain {
    pub id: u64,
    pub name: String,
    pub native_currency: NativeCurrency,
    pub default_rpc_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    pub testnet: bool,
}

impl Chain {
    /// Ethereum Sepolia test network.
    pub fn sepolia() -> Self {
        Self {
            id: 11_155_111,
            name: "Sepolia".to_string(),
            native_currency: NativeCurrency {
                name: "Sepolia Ether".to_string(),
                symbol: "SepoliaETH".to_string(),
                decimals: 18,
            },
            default_rpc_url: "https://rpc.sepolia.org".to_string(),
            explorer_url: Some("https://sepolia.etherscan.io".to_string()),
            testnet: true,
        }
    }

    /// Chain id as the hex quantity wallets expect.
    pub fn id_hex(&self) -> String {
        chain_id_hex(self.id)
    }
}

/// Parameters of `wallet_switchEthereumChain`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwitchChainParams {
    pub chain_id: String,
}

/// Parameters of `wallet_addEthereumChain` (EIP-3085).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub block_explorer_urls: Vec<String>,
}

impl AddChainParams {
    /// Describe `chain` with `rpc_url` as its only endpoint.
    pub fn new(chain: &Chain, rpc_url: &str) -> Self {
        Self {
            chain_id: chain.id_hex(),
            chain_name: chain.name.clone(),
            native_currency: chain.native_currency.clone(),
            rpc_urls: vec![rpc_url.to_string()],
            block_explorer_urls: chain.explorer_url.iter().cloned().collect(),
        }
    }
}
