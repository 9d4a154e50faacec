//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with browser wallets through the EIP-1193 provider API.
//!
//! ## Module Organization
//!
//! - [`chain`] - Chain descriptions and the chain switch/add request parameters
//!
//! ## Serialization Format
//!
//! Wallet-facing parameter structs serialize to **camelCase** JSON
//! (`#[serde(rename_all = "camelCase")]`), which is what the provider API expects:
//!
//! ```text
//! {
//!   "chainId": "0xaa36a7",
//!   "chainName": "Sepolia",
//!   "nativeCurrency": { "name": "Sepolia Ether", "symbol": "SepoliaETH", "decimals": 18 },
//!   "rpcUrls": ["https://rpc.sepolia.org"],
//!   "blockExplorerUrls": ["https://sepolia.etherscan.io"]
//! }
//! ```

pub mod chain;

pub use chain::*;
