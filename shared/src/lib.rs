//! # Shared Types Library
//!
//! Browser-independent types and helpers for the Loteria web app. Everything here
//! builds and tests on the host target, without WebAssembly.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects sent to browser wallets
//!   - **[`dto::chain`]**: Chain description and `wallet_addEthereumChain` parameters
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses the way the header shows them
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::chain::{AddChainParams, Chain};
//! use shared::utils::truncate_address;
//!
//! let sepolia = Chain::sepolia();
//! let params = AddChainParams::new(&sepolia, &sepolia.default_rpc_url);
//! assert_eq!(params.chain_id, "0xaa36a7");
//!
//! let display = truncate_address("0x52908400098527886E0F7030069857D2E4169EE7");
//! assert_eq!(display, "0x5290...9EE7");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
