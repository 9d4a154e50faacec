//! Wallet session, connectors and the connect control's state machine.
//!
//! Nothing in here touches the DOM, so it all builds and tests on the host.
//! The browser side lives in [`crate::services::wallet`] (provider bindings)
//! and [`crate::state::wallet`] (the reactive store).

pub mod connector;
pub mod control;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use connector::{Connection, Connector, ConnectorEvent, ConnectorInfo, ConnectorKind};
pub use control::{ControlEvent, ControlState, ControlView};
pub use session::{Account, AccountStatus, AccountStore, ConnectorSession, WalletSession};
