//! # Connect Control State Machine
//!
//! Behaviour of the header's wallet button, independent of rendering:
//!
//! ```text
//! Disconnected/Error --ToggleMenu--> MenuOpen
//! MenuOpen --ToggleMenu | Dismiss--> Disconnected
//! MenuOpen --Select--> Connecting
//! Connecting --Resolved(Ok)--> Connected
//! Connecting --Resolved(Err)--> Error
//! Connected --Disconnect--> Disconnected
//! ```
//!
//! `Error` renders exactly like `Disconnected`; it only remembers the last failure.
//! The control also follows the session ([`ControlEvent::SessionChanged`]) so a
//! silent reconnect, an account switch or a disconnect made inside the wallet
//! shows up in the header.

use crate::error::WalletError;
use crate::wallet::connector::ConnectorInfo;
use crate::wallet::session::Account;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Disconnected,
    MenuOpen,
    Connecting { connector: ConnectorInfo },
    Connected { address: String },
    Error(WalletError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// Main button clicked.
    ToggleMenu,
    /// Focus left the control, or Escape was pressed.
    Dismiss,
    /// A connector was picked from the menu.
    Select(ConnectorInfo),
    /// The connection request finished.
    Resolved(Result<String, WalletError>),
    /// Disconnect button clicked.
    Disconnect,
    /// The session reported a new account.
    SessionChanged(Account),
}

impl ControlEvent {
    /// Event for focus leaving the control's container.
    ///
    /// `next_inside` is whether the element receiving focus sits inside the
    /// container; `None` when focus left the page or went to nothing.
    pub fn focus_out(next_inside: Option<bool>) -> Option<ControlEvent> {
        match next_inside {
            Some(true) => None,
            Some(false) | None => Some(ControlEvent::Dismiss),
        }
    }
}

/// What to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlView {
    ConnectButton { menu_open: bool, connecting: bool },
    Account { display_address: String },
}

impl ControlState {
    /// Next state after `event`. Events that do not apply leave the state as is.
    pub fn transition(self, event: ControlEvent) -> ControlState {
        use ControlEvent as E;
        use ControlState as S;

        match (self, event) {
            (S::Disconnected | S::Error(_), E::ToggleMenu) => S::MenuOpen,
            (S::MenuOpen, E::ToggleMenu | E::Dismiss) => S::Disconnected,
            (S::MenuOpen, E::Select(connector)) => {
                log::info!("Connecting wallet via {}", connector.name);
                S::Connecting { connector }
            }

            (S::Connecting { connector }, E::Resolved(Ok(address))) => {
                log::info!("Wallet connected via {}: {}", connector.name, address);
                S::Connected { address }
            }
            (S::Connecting { connector }, E::Resolved(Err(err))) => {
                if err.is_user_rejection() {
                    log::info!("User rejected connection via {}", connector.name);
                } else {
                    log::error!("Unexpected error connecting via {}: {}", connector.name, err);
                }
                S::Error(err)
            }

            (S::Connected { address }, E::Disconnect) => {
                log::info!("Wallet disconnected: {}", address);
                S::Disconnected
            }

            (state, E::SessionChanged(account)) => state.follow(&account),

            (state, _) => state,
        }
    }

    /// In-place [`transition`](Self::transition), for signal updates.
    pub fn apply(&mut self, event: ControlEvent) {
        *self = std::mem::take(self).transition(event);
    }

    fn follow(self, account: &Account) -> ControlState {
        match (self, account.address()) {
            (ControlState::Connected { address }, Some(current)) if address == current => {
                ControlState::Connected { address }
            }
            (_, Some(current)) if account.is_connected() => ControlState::Connected {
                address: current.to_string(),
            },
            (ControlState::Connected { .. }, _) => ControlState::Disconnected,
            (state, _) => state,
        }
    }

    pub fn view(&self) -> ControlView {
        match self {
            ControlState::Connected { address } => ControlView::Account {
                display_address: shared::utils::truncate_address(address),
            },
            ControlState::MenuOpen => ControlView::ConnectButton {
                menu_open: true,
                connecting: false,
            },
            ControlState::Connecting { .. } => ControlView::ConnectButton {
                menu_open: false,
                connecting: true,
            },
            ControlState::Disconnected | ControlState::Error(_) => ControlView::ConnectButton {
                menu_open: false,
                connecting: false,
            },
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ControlState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ControlState::Connected { address } => Some(address),
            _ => None,
        }
    }
}
