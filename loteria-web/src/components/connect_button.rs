//! Wallet Connect Button - header control
//!
//! Click the button to open the connector menu; picking a connector starts the
//! connection. Focus leaving the control, or Escape, closes the menu.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FocusEvent, KeyboardEvent, Node};

use crate::state::wallet::use_wallet_context;
use crate::wallet::{ConnectorInfo, ControlEvent, ControlState, ControlView, WalletSession};

#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet = StoredValue::new(use_wallet_context());
    let control = RwSignal::new(ControlState::default());
    let connectors = wallet.with_value(|session| session.connectors());

    let send = move |event: ControlEvent| control.update(|state| state.apply(event));

    // Follow the session: silent reconnects, account switches, disconnects from the wallet
    Effect::new(move || {
        let account = wallet.with_value(|session| session.account());
        send(ControlEvent::SessionChanged(account));
    });

    let select = move |connector: ConnectorInfo| {
        send(ControlEvent::Select(connector.clone()));
        if !control.with_untracked(|state| matches!(state, ControlState::Connecting { .. })) {
            return;
        }

        leptos::task::spawn_local(async move {
            let session = wallet.get_value();
            let result = session.connect(&connector.id).await;
            send(ControlEvent::Resolved(result));
        });
    };

    let disconnect = move |_| {
        send(ControlEvent::Disconnect);
        leptos::task::spawn_local(async move {
            wallet.get_value().disconnect().await;
        });
    };

    let on_focus_out = move |ev: FocusEvent| {
        let container = ev.current_target();
        let next_inside = ev.related_target().map(|next| {
            container
                .as_ref()
                .and_then(|current| current.dyn_ref::<Node>())
                .is_some_and(|node| node.contains(next.dyn_ref::<Node>()))
        });
        if let Some(event) = ControlEvent::focus_out(next_inside) {
            send(event);
        }
    };

    let on_key_down = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            send(ControlEvent::Dismiss);
        }
    };

    view! {
        // tabindex keeps focus inside the control while a menu option is clicked
        <div class="wallet-control" tabindex="-1" on:focusout=on_focus_out on:keydown=on_key_down>
            {move || match control.with(ControlState::view) {
                ControlView::Account { display_address } => view! {
                    <div class="wallet-account">
                        <span class="wallet-address">{display_address}</span>
                        <button class="btn btn-disconnect" on:click=disconnect>
                            "Disconnect"
                        </button>
                    </div>
                }.into_any(),
                ControlView::ConnectButton { menu_open, connecting } => {
                    let options = connectors.clone();
                    view! {
                        <div class="wallet-connect">
                            <button
                                class="btn btn-connect"
                                disabled=connecting
                                aria-expanded=menu_open.to_string()
                                on:click=move |_| send(ControlEvent::ToggleMenu)
                            >
                                {if connecting { "Connecting..." } else { "Connect Wallet" }}
                            </button>
                            {menu_open.then(move || view! {
                                <div class="wallet-menu" role="menu">
                                    {options.into_iter().map(|connector| {
                                        let name = connector.name.clone();
                                        view! {
                                            <button
                                                class="wallet-option"
                                                role="menuitem"
                                                on:click=move |_| select(connector.clone())
                                            >
                                                {name}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                            })}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
