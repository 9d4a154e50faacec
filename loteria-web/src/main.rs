//! Loteria Web App
//!
//! Landing page for the Loteria lottery with a browser wallet connection on Sepolia.
//! Compiled to WebAssembly and mounted on `<body>` when the module loads.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
pub mod config;
pub mod error;
mod pages;
pub mod services;
mod state;
pub mod wallet;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    match config::init_config() {
        Ok(network) => log::info!(
            "Loteria starting on {} (chain {}), RPC {}",
            network.chain.name,
            network.chain.id,
            network.rpc_url
        ),
        Err(e) => {
            let network = config::network_config();
            log::error!(
                "Invalid network configuration ({}), check {}. Using {}",
                e,
                config::RPC_URL_ENV,
                network.rpc_url
            );
        }
    }

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("No document available");
        return;
    };

    let Some(loading_element) = document.get_element_by_id("loteria-loading") else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Could not hide loading screen: {:?}", e);
        }
    }
}
