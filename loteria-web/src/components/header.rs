//! Header Bar - brand and wallet control

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::ConnectButton;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <A href="/">
                <span class="brand">"🎲 Loteria"</span>
            </A>
            <ConnectButton/>
        </header>
    }
}
