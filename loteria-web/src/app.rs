//! Loteria Web App - Leptos Frontend
//!
//! Header with the wallet control, landing page, footer.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Footer, Header};
use crate::config::network_config;
use crate::pages::HomePage;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context(network_config());

    view! {
        <Router>
            <div class="app-container">
                <Header/>
                <main class="content">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
