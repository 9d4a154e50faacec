//! Landing Page - hero and the two lottery entry points
//!
//! The call-to-action buttons are placeholders until the lottery contract is wired in.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h2 class="hero-title">
                "Welcome to " <span class="accent">"Loteria"</span>
            </h2>
            <p class="hero-subtitle">
                "Create and join decentralized lotteries powered by smart contracts and "
                "verifiable randomness. Simple, transparent, and fair."
            </p>

            <div class="options-grid">
                <div class="card">
                    <h3 class="card-title">"Create a Lottery"</h3>
                    <p class="card-text">
                        "Set up your own lottery by choosing ticket price, number of winners, "
                        "and participant limit."
                    </p>
                    <button class="btn btn-primary">"Create Lottery"</button>
                </div>

                <div class="card">
                    <h3 class="card-title">"Join a Lottery"</h3>
                    <p class="card-text">
                        "Browse active lotteries and join by purchasing a ticket with your wallet."
                    </p>
                    <button class="btn btn-secondary">"Explore Lotteries"</button>
                </div>
            </div>
        </section>
    }
}
