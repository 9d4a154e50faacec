use leptos::prelude::*;

fn footer_text(year: u32) -> String {
    format!("© {} Loteria · Built with ❤️ on Web3", year)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            {footer_text(year)}
        </footer>
    }
}
