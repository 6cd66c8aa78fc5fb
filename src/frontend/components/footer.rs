use leptos::prelude::*;

use crate::frontend::use_site_info;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site_info();

    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer__copyright">{format!("{}. Built with Rust.", site.title)}</p>
            </div>
        </footer>
    }
}
