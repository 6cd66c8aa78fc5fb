//! 404 Not Found page

use leptos::prelude::*;

use crate::frontend::use_site_info;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    let site = use_site_info();

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Page not found"</p>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <a href=site.base_url class="button button--primary">"Return Home"</a>
        </div>
    }
}
