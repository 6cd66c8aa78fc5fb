use leptos::prelude::*;

use crate::frontend::use_site_info;

#[component]
pub fn Nav() -> impl IntoView {
    let site = use_site_info();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=site.base_url>{site.title}</a>
            <div class="navbar__items">
                <a class="navbar__link" href=site.docs_url>"Docs"</a>
                <a class="navbar__link" href=site.repository_url target="_blank" rel="noopener">
                    "GitHub"
                </a>
            </div>
        </nav>
    }
}
