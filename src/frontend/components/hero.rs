use leptos::prelude::*;

use crate::frontend::use_site_info;

#[component]
pub fn HomepageHeader() -> impl IntoView {
    let site = use_site_info();

    view! {
        <header class="hero hero--primary">
            <div class="container">
                <h1 class="hero__title">{site.title}</h1>
                <p class="hero__subtitle">{site.tagline}</p>
                <div class="buttons">
                    <a class="button button--secondary button--lg" href=site.docs_url>
                        "Get Started"
                    </a>
                    <a
                        class="button button--outline button--lg"
                        href=site.repository_url
                        target="_blank"
                        rel="noopener"
                    >
                        "View on GitHub"
                    </a>
                </div>
            </div>
        </header>
    }
}
