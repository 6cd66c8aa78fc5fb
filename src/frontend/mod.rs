pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::SiteConfig;
use pages::{LandingPage, NotFound};

/// Site-wide strings the components read from context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub tagline: String,
    pub base_url: String,
    pub docs_url: String,
    pub repository_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Ramsha".into(),
            tagline: "A modular, Clean Architecture first framework for .NET backends".into(),
            base_url: "/".into(),
            docs_url: "/docs/intro".into(),
            repository_url: "https://github.com/ramsha-framework/ramsha".into(),
        }
    }
}

impl From<&SiteConfig> for SiteInfo {
    fn from(cfg: &SiteConfig) -> Self {
        Self {
            title: cfg.title.clone(),
            tagline: cfg.tagline.clone(),
            base_url: cfg.base_url.clone(),
            docs_url: cfg.docs_url.clone(),
            repository_url: cfg.repository_url.clone(),
        }
    }
}

pub fn use_site_info() -> SiteInfo {
    use_context::<SiteInfo>().unwrap_or_default()
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    if use_context::<SiteInfo>().is_none() {
        provide_context(SiteInfo::default());
    }
    let site = use_site_info();

    view! {
        <Stylesheet id="site" href=format!("{}static/css/site.css", site.base_url)/>
        <Title text=format!("{} | {}", site.title, site.tagline)/>
        <Meta name="description" content=site.tagline.clone()/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
