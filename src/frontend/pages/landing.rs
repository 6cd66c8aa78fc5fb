use leptos::prelude::*;

use crate::assets::AssetResolver;
use crate::frontend::components::{FeatureGallery, Footer, HomepageHeader, Nav};
use crate::frontend::use_site_info;
use crate::gallery::Gallery;

/// Landing page with the feature gallery.
///
/// Uses the `Gallery` provided through context when the server has rendered
/// one, so placeholders for missing graphics match the askama page. Without
/// it the gallery is built here, and no static root is available to check, so
/// every safe graphic id resolves.
#[component]
pub fn LandingPage() -> impl IntoView {
    let site = use_site_info();
    let gallery = use_context::<Gallery>()
        .unwrap_or_else(|| Gallery::homepage(&AssetResolver::new(site.base_url)));

    view! {
        <div class="landing">
            <Nav/>
            <HomepageHeader/>
            <FeatureGallery gallery=gallery/>
            <Footer/>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::prelude::*;

    use super::LandingPage;
    use crate::assets::AssetResolver;
    use crate::gallery::render_gallery;
    use crate::models::FEATURES;

    #[test]
    fn prefers_gallery_from_context() {
        let gallery = render_gallery(
            FEATURES,
            &AssetResolver::default().with_static_root("/nonexistent"),
        );
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(gallery);
            view! { <LandingPage/> }.to_html()
        });

        assert_eq!(html.matches("featureSvg--missing").count(), FEATURES.len());
    }

    #[test]
    fn builds_its_own_gallery_without_context() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <LandingPage/> }.to_html());

        assert_eq!(html.matches("data-feature-index=").count(), FEATURES.len());
        assert!(!html.contains("featureSvg--missing"));
    }
}
