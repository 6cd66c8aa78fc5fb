use leptos::prelude::*;

use super::FeatureCard;
use crate::gallery::Gallery;

/// Row of feature cards, one per gallery entry.
#[component]
pub fn FeatureGallery(gallery: Gallery) -> impl IntoView {
    let cards = gallery
        .into_cards()
        .into_iter()
        .map(|card| view! { <FeatureCard card=card/> })
        .collect_view();

    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="row">{cards}</div>
            </div>
        </section>
    }
}
