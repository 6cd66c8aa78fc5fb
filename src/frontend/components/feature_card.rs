use leptos::prelude::*;

use crate::gallery::{CardGraphic, GalleryCard};
use crate::models::Inline;

fn inline_view(inline: Inline) -> AnyView {
    match inline {
        Inline::Text(t) => t.into_any(),
        Inline::Emphasis(t) => view! { <em>{t}</em> }.into_any(),
        Inline::Strong(t) => view! { <strong>{t}</strong> }.into_any(),
        Inline::Code(t) => view! { <code>{t}</code> }.into_any(),
    }
}

#[component]
pub fn FeatureCard(card: GalleryCard) -> impl IntoView {
    let graphic = card.graphic().cloned().map(|graphic| {
        let inner = match graphic {
            CardGraphic::Image { src, alt } => {
                view! { <img class="featureSvg" src=src alt=alt role="img"/> }.into_any()
            }
            CardGraphic::Placeholder { alt, .. } => view! {
                <div class="featureSvg featureSvg--missing" role="img" aria-label=alt></div>
            }
            .into_any(),
        };
        view! { <div class="text--center">{inner}</div> }
    });

    let heading = card.heading().map(|h| view! { <h3>{h.to_string()}</h3> });
    let body = card
        .body()
        .segments()
        .iter()
        .cloned()
        .map(inline_view)
        .collect_view();

    view! {
        <div
            class=format!("{} feature-card", card.column_class())
            data-feature-index=card.position().to_string()
        >
            {graphic}
            <div class="text--center padding-horiz--md">
                {heading}
                <p>{body}</p>
            </div>
        </div>
    }
}
