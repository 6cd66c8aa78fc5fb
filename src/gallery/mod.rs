//! Feature gallery: one card per [`FeatureDescriptor`], in input order.
//!
//! Rendering never fails. A descriptor missing its title renders without a
//! heading, one missing its graphic renders without an illustration, and a
//! graphic that does not resolve renders as a placeholder.

mod html;

use serde::Serialize;

use crate::assets::{AssetRef, AssetResolver};
use crate::common::RenderError;
use crate::models::{FEATURES, FeatureDescriptor, RichText};

pub use html::GalleryFragment;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardGraphic {
    Image { src: String, alt: String },
    Placeholder { source: String, alt: String },
}

impl CardGraphic {
    pub fn alt(&self) -> &str {
        match self {
            Self::Image { alt, .. } | Self::Placeholder { alt, .. } => alt,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GalleryCard {
    position: usize,
    heading: Option<String>,
    graphic: Option<CardGraphic>,
    body: RichText,
    column_class: &'static str,
}

impl GalleryCard {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn graphic(&self) -> Option<&CardGraphic> {
        self.graphic.as_ref()
    }

    pub fn body(&self) -> &RichText {
        &self.body
    }

    pub fn column_class(&self) -> &'static str {
        self.column_class
    }

    // Flat accessors for the askama template.

    pub fn has_heading(&self) -> bool {
        self.heading.is_some()
    }

    pub fn heading_text(&self) -> &str {
        self.heading.as_deref().unwrap_or_default()
    }

    pub fn has_graphic(&self) -> bool {
        self.graphic.is_some()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.graphic, Some(CardGraphic::Placeholder { .. }))
    }

    pub fn graphic_src(&self) -> &str {
        match &self.graphic {
            Some(CardGraphic::Image { src, .. }) => src,
            _ => "",
        }
    }

    pub fn graphic_alt(&self) -> &str {
        self.graphic.as_ref().map(CardGraphic::alt).unwrap_or_default()
    }

    pub fn body_html(&self) -> String {
        self.body.to_html()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Gallery {
    cards: Vec<GalleryCard>,
}

impl Gallery {
    /// The landing-page gallery built from [`FEATURES`].
    pub fn homepage(assets: &AssetResolver) -> Self {
        render_gallery(FEATURES, assets)
    }

    pub fn cards(&self) -> &[GalleryCard] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<GalleryCard> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Graphic identifiers that rendered as placeholders.
    pub fn missing_assets(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().filter_map(|card| match &card.graphic {
            Some(CardGraphic::Placeholder { source, .. }) => Some(source.as_str()),
            _ => None,
        })
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        GalleryFragment { gallery: self }.render_html()
    }
}

pub fn render_gallery(descriptors: &[FeatureDescriptor], assets: &AssetResolver) -> Gallery {
    let column_class = column_class(descriptors.len());
    let cards = descriptors
        .iter()
        .enumerate()
        .map(|(position, descriptor)| render_card(position, descriptor, column_class, assets))
        .collect();

    Gallery { cards }
}

fn render_card(
    position: usize,
    descriptor: &FeatureDescriptor,
    column_class: &'static str,
    assets: &AssetResolver,
) -> GalleryCard {
    let alt = descriptor.title().unwrap_or_default().to_string();
    let graphic = descriptor.graphic().map(str::trim).map(|id| match assets.resolve(id) {
        AssetRef::Found(src) => CardGraphic::Image { src, alt: alt.clone() },
        AssetRef::Missing => CardGraphic::Placeholder {
            source: id.to_string(),
            alt: alt.clone(),
        },
    });

    GalleryCard {
        position,
        heading: descriptor.title().map(str::to_string),
        graphic,
        body: RichText::parse(descriptor.description()),
        column_class,
    }
}

/// Width on a 12-column grid; counts that do not split evenly wrap in rows of three.
pub fn column_class(count: usize) -> &'static str {
    match count {
        1 => "col col--12",
        2 => "col col--6",
        4 => "col col--3",
        _ => "col col--4",
    }
}
