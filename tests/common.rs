#![allow(dead_code)]

use ramsha_docs::assets::AssetResolver;
use ramsha_docs::models::FeatureDescriptor;

pub fn resolver() -> AssetResolver {
    AssetResolver::new("/")
}

pub fn get_seed_clean_architecture() -> FeatureDescriptor {
    FeatureDescriptor::owned(
        Some("Clean Architecture First"),
        Some("img/feature-clean-architecture.svg"),
        "Keep *Domain* and *Infrastructure* apart.",
    )
}

pub fn get_seed_modules() -> FeatureDescriptor {
    FeatureDescriptor::owned(
        Some("Modular by Design"),
        Some("img/feature-modules.svg"),
        "Compose from `RamshaModule` classes.",
    )
}

pub fn get_seed_unit_of_work() -> FeatureDescriptor {
    FeatureDescriptor::owned(
        Some("EF Core Integration"),
        Some("img/feature-ef-core.svg"),
        "Repositories and a **unit of work**.",
    )
}

pub fn get_seed_untitled() -> FeatureDescriptor {
    FeatureDescriptor::owned(None, Some("img/feature-caching.svg"), "No title here.")
}

pub fn get_seed_without_graphic() -> FeatureDescriptor {
    FeatureDescriptor::owned(Some("Local Messaging"), None, "In-process *CQRS*.")
}

pub fn get_seed_list() -> Vec<FeatureDescriptor> {
    vec![
        get_seed_clean_architecture(),
        get_seed_modules(),
        get_seed_unit_of_work(),
    ]
}

pub fn headings(html: &str) -> Vec<String> {
    html.split("<h3>")
        .skip(1)
        .filter_map(|chunk| chunk.split_once("</h3>").map(|(h, _)| h.to_string()))
        .collect()
}

pub fn card_count(html: &str) -> usize {
    html.matches("data-feature-index=").count()
}
