use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// One feature card on the landing page.
///
/// `title` and `graphic` are optional so a malformed entry still renders
/// whatever it does carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    pub title: Option<Cow<'static, str>>,
    pub graphic: Option<Cow<'static, str>>,
    pub description: Cow<'static, str>,
}

impl FeatureDescriptor {
    pub const fn new(title: &'static str, graphic: &'static str, description: &'static str) -> Self {
        Self {
            title: Some(Cow::Borrowed(title)),
            graphic: Some(Cow::Borrowed(graphic)),
            description: Cow::Borrowed(description),
        }
    }

    /// Builds a descriptor from owned parts, e.g. in tests or tooling.
    pub fn owned(title: Option<&str>, graphic: Option<&str>, description: &str) -> Self {
        Self {
            title: title.map(|t| Cow::Owned(t.to_owned())),
            graphic: graphic.map(|g| Cow::Owned(g.to_owned())),
            description: Cow::Owned(description.to_owned()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn graphic(&self) -> Option<&str> {
        self.graphic.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Feature cards shown on the Ramsha landing page, in display order.
pub static FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor::new(
        "Clean Architecture First",
        "img/feature-clean-architecture.svg",
        "Keep *Domain*, *Application* and *Infrastructure* apart from day one. \
         Business rules never reference persistence or transport code.",
    ),
    FeatureDescriptor::new(
        "Modular by Design",
        "img/feature-modules.svg",
        "Compose the application from `RamshaModule` classes with explicit \
         dependencies, configuration and lifecycle hooks.",
    ),
    FeatureDescriptor::new(
        "EF Core Integration",
        "img/feature-ef-core.svg",
        "Generic repositories, a **unit of work** and per-module `DbContext` \
         registration on top of Entity Framework Core.",
    ),
    FeatureDescriptor::new(
        "Caching & Settings",
        "img/feature-caching.svg",
        "Typed settings resolved per tenant, user or globally, backed by a \
         distributed cache that stays *out of your way*.",
    ),
    FeatureDescriptor::new(
        "Authorization & Permissions",
        "img/feature-authorization.svg",
        "Declare permissions in modules and check them anywhere with the \
         built-in **permission checker**.",
    ),
    FeatureDescriptor::new(
        "Local Messaging",
        "img/feature-messaging.svg",
        "Commands, queries and domain events dispatched in-process, giving \
         you *CQRS* without a message broker.",
    ),
];
