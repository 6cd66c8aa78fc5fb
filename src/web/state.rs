use std::sync::Arc;

use ramsha_docs::config::SiteConfig;
use ramsha_docs::gallery::Gallery;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub gallery: Arc<Gallery>,
}

impl AppState {
    /// Renders the homepage gallery once; handlers share it read-only.
    pub fn new(config: SiteConfig) -> Self {
        let gallery = Gallery::homepage(&config.asset_resolver());
        Self {
            config: Arc::new(config),
            gallery: Arc::new(gallery),
        }
    }
}
