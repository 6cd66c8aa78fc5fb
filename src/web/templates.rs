use askama::Template;

use ramsha_docs::config::SiteConfig;
use ramsha_docs::gallery::Gallery;

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate<'a> {
    pub site: &'a SiteConfig,
    pub gallery: &'a Gallery,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub site: &'a SiteConfig,
}
