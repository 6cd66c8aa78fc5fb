pub mod api;
pub mod public;

use actix_web::web;

/// Configure all routes except static files and the 404 fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    api::configure(cfg);
}
