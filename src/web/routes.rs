use actix_files::Files;
use actix_web::web;

use crate::web::handlers;

/// Application routes. Static files are served from `static_dir` under `/static`.
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &std::path::Path) {
    handlers::configure(cfg);
    cfg.service(Files::new("/static", static_dir).prefer_utf8(true));
    cfg.default_service(web::to(handlers::public::not_found));
}
