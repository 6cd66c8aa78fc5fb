use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};

use ramsha_docs::log_err;

use crate::web::helpers::{render, render_with_status};
use crate::web::state::AppState;
use crate::web::templates::{LandingTemplate, NotFoundTemplate};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing).service(features_fragment);
}

#[get("/")]
pub async fn landing(state: web::Data<AppState>) -> impl Responder {
    render(LandingTemplate {
        site: &state.config,
        gallery: &state.gallery,
    })
}

/// Gallery section alone, for embedding in other pages.
#[get("/features")]
pub async fn features_fragment(state: web::Data<AppState>) -> impl Responder {
    match state.gallery.to_html() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log_err!(e, serde_json::json!({ "cards": state.gallery.len() }));
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(e.to_string())
        }
    }
}

pub async fn not_found(state: web::Data<AppState>) -> HttpResponse {
    render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate { site: &state.config })
}
