use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use askama::Template;

use ramsha_docs::log_err;

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_with_status(StatusCode::OK, t)
}

pub fn render_with_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log_err!(e, serde_json::json!({ "status": status.as_u16() }));
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}
