use actix_web::{HttpResponse, Responder, get, web};

use crate::web::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(features);
}

#[get("/api/features")]
pub async fn features(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.gallery.as_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};

    use ramsha_docs::config::SiteConfig;
    use ramsha_docs::models::FEATURES;

    use super::*;

    #[actix_web::test]
    async fn returns_cards_as_json() {
        let config = SiteConfig::from_lookup(|_| None).expect("config");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(config)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/features").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let cards = json["cards"].as_array().expect("cards array");
        assert_eq!(cards.len(), FEATURES.len());
        assert_eq!(cards[0]["heading"], "Clean Architecture First");
        assert_eq!(cards[0]["position"], 0);
        assert_eq!(cards[0]["body"]["segments"][0]["kind"], "text");
    }
}
