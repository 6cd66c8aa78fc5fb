mod web;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use ramsha_docs::config::SiteConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let bind_addr = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();

    let state = web::AppState::new(config);
    for missing in state.gallery.missing_assets() {
        log::warn!("Feature graphic {missing:?} not found under {}", static_dir.display());
    }
    log::info!(
        "Serving {} feature cards at http://{bind_addr}",
        state.gallery.len()
    );

    let state = Data::new(state);
    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .app_data(state.clone())
            .wrap(web::middleware::security_headers())
            .wrap(Logger::default())
            .configure(move |cfg| web::routes::configure(cfg, &static_dir))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
