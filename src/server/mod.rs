// =====================================================
// FILE: src/server/mod.rs - ACTIX-WEB SERVER MODULE
// =====================================================

pub mod handlers;
pub mod middleware;
pub mod session;
pub mod types;

pub use middleware::RequestLogger;
pub use session::CookieStorage;
pub use types::AppState;

use crate::core::prelude::*;
use crate::search::NominatimGeocoder;
use actix_cors::Cors;
use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use handlers::web::*;

/// Routes of the site and of the club API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Pages
        .route("/", web::get().to(home_page))
        .route("/map", web::get().to(map_page))
        .route("/search", web::get().to(search_handler))
        .route("/lang/{code}", web::get().to(change_language))
        // Audio
        .route("/audio/{view}/{index}.wav", web::get().to(tone_handler))
        // Assets
        .route("/static/style.css", web::get().to(serve_style_css))
        .route("/static/club2stream.js", web::get().to(serve_page_js))
        // API
        .route("/api", web::get().to(api_root_handler))
        .route("/api/clubs", web::get().to(clubs_handler))
        .route("/api/health", web::get().to(health_handler));
}

/// Builds the shared state from `config` and serves until shutdown.
pub async fn run_server(config: Config) -> Result<()> {
    let catalog = Arc::new(Catalog::embedded()?);
    let geocoder = NominatimGeocoder::new(&config.geocoder)
        .map_err(|e| AppError::Server(format!("Geocoder setup failed: {}", e)))?;
    log::info!("Geocoder endpoint: {}", geocoder.endpoint());

    let (host, port) = config.bind_address();
    let workers = config.server.workers;
    let shutdown_timeout = config.server.shutdown_timeout;
    let state = web::Data::new(AppState::new(config, catalog, Arc::new(geocoder)));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(RequestLogger)
            .wrap(actix_middleware::Compress::default())
            .configure(configure)
    })
    .workers(workers)
    .shutdown_timeout(shutdown_timeout)
    .bind((host.as_str(), port))
    .map_err(|e| AppError::Server(format!("HTTP bind failed on {}:{}: {}", host, port, e)))?;

    log::info!("Listening on http://{}:{}", host, port);
    server.run().await.map_err(AppError::Io)
}
