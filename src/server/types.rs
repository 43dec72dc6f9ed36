// src/server/types.rs
use crate::core::config::Config;
use crate::i18n::{Catalog, LanguageStore};
use crate::search::Geocoder;
use crate::server::session::CookieStorage;
use actix_web::HttpRequest;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<Catalog>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            geocoder,
        }
    }

    /// Language store of the visitor behind `req`, seeded from their cookie.
    pub fn language_store(&self, req: &HttpRequest) -> LanguageStore<CookieStorage> {
        LanguageStore::load(
            Arc::clone(&self.catalog),
            CookieStorage::from_request(req),
            &self.config.default_language,
        )
    }
}
