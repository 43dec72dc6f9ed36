// ===== src/server/handlers/web/mod.rs =====
pub mod api;
pub mod assets;
pub mod audio;
pub mod lang;
pub mod pages;
pub mod search;

// Re-exports
pub use api::*;
pub use assets::*;
pub use audio::*;
pub use lang::*;
pub use pages::*;
pub use search::*;

use crate::server::session::CookieStorage;
use crate::i18n::LanguageStore;
use actix_web::http::header;
use actix_web::HttpResponse;

pub(crate) fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// In-app navigation: `303 See Other` to `target`, carrying a pending language cookie.
pub(crate) fn see_other(target: &str, store: Option<&LanguageStore<CookieStorage>>) -> HttpResponse {
    let mut response = HttpResponse::SeeOther();
    response.insert_header((header::LOCATION, target.to_string()));
    if let Some(cookie) = store.and_then(|store| store.storage().cookie()) {
        response.cookie(cookie);
    }
    response.finish()
}
