// src/server/session.rs - language cookie
use crate::core::constants::LANGUAGE_STORAGE_KEY;
use crate::i18n::LanguageStorage;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::HttpRequest;

/// The visitor's browser cookie seen as language storage. Writes are kept
/// pending until the handler attaches [`CookieStorage::cookie`] to its response.
#[derive(Debug, Clone, Default)]
pub struct CookieStorage {
    persisted: Option<String>,
    pending: Option<String>,
}

impl CookieStorage {
    pub fn from_request(req: &HttpRequest) -> Self {
        Self {
            persisted: req
                .cookie(LANGUAGE_STORAGE_KEY)
                .map(|cookie| cookie.value().to_string()),
            pending: None,
        }
    }

    /// `Set-Cookie` for the last written value, if any.
    pub fn cookie(&self) -> Option<Cookie<'static>> {
        self.pending.as_ref().map(|code| {
            Cookie::build(LANGUAGE_STORAGE_KEY, code.clone())
                .path("/")
                .max_age(CookieDuration::days(365))
                .same_site(SameSite::Lax)
                .http_only(true)
                .finish()
        })
    }
}

impl LanguageStorage for CookieStorage {
    fn read(&self) -> Option<String> {
        self.pending.clone().or_else(|| self.persisted.clone())
    }

    fn write(&mut self, code: &str) {
        self.pending = Some(code.to_string());
    }
}
