// ===== src/server/handlers/web/lang.rs =====
use super::see_other;
use crate::i18n::Language;
use crate::server::types::AppState;
use crate::ui::LanguageSelector;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use reqwest::Url;

/// Selector entry: persists the language in the cookie and goes back to the page.
pub async fn change_language(
    req: HttpRequest,
    state: web::Data<AppState>,
    code: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let target = back_target(&req);

    let Some(language) = Language::from_code(&code) else {
        log::debug!("Ignoring unknown language '{}'", code.as_str());
        return Ok(see_other(&target, None));
    };

    let mut store = state.language_store(&req);
    LanguageSelector::new().choose(language, &mut store);
    Ok(see_other(&target, Some(&store)))
}

/// Path and query of the referring page, so redirects never leave the site.
fn back_target(req: &HttpRequest) -> String {
    req.headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| Url::parse(referer).ok())
        .map(|url| match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        })
        .filter(|path| is_local_path(path) && !path.starts_with("/lang/"))
        .unwrap_or_else(|| "/".to_string())
}

/// Rooted on this site: `//host` and `/\host` are read by browsers as another origin.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
