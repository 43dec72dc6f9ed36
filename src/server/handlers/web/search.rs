// ===== src/server/handlers/web/search.rs =====
use super::{html_response, see_other};
use crate::search::{SearchOutcome, SearchWidget, OTHER_DESTINATION};
use crate::server::types::AppState;
use crate::ui::{render_page, DestinationMode, HomeView};
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub genre: Option<String>,
    pub destination: Option<String>,
    /// Free-text city, submitted with the enter key.
    pub city: Option<String>,
}

/// Entry point of both home page selectors and the free-text city input.
pub async fn search_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> ActixResult<HttpResponse> {
    let widget = SearchWidget::new(state.geocoder.as_ref());
    let free_text_path = format!("/?destination={}", OTHER_DESTINATION);

    let outcome = if let Some(city) = params.city.as_deref() {
        widget.submit_city(city).await
    } else if let Some(destination) = params.destination.as_deref() {
        widget.select_destination(destination)
    } else if let Some(genre) = params.genre.as_deref() {
        widget.select_genre(genre)
    } else {
        SearchOutcome::Unchanged
    };

    let response = match outcome {
        SearchOutcome::Navigate(query) => see_other(&query.to_path(), None),
        SearchOutcome::ShowFreeText => see_other(&free_text_path, None),
        SearchOutcome::Notice(error) => {
            let store = state.language_store(&req);
            let view = HomeView::new(DestinationMode::FreeText).with_notice(error);
            html_response(render_page(&store, "home", &view))
        }
        SearchOutcome::Unchanged if params.city.is_some() => see_other(&free_text_path, None),
        SearchOutcome::Unchanged => see_other("/", None),
    };
    Ok(response)
}
