// ===== src/server/handlers/web/pages.rs =====
use super::html_response;
use crate::search::{MapQuery, OTHER_DESTINATION};
use crate::server::types::AppState;
use crate::ui::{render_page, DestinationMode, HomeView, MapView};
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct HomeParams {
    destination: Option<String>,
}

pub async fn home_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    params: web::Query<HomeParams>,
) -> ActixResult<HttpResponse> {
    let mode = match params.destination.as_deref() {
        Some(OTHER_DESTINATION) => DestinationMode::FreeText,
        _ => DestinationMode::Preset,
    };
    let store = state.language_store(&req);
    Ok(html_response(render_page(&store, "home", &HomeView::new(mode))))
}

pub async fn map_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    params: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    let view = MapView::new(MapQuery::from_params(&params));
    let store = state.language_store(&req);
    Ok(html_response(render_page(&store, "map", &view)))
}
