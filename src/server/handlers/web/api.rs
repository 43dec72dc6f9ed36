// ===== src/server/handlers/web/api.rs =====
use crate::catalog::CLUB_LISTINGS;
use crate::core::constants::{APP_TITLE, VERSION};
use actix_web::{HttpResponse, Result as ActixResult};
use serde_json::json;

pub async fn api_root_handler() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("🎵 {} API - Ready for streaming!", APP_TITLE),
        "status": "online"
    })))
}

pub async fn clubs_handler() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "clubs": CLUB_LISTINGS })))
}

pub async fn health_handler() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": APP_TITLE,
        "version": VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
