// ===== src/server/handlers/web/assets.rs =====
use actix_web::{HttpResponse, Result as ActixResult};

pub async fn serve_style_css() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .body(include_str!("../templates/style.css")))
}

pub async fn serve_page_js() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .body(include_str!("../templates/club2stream.js")))
}
