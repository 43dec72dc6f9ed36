// ===== src/server/handlers/web/audio.rs =====
use crate::audio::{encode_wav, home_tone, map_tone};
use crate::server::types::AppState;
use actix_web::{web, HttpResponse, Result as ActixResult};

/// `/audio/{view}/{index}.wav`: the tone bound to a home card or a map tile.
pub async fn tone_handler(
    state: web::Data<AppState>,
    path: web::Path<(String, usize)>,
) -> ActixResult<HttpResponse> {
    let (view, index) = path.into_inner();
    let tone = match view.as_str() {
        "home" => home_tone(index),
        "map" => map_tone(index, &mut rand::thread_rng()),
        _ => None,
    };

    let Some(tone) = tone else {
        return Ok(HttpResponse::NotFound().body("Tone not found"));
    };

    log::debug!(
        "Rendering {:?} tone at {:.1} Hz for {}/{}",
        tone.waveform,
        tone.frequency_hz,
        view,
        index
    );
    let sample_rate = state.config.audio.sample_rate;
    let wav = encode_wav(&tone.render(sample_rate), sample_rate);

    Ok(HttpResponse::Ok()
        .content_type("audio/wav")
        .insert_header(("Cache-Control", "no-store"))
        .body(wav))
}
