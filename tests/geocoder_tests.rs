// tests/geocoder_tests.rs - NominatimGeocoder against a local stand-in
use actix_web::{web, App, HttpResponse, HttpServer};
use club2stream::core::config::GeocoderConfig;
use club2stream::search::{GeocodeError, Geocoder, NominatimGeocoder};
use std::collections::HashMap;

async fn fake_search(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    assert_eq!(query.get("format").map(String::as_str), Some("json"));
    assert_eq!(query.get("limit").map(String::as_str), Some("1"));

    match query.get("q").map(String::as_str) {
        Some("Lisbon") => HttpResponse::Ok().content_type("application/json").body(
            r#"[{"place_id":1,"display_name":"Lisbon, Portugal","lat":"38.7223","lon":"-9.1393"}]"#,
        ),
        Some("Broken") => HttpResponse::Ok().body("<html>not json</html>"),
        Some("Down") => HttpResponse::ServiceUnavailable().finish(),
        _ => HttpResponse::Ok().content_type("application/json").body("[]"),
    }
}

fn geocoder_for(endpoint: String) -> NominatimGeocoder {
    let config = GeocoderConfig {
        endpoint,
        ..GeocoderConfig::default()
    };
    NominatimGeocoder::new(&config).expect("http client")
}

#[actix_web::test]
async fn test_nominatim_round_trip() {
    let server = HttpServer::new(|| App::new().route("/search", web::get().to(fake_search)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    let geocoder = geocoder_for(format!("http://{}/search", addr));

    let places = geocoder.search("Lisbon").await.unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].short_name(), "Lisbon");
    assert_eq!((places[0].latitude, places[0].longitude), (38.7223, -9.1393));

    assert!(geocoder.search("Atlantis").await.unwrap().is_empty());
    assert!(matches!(
        geocoder.search("Broken").await,
        Err(GeocodeError::Decode(_))
    ));
    assert!(matches!(
        geocoder.search("Down").await,
        Err(GeocodeError::Request(_))
    ));
}

#[actix_web::test]
async fn test_unreachable_endpoint_is_request_error() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let geocoder = geocoder_for(format!("http://127.0.0.1:{}/search", port));
    assert!(matches!(
        geocoder.search("Lisbon").await,
        Err(GeocodeError::Request(_))
    ));
}
