// src/search/geocode.rs - free-text city lookup
use crate::core::config::GeocoderConfig;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodeResult {
    /// First comma-separated segment of the display name, e.g. `Lisbon` for
    /// `Lisbon, Portugal`.
    pub fn short_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
    }
}

#[derive(Debug)]
pub enum GeocodeError {
    Request(String),
    Decode(String),
    InvalidCoordinate(String),
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "Geocoding request failed: {}", msg),
            Self::Decode(msg) => write!(f, "Geocoding response unreadable: {}", msg),
            Self::InvalidCoordinate(value) => write!(f, "Invalid coordinate: {}", value),
        }
    }
}

impl std::error::Error for GeocodeError {}

#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Candidate places for `query`, best match first.
    async fn search(&self, query: &str) -> Result<Vec<GeocodeResult>, GeocodeError>;
}

/// Wire format of a Nominatim search hit; coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl TryFrom<NominatimPlace> for GeocodeResult {
    type Error = GeocodeError;

    fn try_from(place: NominatimPlace) -> Result<Self, Self::Error> {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| GeocodeError::InvalidCoordinate(raw.to_string()))
        };
        Ok(Self {
            latitude: parse(&place.lat)?,
            longitude: parse(&place.lon)?,
            display_name: place.display_name,
        })
    }
}

/// OpenStreetMap Nominatim search endpoint. One request per call, no retry
/// and no timeout.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    http: reqwest::Client,
    endpoint: String,
    limit: u32,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodeError::Request(format!("HTTP client failed: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            limit: config.result_limit,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
        let limit = self.limit.to_string();
        let places: Vec<NominatimPlace> = self
            .http
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| GeocodeError::Request(e.to_string()))?
            .json()
            .await
            .map_err(|e| GeocodeError::Decode(e.to_string()))?;

        log::debug!("Geocoder returned {} place(s) for '{}'", places.len(), query);
        usable_places(places)
    }
}

/// Drops hits with unreadable coordinates. Fails only when hits came back
/// and none of them is usable.
fn usable_places(places: Vec<NominatimPlace>) -> Result<Vec<GeocodeResult>, GeocodeError> {
    let mut results = Vec::with_capacity(places.len());
    let mut first_error = None;

    for place in places {
        match GeocodeResult::try_from(place) {
            Ok(result) => results.push(result),
            Err(e) => {
                log::debug!("Skipping geocoder hit: {}", e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) if results.is_empty() => Err(e),
        _ => Ok(results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(display_name: &str, lat: &str, lon: &str) -> NominatimPlace {
        NominatimPlace {
            display_name: display_name.into(),
            lat: lat.into(),
            lon: lon.into(),
        }
    }

    #[test]
    fn test_place_conversion() {
        let result = GeocodeResult::try_from(place("Lisbon, Portugal", "38.7223", "-9.1393")).unwrap();
        assert_eq!(result.latitude, 38.7223);
        assert_eq!(result.longitude, -9.1393);
        assert_eq!(result.short_name(), "Lisbon");
    }

    #[test]
    fn test_unparseable_coordinate() {
        let err = GeocodeResult::try_from(place("Nowhere", "north", "0")).unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidCoordinate(raw) if raw == "north"));
        assert!(GeocodeResult::try_from(place("Nowhere", "NaN", "0")).is_err());
    }

    #[test]
    fn test_bad_hit_does_not_hide_good_ones() {
        let results = usable_places(vec![
            place("Lisbon, Portugal", "38.7223", "-9.1393"),
            place("Lisboa, Somewhere", "", "-9.0"),
        ])
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].short_name(), "Lisbon");

        let results = usable_places(vec![
            place("Broken", "north", "0"),
            place("Porto, Portugal", "41.1579", "-8.6291"),
        ])
        .unwrap();
        assert_eq!(results[0].short_name(), "Porto");
    }

    #[test]
    fn test_only_bad_hits_is_an_error() {
        assert!(matches!(
            usable_places(vec![place("Broken", "north", "0")]),
            Err(GeocodeError::InvalidCoordinate(raw)) if raw == "north"
        ));
        assert!(usable_places(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_short_name_without_comma() {
        let result = GeocodeResult {
            display_name: "Tokyo".into(),
            latitude: 35.68,
            longitude: 139.76,
        };
        assert_eq!(result.short_name(), "Tokyo");
    }

    #[test]
    fn test_wire_format() {
        let raw = r#"[{"place_id": 1, "display_name": "Lisbon, Portugal", "lat": "38.7223", "lon": "-9.1393", "type": "city"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(raw).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lon, "-9.1393");
    }
}
