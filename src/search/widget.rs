// src/search/widget.rs - genre and destination selectors of the home page
use super::geocode::Geocoder;
use crate::catalog::find_city;
use reqwest::Url;
use std::collections::HashMap;

/// Destination dropdown value that switches to free-text entry.
pub const OTHER_DESTINATION: &str = "other";

const MAP_PATH: &str = "/map";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The geocoder answered with zero places.
    NotFound,
    /// The call failed or its answer could not be read.
    ConnectionError,
}

impl SearchError {
    pub fn message_key(self) -> &'static str {
        match self {
            SearchError::NotFound => "cityNotFound",
            SearchError::ConnectionError => "connectionError",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "cityNotFound" => Some(SearchError::NotFound),
            "connectionError" => Some(SearchError::ConnectionError),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::NotFound => write!(f, "city not found"),
            SearchError::ConnectionError => write!(f, "connection error"),
        }
    }
}

/// Query parameters attached to the map route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapQuery {
    pub genre: Option<String>,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl MapQuery {
    pub fn for_genre(genre: &str) -> Self {
        Self {
            genre: Some(genre.to_string()),
            ..Self::default()
        }
    }

    pub fn for_place(location: &str, lat: f64, lng: f64) -> Self {
        Self {
            location: Some(location.to_string()),
            lat: Some(lat),
            lng: Some(lng),
            ..Self::default()
        }
    }

    /// Lenient parse of incoming parameters: unreadable coordinates are dropped.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = |name: &str| {
            params
                .get(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let number = |name: &str| {
            params
                .get(name)
                .and_then(|value| value.trim().parse::<f64>().ok())
                .filter(|value| value.is_finite())
        };
        Self {
            genre: text("genre"),
            location: text("location"),
            lat: number("lat"),
            lng: number("lng"),
        }
    }

    /// Path plus query string, e.g. `/map?location=Ibiza&lat=38.9067&lng=1.4206`.
    pub fn to_path(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(genre) = &self.genre {
            pairs.push(("genre", genre.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(lat) = self.lat {
            pairs.push(("lat", lat.to_string()));
        }
        if let Some(lng) = self.lng {
            pairs.push(("lng", lng.to_string()));
        }
        if pairs.is_empty() {
            return MAP_PATH.to_string();
        }

        match Url::parse_with_params(&format!("http://localhost{}", MAP_PATH), &pairs) {
            Ok(url) => format!("{}?{}", url.path(), url.query().unwrap_or_default()),
            Err(e) => {
                log::error!("Could not build map path: {}", e);
                MAP_PATH.to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Go to the map route with these parameters.
    Navigate(MapQuery),
    /// Swap the destination dropdown for the free-text input.
    ShowFreeText,
    /// Tell the user something went wrong; nothing else happens.
    Notice(SearchError),
    /// Nothing to do (empty or unknown selection).
    Unchanged,
}

/// Search controls of the home page. Holds the geocoder used by free-text entry.
pub struct SearchWidget<'a> {
    geocoder: &'a dyn Geocoder,
}

impl<'a> SearchWidget<'a> {
    pub fn new(geocoder: &'a dyn Geocoder) -> Self {
        Self { geocoder }
    }

    pub fn select_genre(&self, value: &str) -> SearchOutcome {
        let value = value.trim();
        if value.is_empty() {
            return SearchOutcome::Unchanged;
        }
        SearchOutcome::Navigate(MapQuery::for_genre(value))
    }

    pub fn select_destination(&self, value: &str) -> SearchOutcome {
        let value = value.trim();
        if value == OTHER_DESTINATION {
            return SearchOutcome::ShowFreeText;
        }
        match find_city(value) {
            Some(city) => SearchOutcome::Navigate(MapQuery::for_place(
                city.key,
                city.latitude,
                city.longitude,
            )),
            None => SearchOutcome::Unchanged,
        }
    }

    /// Resolves a typed city through one geocoding request.
    pub async fn submit_city(&self, input: &str) -> SearchOutcome {
        let city = input.trim();
        if city.is_empty() {
            return SearchOutcome::Unchanged;
        }

        log::info!("Geocoding free-text city '{}'", city);
        match self.geocoder.search(city).await {
            Ok(results) => match results.first() {
                Some(place) => SearchOutcome::Navigate(MapQuery::for_place(
                    place.short_name(),
                    place.latitude,
                    place.longitude,
                )),
                None => {
                    log::info!("No place found for '{}'", city);
                    SearchOutcome::Notice(SearchError::NotFound)
                }
            },
            Err(e) => {
                log::warn!("Geocoding '{}' failed: {}", city, e);
                SearchOutcome::Notice(SearchError::ConnectionError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CITIES;
    use crate::search::geocode::{GeocodeError, GeocodeResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Reply {
        Places(Vec<GeocodeResult>),
        Fail,
    }

    struct StubGeocoder {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl StubGeocoder {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Geocoder for StubGeocoder {
        async fn search(&self, _query: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Reply::Places(places) => Ok(places.clone()),
                Reply::Fail => Err(GeocodeError::Request("connection refused".into())),
            }
        }
    }

    fn lisbon() -> GeocodeResult {
        GeocodeResult {
            display_name: "Lisbon, Portugal".into(),
            latitude: 38.7223,
            longitude: -9.1393,
        }
    }

    #[test]
    fn test_genre_selection() {
        let geocoder = StubGeocoder::new(Reply::Fail);
        let widget = SearchWidget::new(&geocoder);

        assert_eq!(widget.select_genre(""), SearchOutcome::Unchanged);
        match widget.select_genre("Trance") {
            SearchOutcome::Navigate(query) => assert_eq!(query.to_path(), "/map?genre=Trance"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_every_city_navigates_with_table_coordinates() {
        let geocoder = StubGeocoder::new(Reply::Fail);
        let widget = SearchWidget::new(&geocoder);

        for city in CITIES {
            match widget.select_destination(city.key) {
                SearchOutcome::Navigate(query) => {
                    assert_eq!(query.location.as_deref(), Some(city.key));
                    assert_eq!(query.lat, Some(city.latitude));
                    assert_eq!(query.lng, Some(city.longitude));
                }
                other => panic!("{}: unexpected outcome {:?}", city.key, other),
            }
        }
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_ibiza_path() {
        let geocoder = StubGeocoder::new(Reply::Fail);
        let widget = SearchWidget::new(&geocoder);
        let SearchOutcome::Navigate(query) = widget.select_destination("Ibiza") else {
            panic!("Ibiza should navigate");
        };
        assert_eq!(query.to_path(), "/map?location=Ibiza&lat=38.9067&lng=1.4206");
    }

    #[test]
    fn test_other_and_unknown_destinations() {
        let geocoder = StubGeocoder::new(Reply::Fail);
        let widget = SearchWidget::new(&geocoder);
        assert_eq!(widget.select_destination("other"), SearchOutcome::ShowFreeText);
        assert_eq!(widget.select_destination(""), SearchOutcome::Unchanged);
        assert_eq!(widget.select_destination("Atlantis"), SearchOutcome::Unchanged);
    }

    #[tokio::test]
    async fn test_free_text_success() {
        let geocoder = StubGeocoder::new(Reply::Places(vec![lisbon()]));
        let widget = SearchWidget::new(&geocoder);

        let SearchOutcome::Navigate(query) = widget.submit_city("  Lisbon ").await else {
            panic!("Lisbon should navigate");
        };
        assert_eq!(query, MapQuery::for_place("Lisbon", 38.7223, -9.1393));
        assert_eq!(query.to_path(), "/map?location=Lisbon&lat=38.7223&lng=-9.1393");
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_free_text_not_found() {
        let geocoder = StubGeocoder::new(Reply::Places(Vec::new()));
        let widget = SearchWidget::new(&geocoder);
        assert_eq!(
            widget.submit_city("Atlantis").await,
            SearchOutcome::Notice(SearchError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_free_text_connection_error() {
        let geocoder = StubGeocoder::new(Reply::Fail);
        let widget = SearchWidget::new(&geocoder);
        assert_eq!(
            widget.submit_city("Lisbon").await,
            SearchOutcome::Notice(SearchError::ConnectionError)
        );
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_free_text_makes_no_request() {
        let geocoder = StubGeocoder::new(Reply::Places(vec![lisbon()]));
        let widget = SearchWidget::new(&geocoder);
        assert_eq!(widget.submit_city("   ").await, SearchOutcome::Unchanged);
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_location_is_form_encoded() {
        let query = MapQuery::for_place("São Paulo", -23.55, -46.63);
        assert_eq!(
            query.to_path(),
            "/map?location=S%C3%A3o+Paulo&lat=-23.55&lng=-46.63"
        );
    }

    #[test]
    fn test_map_query_from_params() {
        let params = HashMap::from([
            ("location".to_string(), "Lisbon".to_string()),
            ("lat".to_string(), "38.7223".to_string()),
            ("lng".to_string(), "oops".to_string()),
            ("genre".to_string(), " ".to_string()),
        ]);
        let query = MapQuery::from_params(&params);
        assert_eq!(query.location.as_deref(), Some("Lisbon"));
        assert_eq!(query.lat, Some(38.7223));
        assert_eq!(query.lng, None);
        assert_eq!(query.genre, None);
    }

    #[test]
    fn test_error_keys_round_trip() {
        for error in [SearchError::NotFound, SearchError::ConnectionError] {
            assert_eq!(SearchError::from_key(error.message_key()), Some(error));
        }
        assert_eq!(SearchError::from_key("hello"), None);
    }
}
