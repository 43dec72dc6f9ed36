pub mod geocode;
pub mod widget;

pub use geocode::{GeocodeError, GeocodeResult, Geocoder, NominatimGeocoder};
pub use widget::{MapQuery, SearchError, SearchOutcome, SearchWidget, OTHER_DESTINATION};
