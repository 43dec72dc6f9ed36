// src/catalog.rs - static venue and destination data
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityCoordinate {
    /// Value submitted by the destination dropdown, also used as `location`.
    pub key: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const CITIES: [CityCoordinate; 10] = [
    CityCoordinate { key: "Paris", label: "Paris", flag: "🇫🇷", latitude: 48.8566, longitude: 2.3522 },
    CityCoordinate { key: "Berlin", label: "Berlin", flag: "🇩🇪", latitude: 52.5200, longitude: 13.4050 },
    CityCoordinate { key: "Ibiza", label: "Ibiza", flag: "🇪🇸", latitude: 38.9067, longitude: 1.4206 },
    CityCoordinate { key: "London", label: "Londres", flag: "🇬🇧", latitude: 51.5074, longitude: -0.1278 },
    CityCoordinate { key: "Amsterdam", label: "Amsterdam", flag: "🇳🇱", latitude: 52.3676, longitude: 4.9041 },
    CityCoordinate { key: "Milan", label: "Milan", flag: "🇮🇹", latitude: 45.4642, longitude: 9.1900 },
    CityCoordinate { key: "NewYork", label: "New York", flag: "🇺🇸", latitude: 40.7128, longitude: -74.0060 },
    CityCoordinate { key: "Barcelona", label: "Barcelona", flag: "🇪🇸", latitude: 41.3851, longitude: 2.1734 },
    CityCoordinate { key: "Rome", label: "Rome", flag: "🇮🇹", latitude: 41.9028, longitude: 12.4964 },
    CityCoordinate { key: "Madrid", label: "Madrid", flag: "🇪🇸", latitude: 40.4168, longitude: -3.7038 },
];

pub fn find_city(key: &str) -> Option<&'static CityCoordinate> {
    CITIES.iter().find(|city| city.key == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub name: &'static str,
    pub glyph: &'static str,
}

pub const GENRES: [Genre; 7] = [
    Genre { name: "Techno", glyph: "🔊" },
    Genre { name: "House", glyph: "🏠" },
    Genre { name: "Trance", glyph: "💫" },
    Genre { name: "Pop", glyph: "⭐" },
    Genre { name: "Disco", glyph: "✨" },
    Genre { name: "Reggae", glyph: "🌴" },
    Genre { name: "Electro", glyph: "⚡" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubStatus {
    Live,
}

impl std::fmt::Display for ClubStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClubStatus::Live => write!(f, "LIVE"),
        }
    }
}

/// Card on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Club {
    pub name: &'static str,
    pub city: &'static str,
    pub genre: &'static str,
    pub flag: &'static str,
    pub status: ClubStatus,
}

pub const HOME_CLUBS: [Club; 4] = [
    Club { name: "Berghain", city: "Berlin", genre: "Techno", flag: "🇩🇪", status: ClubStatus::Live },
    Club { name: "Pacha", city: "Ibiza", genre: "House", flag: "🇪🇸", status: ClubStatus::Live },
    Club { name: "Studio 54", city: "New York", genre: "Disco", flag: "🇺🇸", status: ClubStatus::Live },
    Club { name: "Bob Marley Club", city: "Kingston", genre: "Reggae", flag: "🇯🇲", status: ClubStatus::Live },
];

/// Tile on the map page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapClub {
    pub name: &'static str,
    pub genre: &'static str,
}

pub const MAP_CLUBS: [MapClub; 4] = [
    MapClub { name: "🇩🇪 Berghain", genre: "Techno" },
    MapClub { name: "🇪🇸 Pacha", genre: "House" },
    MapClub { name: "🇺🇸 Studio 54", genre: "Disco" },
    MapClub { name: "🇯🇲 Bob Marley", genre: "Reggae" },
];

/// Entry of the public club listing served by `/api/clubs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClubListing {
    pub id: u32,
    pub name: &'static str,
    pub city: &'static str,
    pub genre: &'static str,
    pub status: ClubStatus,
    pub listeners: u32,
}

pub const CLUB_LISTINGS: [ClubListing; 4] = [
    ClubListing { id: 1, name: "Berghain", city: "Berlin", genre: "Techno", status: ClubStatus::Live, listeners: 234 },
    ClubListing { id: 2, name: "Pacha", city: "Ibiza", genre: "House", status: ClubStatus::Live, listeners: 312 },
    ClubListing { id: 3, name: "Studio 54", city: "New York", genre: "Disco", status: ClubStatus::Live, listeners: 278 },
    ClubListing { id: 4, name: "Bob Marley Club", city: "Kingston", genre: "Reggae", status: ClubStatus::Live, listeners: 167 },
];

/// Listed clubs located in `city`, compared case-insensitively and ignoring spaces
/// so that both `NewYork` and `New York` match.
pub fn clubs_in_city(city: &str) -> Vec<&'static ClubListing> {
    let wanted = normalize_city(city);
    CLUB_LISTINGS
        .iter()
        .filter(|club| normalize_city(club.city) == wanted)
        .collect()
}

fn normalize_city(city: &str) -> String {
    city.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_table() {
        assert_eq!(CITIES.len(), 10);
        let ibiza = find_city("Ibiza").unwrap();
        assert_eq!((ibiza.latitude, ibiza.longitude), (38.9067, 1.4206));
        assert_eq!(find_city("NewYork").unwrap().label, "New York");
        assert!(find_city("Lisbon").is_none());
        assert!(find_city("ibiza").is_none());
    }

    #[test]
    fn test_clubs_in_city() {
        assert_eq!(clubs_in_city("Berlin").len(), 1);
        assert_eq!(clubs_in_city("NewYork")[0].name, "Studio 54");
        assert!(clubs_in_city("Lisbon").is_empty());
    }

    #[test]
    fn test_listing_serializes_lowercase_status() {
        let json = serde_json::to_value(CLUB_LISTINGS[1]).unwrap();
        assert_eq!(json["status"], "live");
        assert_eq!(json["listeners"], 312);
    }
}
