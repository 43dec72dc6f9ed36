// src/ui/map.rs - placeholder map page
use super::html::{escape, fill};
use super::widget::View;
use crate::catalog::{clubs_in_city, MAP_CLUBS};
use crate::i18n::{LanguageStorage, LanguageStore};
use crate::search::MapQuery;

const MAP_TEMPLATE: &str = include_str!("templates/map.html");

/// No geographic rendering: a panel and the club tiles. `genre` is accepted
/// but does not filter anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapView {
    pub query: MapQuery,
}

impl MapView {
    pub fn new(query: MapQuery) -> Self {
        Self { query }
    }

    fn render_searched<S: LanguageStorage>(&self, store: &LanguageStore<S>) -> String {
        let Some(location) = &self.query.location else {
            return String::new();
        };

        let coordinates = match (self.query.lat, self.query.lng) {
            (Some(lat), Some(lng)) => format!(" <span class=\"coords\">({}, {})</span>", lat, lng),
            _ => String::new(),
        };
        let no_clubs = if clubs_in_city(location).is_empty() {
            format!(
                r#"<p class="no-clubs">{}</p>"#,
                escape(&store.translate("noClubsFound"))
            )
        } else {
            String::new()
        };

        format!(
            r#"<div class="searched-city"><strong>{label}:</strong> {location}{coordinates}{no_clubs}</div>"#,
            label = escape(&store.translate("searchedCity")),
            location = escape(location),
            coordinates = coordinates,
            no_clubs = no_clubs,
        )
    }

    fn render_tiles<S: LanguageStorage>(store: &LanguageStore<S>) -> String {
        let listen = escape(&store.translate("listen"));
        MAP_CLUBS
            .iter()
            .enumerate()
            .map(|(index, club)| {
                format!(
                    r#"<div class="map-tile"><h3>{name}</h3><p class="tile-genre">{genre}</p><button type="button" class="listen" data-tone="/audio/map/{index}.wav">{listen}</button></div>"#,
                    name = escape(club.name),
                    genre = escape(club.genre),
                    index = index,
                    listen = listen,
                )
            })
            .collect()
    }
}

impl View for MapView {
    fn render<S: LanguageStorage>(&self, store: &LanguageStore<S>) -> String {
        fill(
            MAP_TEMPLATE,
            &[
                ("MAP", &escape(&store.translate("map"))),
                ("WORLD_CLUBS", &escape(&store.translate("worldClubs"))),
                ("INTERACTIVE_MAP", &escape(&store.translate("interactiveMap"))),
                ("MAP_HINT", &escape(&store.translate("mapHint"))),
                ("TILES", &Self::render_tiles(store)),
                ("SEARCHED", &self.render_searched(store)),
            ],
        )
    }
}
