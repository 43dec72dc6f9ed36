// src/ui/home.rs - hero, search controls and club cards
use super::html::{escape, fill};
use super::widget::View;
use crate::catalog::{CITIES, GENRES, HOME_CLUBS};
use crate::i18n::{LanguageStorage, LanguageStore};
use crate::search::{SearchError, OTHER_DESTINATION};

const HOME_TEMPLATE: &str = include_str!("templates/home.html");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DestinationMode {
    /// Dropdown over the fixed city table.
    #[default]
    Preset,
    /// Text input resolved through the geocoder.
    FreeText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeView {
    pub mode: DestinationMode,
    pub notice: Option<SearchError>,
}

impl HomeView {
    pub fn new(mode: DestinationMode) -> Self {
        Self { mode, notice: None }
    }

    pub fn with_notice(mut self, notice: SearchError) -> Self {
        self.notice = Some(notice);
        self
    }

    fn render_genre_select<S: LanguageStorage>(store: &LanguageStore<S>) -> String {
        let options: String = GENRES
            .iter()
            .map(|genre| {
                format!(
                    r#"<option value="{name}">{glyph} {name}</option>"#,
                    name = genre.name,
                    glyph = genre.glyph
                )
            })
            .collect();

        format!(
            r#"<form action="/search" method="get" class="search-form"><select name="genre" class="search-select" data-autosubmit><option value="">{placeholder}</option>{options}</select><noscript><button type="submit" class="search-go">→</button></noscript></form>"#,
            placeholder = escape(&store.translate("chooseGenre")),
            options = options,
        )
    }

    fn render_destination<S: LanguageStorage>(&self, store: &LanguageStore<S>) -> String {
        match self.mode {
            DestinationMode::Preset => {
                let options: String = CITIES
                    .iter()
                    .map(|city| {
                        format!(
                            r#"<option value="{key}">{flag} {label}</option>"#,
                            key = city.key,
                            flag = city.flag,
                            label = escape(city.label)
                        )
                    })
                    .collect();

                format!(
                    r#"<form action="/search" method="get" class="search-form"><select name="destination" class="search-select" data-autosubmit><option value="">{placeholder}</option>{options}<option value="{other}">{other_label}</option></select><noscript><button type="submit" class="search-go">→</button></noscript></form>"#,
                    placeholder = escape(&store.translate("chooseDestination")),
                    options = options,
                    other = OTHER_DESTINATION,
                    other_label = escape(&store.translate("otherLocation")),
                )
            }
            DestinationMode::FreeText => format!(
                r#"<form action="/search" method="get" class="search-form free-text"><input type="text" name="city" class="search-input" placeholder="{placeholder}" autofocus autocomplete="off"><a class="back-button" href="/" title="{back}">←</a></form>"#,
                placeholder = escape(&store.translate("enterCity")),
                back = escape(&store.translate("back")),
            ),
        }
    }

    fn render_notice<S: LanguageStorage>(&self, store: &LanguageStore<S>) -> String {
        self.notice
            .map(|notice| {
                format!(
                    r#"<div class="notice" role="alert" data-alert>{}</div>"#,
                    escape(&store.translate(notice.message_key()))
                )
            })
            .unwrap_or_default()
    }

    fn render_club_cards<S: LanguageStorage>(store: &LanguageStore<S>) -> String {
        let listen = escape(&store.translate("listen"));
        HOME_CLUBS
            .iter()
            .enumerate()
            .map(|(index, club)| {
                format!(
                    r#"<div class="club-card"><div class="club-flag">{flag}</div><h3>{name}</h3><p class="club-city">{city}</p><div class="club-status">🔴 {status} - {genre}</div><br><button type="button" class="listen" data-tone="/audio/home/{index}.wav">{listen}</button></div>"#,
                    flag = club.flag,
                    name = escape(club.name),
                    city = escape(club.city),
                    status = club.status,
                    genre = escape(club.genre),
                    index = index,
                    listen = listen,
                )
            })
            .collect()
    }
}

impl View for HomeView {
    fn render<S: LanguageStorage>(&self, store: &LanguageStore<S>) -> String {
        fill(
            HOME_TEMPLATE,
            &[
                ("WELCOME", &escape(&store.translate("welcome"))),
                ("DESCRIPTION", &escape(&store.translate("description"))),
                ("GENRE_SELECT", &Self::render_genre_select(store)),
                ("DESTINATION", &self.render_destination(store)),
                ("LISTEN_LIVE", &escape(&store.translate("listenLive"))),
                ("AVAILABLE_CLUBS", &escape(&store.translate("availableClubs"))),
                ("CLUB_CARDS", &Self::render_club_cards(store)),
                ("NOTICE", &self.render_notice(store)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, MemoryStorage};
    use std::sync::Arc;

    fn store(code: &str) -> LanguageStore<MemoryStorage> {
        LanguageStore::load(
            Arc::new(Catalog::embedded().unwrap()),
            MemoryStorage::with_value(code),
            "fr",
        )
    }

    #[test]
    fn test_preset_mode_lists_cities_and_genres() {
        let html = HomeView::default().render(&store("en"));
        assert!(html.contains("Welcome to Club2Stream"));
        assert!(html.contains(r#"<option value="NewYork">🇺🇸 New York</option>"#));
        assert!(html.contains(r#"<option value="London">🇬🇧 Londres</option>"#));
        assert!(html.contains(r#"<option value="other">🔍 Other city...</option>"#));
        assert!(html.contains(r#"<option value="Electro">⚡ Electro</option>"#));
        assert!(!html.contains(r#"name="city""#));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_club_cards_bind_tones() {
        let html = HomeView::default().render(&store("fr"));
        for index in 0..HOME_CLUBS.len() {
            assert!(html.contains(&format!("/audio/home/{}.wav", index)));
        }
        assert!(html.contains("🔴 LIVE - Techno"));
        assert!(html.contains("🎧 Écouter"));
    }

    #[test]
    fn test_free_text_mode_with_notice() {
        let view = HomeView::new(DestinationMode::FreeText).with_notice(SearchError::NotFound);
        let html = view.render(&store("en"));
        assert!(html.contains(r#"name="city""#));
        assert!(html.contains("Type any city (e.g. Paris, Tokyo, Miami...)"));
        assert!(html.contains("Sorry, unable to locate this city. Try another one."));
        assert!(!html.contains(r#"name="destination""#));
    }

    #[test]
    fn test_description_is_escaped() {
        let html = HomeView::default().render(&store("fr"));
        assert!(html.contains("l&#39;ambiance des meilleurs clubs"));
    }
}
