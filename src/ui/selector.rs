// src/ui/selector.rs - language dropdown of the header
use super::html::escape;
use super::widget::View;
use crate::i18n::{Language, LanguageStorage, LanguageStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSelector {
    open: bool,
}

impl LanguageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Picks an entry: the dropdown closes and the store persists the code.
    pub fn choose<S: LanguageStorage>(&mut self, language: Language, store: &mut LanguageStore<S>) {
        store.set(language.code());
        self.open = false;
    }
}

impl View for LanguageSelector {
    fn render<S: LanguageStorage>(&self, store: &LanguageStore<S>) -> String {
        let current_flag = Language::from_code(store.get())
            .map(Language::flag)
            .unwrap_or_default();

        let entries: String = Language::ALL
            .iter()
            .map(|lang| {
                format!(
                    r#"<a class="lang-option" href="/lang/{code}" hreflang="{code}"><span>{flag}</span><span>{name}</span></a>"#,
                    code = lang.code(),
                    flag = lang.flag(),
                    name = escape(lang.name()),
                )
            })
            .collect();

        format!(
            r#"<details class="lang-selector"{open}><summary aria-label="{label}"><span class="lang-flag">{flag}</span><span>▼</span></summary><div class="lang-menu">{entries}</div></details>"#,
            open = if self.open { " open" } else { "" },
            label = escape(&store.translate("language")),
            flag = current_flag,
            entries = entries,
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
    fn test_choose_closes_and_persists() {
        let mut store = store("fr");
        let mut selector = LanguageSelector::new();
        selector.toggle();
        assert!(selector.is_open());

        selector.choose(Language::En, &mut store);
        assert!(!selector.is_open());
        assert_eq!(store.get(), "en");
        assert_eq!(store.storage().read().as_deref(), Some("en"));
    }

    #[test]
    fn test_render_lists_all_languages() {
        let html = LanguageSelector::new().render(&store("it"));
        for lang in Language::ALL {
            assert!(html.contains(&format!("/lang/{}", lang.code())));
            assert!(html.contains(lang.name()));
        }
        assert!(html.contains(r#"<span class="lang-flag">🇮🇹</span>"#));
        assert!(!html.contains(" open>"));
    }

    #[test]
    fn test_render_open_state_and_unknown_language() {
        let mut selector = LanguageSelector::new();
        selector.toggle();
        let html = selector.render(&store("xx"));
        assert!(html.contains(r#"<details class="lang-selector" open>"#));
        assert!(html.contains(r#"<span class="lang-flag"></span>"#));
    }
}
