use crate::i18n::{LanguageStorage, LanguageStore};

/// Piece of a page that renders itself as HTML in the store's language.
pub trait View {
    fn render<S: LanguageStorage>(&self, store: &LanguageStore<S>) -> String;
}
