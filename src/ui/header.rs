use super::html::escape;
use super::selector::LanguageSelector;
use super::widget::View;
use crate::core::constants::APP_TITLE;
use crate::i18n::{LanguageStorage, LanguageStore};

pub struct Header {
    pub selector: LanguageSelector,
}

impl View for Header {
    fn render<S: LanguageStorage>(&self, store: &LanguageStore<S>) -> String {
        format!(
            r#"<header class="site-header"><div class="container header-row"><a class="brand" href="/"><span class="brand-logo">🎵</span><h1>{title}</h1></a><nav class="main-nav"><a href="/">{home}</a><a href="/map">{map}</a>{selector}</nav></div></header>"#,
            title = APP_TITLE,
            home = escape(&store.translate("home")),
            map = escape(&store.translate("map")),
            selector = self.selector.render(store),
        )
    }
}
