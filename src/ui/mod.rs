pub mod header;
pub mod home;
pub mod html;
pub mod map;
pub mod selector;
pub mod widget;

pub use header::Header;
pub use home::{DestinationMode, HomeView};
pub use map::MapView;
pub use selector::LanguageSelector;
pub use widget::View;

use crate::core::constants::APP_TITLE;
use crate::i18n::{LanguageStorage, LanguageStore};

const LAYOUT_TEMPLATE: &str = include_str!("templates/layout.html");

/// Full document: shared header above the given view.
pub fn render_page<S: LanguageStorage, V: View>(
    store: &LanguageStore<S>,
    title_key: &str,
    view: &V,
) -> String {
    let header = Header {
        selector: LanguageSelector::new(),
    };
    let title = format!("{} - {}", store.translate(title_key), APP_TITLE);

    html::fill(
        LAYOUT_TEMPLATE,
        &[
            ("LANG", &html::escape(store.get())),
            ("TITLE", &html::escape(&title)),
            ("HEADER", &header.render(store)),
            ("CONTENT", &view.render(store)),
        ],
    )
}
