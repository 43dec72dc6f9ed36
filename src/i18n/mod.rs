// src/i18n/mod.rs
pub mod error;
pub mod store;

pub use error::TranslationError;
pub use store::{LanguageStorage, LanguageStore, MemoryStorage};

use rust_embed::RustEmbed;
use std::collections::HashMap;

/// Language every lookup falls back to before giving up and returning the key.
pub const DEFAULT_LANGUAGE: &str = "fr";

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

/// Languages offered by the selector. Only `fr` and `en` ship a dictionary;
/// the others resolve everything through the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Fr,
    En,
    It,
    Es,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Fr, Language::En, Language::It, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::It => "it",
            Language::Es => "es",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
            Language::It => "Italiano",
            Language::Es => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Fr => "🇫🇷",
            Language::En => "🇬🇧",
            Language::It => "🇮🇹",
            Language::Es => "🇪🇸",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Flat `key -> text` dictionaries grouped by language code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dictionaries: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Loads every dictionary compiled into the binary.
    pub fn embedded() -> Result<Self, TranslationError> {
        let mut dictionaries = HashMap::new();

        for file in Langs::iter() {
            let filename = file.as_ref();
            let Some(code) = filename.strip_suffix(".json") else {
                continue;
            };
            let content = Langs::get(filename).ok_or_else(|| {
                TranslationError::LoadError(format!("File not found: {}", filename))
            })?;
            let entries = Self::parse_dictionary(content.data.as_ref())
                .map_err(|e| TranslationError::LoadError(format!("{}: {}", filename, e)))?;
            dictionaries.insert(code.to_lowercase(), entries);
        }

        Self::from_dictionaries(dictionaries)
    }

    pub fn from_dictionaries(
        dictionaries: HashMap<String, HashMap<String, String>>,
    ) -> Result<Self, TranslationError> {
        if !dictionaries.contains_key(DEFAULT_LANGUAGE) {
            return Err(TranslationError::MissingDictionary(DEFAULT_LANGUAGE.into()));
        }
        log::debug!(
            "Translation catalog loaded: {}",
            dictionaries
                .iter()
                .map(|(code, entries)| format!("{}={}", code, entries.len()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self { dictionaries })
    }

    fn parse_dictionary(raw: &[u8]) -> Result<HashMap<String, String>, String> {
        let content = std::str::from_utf8(raw).map_err(|e| e.to_string())?;
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Direct hit in one dictionary. Empty strings count as missing.
    pub fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.dictionaries
            .get(&lang.to_lowercase())
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Selected language, then the default language, then the key itself.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE, key))
            .unwrap_or(key)
            .to_string()
    }

    pub fn has_dictionary(&self, lang: &str) -> bool {
        self.dictionaries.contains_key(&lang.to_lowercase())
    }

    /// Keys of the default dictionary, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .dictionaries
            .get(DEFAULT_LANGUAGE)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}
