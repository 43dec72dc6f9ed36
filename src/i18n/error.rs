// src/i18n/error.rs

#[derive(Debug)]
pub enum TranslationError {
    MissingDictionary(String),
    LoadError(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDictionary(lang) => write!(f, "No dictionary for language: {}", lang),
            Self::LoadError(msg) => write!(f, "Load error: {}", msg),
        }
    }
}

impl std::error::Error for TranslationError {}
