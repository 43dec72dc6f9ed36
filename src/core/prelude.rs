// Core essentials
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

pub use std::sync::Arc;
pub use std::time::{Duration, Instant};

pub use crate::i18n::{Catalog, LanguageStore, TranslationError};
