// Module definitions
pub mod audio;
pub mod catalog;
pub mod core;
pub mod i18n;
pub mod search;
pub mod server;
pub mod setup;
pub mod ui;

// Essential re-exports
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use i18n::{Catalog, Language, LanguageStore};
pub use server::{configure, run_server, AppState};

// Main entry point
pub async fn run() -> Result<()> {
    let config = Config::load().await?;
    run_server(config).await
}

pub async fn load_config() -> Result<Config> {
    Config::load().await
}
