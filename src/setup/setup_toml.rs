// =====================================================
// FILE: src/setup/setup_toml.rs - DEFAULT CONFIG
// =====================================================

use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

pub const CONFIG_DIR: &str = ".c2s";
pub const CONFIG_FILE: &str = "club2stream.toml";

const DEFAULT_CONFIG: &str = r#"[general]
# error | warn | info | debug | trace (RUST_LOG overrides)
log_level = "info"

[server]
host = "0.0.0.0"
# The PORT environment variable overrides this value
port = 8000
workers = 2
shutdown_timeout = 5

[language]
# Language used when the visitor has not picked one yet: fr | en | it | es
default = "fr"

[geocoder]
endpoint = "https://nominatim.openstreetmap.org/search"
# Nominatim rejects requests without an identifying User-Agent
user_agent = "club2stream/0.1"
result_limit = 1

[audio]
# Sample rate of the generated club tones (8000 - 96000)
sample_rate = 44100
"#;

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    let base_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Validation("Cannot determine executable directory".into()))?;

    write_default_config(&base_dir.join(CONFIG_DIR)).await
}

/// Writes the commented default config into `config_dir` unless one exists.
pub async fn write_default_config(config_dir: &std::path::Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir).await?;
        log::debug!("Config directory created: {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG).await?;
        log::info!("Config file created: {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
            paths.push(base_dir.join("config").join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}
