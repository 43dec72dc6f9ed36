// src/core/config.rs
use crate::core::constants::{
    DEFAULT_PORT, DEFAULT_SAMPLE_RATE, GEOCODE_RESULT_LIMIT, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE,
    NOMINATIM_ENDPOINT,
};
use crate::core::prelude::*;
use crate::i18n::{Language, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::path::Path;

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    general: GeneralConfig,
    #[serde(default)]
    server: Option<ServerConfigToml>,
    #[serde(default)]
    language: Option<LanguageConfigToml>,
    #[serde(default)]
    geocoder: Option<GeocoderConfigToml>,
    #[serde(default)]
    audio: Option<AudioConfigToml>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct LanguageConfigToml {
    #[serde(default = "default_language")]
    default: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ServerConfigToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_workers")]
    workers: usize,
    #[serde(default = "default_shutdown_timeout")]
    shutdown_timeout: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct GeocoderConfigToml {
    #[serde(default = "default_geocoder_endpoint")]
    endpoint: String,
    #[serde(default = "default_user_agent")]
    user_agent: String,
    #[serde(default = "default_result_limit")]
    result_limit: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct AudioConfigToml {
    #[serde(default = "default_sample_rate")]
    sample_rate: u32,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}
fn default_language() -> String {
    DEFAULT_LANGUAGE.into()
}

// Server Defaults
fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_workers() -> usize {
    2
}
fn default_shutdown_timeout() -> u64 {
    5
}

// Geocoder Defaults
fn default_geocoder_endpoint() -> String {
    NOMINATIM_ENDPOINT.into()
}
fn default_user_agent() -> String {
    format!("club2stream/{}", crate::core::constants::VERSION)
}
fn default_result_limit() -> u32 {
    GEOCODE_RESULT_LIMIT
}

// Audio Defaults
fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub log_level: String,
    pub default_language: String,
    pub server: ServerConfig,
    pub geocoder: GeocoderConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub shutdown_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub result_limit: u32,
}

#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub sample_rate: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            workers: default_workers(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: NOMINATIM_ENDPOINT.into(),
            user_agent: default_user_agent(),
            result_limit: GEOCODE_RESULT_LIMIT,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self> {
        Self::load_with_messages(true).await
    }

    pub async fn load_with_messages(show_messages: bool) -> Result<Self> {
        // Try existing configs
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        let config = config.with_env_overrides();
                        if show_messages {
                            config.log_startup();
                        }
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        // Create new config
        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        let config = Self::from_file(&path).await?.with_env_overrides();

        if show_messages {
            log::info!("New config: {}", path.display());
            config.log_startup();
        }
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let server = file.server.map_or_else(ServerConfig::default, |s| ServerConfig {
            host: s.host,
            port: s.port,
            workers: Self::clamp(s.workers as u64, 1, 64, default_workers() as u64) as usize,
            shutdown_timeout: s.shutdown_timeout,
        });

        let geocoder = file
            .geocoder
            .map_or_else(GeocoderConfig::default, |g| GeocoderConfig {
                endpoint: g.endpoint,
                user_agent: g.user_agent,
                result_limit: Self::clamp(g.result_limit as u64, 1, 50, 1) as u32,
            });

        let audio = file.audio.map_or_else(AudioConfig::default, |a| AudioConfig {
            sample_rate: Self::clamp(
                a.sample_rate as u64,
                MIN_SAMPLE_RATE as u64,
                MAX_SAMPLE_RATE as u64,
                DEFAULT_SAMPLE_RATE as u64,
            ) as u32,
        });

        let requested_language = file
            .language
            .map(|l| l.default)
            .unwrap_or_else(default_language);
        let default_language = match Language::from_code(&requested_language) {
            Some(lang) => lang.code().to_string(),
            None => {
                log::warn!(
                    "Unknown default language '{}', using '{}'",
                    requested_language,
                    DEFAULT_LANGUAGE
                );
                DEFAULT_LANGUAGE.to_string()
            }
        };

        let config = Self {
            config_path: Some(path.as_ref().to_string_lossy().into_owned()),
            log_level: file.general.log_level,
            default_language,
            server,
            geocoder,
            audio,
        };

        // Auto-save corrected values
        if config.default_language != requested_language {
            if let Err(e) = config.save().await {
                log::warn!("Could not save corrected config: {}", e);
            }
        }

        Ok(config)
    }

    pub async fn save(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        // Edit the existing file in place so its comments survive
        let content = match tokio::fs::read_to_string(path).await {
            Ok(existing) => match existing.parse::<toml_edit::Document>() {
                Ok(mut doc) => {
                    self.apply_to(&mut doc);
                    doc.to_string()
                }
                Err(e) => {
                    log::warn!("Rewriting unparseable config {}: {}", path, e);
                    self.to_toml()?
                }
            },
            Err(_) => self.to_toml()?,
        };

        // Ensure dir exists
        if let Some(parent) = std::path::PathBuf::from(path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, content).await.map_err(AppError::Io)
    }

    fn apply_to(&self, doc: &mut toml_edit::Document) {
        use toml_edit::{table, value};

        for section in ["general", "server", "language", "geocoder", "audio"] {
            if doc.as_table().get(section).is_none() {
                doc[section] = table();
            }
        }
        doc["general"]["log_level"] = value(self.log_level.as_str());
        doc["server"]["host"] = value(self.server.host.as_str());
        doc["server"]["port"] = value(i64::from(self.server.port));
        doc["server"]["workers"] = value(self.server.workers as i64);
        doc["server"]["shutdown_timeout"] = value(self.server.shutdown_timeout as i64);
        doc["language"]["default"] = value(self.default_language.as_str());
        doc["geocoder"]["endpoint"] = value(self.geocoder.endpoint.as_str());
        doc["geocoder"]["user_agent"] = value(self.geocoder.user_agent.as_str());
        doc["geocoder"]["result_limit"] = value(i64::from(self.geocoder.result_limit));
        doc["audio"]["sample_rate"] = value(i64::from(self.audio.sample_rate));
    }

    fn to_toml(&self) -> Result<String> {
        let file = ConfigFile {
            general: GeneralConfig {
                log_level: self.log_level.clone(),
            },
            server: Some(ServerConfigToml {
                host: self.server.host.clone(),
                port: self.server.port,
                workers: self.server.workers,
                shutdown_timeout: self.server.shutdown_timeout,
            }),
            language: Some(LanguageConfigToml {
                default: self.default_language.clone(),
            }),
            geocoder: Some(GeocoderConfigToml {
                endpoint: self.geocoder.endpoint.clone(),
                user_agent: self.geocoder.user_agent.clone(),
                result_limit: self.geocoder.result_limit,
            }),
            audio: Some(AudioConfigToml {
                sample_rate: self.audio.sample_rate,
            }),
        };

        toml::to_string_pretty(&file).map_err(|e| AppError::Config(format!("TOML: {}", e)))
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// `PORT` wins over the file, as on the hosting platforms the service targets.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var("PORT") {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => log::warn!("Ignoring invalid PORT value '{}'", raw),
            }
        }
        self
    }

    /// `log_level` as a filter; unknown names fall back to `info`.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.trim().parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level '{}', using 'info'", self.log_level);
            log::LevelFilter::Info
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }

    // Helper methods
    fn clamp(value: u64, min: u64, max: u64, default: u64) -> u64 {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    pub fn log_startup(&self) {
        log::info!("Club2Stream v{}", crate::core::constants::VERSION);
        log::info!(
            "Server Config: {}:{}, Workers: {}, Language: {}",
            self.server.host,
            self.server.port,
            self.server.workers,
            self.default_language
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            default_language: DEFAULT_LANGUAGE.into(),
            server: ServerConfig::default(),
            geocoder: GeocoderConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}
