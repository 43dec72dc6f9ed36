// src/main.rs
use club2stream::core::config::Config;
use club2stream::{run_server, Result};

#[actix_web::main]
async fn main() -> Result<()> {
    // Logger first, so warnings raised while loading the config are visible
    let from_env = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .format_timestamp_secs()
        .init();
    if !from_env {
        log::set_max_level(log::LevelFilter::Info);
    }

    let config = Config::load_with_messages(false).await?;
    if !from_env {
        log::set_max_level(config.log_level_filter());
    }

    if let Some(path) = config.config_path() {
        log::info!("Config loaded from {}", path);
    }
    config.log_startup();

    run_server(config).await
}
