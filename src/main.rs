use anyhow::Result;
use std::net::SocketAddr;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use quiz_translate_backend::config::Config;
use quiz_translate_backend::routes;
use quiz_translate_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quiz_translate_backend=debug,tower_http=debug")),
        )
        .init();

    let config = load_config();

    let app_state = AppState::new(config.clone())?;

    if app_state.api_key().is_err() {
        // Not fatal: handlers report it per request.
        warn!(
            "{} is not set; quiz and translate requests will fail until it is",
            config.completion_config.api_key_env
        );
    }

    let app = routes::app(app_state);

    let host: std::net::IpAddr = config.system_config.host.parse()?;
    let addr = SocketAddr::from((host, config.system_config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Try `CONFIG_PATH`, then the default file names; fall back to built-in defaults
fn load_config() -> Config {
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in config_paths {
        match Config::load(&path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                return cfg;
            }
            Err(e) => {
                debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    info!("No configuration file found, using defaults");
    Config::default()
}
