use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use weathertrack_api::{AppState, error, routes};
use weathertrack_core::{Config, JsonFileRepository, OpenWeatherLookup};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if config.openweather_api_key.is_empty() {
        tracing::warn!(
            "OPENWEATHERMAP_API_KEY is not set; location confirmation will fail on create"
        );
    }

    let repo = JsonFileRepository::open(&config.storage_path)?;
    let state = web::Data::new(AppState {
        repo: Arc::new(repo),
        lookup: Arc::new(OpenWeatherLookup::new(config.openweather_api_key.clone())),
    });

    tracing::info!(
        port = config.port,
        store = %config.storage_path.display(),
        "starting weather records API"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(error::json_config())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await?;

    Ok(())
}
