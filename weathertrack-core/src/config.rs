use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;

/// Process configuration, built once at startup and passed explicitly to
/// the components that need it. No ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`, default 5000).
    pub port: u16,

    /// Path of the record store (`DATABASE_PATH`, default under the
    /// platform data directory).
    pub storage_path: PathBuf,

    /// OpenWeather API key (`OPENWEATHERMAP_API_KEY`). May be empty, in
    /// which case location confirmation fails at request time.
    pub openweather_api_key: String,
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source. Keeps
    /// tests hermetic: they pass a map instead of mutating the process
    /// environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let storage_path = match get("DATABASE_PATH") {
            Some(raw) => PathBuf::from(raw),
            None => default_storage_path()?,
        };

        let openweather_api_key = get("OPENWEATHERMAP_API_KEY").unwrap_or_default();

        Ok(Self { port, storage_path, openweather_api_key })
    }
}

/// Default location of the record store file.
fn default_storage_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "weathertrack", "weathertrack")
        .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

    Ok(dirs.data_dir().join("records.json"))
}
