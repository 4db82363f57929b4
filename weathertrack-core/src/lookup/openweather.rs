use async_trait::async_trait;
use reqwest::Client;

use crate::error::Error;
use crate::lookup::LocationLookup;

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherLookup {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherLookup {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_URL.to_string())
    }

    /// Point the lookup at a different endpoint (mock servers in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl LocationLookup for OpenWeatherLookup {
    async fn lookup_current_weather(&self, lat: f64, lon: f64) -> Result<(), Error> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                Error::ExternalService(format!("Failed to send request to OpenWeather: {e}"))
            })?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = res.text().await.unwrap_or_default();
        tracing::warn!(
            %status,
            lat,
            lon,
            body = %truncate_body(&body),
            "OpenWeather did not confirm location"
        );

        Err(Error::LocationUnconfirmed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    // cut at a character boundary, never mid-codepoint
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
