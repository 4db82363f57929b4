//! External location confirmation.
//!
//! Before a record is created, the submitted coordinates are checked against
//! a third-party weather provider; creation proceeds only when the provider
//! recognizes the location. The check never touches storage.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::Error;

pub mod openweather;

pub use openweather::OpenWeatherLookup;

#[async_trait]
pub trait LocationLookup: Send + Sync + Debug {
    /// Ask the external provider for current weather at the coordinates.
    ///
    /// # Errors
    ///
    /// `LocationUnconfirmed` when the provider responds without success,
    /// `ExternalService` when the call itself fails.
    async fn lookup_current_weather(&self, lat: f64, lon: f64) -> Result<(), Error>;
}
