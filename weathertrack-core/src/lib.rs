//! Core library for the weather records service.
//!
//! This crate defines:
//! - The domain model and failure taxonomy
//! - Schema validation for incoming record payloads
//! - The repository contract plus file-backed and in-memory stores
//! - External location confirmation against a weather provider
//! - Process configuration
//!
//! It is used by `weathertrack-api`, but can also be reused by other
//! binaries or services.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod repository;
pub mod validate;

pub use config::Config;
pub use error::Error;
pub use lookup::{LocationLookup, OpenWeatherLookup};
pub use model::{NewWeatherRecord, RecordId, RecordPayload, WeatherRecord};
pub use repository::{
    JsonFileRepository, MemoryRepository, RecordRepository, confirm_record_exists,
};
pub use validate::validate_record;
