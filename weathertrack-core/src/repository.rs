//! Storage contract for weather records.
//!
//! The repository owns no business rules: it trusts its caller to have
//! validated the record body and only translates pipeline intents into
//! storage operations.

use async_trait::async_trait;

use crate::error::Error;
use crate::model::{NewWeatherRecord, RecordId, WeatherRecord};

pub mod jsonfile;
pub mod memory;

pub use jsonfile::JsonFileRepository;
pub use memory::MemoryRepository;

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persist a validated record body, assigning id and creation time.
    async fn create(&self, body: NewWeatherRecord) -> Result<WeatherRecord, Error>;

    /// All records, in insertion order.
    async fn get_all(&self) -> Result<Vec<WeatherRecord>, Error>;

    async fn get_by_id(&self, id: RecordId) -> Result<Option<WeatherRecord>, Error>;

    /// Full replacement of the record body; id and creation time are kept.
    /// `None` if no record matches the id.
    async fn replace(
        &self,
        id: RecordId,
        body: NewWeatherRecord,
    ) -> Result<Option<WeatherRecord>, Error>;

    /// Remove a record. Deleting an id that does not exist is not an error.
    async fn delete_by_id(&self, id: RecordId) -> Result<(), Error>;
}

/// Identifier guard: confirm the path string is a well-formed identifier
/// and that a record with it currently exists.
///
/// # Errors
///
/// `InvalidIdentifier` for a malformed string, `NotFound` when no record
/// matches, `Storage` if the existence check itself fails.
pub async fn confirm_record_exists(
    repo: &dyn RecordRepository,
    raw_id: &str,
) -> Result<RecordId, Error> {
    let id = RecordId::parse(raw_id)?;
    match repo.get_by_id(id).await? {
        Some(_) => Ok(id),
        None => Err(Error::NotFound),
    }
}
