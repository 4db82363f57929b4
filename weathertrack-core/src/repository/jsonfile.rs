//! Document store persisted as a single JSON file.
//!
//! Records live in memory behind an async lock; every mutation rewrites the
//! file, so a crash between requests never leaves a partial write visible.
//! Good for the handful of records this service manages; the repository
//! trait is the seam for anything heavier.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::Error;
use crate::model::{NewWeatherRecord, RecordId, WeatherRecord};
use crate::repository::RecordRepository;

#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    records: RwLock<Vec<WeatherRecord>>,
}

impl JsonFileRepository {
    /// Open the store at `path`, loading any previously persisted records.
    /// A missing file means an empty store, not an error.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let records = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                Error::Storage(format!("Failed to read record store {}: {e}", path.display()))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                Error::Storage(format!("Failed to parse record store {}: {e}", path.display()))
            })?
        } else {
            Vec::new()
        };

        Ok(Self { path: path.to_path_buf(), records: RwLock::new(records) })
    }

    async fn persist(&self, records: &[WeatherRecord]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::Storage(format!(
                    "Failed to create store directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| Error::Storage(format!("Failed to serialize records: {e}")))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            Error::Storage(format!("Failed to write record store {}: {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl RecordRepository for JsonFileRepository {
    // Mutations persist a candidate state first and only commit it to the
    // in-memory index on success, so reads never see a write the client
    // was told failed.
    async fn create(&self, body: NewWeatherRecord) -> Result<WeatherRecord, Error> {
        let record = WeatherRecord {
            id: RecordId::new(),
            location: body.location,
            date_range: body.date_range,
            temperatures: body.temperatures,
            created_at: Utc::now(),
        };

        let mut records = self.records.write().await;
        let mut candidate = records.clone();
        candidate.push(record.clone());
        self.persist(&candidate).await?;
        *records = candidate;

        Ok(record)
    }

    async fn get_all(&self) -> Result<Vec<WeatherRecord>, Error> {
        Ok(self.records.read().await.clone())
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<WeatherRecord>, Error> {
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn replace(
        &self,
        id: RecordId,
        body: NewWeatherRecord,
    ) -> Result<Option<WeatherRecord>, Error> {
        let mut records = self.records.write().await;
        let Some(pos) = records.iter().position(|r| r.id == id) else {
            return Ok(None);
        };

        let updated = records[pos].replaced_with(body);
        let mut candidate = records.clone();
        candidate[pos] = updated.clone();
        self.persist(&candidate).await?;
        *records = candidate;

        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<(), Error> {
        let mut records = self.records.write().await;
        if !records.iter().any(|r| r.id == id) {
            return Ok(());
        }

        let candidate: Vec<WeatherRecord> =
            records.iter().filter(|r| r.id != id).cloned().collect();
        self.persist(&candidate).await?;
        *records = candidate;

        Ok(())
    }
}
