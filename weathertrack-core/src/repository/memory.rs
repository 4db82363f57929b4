//! Volatile in-memory repository, used by tests and ephemeral runs.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::Error;
use crate::model::{NewWeatherRecord, RecordId, WeatherRecord};
use crate::repository::RecordRepository;

#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: RwLock<Vec<WeatherRecord>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for MemoryRepository {
    async fn create(&self, body: NewWeatherRecord) -> Result<WeatherRecord, Error> {
        let record = WeatherRecord {
            id: RecordId::new(),
            location: body.location,
            date_range: body.date_range,
            temperatures: body.temperatures,
            created_at: Utc::now(),
        };

        self.records.write().await.push(record.clone());
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
        match records.iter_mut().find(|r| r.id == id) {
            Some(existing) => {
                *existing = existing.replaced_with(body);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<(), Error> {
        self.records.write().await.retain(|r| r.id != id);
        Ok(())
    }
}
