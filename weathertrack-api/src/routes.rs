//! Request handlers for the weather record pipelines.
//!
//! Each handler is a short linear pipeline with early exit on the first
//! failure; no partial state is ever visible to the client.

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use weathertrack_core::{
    Error, LocationLookup, RecordId, RecordPayload, RecordRepository, confirm_record_exists,
    validate_record,
};

use crate::error::ApiError;

/// Shared dependencies, injected once at startup.
pub struct AppState {
    pub repo: Arc<dyn RecordRepository>,
    pub lookup: Arc<dyn LocationLookup>,
}

#[derive(Debug, Serialize)]
struct DeletedResponse {
    message: &'static str,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_record)
        .service(list_records)
        .service(get_record)
        .service(update_record)
        .service(delete_record);
}

/// Create: schema validation, then external location confirmation, then
/// persistence. Any failure aborts before anything is written.
#[post("/api/weather")]
async fn create_record(
    state: web::Data<AppState>,
    payload: web::Json<RecordPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = validate_record(&payload, Utc::now())?;

    let coords = &body.location.coordinates;
    state.lookup.lookup_current_weather(coords.lat, coords.lon).await?;

    let record = state.repo.create(body).await?;
    tracing::info!(id = %record.id, location = %record.location.name, "created weather record");

    Ok(HttpResponse::Created().json(record))
}

#[get("/api/weather")]
async fn list_records(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let records = state.repo.get_all().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[get("/api/weather/{id}")]
async fn get_record(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();

    let id = confirm_record_exists(state.repo.as_ref(), &raw_id).await?;
    let record = state.repo.get_by_id(id).await?.ok_or(Error::NotFound)?;

    Ok(HttpResponse::Ok().json(record))
}

/// Update: full replacement with the same schema rules as create. The
/// location is deliberately not re-confirmed externally; only creation
/// gates on the provider.
#[put("/api/weather/{id}")]
async fn update_record(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<RecordPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = validate_record(&payload, Utc::now())?;

    let id = RecordId::parse(&path.into_inner())?;
    let updated = state.repo.replace(id, body).await?.ok_or(Error::NotFound)?;
    tracing::info!(id = %updated.id, "updated weather record");

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete: unconditional given a well-formed identifier; removing an id
/// that never existed still reports success. A malformed id surfaces as a
/// 500 through the catch-all, not a 400.
#[delete("/api/weather/{id}")]
async fn delete_record(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();

    let id = RecordId::parse(&raw_id).map_err(|_| {
        Error::Unhandled(format!("Failed to interpret '{raw_id}' as a record identifier"))
    })?;

    state.repo.delete_by_id(id).await?;
    tracing::info!(%id, "deleted weather record");

    Ok(HttpResponse::Ok().json(DeletedResponse { message: "Record deleted successfully" }))
}
