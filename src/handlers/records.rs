use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::middleware::payload::ValidJson;
use crate::types::{CreateRecord, Record, UpdateRecord};
use crate::{RecordsError, router::RecordsState};

/// GET /api/records -> every stored record.
pub async fn list_records(
    State(state): State<RecordsState>,
) -> Result<Json<Vec<Record>>, RecordsError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

/// POST /api/records -> 201 with the stored record.
pub async fn create_record(
    State(state): State<RecordsState>,
    ValidJson(payload): ValidJson<CreateRecord>,
) -> Result<impl IntoResponse, RecordsError> {
    let record = state.store.create(&payload.name).await?;
    info!(id = record.id, "record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/records -> echoes the accepted payload.
pub async fn update_record(
    State(state): State<RecordsState>,
    ValidJson(payload): ValidJson<UpdateRecord>,
) -> Result<Json<UpdateRecord>, RecordsError> {
    state.store.update(payload.id, &payload.name).await?;
    info!(id = payload.id, "record updated");
    Ok(Json(payload))
}

/// DELETE /api/records/{id} -> 204 on success.
///
/// An id that is not an integer cannot match a row and is reported as not found.
pub async fn delete_record(
    State(state): State<RecordsState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, RecordsError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| RecordsError::NotFound(raw_id.clone()))?;
    state.store.delete(id).await?;
    info!(id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}
