//! Axum route handlers for the notes API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::Result;
use crate::note::{NoteInput, NoteView};

/// Query parameters for listing notes.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Substring to look for in content or title.
    pub query: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the server is answering.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of stored notes.
    pub notes: usize,
}

// GET /notes?query=
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Json<Vec<NoteView>> {
    Json(state.store.list(params.query.as_deref()))
}

// GET /notes/:id
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NoteView>> {
    state.store.get(id).map(Json)
}

// POST /notes
pub async fn create_note(
    State(state): State<AppState>,
    Json(input): Json<NoteInput>,
) -> Result<Json<NoteView>> {
    state.store.create(input).map(Json)
}

// PUT /notes/:id
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NoteInput>,
) -> Result<Json<NoteView>> {
    state.store.update(id, input).map(Json)
}

// DELETE /notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.store.delete(id)?;
    Ok(StatusCode::OK)
}

// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        notes: state.store.len(),
    })
}
