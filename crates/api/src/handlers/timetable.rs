//! # Timetable Handlers
//!
//! The teacher timetable endpoint fetches every group the teacher teaches
//! from the SIHRA API using the caller's own credential, lays the sessions
//! out on the weekly grid and returns the grid as JSON. Sessions that could
//! not be drawn and groups that could not be fetched are part of the
//! response rather than silently missing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sihra_client::{SihraApi, TeacherTimetable, build_teacher_timetable};
use sihra_core::schedule::{CanonicalDay, normalize_day};
use std::sync::Arc;
use tracing::info;

use crate::{
    middleware::{auth::BearerCredential, error_handling::AppError},
    ApiState,
};

#[derive(Debug, Deserialize)]
pub struct NormalizeQuery {
    pub day: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub input: String,
    pub day: String,
    pub matched: bool,
    pub canonical: Option<CanonicalDay>,
}

/// `GET /api/teachers/:teacher_id/timetable`
#[axum::debug_handler]
pub async fn get_teacher_timetable(
    State(state): State<Arc<ApiState>>,
    Path(teacher_id): Path<String>,
    BearerCredential(credential): BearerCredential,
) -> Result<Json<TeacherTimetable>, AppError> {
    let api = SihraApi::with_client(state.http.clone(), &state.upstream_base_url, credential);

    let timetable = build_teacher_timetable(&api, &teacher_id, state.grid).await?;

    info!(
        "Timetable for teacher {}: {} sessions shown, {} hidden, {} groups failed",
        teacher_id,
        timetable.timetable.placed_count(),
        timetable.timetable.hidden.len(),
        timetable.failed_groups.len()
    );

    Ok(Json(timetable))
}

/// `GET /api/days/normalize?day=...`
pub async fn normalize(Query(query): Query<NormalizeQuery>) -> Json<NormalizeResponse> {
    let day = normalize_day(&query.day);
    let canonical = day.canonical();

    Json(NormalizeResponse {
        day: day.label().to_string(),
        matched: canonical.is_some(),
        canonical,
        input: query.day,
    })
}
