//! REST API handlers.
//!
//! Request/response shapes mirror the store and core types directly;
//! handlers only validate, lock the store, and map errors to status codes.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use checkride_core::model::{Competency, Exercise, Observation, Session, Student};
use checkride_core::report::StudentReport;

use crate::error::ApiError;
use crate::AppState;

/// Service banner.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("checkride evaluation API v{}", env!("CARGO_PKG_VERSION")),
    })
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub sessions: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.store.read().await.session_count();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        sessions,
    })
}

/// A student in a session-creation request.
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
}

/// Body of `POST /sessions`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCreate {
    pub students: Vec<StudentInput>,
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SessionCreate>,
) -> Result<Json<Session>, ApiError> {
    if body.students.is_empty() {
        return Err(ApiError::InvalidInput(
            "a session needs at least one student".to_string(),
        ));
    }
    let students = body
        .students
        .into_iter()
        .map(|s| Student { name: s.name })
        .collect();
    let session = state.store.write().await.create_session(students);
    Ok(Json(session))
}

pub async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<Session>> {
    let store = state.store.read().await;
    Json(store.list_sessions().into_iter().cloned().collect())
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.session(session_id)?.clone()))
}

/// Body of `POST /sessions/{id}/exercises`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseCreate {
    pub name: String,
    pub student_name: String,
    pub competences: Vec<String>,
}

pub async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(body): Json<ExerciseCreate>,
) -> Result<Json<Exercise>, ApiError> {
    let competences = parse_competences(&body.competences)?;
    let exercise = state.store.write().await.create_exercise(
        session_id,
        &body.name,
        &body.student_name,
        competences,
    )?;
    Ok(Json(exercise))
}

fn parse_competences(codes: &[String]) -> Result<Vec<Competency>, ApiError> {
    codes
        .iter()
        .map(|code| code.parse::<Competency>().map_err(ApiError::InvalidInput))
        .collect()
}

/// Body of `PUT /exercises/{id}/observations/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ObservationUpdate {
    pub is_checked: bool,
}

pub async fn update_observation(
    State(state): State<Arc<AppState>>,
    Path((exercise_id, observation_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<ObservationUpdate>,
) -> Result<Json<Observation>, ApiError> {
    let observation =
        state
            .store
            .write()
            .await
            .set_checked(exercise_id, observation_id, body.is_checked)?;
    Ok(Json(observation))
}

pub async fn complete_exercise(
    State(state): State<Arc<AppState>>,
    Path(exercise_id): Path<Uuid>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = state.store.write().await.complete_exercise(exercise_id)?;
    Ok(Json(exercise))
}

/// Query of `GET /sessions/{id}/report`.
///
/// `safety_scores` is a JSON object string mapping student name to score,
/// e.g. `{"Student A": 4}`. Absent means every student defaults to 5.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub safety_scores: Option<String>,
}

pub async fn session_report(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<BTreeMap<String, StudentReport>>, ApiError> {
    let safety_scores: HashMap<String, i64> = match &query.safety_scores {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| ApiError::InvalidInput(format!("malformed safety_scores: {e}")))?,
        None => HashMap::new(),
    };

    let report = state
        .store
        .read()
        .await
        .report(session_id, &safety_scores)?;
    Ok(Json(report))
}
