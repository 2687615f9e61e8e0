use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::{
    auth::tokens::AuthUser,
    error::ApiError,
    logs::{
        dto::{parse_weight, LogEntry, NewLogRequest},
        repo,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/logs", get(list_logs).post(append_log))
}

#[instrument(skip(state))]
pub async fn list_logs(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let rows = repo::list_by_user(&state.db, user_id).await?;
    let entries = rows
        .into_iter()
        .map(LogEntry::from_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(entries))
}

#[instrument(skip(state, payload))]
pub async fn append_log(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<NewLogRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let raw = payload.weight.ok_or(ApiError::MissingField("weight"))?;
    let weight = parse_weight(&raw)?;

    let log = repo::append(&state.db, user_id, weight).await?;
    info!(%user_id, log_id = log.id, "weight logged");

    let entry = LogEntry::from_row(log)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Log added successfully", "log": entry })),
    ))
}
