use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::{
    auth::{repo::User, tokens::AuthUser},
    error::ApiError,
    profile::{
        dto::{UpdateDetailsRequest, UserDetails},
        repo,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/details", get(get_details).post(update_details))
}

#[instrument(skip(state))]
pub async fn get_details(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserDetails>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    Ok(Json(UserDetails {
        age: user.age,
        height: user.height,
        weight: user.weight,
        body_type: user.body_type,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_details(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateDetailsRequest>,
) -> Result<Json<Value>, ApiError> {
    repo::update_details(
        &state.db,
        user_id,
        payload.age,
        payload.height,
        payload.weight,
        payload.body_type.as_deref(),
    )
    .await?;

    info!(%user_id, "details updated");
    Ok(Json(json!({ "message": "Details updated successfully" })))
}
