use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::tokens::AuthUser,
    error::ApiError,
    plans::{
        catalog::{self, BodyType, PlanBundle},
        dto::{plan_display_name, GeneratePlanRequest, PlanListItem, SavePlanRequest, PLAN_DATE_FORMAT},
        repo,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/generate-plan", post(generate_plan))
        .route("/plans", get(list_plans).post(save_plan))
}

#[instrument(skip(payload))]
pub async fn generate_plan(
    AuthUser(user_id): AuthUser,
    Json(payload): Json<GeneratePlanRequest>,
) -> Result<Json<PlanBundle>, ApiError> {
    let Some(body_type) = payload.body_type.as_deref().and_then(BodyType::parse) else {
        warn!(%user_id, body_type = ?payload.body_type, "unrecognized body type");
        return Err(ApiError::InvalidBodyType);
    };
    Ok(Json(catalog::select(body_type)))
}

#[instrument(skip(state, payload))]
pub async fn save_plan(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<SavePlanRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let plan_data = payload.plan_data.ok_or(ApiError::MissingField("planData"))?;
    let user_details = payload
        .user_details
        .ok_or(ApiError::MissingField("userDetails"))?;

    let today = OffsetDateTime::now_utc()
        .format(PLAN_DATE_FORMAT)
        .map_err(|e| ApiError::Internal(e.into()))?;
    let name = plan_display_name(&user_details, &today);

    // The stored blob echoes the submitted payload verbatim.
    let blob = json!({ "planData": plan_data, "userDetails": user_details });
    let plan = repo::save(&state.db, user_id, &name, &blob).await?;

    info!(%user_id, plan_id = %plan.id, "plan saved");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Plan saved successfully", "plan_name": plan.name })),
    ))
}

#[instrument(skip(state))]
pub async fn list_plans(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<PlanListItem>>, ApiError> {
    let rows = repo::list_by_user(&state.db, user_id).await?;
    let items = rows
        .into_iter()
        .map(|p| {
            let date_created = p
                .created_at
                .format(PLAN_DATE_FORMAT)
                .map_err(|e| ApiError::Internal(e.into()))?;
            Ok(PlanListItem {
                id: p.id,
                name: p.name,
                date_created,
                data: p.plan_data,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;
    Ok(Json(items))
}
