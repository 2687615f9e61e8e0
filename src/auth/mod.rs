use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod mailer;
pub(crate) mod password;
pub mod repo;
pub(crate) mod tokens;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
