use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::auth::mailer::{LogDelivery, ResetDelivery};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub reset_delivery: Arc<dyn ResetDelivery>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let reset_delivery = Arc::new(LogDelivery) as Arc<dyn ResetDelivery>;

        Ok(Self {
            db,
            config,
            reset_delivery,
        })
    }
}
