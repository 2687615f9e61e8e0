use async_trait::async_trait;
use tracing::info;

/// Out-of-band delivery of password-reset links. The real channel (email,
/// SMS) lives outside this service; callers only hand over the link.
#[async_trait]
pub trait ResetDelivery: Send + Sync {
    async fn deliver(&self, email: &str, reset_link: &str) -> anyhow::Result<()>;
}

/// Stand-in delivery that writes the link to the log.
pub struct LogDelivery;

#[async_trait]
impl ResetDelivery for LogDelivery {
    async fn deliver(&self, email: &str, reset_link: &str) -> anyhow::Result<()> {
        info!(%email, %reset_link, "password reset link generated");
        Ok(())
    }
}
