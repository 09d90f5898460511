use async_trait::async_trait;

use super::Session;
use crate::shared::DomainError;

/// Read access to sessions issued by the external auth service
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError>;
}
