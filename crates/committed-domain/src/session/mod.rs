mod repository;
mod token_extractor;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::UserId;

pub use repository::SessionRepository;
pub use token_extractor::SessionTokenExtractor;

/// Session value object
///
/// Sessions are created and rotated by the external auth service; this side
/// only reads them to resolve the user behind a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    token: String,
    user_id: UserId,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub fn restore(token: String, user_id: UserId, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            user_id,
            expires_at,
        }
    }

    /// Check if session is still valid
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
