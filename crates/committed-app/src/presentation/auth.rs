use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use std::sync::Arc;
use tracing::debug;

use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;
use committed_domain::session::SessionTokenExtractor;
use committed_domain::shared::{ErrorCode, UserId};

/// The user behind the request's session.
///
/// Resolved from the session cookie (or a bearer token) against the sessions
/// written by the auth service. Missing, unknown and expired sessions are
/// rejected with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl CurrentUser {
    pub fn id(&self) -> &str {
        self.0.as_str()
    }
}

fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| SessionTokenExtractor::from_cookie_header(header, cookie_name))
        .or_else(|| {
            parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(SessionTokenExtractor::from_authorization_header)
        })
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts, &state.settings.session_cookie)
            .ok_or_else(|| ApiError::unauthorized("Missing session"))?;

        let session = state
            .repositories
            .session
            .find_by_token(&token)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Unknown session"))?;

        if !session.is_valid() {
            debug!("Rejected expired session for user {}", session.user_id());
            return Err(ApiError::from_code(
                ErrorCode::ExpiredSession,
                "Session expired",
            ));
        }

        Ok(CurrentUser(session.user_id().clone()))
    }
}
