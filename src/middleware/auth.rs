use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

use crate::error::CmsError;
use crate::router::CmsState;
use crate::service::session;

/// Pull the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();
    auth.strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// An authenticated administrator. Rejects with 401 unless the bearer token
/// names a live session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
    pub token: String,
}

impl FromRequestParts<CmsState> for AdminSession {
    type Rejection = CmsError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &CmsState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(CmsError::Unauthorized)?;
        let username = session::resolve(&state.store, token)
            .await?
            .ok_or(CmsError::Unauthorized)?;
        Ok(Self {
            username,
            token: token.to_string(),
        })
    }
}
