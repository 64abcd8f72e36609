use axum::{Json, extract::State};
use chrono::SecondsFormat;
use tracing::{info, warn};

use crate::error::CmsError;
use crate::middleware::auth::AdminSession;
use crate::router::CmsState;
use crate::service::session;
use crate::types::api::{Ack, JsonBody, LoginRequest, LoginResponse};

/// POST /api/login -> issues a session token for valid credentials.
pub async fn login(
    State(state): State<CmsState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, CmsError> {
    let Some(user) = state
        .store
        .verify_credentials(&req.username, &req.password)
        .await?
    else {
        warn!(username = %req.username, "rejected login");
        return Err(CmsError::InvalidCredentials);
    };

    let session = session::issue(&state.store, &user.username, state.session_ttl).await?;
    Ok(Json(LoginResponse {
        success: true,
        token: session.token,
        expires_at: session
            .expires_at
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}

/// POST /api/logout -> revokes the caller's session.
pub async fn logout(
    State(state): State<CmsState>,
    admin: AdminSession,
) -> Result<Json<Ack>, CmsError> {
    session::revoke(&state.store, &admin.token).await?;
    info!(username = %admin.username, "session revoked");
    Ok(Json(Ack::ok()))
}
