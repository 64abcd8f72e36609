use crate::db::Store;
use crate::error::CmsError;
use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use tracing::info;

const TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// 256 bits from the OS RNG, base64url without padding.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Issue a fresh session for `username`, purging expired ones first.
pub async fn issue(store: &Store, username: &str, ttl: Duration) -> Result<Session, CmsError> {
    let now = Utc::now();
    let purged = store.purge_expired_sessions(now).await?;
    if purged > 0 {
        info!(count = purged, "purged expired sessions");
    }

    let session = Session {
        token: generate_token(),
        username: username.to_string(),
        expires_at: now
            .checked_add_signed(ttl)
            .ok_or(CmsError::SessionExpiryOverflow)?,
    };
    store
        .create_session(&session.token, &session.username, session.expires_at)
        .await?;
    info!(username = %session.username, expires_at = %session.expires_at, "session issued");
    Ok(session)
}

/// Resolve a bearer token to its username if the session is still live.
pub async fn resolve(store: &Store, token: &str) -> Result<Option<String>, CmsError> {
    store.session_user(token, Utc::now()).await
}

pub async fn revoke(store: &Store, token: &str) -> Result<bool, CmsError> {
    store.delete_session(token).await
}
