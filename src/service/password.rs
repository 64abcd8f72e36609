use crate::error::CmsError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::sync::LazyLock;
use subtle::ConstantTimeEq;

const DUMMY_SECRET: &str = "pdfmaster-cms/unknown-user";

/// Verified against when the username does not exist, so unknown and known
/// users cost the same Argon2 work.
static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| hash_password(DUMMY_SECRET).ok());

/// Outcome of checking a supplied password against the stored column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    /// Matched an Argon2 PHC hash.
    Hashed,
    /// Matched a plaintext value left by an older deployment; caller should rehash.
    Legacy,
    Mismatch,
}

/// Hash with Argon2id and a fresh random salt, returning the PHC string.
pub fn hash_password(plain: &str) -> Result<String, CmsError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn check_password(stored: &str, supplied: &str) -> PasswordMatch {
    match PasswordHash::new(stored) {
        Ok(parsed) => {
            if Argon2::default()
                .verify_password(supplied.as_bytes(), &parsed)
                .is_ok()
            {
                PasswordMatch::Hashed
            } else {
                PasswordMatch::Mismatch
            }
        }
        Err(_) => {
            if bool::from(stored.as_bytes().ct_eq(supplied.as_bytes())) {
                PasswordMatch::Legacy
            } else {
                PasswordMatch::Mismatch
            }
        }
    }
}

/// Build the dummy hash ahead of the first login.
pub fn warm_dummy_hash() {
    LazyLock::force(&DUMMY_HASH);
}

/// Burn one Argon2 verification for a missing user. Always a mismatch.
pub fn check_unknown_user(supplied: &str) -> PasswordMatch {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = check_password(hash, supplied);
    }
    PasswordMatch::Mismatch
}

/// `hash_password` on the blocking pool.
pub async fn hash_password_blocking(plain: String) -> Result<String, CmsError> {
    tokio::task::spawn_blocking(move || hash_password(&plain)).await?
}

/// Check against `stored`, or against the dummy hash when the user is missing,
/// on the blocking pool.
pub async fn check_password_blocking(
    stored: Option<String>,
    supplied: String,
) -> Result<PasswordMatch, CmsError> {
    let outcome = tokio::task::spawn_blocking(move || match stored {
        Some(stored) => check_password(&stored, &supplied),
        None => check_unknown_user(&supplied),
    })
    .await?;
    Ok(outcome)
}
