use axum::extract::FromRequest;
use serde::{Deserialize, Serialize};

use crate::error::CmsError;

/// JSON extractor whose rejections render as `CmsError` bodies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(CmsError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub expires_at: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
