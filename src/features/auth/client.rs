//! Client wrappers for the AdoptEase auth API. Routes go through these
//! helpers so request shape stays in one place and credentials never leak
//! into logs.

use crate::app_lib::{AppError, get_json_with_bearer, post_json};
use crate::features::auth::types::{AuthSuccess, VerifyResponse};
use serde::Serialize;

/// Submits auth credentials to `endpoint` and parses the response body.
/// The payload must never be logged.
pub async fn submit<B: Serialize>(endpoint: &str, payload: &B) -> Result<AuthSuccess, AppError> {
    post_json(endpoint, payload).await
}

/// Checks a stored token against the API and returns the verified user.
pub async fn verify_token(token: &str) -> Result<VerifyResponse, AppError> {
    get_json_with_bearer("/api/verify-token", token).await
}
