//! HTTP helpers for the JSON auth API. Feature clients use these helpers to
//! avoid duplicating request setup. Requests run to completion; the submit
//! flow keeps the form disabled while one is pending, so no abort timer is
//! attached here.

#![allow(clippy::unused_async)]

use super::errors::AppError;
#[cfg(any(test, target_arch = "wasm32"))]
use serde::Deserialize;
use serde::{Serialize, de::DeserializeOwned};

/// Posts JSON to the configured API and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = build_url(path);
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, body);
        Err(AppError::Network(
            "requests are only sent from the browser".to_string(),
        ))
    }
}

/// Fetches JSON with a bearer token, used for token verification.
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = build_url(path);
        let response = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, token);
        Err(AppError::Network(
            "requests are only sent from the browser".to_string(),
        ))
    }
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = super::config::AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
#[cfg(any(test, target_arch = "wasm32"))]
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network-level failures into `AppError` without losing the cause.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses JSON responses and surfaces HTTP errors with the server message.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: extract_error_message(&body),
        })
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pulls the `message` field out of an error body, if the server sent one.
#[cfg(any(test, target_arch = "wasm32"))]
fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = parsed.message?;
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
