//! Shared frontend utilities for API access, configuration, errors, scheduled
//! tasks, navigation, and build metadata. Centralizing these helpers keeps
//! network and timing behavior consistent and avoids duplicated logic in
//! routes and features. Callers must still avoid logging credentials or
//! tokens.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod navigate;
pub mod schedule;

pub(crate) use api::{get_json_with_bearer, post_json};
pub(crate) use errors::AppError;
pub(crate) use schedule::{TaskHandle, schedule_once};
