//! AdoptEase web frontend.
//!
//! A client-side rendered Leptos app that serves the login and registration
//! pages for the AdoptEase pet adoption site. Form handling lives in
//! `features::auth`; shared helpers for configuration, HTTP, and timers live
//! in `app_lib`. Everything except the browser bindings compiles on native
//! targets so the logic can be tested with plain `cargo test`.

mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
mod components;
mod features;
mod routes;

pub use app::App;
