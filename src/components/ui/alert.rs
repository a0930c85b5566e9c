//! Alert banners for error, success, and informational messages. Messages
//! must be safe to render and should never include credentials or tokens.

use crate::features::auth::feedback::BannerKind;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl From<BannerKind> for AlertKind {
    fn from(kind: BannerKind) -> Self {
        match kind {
            BannerKind::Error => AlertKind::Error,
            BannerKind::Success => AlertKind::Success,
            BannerKind::Info => AlertKind::Info,
        }
    }
}

/// Renders a styled alert banner. Hidden banners keep their space until the
/// feedback store removes them, so the fade-out can play.
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
    #[prop(optional, into, default = Signal::from(true))] visible: Signal<bool>,
) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 transition-opacity duration-300"
        }
        AlertKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 transition-opacity duration-300"
        }
        AlertKind::Info => {
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 transition-opacity duration-300"
        }
    };

    view! {
        <div class=class class:opacity-0=move || !visible.get() role="alert">
            {message}
        </div>
    }
}
