//! Shared card layout for the auth pages. It centralizes the brand header
//! so the login and signup routes can focus on their forms.

use leptos::prelude::*;

/// Wraps an auth form in the centered AdoptEase card.
#[component]
pub fn AuthShell(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-4 py-10">
            <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-6 shadow-lg sm:p-8">
                <div class="mb-6 space-y-2">
                    <p class="text-xs font-semibold uppercase tracking-widest text-emerald-600">
                        "AdoptEase"
                    </p>
                    <h1 class="text-2xl font-semibold text-slate-900">{title}</h1>
                    <p class="text-sm text-slate-500">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}
