use leptos::prelude::*;

const SOCIAL_CLASS: &str = "flex w-full items-center justify-center gap-2 rounded-lg border border-slate-300 bg-white px-4 py-2.5 text-sm font-medium text-slate-700 hover:bg-slate-50";

/// OAuth placeholders. Clicking reports an informational notice through
/// `on_notice` instead of starting a provider flow.
#[component]
pub fn SocialButtons(on_notice: Callback<String>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-3">
            <button
                type="button"
                class=format!("google-btn {SOCIAL_CLASS}")
                on:click=move |_| {
                    on_notice.run("Google sign in would be implemented here".to_string());
                }
            >
                "Google"
            </button>
            <button
                type="button"
                class=format!("apple-btn {SOCIAL_CLASS}")
                on:click=move |_| {
                    on_notice.run("Apple sign in would be implemented here".to_string());
                }
            >
                "Apple"
            </button>
        </div>
    }
}
