use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span
            class="mr-2 inline-block h-4 w-4 animate-spin rounded-full border-2 border-emerald-200 border-t-white align-middle"
            role="status"
            aria-label="Loading"
        ></span>
    }
}
