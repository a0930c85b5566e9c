//! Minimalistic 404 page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-slate-100 px-4 text-center">
            <div class="relative">
                <h1 class="text-9xl font-black text-slate-200 select-none">"404"</h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-slate-900 whitespace-nowrap">
                    "Page not found"
                </p>
            </div>
            <div class="mt-4 space-y-6">
                <p class="mx-auto max-w-sm text-slate-500">
                    "The page you requested does not exist. Head back to the login page to keep going."
                </p>
                <A
                    href="/index.html"
                    {..}
                    class="inline-flex items-center rounded-lg bg-emerald-600 px-5 py-2.5 text-sm font-medium text-white transition-all hover:bg-emerald-700 focus:ring-4 focus:ring-emerald-300 focus:outline-none"
                >
                    "Go to login"
                </A>
            </div>
        </div>
    }
}
