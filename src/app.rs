use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="AdoptEase" />
        <Router>
            <AppRoutes />
        </Router>
    }
}
