use crate::features::auth::feedback::FeedbackStore;
use crate::features::auth::validate::Field;
use leptos::prelude::*;

/// Renders the validation message for one field directly under its input.
/// Nothing is rendered while the field has no message.
#[component]
pub fn FieldError(feedback: RwSignal<FeedbackStore>, field: Field) -> impl IntoView {
    view! {
        {move || {
            feedback
                .with(|store| {
                    store
                        .field_error(field)
                        .map(|entry| (entry.message.clone(), entry.visible))
                })
                .map(|(message, visible)| {
                    view! {
                        <p
                            class="mt-1 text-sm text-red-600 transition-opacity duration-300"
                            class:opacity-0=!visible
                        >
                            {message}
                        </p>
                    }
                })
        }}
    }
}
