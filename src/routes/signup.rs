//! Registration route. Mirrors the login flow with the extra name and
//! terms fields, then sends new users back to the login page once the
//! account exists.

use crate::app_lib::{TaskHandle, navigate, schedule_once};
use crate::components::{Alert, AuthShell, Button, FieldError, SocialButtons, Spinner};
use crate::features::auth::client;
use crate::features::auth::feedback::{FEEDBACK_CLEAR_MS, FeedbackStore};
use crate::features::auth::flow::{BeginOutcome, FormConfig, SubmissionFlow, SubmitOutcome};
use crate::features::auth::types::{FormInput, RegisterRequest};
use crate::features::auth::validate::Field;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

const INPUT_CLASS: &str = "w-full rounded-lg border border-slate-300 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-200";

#[component]
pub fn SignUpPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (terms, set_terms) = signal(false);
    let flow = RwSignal::new(SubmissionFlow::new(FormConfig::registration()));
    let feedback = RwSignal::new(FeedbackStore::new());
    let clear_task = StoredValue::new_local(None::<TaskHandle>);
    let redirect_task = StoredValue::new_local(None::<TaskHandle>);

    let endpoint = flow.with_untracked(|flow| flow.config().endpoint);
    let submit_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::submit(endpoint, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            let Some(outcome) = flow.try_update(|flow| flow.settle(result)) else {
                return;
            };
            match outcome {
                SubmitOutcome::Success {
                    banner,
                    token: _,
                    redirect_target,
                    redirect_delay_ms,
                } => {
                    feedback.update(|store| store.push_success(banner));
                    redirect_task.set_value(Some(schedule_once(redirect_delay_ms, move || {
                        navigate::redirect_to(redirect_target);
                    })));
                }
                SubmitOutcome::Failure { banner } => {
                    feedback.update(|store| store.push_error(banner));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        if !flow.with_untracked(|flow| flow.accepts_submit()) {
            return;
        }

        if let Some(epoch) = feedback.try_update(|store| store.begin_clear()) {
            clear_task.set_value(Some(schedule_once(FEEDBACK_CLEAR_MS, move || {
                feedback.update(|store| store.finish_clear(epoch));
            })));
        }

        let input = FormInput {
            name: Some(name.get_untracked()),
            email: email.get_untracked(),
            password: password.get_untracked(),
            terms_accepted: Some(terms.get_untracked()),
            remember_me: false,
        };

        match flow.try_update(|flow| flow.begin(&input)) {
            Some(BeginOutcome::Submit) => {
                submit_action.dispatch(RegisterRequest::from_input(&input));
            }
            Some(BeginOutcome::Invalid(result)) => {
                feedback.update(|store| {
                    for (field, message) in result.errors() {
                        store.set_field_error(*field, *message);
                    }
                });
            }
            Some(BeginOutcome::Rejected) | None => {}
        }
    };

    view! {
        <Title text="Sign Up - AdoptEase" />
        <AuthShell
            title="Create your account"
            subtitle="Join AdoptEase and meet your next best friend."
        >
            <form id="signup-form" class="space-y-4" on:submit=on_submit>
                {move || {
                    feedback
                        .with(|store| store.banners().to_vec())
                        .into_iter()
                        .map(|banner| {
                            view! {
                                <div class="mb-1">
                                    <Alert
                                        kind=banner.kind.into()
                                        message=banner.message
                                        visible=banner.visible
                                    />
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <div>
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="name">
                        "Full name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class=INPUT_CLASS
                        autocomplete="name"
                        placeholder="Alex Rivera"
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                    <FieldError feedback=feedback field=Field::Name />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        autocomplete="email"
                        placeholder="you@example.com"
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <FieldError feedback=feedback field=Field::Email />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        placeholder="At least 8 characters"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <FieldError feedback=feedback field=Field::Password />
                </div>
                <div>
                    <label class="flex items-start gap-2 text-sm text-slate-600" for="terms">
                        <input
                            id="terms"
                            type="checkbox"
                            class="mt-0.5 h-4 w-4 rounded border-slate-300 text-emerald-600 focus:ring-emerald-500"
                            prop:checked=move || terms.get()
                            on:change=move |event| set_terms.set(event_target_checked(&event))
                        />
                        <span>
                            "I agree to the "
                            <a class="font-medium text-emerald-600 hover:underline" href="#">
                                "Terms of Service"
                            </a> " and "
                            <a class="font-medium text-emerald-600 hover:underline" href="#">
                                "Privacy Policy"
                            </a>
                        </span>
                    </label>
                    <FieldError feedback=feedback field=Field::Terms />
                </div>
                <Button
                    button_type="submit"
                    class="signup-btn"
                    disabled=Signal::derive(move || flow.with(|flow| flow.control_disabled()))
                >
                    {move || {
                        flow.with(|flow| flow.control_disabled()).then(|| view! { <Spinner /> })
                    }}
                    {move || flow.with(|flow| flow.control_label())}
                </Button>
                <div class="relative my-2">
                    <div class="absolute inset-0 flex items-center">
                        <div class="w-full border-t border-slate-200"></div>
                    </div>
                    <div class="relative flex justify-center text-xs">
                        <span class="bg-white px-2 text-slate-400">"or continue with"</span>
                    </div>
                </div>
                <SocialButtons on_notice=Callback::new(move |message: String| {
                    feedback.update(|store| store.push_info(message));
                }) />
            </form>
            <p class="mt-6 text-center text-sm text-slate-500">
                "Already have an account? "
                <A href="/index.html" {..} class="font-medium text-emerald-600 hover:underline">
                    "Log in"
                </A>
            </p>
        </AuthShell>
    }
}
