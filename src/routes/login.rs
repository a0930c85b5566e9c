//! Login route. Validates the form locally, posts credentials once per
//! submission, stores the returned token, and redirects to the dashboard
//! after the success banner has been seen.

use crate::app_lib::{TaskHandle, navigate, schedule_once};
use crate::components::{Alert, AuthShell, Button, FieldError, SocialButtons, Spinner};
use crate::features::auth::client;
use crate::features::auth::feedback::{FEEDBACK_CLEAR_MS, FeedbackStore};
use crate::features::auth::flow::{BeginOutcome, FormConfig, SubmissionFlow, SubmitOutcome};
use crate::features::auth::storage;
use crate::features::auth::types::{FormInput, LoginRequest};
use crate::features::auth::validate::Field;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

const INPUT_CLASS: &str = "w-full rounded-lg border border-slate-300 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-200";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let flow = RwSignal::new(SubmissionFlow::new(FormConfig::login()));
    let feedback = RwSignal::new(FeedbackStore::new());
    let clear_task = StoredValue::new_local(None::<TaskHandle>);
    let redirect_task = StoredValue::new_local(None::<TaskHandle>);

    let endpoint = flow.with_untracked(|flow| flow.config().endpoint);
    let submit_action = Action::new_local(move |request: &LoginRequest| {
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
                    token,
                    redirect_target,
                    redirect_delay_ms,
                } => {
                    feedback.update(|store| store.push_success(banner));
                    if let Some(token) = token {
                        storage::store_auth_token(&token);
                    }
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
            name: None,
            email: email.get_untracked(),
            password: password.get_untracked(),
            terms_accepted: None,
            remember_me: remember.get_untracked(),
        };

        match flow.try_update(|flow| flow.begin(&input)) {
            Some(BeginOutcome::Submit) => {
                submit_action.dispatch(LoginRequest::from_input(&input));
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
        <Title text="Login - AdoptEase" />
        <AuthShell
            title="Welcome back"
            subtitle="Log in to continue caring for your adopted friends."
        >
            <form id="login-form" class="space-y-4" on:submit=on_submit>
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
                        autocomplete="current-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <FieldError feedback=feedback field=Field::Password />
                </div>
                <div class="flex items-center justify-between text-sm">
                    <label class="flex items-center gap-2 text-slate-600" for="remember">
                        <input
                            id="remember"
                            type="checkbox"
                            class="h-4 w-4 rounded border-slate-300 text-emerald-600 focus:ring-emerald-500"
                            prop:checked=move || remember.get()
                            on:change=move |event| set_remember.set(event_target_checked(&event))
                        />
                        "Remember me"
                    </label>
                    <a class="font-medium text-emerald-600 hover:underline" href="#">
                        "Forgot password?"
                    </a>
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
                "Don't have an account? "
                <A href="/register.html" {..} class="font-medium text-emerald-600 hover:underline">
                    "Sign up"
                </A>
            </p>
        </AuthShell>
    }
}
