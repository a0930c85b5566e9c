//! Post-login landing page. Hydrates the session once on mount by
//! verifying the stored token, and offers a sign out that clears it.

use crate::app_lib::navigate;
use crate::components::{AuthShell, Button};
use crate::features::auth::client;
use crate::features::auth::storage;
use crate::features::auth::types::VerifiedUser;
use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;
use leptos_router::components::A;

/// Outcome of the one-shot token check that runs on mount.
#[derive(Clone)]
enum SessionCheck {
    Checking,
    SignedOut,
    Verified(VerifiedUser),
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let check = RwSignal::new(SessionCheck::Checking);

    spawn_local(async move {
        let Some(token) = storage::load_auth_token() else {
            check.set(SessionCheck::SignedOut);
            return;
        };
        match client::verify_token(&token).await {
            Ok(response) if response.valid => match response.user {
                Some(user) => check.set(SessionCheck::Verified(user)),
                None => check.set(SessionCheck::SignedOut),
            },
            Ok(_) => {
                storage::clear_auth_token();
                check.set(SessionCheck::SignedOut);
            }
            Err(err) => {
                log::error!("token verification error: {err}");
                storage::clear_auth_token();
                check.set(SessionCheck::SignedOut);
            }
        }
    });

    let sign_out = move |_| {
        storage::clear_auth_token();
        navigate::redirect_to("/index.html");
    };

    view! {
        <Title text="Dashboard - AdoptEase" />
        <AuthShell title="Dashboard" subtitle="Your adoption journey at a glance.">
            {move || match check.get() {
                SessionCheck::Checking => {
                    view! {
                        <p class="text-center text-sm text-slate-500">"Checking your session..."</p>
                    }
                        .into_any()
                }
                SessionCheck::SignedOut => {
                    view! {
                        <div class="space-y-4 text-center">
                            <p class="text-sm text-slate-600">
                                "You are not logged in. Please log in to see your dashboard."
                            </p>
                            <A
                                href="/index.html"
                                {..}
                                class="font-medium text-emerald-600 hover:underline"
                            >
                                "Go to login"
                            </A>
                        </div>
                    }
                        .into_any()
                }
                SessionCheck::Verified(user) => {
                    view! {
                        <div class="space-y-4">
                            <p class="text-sm text-slate-600">
                                "Welcome back, " <span class="font-semibold">{user.name}</span> "!"
                            </p>
                            <p class="text-sm text-slate-500">
                                "Signed in as " {user.email}
                            </p>
                            <Button button_type="button" on:click=sign_out>
                                "Log Out"
                            </Button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </AuthShell>
    }
}
