//! Submission state machine shared by the login and registration pages. Each
//! page owns one [`SubmissionFlow`] configured by a [`FormConfig`]; the flow
//! decides whether a submit may start, what the submit control shows, and how
//! a finished request maps onto feedback, token persistence, and redirects.
//! The flow itself performs no I/O; pages execute the returned outcome.

use crate::app_lib::AppError;
use crate::features::auth::types::{AuthSuccess, FormInput};
use crate::features::auth::validate::{self, FormKind, ValidationResult};

/// Delay between a successful submit and the follow-up navigation.
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Banner shown when the request never produced an HTTP response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";

/// Per-form configuration: endpoint, labels, messages, and redirect.
#[derive(Clone, Debug)]
pub struct FormConfig {
    pub kind: FormKind,
    pub endpoint: &'static str,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub success_message: &'static str,
    pub failure_fallback: &'static str,
    pub redirect_target: &'static str,
    pub redirect_delay_ms: u32,
}

impl FormConfig {
    pub fn login() -> Self {
        Self {
            kind: FormKind::Login,
            endpoint: "/api/login",
            submit_label: "Login",
            busy_label: "Logging in...",
            success_message: "Login successful! Redirecting...",
            failure_fallback: "Login failed. Please check your credentials.",
            redirect_target: "/dashboard",
            redirect_delay_ms: REDIRECT_DELAY_MS,
        }
    }

    pub fn registration() -> Self {
        Self {
            kind: FormKind::Registration,
            endpoint: "/api/register",
            submit_label: "Sign Up",
            busy_label: "Creating Account...",
            success_message: "Account created successfully! Redirecting to login...",
            failure_fallback: "Registration failed. Please try again.",
            redirect_target: "/index.html",
            redirect_delay_ms: REDIRECT_DELAY_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one submit attempt.
#[derive(Clone, Debug)]
pub enum BeginOutcome {
    /// A submission is already pending; nothing was started.
    Rejected,
    /// Validation failed; the request was never sent.
    Invalid(ValidationResult),
    /// The payload may be sent; the control is now disabled.
    Submit,
}

/// What the page must do once a request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success {
        banner: &'static str,
        token: Option<String>,
        redirect_target: &'static str,
        redirect_delay_ms: u32,
    },
    Failure {
        banner: String,
    },
}

#[derive(Clone, Debug)]
pub struct SubmissionFlow {
    config: FormConfig,
    state: FlowState,
}

impl SubmissionFlow {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            state: FlowState::Idle,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Whether a new submission may start. Rejects re-entry while a request
    /// is pending and during the post-success redirect window.
    pub fn accepts_submit(&self) -> bool {
        matches!(self.state, FlowState::Idle | FlowState::Failed)
    }

    pub fn control_disabled(&self) -> bool {
        matches!(self.state, FlowState::Submitting | FlowState::Succeeded)
    }

    /// Label for the submit control. The busy label persists through success
    /// so the control never invites a second click before the redirect.
    pub fn control_label(&self) -> &'static str {
        if self.control_disabled() {
            self.config.busy_label
        } else {
            self.config.submit_label
        }
    }

    /// Gates one submit attempt: runs validation and either opens the
    /// submission window or reports why nothing was sent.
    pub fn begin(&mut self, input: &FormInput) -> BeginOutcome {
        if !self.accepts_submit() {
            return BeginOutcome::Rejected;
        }

        self.state = FlowState::Validating;
        let result = validate::validate(self.config.kind, input);
        if result.is_valid() {
            self.state = FlowState::Submitting;
            BeginOutcome::Submit
        } else {
            self.state = FlowState::Idle;
            BeginOutcome::Invalid(result)
        }
    }

    /// Resolves the pending submission. Server-reported failures surface the
    /// server message when one was sent; anything without an HTTP response
    /// becomes the generic network banner, with the cause logged for
    /// developers only.
    pub fn settle(&mut self, result: Result<AuthSuccess, AppError>) -> SubmitOutcome {
        match result {
            Ok(response) => {
                self.state = FlowState::Succeeded;
                let token = match self.config.kind {
                    FormKind::Login => response.token,
                    FormKind::Registration => None,
                };
                SubmitOutcome::Success {
                    banner: self.config.success_message,
                    token,
                    redirect_target: self.config.redirect_target,
                    redirect_delay_ms: self.config.redirect_delay_ms,
                }
            }
            Err(AppError::Http { message, .. }) => {
                self.state = FlowState::Failed;
                SubmitOutcome::Failure {
                    banner: message
                        .unwrap_or_else(|| self.config.failure_fallback.to_string()),
                }
            }
            Err(err) => {
                self.state = FlowState::Failed;
                log::error!("{} error: {err}", flow_name(self.config.kind));
                SubmitOutcome::Failure {
                    banner: NETWORK_ERROR_MESSAGE.to_string(),
                }
            }
        }
    }
}

fn flow_name(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Login",
        FormKind::Registration => "Registration",
    }
}
