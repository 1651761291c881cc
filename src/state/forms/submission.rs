//! Submission controller: validate, then decide the transition
//!
//! `submit` never performs IO. It stores validation errors on the form and
//! tells the caller which backend request to make and where to go next.

use super::form_state::FormState;
use crate::backend::{AccountRole, SignupProfile};
use crate::state::View;
use std::time::Duration;

/// Simulated sign-in latency for the developer login form
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Backend call a valid submission turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    Credentials {
        role: AccountRole,
        email: String,
        password: String,
    },
    Signup(SignupProfile),
    PasswordReset {
        email: String,
    },
}

/// What happens after the backend accepts the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Go to the view right away
    Navigate(View),
    /// Stay in the loading state for `delay`, then go to `target`
    Deferred { delay: Duration, target: View },
    /// Show the "Check Your Email" confirmation
    ResetLinkSent,
}

/// Result of pressing submit on a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not a form view, or a submission is already in flight
    Ignored,
    /// Validation failed; errors were stored on the form
    Invalid { error_count: usize },
    Accepted {
        request: BackendRequest,
        transition: Transition,
    },
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Run the validator and, when it passes, pick the transition.
///
/// Only the developer login form waits `login_delay` (and enters its loading
/// state); every other form navigates immediately.
pub fn submit(form: &mut FormState, login_delay: Duration) -> SubmitOutcome {
    if form.is_loading() {
        return SubmitOutcome::Ignored;
    }

    let Some(errors) = form.as_form().map(|f| f.validate()) else {
        return SubmitOutcome::Ignored;
    };

    if !errors.is_empty() {
        let error_count = errors.len();
        let fields: Vec<&str> = errors.fields().map(|name| name.key()).collect();
        tracing::debug!(error_count, ?fields, "Form validation failed");
        if let Some(f) = form.as_form_mut() {
            *f.errors_mut() = errors;
        }
        return SubmitOutcome::Invalid { error_count };
    }

    match form {
        FormState::None => SubmitOutcome::Ignored,
        FormState::DeveloperLogin(f) => {
            f.errors.clear();
            f.loading = true;
            SubmitOutcome::Accepted {
                request: BackendRequest::Credentials {
                    role: AccountRole::Developer,
                    email: f.email.as_text().to_string(),
                    password: f.password.as_text().to_string(),
                },
                transition: Transition::Deferred {
                    delay: login_delay,
                    target: View::DeveloperDashboard,
                },
            }
        }
        FormState::UserLogin(f) => {
            f.errors.clear();
            SubmitOutcome::Accepted {
                request: BackendRequest::Credentials {
                    role: AccountRole::Client,
                    email: f.email.as_text().to_string(),
                    password: f.password.as_text().to_string(),
                },
                transition: Transition::Navigate(View::DeveloperDashboard),
            }
        }
        FormState::DeveloperSignup(f) => {
            f.errors.clear();
            SubmitOutcome::Accepted {
                request: BackendRequest::Signup(SignupProfile {
                    role: AccountRole::Developer,
                    full_name: f.full_name.as_text().trim().to_string(),
                    email: f.email.as_text().to_string(),
                    password: f.password.as_text().to_string(),
                    tech_stack: optional(f.tech_stack.as_text().trim()),
                    github_url: optional(f.github_url.as_text()),
                    linkedin_url: optional(f.linkedin_url.as_text()),
                    company: None,
                }),
                transition: Transition::Navigate(View::DeveloperDashboard),
            }
        }
        FormState::UserSignup(f) => {
            f.errors.clear();
            SubmitOutcome::Accepted {
                request: BackendRequest::Signup(SignupProfile {
                    role: AccountRole::Client,
                    full_name: f.full_name.as_text().trim().to_string(),
                    email: f.email.as_text().to_string(),
                    password: f.password.as_text().to_string(),
                    tech_stack: None,
                    github_url: None,
                    linkedin_url: None,
                    company: optional(f.company.as_text().trim()),
                }),
                transition: Transition::Navigate(View::DeveloperDashboard),
            }
        }
        FormState::ForgotPassword(f) => {
            if f.submitted {
                return SubmitOutcome::Ignored;
            }
            f.errors.clear();
            SubmitOutcome::Accepted {
                request: BackendRequest::PasswordReset {
                    email: f.email.as_text().to_string(),
                },
                transition: Transition::ResetLinkSent,
            }
        }
    }
}
