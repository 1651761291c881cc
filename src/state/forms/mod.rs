//! Form domain layer
//!
//! This module provides type-safe form handling for the login, signup and
//! password recovery views:
//! - `field`: field value objects
//! - `validation`: pure per-field rules and the `FieldErrors` map
//! - `form_state`: one struct per form plus the `FormState` dispatcher
//! - `submission`: validate-then-transition controller

mod field;
mod form_state;
mod submission;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{ForgotPasswordForm, Form, FormAction, FormCursor, FormState};
pub use submission::{submit, BackendRequest, SubmitOutcome, Transition, DEFAULT_LOGIN_DELAY};
