//! Form state management and form structs

use super::field::{FieldName, FormField};
use super::validation::{
    check_confirm_password, check_email, check_password, check_required, check_url_contains,
    FieldErrors, FULL_NAME_REQUIRED, GITHUB_URL_INVALID, LINKEDIN_URL_INVALID,
    TECH_STACK_REQUIRED,
};
use crate::state::View;

/// Buttons and links shown in a form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    ContinueWithGoogle,
    ForgotPassword,
    CreateAccount,
    SignIn,
    TryAnotherEmail,
    BackToLogin,
}

impl FormAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::ContinueWithGoogle => "Continue with Google",
            Self::ForgotPassword => "Forgot password?",
            Self::CreateAccount => "Sign up here",
            Self::SignIn => "Sign in here",
            Self::TryAnotherEmail => "Try Another Email",
            Self::BackToLogin => "Back to Login",
        }
    }
}

/// Trait for common form operations
pub trait Form {
    fn fields(&self) -> Vec<&FormField>;
    fn fields_mut(&mut self) -> Vec<&mut FormField>;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn selected_action(&self) -> usize;
    fn set_selected_action(&mut self, index: usize);
    fn errors(&self) -> &FieldErrors;
    fn errors_mut(&mut self) -> &mut FieldErrors;
    fn actions(&self) -> &'static [FormAction];
    fn submit_label(&self) -> &'static str;
    /// Pure validation of the current values
    fn validate(&self) -> FieldErrors;

    /// Fields plus the action row
    fn field_count(&self) -> usize {
        self.fields().len() + 1
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    /// Returns true if the action row is currently active
    fn is_action_row_active(&self) -> bool {
        self.active_field() >= self.fields().len()
    }

    fn next_action(&mut self) {
        let count = self.actions().len().max(1);
        self.set_selected_action((self.selected_action() + 1) % count);
    }

    fn prev_action(&mut self) {
        let count = self.actions().len().max(1);
        let current = self.selected_action();
        self.set_selected_action(if current == 0 { count - 1 } else { current - 1 });
    }

    fn current_action(&self) -> Option<FormAction> {
        self.actions().get(self.selected_action()).copied()
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().into_iter().nth(index)
    }

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.fields_mut().into_iter().nth(index)
    }

    fn value_of(&self, name: FieldName) -> &str {
        self.fields()
            .into_iter()
            .find(|f| f.name == name)
            .map(FormField::as_text)
            .unwrap_or_default()
    }

    /// Type into the active field; editing a field clears its error
    fn input_char(&mut self, c: char) {
        let edited = self.get_active_field_mut().map(|field| {
            field.push_char(c);
            field.name
        });
        if let Some(name) = edited {
            self.errors_mut().clear_field(name);
        }
    }

    fn backspace(&mut self) {
        let edited = self.get_active_field_mut().map(|field| {
            field.pop_char();
            field.name
        });
        if let Some(name) = edited {
            self.errors_mut().clear_field(name);
        }
    }

    fn toggle_reveal(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.toggle_reveal();
        }
    }
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    DeveloperLogin(DeveloperLoginForm),
    UserLogin(UserLoginForm),
    DeveloperSignup(DeveloperSignupForm),
    UserSignup(UserSignupForm),
    ForgotPassword(ForgotPasswordForm),
}

impl FormState {
    /// Fresh form for a view; non-form views get `None`
    pub fn for_view(view: &View) -> Self {
        match view {
            View::DeveloperLogin => FormState::DeveloperLogin(DeveloperLoginForm::new()),
            View::UserLogin => FormState::UserLogin(UserLoginForm::new()),
            View::DeveloperSignup => FormState::DeveloperSignup(DeveloperSignupForm::new()),
            View::UserSignup => FormState::UserSignup(UserSignupForm::new()),
            View::ForgotPassword => FormState::ForgotPassword(ForgotPasswordForm::new()),
            _ => FormState::None,
        }
    }

    pub fn as_form(&self) -> Option<&dyn Form> {
        match self {
            FormState::None => None,
            FormState::DeveloperLogin(f) => Some(f),
            FormState::UserLogin(f) => Some(f),
            FormState::DeveloperSignup(f) => Some(f),
            FormState::UserSignup(f) => Some(f),
            FormState::ForgotPassword(f) => Some(f),
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            FormState::None => None,
            FormState::DeveloperLogin(f) => Some(f),
            FormState::UserLogin(f) => Some(f),
            FormState::DeveloperSignup(f) => Some(f),
            FormState::UserSignup(f) => Some(f),
            FormState::ForgotPassword(f) => Some(f),
        }
    }

    pub fn next_field(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.next_field();
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.prev_field();
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.as_form_mut()?.get_active_field_mut()
    }

    pub fn is_action_row_active(&self) -> bool {
        self.as_form().is_some_and(|f| f.is_action_row_active())
    }

    /// Developer login is the only form with a transient loading state
    pub fn is_loading(&self) -> bool {
        matches!(self, FormState::DeveloperLogin(f) if f.loading)
    }

    /// Where Esc / the back arrow leads. `None` means "previous view".
    pub fn back_target(&self) -> Option<View> {
        match self {
            FormState::DeveloperLogin(_) | FormState::UserLogin(_) => Some(View::SelectType),
            FormState::DeveloperSignup(_) => Some(View::DeveloperLogin),
            FormState::UserSignup(_) => Some(View::UserLogin),
            FormState::ForgotPassword(_) | FormState::None => None,
        }
    }

    /// Destination of a navigation action, if it is one
    pub fn link_target(&self, action: FormAction) -> Option<View> {
        match (self, action) {
            (_, FormAction::ContinueWithGoogle) => Some(View::DeveloperDashboard),
            (_, FormAction::ForgotPassword) => Some(View::ForgotPassword),
            (_, FormAction::BackToLogin) => Some(View::DeveloperLogin),
            (FormState::DeveloperLogin(_), FormAction::CreateAccount) => {
                Some(View::DeveloperSignup)
            }
            (FormState::UserLogin(_), FormAction::CreateAccount) => Some(View::UserSignup),
            (FormState::UserSignup(_), FormAction::SignIn) => Some(View::UserLogin),
            (FormState::DeveloperSignup(_) | FormState::ForgotPassword(_), FormAction::SignIn) => {
                Some(View::DeveloperLogin)
            }
            _ => None,
        }
    }
}

/// Cursor shared by every form: active row and selected action button
#[derive(Debug, Clone, Copy, Default)]
pub struct FormCursor {
    pub active_field_index: usize,
    pub selected_action: usize,
}

fn email_field() -> FormField {
    FormField::text(FieldName::Email, "Email Address", "Enter your email").required()
}

fn full_name_field() -> FormField {
    FormField::text(FieldName::FullName, "Full Name", "Enter your full name").required()
}

fn password_field(placeholder: &'static str) -> FormField {
    FormField::text(FieldName::Password, "Password", placeholder)
        .required()
        .secret()
}

fn confirm_password_field() -> FormField {
    FormField::text(
        FieldName::ConfirmPassword,
        "Confirm Password",
        "Confirm your password",
    )
    .required()
    .secret()
}

fn login_errors(email: &FormField, password: &FormField) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.record(FieldName::Email, check_email(email.as_text()));
    errors.record(FieldName::Password, check_password(password.as_text()));
    errors
}

// Developer Login Form
#[derive(Debug, Clone)]
pub struct DeveloperLoginForm {
    pub email: FormField,
    pub password: FormField,
    pub cursor: FormCursor,
    pub errors: FieldErrors,
    /// Set while the simulated sign-in delay is pending
    pub loading: bool,
}

impl DeveloperLoginForm {
    pub fn new() -> Self {
        Self {
            email: email_field(),
            password: password_field("Enter your password"),
            cursor: FormCursor::default(),
            errors: FieldErrors::new(),
            loading: false,
        }
    }
}

impl Default for DeveloperLoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for DeveloperLoginForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.email, &self.password]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.email, &mut self.password]
    }
    fn active_field(&self) -> usize {
        self.cursor.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.cursor.active_field_index = index.min(2);
    }
    fn selected_action(&self) -> usize {
        self.cursor.selected_action
    }
    fn set_selected_action(&mut self, index: usize) {
        self.cursor.selected_action = index;
    }
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }
    fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }
    fn actions(&self) -> &'static [FormAction] {
        &[
            FormAction::Submit,
            FormAction::ContinueWithGoogle,
            FormAction::ForgotPassword,
            FormAction::CreateAccount,
        ]
    }
    fn submit_label(&self) -> &'static str {
        if self.loading {
            "Signing In..."
        } else {
            "Sign In"
        }
    }
    fn validate(&self) -> FieldErrors {
        login_errors(&self.email, &self.password)
    }
}

// Client ("user") Login Form
#[derive(Debug, Clone)]
pub struct UserLoginForm {
    pub email: FormField,
    pub password: FormField,
    pub cursor: FormCursor,
    pub errors: FieldErrors,
}

impl UserLoginForm {
    pub fn new() -> Self {
        Self {
            email: email_field(),
            password: password_field("Enter your password"),
            cursor: FormCursor::default(),
            errors: FieldErrors::new(),
        }
    }
}

impl Default for UserLoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for UserLoginForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.email, &self.password]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.email, &mut self.password]
    }
    fn active_field(&self) -> usize {
        self.cursor.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.cursor.active_field_index = index.min(2);
    }
    fn selected_action(&self) -> usize {
        self.cursor.selected_action
    }
    fn set_selected_action(&mut self, index: usize) {
        self.cursor.selected_action = index;
    }
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }
    fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }
    fn actions(&self) -> &'static [FormAction] {
        &[
            FormAction::Submit,
            FormAction::ContinueWithGoogle,
            FormAction::ForgotPassword,
            FormAction::CreateAccount,
        ]
    }
    fn submit_label(&self) -> &'static str {
        "Sign In"
    }
    fn validate(&self) -> FieldErrors {
        login_errors(&self.email, &self.password)
    }
}

// Developer Signup Form
#[derive(Debug, Clone)]
pub struct DeveloperSignupForm {
    pub full_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub tech_stack: FormField,
    pub github_url: FormField,
    pub linkedin_url: FormField,
    pub cursor: FormCursor,
    pub errors: FieldErrors,
}

impl DeveloperSignupForm {
    pub fn new() -> Self {
        Self {
            full_name: full_name_field(),
            email: email_field(),
            password: password_field("Create a password"),
            confirm_password: confirm_password_field(),
            tech_stack: FormField::text(
                FieldName::TechStack,
                "Tech Stack",
                "e.g., React, Node.js, Python, AWS",
            )
            .required(),
            github_url: FormField::text(
                FieldName::GithubUrl,
                "GitHub URL",
                "https://github.com/username",
            ),
            linkedin_url: FormField::text(
                FieldName::LinkedinUrl,
                "LinkedIn URL",
                "https://linkedin.com/in/username",
            ),
            cursor: FormCursor::default(),
            errors: FieldErrors::new(),
        }
    }
}

impl Default for DeveloperSignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for DeveloperSignupForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.full_name,
            &self.email,
            &self.password,
            &self.confirm_password,
            &self.tech_stack,
            &self.github_url,
            &self.linkedin_url,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.full_name,
            &mut self.email,
            &mut self.password,
            &mut self.confirm_password,
            &mut self.tech_stack,
            &mut self.github_url,
            &mut self.linkedin_url,
        ]
    }
    fn active_field(&self) -> usize {
        self.cursor.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.cursor.active_field_index = index.min(7);
    }
    fn selected_action(&self) -> usize {
        self.cursor.selected_action
    }
    fn set_selected_action(&mut self, index: usize) {
        self.cursor.selected_action = index;
    }
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }
    fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }
    fn actions(&self) -> &'static [FormAction] {
        &[
            FormAction::Submit,
            FormAction::ContinueWithGoogle,
            FormAction::SignIn,
        ]
    }
    fn submit_label(&self) -> &'static str {
        "Create Developer Account"
    }
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.record(
            FieldName::FullName,
            check_required(self.full_name.as_text(), FULL_NAME_REQUIRED),
        );
        errors.record(FieldName::Email, check_email(self.email.as_text()));
        errors.record(FieldName::Password, check_password(self.password.as_text()));
        errors.record(
            FieldName::ConfirmPassword,
            check_confirm_password(self.password.as_text(), self.confirm_password.as_text()),
        );
        errors.record(
            FieldName::TechStack,
            check_required(self.tech_stack.as_text(), TECH_STACK_REQUIRED),
        );
        errors.record(
            FieldName::GithubUrl,
            check_url_contains(self.github_url.as_text(), "github.com", GITHUB_URL_INVALID),
        );
        errors.record(
            FieldName::LinkedinUrl,
            check_url_contains(
                self.linkedin_url.as_text(),
                "linkedin.com",
                LINKEDIN_URL_INVALID,
            ),
        );
        errors
    }
}

// Client Signup Form
#[derive(Debug, Clone)]
pub struct UserSignupForm {
    pub full_name: FormField,
    pub email: FormField,
    pub company: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub cursor: FormCursor,
    pub errors: FieldErrors,
}

impl UserSignupForm {
    pub fn new() -> Self {
        Self {
            full_name: full_name_field(),
            email: email_field(),
            company: FormField::text(
                FieldName::Company,
                "Company (Optional)",
                "Enter your company name",
            ),
            password: password_field("Create a password"),
            confirm_password: confirm_password_field(),
            cursor: FormCursor::default(),
            errors: FieldErrors::new(),
        }
    }
}

impl Default for UserSignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for UserSignupForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.full_name,
            &self.email,
            &self.company,
            &self.password,
            &self.confirm_password,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.full_name,
            &mut self.email,
            &mut self.company,
            &mut self.password,
            &mut self.confirm_password,
        ]
    }
    fn active_field(&self) -> usize {
        self.cursor.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.cursor.active_field_index = index.min(5);
    }
    fn selected_action(&self) -> usize {
        self.cursor.selected_action
    }
    fn set_selected_action(&mut self, index: usize) {
        self.cursor.selected_action = index;
    }
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }
    fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }
    fn actions(&self) -> &'static [FormAction] {
        &[
            FormAction::Submit,
            FormAction::ContinueWithGoogle,
            FormAction::SignIn,
        ]
    }
    fn submit_label(&self) -> &'static str {
        "Create Client Account"
    }
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.record(
            FieldName::FullName,
            check_required(self.full_name.as_text(), FULL_NAME_REQUIRED),
        );
        errors.record(FieldName::Email, check_email(self.email.as_text()));
        errors.record(FieldName::Password, check_password(self.password.as_text()));
        errors.record(
            FieldName::ConfirmPassword,
            check_confirm_password(self.password.as_text(), self.confirm_password.as_text()),
        );
        errors
    }
}

// Password Recovery Form
#[derive(Debug, Clone)]
pub struct ForgotPasswordForm {
    pub email: FormField,
    pub cursor: FormCursor,
    pub errors: FieldErrors,
    /// The "Check Your Email" confirmation is showing
    pub submitted: bool,
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self {
            email: email_field(),
            cursor: FormCursor::default(),
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    /// Leave the confirmation and return to the form, keeping the email
    pub fn try_another_email(&mut self) {
        self.submitted = false;
        self.cursor = FormCursor::default();
    }
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ForgotPasswordForm {
    fn fields(&self) -> Vec<&FormField> {
        if self.submitted {
            vec![]
        } else {
            vec![&self.email]
        }
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        if self.submitted {
            vec![]
        } else {
            vec![&mut self.email]
        }
    }
    fn active_field(&self) -> usize {
        self.cursor.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.cursor.active_field_index = index.min(1);
    }
    fn selected_action(&self) -> usize {
        self.cursor.selected_action
    }
    fn set_selected_action(&mut self, index: usize) {
        self.cursor.selected_action = index;
    }
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }
    fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }
    fn actions(&self) -> &'static [FormAction] {
        if self.submitted {
            &[FormAction::TryAnotherEmail, FormAction::BackToLogin]
        } else {
            &[FormAction::Submit, FormAction::SignIn]
        }
    }
    fn submit_label(&self) -> &'static str {
        "Send Reset Link"
    }
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.record(FieldName::Email, check_email(self.email.as_text()));
        errors
    }
}
