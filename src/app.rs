//! Application state and core logic

use crate::backend::{AccountId, AuthBackend, AuthError, Session, StubBackend};
use crate::config::{LaunchOptions, TuiConfig};
use crate::platform::{is_shortcut, REVEAL_KEY, THEME_KEY};
use crate::state::{
    submit, AppState, BackendRequest, DashboardTab, FormAction, FormCursor, FormState,
    LandingFocus, SplashState, SubmitOutcome, Transition, View,
};
use crate::theme::ThemeContext;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// What the backend handed back for an accepted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendResponse {
    Session(Session),
    Account(AccountId),
    ResetLinkSent,
}

/// Events produced off the UI loop
#[derive(Debug)]
pub enum AppEvent {
    /// The delayed developer sign-in finished
    LoginSettled {
        attempt: u64,
        target: View,
        result: Result<BackendResponse, AuthError>,
    },
}

/// Issue a backend request
async fn dispatch(
    backend: &dyn AuthBackend,
    request: BackendRequest,
) -> Result<BackendResponse, AuthError> {
    match request {
        BackendRequest::Credentials {
            role,
            email,
            password,
        } => backend
            .submit_credentials(role, &email, &password)
            .await
            .map(BackendResponse::Session),
        BackendRequest::Signup(profile) => backend
            .submit_signup(profile)
            .await
            .map(BackendResponse::Account),
        BackendRequest::PasswordReset { email } => backend
            .request_password_reset(&email)
            .await
            .map(|()| BackendResponse::ResetLinkSent),
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Light/dark theme, read by every draw call
    pub theme: ThemeContext,
    pub config: TuiConfig,
    /// Where the config is saved when the theme is remembered
    config_path: Option<PathBuf>,
    backend: Arc<dyn AuthBackend>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Incremented for every delayed sign-in so stale results can be told apart
    login_attempt: u64,
    login_delay: Duration,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// View shown once the splash finishes
    start_view: View,
    /// Session from the last successful sign-in
    pub session: Option<Session>,
}

impl App {
    /// Create the app with the stub backend and the saved configuration
    pub fn new(config: TuiConfig, options: &LaunchOptions) -> Self {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        let theme = ThemeContext::resolve(options.theme, config.theme, colorfgbg.as_deref());
        let show_splash = options.shows_splash(&config);
        tracing::info!(theme = %theme.theme(), source = ?theme.source(), "Theme resolved");

        let mut app = Self::with_backend(
            Arc::new(StubBackend::new()),
            config,
            theme,
            options.start_view(),
            show_splash,
        );
        app.config_path = TuiConfig::config_path();
        app
    }

    pub fn with_backend(
        backend: Arc<dyn AuthBackend>,
        config: TuiConfig,
        theme: ThemeContext,
        start_view: View,
        show_splash: bool,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        state.enter_view(if show_splash { View::Splash } else { start_view });
        let login_delay = config.login_delay();

        Self {
            state,
            theme,
            config,
            config_path: None,
            backend,
            events_tx,
            events_rx,
            login_attempt: 0,
            login_delay,
            quit: false,
            status_message: None,
            splash_state: show_splash.then(SplashState::new),
            start_view,
            session: None,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.enter_view(self.start_view);
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// A delayed sign-in is pending
    pub fn is_busy(&self) -> bool {
        self.state.form.is_loading()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if self.in_splash() {
            self.handle_splash_key(key);
            return Ok(());
        }

        if is_shortcut(&key, THEME_KEY) {
            self.toggle_theme();
            return Ok(());
        }

        match self.state.current_view {
            view if view.is_form_view() => self.handle_form_key(key).await,
            View::Landing => self.handle_landing_key(key),
            View::SelectType => self.handle_select_type_key(key),
            View::DeveloperDashboard => self.handle_dashboard_key(key),
            _ => self.handle_splash_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if !self.in_splash() {
            self.state.view_history.push(self.state.current_view);
        }
        tracing::info!(from = ?self.state.current_view, to = ?view, "Navigate");
        self.state.enter_view(view);
    }

    /// Go back to previous view, or to `fallback` when there is none
    pub fn go_back(&mut self, fallback: View) {
        let view = self.state.view_history.pop().unwrap_or(fallback);
        tracing::info!(from = ?self.state.current_view, to = ?view, "Navigate back");
        self.state.enter_view(view);
    }

    /// Flip light/dark and persist it when the user asked for that
    pub fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        self.status_message = Some(format!("Switched to {theme} theme"));

        if !self.config.remembers_theme() {
            return;
        }
        self.config.theme = Some(theme);
        if let Some(path) = self.config_path.clone() {
            if let Err(err) = self.config.save_to(&path) {
                tracing::warn!(error = %err, "Failed to save theme preference");
                self.push_error(format!("Could not save theme preference: {err}"));
            }
        }
    }

    /// Sign out and return to the landing page
    pub fn logout(&mut self) {
        tracing::info!("Signed out");
        self.session = None;
        self.state.view_history.clear();
        self.state.enter_view(View::Landing);
        self.status_message = Some("Signed out".to_string());
    }

    /// Apply events that finished since the last tick
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Wait for the next event
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginSettled {
                attempt,
                target,
                result,
            } => {
                let still_waiting = attempt == self.login_attempt
                    && self.state.current_view == View::DeveloperLogin
                    && self.state.form.is_loading();
                if !still_waiting {
                    tracing::debug!(attempt, "Discarding stale sign-in result");
                    return;
                }

                match result {
                    Ok(response) => {
                        self.record_response(response);
                        self.navigate(target);
                    }
                    Err(err) => {
                        if let FormState::DeveloperLogin(form) = &mut self.state.form {
                            form.loading = false;
                        }
                        self.report_backend_error(err);
                    }
                }
            }
        }
    }

    fn record_response(&mut self, response: BackendResponse) {
        match response {
            BackendResponse::Session(session) => {
                tracing::info!(role = session.role.label(), "Signed in");
                self.session = Some(session);
            }
            BackendResponse::Account(id) => {
                tracing::info!(account_id = %id, "Account created");
            }
            BackendResponse::ResetLinkSent => {}
        }
    }

    fn report_backend_error(&mut self, err: AuthError) {
        tracing::warn!(error = %err, "Backend request failed");
        self.push_error(err.to_string());
    }

    /// Validate the active form and act on the outcome
    pub async fn submit_active_form(&mut self) {
        let view = self.state.current_view;
        match submit(&mut self.state.form, self.login_delay) {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Invalid { error_count } => {
                tracing::info!(?view, error_count, "Submission halted by validation");
            }
            SubmitOutcome::Accepted {
                request,
                transition,
            } => {
                tracing::info!(?view, "Form submitted");
                match transition {
                    Transition::Deferred { delay, target } => {
                        self.spawn_deferred(request, delay, target);
                    }
                    transition => match dispatch(self.backend.as_ref(), request).await {
                        Ok(response) => {
                            self.record_response(response);
                            self.apply_transition(transition);
                        }
                        Err(err) => self.report_backend_error(err),
                    },
                }
            }
        }
    }

    /// Sleep off the simulated latency on a background task, then report back
    fn spawn_deferred(&mut self, request: BackendRequest, delay: Duration, target: View) {
        self.login_attempt += 1;
        let attempt = self.login_attempt;
        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = dispatch(backend.as_ref(), request).await;
            // The receiver lives as long as the app
            let _ = tx.send(AppEvent::LoginSettled {
                attempt,
                target,
                result,
            });
        });
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Navigate(view) | Transition::Deferred { target: view, .. } => {
                self.navigate(view)
            }
            Transition::ResetLinkSent => {
                if let FormState::ForgotPassword(form) = &mut self.state.form {
                    form.submitted = true;
                    form.cursor = FormCursor::default();
                }
            }
        }
    }

    /// Run a button or link from a form's action row
    async fn run_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Submit => self.submit_active_form().await,
            FormAction::TryAnotherEmail => {
                if let FormState::ForgotPassword(form) = &mut self.state.form {
                    form.try_another_email();
                }
            }
            FormAction::ContinueWithGoogle => {
                tracing::info!(view = ?self.state.current_view, "Continue with Google");
                self.navigate(View::DeveloperDashboard);
            }
            action => {
                if let Some(target) = self.state.form.link_target(action) {
                    self.navigate(target);
                }
            }
        }
    }

    /// Leave a form the way its back arrow does
    fn leave_form(&mut self) {
        match self.state.form.back_target() {
            Some(view) => self.navigate(view),
            None => self.go_back(View::DeveloperLogin),
        }
    }

    /// Handle keys in Splash screen
    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        let landing = &mut self.state.landing;
        match key.code {
            KeyCode::Tab | KeyCode::Down => landing.focus = landing.focus.next(),
            KeyCode::BackTab | KeyCode::Up => landing.focus = landing.focus.prev(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter => match landing.focus {
                LandingFocus::Search => {
                    let query = landing.search_query.clone();
                    tracing::info!("Searching for: {query}");
                    self.status_message = Some(format!("Searching for: {query}"));
                }
                LandingFocus::GetStarted | LandingFocus::SignIn => {
                    self.navigate(View::SelectType);
                }
            },
            KeyCode::Char(c)
                if landing.focus == LandingFocus::Search
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                landing.search_query.push(c);
            }
            KeyCode::Backspace if landing.focus == LandingFocus::Search => {
                landing.search_query.pop();
            }
            _ => {}
        }
    }

    fn handle_select_type_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.state.selected_user_type = self.state.selected_user_type.toggle();
            }
            KeyCode::Enter => {
                let view = self.state.selected_user_type.login_view();
                self.navigate(view);
            }
            KeyCode::Esc => self.navigate(View::Landing),
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        if is_shortcut(&key, REVEAL_KEY) {
            if let Some(form) = self.state.form.as_form_mut() {
                form.toggle_reveal();
            }
            return;
        }

        let on_action_row = self.state.form.is_action_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if on_action_row => {
                if let Some(form) = self.state.form.as_form_mut() {
                    form.prev_action();
                }
            }
            KeyCode::Right if on_action_row => {
                if let Some(form) = self.state.form.as_form_mut() {
                    form.next_action();
                }
            }
            KeyCode::Enter => {
                let action = if on_action_row {
                    self.state.form.as_form().and_then(|f| f.current_action())
                } else {
                    Some(FormAction::Submit)
                };
                if let Some(action) = action {
                    self.run_form_action(action).await;
                }
            }
            KeyCode::Esc => self.leave_form(),
            KeyCode::Char(c)
                if !on_action_row && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                if let Some(form) = self.state.form.as_form_mut() {
                    form.input_char(c);
                }
            }
            KeyCode::Backspace if !on_action_row => {
                if let Some(form) = self.state.form.as_form_mut() {
                    form.backspace();
                }
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let dashboard = &mut self.state.dashboard;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => dashboard.next_tab(),
            KeyCode::Up | KeyCode::Char('k') => dashboard.prev_tab(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = DashboardTab::from_index(index) {
                    dashboard.select_tab(tab);
                }
            }
            KeyCode::Tab if dashboard.active_tab == DashboardTab::Settings => {
                dashboard.move_setting_down();
            }
            KeyCode::BackTab if dashboard.active_tab == DashboardTab::Settings => {
                dashboard.move_setting_up();
            }
            KeyCode::Char(' ') if dashboard.active_tab == DashboardTab::Settings => {
                dashboard.toggle_selected_setting();
            }
            KeyCode::Char('L') => self.logout(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AccountRole, MockAuthBackend};
    use crate::state::FieldName;
    use crate::theme::{Theme, ThemeSource};

    fn app_at(view: View) -> App {
        App::with_backend(
            Arc::new(StubBackend::new()),
            TuiConfig::default(),
            ThemeContext::default(),
            view,
            false,
        )
    }

    fn app_with_mock(view: View, backend: MockAuthBackend) -> App {
        App::with_backend(
            Arc::new(backend),
            TuiConfig::default(),
            ThemeContext::default(),
            view,
            false,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).await.unwrap();
    }

    fn form_errors(app: &App) -> Vec<(FieldName, String)> {
        app.state
            .form
            .as_form()
            .map(|f| {
                f.errors()
                    .iter()
                    .map(|(name, msg)| (name, msg.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    mod app_basic_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_at_start_view_without_splash() {
            let app = app_at(View::UserSignup);
            assert_eq!(app.state.current_view, View::UserSignup);
            assert!(matches!(app.state.form, FormState::UserSignup(_)));
            assert!(app.splash_state.is_none());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_splash_then_start_view() {
            let mut app = App::with_backend(
                Arc::new(StubBackend::new()),
                TuiConfig::default(),
                ThemeContext::default(),
                View::DeveloperLogin,
                true,
            );
            assert!(app.in_splash());
            assert!(!app.update_splash(40));

            if let Some(splash) = app.splash_state.as_mut() {
                splash.skip();
            }
            assert!(app.update_splash(40));
            assert_eq!(app.state.current_view, View::DeveloperLogin);
            assert!(app.state.view_history.is_empty());
        }

        #[tokio::test]
        async fn test_any_key_skips_splash() {
            let mut app = App::with_backend(
                Arc::new(StubBackend::new()),
                TuiConfig::default(),
                ThemeContext::default(),
                View::Landing,
                true,
            );
            app.handle_key(ctrl('t')).await.unwrap();
            assert_eq!(app.theme.theme(), Theme::Dark);
            assert!(app.update_splash(40));
            assert_eq!(app.state.current_view, View::Landing);
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app_at(View::Landing);
            app.push_error("boom");
            press(&mut app, KeyCode::Char('x')).await;
            assert_eq!(app.state.landing.search_query, "");
            press(&mut app, KeyCode::Esc).await;
            assert!(!app.state.has_errors());
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_esc_on_landing_quits() {
            let mut app = app_at(View::Landing);
            press(&mut app, KeyCode::Esc).await;
            assert!(app.should_quit());
        }
    }

    mod theme_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_ctrl_t_toggles_everywhere() {
            let mut app = app_at(View::DeveloperSignup);
            assert!(app.theme.is_dark());
            app.handle_key(ctrl('t')).await.unwrap();
            assert_eq!(app.theme.theme(), Theme::Light);
            assert_eq!(app.theme.source(), ThemeSource::Toggled);
            assert!(app.state.form.as_form().unwrap().value_of(FieldName::FullName).is_empty());

            app.navigate(View::DeveloperDashboard);
            app.handle_key(ctrl('t')).await.unwrap();
            assert!(app.theme.is_dark());
        }

        #[test]
        fn test_toggle_without_remember_leaves_config() {
            let mut app = app_at(View::Landing);
            app.toggle_theme();
            assert_eq!(app.config.theme, None);
        }

        #[test]
        fn test_remembered_theme_is_saved() {
            let dir = std::env::temp_dir().join(format!("devconnect-app-{}", uuid::Uuid::new_v4()));
            let path = dir.join("config.json");
            let config = TuiConfig {
                remember_theme: Some(true),
                ..Default::default()
            };
            let mut app = App::with_backend(
                Arc::new(StubBackend::new()),
                config,
                ThemeContext::default(),
                View::Landing,
                false,
            );
            app.config_path = Some(path.clone());

            app.toggle_theme();

            let saved = TuiConfig::load_from(&path).unwrap();
            assert_eq!(saved.theme, Some(Theme::Light));
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    mod navigation_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_landing_to_login_flow() {
            let mut app = app_at(View::Landing);
            press(&mut app, KeyCode::Tab).await;
            assert_eq!(app.state.landing.focus, LandingFocus::GetStarted);
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::SelectType);

            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::UserLogin);
            assert_eq!(app.state.view_history, vec![View::Landing, View::SelectType]);
        }

        #[tokio::test]
        async fn test_landing_search_only_logs() {
            let mut app = app_at(View::Landing);
            type_text(&mut app, "rust").await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::Landing);
            assert_eq!(app.status_message.as_deref(), Some("Searching for: rust"));
        }

        #[tokio::test]
        async fn test_select_type_esc_goes_home() {
            let mut app = app_at(View::SelectType);
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::Landing);
        }

        #[tokio::test]
        async fn test_form_back_targets() {
            let mut app = app_at(View::DeveloperSignup);
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::DeveloperLogin);
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::SelectType);

            let mut app = app_at(View::UserSignup);
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::UserLogin);
        }

        #[tokio::test]
        async fn test_forgot_password_back_uses_history() {
            let mut app = app_at(View::UserLogin);
            app.navigate(View::ForgotPassword);
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::UserLogin);

            let mut app = app_at(View::ForgotPassword);
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::DeveloperLogin);
        }

        #[tokio::test]
        async fn test_action_row_links() {
            let mut app = app_at(View::DeveloperLogin);
            press(&mut app, KeyCode::BackTab).await;
            assert!(app.state.form.is_action_row_active());
            // Submit, Google, Forgot password, Sign up
            press(&mut app, KeyCode::Left).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::DeveloperSignup);
        }

        #[tokio::test]
        async fn test_continue_with_google_skips_validation() {
            let mut app = app_at(View::UserSignup);
            press(&mut app, KeyCode::BackTab).await;
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::DeveloperDashboard);
        }

        #[tokio::test]
        async fn test_reentering_form_resets_it() {
            let mut app = app_at(View::DeveloperLogin);
            type_text(&mut app, "dev@test.com").await;
            press(&mut app, KeyCode::Esc).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::DeveloperLogin);
            assert!(app
                .state
                .form
                .as_form()
                .unwrap()
                .value_of(FieldName::Email)
                .is_empty());
        }
    }

    mod form_input_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_and_backspace() {
            let mut app = app_at(View::UserLogin);
            type_text(&mut app, "abc").await;
            press(&mut app, KeyCode::Backspace).await;
            let form = app.state.form.as_form().unwrap();
            assert_eq!(form.value_of(FieldName::Email), "ab");
        }

        #[tokio::test]
        async fn test_ctrl_r_reveals_password() {
            let mut app = app_at(View::DeveloperLogin);
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "secret1").await;
            let masked = app.state.form.as_form().unwrap().fields()[1].display_value();
            assert_eq!(masked, "•••••••");

            app.handle_key(ctrl('r')).await.unwrap();
            let shown = app.state.form.as_form().unwrap().fields()[1].display_value();
            assert_eq!(shown, "secret1");
            assert_eq!(
                app.state.form.as_form().unwrap().value_of(FieldName::Password),
                "secret1"
            );
        }

        #[tokio::test]
        async fn test_empty_submit_shows_errors_and_stays() {
            let mut app = app_at(View::DeveloperSignup);
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::DeveloperSignup);
            assert_eq!(form_errors(&app).len(), 5);
        }
    }

    mod submission_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_developer_login_waits_then_lands_on_dashboard() {
            let mut app = app_at(View::DeveloperLogin);
            type_text(&mut app, "dev@test.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "secret1").await;

            let started = tokio::time::Instant::now();
            press(&mut app, KeyCode::Enter).await;

            assert!(form_errors(&app).is_empty());
            assert!(app.is_busy());
            assert_eq!(app.state.form.as_form().unwrap().submit_label(), "Signing In...");
            assert_eq!(app.state.current_view, View::DeveloperLogin);

            // Submitting again while loading does nothing
            press(&mut app, KeyCode::Enter).await;

            let event = app.next_event().await.unwrap();
            assert!(started.elapsed() >= crate::state::DEFAULT_LOGIN_DELAY);
            app.apply_event(event);

            assert_eq!(app.state.current_view, View::DeveloperDashboard);
            let session = app.session.as_ref().unwrap();
            assert_eq!(session.role, AccountRole::Developer);
            assert_eq!(session.email, "dev@test.com");
        }

        #[tokio::test(start_paused = true)]
        async fn test_login_result_after_leaving_is_discarded() {
            let mut app = app_at(View::DeveloperLogin);
            type_text(&mut app, "dev@test.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "secret1").await;
            press(&mut app, KeyCode::Enter).await;

            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::SelectType);

            let event = app.next_event().await.unwrap();
            app.apply_event(event);
            assert_eq!(app.state.current_view, View::SelectType);
            assert!(app.session.is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_failed_delayed_login_shows_error() {
            let mut backend = MockAuthBackend::new();
            backend
                .expect_submit_credentials()
                .times(1)
                .returning(|_, _, _| Err(AuthError::Rejected));
            let mut app = app_with_mock(View::DeveloperLogin, backend);
            type_text(&mut app, "dev@test.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "secret1").await;
            press(&mut app, KeyCode::Enter).await;

            let event = app.next_event().await.unwrap();
            app.apply_event(event);

            assert_eq!(app.state.current_view, View::DeveloperLogin);
            assert!(!app.is_busy());
            assert_eq!(app.state.current_error(), Some("Credentials were rejected"));
        }

        #[tokio::test]
        async fn test_client_signup_missing_confirm() {
            let mut backend = MockAuthBackend::new();
            backend.expect_submit_signup().never();
            let mut app = app_with_mock(View::UserSignup, backend);

            type_text(&mut app, "Ada Lovelace").await;
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "ada@client.io").await;
            press(&mut app, KeyCode::Tab).await;
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "secret1").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::UserSignup);
            assert_eq!(
                form_errors(&app),
                vec![(
                    FieldName::ConfirmPassword,
                    "Please confirm your password".to_string()
                )]
            );
        }

        #[tokio::test]
        async fn test_user_login_navigates_immediately() {
            let mut app = app_at(View::UserLogin);
            type_text(&mut app, "client@test.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "secret1").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::DeveloperDashboard);
            assert_eq!(app.session.as_ref().map(|s| s.role), Some(AccountRole::Client));
        }

        #[tokio::test]
        async fn test_backend_failure_blocks_navigation() {
            let mut backend = MockAuthBackend::new();
            backend
                .expect_submit_credentials()
                .returning(|_, _, _| Err(AuthError::Unavailable("down".to_string())));
            let mut app = app_with_mock(View::UserLogin, backend);
            type_text(&mut app, "client@test.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "secret1").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::UserLogin);
            assert_eq!(
                app.state.current_error(),
                Some("Account service unavailable: down")
            );
        }

        #[tokio::test]
        async fn test_forgot_password_confirmation_cycle() {
            let mut backend = MockAuthBackend::new();
            backend
                .expect_request_password_reset()
                .withf(|email| email.to_string() == "dev@test.com")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with_mock(View::ForgotPassword, backend);

            type_text(&mut app, "dev@test.com").await;
            press(&mut app, KeyCode::Enter).await;

            let FormState::ForgotPassword(form) = &app.state.form else {
                panic!("expected forgot password form");
            };
            assert!(form.submitted);
            assert!(app.state.form.is_action_row_active());

            // Try Another Email
            press(&mut app, KeyCode::Enter).await;
            let FormState::ForgotPassword(form) = &app.state.form else {
                panic!("expected forgot password form");
            };
            assert!(!form.submitted);
            assert_eq!(form.email.as_text(), "dev@test.com");
        }

        #[tokio::test]
        async fn test_back_to_login_from_confirmation() {
            let mut app = app_at(View::ForgotPassword);
            type_text(&mut app, "dev@test.com").await;
            press(&mut app, KeyCode::Enter).await;
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::DeveloperLogin);
        }
    }

    mod dashboard_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_tab_keys() {
            let mut app = app_at(View::DeveloperDashboard);
            press(&mut app, KeyCode::Char('j')).await;
            assert_eq!(app.state.dashboard.active_tab, DashboardTab::Projects);
            press(&mut app, KeyCode::Char('3')).await;
            assert_eq!(app.state.dashboard.active_tab, DashboardTab::Bids);
            press(&mut app, KeyCode::Char('k')).await;
            assert_eq!(app.state.dashboard.active_tab, DashboardTab::Projects);
            press(&mut app, KeyCode::Char('9')).await;
            assert_eq!(app.state.dashboard.active_tab, DashboardTab::Projects);
        }

        #[tokio::test]
        async fn test_settings_toggle_only_on_settings_tab() {
            let mut app = app_at(View::DeveloperDashboard);
            press(&mut app, KeyCode::Char(' ')).await;
            assert!(app.state.dashboard.settings[0].enabled);

            press(&mut app, KeyCode::Char('5')).await;
            press(&mut app, KeyCode::Char(' ')).await;
            assert!(!app.state.dashboard.settings[0].enabled);
            press(&mut app, KeyCode::Tab).await;
            assert_eq!(app.state.dashboard.selected_setting, 1);
        }

        #[tokio::test]
        async fn test_logout_returns_to_landing() {
            let mut app = app_at(View::UserLogin);
            app.navigate(View::DeveloperDashboard);
            press(&mut app, KeyCode::Char('L')).await;
            assert_eq!(app.state.current_view, View::Landing);
            assert!(app.state.view_history.is_empty());
            assert!(app.session.is_none());
        }

        #[tokio::test]
        async fn test_lowercase_l_keeps_session() {
            let mut app = app_at(View::UserLogin);
            app.navigate(View::DeveloperDashboard);
            press(&mut app, KeyCode::Char('l')).await;
            assert_eq!(app.state.current_view, View::DeveloperDashboard);
            assert_eq!(app.state.view_history, vec![View::UserLogin]);
        }
    }
}
