//! Application state definitions

use super::dashboard::DashboardState;
use super::forms::FormState;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Landing,
    SelectType,
    DeveloperLogin,
    UserLogin,
    DeveloperSignup,
    UserSignup,
    DeveloperDashboard,
    ForgotPassword,
}

/// Route table: every routable view and its path
pub const ROUTES: &[(View, &str)] = &[
    (View::Landing, "/"),
    (View::SelectType, "/select-type"),
    (View::DeveloperLogin, "/developer/login"),
    (View::UserLogin, "/user/login"),
    (View::DeveloperSignup, "/developer/signup"),
    (View::UserSignup, "/user/signup"),
    (View::DeveloperDashboard, "/developer/dashboard"),
    (View::ForgotPassword, "/forgot-password"),
];

impl View {
    /// Route path, `None` for the splash screen
    pub fn path(&self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(view, _)| view == self)
            .map(|(_, path)| *path)
    }

    /// Resolve a route path. Unknown paths resolve to `None`.
    pub fn from_path(path: &str) -> Option<View> {
        ROUTES
            .iter()
            .find(|(_, p)| *p == path)
            .map(|(view, _)| *view)
    }

    /// Check if this view is a form view
    pub fn is_form_view(&self) -> bool {
        matches!(
            self,
            View::DeveloperLogin
                | View::UserLogin
                | View::DeveloperSignup
                | View::UserSignup
                | View::ForgotPassword
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Splash => "DevConnect",
            View::Landing => "Home",
            View::SelectType => "Choose Your Journey",
            View::DeveloperLogin => "Developer Sign In",
            View::UserLogin => "Client Sign In",
            View::DeveloperSignup => "Join as a Developer",
            View::UserSignup => "Join as a Client",
            View::DeveloperDashboard => "Developer Dashboard",
            View::ForgotPassword => "Forgot Password",
        }
    }
}

/// Focusable elements on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingFocus {
    #[default]
    Search,
    GetStarted,
    SignIn,
}

impl LandingFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Search => Self::GetStarted,
            Self::GetStarted => Self::SignIn,
            Self::SignIn => Self::Search,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Search => Self::SignIn,
            Self::GetStarted => Self::Search,
            Self::SignIn => Self::GetStarted,
        }
    }
}

/// Landing page state
#[derive(Debug, Clone, Default)]
pub struct LandingState {
    pub search_query: String,
    pub focus: LandingFocus,
}

/// Card picked on the user type selection view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    Developer,
    Client,
}

impl UserType {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Developer => Self::Client,
            Self::Client => Self::Developer,
        }
    }

    /// Login view the card leads to
    pub fn login_view(&self) -> View {
        match self {
            Self::Developer => View::DeveloperLogin,
            Self::Client => View::UserLogin,
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Per-view state, rebuilt whenever its view is entered
    pub landing: LandingState,
    pub selected_user_type: UserType,
    pub form: FormState,
    pub dashboard: DashboardState,

    // Unexpected failures shown in the error dialog
    pub error_queue: VecDeque<String>,
}

impl AppState {
    /// Switch to a view with freshly mounted view state
    pub fn enter_view(&mut self, view: View) {
        self.current_view = view;
        self.form = FormState::for_view(&view);
        match view {
            View::Landing => self.landing = LandingState::default(),
            View::SelectType => self.selected_user_type = UserType::default(),
            View::DeveloperDashboard => self.dashboard = DashboardState::new(),
            _ => {}
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DashboardTab;

    mod routes {
        use super::*;

        #[test]
        fn test_every_route_round_trips() {
            for (view, path) in ROUTES {
                assert_eq!(view.path(), Some(*path));
                assert_eq!(View::from_path(path), Some(*view));
            }
        }

        #[test]
        fn test_splash_has_no_path() {
            assert_eq!(View::Splash.path(), None);
        }

        #[test]
        fn test_unknown_path_is_none() {
            assert_eq!(View::from_path("/admin"), None);
            assert_eq!(View::from_path(""), None);
            assert_eq!(View::from_path("/developer/login/"), None);
        }

        #[test]
        fn test_form_views() {
            assert!(View::DeveloperLogin.is_form_view());
            assert!(View::ForgotPassword.is_form_view());
            assert!(!View::Landing.is_form_view());
            assert!(!View::DeveloperDashboard.is_form_view());
        }
    }

    mod landing_focus {
        use super::*;

        #[test]
        fn test_next_and_prev_are_inverse() {
            let focus = LandingFocus::default();
            assert_eq!(focus.next().prev(), focus);
            assert_eq!(focus.next().next().next(), focus);
        }
    }

    mod user_type {
        use super::*;

        #[test]
        fn test_login_views() {
            assert_eq!(UserType::Developer.login_view(), View::DeveloperLogin);
            assert_eq!(UserType::Client.login_view(), View::UserLogin);
        }

        #[test]
        fn test_toggle() {
            assert_eq!(UserType::Developer.toggle(), UserType::Client);
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_enter_form_view_mounts_fresh_form() {
            let mut state = AppState::default();
            state.enter_view(View::DeveloperLogin);
            if let FormState::DeveloperLogin(f) = &mut state.form {
                f.email.set_text("dev@test.com");
            }
            state.enter_view(View::SelectType);
            assert!(matches!(state.form, FormState::None));
            state.enter_view(View::DeveloperLogin);
            let FormState::DeveloperLogin(f) = &state.form else {
                panic!("expected developer login form");
            };
            assert!(f.email.is_empty());
        }

        #[test]
        fn test_enter_dashboard_resets_tab() {
            let mut state = AppState::default();
            state.dashboard.select_tab(DashboardTab::Bids);
            state.enter_view(View::DeveloperDashboard);
            assert_eq!(state.dashboard.active_tab, DashboardTab::Overview);
        }

        #[test]
        fn test_error_queue_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
