//! Sign-in, signup and password recovery screens
//!
//! Every form is drawn through the `Form` trait: heading, a scrolling column
//! of fields with inline errors, then the action row.

use super::field_renderer::{draw_field, scroll_start, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, FormAction, FormState};
use crate::theme::Palette;
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const FORM_WIDTH: u16 = 80;

/// Title and subtitle above a form
fn heading(form: &FormState) -> (&'static str, String) {
    match form {
        FormState::DeveloperLogin(_) => (
            "Welcome Back!",
            "Sign in to access your developer dashboard".to_string(),
        ),
        FormState::UserLogin(_) => (
            "Welcome Back!",
            "Sign in to find and hire developers".to_string(),
        ),
        FormState::DeveloperSignup(_) => (
            "Join as a Developer",
            "Create your profile and start finding projects".to_string(),
        ),
        FormState::UserSignup(_) => (
            "Join as a Client",
            "Create your account and find amazing developers".to_string(),
        ),
        FormState::ForgotPassword(f) if f.submitted => (
            "Check Your Email",
            format!("We've sent a password reset link to {}", f.email.as_text()),
        ),
        FormState::ForgotPassword(_) => (
            "Forgot Password?",
            "Enter your email to receive a password reset link".to_string(),
        ),
        FormState::None => ("", String::new()),
    }
}

/// Prompt shown beside a link action
fn link_prompt(form: &FormState, action: FormAction) -> Option<&'static str> {
    match (form, action) {
        (_, FormAction::CreateAccount) => Some("Don't have an account?"),
        (FormState::ForgotPassword(_), FormAction::SignIn) => Some("Remember your password?"),
        (_, FormAction::SignIn) => Some("Already have an account?"),
        (FormState::ForgotPassword(_), FormAction::TryAnotherEmail) => {
            Some("Didn't receive the email? Check your spam folder or try again.")
        }
        _ => None,
    }
}

fn action_label(form: &dyn Form, action: FormAction) -> &'static str {
    match action {
        FormAction::Submit => form.submit_label(),
        other => other.label(),
    }
}

/// Draw whichever form the current view holds
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let Some(form) = app.state.form.as_form() else {
        return;
    };

    let [column] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(column);
    frame.render_widget(block, column);

    let [heading_area, body_area, actions_area, prompt_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1),
    ])
    .horizontal_margin(1)
    .areas(inner);

    draw_heading(frame, heading_area, &app.state.form, &palette);

    if form.fields().is_empty() {
        draw_confirmation(frame, body_area, &palette);
    } else {
        draw_fields(frame, body_area, form, &palette);
    }

    draw_actions(frame, actions_area, form, app.state.form.is_loading(), &palette);
    draw_prompt(frame, prompt_area, &app.state.form, form, &palette);
}

fn draw_heading(frame: &mut Frame, area: Rect, state: &FormState, palette: &Palette) {
    let (title, subtitle) = heading(state);
    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(palette.muted))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &dyn Form, palette: &Palette) {
    let fields = form.fields();
    let visible = (area.height / FIELD_HEIGHT) as usize;
    let start = scroll_start(form.active_field(), fields.len(), visible);

    let mut y = area.y;
    for (index, field) in fields.iter().enumerate().skip(start).take(visible) {
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: FIELD_HEIGHT,
        };
        draw_field(
            frame,
            field_area,
            field,
            form.errors().get(field.name),
            form.active_field() == index,
            palette,
        );
        y += FIELD_HEIGHT;
    }

    // More fields below the fold
    if start + visible < fields.len() && area.height > 0 {
        let more = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled("▼ more", Style::default().fg(palette.muted)))
                .alignment(Alignment::Right),
            more,
        );
    }
}

fn draw_confirmation(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✉  Reset link sent",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn draw_actions(
    frame: &mut Frame,
    area: Rect,
    form: &dyn Form,
    loading: bool,
    palette: &Palette,
) {
    let actions = form.actions();
    let labels: Vec<&str> = actions.iter().map(|a| action_label(form, *a)).collect();
    let constraints = labels.iter().map(|label| Constraint::Length(button_width(label)));
    let cells = Layout::horizontal(constraints)
        .flex(Flex::Center)
        .spacing(1)
        .split(area);

    let on_action_row = form.is_action_row_active();

    for (index, ((action, label), cell)) in actions
        .iter()
        .zip(labels.iter())
        .zip(cells.iter())
        .enumerate()
    {
        let is_submit = *action == FormAction::Submit;
        let accent = match action {
            FormAction::Submit | FormAction::TryAnotherEmail => Some(palette.primary),
            FormAction::ContinueWithGoogle => Some(palette.warning),
            _ => Some(palette.secondary),
        };
        render_button(
            frame,
            *cell,
            label,
            on_action_row && form.selected_action() == index,
            !(is_submit && loading),
            accent,
            palette,
        );
    }
}

fn draw_prompt(
    frame: &mut Frame,
    area: Rect,
    state: &FormState,
    form: &dyn Form,
    palette: &Palette,
) {
    let prompt = form
        .current_action()
        .filter(|_| form.is_action_row_active())
        .and_then(|action| link_prompt(state, action))
        .or_else(|| {
            form.actions()
                .iter()
                .find_map(|action| link_prompt(state, *action))
        });
    if let Some(prompt) = prompt {
        frame.render_widget(
            Paragraph::new(Span::styled(prompt, Style::default().fg(palette.muted)))
                .alignment(Alignment::Center),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ForgotPasswordForm, View};

    #[test]
    fn test_headings_per_form() {
        let (title, subtitle) = heading(&FormState::for_view(&View::DeveloperLogin));
        assert_eq!(title, "Welcome Back!");
        assert_eq!(subtitle, "Sign in to access your developer dashboard");

        let (title, _) = heading(&FormState::for_view(&View::UserSignup));
        assert_eq!(title, "Join as a Client");
    }

    #[test]
    fn test_confirmation_heading_shows_email() {
        let mut form = ForgotPasswordForm::new();
        form.email.set_text("dev@test.com");
        form.submitted = true;
        let (title, subtitle) = heading(&FormState::ForgotPassword(form));
        assert_eq!(title, "Check Your Email");
        assert_eq!(subtitle, "We've sent a password reset link to dev@test.com");
    }

    #[test]
    fn test_link_prompts() {
        let login = FormState::for_view(&View::DeveloperLogin);
        assert_eq!(
            link_prompt(&login, FormAction::CreateAccount),
            Some("Don't have an account?")
        );
        let forgot = FormState::for_view(&View::ForgotPassword);
        assert_eq!(
            link_prompt(&forgot, FormAction::SignIn),
            Some("Remember your password?")
        );
        assert_eq!(link_prompt(&login, FormAction::Submit), None);
    }

    #[test]
    fn test_submit_button_uses_form_label() {
        let state = FormState::for_view(&View::DeveloperSignup);
        let form = state.as_form().unwrap();
        assert_eq!(
            action_label(form, FormAction::Submit),
            "Create Developer Account"
        );
        assert_eq!(
            action_label(form, FormAction::ContinueWithGoogle),
            "Continue with Google"
        );
    }
}
