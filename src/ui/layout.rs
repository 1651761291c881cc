//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, REVEAL_SHORTCUT, THEME_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header: logo, page title and the theme indicator
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(
            " </> ",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "DevConnect",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if app.state.current_view != View::Landing {
        spans.push(Span::styled(
            format!("  ›  {}", app.state.current_view.title()),
            Style::default().fg(palette.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    let theme = app.theme.theme();
    let indicator = format!("{} {theme} ", theme.symbol());
    let width = indicator.chars().count() as u16;
    let indicator_area = Rect {
        x: inner.x + inner.width.saturating_sub(width),
        y: inner.y,
        width: width.min(inner.width),
        height: 1.min(inner.height),
    };
    frame.render_widget(
        Paragraph::new(indicator).style(Style::default().fg(palette.warning)),
        indicator_area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let mut spans = vec![];

    // Route path
    if let Some(path) = app.state.current_view.path() {
        spans.push(Span::styled(
            format!(" {path} "),
            Style::default().fg(palette.primary),
        ));
    }

    // View-specific hints
    let hints = get_view_hints(app.state.current_view, app.state.form.is_action_row_active());
    spans.push(Span::styled(
        format!(" {hints}"),
        Style::default().fg(palette.muted),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.accent)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: area.height,
    };
    let quit_widget = Paragraph::new(quit_hint)
        .style(Style::default().bg(palette.surface).fg(palette.muted));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View, on_action_row: bool) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Landing => format!("Tab:focus  Enter:select  {THEME_SHORTCUT}:theme  Esc:quit"),
        View::SelectType => "←/→:choose  Enter:continue  Esc:home".to_string(),
        View::DeveloperLogin
        | View::UserLogin
        | View::DeveloperSignup
        | View::UserSignup
        | View::ForgotPassword => {
            if on_action_row {
                "←/→:choose  Enter:activate  Tab:fields  Esc:back".to_string()
            } else {
                format!("Tab:next  Enter:submit  {REVEAL_SHORTCUT}:show password  Esc:back")
            }
        }
        View::DeveloperDashboard => {
            "j/k:nav  1-5:tab  Tab/Space:settings  L:logout".to_string()
        }
    }
}
