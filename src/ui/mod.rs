//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod landing;
mod layout;
mod select_type;
mod splash;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    // Splash takes the whole screen
    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state, &palette);
        return;
    }

    let (header_area, content_area, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        view if view.is_form_view() => forms::draw(frame, content_area, app),
        View::SelectType => select_type::draw(frame, content_area, app),
        View::DeveloperDashboard => dashboard::draw(frame, content_area, app),
        _ => landing::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, &palette);
    }
}
