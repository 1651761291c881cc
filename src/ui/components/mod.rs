//! Reusable UI components

mod button;
mod dialog;

pub use button::{button_width, render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Rect of at most `width` x `height` centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
