//! Field rendering utilities for forms

use crate::platform::REVEAL_SHORTCUT;
use crate::state::FormField;
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its inline error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    error: Option<&str>,
    is_active: bool,
    palette: &Palette,
) {
    let border_color = if error.is_some() {
        palette.danger
    } else if is_active {
        palette.focus
    } else {
        palette.border
    };

    let display_value = field.display_value();
    let mut spans = if display_value.is_empty() {
        vec![Span::styled(
            field.placeholder,
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::styled(display_value, Style::default().fg(palette.text))]
    };
    if is_active {
        let cursor = Span::styled("▌", Style::default().fg(palette.focus));
        if field.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let mut block = Block::default()
        .title(Span::styled(
            format!(" {} ", field.display_label()),
            Style::default().fg(if is_active { palette.focus } else { palette.text }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    if field.secret && is_active {
        let state = if field.revealed { "hide" } else { "show" };
        block = block.title(
            Line::from(Span::styled(
                format!(" {REVEAL_SHORTCUT}: {state} "),
                Style::default().fg(palette.muted),
            ))
            .right_aligned(),
        );
    }

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if let Some(message) = error {
        if area.height > 3 {
            let error_area = Rect {
                y: area.y + 3,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" ⚠ {message}"),
                    Style::default().fg(palette.danger),
                )),
                error_area,
            );
        }
    }
}

/// First field index to draw so that `active` stays visible when only
/// `visible` fields fit
pub fn scroll_start(active: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let max_start = total - visible;
    active.saturating_sub(visible - 1).min(max_start)
}
