//! Splash screen rendering with block letter logo

use crate::state::SplashState;
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO_TEXT: &str = "DEVCONNECT";
const GLYPH_ROWS: usize = 5;
const TAGLINE: &str = "Where developers and clients meet";

fn glyph(c: char) -> [&'static str; GLYPH_ROWS] {
    match c {
        'D' => ["████ ", "█   █", "█   █", "█   █", "████ "],
        'E' => ["█████", "█    ", "████ ", "█    ", "█████"],
        'V' => ["█   █", "█   █", "█   █", " █ █ ", "  █  "],
        'C' => [" ████", "█    ", "█    ", "█    ", " ████"],
        'O' => [" ███ ", "█   █", "█   █", "█   █", " ███ "],
        'N' => ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
        'T' => ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
        _ => ["     "; GLYPH_ROWS],
    }
}

/// "DEV" in the primary colour, "CONNECT" in the secondary
fn build_logo(palette: &Palette) -> Vec<Line<'static>> {
    (0..GLYPH_ROWS)
        .map(|row| {
            let spans: Vec<Span> = LOGO_TEXT
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    let color = if i < 3 {
                        palette.primary
                    } else {
                        palette.secondary
                    };
                    let text = if i + 1 < LOGO_TEXT.len() {
                        format!("{} ", glyph(c)[row])
                    } else {
                        glyph(c)[row].to_string()
                    };
                    Span::styled(text, Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn logo_width() -> u16 {
    let letters = LOGO_TEXT.len() as u16;
    letters * 5 + letters.saturating_sub(1)
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState, palette: &Palette) {
    let mut lines = build_logo(palette);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{TAGLINE:^width$}", width = logo_width() as usize),
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC),
    )));

    let logo_height = lines.len() as u16;
    let logo_width = logo_width();

    // Center position with scroll offset (can go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < area.y as i32 {
        (area.y as i32 - y_pos) as usize
    } else {
        0
    };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if lines_off_top > 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Skip hint at the bottom while the logo is still
    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(palette.muted))),
            hint_area,
        );
    }
}
