//! Landing page: hero copy, search box, calls to action, stats and features

use super::components::{button_width, render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::LandingFocus;
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const FEATURES: [(&str, &str); 6] = [
    (
        "Connect with Talent",
        "Find skilled developers for your next project with our smart matching system",
    ),
    (
        "Showcase Skills",
        "Developers can display their expertise and build an impressive portfolio",
    ),
    (
        "Smart Matching",
        "AI-powered matching based on skills, experience, and project requirements",
    ),
    (
        "Secure Platform",
        "Enterprise-grade security with verified profiles and secure payments",
    ),
    (
        "Fast Delivery",
        "Quick project turnaround with milestone-based development process",
    ),
    (
        "Global Network",
        "Connect with developers and clients from around the world",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("10K+", "Active Developers"),
    ("5K+", "Projects Completed"),
    ("98%", "Success Rate"),
    ("24/7", "Support"),
];

const SEARCH_PLACEHOLDER: &str = "Search for developers, skills, or projects...";
const GET_STARTED: &str = "Get Started Today →";
const SIGN_IN: &str = "Sign In";

/// Draw the landing page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),             // Hero
            Constraint::Length(3),             // Search
            Constraint::Length(BUTTON_HEIGHT), // Calls to action
            Constraint::Length(3),             // Stats
            Constraint::Min(0),                // Features
        ])
        .horizontal_margin(2)
        .split(area);

    draw_hero(frame, chunks[0], &palette);
    draw_search(frame, chunks[1], app, &palette);
    draw_actions(frame, chunks[2], app.state.landing.focus, &palette);
    draw_stats(frame, chunks[3], &palette);
    draw_features(frame, chunks[4], &palette);
}

fn draw_hero(frame: &mut Frame, area: Rect, palette: &Palette) {
    let bold = Modifier::BOLD;
    let lines = vec![
        Line::from(Span::styled(
            "★ Trusted by 10,000+ developers worldwide",
            Style::default().fg(palette.primary),
        )),
        Line::from(vec![
            Span::styled("Connect ", Style::default().fg(palette.text).add_modifier(bold)),
            Span::styled("Developers", Style::default().fg(palette.primary).add_modifier(bold)),
            Span::styled(" with ", Style::default().fg(palette.text).add_modifier(bold)),
            Span::styled("Visionaries", Style::default().fg(palette.secondary).add_modifier(bold)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "The premier platform where innovative projects meet talented developers.",
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            "Build the future together.",
            Style::default().fg(palette.accent).add_modifier(bold),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_search(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let is_active = app.state.landing.focus == LandingFocus::Search;
    let query = &app.state.landing.search_query;
    let [search_area] = Layout::horizontal([Constraint::Max(72)])
        .flex(Flex::Center)
        .areas(area);

    let content = if query.is_empty() && !is_active {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(palette.muted)))
    } else {
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(query.as_str(), Style::default().fg(palette.text)),
            Span::styled(cursor, Style::default().fg(palette.focus)),
        ])
    };

    let border = if is_active { palette.focus } else { palette.border };
    let block = Block::default()
        .title(" 🔍 Search ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(content).block(block), search_area);
}

fn draw_actions(frame: &mut Frame, area: Rect, focus: LandingFocus, palette: &Palette) {
    let [get_started, sign_in] = Layout::horizontal([
        Constraint::Length(button_width(GET_STARTED)),
        Constraint::Length(button_width(SIGN_IN)),
    ])
    .flex(Flex::Center)
    .spacing(2)
    .areas(area);

    render_button(
        frame,
        get_started,
        GET_STARTED,
        focus == LandingFocus::GetStarted,
        true,
        Some(palette.primary),
        palette,
    );
    render_button(
        frame,
        sign_in,
        SIGN_IN,
        focus == LandingFocus::SignIn,
        true,
        None,
        palette,
    );
}

fn draw_stats(frame: &mut Frame, area: Rect, palette: &Palette) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((number, label), column) in STATS.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                *number,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(palette.muted))),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *column,
        );
    }
}

fn draw_features(frame: &mut Frame, area: Rect, palette: &Palette) {
    let rows = Layout::vertical([Constraint::Length(5), Constraint::Length(5)]).split(area);
    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(*row);
        for (col_index, cell) in cells.iter().enumerate() {
            let (title, description) = FEATURES[row_index * 3 + col_index];
            let block = Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border));
            let body = Paragraph::new(description)
                .style(Style::default().fg(palette.muted))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(body, *cell);
        }
    }
}
