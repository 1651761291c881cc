//! Account type selection: developer or client

use crate::app::App;
use crate::state::UserType;
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

struct Card {
    heading: &'static str,
    blurb: &'static str,
    bullets: [&'static str; 4],
    cta: &'static str,
    footnote: &'static str,
}

const DEVELOPER_CARD: Card = Card {
    heading: "I'm a Developer",
    blurb: "Showcase your skills, find exciting projects, and connect with clients \
            who need your expertise to build amazing things.",
    bullets: [
        "Create your developer profile",
        "Browse available projects",
        "Showcase your portfolio",
        "Get hired for your skills",
    ],
    cta: "Continue as Developer →",
    footnote: "Join 10,000+ developers already earning",
};

const CLIENT_CARD: Card = Card {
    heading: "I'm a Client",
    blurb: "Find talented developers to bring your ideas to life. Post projects \
            and collaborate with experts who understand your vision.",
    bullets: [
        "Post your project requirements",
        "Browse developer profiles",
        "Review portfolios and skills",
        "Hire the perfect match",
    ],
    cta: "Continue as Client →",
    footnote: "Trusted by 5,000+ successful projects",
};

/// Draw the selection view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .margin(1)
        .split(area);

    let heading = vec![
        Line::from(Span::styled(
            "Choose your path to success",
            Style::default().fg(palette.primary),
        )),
        Line::from(Span::styled(
            "Choose Your Journey",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tell us who you are to get started with DevConnect and unlock your potential",
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(heading)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let [developer, client] = Layout::horizontal([Constraint::Max(48), Constraint::Max(48)])
        .flex(Flex::Center)
        .spacing(2)
        .areas(chunks[1]);

    let selected = app.state.selected_user_type;
    draw_card(
        frame,
        developer,
        &DEVELOPER_CARD,
        selected == UserType::Developer,
        palette.primary,
        &palette,
    );
    draw_card(
        frame,
        client,
        &CLIENT_CARD,
        selected == UserType::Client,
        palette.secondary,
        &palette,
    );
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    card: &Card,
    is_selected: bool,
    accent: Color,
    palette: &Palette,
) {
    let border = if is_selected { palette.focus } else { palette.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border));

    let mut lines = vec![
        Line::from(Span::styled(
            card.heading,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(card.blurb, Style::default().fg(palette.muted))),
        Line::from(""),
    ];
    lines.extend(card.bullets.iter().map(|bullet| {
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(accent)),
            Span::styled(*bullet, Style::default().fg(palette.text)),
        ])
    }));
    lines.push(Line::from(""));

    let cta_style = if is_selected {
        Style::default()
            .fg(palette.focus)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(accent)
    };
    lines.push(Line::from(Span::styled(format!(" {} ", card.cta), cta_style)).centered());
    lines.push(
        Line::from(Span::styled(card.footnote, Style::default().fg(palette.muted))).centered(),
    );

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
