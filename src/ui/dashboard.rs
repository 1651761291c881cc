//! Developer dashboard: sidebar tabs and one panel per tab

use crate::app::App;
use crate::state::{
    format_usd, DashboardState, DashboardTab, SettingGroup, StatusTone, OVERVIEW_STATS,
};
use crate::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 28;

fn tone_color(tone: StatusTone, palette: &Palette) -> Color {
    match tone {
        StatusTone::Accent => palette.accent,
        StatusTone::Primary => palette.primary,
        StatusTone::Secondary => palette.secondary,
        StatusTone::Warning => palette.warning,
    }
}

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
}

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let dashboard = &app.state.dashboard;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    draw_sidebar(frame, chunks[0], dashboard, &palette);

    match dashboard.active_tab {
        DashboardTab::Overview => draw_overview(frame, chunks[1], dashboard, &palette),
        DashboardTab::Projects => draw_projects(frame, chunks[1], dashboard, &palette),
        DashboardTab::Bids => draw_bids(frame, chunks[1], dashboard, &palette),
        DashboardTab::Profile => draw_profile(frame, chunks[1], dashboard, &palette),
        DashboardTab::Settings => draw_settings(frame, chunks[1], dashboard, &palette),
    }
}

fn draw_sidebar(frame: &mut Frame, area: Rect, dashboard: &DashboardState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [profile_area, tabs_area, logout_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let profile = &dashboard.profile;
    let header = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", profile.initials),
                Style::default()
                    .fg(palette.background)
                    .bg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                profile.name,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", profile.headline),
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(header), profile_area);

    let items: Vec<ListItem> = DashboardTab::ALL
        .iter()
        .map(|tab| {
            let is_active = *tab == dashboard.active_tab;
            let marker = if is_active { "▶" } else { " " };
            let style = if is_active {
                Style::default()
                    .fg(palette.focus)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} {} ", tab.index() + 1), Style::default().fg(palette.muted)),
                Span::styled(tab.label(), style),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), tabs_area);

    frame.render_widget(
        Paragraph::new(Span::styled("  L  Logout", Style::default().fg(palette.danger))),
        logout_area,
    );
}

fn draw_overview(frame: &mut Frame, area: Rect, dashboard: &DashboardState, palette: &Palette) {
    let [greeting_area, stats_area, recent_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .horizontal_margin(1)
    .areas(area);

    let first_name = dashboard
        .profile
        .name
        .split_whitespace()
        .next()
        .unwrap_or(dashboard.profile.name);
    let greeting = vec![
        Line::from(Span::styled(
            format!("Welcome back, {first_name}! 👋"),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Here's what's happening with your projects today.",
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(greeting), greeting_area);

    let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4])
        .spacing(1)
        .split(stats_area);
    for (stat, cell) in OVERVIEW_STATS.iter().zip(cells.iter()) {
        let body = vec![
            Line::from(Span::styled(stat.label, Style::default().fg(palette.muted))),
            Line::from(Span::styled(
                stat.value,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border));
        frame.render_widget(Paragraph::new(body).block(block), *cell);
    }

    let block = panel("Recent Projects", palette);
    let inner = block.inner(recent_area);
    frame.render_widget(block, recent_area);

    let recent = dashboard.recent_projects();
    let rows = Layout::vertical(recent.iter().map(|_| Constraint::Length(3))).split(inner);
    for (project, row) in recent.iter().zip(rows.iter()) {
        let [info, gauge] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(*row);
        let color = tone_color(project.status.tone(), palette);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    project.title,
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("[{}]", project.status.label()), Style::default().fg(color)),
            ]),
            Line::from(Span::styled(
                format!("{}  ·  due {}", project.client, project.deadline),
                Style::default().fg(palette.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), info);
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(color).bg(palette.surface))
                .percent(project.completion.min(100) as u16),
            gauge,
        );
    }
}

fn draw_projects(frame: &mut Frame, area: Rect, dashboard: &DashboardState, palette: &Palette) {
    let header = Row::new(["Project", "Client", "Status", "Deadline", "Budget", "Progress"])
        .style(
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::BOLD),
        );
    let rows = dashboard.projects.iter().map(|project| {
        let color = tone_color(project.status.tone(), palette);
        Row::new(vec![
            Cell::from(project.title).style(Style::default().fg(palette.text)),
            Cell::from(project.client),
            Cell::from(project.status.label()).style(Style::default().fg(color)),
            Cell::from(project.deadline),
            Cell::from(format_usd(project.budget)),
            Cell::from(progress_bar(project.completion)).style(Style::default().fg(color)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(22),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .style(Style::default().fg(palette.muted))
    .column_spacing(1)
    .block(panel("My Projects", palette));
    frame.render_widget(table, area);
}

fn draw_bids(frame: &mut Frame, area: Rect, dashboard: &DashboardState, palette: &Palette) {
    let header = Row::new(["Project", "Amount", "Status", "Submitted"]).style(
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::BOLD),
    );
    let rows = dashboard.bids.iter().map(|bid| {
        let color = tone_color(bid.status.tone(), palette);
        Row::new(vec![
            Cell::from(bid.project).style(Style::default().fg(palette.text)),
            Cell::from(format_usd(bid.amount)),
            Cell::from(format!("{} {}", bid.status.symbol(), bid.status.label()))
                .style(Style::default().fg(color)),
            Cell::from(bid.submitted_at),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(28),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .style(Style::default().fg(palette.muted))
    .column_spacing(2)
    .block(panel("My Bids", palette));
    frame.render_widget(table, area);
}

fn draw_profile(frame: &mut Frame, area: Rect, dashboard: &DashboardState, palette: &Palette) {
    let profile = &dashboard.profile;
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let muted = Style::default().fg(palette.muted);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", profile.initials),
                Style::default()
                    .fg(palette.background)
                    .bg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                profile.name,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(profile.title, Style::default().fg(palette.primary))),
        Line::from(Span::styled(profile.member_since, muted)),
        Line::from(""),
        heading("Skills & Technologies"),
    ];

    let mut skills = Vec::with_capacity(profile.skills.len() * 2);
    for skill in profile.skills {
        skills.push(Span::styled(
            format!(" {skill} "),
            Style::default().fg(palette.secondary).bg(palette.surface),
        ));
        skills.push(Span::raw(" "));
    }
    lines.push(Line::from(skills));
    lines.push(Line::from(""));
    lines.push(heading("Contact Information"));
    for (label, value) in [
        ("Email", profile.email),
        ("GitHub", profile.github),
        ("LinkedIn", profile.linkedin),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<10}"), muted),
            Span::styled(value, Style::default().fg(palette.text)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Profile", palette)),
        area,
    );
}

fn draw_settings(frame: &mut Frame, area: Rect, dashboard: &DashboardState, palette: &Palette) {
    let mut lines = Vec::new();
    let mut current_group: Option<SettingGroup> = None;

    for (index, setting) in dashboard.settings.iter().enumerate() {
        if current_group != Some(setting.group) {
            if current_group.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                setting.group.label(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )));
            current_group = Some(setting.group);
        }

        let is_selected = index == dashboard.selected_setting;
        let (mark, mark_color) = if setting.enabled {
            ("[✓]", palette.accent)
        } else {
            ("[ ]", palette.muted)
        };
        let label_style = if is_selected {
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        lines.push(Line::from(vec![
            Span::styled(if is_selected { "▶ " } else { "  " }, Style::default().fg(palette.focus)),
            Span::styled(mark, Style::default().fg(mark_color)),
            Span::raw(" "),
            Span::styled(setting.label, label_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab/Shift+Tab to move, Space to toggle. Changes last until you sign out.",
        Style::default().fg(palette.muted),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(panel("Settings", palette)),
        area,
    );
}

/// Ten-cell text progress bar with the percentage
fn progress_bar(completion: u8) -> String {
    let percent = completion.min(100) as usize;
    let filled = percent / 10;
    format!("{}{} {percent:>3}%", "█".repeat(filled), "░".repeat(10 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "░░░░░░░░░░   0%");
        assert_eq!(progress_bar(65), "██████░░░░  65%");
        assert_eq!(progress_bar(100), "██████████ 100%");
        assert_eq!(progress_bar(250), "██████████ 100%");
    }

    #[test]
    fn test_tone_colors_follow_palette() {
        let palette = Palette::for_theme(Theme::Light);
        assert_eq!(tone_color(StatusTone::Accent, &palette), palette.accent);
        assert_eq!(tone_color(StatusTone::Warning, &palette), palette.warning);
    }
}
