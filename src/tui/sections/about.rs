//! About section

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use super::{or_placeholder, plain_text, stat_figure, Payload};
use crate::api::models::{CoreExpertise, PersonalInfo, TimelineEntry};
use crate::tui::theme::Palette;

#[derive(Debug, Default, Clone)]
pub struct AboutState {
    pub personal_info: Option<PersonalInfo>,
    pub core_expertise: Option<Vec<CoreExpertise>>,
    pub timeline: Option<Vec<TimelineEntry>>,
    /// Vertical scroll of the story column
    pub scroll: u16,
}

impl AboutState {
    pub fn apply(&mut self, payload: Payload) {
        match payload {
            Payload::PersonalInfo(info) => self.personal_info = Some(info),
            Payload::CoreExpertise(items) => self.core_expertise = Some(items),
            Payload::Timeline(entries) => self.timeline = Some(entries),
            _ => {}
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AboutState, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_story(frame, columns[0], state, palette);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(columns[1]);

    render_stats(frame, right[0], state.personal_info.as_ref(), palette);
    render_timeline(frame, right[1], state.timeline.as_deref(), palette);
}

fn render_story(frame: &mut Frame, area: Rect, state: &AboutState, palette: &Palette) {
    let info = state.personal_info.as_ref();
    let heading = or_placeholder(info.map(|i| i.about_heading.as_str()), "About Me");

    let mut lines = vec![
        Line::from(Span::styled("ABOUT", palette.accent())),
        Line::from(Span::styled(heading.to_string(), palette.title())),
        Line::from(""),
    ];

    for text in [
        info.map(|i| plain_text(&i.about_description)),
        info.map(|i| plain_text(&i.about_detail)),
    ]
    .into_iter()
    .flatten()
    .filter(|t| !t.is_empty())
    {
        lines.push(Line::from(Span::styled(text, palette.normal())));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Core Expertise", palette.title())));
    match state.core_expertise.as_deref() {
        Some(items) if !items.is_empty() => {
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled("  ◆ ", palette.accent()),
                    Span::styled(item.title.clone(), palette.normal()),
                ]));
            }
        }
        _ => lines.push(Line::from(Span::styled("  (none listed)", palette.muted()))),
    }

    let story = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((state.scroll, 0))
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(story, area);
}

fn render_stats(frame: &mut Frame, area: Rect, info: Option<&PersonalInfo>, palette: &Palette) {
    let stats = info.map(PersonalInfo::stats).unwrap_or_default();
    let rows = [
        [
            (stats.years_experience, "Years Experience"),
            (stats.projects_completed, "Projects Completed"),
        ],
        [
            (stats.awards_won, "Awards Won"),
            (stats.happy_clients, "Happy Clients"),
        ],
    ];

    let lines: Vec<Line> = rows
        .iter()
        .flat_map(|row| {
            let figures = Line::from(
                row.iter()
                    .map(|(value, _)| {
                        Span::styled(
                            format!("{:<20}", stat_figure(*value)),
                            palette.accent().add_modifier(Modifier::BOLD),
                        )
                    })
                    .collect::<Vec<_>>(),
            );
            let labels = Line::from(
                row.iter()
                    .map(|(_, label)| Span::styled(format!("{:<20}", label), palette.muted()))
                    .collect::<Vec<_>>(),
            );
            [figures, labels]
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .title(" Stats ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_timeline(
    frame: &mut Frame,
    area: Rect,
    timeline: Option<&[TimelineEntry]>,
    palette: &Palette,
) {
    let lines: Vec<Line> = match timeline {
        Some(entries) if !entries.is_empty() => entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!(" {:>4} ", entry.year), palette.accent()),
                    Span::styled("│ ", palette.border()),
                    Span::styled(entry.title.clone(), palette.normal()),
                ])
            })
            .collect(),
        _ => vec![Line::from(Span::styled(" No milestones yet", palette.muted()))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .title(" Journey ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
