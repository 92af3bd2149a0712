//! Hero section: introduction and headline stats

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::{or_placeholder, plain_text, stat_figure, Payload};
use crate::api::models::PersonalInfo;
use crate::tui::theme::Palette;

const AVAILABILITY_PLACEHOLDER: &str = "Available for Projects";

#[derive(Debug, Default, Clone)]
pub struct HeroState {
    pub personal_info: Option<PersonalInfo>,
}

impl HeroState {
    pub fn apply(&mut self, payload: Payload) {
        if let Payload::PersonalInfo(info) = payload {
            self.personal_info = Some(info);
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &HeroState, palette: &Palette) {
    let info = state.personal_info.as_ref();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let availability = or_placeholder(
        info.map(|i| i.availability_status.as_str()),
        AVAILABILITY_PLACEHOLDER,
    )
    .to_uppercase();
    let name = or_placeholder(info.map(|i| i.name.as_str()), "Portfolio");
    let title = or_placeholder(info.map(|i| i.title.as_str()), "");
    let tagline = or_placeholder(info.map(|i| i.tagline.as_str()), "");
    let description = info
        .map(|i| plain_text(&i.hero_description))
        .unwrap_or_default();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", availability), palette.badge())),
        Line::from(""),
        Line::from(Span::styled(
            name.to_string(),
            palette.accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(title.to_string(), palette.title())),
        Line::from(Span::styled(
            tagline.to_string(),
            palette.accent().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(description, palette.muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" View My Work [3] ", palette.button()),
            Span::raw("   "),
            Span::styled(" Get In Touch ", palette.accent()),
        ]),
    ];

    let intro = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(ratatui::widgets::Padding::horizontal(2)));
    frame.render_widget(intro, chunks[0]);

    let stats = info.map(PersonalInfo::stats).unwrap_or_default();
    let stat_cells = [
        (stats.years_experience, "Years"),
        (stats.projects_completed, "Projects"),
        (stats.happy_clients, "Clients"),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);

    for ((value, label), cell) in stat_cells.into_iter().zip(columns.iter()) {
        let figure = Paragraph::new(vec![
            Line::from(Span::styled(
                stat_figure(value),
                palette.accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label.to_uppercase(), palette.muted())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );
        frame.render_widget(figure, *cell);
    }
}
