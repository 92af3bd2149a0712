//! Footer strip shown under every section

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{or_placeholder, Payload, Section};
use crate::api::models::PersonalInfo;
use crate::tui::theme::Palette;

#[derive(Debug, Default, Clone)]
pub struct FooterState {
    pub personal_info: Option<PersonalInfo>,
}

impl FooterState {
    pub fn apply(&mut self, payload: Payload) {
        if let Payload::PersonalInfo(info) = payload {
            self.personal_info = Some(info);
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &FooterState, palette: &Palette) {
    let info = state.personal_info.as_ref();
    let name = or_placeholder(info.map(|i| i.name.as_str()), "Portfolio");
    let tagline = or_placeholder(info.map(|i| i.footer_tagline.as_str()), "");

    let mut links: Vec<Span> = vec![Span::styled("Quick links: ", palette.muted())];
    for (i, section) in Section::TABS.iter().enumerate() {
        if i > 0 {
            links.push(Span::styled(" · ", palette.muted()));
        }
        links.push(Span::styled(
            format!("[{}] {}", i + 1, section.title()),
            palette.normal(),
        ));
    }

    let socials = info.map(PersonalInfo::social_links).unwrap_or_default();
    let mut follow: Vec<Span> = Vec::new();
    if !socials.is_empty() {
        follow.push(Span::styled("Follow: ", palette.muted()));
        for (i, link) in socials.iter().enumerate() {
            if i > 0 {
                follow.push(Span::styled(" · ", palette.muted()));
            }
            follow.push(Span::styled(link.name, palette.accent()));
            follow.push(Span::styled(format!(" {}", link.url), palette.normal()));
        }
    }

    let contact: Vec<&str> = info
        .map(|i| vec![i.email.as_str(), i.phone.as_str(), i.location.as_str()])
        .unwrap_or_default()
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    let copyright = or_placeholder(
        info.map(|i| i.copyright_text.as_str()),
        "All rights reserved.",
    );

    let lines = vec![
        Line::from(vec![
            Span::styled(name.to_string(), palette.accent().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(tagline.to_string(), palette.muted()),
        ]),
        Line::from(links),
        Line::from(follow),
        Line::from(Span::styled(contact.join("  |  "), palette.normal())),
        Line::from(Span::styled(format!("© {}", copyright), palette.muted())),
    ];

    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(palette.border()),
    );
    frame.render_widget(footer, area);
}
