//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs};

use crate::core::theme::ThemeKind;
use crate::tui::app::{picker_themes, App};
use crate::tui::sections::{self, Section};
use crate::tui::theme::Palette;

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Section
            Constraint::Length(6), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app, &palette);
    render_content(frame, chunks[1], app, &palette);
    sections::footer::render(frame, chunks[2], &app.footer, &palette);
    render_status_bar(frame, chunks[3], app, &palette);

    if app.theme_picker.is_some() {
        render_theme_picker(frame, app, &palette);
    }

    // Render help overlay on top if active
    if app.show_help {
        render_help_overlay(frame, app, &palette);
    }
}

/// Render the header with section tabs
fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let titles = Section::TABS
        .iter()
        .enumerate()
        .map(|(i, section)| format!("[{}] {}", i + 1, section.title()));

    let theme = app.current_theme();
    let tabs = Tabs::new(titles)
        .select(app.current_section.tab_index().unwrap_or(0))
        .style(palette.header())
        .highlight_style(palette.selected())
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.border())
                .title(Line::from(" folio ").left_aligned())
                .title(Line::from(format!(" {} ", theme.name)).right_aligned())
                .style(palette.header()),
        );

    frame.render_widget(tabs, area);
}

/// Render the section shown above the footer
fn render_content(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    match app.current_section {
        Section::Hero => sections::hero::render(frame, area, &app.hero, palette),
        Section::About => sections::about::render(frame, area, &app.about, palette),
        Section::Work => sections::work::render(frame, area, &app.work, palette),
        Section::Footer => {}
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let status_text = if let Some(msg) = &app.status_message {
        format!(" {}", msg)
    } else if app.is_loading(app.current_section) {
        format!(" Loading {}...", app.current_section.title())
    } else {
        format!(
            " {} │ t themes │ r refresh │ ? for help ",
            app.current_section.title()
        )
    };

    frame.render_widget(
        Paragraph::new(status_text).style(palette.status_bar()),
        area,
    );
}

/// Centered popup area, clamped to the frame
fn popup_area(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let popup_width = (area.width * 60 / 100).max(40).min(max_width).min(area.width);
    let popup_height = (area.height * 80 / 100).min(max_height).min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Render the theme picker, grouped by kind
fn render_theme_picker(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(picker) = app.theme_picker else {
        return;
    };
    let themes = picker_themes();
    let current = app.current_theme().id;
    let area = popup_area(frame.area(), 50, themes.len() as u16 + 6);

    frame.render_widget(Clear, area);

    let mut items = Vec::with_capacity(themes.len() + 2);
    let mut selected_row = 0;
    let mut last_kind: Option<ThemeKind> = None;

    for (idx, theme) in themes.iter().enumerate() {
        if last_kind != Some(theme.kind) {
            items.push(ListItem::new(Span::styled(
                format!(" {} ", theme.kind.display_name()),
                palette.muted().add_modifier(Modifier::BOLD),
            )));
            last_kind = Some(theme.kind);
        }
        if idx == picker.selected {
            selected_row = items.len();
        }
        let marker = if theme.id == current { "●" } else { " " };
        items.push(ListItem::new(format!("  {} {}", marker, theme.name)));
    }

    let mut state = ListState::default();
    state.select(Some(selected_row));

    let list = List::new(items)
        .style(palette.popup())
        .highlight_style(palette.selected())
        .block(
            Block::default()
                .title(" Themes ")
                .title_bottom(" [Enter] Apply  [Esc] Close ")
                .borders(Borders::ALL)
                .border_style(palette.accent()),
        );

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = popup_area(frame.area(), 60, 20);

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let (title, help_lines) = get_help_content(app.current_section);

    let text: Vec<Line> = help_lines
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), palette.accent()),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(palette.accent()),
        )
        .style(palette.popup());

    frame.render_widget(help, area);
}

/// Get help content for the current section
fn get_help_content(section: Section) -> (&'static str, Vec<(&'static str, &'static str)>) {
    let mut keys = vec![
        ("Tab", "Next section"),
        ("Shift+Tab", "Previous section"),
        ("1 / 2 / 3", "Home / About / Work"),
        ("t", "Choose theme"),
        ("T", "Next theme"),
        ("r", "Refresh"),
        ("q", "Quit"),
        ("?", "Show this help"),
    ];

    let (title, section_keys) = match section {
        Section::Hero => ("Help - Home", vec![("Enter", "View my work")]),
        Section::About => (
            "Help - About",
            vec![("j / ↓", "Scroll down"), ("k / ↑", "Scroll up")],
        ),
        Section::Work => (
            "Help - Work",
            vec![
                ("h / ←", "Previous category"),
                ("l / →", "Next category"),
                ("j / ↓", "Next project"),
                ("k / ↑", "Previous project"),
                ("Enter", "Load project details"),
            ],
        ),
        Section::Footer => ("Help", Vec::new()),
    };

    keys.splice(0..0, section_keys);
    (title, keys)
}
