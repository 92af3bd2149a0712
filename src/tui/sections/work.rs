//! Work section: category tabs, project list and detail panel

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};

use super::{plain_text, Payload};
use crate::api::models::{self, CoreExpertise, Project, ProjectCategory, ALL_CATEGORIES};
use crate::tui::theme::Palette;

#[derive(Debug, Default, Clone)]
pub struct WorkState {
    pub projects: Option<Vec<Project>>,
    pub core_expertise: Option<Vec<CoreExpertise>>,
    pub categories: Option<Vec<ProjectCategory>>,
    /// Index into [`WorkState::filters`]
    pub filter: usize,
    /// Index into the visible projects
    pub selected: usize,
    /// Detail record for the selected project, when fetched
    pub detail: Option<Project>,
}

impl WorkState {
    pub fn apply(&mut self, payload: Payload) {
        match payload {
            Payload::Projects(projects) => {
                self.projects = Some(projects);
                self.clamp_selection();
            }
            Payload::CoreExpertise(items) => self.core_expertise = Some(items),
            Payload::ProjectCategories(categories) => {
                self.categories = Some(categories);
                if self.filter >= self.filters().len() {
                    self.filter = 0;
                }
                self.clamp_selection();
            }
            Payload::ProjectDetail(project) => self.detail = Some(project),
            _ => {}
        }
    }

    /// Filter labels: "All" then each category name
    pub fn filters(&self) -> Vec<String> {
        models::category_filters(self.categories.as_deref().unwrap_or_default())
    }

    pub fn active_filter(&self) -> String {
        self.filters()
            .into_iter()
            .nth(self.filter)
            .unwrap_or_else(|| ALL_CATEGORIES.to_string())
    }

    /// Projects passing the active filter
    pub fn visible(&self) -> Vec<&Project> {
        let projects = self.projects.as_deref().unwrap_or_default();
        models::filter_projects(projects, &self.active_filter())
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.visible().get(self.selected).copied()
    }

    /// Detail record if it belongs to the selected project
    pub fn selected_detail(&self) -> Option<&Project> {
        let selected = self.selected_project()?;
        self.detail.as_ref().filter(|d| d.slug == selected.slug)
    }

    pub fn next_filter(&mut self) {
        let count = self.filters().len();
        self.filter = (self.filter + 1) % count;
        self.selected = 0;
    }

    pub fn previous_filter(&mut self) {
        let count = self.filters().len();
        self.filter = (self.filter + count - 1) % count;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let total = self.visible().len();
        if total > 0 {
            self.selected = (self.selected + 1) % total;
        }
    }

    pub fn select_previous(&mut self) {
        let total = self.visible().len();
        if total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(total - 1);
        }
    }

    fn clamp_selection(&mut self) {
        let total = self.visible().len();
        if self.selected >= total {
            self.selected = total.saturating_sub(1);
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &WorkState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Expertise line
            Constraint::Length(2), // Filter tabs
            Constraint::Min(0),    // List and detail
        ])
        .split(area);

    let expertise = state
        .core_expertise
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|e| e.title.as_str())
        .collect::<Vec<_>>()
        .join(" · ");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Selected Work ", palette.title()),
            Span::styled(expertise, palette.muted()),
        ])),
        chunks[0],
    );

    let tabs = Tabs::new(state.filters())
        .select(state.filter)
        .style(palette.muted())
        .highlight_style(palette.selected())
        .divider(Span::styled("│", palette.border()))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.border()),
        );
    frame.render_widget(tabs, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    render_list(frame, body[0], state, palette);
    render_detail(frame, body[1], state, palette);
}

fn render_list(frame: &mut Frame, area: Rect, state: &WorkState, palette: &Palette) {
    let visible = state.visible();

    let items: Vec<ListItem> = if state.projects.is_none() {
        vec![ListItem::new("  Fetching projects...").style(palette.muted())]
    } else if visible.is_empty() {
        vec![ListItem::new("  No projects in this category").style(palette.muted())]
    } else {
        visible
            .iter()
            .map(|project| {
                let marker = if project.is_featured { "★ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, palette.accent()),
                    Span::raw(project.title.clone()),
                ]))
            })
            .collect()
    };

    let mut list_state = ListState::default();
    if !visible.is_empty() {
        list_state.select(Some(state.selected));
    }

    let list = List::new(items)
        .style(palette.normal())
        .highlight_style(palette.selected())
        .block(
            Block::default()
                .title(format!(" Projects ({}) ", visible.len()))
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, area: Rect, state: &WorkState, palette: &Palette) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(palette.border());

    let Some(project) = state.selected_project() else {
        let hint = Paragraph::new(Span::styled("  Select a project", palette.muted())).block(block);
        frame.render_widget(hint, area);
        return;
    };
    let detail = state.selected_detail().unwrap_or(project);

    let mut header = vec![Span::styled(
        detail.category_name.to_uppercase(),
        palette.accent(),
    )];
    if detail.is_featured {
        header.push(Span::raw("  "));
        header.push(Span::styled(" Featured ", palette.badge()));
    }

    let mut lines = vec![
        Line::from(header),
        Line::from(Span::styled(detail.title.clone(), palette.title())),
        Line::from(""),
        Line::from(Span::styled(plain_text(detail.description()), palette.normal())),
        Line::from(""),
    ];

    if !detail.technologies_list.is_empty() {
        let mut techs = vec![Span::styled("Tech: ", palette.muted())];
        for (i, tech) in detail.technologies_list.iter().enumerate() {
            if i > 0 {
                techs.push(Span::raw(" "));
            }
            techs.push(Span::styled(format!("[{}]", tech), palette.accent()));
        }
        lines.push(Line::from(techs));
        lines.push(Line::from(""));
    }

    for (label, url) in [
        ("Live", &detail.live_url),
        ("Code", &detail.github_url),
        ("Case study", &detail.case_study_url),
    ] {
        if let Some(url) = url.as_deref().filter(|u| !u.trim().is_empty()) {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<11}", label), palette.muted()),
                Span::styled(url.to_string(), palette.accent()),
            ]));
        }
    }

    if state.selected_detail().is_none() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Load full case study",
            palette.muted(),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::core::theme::default_theme;
    use crate::tui::sections::buffer_text;

    fn project(title: &str, slug: &str, category: &str) -> Project {
        Project {
            title: title.into(),
            slug: slug.into(),
            category_name: category.into(),
            short_description: format!("{} summary", title),
            ..Default::default()
        }
    }

    fn category(name: &str) -> ProjectCategory {
        ProjectCategory {
            name: name.into(),
            ..Default::default()
        }
    }

    fn loaded() -> WorkState {
        let mut state = WorkState::default();
        state.apply(Payload::Projects(vec![
            project("Brand Refresh", "brand-refresh", "Branding"),
            project("Shop App", "shop-app", "Mobile"),
            project("Atlas", "atlas", "Branding"),
        ]));
        state.apply(Payload::ProjectCategories(vec![
            category("Branding"),
            category("Mobile"),
        ]));
        state
    }

    #[test]
    fn test_filters_start_with_all() {
        let state = loaded();
        assert_eq!(state.filters(), vec!["All", "Branding", "Mobile"]);
        assert_eq!(state.active_filter(), "All");
        assert_eq!(state.visible().len(), 3);
    }

    #[test]
    fn test_filter_by_category_name() {
        let mut state = loaded();
        state.next_filter();
        assert_eq!(state.active_filter(), "Branding");
        let titles: Vec<&str> = state.visible().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Brand Refresh", "Atlas"]);

        state.previous_filter();
        state.previous_filter();
        assert_eq!(state.active_filter(), "Mobile");
        assert_eq!(state.selected_project().unwrap().slug, "shop-app");
    }

    #[test]
    fn test_selection_wraps_within_visible() {
        let mut state = loaded();
        state.select_previous();
        assert_eq!(state.selected, 2);
        state.select_next();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_detail_only_for_selected_project() {
        let mut state = loaded();
        let mut detail = project("Brand Refresh", "brand-refresh", "Branding");
        detail.full_description = "The long story".into();
        state.apply(Payload::ProjectDetail(detail));
        assert_eq!(state.selected_detail().unwrap().description(), "The long story");

        state.select_next();
        assert!(state.selected_detail().is_none());
    }

    #[test]
    fn test_no_categories_still_has_all_filter() {
        let mut state = WorkState::default();
        state.next_filter();
        assert_eq!(state.filter, 0);
        assert!(state.visible().is_empty());
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn test_render_list_and_detail() {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let palette = Palette::from(default_theme());
        let state = loaded();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, &palette))
            .unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Branding"));
        assert!(screen.contains("Shop App"));
        assert!(screen.contains("Brand Refresh summary"));
        assert!(screen.contains("Projects (3)"));
    }

    #[test]
    fn test_render_before_data_arrives() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let palette = Palette::from(default_theme());
        terminal
            .draw(|frame| render(frame, frame.area(), &WorkState::default(), &palette))
            .unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Fetching projects"));
        assert!(screen.contains("All"));
    }
}
