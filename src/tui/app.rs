//! Main TUI application state and logic

use std::collections::HashMap;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::stream::{FuturesUnordered, StreamExt};
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::api::{PortfolioClient, Resource};
use crate::core::cancel::CancellationSource;
use crate::core::config::Config;
use crate::core::theme::{self, Theme, ThemeKind};
use crate::core::theme_context::{SharedThemeContext, ThemeContext};
use crate::error::{FolioError, Result};
use crate::tui::event::{is_back_key, is_interrupt_key, is_quit_key, AppEvent, EventHandler};
use crate::tui::sections::{
    self, AboutState, FooterState, HeroState, Payload, Section, WorkState,
};
use crate::tui::theme::Palette;
use crate::tui::ui;

/// Message type for async operation results
#[derive(Debug)]
pub enum AsyncMessage {
    /// A section request succeeded
    Loaded {
        section: Section,
        load_id: u64,
        payload: Payload,
    },
    /// A section request failed
    Failed {
        section: Section,
        load_id: u64,
        resource: Resource,
        error: FolioError,
    },
}

/// Requests in flight for one section
#[derive(Debug)]
struct ActiveLoad {
    id: u64,
    source: CancellationSource,
    pending: usize,
}

/// Theme picker popup state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePicker {
    /// Index into [`picker_themes`]
    pub selected: usize,
}

/// Themes in picker order: dark themes first, then light, registry order within
pub fn picker_themes() -> Vec<Theme> {
    theme::themes_of_kind(ThemeKind::Dark)
        .chain(theme::themes_of_kind(ThemeKind::Light))
        .copied()
        .collect()
}

/// Main application state
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Section shown above the footer
    pub current_section: Section,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether help overlay is shown
    pub show_help: bool,
    /// Theme picker popup, when open
    pub theme_picker: Option<ThemePicker>,

    pub hero: HeroState,
    pub about: AboutState,
    pub work: WorkState,
    pub footer: FooterState,

    client: PortfolioClient,
    theme: SharedThemeContext,
    config: Config,
    /// Where theme changes are persisted; `None` keeps them in memory
    config_path: Option<PathBuf>,

    loads: HashMap<Section, ActiveLoad>,
    next_load_id: u64,

    async_tx: mpsc::Sender<AsyncMessage>,
    async_rx: mpsc::Receiver<AsyncMessage>,
}

impl App {
    /// Create a new app instance
    pub fn new(client: PortfolioClient, theme: SharedThemeContext, config: Config) -> Self {
        let (async_tx, async_rx) = mpsc::channel(32);

        Self {
            running: true,
            current_section: Section::Hero,
            status_message: None,
            show_help: false,
            theme_picker: None,

            hero: HeroState::default(),
            about: AboutState::default(),
            work: WorkState::default(),
            footer: FooterState::default(),

            client,
            theme,
            config,
            config_path: None,

            loads: HashMap::new(),
            next_load_id: 0,

            async_tx,
            async_rx,
        }
    }

    /// Persist theme changes to this configuration file
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Colors of the current theme
    pub fn palette(&self) -> Palette {
        Palette::from(self.theme.get())
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Whether a section still has requests in flight
    pub fn is_loading(&self, section: Section) -> bool {
        self.loads
            .get(&section)
            .is_some_and(|load| load.pending > 0)
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| FolioError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| FolioError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| FolioError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| FolioError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| FolioError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| FolioError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(Duration::from_millis(100));

        self.start();

        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| FolioError::Terminal(e.to_string()))?;

            while let Ok(msg) = self.async_rx.try_recv() {
                self.handle_async_message(msg);
            }

            match events.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key),
                Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
                None => self.quit(),
            }
        }

        Self::restore_terminal(&mut terminal)?;
        Ok(())
    }

    /// Issue the footer's and the current section's requests
    pub fn start(&mut self) {
        self.load_section(Section::Footer);
        self.load_section(self.current_section);
    }

    /// Stop the event loop and cancel everything in flight
    pub fn quit(&mut self) {
        for (_, load) in self.loads.drain() {
            load.source.cancel();
        }
        self.running = false;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Section lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Leave the current section and show another one
    pub fn show_section(&mut self, section: Section) {
        if section == self.current_section || section == Section::Footer {
            return;
        }

        self.cancel_section(self.current_section);
        self.current_section = section;
        self.status_message = None;
        self.load_section(section);
    }

    /// Re-issue the requests of the footer and the current section
    pub fn refresh(&mut self) {
        self.status_message = Some("Refreshing...".to_string());
        self.start();
    }

    /// Cancel a section's in-flight requests; late results are dropped
    fn cancel_section(&mut self, section: Section) {
        if let Some(load) = self.loads.remove(&section) {
            if load.pending > 0 {
                tracing::debug!(section = %section, pending = load.pending, "cancelling requests");
            }
            load.source.cancel();
        }
    }

    /// Reset a section's view state and issue its requests
    fn load_section(&mut self, section: Section) {
        self.cancel_section(section);
        self.reset_state(section);

        let source = CancellationSource::new();
        let token = source.token();
        let load_id = self.allocate_load_id();
        let resources = section.resources();

        self.loads.insert(
            section,
            ActiveLoad {
                id: load_id,
                source,
                pending: resources.len(),
            },
        );

        let client = self.client.clone();
        let tx = self.async_tx.clone();

        tokio::spawn(async move {
            let mut requests: FuturesUnordered<_> = resources
                .iter()
                .map(|&resource| {
                    let client = &client;
                    let token = &token;
                    async move { (resource, sections::load(client, resource, token).await) }
                })
                .collect();

            while let Some((resource, result)) = requests.next().await {
                if token.is_cancelled() {
                    break;
                }
                let msg = match result {
                    Ok(payload) => AsyncMessage::Loaded {
                        section,
                        load_id,
                        payload,
                    },
                    Err(FolioError::Cancelled) => break,
                    Err(error) => AsyncMessage::Failed {
                        section,
                        load_id,
                        resource,
                        error,
                    },
                };
                if tx.send(msg).await.is_err() {
                    break;
                }
            }
        });
    }

    /// Fetch the detail record of the selected project
    pub fn fetch_project_detail(&mut self) {
        let Some(slug) = self.work.selected_project().map(|p| p.slug.clone()) else {
            return;
        };
        if slug.is_empty() || self.work.selected_detail().is_some() {
            return;
        }
        let Some(load) = self.loads.get_mut(&Section::Work) else {
            return;
        };

        load.pending += 1;
        let load_id = load.id;
        let token = load.source.token();
        let client = self.client.clone();
        let tx = self.async_tx.clone();
        self.status_message = Some(format!("Loading {}...", slug));

        tokio::spawn(async move {
            let msg = match client.project(&slug, &token).await {
                Ok(project) => AsyncMessage::Loaded {
                    section: Section::Work,
                    load_id,
                    payload: Payload::ProjectDetail(project),
                },
                Err(FolioError::Cancelled) => return,
                Err(error) => AsyncMessage::Failed {
                    section: Section::Work,
                    load_id,
                    resource: Resource::Projects,
                    error,
                },
            };
            if !token.is_cancelled() {
                let _ = tx.send(msg).await;
            }
        });
    }

    fn allocate_load_id(&mut self) -> u64 {
        self.next_load_id += 1;
        self.next_load_id
    }

    fn reset_state(&mut self, section: Section) {
        match section {
            Section::Hero => self.hero = HeroState::default(),
            Section::About => self.about = AboutState::default(),
            Section::Work => self.work = WorkState::default(),
            Section::Footer => self.footer = FooterState::default(),
        }
    }

    /// Whether a result belongs to the section's live load
    fn accept(&mut self, section: Section, load_id: u64) -> bool {
        match self.loads.get_mut(&section) {
            Some(load) if load.id == load_id && !load.source.is_cancelled() => {
                load.pending = load.pending.saturating_sub(1);
                true
            }
            _ => {
                tracing::debug!(section = %section, load_id, "dropping stale result");
                false
            }
        }
    }

    /// Handle async message from background tasks
    pub fn handle_async_message(&mut self, msg: AsyncMessage) {
        match msg {
            AsyncMessage::Loaded {
                section,
                load_id,
                payload,
            } => {
                if !self.accept(section, load_id) {
                    return;
                }
                match section {
                    Section::Hero => self.hero.apply(payload),
                    Section::About => self.about.apply(payload),
                    Section::Work => self.work.apply(payload),
                    Section::Footer => self.footer.apply(payload),
                }
                if !self.is_loading(section)
                    && self.status_message.as_deref() == Some("Refreshing...")
                {
                    self.status_message = None;
                }
            }
            AsyncMessage::Failed {
                section,
                load_id,
                resource,
                error,
            } => {
                if !self.accept(section, load_id) {
                    return;
                }
                let detail = match &error {
                    FolioError::Fetch { detail, .. } => detail.as_str(),
                    _ => "",
                };
                tracing::error!(section = %section, resource = %resource, detail, "{}", error);
                self.status_message = Some(error.to_string());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Themes
    // ─────────────────────────────────────────────────────────────────────────

    /// Make a theme current and remember it when configured to
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme.set(theme);
        self.status_message = Some(format!("Theme: {}", theme.name));

        if !self.config.remember_theme {
            return;
        }
        self.config.set_theme(theme.id);

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!(error = %e, "could not persist theme");
                self.status_message = Some(format!("Error saving config: {}", e));
            }
        }
    }

    /// Cycle to the next theme in registry order
    pub fn cycle_theme(&mut self) {
        let next = theme::next_theme(self.theme.get().id);
        self.apply_theme(next);
    }

    pub fn open_theme_picker(&mut self) {
        let current = self.theme.get().id;
        let selected = picker_themes()
            .iter()
            .position(|t| t.id == current)
            .unwrap_or(0);
        self.theme_picker = Some(ThemePicker { selected });
    }

    fn handle_theme_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.theme_picker.as_mut() else {
            return;
        };
        let total = picker_themes().len();

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                picker.selected = (picker.selected + 1) % total;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                picker.selected = picker.selected.checked_sub(1).unwrap_or(total - 1);
            }
            KeyCode::Enter => {
                let selected = picker.selected;
                self.theme_picker = None;
                if let Some(theme) = picker_themes().get(selected).copied() {
                    self.apply_theme(theme);
                }
            }
            _ if is_back_key(&key) || key.code == KeyCode::Char('q') => {
                self.theme_picker = None;
            }
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Keys
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.theme_picker.is_some() {
            self.handle_theme_picker_key(key);
            return;
        }

        if is_quit_key(&key) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.show_section(self.current_section.next()),
            KeyCode::BackTab => self.show_section(self.current_section.previous()),
            KeyCode::Char(c @ '1'..='3') => {
                let idx = (c as usize) - ('1' as usize);
                self.show_section(Section::TABS[idx]);
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('t') => self.open_theme_picker(),
            KeyCode::Char('T') => self.cycle_theme(),
            _ => self.handle_section_key(key),
        }
    }

    fn handle_section_key(&mut self, key: KeyEvent) {
        match self.current_section {
            Section::About => match key.code {
                KeyCode::Down | KeyCode::Char('j') => self.about.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => self.about.scroll_up(),
                _ => {}
            },
            Section::Work => match key.code {
                KeyCode::Down | KeyCode::Char('j') => self.work.select_next(),
                KeyCode::Up | KeyCode::Char('k') => self.work.select_previous(),
                KeyCode::Right | KeyCode::Char('l') => self.work.next_filter(),
                KeyCode::Left | KeyCode::Char('h') => self.work.previous_filter(),
                KeyCode::Enter => self.fetch_project_detail(),
                _ => {}
            },
            Section::Hero if key.code == KeyCode::Enter && key.modifiers == KeyModifiers::NONE => {
                self.show_section(Section::Work);
            }
            _ => {}
        }
    }
}
