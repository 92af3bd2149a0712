//! Portfolio sections
//!
//! Each section owns a view-state struct whose fields stay `None` until the
//! matching request succeeds. Rendering never waits on data: absent fields
//! draw as zeros and placeholders.

pub mod about;
pub mod footer;
pub mod hero;
pub mod work;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::models::{CoreExpertise, PersonalInfo, Project, ProjectCategory, TimelineEntry};
use crate::api::{PortfolioClient, Resource};
use crate::core::cancel::CancellationToken;
use crate::error::{FolioError, Result};

pub use about::AboutState;
pub use footer::FooterState;
pub use hero::HeroState;
pub use work::WorkState;

/// A view that issues its own requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Work,
    /// Always visible below the active tab
    Footer,
}

impl Section {
    /// Sections reachable from the tab bar, in order
    pub const TABS: [Section; 3] = [Section::Hero, Section::About, Section::Work];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Work => "Work",
            Section::Footer => "Footer",
        }
    }

    /// Requests issued when the section is shown
    pub fn resources(&self) -> &'static [Resource] {
        match self {
            Section::Hero => &[Resource::PersonalInfo],
            Section::About => &[
                Resource::PersonalInfo,
                Resource::CoreExpertise,
                Resource::Timeline,
            ],
            Section::Work => &[
                Resource::Projects,
                Resource::CoreExpertise,
                Resource::ProjectCategories,
            ],
            Section::Footer => &[Resource::PersonalInfo],
        }
    }

    pub fn tab_index(&self) -> Option<usize> {
        Self::TABS.iter().position(|s| s == self)
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Section {
        let idx = self.tab_index().map_or(0, |i| (i + 1) % Self::TABS.len());
        Self::TABS[idx]
    }

    /// Previous tab, wrapping around
    pub fn previous(&self) -> Section {
        let idx = self
            .tab_index()
            .map_or(0, |i| (i + Self::TABS.len() - 1) % Self::TABS.len());
        Self::TABS[idx]
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A successful section request, normalized
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    PersonalInfo(PersonalInfo),
    CoreExpertise(Vec<CoreExpertise>),
    Timeline(Vec<TimelineEntry>),
    Projects(Vec<Project>),
    ProjectCategories(Vec<ProjectCategory>),
    /// Detail record of the selected project
    ProjectDetail(Project),
}

/// Issue one section request
pub async fn load(
    client: &PortfolioClient,
    resource: Resource,
    cancel: &CancellationToken,
) -> Result<Payload> {
    let payload = match resource {
        Resource::PersonalInfo => Payload::PersonalInfo(client.personal_info(cancel).await?),
        Resource::CoreExpertise => Payload::CoreExpertise(client.core_expertise(cancel).await?),
        Resource::Timeline => Payload::Timeline(client.timeline(cancel).await?),
        Resource::Projects => Payload::Projects(client.projects(cancel).await?),
        Resource::ProjectCategories => {
            Payload::ProjectCategories(client.project_categories(cancel).await?)
        }
        other => {
            return Err(FolioError::InvalidInput(format!(
                "{} is not shown in any section",
                other
            )))
        }
    };
    Ok(payload)
}

static HTML_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static HTML_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--[\s\S]*?-->").unwrap());

/// Strip HTML tags and comments from backend rich-text fields
pub fn plain_text(input: &str) -> String {
    let without_comments = HTML_COMMENT_REGEX.replace_all(input, "");
    HTML_TAG_REGEX
        .replace_all(&without_comments, "")
        .trim()
        .to_string()
}

/// The value if present and non-blank, otherwise the placeholder
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

/// Headline stat figure: `12+` when known, `0` otherwise
pub fn stat_figure(value: i64) -> String {
    if value > 0 {
        format!("{}+", value)
    } else {
        "0".to_string()
    }
}

/// Rendered buffer as newline-separated rows
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
