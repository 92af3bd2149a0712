//! Typed portfolio records and the normalization step
//!
//! The backend owns the record shapes. Every field here has a default so the
//! views never have to guess at missing data. A field that is missing, `null`
//! or of the wrong type takes its default, and list entries that are not
//! records are dropped one by one.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::resource::Resource;

/// Map a verbatim response body to a fully-defaulted record
pub fn normalize<T: DeserializeOwned + Default>(resource: Resource, body: Value) -> T {
    match serde_json::from_value(body) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(resource = %resource, error = %e, "unexpected response shape, using defaults");
            T::default()
        }
    }
}

/// Map a verbatim list body to records, dropping only the entries that do not fit
pub fn normalize_list<T: DeserializeOwned>(resource: Resource, body: Value) -> Vec<T> {
    let Value::Array(items) = body else {
        tracing::warn!(resource = %resource, "expected a list body, using an empty list");
        return Vec::new();
    };

    let total = items.len();
    let records: Vec<T> = list_entries(items);
    if records.len() < total {
        tracing::warn!(
            resource = %resource,
            dropped = total - records.len(),
            "skipped list entries with an unexpected shape"
        );
    }
    records
}

fn list_entries<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// Field decoder that maps `null` or a mistyped value to the type's default
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(list_entries(items)),
        _ => Ok(Vec::new()),
    }
}

fn lenient_or<'de, D, T>(deserializer: D, fallback: T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or(fallback))
}

fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    lenient_or(deserializer, DEFAULT_RATING)
}

fn lenient_primary_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient_or(deserializer, DEFAULT_PRIMARY_COLOR.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Personal info & site settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub tagline: String,
    #[serde(deserialize_with = "lenient")]
    pub hero_description: String,
    #[serde(deserialize_with = "lenient")]
    pub about_heading: String,
    #[serde(deserialize_with = "lenient")]
    pub about_description: String,
    #[serde(deserialize_with = "lenient")]
    pub about_detail: String,
    #[serde(deserialize_with = "lenient")]
    pub email: String,
    #[serde(deserialize_with = "lenient")]
    pub phone: String,
    #[serde(deserialize_with = "lenient")]
    pub location: String,
    #[serde(deserialize_with = "lenient")]
    pub availability_status: String,

    #[serde(deserialize_with = "lenient")]
    pub years_experience: i64,
    #[serde(deserialize_with = "lenient")]
    pub projects_completed: i64,
    #[serde(deserialize_with = "lenient")]
    pub awards_won: i64,
    #[serde(deserialize_with = "lenient")]
    pub happy_clients: i64,

    #[serde(deserialize_with = "lenient")]
    pub linkedin_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub github_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub twitter_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub dribbble_url: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub resume_pdf: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub footer_tagline: String,
    #[serde(deserialize_with = "lenient")]
    pub copyright_text: String,
}

/// A named external profile link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: String,
}

impl PersonalInfo {
    /// Social links that are actually set, in display order
    pub fn social_links(&self) -> Vec<SocialLink> {
        [
            ("LinkedIn", &self.linkedin_url),
            ("GitHub", &self.github_url),
            ("Twitter", &self.twitter_url),
            ("Dribbble", &self.dribbble_url),
        ]
        .into_iter()
        .filter_map(|(name, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| SocialLink {
                    name,
                    url: u.to_string(),
                })
        })
        .collect()
    }

    /// Headline stats shown on the hero and about sections
    pub fn stats(&self) -> Stats {
        Stats {
            years_experience: self.years_experience,
            projects_completed: self.projects_completed,
            awards_won: self.awards_won,
            happy_clients: self.happy_clients,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(deserialize_with = "lenient")]
    pub years_experience: i64,
    #[serde(deserialize_with = "lenient")]
    pub projects_completed: i64,
    #[serde(deserialize_with = "lenient")]
    pub awards_won: i64,
    #[serde(deserialize_with = "lenient")]
    pub happy_clients: i64,
}

const DEFAULT_PRIMARY_COLOR: &str = "#D4AF37";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    #[serde(deserialize_with = "lenient")]
    pub site_title: String,
    #[serde(deserialize_with = "lenient")]
    pub site_description: String,
    #[serde(deserialize_with = "lenient")]
    pub favicon: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub meta_keywords: String,
    #[serde(deserialize_with = "lenient")]
    pub google_analytics_id: String,
    #[serde(deserialize_with = "lenient_primary_color")]
    pub primary_color: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: String::new(),
            site_description: String::new(),
            favicon: None,
            logo: None,
            meta_keywords: String::new(),
            google_analytics_id: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────────────────────

/// Label of the filter that shows every project
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub slug: String,
    #[serde(deserialize_with = "lenient")]
    pub category_name: String,
    #[serde(deserialize_with = "lenient")]
    pub category_slug: String,
    #[serde(deserialize_with = "lenient")]
    pub short_description: String,
    /// Only present on the detail endpoint
    #[serde(deserialize_with = "lenient")]
    pub full_description: String,
    #[serde(deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub technologies_list: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_featured: bool,
    #[serde(deserialize_with = "lenient")]
    pub live_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub github_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub case_study_url: Option<String>,
}

impl Project {
    /// Whether the project passes a category filter label
    pub fn matches_filter(&self, filter: &str) -> bool {
        filter == ALL_CATEGORIES || self.category_name == filter
    }

    /// Longest description available
    pub fn description(&self) -> &str {
        if self.full_description.trim().is_empty() {
            &self.short_description
        } else {
            &self.full_description
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCategory {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub slug: String,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
    #[serde(deserialize_with = "lenient")]
    pub project_count: i64,
}

/// Filter labels: "All" followed by each category name
pub fn category_filters(categories: &[ProjectCategory]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories.iter().map(|c| c.name.clone()))
        .collect()
}

/// Projects passing a filter label
pub fn filter_projects<'a>(projects: &'a [Project], filter: &str) -> Vec<&'a Project> {
    projects.iter().filter(|p| p.matches_filter(filter)).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills, expertise, tools
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreExpertise {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub icon_name: String,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub category: String,
    #[serde(deserialize_with = "lenient")]
    pub category_display: String,
    /// 1 to 5
    #[serde(deserialize_with = "lenient")]
    pub proficiency: i64,
    #[serde(deserialize_with = "lenient")]
    pub icon_name: String,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Experience, education, timeline, testimonials
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub company: String,
    #[serde(deserialize_with = "lenient")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_current: bool,
    #[serde(deserialize_with = "lenient")]
    pub date_display: String,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient_list")]
    pub technologies_list: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub degree: String,
    #[serde(deserialize_with = "lenient")]
    pub institution: String,
    #[serde(deserialize_with = "lenient")]
    pub year: i64,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub icon_name: String,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub year: i64,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
}

const DEFAULT_RATING: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub client_name: String,
    #[serde(deserialize_with = "lenient")]
    pub client_position: String,
    #[serde(deserialize_with = "lenient")]
    pub client_company: String,
    #[serde(deserialize_with = "lenient")]
    pub client_photo: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub testimonial: String,
    /// 1 to 5
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: i64,
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: 0,
            client_name: String::new(),
            client_position: String::new(),
            client_company: String::new(),
            client_photo: None,
            testimonial: String::new(),
            rating: DEFAULT_RATING,
            order: 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Combined page payloads
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperiencePage {
    #[serde(deserialize_with = "lenient_list")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "lenient_list")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient_list")]
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomePage {
    #[serde(deserialize_with = "lenient")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient_list")]
    pub core_expertise: Vec<CoreExpertise>,
    #[serde(deserialize_with = "lenient_list")]
    pub featured_projects: Vec<Project>,
    #[serde(deserialize_with = "lenient_list")]
    pub timeline: Vec<TimelineEntry>,
    #[serde(deserialize_with = "lenient")]
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutPage {
    #[serde(deserialize_with = "lenient")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient_list")]
    pub core_expertise: Vec<CoreExpertise>,
    #[serde(deserialize_with = "lenient_list")]
    pub timeline: Vec<TimelineEntry>,
    #[serde(deserialize_with = "lenient")]
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsPage {
    #[serde(deserialize_with = "lenient")]
    pub skills_by_category: BTreeMap<String, SkillGroup>,
    #[serde(deserialize_with = "lenient_list")]
    pub tools: Vec<Tool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Forms
// ─────────────────────────────────────────────────────────────────────────────

/// Contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Backend acknowledgement of a form submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SubmitAck {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_personal_info_missing_fields_default() {
        let info: PersonalInfo =
            normalize(Resource::PersonalInfo, json!({ "name": "Jane Doe" }));
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.title, "");
        assert_eq!(info.years_experience, 0);
        assert!(info.social_links().is_empty());
    }

    #[test]
    fn test_wrong_shape_normalizes_to_default() {
        let projects: Vec<Project> =
            normalize(Resource::Projects, json!({ "detail": "Not found" }));
        assert!(projects.is_empty());

        let info: PersonalInfo = normalize(Resource::PersonalInfo, Value::Null);
        assert_eq!(info, PersonalInfo::default());
    }

    #[test]
    fn test_social_links_skip_absent_and_blank() {
        let info: PersonalInfo = normalize(
            Resource::PersonalInfo,
            json!({
                "linkedin_url": "https://linkedin.com/in/jane",
                "github_url": null,
                "twitter_url": "  ",
                "dribbble_url": "https://dribbble.com/jane"
            }),
        );
        let links = info.social_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, "LinkedIn");
        assert_eq!(links[1].name, "Dribbble");
        assert_eq!(links[1].url, "https://dribbble.com/jane");
    }

    #[test]
    fn test_category_filters_and_project_filtering() {
        let categories: Vec<ProjectCategory> = normalize(
            Resource::ProjectCategories,
            json!([
                { "id": 1, "name": "Web Design", "slug": "web-design" },
                { "id": 2, "name": "Backend", "slug": "backend" }
            ]),
        );
        assert_eq!(
            category_filters(&categories),
            vec!["All", "Web Design", "Backend"]
        );

        let projects: Vec<Project> = normalize(
            Resource::Projects,
            json!([
                { "id": 1, "title": "Shop", "category_name": "Web Design" },
                { "id": 2, "title": "API", "category_name": "Backend" },
                { "id": 3, "title": "Portal", "category_name": "Web Design" }
            ]),
        );
        assert_eq!(filter_projects(&projects, "All").len(), 3);
        let web: Vec<_> = filter_projects(&projects, "Web Design")
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(web, vec!["Shop", "Portal"]);
        assert!(filter_projects(&projects, "Mobile").is_empty());
    }

    #[test]
    fn test_project_description_prefers_full_text() {
        let mut project = Project {
            short_description: "Short".into(),
            ..Default::default()
        };
        assert_eq!(project.description(), "Short");
        project.full_description = "A much longer story".into();
        assert_eq!(project.description(), "A much longer story");
    }

    #[test]
    fn test_defaults_carry_backend_defaults() {
        assert_eq!(SiteSettings::default().primary_color, "#D4AF37");
        assert_eq!(Testimonial::default().rating, 5);
    }

    #[test]
    fn test_experience_page_payload() {
        let page: ExperiencePage = normalize(
            Resource::ExperiencePage,
            json!({
                "experience": [{
                    "id": 4,
                    "title": "Lead Designer",
                    "company": "Acme",
                    "start_date": "2022-01-01",
                    "end_date": null,
                    "is_current": true,
                    "date_display": "Jan 2022 - Present",
                    "technologies_list": ["Figma", "React"],
                    "achievements": [{ "id": 1, "description": "Shipped v2", "order": 0 }]
                }],
                "education": [],
                "timeline": [{ "year": 2020, "title": "Started Freelancing" }]
            }),
        );
        assert_eq!(page.experience.len(), 1);
        assert!(page.experience[0].is_current);
        assert_eq!(page.experience[0].end_date, None);
        assert_eq!(page.experience[0].achievements[0].description, "Shipped v2");
        assert_eq!(page.timeline[0].year, 2020);
    }

    #[test]
    fn test_null_or_mistyped_field_keeps_the_rest_of_the_record() {
        let info: PersonalInfo = normalize(
            Resource::PersonalInfo,
            json!({
                "name": "Jane Doe",
                "years_experience": 7,
                "phone": null,
                "happy_clients": "many",
                "github_url": 42
            }),
        );
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.years_experience, 7);
        assert_eq!(info.phone, "");
        assert_eq!(info.happy_clients, 0);
        assert_eq!(info.github_url, None);
    }

    #[test]
    fn test_mistyped_field_falls_back_to_backend_default() {
        let settings: SiteSettings = normalize(
            Resource::SiteSettings,
            json!({ "site_title": "Folio", "primary_color": null }),
        );
        assert_eq!(settings.site_title, "Folio");
        assert_eq!(settings.primary_color, "#D4AF37");

        let testimonials: Vec<Testimonial> = normalize_list(
            Resource::Testimonials,
            json!([{ "client_name": "Sam", "rating": "five" }]),
        );
        assert_eq!(testimonials[0].client_name, "Sam");
        assert_eq!(testimonials[0].rating, 5);
    }

    #[test]
    fn test_null_list_field_keeps_the_project() {
        let projects: Vec<Project> = normalize(
            Resource::Projects,
            json!([
                { "title": "Shop" },
                { "title": "API", "technologies_list": null }
            ]),
        );
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].title, "API");
        assert!(projects[1].technologies_list.is_empty());
    }

    #[test]
    fn test_list_drops_only_entries_that_are_not_records() {
        let projects: Vec<Project> = normalize_list(
            Resource::Projects,
            json!([
                { "title": "Shop", "technologies_list": ["React", 3, "Django"] },
                "not a project",
                null,
                { "title": "API" }
            ]),
        );
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Shop", "API"]);
        assert_eq!(projects[0].technologies_list, vec!["React", "Django"]);

        let empty: Vec<Project> =
            normalize_list(Resource::Projects, json!({ "detail": "Not found" }));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_home_page_payload() {
        let page: HomePage = normalize(
            Resource::HomePage,
            json!({
                "personal_info": { "name": "Jane Doe", "phone": null },
                "core_expertise": [{ "id": 1, "title": "Brand Identity", "icon_name": "palette" }],
                "featured_projects": [
                    { "title": "Shop", "slug": "shop", "is_featured": true },
                    "broken"
                ],
                "timeline": null,
                "stats": {
                    "years_experience": 8,
                    "projects_completed": 120,
                    "awards_won": 4,
                    "happy_clients": 60
                }
            }),
        );
        assert_eq!(page.personal_info.name, "Jane Doe");
        assert_eq!(page.core_expertise[0].title, "Brand Identity");
        assert_eq!(page.featured_projects.len(), 1);
        assert!(page.featured_projects[0].is_featured);
        assert!(page.timeline.is_empty());
        assert_eq!(page.stats.projects_completed, 120);
    }

    #[test]
    fn test_about_page_payload() {
        let page: AboutPage = normalize(
            Resource::AboutPage,
            json!({
                "personal_info": { "about_heading": "Hi there", "years_experience": 8 },
                "core_expertise": [],
                "timeline": [
                    { "year": 2023, "title": "Opened the studio", "order": 0 },
                    { "year": 2019, "title": "First client", "order": 1 }
                ],
                "stats": { "years_experience": 8, "happy_clients": null }
            }),
        );
        assert_eq!(page.personal_info.about_heading, "Hi there");
        assert_eq!(page.timeline.len(), 2);
        assert_eq!(page.timeline[1].title, "First client");
        assert_eq!(page.stats.years_experience, 8);
        assert_eq!(page.stats.happy_clients, 0);
    }

    #[test]
    fn test_skills_page_groups_by_category_key() {
        let page: SkillsPage = normalize(
            Resource::SkillsPage,
            json!({
                "skills_by_category": {
                    "frontend": {
                        "name": "Frontend",
                        "skills": [
                            { "id": 1, "name": "React", "category": "frontend", "proficiency": 5 },
                            { "id": 2, "name": "CSS", "category": "frontend", "proficiency": 4 }
                        ]
                    },
                    "design": {
                        "name": "Design",
                        "skills": [{ "id": 3, "name": "Figma", "category": "design" }]
                    }
                },
                "tools": [{ "id": 1, "name": "VS Code", "order": 0 }]
            }),
        );
        assert_eq!(page.skills_by_category.len(), 2);
        let frontend = &page.skills_by_category["frontend"];
        assert_eq!(frontend.name, "Frontend");
        assert_eq!(frontend.skills[1].name, "CSS");
        assert_eq!(frontend.skills[1].proficiency, 4);
        assert_eq!(page.skills_by_category["design"].skills[0].name, "Figma");
        assert_eq!(page.tools[0].name, "VS Code");
    }
}
