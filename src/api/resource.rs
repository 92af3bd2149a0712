//! Backend resource collections and their endpoints

use std::fmt;

/// A named backend collection exposed via its own endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    PersonalInfo,
    SiteSettings,
    Projects,
    Skills,
    Experience,
    Education,
    Testimonials,
    Timeline,
    CoreExpertise,
    Tools,
    ProjectCategories,
    ExperiencePage,
    /// Combined homepage payload
    HomePage,
    /// Combined about page payload
    AboutPage,
    /// Combined skills page payload
    SkillsPage,
}

impl Resource {
    /// Endpoint path relative to the API base, with trailing slash
    pub fn path(&self) -> &'static str {
        match self {
            Resource::PersonalInfo => "personal-info/",
            Resource::SiteSettings => "site-settings/",
            Resource::Projects => "projects/",
            Resource::Skills => "skills/",
            Resource::Experience => "experience/",
            Resource::Education => "education/",
            Resource::Testimonials => "testimonials/",
            Resource::Timeline => "timeline/",
            Resource::CoreExpertise => "core-expertise/",
            Resource::Tools => "tools/",
            Resource::ProjectCategories => "project-categories/",
            Resource::ExperiencePage => "experience-page/",
            Resource::HomePage => "homepage/",
            Resource::AboutPage => "about/",
            Resource::SkillsPage => "skills-page/",
        }
    }

    /// Human-readable name used in messages and logs
    pub fn label(&self) -> &'static str {
        match self {
            Resource::PersonalInfo => "personal info",
            Resource::SiteSettings => "site settings",
            Resource::Projects => "projects",
            Resource::Skills => "skills",
            Resource::Experience => "experiences",
            Resource::Education => "education",
            Resource::Testimonials => "testimonials",
            Resource::Timeline => "timeline",
            Resource::CoreExpertise => "core expertise",
            Resource::Tools => "tools",
            Resource::ProjectCategories => "project categories",
            Resource::ExperiencePage => "experience page data",
            Resource::HomePage => "homepage data",
            Resource::AboutPage => "about page data",
            Resource::SkillsPage => "skills page data",
        }
    }

    /// Fixed failure text for this resource
    pub fn failure_message(&self) -> String {
        format!("Failed to fetch {}", self.label())
    }

    /// Get all resources
    pub fn all() -> &'static [Resource] {
        &[
            Resource::PersonalInfo,
            Resource::SiteSettings,
            Resource::Projects,
            Resource::Skills,
            Resource::Experience,
            Resource::Education,
            Resource::Testimonials,
            Resource::Timeline,
            Resource::CoreExpertise,
            Resource::Tools,
            Resource::ProjectCategories,
            Resource::ExperiencePage,
            Resource::HomePage,
            Resource::AboutPage,
            Resource::SkillsPage,
        ]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_paths_are_unique_and_slash_terminated() {
        let paths: HashSet<_> = Resource::all().iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Resource::all().len());
        assert!(Resource::all()
            .iter()
            .all(|r| r.path().ends_with('/') && !r.path().starts_with('/')));
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            Resource::Experience.failure_message(),
            "Failed to fetch experiences"
        );
        assert_eq!(
            Resource::ProjectCategories.failure_message(),
            "Failed to fetch project categories"
        );
        assert_eq!(
            Resource::CoreExpertise.failure_message(),
            "Failed to fetch core expertise"
        );
    }
}
