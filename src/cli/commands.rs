//! CLI command definitions using clap
//!
//! Defines the command structure for the `folio` CLI tool.

use clap::{Parser, Subcommand, ValueEnum};

use crate::api::Resource;
use crate::core::theme::ThemeKind;

/// folio - terminal portfolio viewer
///
/// Browse a portfolio served by the REST backend in twenty color themes.
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Portfolio API base address (overrides the configured one)
    #[arg(long, global = true, env = "FOLIO_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Theme id to start with (overrides the configured one)
    #[arg(long, global = true, value_name = "ID")]
    pub theme: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the theme registry
    Themes(ThemesArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Fetch a resource and print its JSON body
    Fetch(FetchArgs),

    /// Send a message through the contact form
    Contact(ContactArgs),

    /// Subscribe an email address to the newsletter
    Subscribe {
        /// Email address to subscribe
        email: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Theme commands
#[derive(Parser, Debug)]
pub struct ThemesArgs {
    #[command(subcommand)]
    pub command: ThemesCommand,
}

#[derive(Subcommand, Debug)]
pub enum ThemesCommand {
    /// List registered themes
    List {
        /// Only show themes of this kind
        #[arg(long)]
        kind: Option<KindArg>,
    },

    /// Show the colors of one theme
    Show {
        /// Theme id
        id: String,

        /// Print the theme as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Theme kind filter
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Dark,
    Light,
}

impl KindArg {
    pub fn to_kind(&self) -> ThemeKind {
        match self {
            KindArg::Dark => ThemeKind::Dark,
            KindArg::Light => ThemeKind::Light,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Reset a configuration value to its default
    Remove {
        /// Configuration key
        key: ConfigKey,
    },
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKey {
    /// Portfolio API base address
    #[value(name = "api-url")]
    ApiUrl,

    /// Startup theme id
    #[value(name = "theme")]
    Theme,

    /// Whether theme changes in the TUI are saved
    #[value(name = "remember-theme")]
    RememberTheme,
}

// ─────────────────────────────────────────────────────────────────────────────
// Fetch Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Fetch arguments
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Resource to fetch
    pub resource: ResourceArg,

    /// Project slug (projects only): fetch a single project
    #[arg(long)]
    pub slug: Option<String>,

    /// Category slug filter (projects only)
    #[arg(long)]
    pub category: Option<String>,

    /// Only featured projects (projects only)
    #[arg(long)]
    pub featured: bool,

    /// Search projects by title, description or technology (projects only)
    #[arg(long)]
    pub search: Option<String>,
}

/// Fetchable backend resources
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResourceArg {
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
    Homepage,
    About,
    SkillsPage,
}

impl ResourceArg {
    pub fn to_resource(&self) -> Resource {
        match self {
            ResourceArg::PersonalInfo => Resource::PersonalInfo,
            ResourceArg::SiteSettings => Resource::SiteSettings,
            ResourceArg::Projects => Resource::Projects,
            ResourceArg::Skills => Resource::Skills,
            ResourceArg::Experience => Resource::Experience,
            ResourceArg::Education => Resource::Education,
            ResourceArg::Testimonials => Resource::Testimonials,
            ResourceArg::Timeline => Resource::Timeline,
            ResourceArg::CoreExpertise => Resource::CoreExpertise,
            ResourceArg::Tools => Resource::Tools,
            ResourceArg::ProjectCategories => Resource::ProjectCategories,
            ResourceArg::ExperiencePage => Resource::ExperiencePage,
            ResourceArg::Homepage => Resource::HomePage,
            ResourceArg::About => Resource::AboutPage,
            ResourceArg::SkillsPage => Resource::SkillsPage,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Contact form fields
#[derive(Parser, Debug)]
pub struct ContactArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email address
    #[arg(long)]
    pub email: String,

    /// Subject line
    #[arg(long, default_value = "Project Inquiry")]
    pub subject: String,

    /// Message body
    #[arg(long, short)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resource_args_cover_every_resource() {
        for arg in ResourceArg::value_variants() {
            assert!(Resource::all().contains(&arg.to_resource()));
        }
        assert_eq!(ResourceArg::value_variants().len(), Resource::all().len());
    }

    #[test]
    fn test_resource_arg_names_match_endpoints() {
        let name = |arg: ResourceArg| arg.to_possible_value().unwrap().get_name().to_string();
        assert_eq!(name(ResourceArg::PersonalInfo), "personal-info");
        assert_eq!(name(ResourceArg::ExperiencePage), "experience-page");
        assert_eq!(name(ResourceArg::Homepage), "homepage");
    }

    #[test]
    fn test_global_options_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "folio",
            "fetch",
            "projects",
            "--featured",
            "--api-url",
            "http://example.com/api",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://example.com/api"));
        match cli.command {
            Some(Commands::Fetch(args)) => {
                assert_eq!(args.resource, ResourceArg::Projects);
                assert!(args.featured);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
