//! folio-rs - terminal portfolio viewer
//!
//! Run without arguments to launch the TUI, or use subcommands for CLI mode.
//!
//! Available as the `folio` command.

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_rs::api::PortfolioClient;
use folio_rs::cli::commands::{Cli, Commands};
use folio_rs::cli::{self, config, contact, fetch, themes};
use folio_rs::core::config::Config;
use folio_rs::core::theme;
use folio_rs::core::theme_context::SharedThemeContext;
use folio_rs::error::Result;
use folio_rs::tui::App;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.command.is_none());

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging
///
/// The TUI owns the terminal, so in TUI mode logs go to `folio.log` in the
/// config directory, or nowhere if it cannot be opened.
fn init_logging(tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
        return;
    }

    let log_file = Config::config_dir().ok().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("folio.log"))
            .ok()
    });

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        // No subcommand - launch TUI mode
        return run_tui(cli.api_url.as_deref(), cli.theme.as_deref()).await;
    };

    match command {
        // Registry and configuration commands work offline
        Commands::Themes(args) => themes::handle_themes(args.command),
        Commands::Config(args) => config::handle_config(args.command),

        // Everything else talks to the backend
        Commands::Fetch(args) => fetch::handle_fetch(&backend(cli.api_url.as_deref())?, args).await,
        Commands::Contact(args) => {
            contact::handle_contact(&backend(cli.api_url.as_deref())?, args).await
        }
        Commands::Subscribe { email } => {
            contact::handle_subscribe(&backend(cli.api_url.as_deref())?, &email).await
        }
    }
}

fn backend(api_url: Option<&str>) -> Result<PortfolioClient> {
    let settings = Config::load()?;
    cli::client(api_url, &settings)
}

/// Run the TUI application
async fn run_tui(api_url: Option<&str>, theme_flag: Option<&str>) -> Result<()> {
    let settings = Config::load()?;
    let client = cli::client(api_url, &settings)?;

    let theme_id = cli::resolve_theme_id(theme_flag, &settings);
    if theme::find_theme(&theme_id).is_none() {
        tracing::warn!(theme = %theme_id, "unknown theme, using the default");
    }
    let theme_context = SharedThemeContext::with_default(&theme_id);

    let mut app = App::new(client, theme_context, settings);
    if let Ok(path) = Config::config_path() {
        app = app.with_config_path(path);
    }
    app.run().await
}
