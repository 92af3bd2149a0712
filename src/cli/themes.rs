//! Theme CLI command handlers

use crate::cli::commands::{KindArg, ThemesCommand};
use crate::core::theme::{self, Theme, ThemeKind};
use crate::error::{FolioError, Result};

/// Handle theme commands
pub fn handle_themes(command: ThemesCommand) -> Result<()> {
    match command {
        ThemesCommand::List { kind } => handle_list(kind),
        ThemesCommand::Show { id, json } => handle_show(&id, json),
    }
}

fn handle_list(kind: Option<KindArg>) -> Result<()> {
    let kinds = match kind {
        Some(kind) => vec![kind.to_kind()],
        None => vec![ThemeKind::Dark, ThemeKind::Light],
    };

    let default_id = theme::default_theme().id;

    for (i, kind) in kinds.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} themes:\n", kind.display_name());
        println!("  {:<26}  {:<26}  {:<8}", "ID", "NAME", "ACCENT");
        println!("  {}", "-".repeat(64));

        for theme in theme::themes_of_kind(kind) {
            let marker = if theme.id == default_id { " (default)" } else { "" };
            println!(
                "  {:<26}  {:<26}  {:<8}{}",
                theme.id, theme.name, theme.colors.accent, marker
            );
        }
    }

    Ok(())
}

fn handle_show(id: &str, json: bool) -> Result<()> {
    let theme = theme::find_theme(id).ok_or_else(|| FolioError::UnknownTheme(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&theme)?);
    } else {
        print!("{}", describe(&theme));
    }
    Ok(())
}

/// Human-readable description of a theme
pub fn describe(theme: &Theme) -> String {
    let mut out = format!("{}\n{}\n\n", theme.name, "=".repeat(theme.name.len()));
    out.push_str(&format!("  Id:             {}\n", theme.id));
    out.push_str(&format!("  Kind:           {}\n\n", theme.kind));

    for (name, value) in theme.colors.entries() {
        out.push_str(&format!("  {:<15} {}\n", format!("{}:", name), value));
    }

    out.push('\n');
    out.push_str(&format!("  {:<15} {}\n", "Button text:", theme.button_text_color()));
    out.push_str(&format!("  {:<15} {}\n", "Badge text:", theme.badge_text_color()));
    out
}
