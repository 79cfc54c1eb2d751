//! `quicknote settings show|set-folder|clear`

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Subcommand;
use colored::Colorize;

use quicknote_core::SettingsPanel;

use crate::session::Session;
use crate::terminal::OpenMode;

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Render the settings panel.
    Show,

    /// Choose the folder where numbered notes are created.
    SetFolder {
        /// Existing vault folder, e.g. "Inbox" or "Notes/Daily".
        folder: String,
    },

    /// Unset the target folder.
    Clear,
}

pub fn run(vault: Option<&Path>, command: SettingsCommand) -> Result<()> {
    let mut session = Session::start(vault, OpenMode::Print)?;
    match command {
        SettingsCommand::Show => {
            let panel = session
                .extension
                .settings_panel()
                .context("failed to build settings panel")?;
            print_panel(&panel, &session.root);
        }
        SettingsCommand::SetFolder { folder } => {
            let panel = session
                .extension
                .settings_panel()
                .context("failed to list vault folders")?;
            if !panel.offers(&folder) {
                let choices: Vec<&str> = panel
                    .options
                    .iter()
                    .filter(|o| !o.value.is_empty())
                    .map(|o| o.value.as_str())
                    .collect();
                return Err(anyhow!(
                    "'{folder}' is not a folder in this vault; choose one of: {}",
                    if choices.is_empty() { "(none)".to_string() } else { choices.join(", ") }
                ));
            }
            session
                .extension
                .set_target_folder(&folder)
                .context("failed to save settings")?;
            println!(
                "✓ Target folder set to '{}'",
                session.extension.settings().target_folder
            );
        }
        SettingsCommand::Clear => {
            session
                .extension
                .set_target_folder("")
                .context("failed to save settings")?;
            println!("✓ Target folder cleared");
        }
    }
    Ok(())
}

fn print_panel(panel: &SettingsPanel, root: &Path) {
    println!("{}", panel.heading.bold());
    println!("{}", format!("Vault: {}", root.display()).bright_black());
    println!();
    println!("{}", panel.name.bold());
    println!("{}", panel.description);
    for option in &panel.options {
        let label = if option.value.is_empty() {
            "(unset)".italic().to_string()
        } else {
            option.label.clone()
        };
        let marker = if option.value == panel.selected { "●".green().to_string() } else { "○".to_string() };
        println!("  {marker} {label}");
    }
    if !panel.offers(&panel.selected) {
        println!(
            "  {} current value '{}' is not a folder in this vault",
            "!".yellow().bold(),
            panel.selected
        );
    }
    println!();
    for note in panel.notes {
        println!("{note}");
    }
}
