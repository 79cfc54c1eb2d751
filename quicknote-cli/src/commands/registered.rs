//! `quicknote commands`: what the extension registered at start-up.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::session::Session;
use crate::terminal::OpenMode;

pub fn run(vault: Option<&Path>) -> Result<()> {
    let session = Session::start(vault, OpenMode::Print)?;
    let ui = &session.ui;

    println!("{}", "Commands".bold());
    for command in &ui.commands {
        let hotkeys: Vec<String> = command.hotkeys.iter().map(|h| h.to_string()).collect();
        if hotkeys.is_empty() {
            println!("  {:<28} {}", command.id, command.name);
        } else {
            println!(
                "  {:<28} {} [{}]",
                command.id,
                command.name,
                hotkeys.join(", ").yellow()
            );
        }
    }

    println!("{}", "Ribbon icons".bold());
    for icon in &ui.ribbon_icons {
        println!("  {:<28} {} → {}", icon.icon, icon.title, icon.command_id);
    }

    println!("{}", "Settings tabs".bold());
    for tab in &ui.setting_tabs {
        println!("  {}", tab.title);
    }
    Ok(())
}
