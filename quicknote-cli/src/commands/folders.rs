//! `quicknote folders`: vault folders with their numbered notes.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use quicknote_core::host::Storage;
use quicknote_core::sequence::{numbered_children, resolve_next};

use crate::session::Session;
use crate::terminal::OpenMode;

#[derive(Tabled)]
struct FolderRow {
    #[tabled(rename = "folder")]
    folder: String,
    #[tabled(rename = "numbered notes")]
    numbered: usize,
    #[tabled(rename = "next")]
    next: String,
    #[tabled(rename = "target")]
    target: String,
}

pub fn run(vault: Option<&Path>) -> Result<()> {
    let session = Session::start(vault, OpenMode::Print)?;
    let folders = session.vault.folders().context("failed to list folders")?;
    let files = session.vault.files().context("failed to list files")?;
    let target = &session.extension.settings().target_folder;

    if folders.is_empty() {
        println!("No folders in {}.", session.root.display());
        return Ok(());
    }

    let rows: Vec<FolderRow> = folders
        .iter()
        .map(|folder| FolderRow {
            folder: folder.to_string(),
            numbered: numbered_children(&files, folder, folder.depth()).count(),
            next: resolve_next(&files, folder, folder.depth()).file_name(),
            target: if folder == target { "✓".to_string() } else { String::new() },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if target.is_unset() {
        println!(
            "{}",
            "No target folder set. Run 'quicknote settings set-folder <folder>'.".yellow()
        );
    }
    Ok(())
}
