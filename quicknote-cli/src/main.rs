//! quicknote: create sequentially numbered notes in a vault folder.
//!
//! # Usage
//!
//! ```text
//! quicknote [--vault <dir>] new [--open]
//! quicknote [--vault <dir>] run <command-id | icon> [--open]
//! quicknote [--vault <dir>] commands
//! quicknote [--vault <dir>] folders
//! quicknote [--vault <dir>] settings show|set-folder <folder>|clear
//! ```

mod commands;
mod session;
mod terminal;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{new::NewArgs, run::RunArgs, settings::SettingsCommand};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "quicknote",
    version,
    about = "Create sequentially numbered notes in a vault folder",
    long_about = None,
)]
struct Cli {
    /// Vault root directory (defaults to the current directory).
    #[arg(long, global = true, env = "QUICKNOTE_VAULT", value_name = "DIR")]
    vault: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the next numbered note in the target folder.
    New(NewArgs),

    /// Dispatch a registered command or ribbon icon by id.
    Run(RunArgs),

    /// List registered commands, hotkeys, and ribbon icons.
    Commands,

    /// Show vault folders with their numbered-note counts.
    Folders,

    /// Show or change the extension settings.
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let vault = cli.vault.as_deref();
    match cli.command {
        Commands::New(args) => args.run(vault),
        Commands::Run(args) => args.run(vault),
        Commands::Commands => commands::registered::run(vault).map(|()| ExitCode::SUCCESS),
        Commands::Folders => commands::folders::run(vault).map(|()| ExitCode::SUCCESS),
        Commands::Settings { command } => {
            commands::settings::run(vault, command).map(|()| ExitCode::SUCCESS)
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
