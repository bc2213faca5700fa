//! Dukkan CLI - theme document management.
//!
//! # Usage
//!
//! ```bash
//! dukkan-cli themes list
//! dukkan-cli themes show tech-hub
//! dukkan-cli themes reset tech-hub --theme modern
//! dukkan-cli themes import tech-hub tech-hub.json
//! dukkan-cli themes export tech-hub --format yaml
//! ```
//!
//! # Commands
//!
//! - `themes list` - Saved version of every demo store
//! - `themes show` - One store's theme, colors and section order
//! - `themes reset` - Save theme defaults as the next version
//! - `themes import` - Validate a JSON or YAML document and save it
//! - `themes export` - Print or write the current document

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::themes::{Format, Themes};

#[derive(Parser)]
#[command(name = "dukkan-cli")]
#[command(author, version, about = "Dukkan CLI tools")]
struct Cli {
    /// Theme document directory
    #[arg(long, global = true, env = "THEME_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage saved theme documents
    Themes {
        #[command(subcommand)]
        action: ThemesAction,
    },
}

#[derive(Subcommand)]
enum ThemesAction {
    /// List every store with its saved theme version
    List,
    /// Show one store's current document
    Show {
        /// Store id, e.g. `tech-hub`
        store: String,
    },
    /// Restore theme defaults, saved as the next version
    Reset {
        /// Store id
        store: String,

        /// Switch to this theme (defaults to the store's own)
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Import a JSON or YAML document (format from the file extension)
    Import {
        /// Store id; must match the document
        store: String,

        /// Document file
        file: PathBuf,
    },
    /// Export the current document
    Export {
        /// Store id
        store: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dukkan_cli=info,dukkan_admin=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let themes = cli.data_dir.map_or_else(Themes::from_env, Themes::new);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Themes { action } => match action {
            ThemesAction::List => themes.list(&mut stdout).await?,
            ThemesAction::Show { store } => themes.show(&store, &mut stdout).await?,
            ThemesAction::Reset { store, theme } => {
                let doc = themes.reset(&store, theme.as_deref()).await?;
                writeln!(stdout, "{} reset to {} defaults (v{})", doc.store_id, doc.theme, doc.version)?;
            }
            ThemesAction::Import { store, file } => {
                let doc = themes.import(&store, &file).await?;
                writeln!(stdout, "{} imported as v{}", doc.store_id, doc.version)?;
            }
            ThemesAction::Export {
                store,
                format,
                output,
            } => {
                let document = themes.export(&store, format).await?;
                match output {
                    Some(path) => {
                        tokio::fs::write(&path, document).await?;
                        tracing::info!("Wrote {}", path.display());
                    }
                    None => writeln!(stdout, "{document}")?,
                }
            }
        },
    }
    Ok(())
}
