//! # encyclopedia CLI
//!
//! Command-line and web interface for the encyclopedia wiki.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "encyclopedia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "encyclopedia.yml", env = "ENCYCLOPEDIA_CONFIG")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new encyclopedia
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Start the web interface
    Serve {
        /// Server port (overrides server.port from the config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List all entry titles
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search entry titles (case-insensitive)
    Search {
        /// Search query
        query: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a single entry
    Show {
        /// Entry title
        title: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = EntryFormat::Html)]
        format: EntryFormat,
    },

    /// Create a new entry; fails if it already exists
    New {
        /// Entry title
        title: String,

        /// Read content from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Create or replace an entry
    Edit {
        /// Entry title
        title: String,

        /// Read content from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print a random entry title
    Random,
}

#[derive(Copy, Clone, ValueEnum)]
pub enum EntryFormat {
    Html,
    Raw,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_project(path.as_deref()),
        Commands::Serve { port } => commands::serve(&cli.config, port).await,
        Commands::List { json } => commands::list_entries(&cli.config, json),
        Commands::Search { query, json } => commands::search_entries(&cli.config, &query, json),
        Commands::Show { title, format } => commands::show_entry(&cli.config, &title, format),
        Commands::New { title, file } => commands::new_entry(&cli.config, &title, file.as_deref()),
        Commands::Edit { title, file } => {
            commands::edit_entry(&cli.config, &title, file.as_deref())
        }
        Commands::Random => commands::random_entry(&cli.config),
    }
}
