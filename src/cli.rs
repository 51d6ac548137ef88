use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hireizon::sorting::SortOrder;

/// Extensible CLI for debugging and development
#[derive(Parser)]
#[command(name = "hireizon")]
#[command(about = "Browse, save and apply to job postings from the terminal", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the database URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the listing and print matching jobs
    Jobs {
        /// Filter by title or company
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// List saved jobs
    Saved {
        /// title-asc, title-desc or salary-desc
        #[arg(short, long)]
        sort: Option<SortOrder>,
    },
    /// Save or unsave a job from the current listing
    Save {
        id: String,
    },
    /// Remove a saved job
    Remove {
        id: String,
    },
    /// Show or toggle dark mode
    DarkMode {
        #[arg(long)]
        toggle: bool,
    },
    /// Fill the apply form for a listed job (never sent)
    Apply {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        reason: String,
    },
}
