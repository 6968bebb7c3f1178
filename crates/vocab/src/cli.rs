use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vocab")]
#[command(version)]
#[command(about = "English/German/Vietnamese vocabulary manager with hybrid search")]
pub struct Cli {
    /// Database file (defaults to the user data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind, e.g. 127.0.0.1:3000
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Add a word
    Add {
        english: String,
        german: String,
        vietnamese: String,
    },

    /// Show one word
    Get { id: String },

    /// List words by update time
    List {
        /// recent (default) or old / old-to-new / old_to_new
        #[arg(short, long, default_value = "recent")]
        sort: String,
    },

    /// Change fields of a word
    Update {
        id: String,
        #[arg(long)]
        english: Option<String>,
        #[arg(long)]
        german: Option<String>,
        #[arg(long)]
        vietnamese: Option<String>,
    },

    /// Delete a word
    Delete { id: String },

    /// Rank words against a free-text query
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Print version information
    Version,
}
