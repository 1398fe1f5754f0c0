//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use flashdeck::ProviderKind;
use std::path::PathBuf;

/// Flashdeck: turn study notes into flashcards and review them
#[derive(Parser)]
#[command(name = "flashdeck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the study app in the browser
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,

        /// Completion service used to format notes
        #[arg(long, default_value = "openai")]
        llm: ProviderKind,

        /// Model to use (provider-specific, e.g., "gpt-4o", "llama3.2")
        #[arg(long)]
        model: Option<String>,

        /// Keep the API key in memory only
        #[arg(long)]
        ephemeral_key: bool,
    },

    /// Extract flashcards from a file that is already in Q:/A: or heading form
    Extract {
        /// Path to the text file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a notes file into a deck through the completion service
    Format {
        /// Path to the notes file (.md or .txt)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Completion service to use
        #[arg(long, default_value = "openai")]
        llm: ProviderKind,

        /// Model to use (provider-specific)
        #[arg(long)]
        model: Option<String>,

        /// Output path for the deck (default: <file>.deck.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Review a saved deck in the terminal
    Study {
        /// Path to a deck file written by `format`
        #[arg(value_name = "DECK_FILE")]
        deck: PathBuf,
    },

    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
pub enum KeyAction {
    /// Store an API key
    Set {
        /// The key to store
        value: String,
    },
    /// Show the stored key, masked
    Show,
    /// Remove the stored key
    Clear,
}
