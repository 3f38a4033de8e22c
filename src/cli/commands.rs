//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pastepad")]
#[command(about = "Terminal notepad for text notes and pasted images", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notepad
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a note (opens the editor when no text is given)
    Add {
        /// Note text; words are joined with spaces
        text: Vec<String>,

        /// Read the note from standard input
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
    },

    /// Delete the note at a position shown by `list`
    Delete {
        /// 1-based note position
        position: usize,
    },

    /// List notes
    List,

    /// Paste images from files, directories, or `-` for stdin
    Paste {
        #[arg(required = true, value_name = "SOURCE")]
        sources: Vec<PathBuf>,
    },

    /// List pasted images
    Images,

    /// Export notes to notes.txt and each image to its own file
    Save {
        /// Output directory (default: config export_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
