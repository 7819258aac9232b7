//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tend - Keep your task list moving
#[derive(Parser)]
#[command(name = "tend")]
#[command(about = "Self-hosted task list with built-in recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tend.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Add a new todo
    Add {
        /// Todo title
        title: String,
    },

    /// List todos
    List {
        /// Show only pending todos
        #[arg(long, conflicts_with = "done")]
        pending: bool,

        /// Show only completed todos
        #[arg(long)]
        done: bool,
    },

    /// Mark a todo as completed
    Done {
        /// Todo ID
        id: i64,
    },

    /// Reopen a completed todo
    Reopen {
        /// Todo ID
        id: i64,
    },

    /// Delete a todo
    Rm {
        /// Todo ID
        id: i64,
    },

    /// Show recommendations for the current list
    Recommend {
        /// Print the raw report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show database status
    Status,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
