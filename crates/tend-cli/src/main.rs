//! Tend CLI - Task list with built-in recommendations
//!
//! Usage:
//!   tend init                 Initialize database
//!   tend add "Buy milk"       Add a todo
//!   tend recommend            Show usage recommendations
//!   tend serve --port 3000    Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Add { title } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(&db, &title)
        }
        Commands::List { pending, done } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_list(&db, pending, done)
        }
        Commands::Done { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_done(&db, id)
        }
        Commands::Reopen { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_reopen(&db, id)
        }
        Commands::Rm { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_rm(&db, id)
        }
        Commands::Recommend { json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_recommend(&db, json)
        }
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&cli.db, &host, port, static_dir.as_deref()).await,
    }
}
