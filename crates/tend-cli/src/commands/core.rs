//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status

use std::path::Path;

use anyhow::{Context, Result};
use tend_core::db::Database;

/// Open the database, creating and migrating it when missing
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add a todo: tend add \"Buy milk\"");
    println!("  2. Start web UI: tend serve");

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;
    let (total, completed) = db.count_todos()?;

    let size = std::fs::metadata(db.path()).map(|m| m.len()).unwrap_or(0);

    println!("📊 Tend status");
    println!("   Database: {}", db.path());
    println!("   Size: {} KB", size / 1024);
    println!(
        "   Todos: {} total, {} completed, {} pending",
        total,
        completed,
        total - completed
    );

    Ok(())
}
