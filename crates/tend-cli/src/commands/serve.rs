//! Server command implementation

use std::path::Path;

use anyhow::Result;

use super::open_db;

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Tend web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    // Extra browser origins allowed to call the API (comma-separated)
    let allowed_origins: Vec<String> = std::env::var("TEND_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if !allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} (TEND_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }

    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path)?;

    let config = tend_server::ServerConfig { allowed_origins };

    let static_dir_str =
        static_dir.map(|p| p.to_str().expect("static_dir path must be valid UTF-8"));
    tend_server::serve_with_config(db, host, port, static_dir_str, config).await?;

    Ok(())
}
