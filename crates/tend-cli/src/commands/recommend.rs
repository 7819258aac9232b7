//! Recommendation report command

use anyhow::Result;

use tend_core::db::Database;
use tend_core::insights::RecommendationEngine;

pub fn cmd_recommend(db: &Database, json: bool) -> Result<()> {
    let todos = db.list_todos()?;

    let engine = RecommendationEngine::new();
    let report = engine.generate(&todos);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("📊 Recommendations");
    println!("   ─────────────────────────────");
    println!(
        "   {} total, {} completed, {} pending ({}% done)",
        report.stats.total_todos,
        report.stats.completed_todos,
        report.stats.pending_todos,
        report.stats.completion_rate
    );

    if !report.insights.is_empty() {
        println!();
        println!("Insights:");
        for insight in &report.insights {
            println!("  {}", insight);
        }
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  {}", suggestion);
        }
    }

    Ok(())
}
