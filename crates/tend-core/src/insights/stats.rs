//! Aggregate statistics over a todo snapshot

use super::types::ReportStats;
use crate::models::Todo;

/// Compute completion statistics for a snapshot
///
/// Total function: empty input yields all zeros.
pub fn compute_stats(todos: &[Todo]) -> ReportStats {
    let total = todos.len();
    let completed = todos.iter().filter(|t| t.completed).count();
    let pending = total - completed;

    let completion_rate = if total > 0 {
        (completed as f64 * 100.0 / total as f64).round() as u8
    } else {
        0
    };

    ReportStats {
        total_todos: total,
        completed_todos: completed,
        pending_todos: pending,
        completion_rate,
    }
}
