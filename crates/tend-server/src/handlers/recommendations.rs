//! Recommendation report handler

use std::sync::Arc;

use axum::{extract::State, Json};

use tend_core::insights::{RecommendationEngine, Report};

use crate::{AppError, AppState};

/// GET /api/recommendations - Generate a report over the current todos
///
/// Materializes the snapshot once and hands it to the engine together with
/// the current local time.
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Report>, AppError> {
    let todos = state.db.list_todos()?;

    let engine = RecommendationEngine::new();
    let report = engine.generate(&todos);

    tracing::debug!(
        todos = todos.len(),
        insights = report.insights.len(),
        suggestions = report.suggestions.len(),
        "Recommendations generated"
    );

    Ok(Json(report))
}
