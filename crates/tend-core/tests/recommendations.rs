//! End-to-end tests: stored todos through the recommendation engine

use chrono::{Local, TimeZone};
use tend_core::{Database, NewTodo, RecommendationEngine, UpdateTodo};

fn add(db: &Database, title: &str) -> i64 {
    db.insert_todo(&NewTodo {
        title: title.to_string(),
    })
    .unwrap()
    .id
}

fn complete(db: &Database, id: i64) {
    db.update_todo(
        id,
        &UpdateTodo {
            title: None,
            completed: Some(true),
        },
    )
    .unwrap()
    .unwrap();
}

#[test]
fn test_report_over_stored_snapshot() {
    let db = Database::in_memory().unwrap();

    let a = add(&db, "Buy milk");
    add(&db, "buy milk again");
    add(&db, "Walk dog");
    complete(&db, a);

    let todos = db.list_todos().unwrap();
    let engine = RecommendationEngine::new();
    let noon = Local.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    let report = engine.generate_at(&todos, noon);

    assert_eq!(report.stats.total_todos, 3);
    assert_eq!(report.stats.completed_todos, 1);
    assert_eq!(report.stats.pending_todos, 2);
    assert_eq!(report.stats.completion_rate, 33);

    // "milk" repeats across titles, so the keyword rule fires
    assert!(report.insights.iter().any(|i| i.contains("milk")));

    // Serialized shape matches the API contract
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["stats"]["totalTodos"], 3);
    assert_eq!(json["stats"]["completionRate"], 33);
}

#[test]
fn test_report_reflects_deletes() {
    let db = Database::in_memory().unwrap();

    let keep = add(&db, "Water plants");
    let gone = add(&db, "Cancel this");
    complete(&db, keep);
    db.delete_todo(gone).unwrap();

    let todos = db.list_todos().unwrap();
    let noon = Local.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    let report = RecommendationEngine::new().generate_at(&todos, noon);

    assert_eq!(report.stats.total_todos, 1);
    assert_eq!(report.stats.completion_rate, 100);
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.contains("new goal")));
}
