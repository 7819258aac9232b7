//! Todo management commands

use anyhow::{anyhow, Result};
use chrono::Local;

use tend_core::db::Database;
use tend_core::models::{NewTodo, Todo, UpdateTodo};

pub fn cmd_add(db: &Database, title: &str) -> Result<()> {
    let todo = db.insert_todo(&NewTodo {
        title: title.to_string(),
    })?;

    println!("✅ Added #{}: {}", todo.id, todo.title);
    Ok(())
}

pub fn cmd_list(db: &Database, pending: bool, done: bool) -> Result<()> {
    let todos = db.list_todos()?;

    let filtered: Vec<&Todo> = todos
        .iter()
        .filter(|t| {
            if pending {
                !t.completed
            } else if done {
                t.completed
            } else {
                true
            }
        })
        .collect();

    if filtered.is_empty() {
        println!("No todos. Add one with: tend add \"Buy milk\"");
        return Ok(());
    }

    for todo in filtered {
        let mark = if todo.completed { "✔" } else { " " };
        let created = todo.created_at.with_timezone(&Local).format("%Y-%m-%d");
        println!("  [{}] #{:<4} {}  ({})", mark, todo.id, todo.title, created);
    }

    Ok(())
}

pub fn cmd_done(db: &Database, id: i64) -> Result<()> {
    let todo = set_completed(db, id, true)?;
    println!("✔ Completed #{}: {}", todo.id, todo.title);
    Ok(())
}

pub fn cmd_reopen(db: &Database, id: i64) -> Result<()> {
    let todo = set_completed(db, id, false)?;
    println!("↩ Reopened #{}: {}", todo.id, todo.title);
    Ok(())
}

fn set_completed(db: &Database, id: i64, completed: bool) -> Result<Todo> {
    db.update_todo(
        id,
        &UpdateTodo {
            title: None,
            completed: Some(completed),
        },
    )?
    .ok_or_else(|| anyhow!("Todo {} not found", id))
}

pub fn cmd_rm(db: &Database, id: i64) -> Result<()> {
    if !db.delete_todo(id)? {
        return Err(anyhow!("Todo {} not found", id));
    }

    println!("🗑 Deleted #{}", id);
    Ok(())
}
