//! Todo CRUD operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewTodo, Todo, UpdateTodo};

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?),
    })
}

impl Database {
    /// Insert a new todo and return the stored row
    ///
    /// The creation timestamp is assigned by SQLite, so the row is read back
    /// after the insert.
    pub fn insert_todo(&self, new: &NewTodo) -> Result<Todo> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidData("Todo title must not be empty".into()));
        }

        let conn = self.conn()?;
        conn.execute("INSERT INTO todos (title) VALUES (?)", params![title])?;
        let id = conn.last_insert_rowid();

        let todo = conn.query_row(
            "SELECT id, title, completed, created_at FROM todos WHERE id = ?",
            params![id],
            row_to_todo,
        )?;
        Ok(todo)
    }

    /// List all todos, newest first
    pub fn list_todos(&self) -> Result<Vec<Todo>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, completed, created_at FROM todos
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], row_to_todo)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Get a todo by id
    pub fn get_todo(&self, id: i64) -> Result<Option<Todo>> {
        let conn = self.conn()?;
        let todo = conn
            .query_row(
                "SELECT id, title, completed, created_at FROM todos WHERE id = ?",
                params![id],
                row_to_todo,
            )
            .optional()?;
        Ok(todo)
    }

    /// Partially update a todo; absent fields keep their stored values
    ///
    /// Returns the updated row, or None when no todo has the given id.
    pub fn update_todo(&self, id: i64, update: &UpdateTodo) -> Result<Option<Todo>> {
        if let Some(title) = update.title.as_deref() {
            if title.trim().is_empty() {
                return Err(Error::InvalidData("Todo title must not be empty".into()));
            }
        }

        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE todos
             SET title = COALESCE(?, title), completed = COALESCE(?, completed)
             WHERE id = ?",
            params![
                update.title.as_deref().map(str::trim),
                update.completed,
                id
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        self.get_todo(id)
    }

    /// Delete a todo; returns false when no row matched
    pub fn delete_todo(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM todos WHERE id = ?", params![id])?;
        Ok(deleted > 0)
    }

    /// Total and completed counts, for status summaries
    pub fn count_todos(&self) -> Result<(i64, i64)> {
        let conn = self.conn()?;
        let counts = conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM todos",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(counts)
    }
}
