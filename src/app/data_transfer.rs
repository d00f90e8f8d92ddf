//! Export / Import use cases: export the whole forum to JSON, import from JSON.

use crate::app::{Question, QuestionFollow, QuestionLike, Reply, User};
use crate::error::AppError;
use crate::infra::{get_connection, insert_or_ignore_sql, DbPool, Record};
use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRoot {
    pub schema_version: i32,
    pub exported_at: String,
    pub users: Vec<User>,
    pub questions: Vec<Question>,
    pub replies: Vec<Reply>,
    pub question_follows: Vec<QuestionFollow>,
    pub question_likes: Vec<QuestionLike>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub users: usize,
    pub questions: usize,
    pub replies: usize,
    pub question_follows: usize,
    pub question_likes: usize,
    /// Rows left out because their id, or a unique follow/like pair, already exists.
    pub skipped_duplicates: usize,
}

/// Export all data as JSON string
pub fn export_json_string(pool: &DbPool) -> Result<String, AppError> {
    let export_root = ExportRoot {
        schema_version: SCHEMA_VERSION,
        exported_at: Utc::now().to_rfc3339(),
        users: User::all(pool)?,
        questions: Question::all(pool)?,
        replies: Reply::all(pool)?,
        question_follows: QuestionFollow::all(pool)?,
        question_likes: QuestionLike::all(pool)?,
    };

    serde_json::to_string_pretty(&export_root)
        .map_err(|e| AppError::Db(format!("JSON serialization failed: {}", e)))
}

/// Import data from JSON string inside one transaction. Uses INSERT OR IGNORE, so rows
/// whose id or unique follow/like pair already exists are skipped rather than failing.
pub fn import_json_string(pool: &DbPool, json: &str) -> Result<ImportResult, AppError> {
    let root: ExportRoot = serde_json::from_str(json)
        .map_err(|e| AppError::Validation(format!("Invalid JSON: {}", e)))?;

    if root.schema_version != SCHEMA_VERSION {
        return Err(AppError::Validation(format!(
            "Unsupported schema version: {} (expected {})",
            root.schema_version, SCHEMA_VERSION
        )));
    }

    let conn = get_connection(pool);
    let tx = conn.unchecked_transaction()?;

    let mut result = ImportResult::default();
    // Parents before children so foreign keys hold at every insert.
    result.users = import_rows(&tx, &root.users, &mut result.skipped_duplicates)?;
    result.questions = import_rows(&tx, &root.questions, &mut result.skipped_duplicates)?;
    result.replies = import_replies(&tx, &root.replies, &mut result.skipped_duplicates)?;
    result.question_follows =
        import_rows(&tx, &root.question_follows, &mut result.skipped_duplicates)?;
    result.question_likes = import_rows(&tx, &root.question_likes, &mut result.skipped_duplicates)?;

    tx.commit()?;
    log::info!(
        "Imported {} users, {} questions, {} replies, {} follows, {} likes ({} skipped)",
        result.users,
        result.questions,
        result.replies,
        result.question_follows,
        result.question_likes,
        result.skipped_duplicates
    );
    Ok(result)
}

fn import_rows<T: Record>(
    conn: &Connection,
    rows: &[T],
    skipped: &mut usize,
) -> Result<usize, AppError> {
    Ok(insert_ignoring_duplicates(conn, rows, skipped)?.len())
}

/// Replies reference each other in any order (even themselves), so they go in
/// detached first and get their parent links once every row of the payload exists.
fn import_replies(
    conn: &Connection,
    replies: &[Reply],
    skipped: &mut usize,
) -> Result<usize, AppError> {
    let detached: Vec<Reply> = replies
        .iter()
        .map(|r| Reply {
            parent_id: None,
            ..r.clone()
        })
        .collect();
    let inserted = insert_ignoring_duplicates(conn, &detached, skipped)?;

    let parents: HashMap<i64, i64> = replies
        .iter()
        .filter_map(|r| Some((r.id?, r.parent_id?)))
        .collect();
    for id in &inserted {
        if let Some(parent_id) = parents.get(id) {
            conn.execute(
                "UPDATE replies SET parent_id = ?1 WHERE id = ?2",
                params![parent_id, id],
            )?;
        }
    }
    Ok(inserted.len())
}

/// Returns the ids that were actually written.
fn insert_ignoring_duplicates<T: Record>(
    conn: &Connection,
    rows: &[T],
    skipped: &mut usize,
) -> Result<Vec<i64>, AppError> {
    let sql = insert_or_ignore_sql(T::TABLE, T::COLUMNS);
    let mut inserted = Vec::new();
    for row in rows {
        let id = row.id().ok_or_else(|| {
            AppError::Validation(format!("{} row without id cannot be imported", T::TABLE))
        })?;
        let mut bound = vec![Value::Integer(id)];
        bound.extend(row.values());
        let changed = conn.execute(&sql, params_from_iter(bound))?;
        if changed > 0 {
            inserted.push(id);
        } else {
            *skipped += 1;
        }
    }
    Ok(inserted)
}
