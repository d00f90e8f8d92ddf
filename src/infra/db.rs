//! SQLite connection and migrations.

use crate::config::{DbConfig, DbLocation};
use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

pub struct DbPool(pub Mutex<Connection>);

const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

/// Initialize DB at path, run migrations, return managed pool.
pub fn init_db(db_path: &Path) -> Result<DbPool, AppError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
        }
    }
    let conn = Connection::open(db_path)?;
    log::info!("Opened database at {:?}", db_path);
    prepare(conn)
}

/// Open whatever location the config resolved to.
pub fn open(config: &DbConfig) -> Result<DbPool, AppError> {
    match &config.location {
        DbLocation::File(path) => init_db(path),
        DbLocation::Memory => prepare(Connection::open_in_memory()?),
    }
}

/// In-memory database with the full schema applied.
pub fn init_test_db() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    prepare(conn).expect("migrate in-memory db")
}

fn prepare(mut conn: Connection) -> Result<DbPool, AppError> {
    conn.execute_batch("PRAGMA foreign_keys = ON")?;
    run_migrations(&mut conn)?;
    Ok(DbPool(Mutex::new(conn)))
}

fn run_migrations(conn: &mut Connection) -> Result<(), AppError> {
    let tx = conn.transaction()?;

    // Ensure schema_migrations exists (first run)
    tx.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
        [],
    )?;

    let applied: Vec<i32> = tx
        .prepare("SELECT version FROM schema_migrations ORDER BY version")?
        .query_map([], |r| r.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for (version, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }
        // The script records itself; we do it below with a timestamp.
        let statements: Vec<&str> = sql
            .split(';')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && !s.contains("INSERT INTO schema_migrations"))
            .collect();
        for stmt in statements {
            tx.execute(stmt, [])?;
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            [version],
        )?;
        log::info!("Applied migration {}", version);
    }

    tx.commit()?;
    Ok(())
}

/// Lock the shared connection. A poisoned lock still hands out the connection.
pub fn get_connection(pool: &DbPool) -> std::sync::MutexGuard<'_, Connection> {
    pool.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
