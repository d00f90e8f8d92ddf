//! Generic persistence for model types.
//!
//! A model describes its table and persisted columns; the SQL for lookups,
//! inserts and updates is generated from that description. Only identifiers
//! declared by the model are ever spliced into SQL text, values are always
//! bound as parameters.

use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Params, Row};

pub trait Record: Sized {
    /// Table the model is stored in.
    const TABLE: &'static str;
    /// Persisted columns other than `id`, in the order `values` yields them.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
    fn values(&self) -> Vec<Value>;

    fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Self>, AppError> {
        let conn = get_connection(pool);
        let sql = select_by_id_sql(Self::TABLE);
        log::debug!("{} [{}]", sql, id);
        let found = conn
            .query_row(&sql, [id], |row| Self::from_row(row))
            .optional()?;
        Ok(found)
    }

    /// Like `find_by_id`, but a missing row is an error.
    fn fetch(pool: &DbPool, id: i64) -> Result<Self, AppError> {
        Self::find_by_id(pool, id)?
            .ok_or_else(|| AppError::NotFound(format!("{} {}", Self::TABLE, id)))
    }

    fn all(pool: &DbPool) -> Result<Vec<Self>, AppError> {
        let conn = get_connection(pool);
        let sql = format!("SELECT * FROM {} ORDER BY id", Self::TABLE);
        query_records(&conn, &sql, [])
    }

    /// Rows where every `(column, value)` pair matches. `Value::Null` matches NULL.
    fn where_eq(pool: &DbPool, filters: &[(&str, Value)]) -> Result<Vec<Self>, AppError> {
        if filters.is_empty() {
            return Err(AppError::Validation("at least one filter is required".into()));
        }
        for (column, _) in filters {
            if !is_known_column::<Self>(column) {
                return Err(AppError::Validation(format!(
                    "unknown column {} for {}",
                    column,
                    Self::TABLE
                )));
            }
        }
        let sql = where_sql(Self::TABLE, filters);
        let bound: Vec<&Value> = filters
            .iter()
            .map(|(_, v)| v)
            .filter(|v| **v != Value::Null)
            .collect();
        let conn = get_connection(pool);
        query_records(&conn, &sql, params_from_iter(bound))
    }

    fn count(pool: &DbPool) -> Result<i64, AppError> {
        let conn = get_connection(pool);
        let n = conn.query_row(&format!("SELECT COUNT(*) FROM {}", Self::TABLE), [], |r| {
            r.get(0)
        })?;
        Ok(n)
    }

    /// Insert a new row and record its id. Refuses records that already have one.
    fn create(&mut self, pool: &DbPool) -> Result<i64, AppError> {
        if let Some(id) = self.id() {
            return Err(AppError::AlreadyPersisted(id));
        }
        let conn = get_connection(pool);
        let id = insert_with(&conn, self)?;
        self.set_id(id);
        Ok(id)
    }

    fn update(&self, pool: &DbPool) -> Result<(), AppError> {
        let id = self.id().ok_or(AppError::NotPersisted)?;
        let sql = update_sql(Self::TABLE, Self::COLUMNS);
        log::debug!("{} [id={}]", sql, id);
        let mut bound = self.values();
        bound.push(Value::Integer(id));
        let conn = get_connection(pool);
        let changed = conn.execute(&sql, params_from_iter(bound))?;
        if changed == 0 {
            return Err(AppError::NotFound(format!("{} {}", Self::TABLE, id)));
        }
        Ok(())
    }

    /// Update when persisted, insert otherwise.
    fn save(&mut self, pool: &DbPool) -> Result<i64, AppError> {
        match self.id() {
            Some(id) => self.update(pool).map(|_| id),
            None => self.create(pool),
        }
    }

    fn delete(&self, pool: &DbPool) -> Result<(), AppError> {
        let id = self.id().ok_or(AppError::NotPersisted)?;
        let conn = get_connection(pool);
        let changed = conn.execute(&format!("DELETE FROM {} WHERE id = ?1", Self::TABLE), [id])?;
        if changed == 0 {
            return Err(AppError::NotFound(format!("{} {}", Self::TABLE, id)));
        }
        Ok(())
    }
}

/// Insert on an already-locked connection (or transaction). Returns the new rowid.
pub(crate) fn insert_with<T: Record>(conn: &Connection, record: &T) -> Result<i64, AppError> {
    let sql = insert_sql(T::TABLE, T::COLUMNS);
    log::debug!("{}", sql);
    conn.execute(&sql, params_from_iter(record.values()))?;
    Ok(conn.last_insert_rowid())
}

/// Run a query whose rows are whole records of `T`.
pub(crate) fn query_records<T: Record, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<T>, AppError> {
    log::debug!("{}", sql);
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| T::from_row(row))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn is_known_column<T: Record>(column: &str) -> bool {
    column == "id" || T::COLUMNS.contains(&column)
}

pub(crate) fn select_by_id_sql(table: &str) -> String {
    format!("SELECT * FROM {table} WHERE {table}.id = ?1")
}

pub(crate) fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Insert that carries an explicit id and skips rows whose id is taken.
pub(crate) fn insert_or_ignore_sql(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len() + 1).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT OR IGNORE INTO {} (id, {}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

pub(crate) fn update_sql(table: &str, columns: &[&str]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ?{}", c, i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        table,
        sets.join(", "),
        columns.len() + 1
    )
}

pub(crate) fn where_sql(table: &str, filters: &[(&str, Value)]) -> String {
    let mut n = 0;
    let clauses: Vec<String> = filters
        .iter()
        .map(|(column, value)| {
            if *value == Value::Null {
                format!("{table}.{column} IS NULL")
            } else {
                n += 1;
                format!("{table}.{column} = ?{n}")
            }
        })
        .collect();
    format!(
        "SELECT * FROM {} WHERE {} ORDER BY {}.id",
        table,
        clauses.join(" AND "),
        table
    )
}
