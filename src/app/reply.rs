//! Reply model. Replies form a tree per question through `parent_id`.

use crate::app::{Question, User};
use crate::error::AppError;
use crate::infra::{get_connection, query_records, DbPool, Record};
use rusqlite::types::Value;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: Option<i64>,
    pub question_id: i64,
    pub parent_id: Option<i64>,
    pub user_id: i64,
    pub body: String,
}

impl Reply {
    pub fn new(
        question_id: i64,
        parent_id: Option<i64>,
        user_id: i64,
        body: impl Into<String>,
    ) -> Self {
        Reply {
            id: None,
            question_id,
            parent_id,
            user_id,
            body: body.into(),
        }
    }

    pub fn find_by_user_id(pool: &DbPool, user_id: i64) -> Result<Vec<Reply>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT * FROM replies WHERE replies.user_id = ?1 ORDER BY replies.id",
            [user_id],
        )
    }

    pub fn find_by_question_id(pool: &DbPool, question_id: i64) -> Result<Vec<Reply>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT * FROM replies WHERE replies.question_id = ?1 ORDER BY replies.id",
            [question_id],
        )
    }

    pub fn author(&self, pool: &DbPool) -> Result<User, AppError> {
        User::fetch(pool, self.user_id)
    }

    pub fn question(&self, pool: &DbPool) -> Result<Question, AppError> {
        Question::fetch(pool, self.question_id)
    }

    /// `None` for a top-level reply.
    pub fn parent_reply(&self, pool: &DbPool) -> Result<Option<Reply>, AppError> {
        match self.parent_id {
            Some(parent_id) => Reply::find_by_id(pool, parent_id),
            None => Ok(None),
        }
    }

    pub fn child_replies(&self, pool: &DbPool) -> Result<Vec<Reply>, AppError> {
        let id = self.id.ok_or(AppError::NotPersisted)?;
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT * FROM replies WHERE replies.parent_id = ?1 ORDER BY replies.id",
            [id],
        )
    }
}

impl Record for Reply {
    const TABLE: &'static str = "replies";
    const COLUMNS: &'static [&'static str] = &["question_id", "parent_id", "user_id", "body"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Reply {
            id: row.get("id")?,
            question_id: row.get("question_id")?,
            parent_id: row.get("parent_id")?,
            user_id: row.get("user_id")?,
            body: row.get("body")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.question_id),
            self.parent_id.map_or(Value::Null, Value::Integer),
            Value::Integer(self.user_id),
            Value::Text(self.body.clone()),
        ]
    }
}
