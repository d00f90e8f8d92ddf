//! User model and the queries that start from a user.

use crate::app::{Question, QuestionFollow, QuestionLike, Reply};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool, Record};
use rusqlite::types::Value;
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub fname: String,
    pub lname: String,
}

impl User {
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        User {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }

    /// First user with exactly this first and last name.
    pub fn find_by_name(pool: &DbPool, fname: &str, lname: &str) -> Result<Option<User>, AppError> {
        let conn = get_connection(pool);
        let user = conn
            .query_row(
                "SELECT * FROM users WHERE users.fname = ?1 AND users.lname = ?2 ORDER BY users.id LIMIT 1",
                params![fname, lname],
                |row| User::from_row(row),
            )
            .optional()?;
        Ok(user)
    }

    pub fn authored_questions(&self, pool: &DbPool) -> Result<Vec<Question>, AppError> {
        Question::find_by_author_id(pool, self.persisted_id()?)
    }

    pub fn authored_replies(&self, pool: &DbPool) -> Result<Vec<Reply>, AppError> {
        Reply::find_by_user_id(pool, self.persisted_id()?)
    }

    pub fn followed_questions(&self, pool: &DbPool) -> Result<Vec<Question>, AppError> {
        QuestionFollow::followed_questions_for_user_id(pool, self.persisted_id()?)
    }

    pub fn liked_questions(&self, pool: &DbPool) -> Result<Vec<Question>, AppError> {
        QuestionLike::liked_questions_for_user_id(pool, self.persisted_id()?)
    }

    /// Likes received per authored question. `None` when the user has asked nothing.
    pub fn average_karma(&self, pool: &DbPool) -> Result<Option<f64>, AppError> {
        let id = self.persisted_id()?;
        let conn = get_connection(pool);
        let karma = conn.query_row(
            "SELECT CAST(COUNT(question_likes.user_id) AS FLOAT) / COUNT(DISTINCT(questions.id)) AS avg_karma
             FROM questions
             LEFT OUTER JOIN question_likes ON questions.id = question_likes.question_id
             WHERE questions.user_id = ?1",
            [id],
            |r| r.get::<_, Option<f64>>(0),
        )?;
        Ok(karma)
    }

    fn persisted_id(&self) -> Result<i64, AppError> {
        self.id.ok_or(AppError::NotPersisted)
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["fname", "lname"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get("id")?,
            fname: row.get("fname")?,
            lname: row.get("lname")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.fname.clone()),
            Value::Text(self.lname.clone()),
        ]
    }
}
