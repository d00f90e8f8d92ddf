//! Follow join table: which users follow which questions.

use crate::app::{Question, User};
use crate::error::AppError;
use crate::infra::{get_connection, query_records, DbPool, Record};
use rusqlite::types::Value;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFollow {
    pub id: Option<i64>,
    pub user_id: i64,
    pub question_id: i64,
}

impl QuestionFollow {
    pub fn new(user_id: i64, question_id: i64) -> Self {
        QuestionFollow {
            id: None,
            user_id,
            question_id,
        }
    }

    pub fn followers_for_question_id(pool: &DbPool, question_id: i64) -> Result<Vec<User>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT users.id, users.fname, users.lname
             FROM users
             INNER JOIN question_follows ON users.id = question_follows.user_id
             WHERE question_follows.question_id = ?1
             ORDER BY users.id",
            [question_id],
        )
    }

    pub fn followed_questions_for_user_id(
        pool: &DbPool,
        user_id: i64,
    ) -> Result<Vec<Question>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT questions.*
             FROM questions
             INNER JOIN question_follows ON questions.id = question_follows.question_id
             WHERE question_follows.user_id = ?1
             ORDER BY questions.id",
            [user_id],
        )
    }

    /// Top `n` questions by follower count; ties go to the older question.
    pub fn most_followed_questions(pool: &DbPool, n: i64) -> Result<Vec<Question>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT questions.*
             FROM question_follows
             INNER JOIN questions ON question_follows.question_id = questions.id
             GROUP BY questions.id
             ORDER BY COUNT(question_follows.id) DESC, questions.id ASC
             LIMIT ?1",
            [n],
        )
    }
}

impl Record for QuestionFollow {
    const TABLE: &'static str = "question_follows";
    const COLUMNS: &'static [&'static str] = &["user_id", "question_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(QuestionFollow {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            question_id: row.get("question_id")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::Integer(self.user_id), Value::Integer(self.question_id)]
    }
}
