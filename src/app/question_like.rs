//! Like join table: which users liked which questions.

use crate::app::{Question, User};
use crate::error::AppError;
use crate::infra::{get_connection, query_records, DbPool, Record};
use rusqlite::types::Value;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionLike {
    pub id: Option<i64>,
    pub user_id: i64,
    pub question_id: i64,
}

impl QuestionLike {
    pub fn new(user_id: i64, question_id: i64) -> Self {
        QuestionLike {
            id: None,
            user_id,
            question_id,
        }
    }

    pub fn likers_for_question_id(pool: &DbPool, question_id: i64) -> Result<Vec<User>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT users.*
             FROM users
             INNER JOIN question_likes ON question_likes.user_id = users.id
             WHERE question_likes.question_id = ?1
             ORDER BY users.id",
            [question_id],
        )
    }

    pub fn num_likes_for_question_id(pool: &DbPool, question_id: i64) -> Result<i64, AppError> {
        let conn = get_connection(pool);
        let count = conn.query_row(
            "SELECT COUNT(*) AS count FROM question_likes WHERE question_likes.question_id = ?1",
            [question_id],
            |r| r.get(0),
        )?;
        Ok(count)
    }

    pub fn liked_questions_for_user_id(
        pool: &DbPool,
        user_id: i64,
    ) -> Result<Vec<Question>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT questions.*
             FROM questions
             INNER JOIN question_likes ON questions.id = question_likes.question_id
             WHERE question_likes.user_id = ?1
             ORDER BY questions.id",
            [user_id],
        )
    }

    /// Top `n` questions by like count; ties go to the older question.
    pub fn most_liked_questions(pool: &DbPool, n: i64) -> Result<Vec<Question>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT questions.*
             FROM question_likes
             INNER JOIN questions ON question_likes.question_id = questions.id
             GROUP BY questions.id
             ORDER BY COUNT(question_likes.id) DESC, questions.id ASC
             LIMIT ?1",
            [n],
        )
    }
}

impl Record for QuestionLike {
    const TABLE: &'static str = "question_likes";
    const COLUMNS: &'static [&'static str] = &["user_id", "question_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(QuestionLike {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            question_id: row.get("question_id")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::Integer(self.user_id), Value::Integer(self.question_id)]
    }
}
