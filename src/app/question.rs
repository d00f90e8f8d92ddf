//! Question model.

use crate::app::{QuestionFollow, QuestionLike, Reply, User};
use crate::error::AppError;
use crate::infra::{get_connection, query_records, DbPool, Record};
use rusqlite::types::Value;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

impl Question {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: i64) -> Self {
        Question {
            id: None,
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }

    pub fn find_by_author_id(pool: &DbPool, author_id: i64) -> Result<Vec<Question>, AppError> {
        let conn = get_connection(pool);
        query_records(
            &conn,
            "SELECT * FROM questions WHERE questions.user_id = ?1 ORDER BY questions.id",
            [author_id],
        )
    }

    pub fn most_followed(pool: &DbPool, n: i64) -> Result<Vec<Question>, AppError> {
        QuestionFollow::most_followed_questions(pool, n)
    }

    pub fn most_liked(pool: &DbPool, n: i64) -> Result<Vec<Question>, AppError> {
        QuestionLike::most_liked_questions(pool, n)
    }

    pub fn author(&self, pool: &DbPool) -> Result<User, AppError> {
        User::fetch(pool, self.user_id)
    }

    pub fn replies(&self, pool: &DbPool) -> Result<Vec<Reply>, AppError> {
        Reply::find_by_question_id(pool, self.persisted_id()?)
    }

    pub fn followers(&self, pool: &DbPool) -> Result<Vec<User>, AppError> {
        QuestionFollow::followers_for_question_id(pool, self.persisted_id()?)
    }

    pub fn likers(&self, pool: &DbPool) -> Result<Vec<User>, AppError> {
        QuestionLike::likers_for_question_id(pool, self.persisted_id()?)
    }

    pub fn num_likes(&self, pool: &DbPool) -> Result<i64, AppError> {
        QuestionLike::num_likes_for_question_id(pool, self.persisted_id()?)
    }

    fn persisted_id(&self) -> Result<i64, AppError> {
        self.id.ok_or(AppError::NotPersisted)
    }
}

impl Record for Question {
    const TABLE: &'static str = "questions";
    const COLUMNS: &'static [&'static str] = &["title", "body", "user_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Question {
            id: row.get("id")?,
            title: row.get("title")?,
            body: row.get("body")?,
            user_id: row.get("user_id")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.title.clone()),
            Value::Text(self.body.clone()),
            Value::Integer(self.user_id),
        ]
    }
}
