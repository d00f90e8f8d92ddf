//! Demo forum content, written through the models.

use crate::app::{Question, QuestionFollow, QuestionLike, Reply, User};
use crate::error::AppError;
use crate::infra::{DbPool, Record};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub questions: usize,
    pub replies: usize,
    pub question_follows: usize,
    pub question_likes: usize,
}

/// Insert a small fixed forum. Fails on a database that already has users.
pub fn seed_demo(pool: &DbPool) -> Result<SeedSummary, AppError> {
    if User::count(pool)? > 0 {
        return Err(AppError::Validation("database already has users".into()));
    }

    let mut users = vec![
        User::new("Ada", "Lovelace"),
        User::new("Alan", "Turing"),
        User::new("Grace", "Hopper"),
    ];
    for u in users.iter_mut() {
        u.create(pool)?;
    }
    let uid = |i: usize| users[i].id.unwrap_or_default();

    let mut questions = vec![
        Question::new(
            "Engines",
            "Can an analytical engine compose music?",
            uid(0),
        ),
        Question::new("Halting", "Is there a general halting test?", uid(1)),
        Question::new("Compilers", "Why not write programs in English?", uid(2)),
    ];
    for q in questions.iter_mut() {
        q.create(pool)?;
    }
    let qid = |i: usize| questions[i].id.unwrap_or_default();

    let mut top = Reply::new(qid(0), None, uid(1), "Only if music can be formalised.");
    top.create(pool)?;
    let mut nested = Reply::new(qid(0), top.id, uid(0), "It can, given the right notation.");
    nested.create(pool)?;
    let mut other = Reply::new(qid(1), None, uid(2), "Not in general, no.");
    other.create(pool)?;

    let follows = [(0, 1), (1, 0), (2, 0), (2, 1)];
    for (u, q) in follows {
        QuestionFollow::new(uid(u), qid(q)).create(pool)?;
    }

    let likes = [(1, 0), (2, 0), (0, 1)];
    for (u, q) in likes {
        QuestionLike::new(uid(u), qid(q)).create(pool)?;
    }

    let summary = SeedSummary {
        users: users.len(),
        questions: questions.len(),
        replies: 3,
        question_follows: follows.len(),
        question_likes: likes.len(),
    };
    log::info!("Seeded demo forum: {:?}", summary);
    Ok(summary)
}
