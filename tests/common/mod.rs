#![allow(dead_code)]

use aa_questions::app::{Question, QuestionFollow, QuestionLike, Reply, User};
use aa_questions::infra::{DbPool, Record};

pub fn make_user(pool: &DbPool, fname: &str, lname: &str) -> User {
    let mut user = User::new(fname, lname);
    user.create(pool).unwrap();
    user
}

pub fn make_question(pool: &DbPool, title: &str, author: &User) -> Question {
    let mut q = Question::new(title, format!("{} body", title), author.id.unwrap());
    q.create(pool).unwrap();
    q
}

pub fn make_reply(pool: &DbPool, q: &Question, parent: Option<&Reply>, author: &User, body: &str) -> Reply {
    let mut r = Reply::new(q.id.unwrap(), parent.and_then(|p| p.id), author.id.unwrap(), body);
    r.create(pool).unwrap();
    r
}

pub fn follow(pool: &DbPool, user: &User, q: &Question) {
    QuestionFollow::new(user.id.unwrap(), q.id.unwrap()).create(pool).unwrap();
}

pub fn like(pool: &DbPool, user: &User, q: &Question) {
    QuestionLike::new(user.id.unwrap(), q.id.unwrap()).create(pool).unwrap();
}

pub fn ids<T: Record>(records: &[T]) -> Vec<i64> {
    records.iter().filter_map(|r| r.id()).collect()
}
