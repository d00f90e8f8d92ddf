//! Reply queries and reply threading.

mod common;

use aa_questions::app::Reply;
use aa_questions::infra::db::init_test_db;
use aa_questions::infra::Record;
use common::{ids, make_question, make_reply, make_user};

#[test]
fn find_by_user_and_question() {
    let pool = init_test_db();
    let ada = make_user(&pool, "Ada", "Lovelace");
    let alan = make_user(&pool, "Alan", "Turing");
    let q1 = make_question(&pool, "Q1", &ada);
    let q2 = make_question(&pool, "Q2", &ada);
    let r1 = make_reply(&pool, &q1, None, &alan, "a");
    let r2 = make_reply(&pool, &q2, None, &ada, "b");

    assert_eq!(Reply::find_by_user_id(&pool, alan.id.unwrap()).unwrap(), vec![r1.clone()]);
    assert_eq!(Reply::find_by_question_id(&pool, q2.id.unwrap()).unwrap(), vec![r2]);
    assert_eq!(Reply::find_by_question_id(&pool, q1.id.unwrap()).unwrap(), vec![r1]);
}

#[test]
fn author_and_question() {
    let pool = init_test_db();
    let ada = make_user(&pool, "Ada", "Lovelace");
    let alan = make_user(&pool, "Alan", "Turing");
    let q = make_question(&pool, "Q1", &ada);
    let r = make_reply(&pool, &q, None, &alan, "hi");

    assert_eq!(r.author(&pool).unwrap(), alan);
    assert_eq!(r.question(&pool).unwrap(), q);
}

#[test]
fn parent_reply_none_for_top_level() {
    let pool = init_test_db();
    let ada = make_user(&pool, "Ada", "Lovelace");
    let q = make_question(&pool, "Q1", &ada);
    let top = make_reply(&pool, &q, None, &ada, "top");
    assert!(top.parent_reply(&pool).unwrap().is_none());
}

#[test]
fn thread_navigation() {
    let pool = init_test_db();
    let ada = make_user(&pool, "Ada", "Lovelace");
    let q = make_question(&pool, "Q1", &ada);
    let top = make_reply(&pool, &q, None, &ada, "top");
    let c1 = make_reply(&pool, &q, Some(&top), &ada, "c1");
    let c2 = make_reply(&pool, &q, Some(&top), &ada, "c2");
    let grandchild = make_reply(&pool, &q, Some(&c1), &ada, "gc");

    assert_eq!(c1.parent_reply(&pool).unwrap(), Some(top.clone()));
    assert_eq!(grandchild.parent_reply(&pool).unwrap(), Some(c1.clone()));
    assert_eq!(ids(&top.child_replies(&pool).unwrap()), vec![c1.id.unwrap(), c2.id.unwrap()]);
    assert_eq!(c1.child_replies(&pool).unwrap(), vec![grandchild]);
    assert!(c2.child_replies(&pool).unwrap().is_empty());
}

#[test]
fn reply_to_missing_parent_fails() {
    let pool = init_test_db();
    let ada = make_user(&pool, "Ada", "Lovelace");
    let q = make_question(&pool, "Q1", &ada);
    let mut r = Reply::new(q.id.unwrap(), Some(777), ada.id.unwrap(), "orphan");
    assert_eq!(r.create(&pool).unwrap_err().code(), "DB_ERROR");
}

#[test]
fn child_replies_on_unsaved_reply_fails() {
    let pool = init_test_db();
    let r = Reply::new(1, None, 1, "unsaved");
    assert_eq!(r.child_replies(&pool).unwrap_err().code(), "NOT_PERSISTED");
}
