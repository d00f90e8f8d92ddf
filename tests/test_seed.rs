//! Demo seed and on-disk database tests

use aa_questions::app::{seed_demo, Question, User};
use aa_questions::config::DbConfig;
use aa_questions::infra::db::{init_db, init_test_db, open};
use aa_questions::infra::Record;

#[test]
fn seed_demo_populates_forum() {
    let pool = init_test_db();
    let summary = seed_demo(&pool).unwrap();
    assert_eq!(summary.users, 3);
    assert_eq!(User::count(&pool).unwrap(), 3);
    assert_eq!(Question::count(&pool).unwrap(), 3);

    let ada = User::find_by_name(&pool, "Ada", "Lovelace").unwrap().unwrap();
    // Ada asked one question and it drew two likes.
    assert_eq!(ada.average_karma(&pool).unwrap(), Some(2.0));
    let top = Question::most_liked(&pool, 1).unwrap();
    assert_eq!(top[0].title, "Engines");
}

#[test]
fn seed_demo_refuses_populated_db() {
    let pool = init_test_db();
    seed_demo(&pool).unwrap();
    let err = seed_demo(&pool).unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(User::count(&pool).unwrap(), 3);
}

#[test]
fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("questions.db");

    {
        let pool = init_db(&path).unwrap();
        let mut u = User::new("Grace", "Hopper");
        u.create(&pool).unwrap();
    }

    let pool = init_db(&path).unwrap();
    let all = User::all(&pool).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].fname, "Grace");
}

#[test]
fn run_seeds_an_empty_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.db");
    aa_questions::run(path.to_str()).unwrap();
    // Second run leaves existing data alone.
    aa_questions::run(path.to_str()).unwrap();

    let pool = init_db(&path).unwrap();
    assert_eq!(User::count(&pool).unwrap(), 3);
}

#[test]
fn open_in_memory_config() {
    let pool = open(&DbConfig::in_memory()).unwrap();
    assert_eq!(User::count(&pool).unwrap(), 0);
}
