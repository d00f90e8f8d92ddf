pub mod app;
pub mod config;
pub mod error;
pub mod infra;

use app::{seed_demo, Question, QuestionFollow, QuestionLike, Reply, User};
use config::DbConfig;
use error::AppError;
use infra::{open, Record};

/// Open (and migrate) the configured database, seed it when empty, and log a summary.
pub fn run(db_path: Option<&str>) -> Result<(), AppError> {
    let config = DbConfig::resolve(db_path);
    log::info!("DB location: {:?}", config.location);

    let pool = open(&config).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })?;

    if User::count(&pool)? == 0 {
        seed_demo(&pool)?;
    }

    log::info!(
        "users={} questions={} replies={} follows={} likes={}",
        User::count(&pool)?,
        Question::count(&pool)?,
        Reply::count(&pool)?,
        QuestionFollow::count(&pool)?,
        QuestionLike::count(&pool)?
    );
    for q in Question::most_liked(&pool, 3)? {
        log::info!("most liked: {:?} ({} likes)", q.title, q.num_likes(&pool)?);
    }
    Ok(())
}
