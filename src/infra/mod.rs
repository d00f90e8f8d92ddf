//! Infrastructure: SQLite connection, migrations, generic record persistence.

pub mod db;
pub mod record;

pub(crate) use record::{insert_or_ignore_sql, query_records};
pub use db::{get_connection, init_db, init_test_db, open, DbPool};
pub use record::Record;
