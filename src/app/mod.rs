//! Forum models, their relationship queries, and bulk use cases.

mod data_transfer;
mod question;
mod question_follow;
mod question_like;
mod reply;
mod seed;
mod user;

pub use data_transfer::{export_json_string, import_json_string, ExportRoot, ImportResult};
pub use question::Question;
pub use question_follow::QuestionFollow;
pub use question_like::QuestionLike;
pub use reply::Reply;
pub use seed::{seed_demo, SeedSummary};
pub use user::User;
