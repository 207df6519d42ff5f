// Schema definitions - the canonical contract between the seed store and everything downstream

pub mod post_schema;
pub mod simple_schemas;
pub mod user_schema;

pub use post_schema::{PostSchema, MAX_POST_LENGTH};
pub use simple_schemas::{CommentSchema, EventSchema, GroupSchema};
pub use user_schema::UserSchema;
