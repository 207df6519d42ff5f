use super::Entity;
use crate::models::Comment;
use crate::schemas::CommentSchema;

impl Entity for Comment {
    type Schema = CommentSchema;

    fn key(&self) -> &str {
        self.id.as_str()
    }
}
