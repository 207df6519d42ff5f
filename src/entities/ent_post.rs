// EntPost - feed helpers

use super::Entity;
use crate::core::UserId;
use crate::models::Post;
use crate::schemas::PostSchema;

impl Entity for Post {
    type Schema = PostSchema;

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Post {
    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.contains(user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}
