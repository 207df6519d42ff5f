// EntGroup - membership helpers

use super::Entity;
use crate::core::UserId;
use crate::models::Group;
use crate::schemas::GroupSchema;

impl Entity for Group {
    type Schema = GroupSchema;

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Group {
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.members.contains(user_id)
    }

    /// `member_count` mirrors `members.len()` after every mutation
    pub fn is_consistent(&self) -> bool {
        self.member_count as usize == self.members.len()
    }
}
