use crate::core::UserId;

/// The simulated signed-in user every view acts on behalf of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerContext {
    pub user_id: UserId,
}

impl ViewerContext {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        ViewerContext {
            user_id: user_id.into(),
        }
    }

    pub fn is(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
