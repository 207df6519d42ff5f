use async_trait::async_trait;

use crate::core::{EventId, GroupId, MembershipSet, PostId, UserId};
use crate::error::AppResult;
use crate::models::{Event, Group, Post, SearchFilters, User};

/// The backend seam. Views only ever talk to this trait, so swapping the mock for a
/// real client touches one layer.
///
/// Missing entities are `Ok(None)` / `Ok(false)`; `Err` is reserved for unexpected failures.
#[async_trait]
pub trait SocialApi: Send + Sync {
    /// All users, in store order
    async fn fetch_users(&self) -> AppResult<Vec<User>>;
    async fn get_user_profile(&self, id: &UserId) -> AppResult<Option<User>>;
    async fn search_users(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<User>>;
    /// Resolved connections of a user; dangling ids are skipped. `None` if the user is unknown.
    async fn fetch_connections(&self, id: &UserId) -> AppResult<Option<Vec<User>>>;

    /// All posts, newest first
    async fn fetch_posts(&self) -> AppResult<Vec<Post>>;
    async fn fetch_posts_by_author(&self, author_id: &UserId) -> AppResult<Vec<Post>>;
    async fn get_post(&self, id: &PostId) -> AppResult<Option<Post>>;
    async fn create_post(&self, content: &str, author_id: &UserId) -> AppResult<Post>;
    /// Toggles the like; `false` when the post does not exist
    async fn like_post(&self, post_id: &PostId, user_id: &UserId) -> AppResult<bool>;

    /// All events, earliest date first
    async fn fetch_events(&self) -> AppResult<Vec<Event>>;
    async fn get_event(&self, id: &EventId) -> AppResult<Option<Event>>;
    /// Toggles attendance; `false` when the event does not exist
    async fn rsvp_event(&self, event_id: &EventId, user_id: &UserId) -> AppResult<bool>;

    async fn fetch_groups(&self) -> AppResult<Vec<Group>>;
    async fn get_group(&self, id: &GroupId) -> AppResult<Option<Group>>;
    /// Add-only: `true` when the user was appended
    async fn join_group(&self, group_id: &GroupId, user_id: &UserId) -> AppResult<bool>;
    /// Remove-only: `true` when the user was removed
    async fn leave_group(&self, group_id: &GroupId, user_id: &UserId) -> AppResult<bool>;

    /// Symmetric toggle over any membership list. `None` when the owning entity does
    /// not exist, otherwise whether `user_id` is a member afterwards.
    async fn toggle_membership(&self, set: &MembershipSet, user_id: &UserId) -> AppResult<Option<bool>>;
}
