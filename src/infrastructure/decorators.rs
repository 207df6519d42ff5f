// Facade decorators - pluggable behaviour composed around the mock backend
// Chain built by AppState: TracingDecorator -> LatencyDecorator -> MockService

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::latency::{LatencyProfile, Operation};
use super::traits::SocialApi;
use crate::core::{EventId, GroupId, MembershipSet, PostId, UserId};
use crate::error::AppResult;
use crate::models::{Event, Group, Post, SearchFilters, User};

// Generates the full SocialApi impl for a decorator. Every call is routed through the
// decorator's `around(operation, inner_call)`.
macro_rules! impl_social_api_around {
    ($decorator:ty, $field:ident) => {
        #[async_trait]
        impl SocialApi for $decorator {
            async fn fetch_users(&self) -> AppResult<Vec<User>> {
                self.around(Operation::FetchUsers, self.$field.fetch_users()).await
            }

            async fn get_user_profile(&self, id: &UserId) -> AppResult<Option<User>> {
                self.around(Operation::GetUserProfile, self.$field.get_user_profile(id)).await
            }

            async fn search_users(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<User>> {
                self.around(Operation::SearchUsers, self.$field.search_users(query, filters)).await
            }

            async fn fetch_connections(&self, id: &UserId) -> AppResult<Option<Vec<User>>> {
                self.around(Operation::FetchConnections, self.$field.fetch_connections(id)).await
            }

            async fn fetch_posts(&self) -> AppResult<Vec<Post>> {
                self.around(Operation::FetchPosts, self.$field.fetch_posts()).await
            }

            async fn fetch_posts_by_author(&self, author_id: &UserId) -> AppResult<Vec<Post>> {
                self.around(Operation::FetchPostsByAuthor, self.$field.fetch_posts_by_author(author_id)).await
            }

            async fn get_post(&self, id: &PostId) -> AppResult<Option<Post>> {
                self.around(Operation::GetPost, self.$field.get_post(id)).await
            }

            async fn create_post(&self, content: &str, author_id: &UserId) -> AppResult<Post> {
                self.around(Operation::CreatePost, self.$field.create_post(content, author_id)).await
            }

            async fn like_post(&self, post_id: &PostId, user_id: &UserId) -> AppResult<bool> {
                self.around(Operation::LikePost, self.$field.like_post(post_id, user_id)).await
            }

            async fn fetch_events(&self) -> AppResult<Vec<Event>> {
                self.around(Operation::FetchEvents, self.$field.fetch_events()).await
            }

            async fn get_event(&self, id: &EventId) -> AppResult<Option<Event>> {
                self.around(Operation::GetEvent, self.$field.get_event(id)).await
            }

            async fn rsvp_event(&self, event_id: &EventId, user_id: &UserId) -> AppResult<bool> {
                self.around(Operation::RsvpEvent, self.$field.rsvp_event(event_id, user_id)).await
            }

            async fn fetch_groups(&self) -> AppResult<Vec<Group>> {
                self.around(Operation::FetchGroups, self.$field.fetch_groups()).await
            }

            async fn get_group(&self, id: &GroupId) -> AppResult<Option<Group>> {
                self.around(Operation::GetGroup, self.$field.get_group(id)).await
            }

            async fn join_group(&self, group_id: &GroupId, user_id: &UserId) -> AppResult<bool> {
                self.around(Operation::JoinGroup, self.$field.join_group(group_id, user_id)).await
            }

            async fn leave_group(&self, group_id: &GroupId, user_id: &UserId) -> AppResult<bool> {
                self.around(Operation::LeaveGroup, self.$field.leave_group(group_id, user_id)).await
            }

            async fn toggle_membership(&self, set: &MembershipSet, user_id: &UserId) -> AppResult<Option<bool>> {
                self.around(Operation::ToggleMembership, self.$field.toggle_membership(set, user_id)).await
            }
        }
    };
}

/// Marker for facade wrappers, named for logging
pub trait ApiDecorator: SocialApi {
    fn decorator_name(&self) -> &'static str;
}

/// Latency Decorator - delays every call by the profile's duration before delegating
pub struct LatencyDecorator {
    inner: Arc<dyn SocialApi>,
    profile: LatencyProfile,
}

impl LatencyDecorator {
    pub fn new(inner: Arc<dyn SocialApi>, profile: LatencyProfile) -> Self {
        Self { inner, profile }
    }

    async fn around<T, F>(&self, operation: Operation, call: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>> + Send,
        T: Send,
    {
        let delay = self.profile.delay_for(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        call.await
    }
}

impl_social_api_around!(LatencyDecorator, inner);

impl ApiDecorator for LatencyDecorator {
    fn decorator_name(&self) -> &'static str {
        "LatencyDecorator"
    }
}

/// Tracing Decorator - records elapsed time and outcome of every call
pub struct TracingDecorator {
    inner: Arc<dyn SocialApi>,
}

impl TracingDecorator {
    pub fn new(inner: Arc<dyn SocialApi>) -> Self {
        Self { inner }
    }

    async fn around<T, F>(&self, operation: Operation, call: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>> + Send,
        T: Send,
    {
        let start = Instant::now();
        let result = call.await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => debug!(operation = %operation, elapsed_ms, "api call completed"),
            Err(err) => warn!(operation = %operation, elapsed_ms, error = %err, "api call failed"),
        }
        result
    }
}

impl_social_api_around!(TracingDecorator, inner);

impl ApiDecorator for TracingDecorator {
    fn decorator_name(&self) -> &'static str {
        "TracingDecorator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::id_generator::IdGenerator;
    use crate::infrastructure::mock_service::MockService;
    use crate::infrastructure::seed_store::SeedStore;
    use std::time::Duration;

    fn mock() -> Arc<dyn SocialApi> {
        let store = SeedStore::load_default().unwrap().into_shared();
        Arc::new(MockService::new(store, Arc::new(IdGenerator::new(0).unwrap())))
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied_per_operation() {
        let profile = LatencyProfile::zero()
            .with(Operation::FetchUsers, Duration::from_millis(800))
            .with(Operation::LikePost, Duration::from_millis(300));
        let api = LatencyDecorator::new(mock(), profile);

        let start = tokio::time::Instant::now();
        api.fetch_users().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(800));
        assert!(start.elapsed() < Duration::from_millis(850));

        let start = tokio::time::Instant::now();
        api.like_post(&PostId::from("1"), &UserId::from("2")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(start.elapsed() < Duration::from_millis(350));

        let start = tokio::time::Instant::now();
        api.fetch_groups().await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test]
    async fn test_tracing_decorator_is_transparent() {
        let api = TracingDecorator::new(mock());
        assert_eq!(api.decorator_name(), "TracingDecorator");
        assert_eq!(api.fetch_users().await.unwrap().len(), 6);
        assert!(api.get_user_profile(&UserId::from("nope")).await.unwrap().is_none());
    }
}
