// Mock backend - answers every facade call from the in-memory seed store.
// Latency is added by `LatencyDecorator`, not here.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

use super::id_generator::IdGenerator;
use super::seed_store::{SeedStore, SharedStore};
use super::traits::SocialApi;
use crate::core::memberships::{insert_id, remove_id, toggle_id};
use crate::core::{EventId, GroupId, MembershipKind, MembershipSet, PostId, UserId};
use crate::error::{AppError, AppResult};
use crate::models::{Event, Group, Post, SearchFilters, User};

#[derive(Debug, Clone)]
pub struct MockService {
    store: SharedStore,
    ids: Arc<IdGenerator>,
}

impl MockService {
    pub fn new(store: SharedStore, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    fn sort_newest_first(posts: &mut [Post]) {
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    fn toggle_connection(store: &mut SeedStore, owner: &UserId, user_id: &UserId) -> AppResult<Option<bool>> {
        if owner == user_id {
            return Err(AppError::BadRequest(format!(
                "user {} cannot connect to themselves",
                owner
            )));
        }
        let connected = match store.user_mut(owner.as_str()) {
            Some(user) => toggle_id(&mut user.connections, user_id),
            None => return Ok(None),
        };

        if MembershipKind::Connection.is_symmetric() {
            match store.user_mut(user_id.as_str()) {
                Some(other) if connected => {
                    insert_id(&mut other.connections, owner);
                }
                Some(other) => {
                    remove_id(&mut other.connections, owner);
                }
                None => warn!("Connection toggled for unknown user {}", user_id),
            }
        }
        Ok(Some(connected))
    }

    fn toggle_in_store(store: &mut SeedStore, set: &MembershipSet, user_id: &UserId) -> AppResult<Option<bool>> {
        let outcome = match set {
            MembershipSet::PostLikes(id) => store
                .post_mut(id.as_str())
                .map(|post| toggle_id(&mut post.likes, user_id)),
            MembershipSet::EventAttendees(id) => store
                .event_mut(id.as_str())
                .map(|event| toggle_id(&mut event.attendees, user_id)),
            MembershipSet::GroupMembers(id) => store.group_mut(id.as_str()).map(|group| {
                let joined = toggle_id(&mut group.members, user_id);
                if joined {
                    group.member_count += 1;
                } else {
                    group.member_count = group.member_count.saturating_sub(1);
                }
                joined
            }),
            MembershipSet::Connections(owner) => return Self::toggle_connection(store, owner, user_id),
        };
        Ok(outcome)
    }
}

#[async_trait]
impl SocialApi for MockService {
    async fn fetch_users(&self) -> AppResult<Vec<User>> {
        let store = self.store.read().await;
        debug!("Fetched {} users", store.users.len());
        Ok(store.users.clone())
    }

    async fn get_user_profile(&self, id: &UserId) -> AppResult<Option<User>> {
        let store = self.store.read().await;
        let user = store.user(id.as_str()).cloned();
        if user.is_none() {
            debug!("User {} not found", id);
        }
        Ok(user)
    }

    async fn search_users(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<User>> {
        let store = self.store.read().await;
        let results: Vec<User> = store
            .users
            .iter()
            .filter(|user| user.matches_query(query) && user.matches_filters(filters))
            .cloned()
            .collect();
        debug!("Search {:?} with {:?} matched {} users", query, filters, results.len());
        Ok(results)
    }

    async fn fetch_connections(&self, id: &UserId) -> AppResult<Option<Vec<User>>> {
        let store = self.store.read().await;
        let Some(user) = store.user(id.as_str()) else {
            return Ok(None);
        };
        let connections = user
            .connections
            .iter()
            .filter_map(|connection| store.user(connection.as_str()).cloned())
            .collect();
        Ok(Some(connections))
    }

    async fn fetch_posts(&self) -> AppResult<Vec<Post>> {
        let mut posts = self.store.read().await.posts.clone();
        Self::sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn fetch_posts_by_author(&self, author_id: &UserId) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .store
            .read()
            .await
            .posts
            .iter()
            .filter(|post| &post.author_id == author_id)
            .cloned()
            .collect();
        Self::sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn get_post(&self, id: &PostId) -> AppResult<Option<Post>> {
        Ok(self.store.read().await.post(id.as_str()).cloned())
    }

    async fn create_post(&self, content: &str, author_id: &UserId) -> AppResult<Post> {
        let mut store = self.store.write().await;

        let mut id = self.ids.next_id();
        while store.has_post_id(&id) {
            id = self.ids.next_id();
        }

        let post = Post {
            id: PostId::new(id),
            author_id: author_id.clone(),
            content: content.to_string(),
            timestamp: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        };
        store.posts.insert(0, post.clone());
        info!("Created post {} by user {}", post.id, author_id);
        Ok(post)
    }

    async fn like_post(&self, post_id: &PostId, user_id: &UserId) -> AppResult<bool> {
        let set = MembershipSet::PostLikes(post_id.clone());
        let mut store = self.store.write().await;
        let outcome = Self::toggle_in_store(&mut store, &set, user_id)?;
        match outcome {
            Some(liked) => info!("User {} {} post {}", user_id, if liked { "liked" } else { "unliked" }, post_id),
            None => debug!("Like on missing post {}", post_id),
        }
        Ok(outcome.is_some())
    }

    async fn fetch_events(&self) -> AppResult<Vec<Event>> {
        let mut events = self.store.read().await.events.clone();
        events.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.start_time().cmp(&b.start_time()))
        });
        Ok(events)
    }

    async fn get_event(&self, id: &EventId) -> AppResult<Option<Event>> {
        Ok(self.store.read().await.event(id.as_str()).cloned())
    }

    async fn rsvp_event(&self, event_id: &EventId, user_id: &UserId) -> AppResult<bool> {
        let set = MembershipSet::EventAttendees(event_id.clone());
        let mut store = self.store.write().await;
        let outcome = Self::toggle_in_store(&mut store, &set, user_id)?;
        match outcome {
            Some(attending) => info!(
                "User {} {} event {}",
                user_id,
                if attending { "is attending" } else { "cancelled RSVP for" },
                event_id
            ),
            None => debug!("RSVP on missing event {}", event_id),
        }
        Ok(outcome.is_some())
    }

    async fn fetch_groups(&self) -> AppResult<Vec<Group>> {
        Ok(self.store.read().await.groups.clone())
    }

    async fn get_group(&self, id: &GroupId) -> AppResult<Option<Group>> {
        Ok(self.store.read().await.group(id.as_str()).cloned())
    }

    async fn join_group(&self, group_id: &GroupId, user_id: &UserId) -> AppResult<bool> {
        let mut store = self.store.write().await;
        let Some(group) = store.group_mut(group_id.as_str()) else {
            debug!("Join on missing group {}", group_id);
            return Ok(false);
        };
        let joined = insert_id(&mut group.members, user_id);
        if joined {
            group.member_count += 1;
            info!("User {} joined group {} ({} members)", user_id, group_id, group.member_count);
        }
        Ok(joined)
    }

    async fn leave_group(&self, group_id: &GroupId, user_id: &UserId) -> AppResult<bool> {
        let mut store = self.store.write().await;
        let Some(group) = store.group_mut(group_id.as_str()) else {
            debug!("Leave on missing group {}", group_id);
            return Ok(false);
        };
        let left = remove_id(&mut group.members, user_id);
        if left {
            group.member_count = group.member_count.saturating_sub(1);
            info!("User {} left group {} ({} members)", user_id, group_id, group.member_count);
        }
        Ok(left)
    }

    async fn toggle_membership(&self, set: &MembershipSet, user_id: &UserId) -> AppResult<Option<bool>> {
        let mut store = self.store.write().await;
        let outcome = Self::toggle_in_store(&mut store, set, user_id)?;
        match outcome {
            Some(member) => info!("Toggled {} for user {}: member={}", set, user_id, member),
            None => debug!("Toggle on missing {}", set),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MockService {
        let store = SeedStore::load_default().unwrap().into_shared();
        MockService::new(store, Arc::new(IdGenerator::new(0).unwrap()))
    }

    #[tokio::test]
    async fn test_connection_toggle_is_mutual() {
        let api = service();
        let owner = UserId::from("4");
        let viewer = UserId::from("1");

        let set = MembershipSet::Connections(owner.clone());
        assert_eq!(api.toggle_membership(&set, &viewer).await.unwrap(), Some(true));
        {
            let store = api.store().read().await;
            assert!(store.user("4").unwrap().is_connected_to(&viewer));
            assert!(store.user("1").unwrap().is_connected_to(&owner));
        }

        assert_eq!(api.toggle_membership(&set, &viewer).await.unwrap(), Some(false));
        let store = api.store().read().await;
        assert!(!store.user("4").unwrap().is_connected_to(&viewer));
        assert!(!store.user("1").unwrap().is_connected_to(&owner));
    }

    #[tokio::test]
    async fn test_self_connection_is_rejected() {
        let api = service();
        let me = UserId::from("1");
        let result = api
            .toggle_membership(&MembershipSet::Connections(me.clone()), &me)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(!api.store().read().await.user("1").unwrap().is_connected_to(&me));
    }

    #[tokio::test]
    async fn test_group_toggle_keeps_count_in_step() {
        let api = service();
        let set = MembershipSet::GroupMembers(GroupId::from("5"));
        let user = UserId::from("2");

        assert_eq!(api.toggle_membership(&set, &user).await.unwrap(), Some(true));
        assert_eq!(api.toggle_membership(&set, &user).await.unwrap(), Some(false));

        let store = api.store().read().await;
        let group = store.group("5").unwrap();
        assert_eq!(group.member_count, 1);
        assert!(group.is_consistent());
    }
}
