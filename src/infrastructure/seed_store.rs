// Seed Data Store - the in-memory "database" behind the mock backend.
// One instance per application (or per test); the facade receives it by reference.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::data_seeder;
use crate::entities::Entity;
use crate::error::AppResult;
use crate::models::{Event, Group, Post, User};

pub type SharedStore = Arc<RwLock<SeedStore>>;

#[derive(Debug, Clone, Default)]
pub struct SeedStore {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub events: Vec<Event>,
    pub groups: Vec<Group>,
}

fn find<'a, E: Entity>(entities: &'a [E], id: &str) -> Option<&'a E> {
    entities.iter().find(|entity| entity.key() == id)
}

fn find_mut<'a, E: Entity>(entities: &'a mut [E], id: &str) -> Option<&'a mut E> {
    entities.iter_mut().find(|entity| entity.key() == id)
}

impl SeedStore {
    pub fn new(users: Vec<User>, posts: Vec<Post>, events: Vec<Event>, groups: Vec<Group>) -> Self {
        Self {
            users,
            posts,
            events,
            groups,
        }
    }

    /// Build the default data set, validating every record against its schema
    pub fn load_default() -> AppResult<Self> {
        let store = Self::new(
            User::from_records(data_seeder::user_records())?,
            Post::from_records(data_seeder::post_records())?,
            Event::from_records(data_seeder::event_records())?,
            Group::from_records(data_seeder::group_records())?,
        );
        info!(
            users = store.users.len(),
            posts = store.posts.len(),
            events = store.events.len(),
            groups = store.groups.len(),
            "Seed data loaded"
        );
        Ok(store)
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        find(&self.users, id)
    }

    pub fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        find_mut(&mut self.users, id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        find(&self.posts, id)
    }

    pub fn post_mut(&mut self, id: &str) -> Option<&mut Post> {
        find_mut(&mut self.posts, id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        find(&self.events, id)
    }

    pub fn event_mut(&mut self, id: &str) -> Option<&mut Event> {
        find_mut(&mut self.events, id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        find(&self.groups, id)
    }

    pub fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        find_mut(&mut self.groups, id)
    }

    pub fn has_post_id(&self, id: &str) -> bool {
        self.post(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_satisfies_schemas() {
        let store = SeedStore::load_default().unwrap();
        assert_eq!(store.users.len(), 6);
        assert_eq!(store.posts.len(), 5);
        assert_eq!(store.events.len(), 3);
        assert_eq!(store.groups.len(), 5);
        assert!(store.groups.iter().all(Group::is_consistent));
    }

    #[test]
    fn test_lookups() {
        let mut store = SeedStore::load_default().unwrap();
        assert_eq!(store.user("2").map(|u| u.name.as_str()), Some("Marcus Lee"));
        assert!(store.user("404").is_none());
        assert!(store.has_post_id("5"));

        store.group_mut("5").unwrap().is_private = false;
        assert!(!store.group("5").unwrap().is_private);
    }

    #[test]
    fn test_seed_users_never_connect_to_themselves() {
        let store = SeedStore::load_default().unwrap();
        for user in &store.users {
            assert!(!user.is_connected_to(&user.id));
        }
    }
}
