// Member directory: free-text search plus branch / year / location filters

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error};

use super::{Completion, Lifecycle, ToggleBank};
use crate::core::memberships::{insert_id, remove_id};
use crate::core::{MembershipSet, UserId};
use crate::infrastructure::{SocialApi, ViewerContext};
use crate::models::{SearchFilters, User};

#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub loading: bool,
    pub searching: bool,
    pub users: Vec<User>,
    pub results: Vec<User>,
    pub query: String,
    pub filters: SearchFilters,
    /// Sequence number of the latest search issued; older responses are dropped
    latest_search: u64,
}

/// Choices offered by the filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub branches: Vec<String>,
    /// Newest year first
    pub graduation_years: Vec<i32>,
    pub cities: Vec<String>,
}

pub struct DirectoryView {
    api: Arc<dyn SocialApi>,
    viewer: ViewerContext,
    lifecycle: Lifecycle,
    toggles: ToggleBank,
    state: RwLock<DirectoryState>,
}

fn connect_control(user_id: &UserId) -> String {
    format!("connect:{}", user_id)
}

// Both ends of a connection may appear on the page, so mirror each side
fn mirror_connection(users: &mut [User], viewer: &UserId, other: &UserId, connected: bool) {
    for user in users.iter_mut() {
        let peer = if &user.id == other {
            viewer
        } else if &user.id == viewer {
            other
        } else {
            continue;
        };
        if connected {
            insert_id(&mut user.connections, peer);
        } else {
            remove_id(&mut user.connections, peer);
        }
    }
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

impl DirectoryView {
    pub fn new(api: Arc<dyn SocialApi>, viewer: ViewerContext) -> Self {
        Self {
            api,
            viewer,
            lifecycle: Lifecycle::new(),
            toggles: ToggleBank::new(),
            state: RwLock::new(DirectoryState::default()),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub async fn snapshot(&self) -> DirectoryState {
        self.state.read().await.clone()
    }

    pub async fn load(&self) -> Completion {
        self.state.write().await.loading = true;

        let result = self.api.fetch_users().await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(users) => {
                state.results = users.clone();
                state.users = users;
                Completion::Applied
            }
            Err(err) => {
                error!("Error loading users: {}", err);
                Completion::Failed
            }
        }
    }

    /// Run a search. Only the most recent search may update the results.
    pub async fn search(&self, query: &str, filters: SearchFilters) -> Completion {
        let sequence = {
            let mut state = self.state.write().await;
            state.query = query.to_string();
            state.filters = filters.clone();
            state.searching = true;
            state.latest_search += 1;
            state.latest_search
        };

        let result = self.api.search_users(query, &filters).await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        let mut state = self.state.write().await;
        if state.latest_search != sequence {
            return Completion::Discarded;
        }
        state.searching = false;
        match result {
            Ok(results) => {
                state.results = results;
                Completion::Applied
            }
            Err(err) => {
                error!("Error searching users: {}", err);
                Completion::Failed
            }
        }
    }

    pub async fn clear_filters(&self) -> Completion {
        self.search("", SearchFilters::default()).await
    }

    pub async fn has_active_filters(&self) -> bool {
        let state = self.state.read().await;
        !state.query.is_empty() || !state.filters.is_empty()
    }

    pub async fn filter_options(&self) -> FilterOptions {
        let state = self.state.read().await;
        let mut options = FilterOptions::default();
        for user in &state.users {
            push_distinct(&mut options.branches, &user.branch);
            push_distinct(&mut options.cities, user.city());
            if !options.graduation_years.contains(&user.graduation_year) {
                options.graduation_years.push(user.graduation_year);
            }
        }
        options.graduation_years.sort_unstable_by(|a, b| b.cmp(a));
        options
    }

    /// Whether the viewer is connected to the member on this card
    pub async fn is_connected(&self, user_id: &UserId) -> bool {
        let state = self.state.read().await;
        state
            .users
            .iter()
            .any(|user| &user.id == user_id && user.is_connected_to(&self.viewer.user_id))
    }

    pub fn is_connect_pending(&self, user_id: &UserId) -> bool {
        self.toggles.is_pending(&connect_control(user_id))
    }

    /// Connect button on a member card. The viewer's own card has none.
    pub async fn toggle_connect(&self, user_id: &UserId) -> Completion {
        if self.viewer.is(user_id) {
            return Completion::Rejected;
        }
        let Some(_pending) = self.toggles.try_begin(connect_control(user_id)) else {
            return Completion::Ignored;
        };

        let set = MembershipSet::Connections(user_id.clone());
        let result = self.api.toggle_membership(&set, &self.viewer.user_id).await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        match result {
            Ok(Some(connected)) => {
                let mut state = self.state.write().await;
                let viewer = &self.viewer.user_id;
                mirror_connection(&mut state.users, viewer, user_id, connected);
                mirror_connection(&mut state.results, viewer, user_id, connected);
                Completion::Applied
            }
            Ok(None) => {
                debug!("User {} no longer exists", user_id);
                Completion::Rejected
            }
            Err(err) => {
                error!("Error updating connection with {}: {}", user_id, err);
                Completion::Failed
            }
        }
    }
}
