// Profile page: one member, their posts, their connections and the connect button

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error};

use super::{Completion, Lifecycle, ToggleBank};
use crate::core::memberships::{insert_id, remove_id};
use crate::core::{MembershipSet, UserId};
use crate::infrastructure::{SocialApi, ViewerContext};
use crate::models::{Post, User};

const CONNECT_CONTROL: &str = "connect";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    About,
    Posts,
    Connections,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub loading: bool,
    pub not_found: bool,
    pub profile: Option<User>,
    pub posts: Vec<Post>,
    pub connections: Vec<User>,
    pub is_connected: bool,
    pub tab: ProfileTab,
}

pub struct ProfileView {
    api: Arc<dyn SocialApi>,
    viewer: ViewerContext,
    user_id: UserId,
    lifecycle: Lifecycle,
    toggles: ToggleBank,
    state: RwLock<ProfileState>,
}

impl ProfileView {
    pub fn new(api: Arc<dyn SocialApi>, viewer: ViewerContext, user_id: UserId) -> Self {
        Self {
            api,
            viewer,
            user_id,
            lifecycle: Lifecycle::new(),
            toggles: ToggleBank::new(),
            state: RwLock::new(ProfileState::default()),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn is_own_profile(&self) -> bool {
        self.viewer.is(&self.user_id)
    }

    pub async fn snapshot(&self) -> ProfileState {
        self.state.read().await.clone()
    }

    pub async fn set_tab(&self, tab: ProfileTab) {
        self.state.write().await.tab = tab;
    }

    pub async fn load(&self) -> Completion {
        self.state.write().await.loading = true;

        let profile = match self.api.get_user_profile(&self.user_id).await {
            Ok(profile) => profile,
            Err(err) => return self.fail("Error loading profile", err).await,
        };
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        let Some(profile) = profile else {
            debug!("Profile {} not found", self.user_id);
            let mut state = self.state.write().await;
            state.loading = false;
            state.not_found = true;
            return Completion::Applied;
        };

        let related = futures::try_join!(
            self.api.fetch_posts_by_author(&self.user_id),
            self.api.fetch_connections(&self.user_id)
        );
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        match related {
            Ok((posts, connections)) => {
                let mut state = self.state.write().await;
                state.loading = false;
                state.not_found = false;
                state.is_connected = profile.is_connected_to(&self.viewer.user_id);
                state.profile = Some(profile);
                state.posts = posts;
                state.connections = connections.unwrap_or_default();
                Completion::Applied
            }
            Err(err) => self.fail("Error loading profile", err).await,
        }
    }

    async fn fail(&self, context: &str, err: crate::error::AppError) -> Completion {
        error!("{} {}: {}", context, self.user_id, err);
        self.state.write().await.loading = false;
        Completion::Failed
    }

    pub fn is_connect_pending(&self) -> bool {
        self.toggles.is_pending(CONNECT_CONTROL)
    }

    /// Connect or disconnect the viewer and this member. The change is written to both
    /// users' connection lists.
    pub async fn toggle_connect(&self) -> Completion {
        if self.is_own_profile() || self.state.read().await.profile.is_none() {
            return Completion::Rejected;
        }
        let Some(_pending) = self.toggles.try_begin(CONNECT_CONTROL) else {
            return Completion::Ignored;
        };

        let set = MembershipSet::Connections(self.user_id.clone());
        let result = self.api.toggle_membership(&set, &self.viewer.user_id).await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        let connected = match result {
            Ok(Some(connected)) => connected,
            Ok(None) => return Completion::Rejected,
            Err(err) => {
                error!("Error updating connection with {}: {}", self.user_id, err);
                return Completion::Failed;
            }
        };

        {
            let mut state = self.state.write().await;
            state.is_connected = connected;
            if let Some(profile) = state.profile.as_mut() {
                if connected {
                    insert_id(&mut profile.connections, &self.viewer.user_id);
                } else {
                    remove_id(&mut profile.connections, &self.viewer.user_id);
                }
            }
        }

        // The resolved list needs the viewer's own record, so ask the backend again
        let refreshed = self.api.fetch_connections(&self.user_id).await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }
        match refreshed {
            Ok(Some(connections)) => self.state.write().await.connections = connections,
            Ok(None) => debug!("Profile {} vanished after connect", self.user_id),
            Err(err) => error!("Error refreshing connections of {}: {}", self.user_id, err),
        }
        Completion::Applied
    }
}
