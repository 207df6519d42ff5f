// Groups page: every group with a join / leave button

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use super::{Completion, Lifecycle, ToggleBank};
use crate::core::memberships::{insert_id, remove_id};
use crate::core::GroupId;
use crate::infrastructure::{SocialApi, ViewerContext};
use crate::models::Group;

#[derive(Debug, Clone, Default)]
pub struct GroupsState {
    pub loading: bool,
    pub groups: Vec<Group>,
}

pub struct GroupsView {
    api: Arc<dyn SocialApi>,
    viewer: ViewerContext,
    lifecycle: Lifecycle,
    toggles: ToggleBank,
    state: RwLock<GroupsState>,
}

fn group_control(group_id: &GroupId) -> String {
    format!("group:{}", group_id)
}

impl GroupsView {
    pub fn new(api: Arc<dyn SocialApi>, viewer: ViewerContext) -> Self {
        Self {
            api,
            viewer,
            lifecycle: Lifecycle::new(),
            toggles: ToggleBank::new(),
            state: RwLock::new(GroupsState::default()),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub async fn snapshot(&self) -> GroupsState {
        self.state.read().await.clone()
    }

    pub async fn load(&self) -> Completion {
        self.state.write().await.loading = true;

        let result = self.api.fetch_groups().await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(groups) => {
                state.groups = groups;
                Completion::Applied
            }
            Err(err) => {
                error!("Error loading groups: {}", err);
                Completion::Failed
            }
        }
    }

    pub async fn is_member(&self, group_id: &GroupId) -> bool {
        let state = self.state.read().await;
        state
            .groups
            .iter()
            .any(|group| &group.id == group_id && group.is_member(&self.viewer.user_id))
    }

    pub async fn public_groups(&self) -> Vec<Group> {
        self.groups_where(|group| !group.is_private).await
    }

    pub async fn private_groups(&self) -> Vec<Group> {
        self.groups_where(|group| group.is_private).await
    }

    async fn groups_where(&self, keep: impl Fn(&Group) -> bool) -> Vec<Group> {
        let state = self.state.read().await;
        state.groups.iter().filter(|group| keep(*group)).cloned().collect()
    }

    pub fn is_membership_pending(&self, group_id: &GroupId) -> bool {
        self.toggles.is_pending(&group_control(group_id))
    }

    /// Join the group, or leave it when the viewer is already a member. The local copy
    /// keeps `member_count` equal to the member list.
    pub async fn toggle_membership(&self, group_id: &GroupId) -> Completion {
        let Some(_pending) = self.toggles.try_begin(group_control(group_id)) else {
            return Completion::Ignored;
        };

        let leaving = self.is_member(group_id).await;
        let result = if leaving {
            self.api.leave_group(group_id, &self.viewer.user_id).await
        } else {
            self.api.join_group(group_id, &self.viewer.user_id).await
        };
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        match result {
            Ok(true) => {
                let mut state = self.state.write().await;
                if let Some(group) = state.groups.iter_mut().find(|group| &group.id == group_id) {
                    let changed = if leaving {
                        remove_id(&mut group.members, &self.viewer.user_id)
                    } else {
                        insert_id(&mut group.members, &self.viewer.user_id)
                    };
                    if changed {
                        group.member_count = group.members.len() as u32;
                    }
                }
                Completion::Applied
            }
            Ok(false) => self.resync(group_id).await,
            Err(err) => {
                error!("Error updating membership of group {}: {}", group_id, err);
                Completion::Failed
            }
        }
    }

    /// The backend refused the change, so the local copy is stale. Replace it with the
    /// backend's version, or drop it if the group is gone.
    async fn resync(&self, group_id: &GroupId) -> Completion {
        let fresh = self.api.get_group(group_id).await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        let mut state = self.state.write().await;
        match fresh {
            Ok(Some(group)) => {
                debug!("Group {} was stale, refreshed", group_id);
                if let Some(local) = state.groups.iter_mut().find(|local| local.id == group.id) {
                    *local = group;
                }
                Completion::Rejected
            }
            Ok(None) => {
                warn!("Group {} no longer exists", group_id);
                state.groups.retain(|group| &group.id != group_id);
                Completion::Rejected
            }
            Err(err) => {
                error!("Error refreshing group {}: {}", group_id, err);
                Completion::Failed
            }
        }
    }
}
