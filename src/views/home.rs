// Home feed: posts, the composer, suggested people and upcoming events

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::{debug, error};

use super::format::relative_time;
use super::{Completion, Lifecycle, ToggleBank};
use crate::core::memberships::{insert_id, remove_id};
use crate::core::{MembershipSet, PostId};
use crate::infrastructure::{SocialApi, ViewerContext};
use crate::models::{Event, Post, User};
use crate::schemas::MAX_POST_LENGTH;

const COMPOSER_CONTROL: &str = "composer";
const SIDEBAR_LIMIT: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub loading: bool,
    pub posts: Vec<Post>,
    pub users: Vec<User>,
    pub events: Vec<Event>,
}

/// A post ready to render. Posts whose author cannot be resolved get no card.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub post_id: PostId,
    pub author: User,
    pub content: String,
    pub posted: String,
    pub like_count: usize,
    pub liked_by_viewer: bool,
    pub comment_count: usize,
    /// Names of the users who liked the post, unknown ids skipped
    pub liked_by: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerStats {
    pub connections: usize,
    pub posts: usize,
}

pub struct HomeView {
    api: Arc<dyn SocialApi>,
    viewer: ViewerContext,
    lifecycle: Lifecycle,
    toggles: ToggleBank,
    state: RwLock<HomeState>,
}

fn like_control(post_id: &PostId) -> String {
    format!("like:{}", post_id)
}

impl HomeView {
    pub fn new(api: Arc<dyn SocialApi>, viewer: ViewerContext) -> Self {
        Self {
            api,
            viewer,
            lifecycle: Lifecycle::new(),
            toggles: ToggleBank::new(),
            state: RwLock::new(HomeState::default()),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub async fn snapshot(&self) -> HomeState {
        self.state.read().await.clone()
    }

    pub async fn load(&self) -> Completion {
        self.state.write().await.loading = true;

        let result = futures::try_join!(
            self.api.fetch_posts(),
            self.api.fetch_users(),
            self.api.fetch_events()
        );
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok((posts, users, events)) => {
                debug!("Home feed loaded with {} posts", posts.len());
                state.posts = posts;
                state.users = users;
                state.events = events;
                Completion::Applied
            }
            Err(err) => {
                error!("Error loading home feed: {}", err);
                Completion::Failed
            }
        }
    }

    pub async fn post_cards(&self, now: DateTime<Utc>) -> Vec<PostCard> {
        let state = self.state.read().await;
        let find_user = |id: &str| state.users.iter().find(|user| user.id == id);

        state
            .posts
            .iter()
            .filter_map(|post| {
                let author = find_user(post.author_id.as_str())?;
                Some(PostCard {
                    post_id: post.id.clone(),
                    author: author.clone(),
                    content: post.content.clone(),
                    posted: relative_time(post.timestamp, now),
                    like_count: post.like_count(),
                    liked_by_viewer: post.is_liked_by(&self.viewer.user_id),
                    comment_count: post.comments.len(),
                    liked_by: post
                        .likes
                        .iter()
                        .filter_map(|id| find_user(id.as_str()).map(|user| user.name.clone()))
                        .collect(),
                })
            })
            .collect()
    }

    pub fn is_like_pending(&self, post_id: &PostId) -> bool {
        self.toggles.is_pending(&like_control(post_id))
    }

    pub async fn toggle_like(&self, post_id: &PostId) -> Completion {
        let Some(_pending) = self.toggles.try_begin(like_control(post_id)) else {
            return Completion::Ignored;
        };

        let set = MembershipSet::PostLikes(post_id.clone());
        let result = self.api.toggle_membership(&set, &self.viewer.user_id).await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        match result {
            // The store reports where the viewer ended up, which may differ from a stale local copy
            Ok(Some(liked)) => {
                let mut state = self.state.write().await;
                if let Some(post) = state.posts.iter_mut().find(|post| &post.id == post_id) {
                    if liked {
                        insert_id(&mut post.likes, &self.viewer.user_id);
                    } else {
                        remove_id(&mut post.likes, &self.viewer.user_id);
                    }
                }
                Completion::Applied
            }
            Ok(None) => {
                debug!("Post {} no longer exists", post_id);
                Completion::Rejected
            }
            Err(err) => {
                error!("Error liking post {}: {}", post_id, err);
                Completion::Failed
            }
        }
    }

    pub fn is_composer_busy(&self) -> bool {
        self.toggles.is_pending(COMPOSER_CONTROL)
    }

    /// Publish a post as the viewer. Blank content and content over the length bound
    /// are rejected before anything is sent.
    pub async fn submit_post(&self, content: &str) -> Completion {
        let content = content.trim();
        if content.is_empty() || content.chars().count() > MAX_POST_LENGTH {
            return Completion::Rejected;
        }
        let Some(_pending) = self.toggles.try_begin(COMPOSER_CONTROL) else {
            return Completion::Ignored;
        };

        let result = self.api.create_post(content, &self.viewer.user_id).await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        match result {
            Ok(post) => {
                self.state.write().await.posts.insert(0, post);
                Completion::Applied
            }
            Err(err) => {
                error!("Error creating post: {}", err);
                Completion::Failed
            }
        }
    }

    /// Up to three users other than the viewer, in directory order
    pub async fn suggested_users(&self) -> Vec<User> {
        let state = self.state.read().await;
        state
            .users
            .iter()
            .filter(|user| !self.viewer.is(&user.id))
            .take(SIDEBAR_LIMIT)
            .cloned()
            .collect()
    }

    /// Up to three events dated after `today`, earliest first
    pub async fn upcoming_events(&self, today: NaiveDate) -> Vec<Event> {
        let state = self.state.read().await;
        state
            .events
            .iter()
            .filter(|event| event.is_upcoming(today))
            .take(SIDEBAR_LIMIT)
            .cloned()
            .collect()
    }

    pub async fn viewer(&self) -> Option<User> {
        let state = self.state.read().await;
        state.users.iter().find(|user| self.viewer.is(&user.id)).cloned()
    }

    pub async fn viewer_stats(&self) -> ViewerStats {
        let state = self.state.read().await;
        let connections = state
            .users
            .iter()
            .find(|user| self.viewer.is(&user.id))
            .map_or(0, |user| user.connections.len());
        let posts = state
            .posts
            .iter()
            .filter(|post| self.viewer.is(&post.author_id))
            .count();
        ViewerStats { connections, posts }
    }
}
