// Entity models - the typed records held by the seed store

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{CommentId, EventId, GroupId, PostId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub profile_picture: String,
    pub headline: String,
    pub bio: String,
    pub college: String,
    pub branch: String,
    pub graduation_year: i32,
    pub current_company: String,
    pub location: String,
    pub skills: Vec<String>,
    pub connections: Vec<UserId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: Vec<UserId>,
    pub comments: Vec<Comment>,
}

/// Owned by its post; has no lifecycle of its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Local start time, `HH:MM`
    pub time: String,
    pub location: String,
    pub is_online: bool,
    /// Free text, not a user reference
    pub organizer: String,
    pub attendees: Vec<UserId>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub member_count: u32,
    pub members: Vec<UserId>,
    pub image: String,
    pub is_private: bool,
}

/// Optional directory filters; a `None` field imposes no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub branch: Option<String>,
    pub graduation_year: Option<i32>,
    pub location: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.branch.as_deref().map_or(true, str::is_empty)
            && self.graduation_year.is_none()
            && self.location.as_deref().map_or(true, str::is_empty)
    }
}
