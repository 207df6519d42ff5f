// Simulated network latency per facade operation

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchUsers,
    GetUserProfile,
    SearchUsers,
    FetchConnections,
    FetchPosts,
    FetchPostsByAuthor,
    GetPost,
    CreatePost,
    LikePost,
    FetchEvents,
    GetEvent,
    RsvpEvent,
    FetchGroups,
    GetGroup,
    JoinGroup,
    LeaveGroup,
    ToggleMembership,
}

impl Operation {
    pub const ALL: [Operation; 17] = [
        Operation::FetchUsers,
        Operation::GetUserProfile,
        Operation::SearchUsers,
        Operation::FetchConnections,
        Operation::FetchPosts,
        Operation::FetchPostsByAuthor,
        Operation::GetPost,
        Operation::CreatePost,
        Operation::LikePost,
        Operation::FetchEvents,
        Operation::GetEvent,
        Operation::RsvpEvent,
        Operation::FetchGroups,
        Operation::GetGroup,
        Operation::JoinGroup,
        Operation::LeaveGroup,
        Operation::ToggleMembership,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FetchUsers => "fetch_users",
            Operation::GetUserProfile => "get_user_profile",
            Operation::SearchUsers => "search_users",
            Operation::FetchConnections => "fetch_connections",
            Operation::FetchPosts => "fetch_posts",
            Operation::FetchPostsByAuthor => "fetch_posts_by_author",
            Operation::GetPost => "get_post",
            Operation::CreatePost => "create_post",
            Operation::LikePost => "like_post",
            Operation::FetchEvents => "fetch_events",
            Operation::GetEvent => "get_event",
            Operation::RsvpEvent => "rsvp_event",
            Operation::FetchGroups => "fetch_groups",
            Operation::GetGroup => "get_group",
            Operation::JoinGroup => "join_group",
            Operation::LeaveGroup => "leave_group",
            Operation::ToggleMembership => "toggle_membership",
        }
    }

    /// Delay the browser-era mock used for this operation, in milliseconds
    fn default_millis(&self) -> u64 {
        match self {
            Operation::FetchUsers => 800,
            Operation::GetUserProfile => 500,
            Operation::SearchUsers => 600,
            Operation::FetchConnections => 500,
            Operation::FetchPosts => 700,
            Operation::FetchPostsByAuthor => 500,
            Operation::GetPost => 300,
            Operation::CreatePost => 500,
            Operation::LikePost => 300,
            Operation::FetchEvents => 600,
            Operation::GetEvent => 300,
            Operation::RsvpEvent => 400,
            Operation::FetchGroups => 500,
            Operation::GetGroup => 300,
            Operation::JoinGroup => 400,
            Operation::LeaveGroup => 400,
            Operation::ToggleMembership => 800,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delay applied before each operation resolves. Carries no other semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    delays: HashMap<Operation, Duration>,
}

impl LatencyProfile {
    pub fn realistic() -> Self {
        let delays = Operation::ALL
            .iter()
            .map(|op| (*op, Duration::from_millis(op.default_millis())))
            .collect();
        Self { delays }
    }

    pub fn zero() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub fn uniform(delay: Duration) -> Self {
        let delays = Operation::ALL.iter().map(|op| (*op, delay)).collect();
        Self { delays }
    }

    pub fn with(mut self, operation: Operation, delay: Duration) -> Self {
        self.delays.insert(operation, delay);
        self
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        self.delays.get(&operation).copied().unwrap_or(Duration::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.delays.values().all(Duration::is_zero)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::realistic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realistic_profile_values() {
        let profile = LatencyProfile::realistic();
        assert_eq!(profile.delay_for(Operation::FetchUsers), Duration::from_millis(800));
        assert_eq!(profile.delay_for(Operation::LikePost), Duration::from_millis(300));
        assert_eq!(profile.delay_for(Operation::JoinGroup), Duration::from_millis(400));
        assert!(!profile.is_zero());
    }

    #[test]
    fn test_zero_and_overrides() {
        let profile = LatencyProfile::zero().with(Operation::RsvpEvent, Duration::from_millis(5));
        assert_eq!(profile.delay_for(Operation::FetchPosts), Duration::ZERO);
        assert_eq!(profile.delay_for(Operation::RsvpEvent), Duration::from_millis(5));
        assert!(LatencyProfile::zero().is_zero());
    }
}
