// Membership lists - the many-to-many relations stored as id lists on an entity

use std::fmt;

use super::strong_types::{EventId, GroupId, PostId, UserId};

/// Relation kinds that are stored as a list of user ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipKind {
    Like,
    Attendance,
    Membership,
    Connection,
}

impl MembershipKind {
    /// Inverse relation that has to change together with this one, if any.
    /// Likes, attendance and membership are only recorded on the target entity.
    pub fn inverse(&self) -> Option<MembershipKind> {
        match self {
            MembershipKind::Connection => Some(MembershipKind::Connection),
            MembershipKind::Like | MembershipKind::Attendance | MembershipKind::Membership => None,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        self.inverse() == Some(*self)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipKind::Like => "likes",
            MembershipKind::Attendance => "attendees",
            MembershipKind::Membership => "members",
            MembershipKind::Connection => "connections",
        }
    }
}

/// A concrete membership list: which entity, and which of its lists
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MembershipSet {
    PostLikes(PostId),
    EventAttendees(EventId),
    GroupMembers(GroupId),
    Connections(UserId),
}

impl MembershipSet {
    pub fn kind(&self) -> MembershipKind {
        match self {
            MembershipSet::PostLikes(_) => MembershipKind::Like,
            MembershipSet::EventAttendees(_) => MembershipKind::Attendance,
            MembershipSet::GroupMembers(_) => MembershipKind::Membership,
            MembershipSet::Connections(_) => MembershipKind::Connection,
        }
    }

    /// Id of the entity owning the list
    pub fn owner_id(&self) -> &str {
        match self {
            MembershipSet::PostLikes(id) => id.as_str(),
            MembershipSet::EventAttendees(id) => id.as_str(),
            MembershipSet::GroupMembers(id) => id.as_str(),
            MembershipSet::Connections(id) => id.as_str(),
        }
    }
}

impl fmt::Display for MembershipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind().display_name(), self.owner_id())
    }
}

/// Toggle `id` in `list`: remove it if present, append it otherwise.
/// Returns whether `id` is in the list afterwards.
pub fn toggle_id<T: PartialEq + Clone>(list: &mut Vec<T>, id: &T) -> bool {
    if let Some(index) = list.iter().position(|existing| existing == id) {
        list.remove(index);
        false
    } else {
        list.push(id.clone());
        true
    }
}

/// Append `id` unless already present. Returns whether it was appended.
pub fn insert_id<T: PartialEq + Clone>(list: &mut Vec<T>, id: &T) -> bool {
    if list.contains(id) {
        return false;
    }
    list.push(id.clone());
    true
}

/// Remove `id` if present. Returns whether it was removed.
pub fn remove_id<T: PartialEq>(list: &mut Vec<T>, id: &T) -> bool {
    match list.iter().position(|existing| existing == id) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_mapping() {
        assert!(MembershipKind::Connection.is_symmetric());
        assert_eq!(MembershipKind::Like.inverse(), None);
        assert!(!MembershipKind::Membership.is_symmetric());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut likes = vec!["1".to_string(), "2".to_string()];
        let original = likes.clone();

        assert!(!toggle_id(&mut likes, &"1".to_string()));
        assert_eq!(likes, vec!["2".to_string()]);

        assert!(toggle_id(&mut likes, &"1".to_string()));
        assert_eq!(likes.len(), original.len());
        for id in &original {
            assert!(likes.contains(id));
        }
    }

    #[test]
    fn test_insert_and_remove_are_one_directional() {
        let mut members = vec![1, 2];
        assert!(!insert_id(&mut members, &2));
        assert!(insert_id(&mut members, &3));
        assert_eq!(members, vec![1, 2, 3]);

        assert!(remove_id(&mut members, &1));
        assert!(!remove_id(&mut members, &1));
        assert_eq!(members, vec![2, 3]);
    }

    #[test]
    fn test_set_display() {
        let set = MembershipSet::GroupMembers(GroupId::from("4"));
        assert_eq!(set.to_string(), "members(4)");
        assert_eq!(set.kind(), MembershipKind::Membership);
    }
}
