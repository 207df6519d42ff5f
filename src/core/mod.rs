// Core types and primitives shared by every layer

pub mod memberships;
pub mod strong_types;

pub use memberships::{MembershipKind, MembershipSet};
pub use strong_types::{CommentId, EntityType, EventId, GroupId, PostId, UserId};
