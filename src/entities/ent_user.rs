// EntUser - directory matching and connection helpers

use super::Entity;
use crate::core::UserId;
use crate::models::{SearchFilters, User};
use crate::schemas::UserSchema;

impl Entity for User {
    type Schema = UserSchema;

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl User {
    pub fn is_connected_to(&self, other: &UserId) -> bool {
        self.connections.contains(other)
    }

    /// Case-insensitive substring match against name, headline or any skill.
    /// An empty query matches every user.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        contains_ignore_case(&self.name, &needle)
            || contains_ignore_case(&self.headline, &needle)
            || self.skills.iter().any(|skill| contains_ignore_case(skill, &needle))
    }

    /// Every set filter must hold. Empty strings count as unset.
    pub fn matches_filters(&self, filters: &SearchFilters) -> bool {
        let branch_ok = match filters.branch.as_deref() {
            Some(branch) if !branch.is_empty() => {
                contains_ignore_case(&self.branch, &branch.to_lowercase())
            }
            _ => true,
        };
        let year_ok = filters
            .graduation_year
            .map_or(true, |year| self.graduation_year == year);
        let location_ok = match filters.location.as_deref() {
            Some(location) if !location.is_empty() => {
                contains_ignore_case(&self.location, &location.to_lowercase())
            }
            _ => true,
        };
        branch_ok && year_ok && location_ok
    }

    /// City part of the location, i.e. everything before the first comma
    pub fn city(&self) -> &str {
        self.location.split(',').next().unwrap_or_default().trim()
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
