// EntEvent - scheduling helpers

use chrono::{NaiveDate, NaiveTime};

use super::Entity;
use crate::core::UserId;
use crate::models::Event;
use crate::schemas::EventSchema;

impl Entity for Event {
    type Schema = EventSchema;

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Event {
    pub fn is_attending(&self, user_id: &UserId) -> bool {
        self.attendees.contains(user_id)
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").ok()
    }

    /// An event is upcoming while its date lies strictly after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date > today
    }
}
