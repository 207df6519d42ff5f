// Events page: upcoming and past events with an RSVP button per card

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, error};

use super::format::{long_date, twelve_hour};
use super::{Completion, Lifecycle, ToggleBank};
use crate::core::memberships::{insert_id, remove_id};
use crate::core::{EventId, MembershipSet};
use crate::infrastructure::{SocialApi, ViewerContext};
use crate::models::Event;

#[derive(Debug, Clone, Default)]
pub struct EventsState {
    pub loading: bool,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub event_id: EventId,
    pub title: String,
    pub date: String,
    pub time: String,
    /// "Online" for virtual events
    pub location: String,
    pub organizer: String,
    pub attendee_count: usize,
    pub is_rsvped: bool,
}

pub struct EventsView {
    api: Arc<dyn SocialApi>,
    viewer: ViewerContext,
    lifecycle: Lifecycle,
    toggles: ToggleBank,
    state: RwLock<EventsState>,
}

fn rsvp_control(event_id: &EventId) -> String {
    format!("rsvp:{}", event_id)
}

impl EventsView {
    pub fn new(api: Arc<dyn SocialApi>, viewer: ViewerContext) -> Self {
        Self {
            api,
            viewer,
            lifecycle: Lifecycle::new(),
            toggles: ToggleBank::new(),
            state: RwLock::new(EventsState::default()),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub async fn snapshot(&self) -> EventsState {
        self.state.read().await.clone()
    }

    pub async fn load(&self) -> Completion {
        self.state.write().await.loading = true;

        let result = self.api.fetch_events().await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(events) => {
                state.events = events;
                Completion::Applied
            }
            Err(err) => {
                error!("Error loading events: {}", err);
                Completion::Failed
            }
        }
    }

    fn card(&self, event: &Event) -> EventCard {
        EventCard {
            event_id: event.id.clone(),
            title: event.title.clone(),
            date: long_date(event.date),
            time: twelve_hour(&event.time),
            location: if event.is_online {
                "Online".to_string()
            } else {
                event.location.clone()
            },
            organizer: event.organizer.clone(),
            attendee_count: event.attendees.len(),
            is_rsvped: event.is_attending(&self.viewer.user_id),
        }
    }

    /// Events dated after `today`, earliest first
    pub async fn upcoming(&self, today: NaiveDate) -> Vec<EventCard> {
        let state = self.state.read().await;
        state
            .events
            .iter()
            .filter(|event| event.is_upcoming(today))
            .map(|event| self.card(event))
            .collect()
    }

    /// Events on or before `today`, most recent first
    pub async fn past(&self, today: NaiveDate) -> Vec<EventCard> {
        let state = self.state.read().await;
        state
            .events
            .iter()
            .rev()
            .filter(|event| !event.is_upcoming(today))
            .map(|event| self.card(event))
            .collect()
    }

    pub async fn is_rsvped(&self, event_id: &EventId) -> bool {
        let state = self.state.read().await;
        state
            .events
            .iter()
            .any(|event| &event.id == event_id && event.is_attending(&self.viewer.user_id))
    }

    pub fn is_rsvp_pending(&self, event_id: &EventId) -> bool {
        self.toggles.is_pending(&rsvp_control(event_id))
    }

    pub async fn toggle_rsvp(&self, event_id: &EventId) -> Completion {
        let Some(_pending) = self.toggles.try_begin(rsvp_control(event_id)) else {
            return Completion::Ignored;
        };

        let set = MembershipSet::EventAttendees(event_id.clone());
        let result = self.api.toggle_membership(&set, &self.viewer.user_id).await;
        if !self.lifecycle.is_mounted() {
            return Completion::Discarded;
        }

        match result {
            Ok(Some(attending)) => {
                let mut state = self.state.write().await;
                if let Some(event) = state.events.iter_mut().find(|event| &event.id == event_id) {
                    if attending {
                        insert_id(&mut event.attendees, &self.viewer.user_id);
                    } else {
                        remove_id(&mut event.attendees, &self.viewer.user_id);
                    }
                }
                Completion::Applied
            }
            Ok(None) => {
                debug!("Event {} no longer exists", event_id);
                Completion::Rejected
            }
            Err(err) => {
                error!("Error updating RSVP for event {}: {}", event_id, err);
                Completion::Failed
            }
        }
    }
}
