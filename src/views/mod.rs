// View layer - headless page models. Each page talks to the backend only through
// `SocialApi`, keeps its own derived state and guards its toggles.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub mod directory;
pub mod events;
pub mod format;
pub mod groups;
pub mod home;
pub mod profile;
pub mod toggle;

pub use directory::{DirectoryState, DirectoryView, FilterOptions};
pub use events::{EventCard, EventsState, EventsView};
pub use groups::{GroupsState, GroupsView};
pub use home::{HomeState, HomeView, PostCard, ViewerStats};
pub use profile::{ProfileState, ProfileTab, ProfileView};
pub use toggle::{PendingToggle, ToggleBank, ToggleState};

/// What happened to a view action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was applied to the view state
    Applied,
    /// The control was already pending; nothing was sent
    Ignored,
    /// The view was unmounted (or a newer request superseded this one) before the result arrived
    Discarded,
    /// The request was not valid for the current state, or the target no longer exists
    Rejected,
    /// The backend failed; the error was logged
    Failed,
}

/// Mount flag shared between a view and its in-flight continuations
#[derive(Debug, Clone)]
pub struct Lifecycle {
    mounted: Arc<AtomicBool>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
