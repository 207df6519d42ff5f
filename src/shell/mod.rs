// Navigation shell - maps paths to pages and owns the mount / unmount cycle

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::core::UserId;
use crate::infrastructure::{SocialApi, ViewerContext};
use crate::views::{Completion, DirectoryView, EventsView, GroupsView, HomeView, Lifecycle, ProfileView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Directory,
    Profile(UserId),
    Events,
    Groups,
    NotFound(String),
}

impl Route {
    /// Query strings and trailing slashes are ignored. Paths must be absolute.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Route::NotFound(path.to_string());
        };
        let segments: Vec<&str> = rest.split('/').collect();

        match segments.as_slice() {
            ["directory"] => Route::Directory,
            ["events"] => Route::Events,
            ["groups"] => Route::Groups,
            ["profile", id] if !id.is_empty() => Route::Profile(UserId::new(*id)),
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Directory => "/directory".to_string(),
            Route::Profile(id) => format!("/profile/{}", id),
            Route::Events => "/events".to_string(),
            Route::Groups => "/groups".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// The mounted page. Views are shared so callers can keep a handle while the shell moves on.
#[derive(Clone)]
pub enum Page {
    Home(Arc<HomeView>),
    Directory(Arc<DirectoryView>),
    Profile(Arc<ProfileView>),
    Events(Arc<EventsView>),
    Groups(Arc<GroupsView>),
    NotFound(String),
}

impl Page {
    fn lifecycle(&self) -> Option<&Lifecycle> {
        match self {
            Page::Home(view) => Some(view.lifecycle()),
            Page::Directory(view) => Some(view.lifecycle()),
            Page::Profile(view) => Some(view.lifecycle()),
            Page::Events(view) => Some(view.lifecycle()),
            Page::Groups(view) => Some(view.lifecycle()),
            Page::NotFound(_) => None,
        }
    }

    pub async fn load(&self) -> Completion {
        match self {
            Page::Home(view) => view.load().await,
            Page::Directory(view) => view.load().await,
            Page::Profile(view) => view.load().await,
            Page::Events(view) => view.load().await,
            Page::Groups(view) => view.load().await,
            Page::NotFound(_) => Completion::Rejected,
        }
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home(_) => write!(f, "Page::Home"),
            Page::Directory(_) => write!(f, "Page::Directory"),
            Page::Profile(view) => write!(f, "Page::Profile({})", view.user_id()),
            Page::Events(_) => write!(f, "Page::Events"),
            Page::Groups(_) => write!(f, "Page::Groups"),
            Page::NotFound(path) => write!(f, "Page::NotFound({})", path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: String,
    pub active: bool,
}

pub struct NavigationShell {
    api: Arc<dyn SocialApi>,
    viewer: ViewerContext,
    route: Route,
    page: Option<Page>,
}

impl NavigationShell {
    pub fn new(api: Arc<dyn SocialApi>, viewer: ViewerContext) -> Self {
        Self {
            api,
            viewer,
            route: Route::Home,
            page: None,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Unmount the current page and mount the one for `path` without loading it
    pub fn open(&mut self, path: &str) -> Page {
        let route = Route::parse(path);
        if let Some(lifecycle) = self.page.as_ref().and_then(Page::lifecycle) {
            lifecycle.unmount();
        }

        let api = self.api.clone();
        let viewer = self.viewer.clone();
        let page = match &route {
            Route::Home => Page::Home(Arc::new(HomeView::new(api, viewer))),
            Route::Directory => Page::Directory(Arc::new(DirectoryView::new(api, viewer))),
            Route::Profile(id) => Page::Profile(Arc::new(ProfileView::new(api, viewer, id.clone()))),
            Route::Events => Page::Events(Arc::new(EventsView::new(api, viewer))),
            Route::Groups => Page::Groups(Arc::new(GroupsView::new(api, viewer))),
            Route::NotFound(path) => {
                debug!("No page for {}", path);
                Page::NotFound(path.clone())
            }
        };

        info!("Navigated to {}", route);
        self.route = route;
        self.page = Some(page.clone());
        page
    }

    pub async fn navigate(&mut self, path: &str) -> Completion {
        let page = self.open(path);
        page.load().await
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        let own_profile = Route::Profile(self.viewer.user_id.clone());
        [
            ("Home", Route::Home),
            ("Directory", Route::Directory),
            ("Events", Route::Events),
            ("Groups", Route::Groups),
            ("Profile", own_profile),
        ]
        .into_iter()
        .map(|(label, route)| NavLink {
            label,
            path: route.path(),
            active: route == self.route,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::app_state::AppState;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/directory/"), Route::Directory);
        assert_eq!(Route::parse("/events?tab=past"), Route::Events);
        assert_eq!(Route::parse("/groups"), Route::Groups);
        assert_eq!(Route::parse("/profile/3"), Route::Profile(UserId::new("3")));
        assert_eq!(Route::parse("/profile"), Route::NotFound("/profile".to_string()));
        assert_eq!(Route::parse("/jobs"), Route::NotFound("/jobs".to_string()));
        assert_eq!(Route::parse("/profile/3/posts"), Route::NotFound("/profile/3/posts".to_string()));
    }

    #[test]
    fn test_relative_paths_are_not_found() {
        assert_eq!(Route::parse("directory"), Route::NotFound("directory".to_string()));
        assert_eq!(Route::parse("events/"), Route::NotFound("events/".to_string()));
        assert_eq!(Route::parse("profile/3"), Route::NotFound("profile/3".to_string()));
    }

    #[test]
    fn test_route_paths_parse_back() {
        for route in [Route::Home, Route::Directory, Route::Events, Route::Groups, Route::Profile(UserId::new("2"))] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[tokio::test]
    async fn test_navigation_unmounts_previous_page() {
        let state = AppState::new(Config::for_tests()).unwrap();
        let mut shell = NavigationShell::new(state.api.clone(), state.viewer.clone());

        assert_eq!(shell.navigate("/events").await, Completion::Applied);
        let events = match shell.page() {
            Some(Page::Events(view)) => view.clone(),
            other => panic!("expected events page, got {:?}", other),
        };
        assert!(events.lifecycle().is_mounted());

        assert_eq!(shell.navigate("/groups").await, Completion::Applied);
        assert!(!events.lifecycle().is_mounted());
        assert_eq!(shell.route(), &Route::Groups);

        assert_eq!(shell.navigate("/nowhere").await, Completion::Rejected);
    }

    #[test]
    fn test_nav_links_flag_active_route() {
        let state = AppState::new(Config::for_tests()).unwrap();
        let mut shell = NavigationShell::new(state.api.clone(), state.viewer.clone());
        shell.open("/profile/1");

        let links = shell.nav_links();
        assert_eq!(links.len(), 5);
        let active: Vec<_> = links.iter().filter(|link| link.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Profile");
        assert_eq!(active[0].path, "/profile/1");
    }
}
