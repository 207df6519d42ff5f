// Alumni network demo - walks every page against the seeded mock backend

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use alumni_network::{
    app_state::AppState,
    config::Config,
    shell::{NavigationShell, Page},
    views::Completion,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize application state
    let app_state = AppState::new(config)?;
    info!("Signed in as user {}", app_state.viewer.user_id);

    let mut shell = NavigationShell::new(app_state.api.clone(), app_state.viewer.clone());
    let profile_path = format!("/profile/{}", app_state.viewer.user_id);
    let today = Utc::now().date_naive();

    for path in ["/", "/directory", profile_path.as_str(), "/events", "/groups"] {
        let completion = shell.navigate(path).await;
        info!("{} -> {:?}", path, completion);

        match shell.page().cloned() {
            Some(Page::Home(home)) => {
                let cards = home.post_cards(Utc::now()).await;
                info!("Feed has {} posts", cards.len());
                if let Some(card) = cards.first() {
                    let liked = home.toggle_like(&card.post_id).await;
                    info!("Liked post {}: {:?}", card.post_id, liked);
                }
                let posted = home.submit_post("Hello from the alumni network demo").await;
                info!("Posted: {:?}", posted);
                let stats = home.viewer_stats().await;
                info!("Viewer has {} connections and {} posts", stats.connections, stats.posts);
            }
            Some(Page::Directory(directory)) => {
                let options = directory.filter_options().await;
                info!("Directory offers {} branches and {} cities", options.branches.len(), options.cities.len());
                if directory.search("engineer", Default::default()).await == Completion::Applied {
                    info!("Search matched {} members", directory.snapshot().await.results.len());
                }
            }
            Some(Page::Profile(profile)) => {
                let state = profile.snapshot().await;
                if let Some(user) = state.profile {
                    info!("{}: {} posts, {} connections", user.name, state.posts.len(), state.connections.len());
                }
            }
            Some(Page::Events(events)) => {
                let upcoming = events.upcoming(today).await;
                let past = events.past(today).await;
                info!("{} upcoming and {} past events", upcoming.len(), past.len());
                if let Some(card) = upcoming.first().or(past.first()) {
                    let rsvp = events.toggle_rsvp(&card.event_id).await;
                    info!("RSVP to '{}' on {}: {:?}", card.title, card.date, rsvp);
                }
            }
            Some(Page::Groups(groups)) => {
                let snapshot = groups.snapshot().await;
                let target = snapshot
                    .groups
                    .iter()
                    .find(|group| !group.is_member(&app_state.viewer.user_id));
                if let Some(group) = target {
                    let joined = groups.toggle_membership(&group.id).await;
                    info!("Joined '{}': {:?}", group.name, joined);
                }
            }
            Some(Page::NotFound(_)) | None => info!("Nothing mounted for {}", path),
        }
    }

    Ok(())
}
