use std::collections::HashSet;

use serde_json::{json, Value};

use alumni_network::{
    config::Config,
    core::{EventId, GroupId, MembershipSet, PostId, UserId},
    entities::{Entity, Event, Group, Post, User},
    infrastructure::{SeedStore, SocialApi},
    models::SearchFilters,
    AppState,
};

fn seeded() -> AppState {
    AppState::new(Config::for_tests()).unwrap()
}

fn user_record(id: &str, name: &str, headline: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "profilePicture": "https://example.com/avatar.png",
        "headline": headline,
        "bio": "",
        "college": "Somewhere",
        "branch": "Physics",
        "graduationYear": 2020,
        "currentCompany": "Acme",
        "location": "Boston, MA",
        "skills": ["Optics"],
        "connections": []
    })
}

fn custom(users: Vec<Value>, posts: Vec<Value>, groups: Vec<Value>) -> AppState {
    let store = SeedStore::new(
        User::from_records(users).unwrap(),
        Post::from_records(posts).unwrap(),
        Vec::<Event>::new(),
        Group::from_records(groups).unwrap(),
    );
    AppState::with_store(Config::for_tests(), store).unwrap()
}

fn ids(users: &[User]) -> Vec<&str> {
    users.iter().map(|user| user.id.as_str()).collect()
}

#[tokio::test]
async fn test_search_matches_name_headline_or_skill() {
    let state = seeded();
    let all = state.api.fetch_users().await.unwrap();

    for query in ["", "priya", "ENGINEER", "machine learning", "figma", "nobody-matches"] {
        let results = state.api.search_users(query, &SearchFilters::default()).await.unwrap();
        let expected: Vec<&str> = all
            .iter()
            .filter(|user| {
                let q = query.to_lowercase();
                user.name.to_lowercase().contains(&q)
                    || user.headline.to_lowercase().contains(&q)
                    || user.skills.iter().any(|skill| skill.to_lowercase().contains(&q))
            })
            .map(|user| user.id.as_str())
            .collect();
        assert_eq!(ids(&results), expected, "query {:?}", query);
    }

    let everyone = state.api.search_users("", &SearchFilters::default()).await.unwrap();
    assert_eq!(everyone.len(), all.len());
}

#[tokio::test]
async fn test_search_filters_and_together() {
    let state = seeded();

    let filters = SearchFilters {
        location: Some("san francisco".to_string()),
        ..Default::default()
    };
    let results = state.api.search_users("", &filters).await.unwrap();
    assert_eq!(ids(&results), vec!["1", "5"]);

    let filters = SearchFilters {
        location: Some("san francisco".to_string()),
        graduation_year: Some(2021),
        branch: Some("design".to_string()),
    };
    let results = state.api.search_users("", &filters).await.unwrap();
    assert_eq!(ids(&results), vec!["5"]);

    let filters = SearchFilters {
        branch: Some("engineering".to_string()),
        ..Default::default()
    };
    let results = state.api.search_users("leadership", &filters).await.unwrap();
    assert_eq!(ids(&results), vec!["2", "6"]);

    // Empty strings impose no constraint
    let filters = SearchFilters {
        branch: Some(String::new()),
        graduation_year: None,
        location: Some(String::new()),
    };
    assert_eq!(state.api.search_users("", &filters).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_search_preserves_store_order() {
    let state = custom(
        vec![
            user_record("a", "Ada Stone", "Researcher at Stanford"),
            user_record("c", "Cy Hale", "Consultant"),
            user_record("b", "Bo Marsh", "Stanford lecturer"),
        ],
        vec![],
        vec![],
    );
    let results = state.api.search_users("Stanford", &SearchFilters::default()).await.unwrap();
    assert_eq!(ids(&results), vec!["a", "b"]);
}

#[tokio::test]
async fn test_like_is_an_involution() {
    let state = custom(
        vec![user_record("1", "Ada Stone", "Researcher"), user_record("2", "Bo Marsh", "Lecturer")],
        vec![json!({
            "id": "p1",
            "authorId": "1",
            "content": "Hello",
            "timestamp": "2024-11-10T14:30:00Z",
            "likes": ["1", "2"],
            "comments": []
        })],
        vec![],
    );
    let post_id = PostId::from("p1");
    let user = UserId::from("1");

    assert!(state.api.like_post(&post_id, &user).await.unwrap());
    let post = state.api.get_post(&post_id).await.unwrap().unwrap();
    assert_eq!(post.likes, vec![UserId::from("2")]);

    assert!(state.api.like_post(&post_id, &user).await.unwrap());
    let post = state.api.get_post(&post_id).await.unwrap().unwrap();
    let likes: HashSet<_> = post.likes.iter().map(UserId::as_str).collect();
    assert_eq!(likes, HashSet::from(["1", "2"]));
    assert_eq!(post.likes.len(), 2);

    assert!(!state.api.like_post(&PostId::from("missing"), &user).await.unwrap());
}

#[tokio::test]
async fn test_rsvp_is_an_involution() {
    let state = seeded();
    let event_id = EventId::from("3");
    let user = UserId::from("1");
    let before = state.api.get_event(&event_id).await.unwrap().unwrap().attendees;

    assert!(state.api.rsvp_event(&event_id, &user).await.unwrap());
    let during = state.api.get_event(&event_id).await.unwrap().unwrap().attendees;
    assert_eq!(during.len(), before.len() + 1);
    assert!(during.contains(&user));

    assert!(state.api.rsvp_event(&event_id, &user).await.unwrap());
    let after = state.api.get_event(&event_id).await.unwrap().unwrap().attendees;
    assert_eq!(after, before);

    assert!(!state.api.rsvp_event(&EventId::from("99"), &user).await.unwrap());
}

#[tokio::test]
async fn test_join_group_appends_exactly_once() {
    let state = seeded();
    let group_id = GroupId::from("4");

    let group = state.api.get_group(&group_id).await.unwrap().unwrap();
    assert_eq!(group.member_count, 5);

    assert!(state.api.join_group(&group_id, &UserId::from("3")).await.unwrap());
    let group = state.api.get_group(&group_id).await.unwrap().unwrap();
    assert_eq!(group.members.len(), 6);
    assert_eq!(group.member_count, 6);
    assert!(group.is_member(&UserId::from("3")));

    // Existing member: nothing changes
    assert!(!state.api.join_group(&group_id, &UserId::from("1")).await.unwrap());
    let group = state.api.get_group(&group_id).await.unwrap().unwrap();
    assert_eq!(group.member_count, 6);
    assert!(group.is_consistent());

    assert!(!state.api.join_group(&GroupId::from("99"), &UserId::from("1")).await.unwrap());
}

#[tokio::test]
async fn test_join_group_five_to_six() {
    let state = custom(
        vec![],
        vec![],
        vec![json!({
            "id": "g",
            "name": "Reunion",
            "description": "Class of 2015",
            "memberCount": 5,
            "members": ["1", "2", "3", "4", "5"],
            "image": "https://example.com/group.png",
            "isPrivate": false
        })],
    );
    let group_id = GroupId::from("g");

    assert!(state.api.join_group(&group_id, &UserId::from("6")).await.unwrap());
    let group = state.api.get_group(&group_id).await.unwrap().unwrap();
    assert_eq!(group.members.len(), 6);
    assert_eq!(group.member_count, 6);
    assert!(group.is_member(&UserId::from("6")));
}

#[tokio::test]
async fn test_leave_group_mirrors_join() {
    let state = seeded();
    let group_id = GroupId::from("1");
    let user = UserId::from("2");

    assert!(state.api.leave_group(&group_id, &user).await.unwrap());
    assert!(!state.api.leave_group(&group_id, &user).await.unwrap());
    let group = state.api.get_group(&group_id).await.unwrap().unwrap();
    assert_eq!(group.member_count, 2);
    assert!(group.is_consistent());
    assert!(!group.is_member(&user));
}

#[tokio::test]
async fn test_toggle_membership_covers_every_set() {
    let state = seeded();
    let user = UserId::from("6");

    let sets = [
        MembershipSet::PostLikes(PostId::from("2")),
        MembershipSet::EventAttendees(EventId::from("2")),
        MembershipSet::GroupMembers(GroupId::from("3")),
        MembershipSet::Connections(UserId::from("4")),
    ];
    for set in &sets {
        assert_eq!(state.api.toggle_membership(set, &user).await.unwrap(), Some(true), "{}", set);
        assert_eq!(state.api.toggle_membership(set, &user).await.unwrap(), Some(false), "{}", set);
    }

    let missing = MembershipSet::GroupMembers(GroupId::from("99"));
    assert_eq!(state.api.toggle_membership(&missing, &user).await.unwrap(), None);

    let group = state.api.get_group(&GroupId::from("3")).await.unwrap().unwrap();
    assert_eq!(group.member_count, 3);
    assert!(group.is_consistent());
}

#[tokio::test]
async fn test_create_post_is_unique_and_first() {
    let state = seeded();
    let author = UserId::from("1");
    let existing: HashSet<String> = state
        .api
        .fetch_posts()
        .await
        .unwrap()
        .into_iter()
        .map(|post| post.id.into_string())
        .collect();

    let first = state.api.create_post("First!", &author).await.unwrap();
    let second = state.api.create_post("Second!", &author).await.unwrap();

    assert!(!existing.contains(first.id.as_str()));
    assert_ne!(first.id, second.id);
    assert!(first.likes.is_empty());
    assert!(first.comments.is_empty());

    let posts = state.api.fetch_posts().await.unwrap();
    assert_eq!(posts.len(), existing.len() + 2);
    assert!(posts.iter().take(2).any(|post| post.id == first.id));
    assert!(posts.iter().take(2).any(|post| post.id == second.id));
}

#[tokio::test]
async fn test_fetch_posts_sorted_newest_first() {
    let state = seeded();
    let posts = state.api.fetch_posts().await.unwrap();
    assert!(posts.windows(2).all(|pair| pair[0].timestamp >= pair[1].timestamp));
    assert_eq!(posts[0].id, PostId::from("1"));

    let by_author = state.api.fetch_posts_by_author(&UserId::from("6")).await.unwrap();
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].id, PostId::from("5"));
}

#[tokio::test]
async fn test_fetch_events_earliest_first() {
    let state = seeded();
    let events = state.api.fetch_events().await.unwrap();
    let order: Vec<&str> = events.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(order, vec!["2", "1", "3"]);
}

#[tokio::test]
async fn test_not_found_is_a_sentinel() {
    let state = seeded();
    assert!(state.api.get_user_profile(&UserId::from("99")).await.unwrap().is_none());
    assert!(state.api.get_post(&PostId::from("99")).await.unwrap().is_none());
    assert!(state.api.get_event(&EventId::from("99")).await.unwrap().is_none());
    assert!(state.api.get_group(&GroupId::from("99")).await.unwrap().is_none());
    assert!(state.api.fetch_connections(&UserId::from("99")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_connections_skip_dangling_ids() {
    let state = seeded();
    // Elena's list carries an id with no user behind it
    let connections = state.api.fetch_connections(&UserId::from("3")).await.unwrap().unwrap();
    assert_eq!(ids(&connections), vec!["1"]);
}
