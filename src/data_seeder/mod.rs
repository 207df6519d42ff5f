// Seed records - the hand-authored data set the mock backend starts from.
// Records are untyped on purpose: they pass through the entity schemas when the store loads.

use serde_json::{json, Value};

pub fn user_records() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "name": "Priya Raman",
            "email": "priya.raman@email.com",
            "profilePicture": "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop&crop=face",
            "headline": "Backend Engineer at Meta",
            "bio": "Building scalable services and mentoring new engineers. Computer Science graduate from Stanford University.",
            "college": "Stanford University",
            "branch": "Computer Science",
            "graduationYear": 2021,
            "currentCompany": "Meta",
            "location": "San Francisco, CA",
            "skills": ["Rust", "TypeScript", "Distributed Systems", "System Design"],
            "connections": ["2", "3", "5"]
        }),
        json!({
            "id": "2",
            "name": "Marcus Lee",
            "email": "marcus.lee@email.com",
            "profilePicture": "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
            "headline": "Product Manager at Google",
            "bio": "Leading product strategy for cloud infrastructure. Electrical Engineering alumnus.",
            "college": "Stanford University",
            "branch": "Electrical Engineering",
            "graduationYear": 2017,
            "currentCompany": "Google",
            "location": "Mountain View, CA",
            "skills": ["Product Strategy", "Data Analysis", "Leadership", "Machine Learning"],
            "connections": ["1", "4", "6"]
        }),
        json!({
            "id": "3",
            "name": "Elena Duarte",
            "email": "elena.duarte@email.com",
            "profilePicture": "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop&crop=face",
            "headline": "Marketing Director at Spotify",
            "bio": "Driving growth through data-informed storytelling. Business Administration graduate.",
            "college": "Stanford University",
            "branch": "Business Administration",
            "graduationYear": 2019,
            "currentCompany": "Spotify",
            "location": "New York, NY",
            "skills": ["Digital Marketing", "Brand Strategy", "Analytics", "Growth"],
            "connections": ["1", "9"]
        }),
        json!({
            "id": "4",
            "name": "Daniel Park",
            "email": "daniel.park@email.com",
            "profilePicture": "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
            "headline": "Data Scientist at Netflix",
            "bio": "Working on recommendation systems and experimentation. Statistics major.",
            "college": "Stanford University",
            "branch": "Statistics",
            "graduationYear": 2020,
            "currentCompany": "Netflix",
            "location": "Los Gatos, CA",
            "skills": ["Python", "Machine Learning", "Statistics", "Data Visualization"],
            "connections": ["2"]
        }),
        json!({
            "id": "5",
            "name": "Sofia Novak",
            "email": "sofia.novak@email.com",
            "profilePicture": "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&h=400&fit=crop&crop=face",
            "headline": "UX Designer at Airbnb",
            "bio": "Designing calm, human-centered products. Design graduate.",
            "college": "Stanford University",
            "branch": "Design",
            "graduationYear": 2021,
            "currentCompany": "Airbnb",
            "location": "San Francisco, CA",
            "skills": ["UX Design", "Prototyping", "User Research", "Figma"],
            "connections": ["1", "6"]
        }),
        json!({
            "id": "6",
            "name": "Omar Haddad",
            "email": "omar.haddad@email.com",
            "profilePicture": "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=400&h=400&fit=crop&crop=face",
            "headline": "Startup Founder & CEO",
            "bio": "Building grid-scale storage for renewable energy. Mechanical Engineering background.",
            "college": "Stanford University",
            "branch": "Mechanical Engineering",
            "graduationYear": 2016,
            "currentCompany": "GreenGrid Energy",
            "location": "Palo Alto, CA",
            "skills": ["Entrepreneurship", "Clean Energy", "Leadership", "Fundraising"],
            "connections": ["2", "5"]
        }),
    ]
}

pub fn post_records() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "authorId": "2",
            "content": "Our team just shipped a new cloud networking feature. Huge thanks to everyone who stayed late for the launch. Always happy to chat with alumni working in infrastructure.",
            "timestamp": "2024-11-10T14:30:00Z",
            "likes": ["1", "3", "5"],
            "comments": [
                {
                    "id": "c1",
                    "authorId": "1",
                    "content": "Congratulations Marcus! Would love to hear how you rolled it out.",
                    "timestamp": "2024-11-10T15:00:00Z"
                }
            ]
        }),
        json!({
            "id": "2",
            "authorId": "4",
            "content": "Wrote up what we learned from a year of recommendation experiments. Happy to share the notes with anyone in data science.",
            "timestamp": "2024-11-08T08:10:00Z",
            "likes": ["2"],
            "comments": []
        }),
        json!({
            "id": "3",
            "authorId": "3",
            "content": "Just wrapped a campaign that lifted engagement by 40%. Any fellow alumni in marketing want to compare notes?",
            "timestamp": "2024-11-10T12:15:00Z",
            "likes": ["1", "2", "4"],
            "comments": []
        }),
        json!({
            "id": "4",
            "authorId": "5",
            "content": "Deep in a research sprint on trip planning flows. Would love to connect with other designers from our class.",
            "timestamp": "2024-11-10T09:45:00Z",
            "likes": ["1", "6"],
            "comments": [
                {
                    "id": "c2",
                    "authorId": "1",
                    "content": "Your prototypes are always inspiring, Sofia!",
                    "timestamp": "2024-11-10T10:00:00Z"
                }
            ]
        }),
        json!({
            "id": "5",
            "authorId": "6",
            "content": "GreenGrid Energy just closed our Series A! Grateful for the founders in this network who answered every late-night question.",
            "timestamp": "2024-11-09T16:20:00Z",
            "likes": ["1", "2", "3", "4", "5"],
            "comments": [
                {
                    "id": "c3",
                    "authorId": "2",
                    "content": "Congratulations Omar! Huge news.",
                    "timestamp": "2024-11-09T17:00:00Z"
                },
                {
                    "id": "c4",
                    "authorId": "1",
                    "content": "So proud of what you have built!",
                    "timestamp": "2024-11-09T18:30:00Z"
                }
            ]
        }),
    ]
}

pub fn event_records() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "title": "Women in Tech Mentorship Launch",
            "description": "Kick-off for a mentorship program pairing recent graduates with experienced engineers and product leaders.",
            "date": "2024-12-15",
            "time": "17:30",
            "location": "Alumni Center",
            "isOnline": false,
            "organizer": "Women in Tech Chapter",
            "attendees": ["1", "3", "5"],
            "image": "https://images.unsplash.com/photo-1515187029135-18ee286d815b?w=800&h=400&fit=crop"
        }),
        json!({
            "id": "2",
            "title": "Alumni Tech Mixer",
            "description": "An evening of networking for alumni working in technology. Light refreshments provided.",
            "date": "2024-11-25",
            "time": "18:00",
            "location": "Pier 27, San Francisco",
            "isOnline": false,
            "organizer": "Alumni Association",
            "attendees": ["1", "2", "4", "5"],
            "image": "https://images.unsplash.com/photo-1511578314322-379afb476865?w=800&h=400&fit=crop"
        }),
        json!({
            "id": "3",
            "title": "Virtual Panel: From Campus to Startup",
            "description": "Founders from the network talk through their first two years. Q&A included.",
            "date": "2025-01-10",
            "time": "19:00",
            "location": "Online",
            "isOnline": true,
            "organizer": "Entrepreneurship Club",
            "attendees": ["3", "6"],
            "image": "https://images.unsplash.com/photo-1559223607-a43c990c692c?w=800&h=400&fit=crop"
        }),
    ]
}

pub fn group_records() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "name": "Computer Science Alumni",
            "description": "Opportunities, tech trends and old lab friends.",
            "memberCount": 3,
            "members": ["1", "2", "4"],
            "image": "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=800&h=400&fit=crop",
            "isPrivate": false
        }),
        json!({
            "id": "2",
            "name": "Founders Network",
            "description": "For alumni building companies or looking for co-founders.",
            "memberCount": 2,
            "members": ["6", "3"],
            "image": "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=800&h=400&fit=crop",
            "isPrivate": false
        }),
        json!({
            "id": "3",
            "name": "Women in Leadership",
            "description": "Mentorship and support across every industry.",
            "memberCount": 3,
            "members": ["1", "3", "5"],
            "image": "https://images.unsplash.com/photo-1573164713714-d95e436ab8d6?w=800&h=400&fit=crop",
            "isPrivate": false
        }),
        json!({
            "id": "4",
            "name": "Bay Area Chapter",
            "description": "Local meetups for alumni around San Francisco.",
            "memberCount": 5,
            "members": ["1", "2", "4", "5", "6"],
            "image": "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=400&fit=crop",
            "isPrivate": false
        }),
        json!({
            "id": "5",
            "name": "Design Collective",
            "description": "Alumni working in design, UX and the creative fields.",
            "memberCount": 1,
            "members": ["5"],
            "image": "https://images.unsplash.com/photo-1581291518633-83b4ebd1d83e?w=800&h=400&fit=crop",
            "isPrivate": true
        }),
    ]
}
