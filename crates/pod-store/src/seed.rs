//! Demo content loaded at startup when seeding is enabled.
//!
//! Seeded records use fixed IDs so the demo comment and podcasts can point
//! at the demo accounts from `pod_core::ids`.

use chrono::{DateTime, NaiveDate, Utc};

use pod_core::entities::{Comment, Episode, Podcast};
use pod_core::ids::{DEMO_LISTENER_ID, DEMO_PODCASTER_ID};

pub const DEMO_PODCAST_TECH_ID: &str = "pod-00000001";
pub const DEMO_PODCAST_CREATIVE_ID: &str = "pod-00000002";
pub const DEMO_EPISODE_AI_ID: &str = "epi-00000001";
pub const DEMO_EPISODE_BLOCKCHAIN_ID: &str = "epi-00000002";
pub const DEMO_EPISODE_DESIGN_ID: &str = "epi-00000003";
pub const DEMO_COMMENT_ID: &str = "cmt-00000001";

/// Cover used when a podcast is created without one.
pub const DEFAULT_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1590602847861-f357a9332bbc?w=400";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn midnight_utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(0, 0, 0)
        .map_or(DateTime::<Utc>::UNIX_EPOCH, |dt| dt.and_utc())
}

#[must_use]
pub fn demo_podcasts() -> Vec<Podcast> {
    vec![
        Podcast {
            id: DEMO_PODCAST_TECH_ID.into(),
            title: "Tech Talk Daily".into(),
            description: "Your daily dose of technology news and insights".into(),
            host: "Alex Podcaster".into(),
            cover_image: "https://images.unsplash.com/photo-1478737270239-2f02b77fc618?w=400"
                .into(),
            created_by: DEMO_PODCASTER_ID.into(),
            created_at: midnight_utc(2024, 1, 1),
        },
        Podcast {
            id: DEMO_PODCAST_CREATIVE_ID.into(),
            title: "Creative Minds".into(),
            description: "Exploring creativity in art, design, and innovation".into(),
            host: "Alex Podcaster".into(),
            cover_image: DEFAULT_COVER_IMAGE.into(),
            created_by: DEMO_PODCASTER_ID.into(),
            created_at: midnight_utc(2024, 2, 1),
        },
    ]
}

#[must_use]
pub fn demo_episodes() -> Vec<Episode> {
    vec![
        Episode {
            id: DEMO_EPISODE_AI_ID.into(),
            podcast_id: DEMO_PODCAST_TECH_ID.into(),
            title: "AI Revolution in 2024".into(),
            description: "Exploring the latest advances in artificial intelligence".into(),
            release_date: date(2024, 3, 15),
            duration: 45,
            audio_url: "https://mock-s3.com/episode1.mp3".into(),
            play_count: 1250,
            topic: Some("AI".into()),
        },
        Episode {
            id: DEMO_EPISODE_BLOCKCHAIN_ID.into(),
            podcast_id: DEMO_PODCAST_TECH_ID.into(),
            title: "Blockchain Beyond Crypto".into(),
            description: "Real-world applications of blockchain technology".into(),
            release_date: date(2024, 3, 20),
            duration: 38,
            audio_url: "https://mock-s3.com/episode2.mp3".into(),
            play_count: 890,
            topic: Some("Blockchain".into()),
        },
        Episode {
            id: DEMO_EPISODE_DESIGN_ID.into(),
            podcast_id: DEMO_PODCAST_CREATIVE_ID.into(),
            title: "Design Thinking Workshop".into(),
            description: "Learn the principles of design thinking".into(),
            release_date: date(2024, 3, 18),
            duration: 52,
            audio_url: "https://mock-s3.com/episode3.mp3".into(),
            play_count: 2100,
            topic: Some("Design".into()),
        },
    ]
}

#[must_use]
pub fn demo_comments() -> Vec<Comment> {
    vec![Comment {
        id: DEMO_COMMENT_ID.into(),
        episode_id: DEMO_EPISODE_AI_ID.into(),
        user_id: DEMO_LISTENER_ID.into(),
        username: "Sam Listener".into(),
        content: "Great episode! Very insightful discussion on AI ethics.".into(),
        created_at: midnight_utc(2024, 3, 16),
    }]
}
