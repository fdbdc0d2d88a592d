//! Shared fixtures for content store tests.

use chrono::NaiveDate;

use pod_core::entities::{Comment, Episode, Podcast};

use crate::{ContentStore, NewComment, NewEpisode, NewPodcast};

pub fn add_podcast(store: &mut ContentStore, owner: &str) -> Podcast {
    store
        .add_podcast(NewPodcast {
            title: "Test Show".into(),
            description: "A show for tests".into(),
            host: "Test Host".into(),
            cover_image: String::new(),
            created_by: owner.into(),
        })
        .unwrap()
}

pub fn new_episode(podcast_id: &str) -> NewEpisode {
    NewEpisode {
        podcast_id: podcast_id.into(),
        title: "Test Episode".into(),
        description: "An episode for tests".into(),
        release_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        duration: 30,
        audio_url: "https://mock-s3.com/test.mp3".into(),
        topic: Some("Testing".into()),
    }
}

pub fn add_episode(store: &mut ContentStore, podcast_id: &str) -> Episode {
    store.add_episode(new_episode(podcast_id)).unwrap()
}

pub fn add_comment(store: &mut ContentStore, episode_id: &str) -> Comment {
    store
        .add_comment(NewComment {
            episode_id: episode_id.into(),
            user_id: "acc-tester".into(),
            username: "Tester".into(),
            content: "First!".into(),
        })
        .unwrap()
}
