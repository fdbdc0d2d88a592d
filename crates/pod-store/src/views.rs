//! Derived read models over a [`ContentStore`] snapshot.
//!
//! Nothing here is stored; every call recomputes from the current
//! collections. Sorting is always stable, so ties keep insertion order.

use serde::Serialize;

use pod_core::entities::{Episode, Podcast};
use pod_core::enums::EpisodeSort;

use crate::ContentStore;

/// Episodes whose title, topic, or parent podcast's host contains `query`
/// (case-insensitive), ordered by `sort`.
///
/// An empty query matches every episode.
#[must_use]
pub fn search_episodes<'a>(
    store: &'a ContentStore,
    query: &str,
    sort: EpisodeSort,
) -> Vec<&'a Episode> {
    let needle = query.to_lowercase();
    let mut hits: Vec<&Episode> = store
        .episodes()
        .filter(|episode| {
            episode.matches_lowercase(&needle)
                || store
                    .podcast(&episode.podcast_id)
                    .is_some_and(|p| p.host.to_lowercase().contains(&needle))
        })
        .collect();
    sort_episodes(&mut hits, sort);
    hits
}

/// Stable in-place sort.
pub fn sort_episodes(episodes: &mut [&Episode], sort: EpisodeSort) {
    match sort {
        EpisodeSort::Popular => episodes.sort_by(|a, b| b.play_count.cmp(&a.play_count)),
        EpisodeSort::Latest => episodes.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
    }
}

/// The `n` most played episodes, most played first.
#[must_use]
pub fn top_episodes<'a>(episodes: impl IntoIterator<Item = &'a Episode>, n: usize) -> Vec<&'a Episode> {
    let mut ranked: Vec<&Episode> = episodes.into_iter().collect();
    sort_episodes(&mut ranked, EpisodeSort::Popular);
    ranked.truncate(n);
    ranked
}

/// Sum of play counts.
#[must_use]
pub fn total_plays<'a>(episodes: impl IntoIterator<Item = &'a Episode>) -> u64 {
    episodes
        .into_iter()
        .fold(0u64, |sum, e| sum.saturating_add(e.play_count))
}

// ---------------------------------------------------------------------------
// Creator stats
// ---------------------------------------------------------------------------

/// Per-podcast numbers on a creator's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodcastStats<'a> {
    pub podcast: &'a Podcast,
    pub episode_count: usize,
    pub total_plays: u64,
}

/// What a podcaster's profile page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorStats<'a> {
    pub podcast_count: usize,
    pub episode_count: usize,
    pub total_plays: u64,
    pub podcasts: Vec<PodcastStats<'a>>,
}

impl<'a> CreatorStats<'a> {
    #[must_use]
    pub fn for_owner(store: &'a ContentStore, account_id: &str) -> Self {
        let podcasts: Vec<PodcastStats<'a>> = store
            .podcasts_by_owner(account_id)
            .into_iter()
            .map(|podcast| {
                let episodes = store.episodes_by_podcast(&podcast.id);
                PodcastStats {
                    podcast,
                    episode_count: episodes.len(),
                    total_plays: total_plays(episodes),
                }
            })
            .collect();

        Self {
            podcast_count: podcasts.len(),
            episode_count: podcasts.iter().map(|p| p.episode_count).sum(),
            total_plays: podcasts
                .iter()
                .fold(0u64, |sum, p| sum.saturating_add(p.total_plays)),
            podcasts,
        }
    }
}

// ---------------------------------------------------------------------------
// Platform stats
// ---------------------------------------------------------------------------

/// Platform-wide counters for the dashboard and admin views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlatformStats {
    pub podcasts: usize,
    pub episodes: usize,
    pub comments: usize,
    pub total_plays: u64,
}

impl PlatformStats {
    #[must_use]
    pub fn collect(store: &ContentStore) -> Self {
        Self {
            podcasts: store.podcasts().len(),
            episodes: store.episodes().len(),
            comments: store.comments().len(),
            total_plays: total_plays(store.episodes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{
        DEMO_EPISODE_AI_ID, DEMO_EPISODE_BLOCKCHAIN_ID, DEMO_EPISODE_DESIGN_ID,
    };
    use crate::test_support::{add_episode, add_podcast};
    use crate::updates::episode::EpisodeUpdateBuilder;
    use pod_core::ids::{DEMO_ADMIN_ID, DEMO_PODCASTER_ID};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ids<'a>(episodes: &[&'a Episode]) -> Vec<&'a str> {
        episodes.iter().map(|e| e.id.as_str()).collect()
    }

    #[rstest]
    #[case::title("blockchain", vec![DEMO_EPISODE_BLOCKCHAIN_ID])]
    #[case::topic_case_insensitive("dESIGN", vec![DEMO_EPISODE_DESIGN_ID])]
    #[case::host("alex", vec![DEMO_EPISODE_DESIGN_ID, DEMO_EPISODE_AI_ID, DEMO_EPISODE_BLOCKCHAIN_ID])]
    #[case::empty("", vec![DEMO_EPISODE_DESIGN_ID, DEMO_EPISODE_AI_ID, DEMO_EPISODE_BLOCKCHAIN_ID])]
    #[case::nothing("zzz", vec![])]
    fn search_popular(#[case] query: &str, #[case] expected: Vec<&str>) {
        let store = ContentStore::with_demo_data();
        let hits = search_episodes(&store, query, EpisodeSort::Popular);
        assert_eq!(ids(&hits), expected);
    }

    #[test]
    fn search_latest_orders_by_release_date() {
        let store = ContentStore::with_demo_data();
        let hits = search_episodes(&store, "", EpisodeSort::Latest);
        assert_eq!(
            ids(&hits),
            vec![DEMO_EPISODE_BLOCKCHAIN_ID, DEMO_EPISODE_DESIGN_ID, DEMO_EPISODE_AI_ID]
        );
    }

    #[test]
    fn search_skips_host_for_orphans() {
        let mut store = ContentStore::new();
        let podcast = add_podcast(&mut store, "owner");
        let attached = add_episode(&mut store, &podcast.id);
        add_episode(&mut store, "pod-orphan");

        let hits = search_episodes(&store, "test host", EpisodeSort::Popular);
        assert_eq!(ids(&hits), vec![attached.id.as_str()]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut store = ContentStore::new();
        let a = add_episode(&mut store, "p");
        let b = add_episode(&mut store, "p");
        let c = add_episode(&mut store, "p");
        store.increment_play_count(&b.id);

        let popular = search_episodes(&store, "", EpisodeSort::Popular);
        assert_eq!(ids(&popular), vec![b.id.as_str(), a.id.as_str(), c.id.as_str()]);

        // All share a release date.
        let latest = search_episodes(&store, "", EpisodeSort::Latest);
        assert_eq!(ids(&latest), vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn top_episodes_truncates() {
        let store = ContentStore::with_demo_data();
        let top = top_episodes(store.episodes(), 2);
        assert_eq!(ids(&top), vec![DEMO_EPISODE_DESIGN_ID, DEMO_EPISODE_AI_ID]);
        assert_eq!(top_episodes(store.episodes(), 10).len(), 3);
        assert!(top_episodes(store.episodes(), 0).is_empty());
    }

    #[test]
    fn total_plays_sums() {
        let store = ContentStore::with_demo_data();
        assert_eq!(total_plays(store.episodes()), 1250 + 890 + 2100);
        assert_eq!(total_plays(std::iter::empty()), 0);
    }

    #[test]
    fn total_plays_saturates() {
        let mut store = ContentStore::new();
        let a = add_episode(&mut store, "p");
        let b = add_episode(&mut store, "p");
        store.update_episode(&a.id, EpisodeUpdateBuilder::new().play_count(u64::MAX).build());
        store.update_episode(&b.id, EpisodeUpdateBuilder::new().play_count(5).build());
        assert_eq!(total_plays(store.episodes()), u64::MAX);
    }

    #[test]
    fn creator_stats_for_demo_podcaster() {
        let store = ContentStore::with_demo_data();
        let stats = CreatorStats::for_owner(&store, DEMO_PODCASTER_ID);

        assert_eq!(stats.podcast_count, 2);
        assert_eq!(stats.episode_count, 3);
        assert_eq!(stats.total_plays, 4240);
        let per_podcast: Vec<(usize, u64)> = stats
            .podcasts
            .iter()
            .map(|p| (p.episode_count, p.total_plays))
            .collect();
        assert_eq!(per_podcast, vec![(2, 2140), (1, 2100)]);
    }

    #[test]
    fn creator_stats_for_non_creator_is_empty() {
        let store = ContentStore::with_demo_data();
        let stats = CreatorStats::for_owner(&store, DEMO_ADMIN_ID);
        assert_eq!(stats.podcast_count, 0);
        assert_eq!(stats.total_plays, 0);
        assert!(stats.podcasts.is_empty());
    }

    #[test]
    fn platform_stats_counts_everything() {
        let store = ContentStore::with_demo_data();
        assert_eq!(
            PlatformStats::collect(&store),
            PlatformStats {
                podcasts: 2,
                episodes: 3,
                comments: 1,
                total_plays: 4240,
            }
        );
    }
}
