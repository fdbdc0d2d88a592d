use pod_auth::{
    FileKeyValueStore, IdentityRegistry, KeyValueStore, MemoryKeyValueStore, NewAccount,
    SessionStore,
};
use pod_config::PodConfig;
use pod_core::entities::{AccountProfile, Comment, Episode, Podcast};
use pod_core::enums::{EpisodeSort, Role};
use pod_store::updates::episode::EpisodeUpdate;
use pod_store::updates::podcast::PodcastUpdate;
use pod_store::views::{self, CreatorStats, PlatformStats};
use pod_store::{CascadeReport, ContentStore, NewComment, NewEpisode, NewPodcast};

use crate::error::AppError;

/// Everything one running instance owns: accounts, the current session, and
/// content. Constructed once and passed to whatever drives the UI.
#[derive(Debug)]
pub struct AppContext {
    pub config: PodConfig,
    pub registry: IdentityRegistry,
    pub session: SessionStore,
    pub content: ContentStore,
}

impl AppContext {
    /// Build a context over `backend` and restore any persisted session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` if the session backend cannot be read.
    pub fn new(config: PodConfig, backend: impl KeyValueStore + 'static) -> Result<Self, AppError> {
        let (registry, content) = if config.store.seed_demo_data {
            (
                IdentityRegistry::with_demo_accounts(),
                ContentStore::with_demo_data(),
            )
        } else {
            (IdentityRegistry::new(), ContentStore::new())
        };

        let mut session = SessionStore::new(backend);
        if config.session.revalidate_on_restore {
            session.restore_verified(&registry)?;
        } else {
            session.restore()?;
        }

        Ok(Self {
            config,
            registry,
            session,
            content,
        })
    }

    /// Build a context whose session is persisted under the configured
    /// directory. Falls back to a process-local session if no directory can
    /// be resolved.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn open(config: PodConfig) -> Result<Self, AppError> {
        match config.session.resolved_dir() {
            Some(dir) => Self::new(config, FileKeyValueStore::new(dir)),
            None => {
                tracing::warn!("no data directory available; session will not persist");
                Self::new(config, MemoryKeyValueStore::new())
            }
        }
    }

    /// Load config from `.env`, TOML files and `PODHUB_*` variables, then
    /// [`Self::open`] with it.
    ///
    /// # Errors
    ///
    /// `AppError::Config` if config cannot be loaded, otherwise as
    /// [`Self::new`].
    pub fn load() -> Result<Self, AppError> {
        let config = PodConfig::load_with_dotenv()?;
        Self::open(config)
    }

    /// A context with a process-local session backend.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn in_memory(config: PodConfig) -> Result<Self, AppError> {
        Self::new(config, MemoryKeyValueStore::new())
    }

    // -- Auth flows --

    /// Sign in. `false` when no account matches; the session is unchanged.
    pub fn login(&mut self, email: &str, secret: &str, role: Option<Role>) -> bool {
        let Some(profile) = self.registry.login(email, secret, role) else {
            return false;
        };
        self.adopt(profile);
        true
    }

    /// Register and sign in. `false` on blank fields or a taken email.
    pub fn register(&mut self, display_name: &str, email: &str, secret: &str, role: Role) -> bool {
        match self.try_register(NewAccount::new(display_name, email, secret, role)) {
            Ok(_) => true,
            Err(error) => {
                tracing::info!(%error, "registration rejected");
                false
            }
        }
    }

    /// Register and sign in, reporting why registration failed.
    ///
    /// # Errors
    ///
    /// `AppError::Auth` wrapping `Validation` or `EmailTaken`.
    pub fn try_register(&mut self, new: NewAccount) -> Result<AccountProfile, AppError> {
        let profile = self.registry.register(new)?;
        self.adopt(profile.clone());
        Ok(profile)
    }

    /// Sign out and drop the persisted session.
    pub fn logout(&mut self) {
        if let Err(error) = self.session.log_out() {
            tracing::warn!(%error, "failed to clear persisted session");
        }
    }

    fn adopt(&mut self, profile: AccountProfile) {
        if let Err(error) = self.session.log_in(profile) {
            tracing::warn!(%error, "session not persisted; a restart will come up signed out");
        }
    }

    /// The signed-in account.
    ///
    /// # Errors
    ///
    /// `AppError::NotAuthenticated` when signed out.
    pub fn current_account(&self) -> Result<&AccountProfile, AppError> {
        self.session.current().ok_or(AppError::NotAuthenticated)
    }

    fn owned_podcast(&self, podcast_id: &str) -> Result<&Podcast, AppError> {
        let account = self.current_account()?;
        let podcast = self
            .content
            .podcast(podcast_id)
            .ok_or_else(|| AppError::not_found("podcast", podcast_id))?;
        if !podcast.is_owned_by(&account.id) {
            return Err(AppError::Forbidden(format!(
                "podcast {podcast_id} belongs to another account"
            )));
        }
        Ok(podcast)
    }

    fn owned_episode(&self, episode_id: &str) -> Result<&Episode, AppError> {
        let episode = self
            .content
            .episode(episode_id)
            .ok_or_else(|| AppError::not_found("episode", episode_id))?;
        self.owned_podcast(&episode.podcast_id)?;
        Ok(episode)
    }

    fn authored_comment(&self, comment_id: &str) -> Result<&Comment, AppError> {
        let account = self.current_account()?;
        let comment = self
            .content
            .comment(comment_id)
            .ok_or_else(|| AppError::not_found("comment", comment_id))?;
        if !comment.is_authored_by(&account.id) {
            return Err(AppError::Forbidden(format!(
                "comment {comment_id} was written by another account"
            )));
        }
        Ok(comment)
    }

    // -- Podcasts --

    /// Create a podcast owned by the signed-in podcaster. A blank host
    /// defaults to the account's display name.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated`, `Forbidden` for non-podcasters, or a store
    /// validation error.
    pub fn create_podcast(&mut self, mut new: NewPodcast) -> Result<Podcast, AppError> {
        let account = self.current_account()?;
        if !account.role.can_create_podcasts() {
            return Err(AppError::Forbidden(format!(
                "{} accounts cannot create podcasts",
                account.role
            )));
        }
        new.created_by.clone_from(&account.id);
        if new.host.trim().is_empty() {
            new.host.clone_from(&account.display_name);
        }
        Ok(self.content.add_podcast(new)?)
    }

    /// # Errors
    ///
    /// `NotAuthenticated`, `NotFound`, or `Forbidden` unless the signed-in
    /// account owns the podcast.
    pub fn edit_podcast(&mut self, id: &str, update: PodcastUpdate) -> Result<Podcast, AppError> {
        self.owned_podcast(id)?;
        self.content
            .update_podcast(id, update)
            .ok_or_else(|| AppError::not_found("podcast", id))
    }

    /// # Errors
    ///
    /// Same as [`Self::edit_podcast`].
    pub fn remove_podcast(&mut self, id: &str) -> Result<CascadeReport, AppError> {
        self.owned_podcast(id)?;
        Ok(self.content.delete_podcast(id))
    }

    /// Podcasts owned by the signed-in account.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` when signed out.
    pub fn my_podcasts(&self) -> Result<Vec<&Podcast>, AppError> {
        let account = self.current_account()?;
        Ok(self.content.podcasts_by_owner(&account.id))
    }

    // -- Episodes --

    /// Add an episode to a podcast the signed-in account owns.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated`, `NotFound` for an unknown podcast, `Forbidden`, or
    /// a store validation error.
    pub fn add_episode_to(&mut self, new: NewEpisode) -> Result<Episode, AppError> {
        self.owned_podcast(&new.podcast_id)?;
        Ok(self.content.add_episode(new)?)
    }

    /// # Errors
    ///
    /// `NotAuthenticated`, `NotFound`, or `Forbidden` unless the signed-in
    /// account owns the parent podcast.
    pub fn edit_episode(&mut self, id: &str, update: EpisodeUpdate) -> Result<Episode, AppError> {
        self.owned_episode(id)?;
        self.content
            .update_episode(id, update)
            .ok_or_else(|| AppError::not_found("episode", id))
    }

    /// # Errors
    ///
    /// Same as [`Self::edit_episode`].
    pub fn remove_episode(&mut self, id: &str) -> Result<CascadeReport, AppError> {
        self.owned_episode(id)?;
        Ok(self.content.delete_episode(id))
    }

    /// Count a play. Open to anyone.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown episode.
    pub fn play_episode(&mut self, id: &str) -> Result<u64, AppError> {
        self.content
            .increment_play_count(id)
            .ok_or_else(|| AppError::not_found("episode", id))
    }

    /// Episode browser: search by title, topic or host, then sort.
    #[must_use]
    pub fn browse_episodes(&self, query: &str, sort: EpisodeSort) -> Vec<&Episode> {
        views::search_episodes(&self.content, query, sort)
    }

    // -- Comments --

    /// Comment on an episode as the signed-in account.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated`, `NotFound` for an unknown episode, or a store
    /// validation error for a blank body.
    pub fn post_comment(&mut self, episode_id: &str, content: &str) -> Result<Comment, AppError> {
        let account = self.current_account()?;
        if self.content.episode(episode_id).is_none() {
            return Err(AppError::not_found("episode", episode_id));
        }
        let new = NewComment {
            episode_id: episode_id.to_string(),
            user_id: account.id.clone(),
            username: account.display_name.clone(),
            content: content.to_string(),
        };
        Ok(self.content.add_comment(new)?)
    }

    /// # Errors
    ///
    /// `NotAuthenticated`, `NotFound`, `Forbidden` unless the signed-in
    /// account wrote the comment, or a validation error for a blank body.
    pub fn edit_comment(&mut self, id: &str, content: &str) -> Result<Comment, AppError> {
        self.authored_comment(id)?;
        self.content
            .update_comment(id, content)?
            .ok_or_else(|| AppError::not_found("comment", id))
    }

    /// # Errors
    ///
    /// `NotAuthenticated`, `NotFound`, or `Forbidden` unless the signed-in
    /// account wrote the comment.
    pub fn remove_comment(&mut self, id: &str) -> Result<Comment, AppError> {
        self.authored_comment(id)?;
        self.content
            .delete_comment(id)
            .ok_or_else(|| AppError::not_found("comment", id))
    }

    // -- Analytics --

    /// Most played episodes for the dashboard.
    #[must_use]
    pub fn dashboard_top_episodes(&self) -> Vec<&Episode> {
        views::top_episodes(self.content.episodes(), self.config.general.top_episodes_limit)
    }

    /// Most played episodes for the admin view.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated`, or `Forbidden` for non-admins.
    pub fn admin_top_episodes(&self) -> Result<Vec<&Episode>, AppError> {
        let account = self.current_account()?;
        if account.role != Role::Admin {
            return Err(AppError::Forbidden("analytics are admin-only".into()));
        }
        Ok(views::top_episodes(
            self.content.episodes(),
            self.config.general.admin_top_episodes_limit,
        ))
    }

    #[must_use]
    pub fn platform_stats(&self) -> PlatformStats {
        PlatformStats::collect(&self.content)
    }

    /// Profile numbers for the signed-in account.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` when signed out.
    pub fn my_stats(&self) -> Result<CreatorStats<'_>, AppError> {
        let account = self.current_account()?;
        Ok(CreatorStats::for_owner(&self.content, &account.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pod_auth::AuthError;
    use pod_core::ids::{DEMO_LISTENER_ID, DEMO_PODCASTER_ID};
    use pod_store::StoreError;
    use pod_store::seed::{
        DEMO_COMMENT_ID, DEMO_EPISODE_AI_ID, DEMO_EPISODE_BLOCKCHAIN_ID, DEMO_PODCAST_TECH_ID,
    };
    use pod_store::updates::podcast::PodcastUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn ctx() -> AppContext {
        AppContext::in_memory(PodConfig::default()).unwrap()
    }

    fn signed_in(email: &str) -> AppContext {
        let mut ctx = ctx();
        assert!(ctx.login(email, "demo123", None));
        ctx
    }

    fn new_episode(podcast_id: &str) -> NewEpisode {
        NewEpisode {
            podcast_id: podcast_id.into(),
            title: "Pilot".into(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            duration: 20,
            audio_url: "https://mock-s3.com/pilot.mp3".into(),
            topic: None,
        }
    }

    #[test]
    fn seeded_context_starts_signed_out() {
        let ctx = ctx();
        assert!(!ctx.session.is_authenticated());
        assert_eq!(ctx.registry.len(), 3);
        assert_eq!(ctx.platform_stats().podcasts, 2);
    }

    #[test]
    fn unseeded_context_is_empty() {
        let mut config = PodConfig::default();
        config.store.seed_demo_data = false;
        let ctx = AppContext::in_memory(config).unwrap();
        assert!(ctx.registry.is_empty());
        assert_eq!(ctx.platform_stats(), PlatformStats::default());
    }

    #[test]
    fn login_with_role_filter() {
        let mut ctx = ctx();
        assert!(!ctx.login("listener@demo.com", "demo123", Some(Role::Admin)));
        assert!(!ctx.session.is_authenticated());
        assert!(ctx.login("listener@demo.com", "demo123", Some(Role::Listener)));
        assert_eq!(ctx.current_account().unwrap().id, DEMO_LISTENER_ID);
    }

    #[test]
    fn register_signs_in_and_rejects_duplicates() {
        let mut ctx = ctx();
        assert!(ctx.register("Jo", "jo@example.com", "pw", Role::Podcaster));
        assert_eq!(ctx.current_account().unwrap().email, "jo@example.com");

        ctx.logout();
        let before = ctx.registry.len();
        assert!(!ctx.register("Jo again", "jo@example.com", "pw2", Role::Listener));
        assert_eq!(ctx.registry.len(), before);
        assert!(!ctx.session.is_authenticated());
    }

    #[test]
    fn try_register_reports_reason() {
        let mut ctx = ctx();
        let err = ctx
            .try_register(NewAccount::new("X", "admin@demo.com", "pw", Role::Admin))
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::EmailTaken(_))));
    }

    #[test]
    fn listener_cannot_create_podcast() {
        let mut ctx = signed_in("listener@demo.com");
        let err = ctx
            .create_podcast(NewPodcast {
                title: "T".into(),
                description: "D".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn signed_out_cannot_create_podcast() {
        let mut ctx = ctx();
        let err = ctx.create_podcast(NewPodcast::default()).unwrap_err();
        assert!(matches!(err, AppError::NotAuthenticated));
    }

    #[test]
    fn podcaster_creates_owned_podcast() {
        let mut ctx = signed_in("podcaster@demo.com");
        let podcast = ctx
            .create_podcast(NewPodcast {
                title: "New Show".into(),
                description: "About things".into(),
                created_by: "acc-spoofed".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(podcast.created_by, DEMO_PODCASTER_ID);
        assert_eq!(podcast.host, "Alex Podcaster");
        assert_eq!(ctx.my_podcasts().unwrap().len(), 3);
    }

    #[test]
    fn create_podcast_surfaces_validation() {
        let mut ctx = signed_in("podcaster@demo.com");
        let err = ctx
            .create_podcast(NewPodcast {
                title: "Only a title".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Validation(_))));
        assert_eq!(ctx.platform_stats().podcasts, 2);
    }

    #[test]
    fn only_owner_edits_podcast() {
        let mut ctx = ctx();
        assert!(ctx.register("Other", "other@example.com", "pw", Role::Podcaster));
        let update = PodcastUpdateBuilder::new().title("Hijacked").build();
        let err = ctx
            .edit_podcast(DEMO_PODCAST_TECH_ID, update.clone())
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        ctx.logout();
        assert!(ctx.login("podcaster@demo.com", "demo123", None));
        let edited = ctx.edit_podcast(DEMO_PODCAST_TECH_ID, update).unwrap();
        assert_eq!(edited.title, "Hijacked");
    }

    #[test]
    fn owner_removes_podcast_with_cascade() {
        let mut ctx = signed_in("podcaster@demo.com");
        let report = ctx.remove_podcast(DEMO_PODCAST_TECH_ID).unwrap();
        assert_eq!(report.episode_ids.len(), 2);
        assert_eq!(report.comment_ids, vec![DEMO_COMMENT_ID.to_string()]);
        assert_eq!(ctx.platform_stats().episodes, 1);
    }

    #[test]
    fn add_episode_requires_known_owned_podcast() {
        let mut ctx = signed_in("podcaster@demo.com");
        let err = ctx.add_episode_to(new_episode("pod-unknown")).unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "podcast", .. }));

        let episode = ctx.add_episode_to(new_episode(DEMO_PODCAST_TECH_ID)).unwrap();
        assert_eq!(episode.play_count, 0);
        assert_eq!(ctx.play_episode(&episode.id).unwrap(), 1);
    }

    #[test]
    fn listener_cannot_remove_episode() {
        let mut ctx = signed_in("listener@demo.com");
        let err = ctx.remove_episode(DEMO_EPISODE_AI_ID).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert!(ctx.content.episode(DEMO_EPISODE_AI_ID).is_some());
    }

    #[test]
    fn play_unknown_episode_is_not_found() {
        let mut ctx = ctx();
        assert!(matches!(
            ctx.play_episode("epi-missing"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn comment_lifecycle_is_author_only() {
        let mut ctx = signed_in("admin@demo.com");
        let comment = ctx.post_comment(DEMO_EPISODE_AI_ID, "Admin here").unwrap();
        assert_eq!(comment.username, "Admin User");

        let err = ctx.edit_comment(DEMO_COMMENT_ID, "rewrite").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let edited = ctx.edit_comment(&comment.id, "Admin again").unwrap();
        assert_eq!(edited.content, "Admin again");
        assert_eq!(edited.created_at, comment.created_at);

        ctx.remove_comment(&comment.id).unwrap();
        assert_eq!(ctx.content.comments_by_episode(DEMO_EPISODE_AI_ID).len(), 1);
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut ctx = signed_in("listener@demo.com");
        let err = ctx.post_comment(DEMO_EPISODE_AI_ID, "  ").unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Validation(_))));
    }

    #[test]
    fn comment_on_unknown_episode_is_not_found() {
        let mut ctx = signed_in("listener@demo.com");
        let err = ctx.post_comment("epi-missing", "hello").unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "episode", .. }));
    }

    #[test]
    fn analytics_limits_follow_config() {
        let mut config = PodConfig::default();
        config.general.top_episodes_limit = 2;
        let mut ctx = AppContext::in_memory(config).unwrap();
        assert_eq!(ctx.dashboard_top_episodes().len(), 2);

        assert!(matches!(ctx.admin_top_episodes(), Err(AppError::NotAuthenticated)));
        assert!(ctx.login("podcaster@demo.com", "demo123", None));
        assert!(matches!(ctx.admin_top_episodes(), Err(AppError::Forbidden(_))));
        ctx.logout();
        assert!(ctx.login("admin@demo.com", "demo123", Some(Role::Admin)));
        assert_eq!(ctx.admin_top_episodes().unwrap().len(), 3);
    }

    #[test]
    fn my_stats_for_podcaster() {
        let ctx = signed_in("podcaster@demo.com");
        let stats = ctx.my_stats().unwrap();
        assert_eq!(stats.podcast_count, 2);
        assert_eq!(stats.total_plays, 4240);
    }

    #[test]
    fn browse_delegates_to_search() {
        let ctx = ctx();
        let hits: Vec<&str> = ctx
            .browse_episodes("ai", EpisodeSort::Latest)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        // "Blockchain" also contains "ai".
        assert_eq!(hits, vec![DEMO_EPISODE_BLOCKCHAIN_ID, DEMO_EPISODE_AI_ID]);
    }
}
