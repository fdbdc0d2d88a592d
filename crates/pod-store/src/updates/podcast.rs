//! Podcast update builder.

use serde::Serialize;

use pod_core::entities::Podcast;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodcastUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl PodcastUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.host.is_none()
            && self.cover_image.is_none()
    }

    pub(crate) fn apply(self, podcast: &mut Podcast) {
        if let Some(title) = self.title {
            podcast.title = title;
        }
        if let Some(description) = self.description {
            podcast.description = description;
        }
        if let Some(host) = self.host {
            podcast.host = host;
        }
        if let Some(cover_image) = self.cover_image {
            podcast.cover_image = cover_image;
        }
    }
}

#[derive(Debug, Default)]
pub struct PodcastUpdateBuilder(PodcastUpdate);

impl PodcastUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    #[must_use]
    pub fn description(mut self, val: impl Into<String>) -> Self {
        self.0.description = Some(val.into());
        self
    }

    #[must_use]
    pub fn host(mut self, val: impl Into<String>) -> Self {
        self.0.host = Some(val.into());
        self
    }

    #[must_use]
    pub fn cover_image(mut self, val: impl Into<String>) -> Self {
        self.0.cover_image = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> PodcastUpdate {
        self.0
    }
}
