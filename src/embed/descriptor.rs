//! Embed descriptor types
//!
//! A descriptor is the tagged result of classifying a clip URL. It is derived
//! state: computed from a record's `url` at render time and never persisted.

/// Which Twitch player an id belongs to
///
/// Clips and VODs embed through different Twitch endpoints, so the variant
/// chosen by the matching rule must survive into rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwitchEmbedKind {
    /// A clip (`clips.twitch.tv` embed endpoint)
    Clip,
    /// A full VOD (`player.twitch.tv` endpoint)
    Vod,
}

/// Tagged embed target resolved from a clip URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedDescriptor {
    /// YouTube video, keyed by the `v=` query parameter
    YouTube {
        /// Video id
        video_id: String,
    },
    /// Twitch clip or VOD
    Twitch {
        /// Clip slug or VOD id, depending on `kind`
        id: String,
        /// Clip or VOD embed endpoint
        kind: TwitchEmbedKind,
        /// Domain of the page hosting the embed (Twitch `parent` parameter)
        parent_domain: String,
    },
    /// Kick clip, id without the `clip_` prefix
    Kick {
        /// Clip id
        clip_id: String,
    },
    /// Reddit post, rendered through the redditmedia embed host
    Reddit {
        /// Canonical path of the post on reddit.com
        path: String,
    },
    /// Tweet, rendered by the external tweet widget
    Twitter {
        /// Tweet id
        tweet_id: String,
    },
    /// No rule matched; render a plain outbound link
    Unsupported {
        /// The original clip URL
        url: String,
    },
}

impl EmbedDescriptor {
    /// Create a YouTube descriptor
    pub fn youtube(video_id: impl Into<String>) -> Self {
        Self::YouTube {
            video_id: video_id.into(),
        }
    }

    /// Create a Twitch clip descriptor
    pub fn twitch_clip(id: impl Into<String>, parent_domain: impl Into<String>) -> Self {
        Self::Twitch {
            id: id.into(),
            kind: TwitchEmbedKind::Clip,
            parent_domain: parent_domain.into(),
        }
    }

    /// Create a Twitch VOD descriptor
    pub fn twitch_vod(id: impl Into<String>, parent_domain: impl Into<String>) -> Self {
        Self::Twitch {
            id: id.into(),
            kind: TwitchEmbedKind::Vod,
            parent_domain: parent_domain.into(),
        }
    }

    /// Create a Kick descriptor
    pub fn kick(clip_id: impl Into<String>) -> Self {
        Self::Kick {
            clip_id: clip_id.into(),
        }
    }

    /// Create a Reddit descriptor
    pub fn reddit(path: impl Into<String>) -> Self {
        Self::Reddit { path: path.into() }
    }

    /// Create a Twitter descriptor
    pub fn twitter(tweet_id: impl Into<String>) -> Self {
        Self::Twitter {
            tweet_id: tweet_id.into(),
        }
    }

    /// Create an unsupported descriptor carrying the original URL
    pub fn unsupported(url: impl Into<String>) -> Self {
        Self::Unsupported { url: url.into() }
    }

    /// Whether any platform rule matched this URL
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}
