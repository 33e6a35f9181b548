//! Embed render targets
//!
//! The contract between classification and the UI: every descriptor maps to
//! exactly one renderable region. This is a fixed table with no business
//! logic; the UI only has to know how to draw an iframe, hand a tweet id to
//! the external tweet widget, or emit a hyperlink.

use super::descriptor::{EmbedDescriptor, TwitchEmbedKind};

/// Fixed iframe dimensions per platform
///
/// `width: None` means "fill the container".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedSize {
    /// Width in pixels, or `None` for full width
    pub width: Option<u32>,
    /// Height in pixels
    pub height: u32,
}

/// YouTube embeds fill the container at a fixed height
pub const YOUTUBE_SIZE: EmbedSize = EmbedSize {
    width: None,
    height: 200,
};

/// Twitch clip/VOD player dimensions
pub const TWITCH_SIZE: EmbedSize = EmbedSize {
    width: Some(620),
    height: 378,
};

/// Kick clip player dimensions
pub const KICK_SIZE: EmbedSize = EmbedSize {
    width: Some(620),
    height: 378,
};

/// Reddit media embeds fill the container at a fixed height
pub const REDDIT_SIZE: EmbedSize = EmbedSize {
    width: None,
    height: 316,
};

/// A displayable region resolved from a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedTarget {
    /// An iframe with a target URL and fixed dimensions
    Iframe {
        /// Iframe source URL
        src: String,
        /// Platform dimensions
        size: EmbedSize,
    },
    /// The external tweet widget, keyed by tweet id
    TweetWidget {
        /// Tweet id to hand to the widget
        tweet_id: String,
    },
    /// A plain outbound hyperlink (unsupported URL fallback)
    Link {
        /// The original clip URL
        href: String,
    },
}

impl EmbedDescriptor {
    /// Resolve this descriptor into a renderable target
    pub fn target(&self) -> EmbedTarget {
        match self {
            EmbedDescriptor::YouTube { video_id } => EmbedTarget::Iframe {
                src: format!("https://www.youtube.com/embed/{}", video_id),
                size: YOUTUBE_SIZE,
            },
            EmbedDescriptor::Twitch {
                id,
                kind: TwitchEmbedKind::Clip,
                parent_domain,
            } => EmbedTarget::Iframe {
                src: format!(
                    "https://clips.twitch.tv/embed?clip={}&parent={}",
                    id, parent_domain
                ),
                size: TWITCH_SIZE,
            },
            EmbedDescriptor::Twitch {
                id,
                kind: TwitchEmbedKind::Vod,
                parent_domain,
            } => EmbedTarget::Iframe {
                src: format!("https://player.twitch.tv/?video={}&parent={}", id, parent_domain),
                size: TWITCH_SIZE,
            },
            EmbedDescriptor::Kick { clip_id } => EmbedTarget::Iframe {
                src: format!("https://kick.com/embed/clip_{}", clip_id),
                size: KICK_SIZE,
            },
            EmbedDescriptor::Reddit { path } => EmbedTarget::Iframe {
                src: format!(
                    "https://www.redditmedia.com{}?ref_source=embed&ref=share&embed=true",
                    path
                ),
                size: REDDIT_SIZE,
            },
            EmbedDescriptor::Twitter { tweet_id } => EmbedTarget::TweetWidget {
                tweet_id: tweet_id.clone(),
            },
            EmbedDescriptor::Unsupported { url } => EmbedTarget::Link { href: url.clone() },
        }
    }
}
