//! Headless client library for a clip-sharing service
//!
//! Provides everything a front end needs except the pixels: embed-URL
//! resolution for submitted clips, the in-memory feed store, and the
//! coordination of submit/like/search mutations against the external clip
//! API. OAuth sign-in is delegated to an external identity provider; only
//! the resulting [`session::UserSession`] is modeled here.
//!
//! # Data flow
//!
//! ```text
//!   clip API ──fetch──► FeedStore ──per record──► classify(url) ──► EmbedTarget
//!      ▲                    ▲                                        (iframe /
//!      │                    │                                         widget /
//!      └──── FeedCoordinator┘                                         link)
//!            submit / like / search
//! ```
//!
//! # Example
//! ```no_run
//! use clipfeed::{ClientConfig, FeedCoordinator, HttpClipApi};
//!
//! # async fn example() -> clipfeed::Result<()> {
//! let config = ClientConfig::default();
//! let api = HttpClipApi::new(&config)?;
//! let (mut feed, _events) = FeedCoordinator::new(Box::new(api));
//!
//! feed.refresh().await?;
//! for clip in feed.store().records() {
//!     let target = clipfeed::embed::classify(&clip.url, &config.parent_domain).target();
//!     println!("{}: {:?}", clip.creator, target);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod coordinator;
pub mod embed;
pub mod error;
pub mod feed;
pub mod session;

pub use api::{ClipApi, HttpClipApi};
pub use config::ClientConfig;
pub use coordinator::{FeedCoordinator, FeedEvent, SubmitDraft};
pub use embed::{classify, EmbedDescriptor, EmbedTarget};
pub use error::{Error, Result};
pub use feed::{ClipRecord, ClipSource, FeedQuery, FeedStore, LikeState};
pub use session::{AuthProvider, UserSession};
