//! Clip feed state
//!
//! Records arrive from the external API and live in the [`FeedStore`] until
//! the next fetch replaces them. Like mutations flow through per-clip
//! [`LikeState`] machines and only ever apply server-confirmed values.

pub mod likes;
pub mod query;
pub mod record;
pub mod store;

pub use likes::LikeState;
pub use query::FeedQuery;
pub use record::{ClipRecord, ClipSource, LikeResult, NewClip};
pub use store::FeedStore;
