//! External clip API
//!
//! The clip service is an external collaborator; this module only speaks its
//! HTTP surface. The [`ClipApi`] trait is the seam the coordinator depends
//! on, so tests can swap in a mock without a live server.

pub mod client;

use async_trait::async_trait;

use crate::error::Result;
use crate::feed::{ClipRecord, FeedQuery, LikeResult, NewClip};

pub use client::HttpClipApi;

/// Operations the clip service exposes
#[async_trait]
pub trait ClipApi: Send + Sync {
    /// Fetch the current feed, filtered by the query
    async fn fetch_clips(&self, query: &FeedQuery) -> Result<Vec<ClipRecord>>;

    /// Submit a new clip; returns the created record
    async fn submit_clip(&self, clip: &NewClip) -> Result<ClipRecord>;

    /// Register a like by `user`; returns the confirmed counters
    async fn like_clip(&self, id: u64, user: &str) -> Result<LikeResult>;

    /// Remove `user`'s like; returns the confirmed counters
    async fn unlike_clip(&self, id: u64, user: &str) -> Result<LikeResult>;
}
