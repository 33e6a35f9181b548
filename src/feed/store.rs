//! In-memory feed store
//!
//! Holds the displayed clip list plus its loading/error flags and per-clip
//! like request states. The server is the source of truth: fetches replace
//! the whole list, and like mutations only ever land as server-confirmed
//! overwrites. The store runs inside a single task, so every mutation
//! completes before any render observes it.

use std::collections::HashMap;

use super::likes::LikeState;
use super::query::FeedQuery;
use super::record::ClipRecord;

/// In-memory state behind the clip feed
#[derive(Debug, Default)]
pub struct FeedStore {
    /// Ordered records as last received from the server
    records: Vec<ClipRecord>,

    /// Whether a fetch is in flight
    loading: bool,

    /// Message of the last failed operation, cleared by the next success
    last_error: Option<String>,

    /// Active filter/search parameters
    query: FeedQuery,

    /// Per-clip like request state, keyed by record id
    like_states: HashMap<u64, LikeState>,
}

impl FeedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Records currently in view, in server order
    pub fn records(&self) -> &[ClipRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> Option<&ClipRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records in view
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the feed is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed operation, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Active filter/search parameters
    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    /// Like request state for a clip; `Idle` when never touched
    pub fn like_state(&self, id: u64) -> LikeState {
        self.like_states.get(&id).cloned().unwrap_or_default()
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub(crate) fn set_query(&mut self, query: FeedQuery) {
        self.query = query;
    }

    pub(crate) fn set_like_state(&mut self, id: u64, state: LikeState) {
        self.like_states.insert(id, state);
    }

    /// Install a fresh record list, discarding all prior records
    ///
    /// Full replacement is intentional: filtering and search happen on the
    /// server, so whatever arrives is the complete current view. Like states
    /// for records no longer in view are dropped; a pending request for a
    /// surviving record stays pending.
    pub fn replace_all(&mut self, records: Vec<ClipRecord>) {
        self.like_states.retain(|id, _| records.iter().any(|r| r.id == *id));
        self.records = records;
        self.last_error = None;

        tracing::debug!(count = self.records.len(), "Feed replaced");
    }

    /// Overwrite a record's like counters with server-confirmed values
    ///
    /// Confirmed values replace whatever is held locally; they are never
    /// added to it. When the id is no longer in view (a concurrent filter
    /// change removed it) the update is silently dropped — the record is no
    /// longer relevant and no other record is touched.
    pub fn apply_like_result(&mut self, id: u64, likes: u32, liked_by: Vec<String>) {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.likes = likes;
                record.liked_by = liked_by;

                tracing::debug!(clip = id, likes = likes, "Like result applied");
            }
            None => {
                tracing::debug!(clip = id, "Like result for clip no longer in view, dropped");
            }
        }
    }
}
