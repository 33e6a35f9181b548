//! Mutation coordination
//!
//! [`FeedCoordinator`] owns the feed store and the API client and orchestrates
//! every user action: refresh, search, submit, like, unlike. Preconditions are
//! checked before any network traffic; confirmed server values are the only
//! thing that ever lands in the store. Session identity is a parameter on each
//! call, never ambient state.

use tokio::sync::mpsc;

use crate::api::ClipApi;
use crate::error::{Error, Result};
use crate::feed::{ClipSource, FeedQuery, FeedStore, LikeState, NewClip};
use crate::session::UserSession;

/// Events emitted as feed operations progress
///
/// A UI can drive its loading indicator and error surface entirely from
/// these without polling the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A fetch started
    Loading,
    /// A fetch completed and the feed was replaced
    Loaded {
        /// Number of records now in view
        count: usize,
    },
    /// A submission was accepted by the server
    Submitted {
        /// Server-assigned id of the new clip
        id: u64,
    },
    /// A like/unlike was confirmed
    LikeConfirmed {
        /// Clip id
        id: u64,
        /// Server-confirmed like count
        likes: u32,
    },
    /// An operation failed; message is user-visible
    Failed {
        /// What to show the user
        message: String,
    },
}

/// In-progress submit form state
///
/// Held by the coordinator so the "clear on success, preserve on failure"
/// rule lives in one place.
#[derive(Debug, Clone, Default)]
pub struct SubmitDraft {
    /// Clip URL (required)
    pub url: String,
    /// Tags to attach
    pub tags: Vec<String>,
    /// Creator display name; defaults to the session's when left empty
    pub creator: String,
    /// Source platform (required)
    pub source: Option<ClipSource>,
}

impl SubmitDraft {
    /// Clear all fields
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which direction a like mutation goes
enum LikeAction {
    Like,
    Unlike,
}

/// Coordinates user actions against the external clip API
///
/// All methods take `&mut self`, so operations on one coordinator run to
/// completion in order. Fetches are not deduplicated or cancelled across
/// coordinators sharing a server: when callers overlap requests, the last
/// response applied wins. Known limitation, carried forward from the
/// upstream client.
pub struct FeedCoordinator {
    api: Box<dyn ClipApi>,
    store: FeedStore,
    draft: SubmitDraft,
    event_tx: mpsc::Sender<FeedEvent>,
}

impl FeedCoordinator {
    /// Create a coordinator over an API client.
    ///
    /// Returns the coordinator and a receiver for progress events.
    pub fn new(api: Box<dyn ClipApi>) -> (Self, mpsc::Receiver<FeedEvent>) {
        let (tx, rx) = mpsc::channel(256);

        let coordinator = Self {
            api,
            store: FeedStore::new(),
            draft: SubmitDraft::default(),
            event_tx: tx,
        };

        (coordinator, rx)
    }

    /// The feed state
    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    /// The submit form state
    pub fn draft(&self) -> &SubmitDraft {
        &self.draft
    }

    /// Mutable access to the submit form state
    pub fn draft_mut(&mut self) -> &mut SubmitDraft {
        &mut self.draft
    }

    /// Fetch the feed with the active query and replace the store contents.
    pub async fn refresh(&mut self) -> Result<()> {
        self.store.set_loading(true);
        let _ = self.event_tx.send(FeedEvent::Loading).await;

        let result = self.api.fetch_clips(self.store.query()).await;
        self.store.set_loading(false);

        match result {
            Ok(records) => {
                let count = records.len();
                self.store.replace_all(records);

                tracing::info!(count = count, "Feed refreshed");
                let _ = self.event_tx.send(FeedEvent::Loaded { count }).await;
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                self.store.set_error(message.clone());

                tracing::warn!(error = %message, "Feed refresh failed");
                let _ = self.event_tx.send(FeedEvent::Failed { message }).await;
                Err(err)
            }
        }
    }

    /// Install a new query and refetch.
    ///
    /// An earlier fetch still in flight is not aborted; responses apply in
    /// completion order.
    pub async fn search(&mut self, query: FeedQuery) -> Result<()> {
        self.store.set_query(query);
        self.refresh().await
    }

    /// Submit the current draft.
    ///
    /// Validates before touching the network: the URL must be non-empty and
    /// the source one of the fixed enumeration. The creator falls back to
    /// the session display name when the draft leaves it blank. On success
    /// the feed is refetched (the server assigns the id and canonical
    /// ordering) and the draft is cleared; on failure the draft is preserved
    /// so the user can retry.
    pub async fn submit(&mut self, session: Option<&UserSession>) -> Result<()> {
        let clip = match self.validate_draft(session) {
            Ok(clip) => clip,
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(error = %message, "Submit rejected before network call");
                let _ = self.event_tx.send(FeedEvent::Failed { message }).await;
                return Err(err);
            }
        };

        match self.api.submit_clip(&clip).await {
            Ok(created) => {
                let _ = self
                    .event_tx
                    .send(FeedEvent::Submitted { id: created.id })
                    .await;
                self.draft.reset();
                self.refresh().await
            }
            Err(err) => {
                let message = err.to_string();
                self.store.set_error(message.clone());

                tracing::warn!(error = %message, "Clip submission failed");
                let _ = self.event_tx.send(FeedEvent::Failed { message }).await;
                Err(err)
            }
        }
    }

    /// Like a clip as the signed-in user.
    ///
    /// Requires a session; without one this fails before any network call.
    /// No local count is touched until the server confirms.
    pub async fn like(&mut self, id: u64, session: Option<&UserSession>) -> Result<()> {
        self.like_action(id, session, LikeAction::Like).await
    }

    /// Remove the signed-in user's like from a clip.
    pub async fn unlike(&mut self, id: u64, session: Option<&UserSession>) -> Result<()> {
        self.like_action(id, session, LikeAction::Unlike).await
    }

    async fn like_action(
        &mut self,
        id: u64,
        session: Option<&UserSession>,
        action: LikeAction,
    ) -> Result<()> {
        let Some(session) = session else {
            let err = Error::NotSignedIn;
            let _ = self
                .event_tx
                .send(FeedEvent::Failed {
                    message: err.to_string(),
                })
                .await;
            return Err(err);
        };

        let user = session.like_identity();
        self.store.set_like_state(id, LikeState::Pending);

        let result = match action {
            LikeAction::Like => self.api.like_clip(id, user).await,
            LikeAction::Unlike => self.api.unlike_clip(id, user).await,
        };

        match result {
            Ok(confirmed) => {
                let likes = confirmed.likes;
                self.store.apply_like_result(id, likes, confirmed.liked_by);
                self.store.set_like_state(id, LikeState::Confirmed(likes));

                tracing::debug!(clip = id, likes = likes, "Like confirmed");
                let _ = self
                    .event_tx
                    .send(FeedEvent::LikeConfirmed { id, likes })
                    .await;
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                self.store.set_like_state(id, LikeState::Failed(message.clone()));

                tracing::warn!(clip = id, error = %message, "Like request failed");
                let _ = self.event_tx.send(FeedEvent::Failed { message }).await;
                Err(err)
            }
        }
    }

    fn validate_draft(&self, session: Option<&UserSession>) -> Result<NewClip> {
        let url = self.draft.url.trim();
        if url.is_empty() {
            return Err(Error::Validation("clip URL is required".to_string()));
        }

        let source = self
            .draft
            .source
            .ok_or_else(|| Error::Validation("source platform is required".to_string()))?;

        let creator = match self.draft.creator.trim() {
            "" => match session {
                Some(session) => session.display_name.clone(),
                None => {
                    return Err(Error::Validation("creator name is required".to_string()));
                }
            },
            name => name.to_string(),
        };

        Ok(NewClip {
            url: url.to_string(),
            tags: self.draft.tags.clone(),
            creator,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::feed::{ClipRecord, LikeResult};
    use crate::session::AuthProvider;

    #[derive(Default)]
    struct CallLog {
        fetches: AtomicUsize,
        submits: AtomicUsize,
        likes: AtomicUsize,
        unlikes: AtomicUsize,
        submitted_creator: std::sync::Mutex<Option<String>>,
    }

    struct MockApi {
        calls: Arc<CallLog>,
        clips: Vec<ClipRecord>,
        like_result: LikeResult,
        fail_fetch: bool,
    }

    impl MockApi {
        fn new(clips: Vec<ClipRecord>) -> (Self, Arc<CallLog>) {
            let calls = Arc::new(CallLog::default());
            let api = Self {
                calls: Arc::clone(&calls),
                clips,
                like_result: LikeResult {
                    likes: 5,
                    liked_by: vec!["viewer1".to_string()],
                },
                fail_fetch: false,
            };
            (api, calls)
        }
    }

    #[async_trait]
    impl ClipApi for MockApi {
        async fn fetch_clips(&self, _query: &FeedQuery) -> Result<Vec<ClipRecord>> {
            self.calls.fetches.fetch_add(1, Ordering::Relaxed);
            if self.fail_fetch {
                return Err(Error::Network("connection refused".to_string()));
            }
            Ok(self.clips.clone())
        }

        async fn submit_clip(&self, clip: &NewClip) -> Result<ClipRecord> {
            self.calls.submits.fetch_add(1, Ordering::Relaxed);
            *self.calls.submitted_creator.lock().unwrap() = Some(clip.creator.clone());
            Ok(ClipRecord {
                id: 99,
                url: clip.url.clone(),
                creator: clip.creator.clone(),
                tags: clip.tags.clone(),
                source: clip.source,
                likes: 0,
                liked_by: Vec::new(),
                submitted_at: None,
            })
        }

        async fn like_clip(&self, _id: u64, _user: &str) -> Result<LikeResult> {
            self.calls.likes.fetch_add(1, Ordering::Relaxed);
            Ok(self.like_result.clone())
        }

        async fn unlike_clip(&self, _id: u64, _user: &str) -> Result<LikeResult> {
            self.calls.unlikes.fetch_add(1, Ordering::Relaxed);
            Ok(LikeResult {
                likes: 0,
                liked_by: Vec::new(),
            })
        }
    }

    fn clip(id: u64, likes: u32) -> ClipRecord {
        ClipRecord {
            id,
            url: format!("https://clips.twitch.tv/Clip{}", id),
            creator: "someone".to_string(),
            tags: Vec::new(),
            source: ClipSource::Twitch,
            likes,
            liked_by: Vec::new(),
            submitted_at: None,
        }
    }

    fn session() -> UserSession {
        UserSession::new("sub-1", "viewer1", AuthProvider::Twitch)
    }

    #[tokio::test]
    async fn test_like_without_session_makes_no_api_call() {
        let (api, calls) = MockApi::new(vec![clip(1, 0)]);
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));

        let err = coordinator.like(1, None).await.unwrap_err();

        assert!(matches!(err, Error::NotSignedIn));
        assert_eq!(calls.likes.load(Ordering::Relaxed), 0);
        assert_eq!(coordinator.store().like_state(1), LikeState::Idle);
    }

    #[tokio::test]
    async fn test_like_applies_confirmed_values() {
        let (api, calls) = MockApi::new(vec![clip(1, 3)]);
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));
        coordinator.refresh().await.unwrap();

        coordinator.like(1, Some(&session())).await.unwrap();

        assert_eq!(calls.likes.load(Ordering::Relaxed), 1);
        let record = coordinator.store().get(1).unwrap();
        // Server value overwrites; 3 + confirmation must not become 8.
        assert_eq!(record.likes, 5);
        assert_eq!(record.liked_by, vec!["viewer1"]);
        assert_eq!(coordinator.store().like_state(1), LikeState::Confirmed(5));
    }

    #[tokio::test]
    async fn test_repeated_confirmations_do_not_compound() {
        let (api, _calls) = MockApi::new(vec![clip(1, 3)]);
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));
        coordinator.refresh().await.unwrap();

        coordinator.like(1, Some(&session())).await.unwrap();
        coordinator.like(1, Some(&session())).await.unwrap();

        assert_eq!(coordinator.store().get(1).unwrap().likes, 5);
    }

    #[tokio::test]
    async fn test_unlike_uses_unlike_endpoint() {
        let (api, calls) = MockApi::new(vec![clip(1, 5)]);
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));
        coordinator.refresh().await.unwrap();

        coordinator.unlike(1, Some(&session())).await.unwrap();

        assert_eq!(calls.unlikes.load(Ordering::Relaxed), 1);
        assert_eq!(calls.likes.load(Ordering::Relaxed), 0);
        assert_eq!(coordinator.store().get(1).unwrap().likes, 0);
    }

    #[tokio::test]
    async fn test_submit_with_empty_url_makes_no_api_call() {
        let (api, calls) = MockApi::new(Vec::new());
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));
        coordinator.draft_mut().source = Some(ClipSource::Twitch);

        let err = coordinator.submit(Some(&session())).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(calls.submits.load(Ordering::Relaxed), 0);
        assert_eq!(calls.fetches.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_submit_without_source_is_rejected() {
        let (api, calls) = MockApi::new(Vec::new());
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));
        coordinator.draft_mut().url = "https://clips.twitch.tv/Abc".to_string();

        let err = coordinator.submit(Some(&session())).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(calls.submits.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_submit_success_refetches_and_clears_draft() {
        let (api, calls) = MockApi::new(vec![clip(99, 0)]);
        let (mut coordinator, mut events) = FeedCoordinator::new(Box::new(api));
        {
            let draft = coordinator.draft_mut();
            draft.url = "https://clips.twitch.tv/Abc".to_string();
            draft.tags = vec!["funny".to_string()];
            draft.source = Some(ClipSource::Twitch);
        }

        coordinator.submit(Some(&session())).await.unwrap();

        assert_eq!(calls.submits.load(Ordering::Relaxed), 1);
        // Success triggers a full refetch instead of a local upsert.
        assert_eq!(calls.fetches.load(Ordering::Relaxed), 1);
        assert!(coordinator.draft().url.is_empty());
        assert!(coordinator.draft().source.is_none());

        assert_eq!(events.recv().await, Some(FeedEvent::Submitted { id: 99 }));
        assert_eq!(events.recv().await, Some(FeedEvent::Loading));
        assert_eq!(events.recv().await, Some(FeedEvent::Loaded { count: 1 }));
    }

    #[tokio::test]
    async fn test_submit_creator_defaults_to_session_name() {
        let (api, calls) = MockApi::new(Vec::new());
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));
        {
            let draft = coordinator.draft_mut();
            draft.url = "https://clips.twitch.tv/Abc".to_string();
            draft.source = Some(ClipSource::Twitch);
        }

        coordinator.submit(Some(&session())).await.unwrap();

        let creator = calls.submitted_creator.lock().unwrap().clone();
        assert_eq!(creator.as_deref(), Some("viewer1"));
    }

    #[tokio::test]
    async fn test_refresh_failure_records_error_and_clears_loading() {
        let (mut api, calls) = MockApi::new(Vec::new());
        api.fail_fetch = true;
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));

        let err = coordinator.refresh().await.unwrap_err();

        assert!(matches!(err, Error::Network(_)));
        assert_eq!(calls.fetches.load(Ordering::Relaxed), 1);
        assert!(!coordinator.store().is_loading());
        assert!(coordinator.store().last_error().is_some());
    }

    #[tokio::test]
    async fn test_search_installs_query_and_fetches() {
        let (api, calls) = MockApi::new(vec![clip(1, 0)]);
        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(api));

        coordinator
            .search(FeedQuery::all().tag("funny"))
            .await
            .unwrap();

        assert_eq!(calls.fetches.load(Ordering::Relaxed), 1);
        assert_eq!(coordinator.store().query().tag.as_deref(), Some("funny"));
        assert_eq!(coordinator.store().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_like_preserves_feed_and_marks_state() {
        struct FailingLikeApi;

        #[async_trait]
        impl ClipApi for FailingLikeApi {
            async fn fetch_clips(&self, _query: &FeedQuery) -> Result<Vec<ClipRecord>> {
                Ok(vec![ClipRecord {
                    id: 1,
                    url: "https://clips.twitch.tv/Abc".to_string(),
                    creator: "someone".to_string(),
                    tags: Vec::new(),
                    source: ClipSource::Twitch,
                    likes: 3,
                    liked_by: Vec::new(),
                    submitted_at: None,
                }])
            }

            async fn submit_clip(&self, _clip: &NewClip) -> Result<ClipRecord> {
                unreachable!()
            }

            async fn like_clip(&self, _id: u64, _user: &str) -> Result<LikeResult> {
                Err(Error::Api {
                    status: 500,
                    message: "boom".to_string(),
                })
            }

            async fn unlike_clip(&self, _id: u64, _user: &str) -> Result<LikeResult> {
                unreachable!()
            }
        }

        let (mut coordinator, _events) = FeedCoordinator::new(Box::new(FailingLikeApi));
        coordinator.refresh().await.unwrap();

        let err = coordinator.like(1, Some(&session())).await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 500, .. }));
        // No local mutation happened before or after the failure.
        assert_eq!(coordinator.store().get(1).unwrap().likes, 3);
        assert!(matches!(
            coordinator.store().like_state(1),
            LikeState::Failed(_)
        ));
    }
}
