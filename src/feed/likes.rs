//! Per-clip like request state
//!
//! Tracks the lifecycle of a like/unlike request for one clip. Each clip id
//! has its own state, so concurrent clicks on different clips are tracked
//! independently. The count inside `Confirmed` is the server's value; the
//! client never increments locally before the server answers.

/// Lifecycle of a like/unlike request for a single clip
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LikeState {
    /// No request in flight or recorded
    #[default]
    Idle,
    /// Request sent, waiting for server confirmation
    Pending,
    /// Server confirmed; carries the authoritative like count
    Confirmed(u32),
    /// Request failed; carries the surfaced error message
    Failed(String),
}

impl LikeState {
    /// Whether a request is currently in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Server-confirmed like count, if any
    pub fn confirmed_likes(&self) -> Option<u32> {
        match self {
            Self::Confirmed(likes) => Some(*likes),
            _ => None,
        }
    }

    /// Error message from a failed request, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
