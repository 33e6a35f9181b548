//! Clip record types and wire mapping
//!
//! Records are created server-side and replaced wholesale on every refetch;
//! the only local mutation is overwriting like counters with server-confirmed
//! values. The upstream service stores `tags` and `liked_by` as JSON-encoded
//! strings, so decoding accepts both that form and a plain JSON array.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Platform a clip was submitted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipSource {
    /// youtube.com
    YouTube,
    /// twitch.tv
    Twitch,
    /// kick.com
    Kick,
    /// reddit.com
    Reddit,
    /// twitter.com / x.com
    Twitter,
    /// Anything else the server recorded
    #[serde(other)]
    Unknown,
}

impl ClipSource {
    /// Parse a user-supplied source name
    ///
    /// Returns `None` for anything outside the fixed enumeration; `Unknown`
    /// is a server-side value, not something a submitter may choose.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "youtube" => Some(Self::YouTube),
            "twitch" => Some(Self::Twitch),
            "kick" => Some(Self::Kick),
            "reddit" => Some(Self::Reddit),
            "twitter" | "x" => Some(Self::Twitter),
            _ => None,
        }
    }

    /// Wire name of this source
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Twitch => "twitch",
            Self::Kick => "kick",
            Self::Reddit => "reddit",
            Self::Twitter => "twitter",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ClipSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clip as held in the feed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClipRecord {
    /// Server-assigned id, stable for the record's lifetime
    pub id: u64,

    /// Original clip URL as submitted
    pub url: String,

    /// Display name of the submitter
    pub creator: String,

    /// Tags, duplicates suppressed on decode
    #[serde(default, deserialize_with = "string_or_list")]
    pub tags: Vec<String>,

    /// Source platform
    #[serde(default = "default_source")]
    pub source: ClipSource,

    /// Server-authoritative like count
    #[serde(default)]
    pub likes: u32,

    /// Users who liked this clip; set semantics, deduped on decode
    #[serde(default, deserialize_with = "string_or_list")]
    pub liked_by: Vec<String>,

    /// When the clip was submitted
    #[serde(default, deserialize_with = "naive_or_utc_datetime")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl ClipRecord {
    /// Whether the given user identity has liked this clip
    pub fn liked_by_user(&self, user: &str) -> bool {
        self.liked_by.iter().any(|u| u == user)
    }
}

fn default_source() -> ClipSource {
    ClipSource::Unknown
}

/// Payload for submitting a new clip
#[derive(Debug, Clone, Serialize)]
pub struct NewClip {
    /// Clip URL
    pub url: String,
    /// Tags
    pub tags: Vec<String>,
    /// Submitter display name
    pub creator: String,
    /// Source platform
    pub source: ClipSource,
}

/// Server-confirmed like counters returned by like/unlike
#[derive(Debug, Clone, Deserialize)]
pub struct LikeResult {
    /// Authoritative like count
    pub likes: u32,
    /// Authoritative set of users who liked the clip
    #[serde(default, deserialize_with = "string_or_list")]
    pub liked_by: Vec<String>,
}

/// Accepts RFC 3339 timestamps with an offset as well as the naive form the
/// upstream service emits (`datetime.utcnow()` serializes without one); naive
/// timestamps are taken as UTC. Anything unparseable decodes as `None` rather
/// than failing the whole record.
fn naive_or_utc_datetime<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(with_offset.with_timezone(&Utc)));
    }

    Ok(raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc()))
}

/// Accepts either a JSON array of strings or a JSON-encoded string of one
/// (the upstream service stores the latter). Unparseable strings decode as
/// empty, matching the service's own tolerant accessors. Duplicates are
/// dropped, first occurrence wins.
fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        List(Vec<String>),
        Encoded(String),
    }

    let items = match Wire::deserialize(deserializer)? {
        Wire::List(items) => items,
        Wire::Encoded(raw) => serde_json::from_str(&raw).unwrap_or_default(),
    };

    let mut deduped = Vec::with_capacity(items.len());
    for item in items {
        if !deduped.contains(&item) {
            deduped.push(item);
        }
    }
    Ok(deduped)
}
