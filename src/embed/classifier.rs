//! Clip URL classification
//!
//! Maps an arbitrary clip URL to an [`EmbedDescriptor`]. The matching policy
//! is an explicit ordered rule table evaluated in sequence; the first rule
//! that matches wins. The order is the tie-break contract: if a URL happens
//! to satisfy two families, the earlier family in the table takes it.
//!
//! Classification is total and panic-free. Garbage input falls through every
//! rule and comes back as [`EmbedDescriptor::Unsupported`].

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::descriptor::EmbedDescriptor;

lazy_static! {
    // twitch.tv/{user}/clip/{clipId}
    static ref TWITCH_USER_CLIP: Regex =
        Regex::new(r"twitch\.tv/[^/]+/clip/([^/?]+)").unwrap();
    // clips.twitch.tv/{clipId} (old short form)
    static ref TWITCH_SHORT_CLIP: Regex =
        Regex::new(r"clips\.twitch\.tv/([^/?]+)").unwrap();
    // twitch.tv/videos/{videoId}
    static ref TWITCH_VOD: Regex = Regex::new(r"twitch\.tv/videos/(\d+)").unwrap();
    // v= query parameter anywhere in the URL
    static ref YOUTUBE_WATCH: Regex = Regex::new(r"[?&]v=([^&]+)").unwrap();
    // kick.com/{channel}/clips/clip_{id}
    static ref KICK_CLIP: Regex = Regex::new(r"kick\.com/[^/]+/clips/clip_([^/?]+)").unwrap();
    // (twitter.com|x.com)/{user}/status/{tweetId}
    static ref TWITTER_STATUS: Regex =
        Regex::new(r"(?:twitter\.com|x\.com)/[^/]+/status/(\d+)").unwrap();
}

/// One entry in the classification table
struct Rule {
    /// Platform/pattern name, used for tracing only
    name: &'static str,
    /// Returns a descriptor when the rule recognizes the URL
    matches: fn(&str, &str) -> Option<EmbedDescriptor>,
}

/// The classification table, in priority order
///
/// Twitch sub-patterns come first (user-clip form before the short form
/// before the VOD form), then YouTube, Kick, Reddit, Twitter.
const RULES: &[Rule] = &[
    Rule {
        name: "twitch_user_clip",
        matches: twitch_user_clip,
    },
    Rule {
        name: "twitch_short_clip",
        matches: twitch_short_clip,
    },
    Rule {
        name: "twitch_vod",
        matches: twitch_vod,
    },
    Rule {
        name: "youtube_watch",
        matches: youtube_watch,
    },
    Rule {
        name: "kick_clip",
        matches: kick_clip,
    },
    Rule {
        name: "reddit_post",
        matches: reddit_post,
    },
    Rule {
        name: "twitter_status",
        matches: twitter_status,
    },
];

/// Classify a clip URL into an embed descriptor
///
/// `parent_domain` is the domain of the page that will host the embed. It is
/// threaded into Twitch descriptors because Twitch refuses playback when the
/// `parent` parameter doesn't match the embedding page.
///
/// Deterministic and side-effect free: calling twice on the same input yields
/// the same descriptor.
pub fn classify(url: &str, parent_domain: &str) -> EmbedDescriptor {
    for rule in RULES {
        if let Some(descriptor) = (rule.matches)(url, parent_domain) {
            tracing::debug!(url = url, rule = rule.name, "Clip URL classified");
            return descriptor;
        }
    }

    tracing::debug!(url = url, "No embed rule matched, falling back to link");
    EmbedDescriptor::unsupported(url)
}

fn twitch_user_clip(url: &str, parent: &str) -> Option<EmbedDescriptor> {
    let captures = TWITCH_USER_CLIP.captures(url)?;
    Some(EmbedDescriptor::twitch_clip(&captures[1], parent))
}

fn twitch_short_clip(url: &str, parent: &str) -> Option<EmbedDescriptor> {
    let captures = TWITCH_SHORT_CLIP.captures(url)?;
    Some(EmbedDescriptor::twitch_clip(&captures[1], parent))
}

fn twitch_vod(url: &str, parent: &str) -> Option<EmbedDescriptor> {
    let captures = TWITCH_VOD.captures(url)?;
    Some(EmbedDescriptor::twitch_vod(&captures[1], parent))
}

/// Matches the `v=` query parameter anywhere in the URL.
///
/// Shortened (`youtu.be/...`) and path-based YouTube forms are deliberately
/// not handled; they fall through to the outbound link. Known limitation of
/// the upstream service, carried forward unchanged.
fn youtube_watch(url: &str, _parent: &str) -> Option<EmbedDescriptor> {
    let captures = YOUTUBE_WATCH.captures(url)?;
    Some(EmbedDescriptor::youtube(&captures[1]))
}

fn kick_clip(url: &str, _parent: &str) -> Option<EmbedDescriptor> {
    let captures = KICK_CLIP.captures(url)?;
    Some(EmbedDescriptor::kick(&captures[1]))
}

/// Reddit is the one parse-based rule: the post's path is rewritten onto the
/// redditmedia embed host at render time, so the whole path must survive
/// intact. A URL that doesn't parse, or whose host isn't reddit, is not ours.
fn reddit_post(url: &str, _parent: &str) -> Option<EmbedDescriptor> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if host != "reddit.com" && !host.ends_with(".reddit.com") {
        return None;
    }

    Some(EmbedDescriptor::reddit(parsed.path()))
}

fn twitter_status(url: &str, _parent: &str) -> Option<EmbedDescriptor> {
    let captures = TWITTER_STATUS.captures(url)?;
    Some(EmbedDescriptor::twitter(&captures[1]))
}
