//! Embed-URL resolution
//!
//! Turns an arbitrary clip URL into something a UI can display. Two stages:
//!
//! ```text
//!   raw URL ──classify()──► EmbedDescriptor ──target()──► EmbedTarget
//!                            (tagged variant)              (iframe URL + size,
//!                                                           tweet widget, or
//!                                                           fallback link)
//! ```
//!
//! Classification is an ordered rule table (first match wins) and is total:
//! anything unrecognized becomes `Unsupported`, which renders as a plain
//! outbound link. Nothing in this module touches the network.

pub mod classifier;
pub mod descriptor;
pub mod target;

pub use classifier::classify;
pub use descriptor::{EmbedDescriptor, TwitchEmbedKind};
pub use target::{EmbedSize, EmbedTarget};
