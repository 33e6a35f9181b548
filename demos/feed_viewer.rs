//! Feed viewer example
//!
//! Run with: cargo run --example feed_viewer [BASE_URL] [TAG]
//!
//! Examples:
//!   cargo run --example feed_viewer                              # http://127.0.0.1:8000
//!   cargo run --example feed_viewer http://localhost:8000        # custom API
//!   cargo run --example feed_viewer http://localhost:8000 funny  # filter by tag
//!
//! Fetches the clip feed from the API, classifies every clip URL, and prints
//! the embed target each record resolves to.

use clipfeed::embed::{classify, EmbedTarget};
use clipfeed::{ClientConfig, FeedCoordinator, FeedQuery, HttpClipApi};

fn print_usage() {
    eprintln!("Usage: feed_viewer [BASE_URL] [TAG]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  BASE_URL    Clip API base URL (default: http://127.0.0.1:8000)");
    eprintln!("  TAG         Optional tag filter");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clipfeed=debug".parse()?),
        )
        .init();

    let config = match args.get(1) {
        Some(base_url) => ClientConfig::with_base_url(base_url.clone()),
        None => ClientConfig::default(),
    };

    let query = match args.get(2) {
        Some(tag) => FeedQuery::all().tag(tag.clone()),
        None => FeedQuery::all(),
    };

    println!("Fetching clips from {}", config.base_url);

    let api = HttpClipApi::new(&config)?;
    let (mut feed, mut events) = FeedCoordinator::new(Box::new(api));

    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            tracing::debug!(?event, "Feed event");
        }
    });

    feed.search(query).await?;

    if feed.store().is_empty() {
        println!("No clips found.");
        return Ok(());
    }

    for clip in feed.store().records() {
        println!();
        println!("#{} by {} ({})", clip.id, clip.creator, clip.source);
        if !clip.tags.is_empty() {
            println!("  tags: {}", clip.tags.join(", "));
        }
        println!("  likes: {}", clip.likes);

        let target = classify(&clip.url, &config.parent_domain).target();
        match target {
            EmbedTarget::Iframe { src, size } => {
                let width = size
                    .width
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "100%".to_string());
                println!("  iframe {}x{}: {}", width, size.height, src);
            }
            EmbedTarget::TweetWidget { tweet_id } => {
                println!("  tweet widget: {}", tweet_id);
            }
            EmbedTarget::Link { href } => {
                println!("  plain link: {}", href);
            }
        }
    }

    Ok(())
}
