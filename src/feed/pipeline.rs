use tracing::Instrument;

use crate::telemetry::{self};
use crate::telemetry::ops::posts::Phase as PostsPhase;

use super::error::FeedError;
use super::fetch::FeedSource;
use super::parse;
use super::types::FeedItem;
use super::window::Window;

/// Fetch, parse and window the feed. Errors are returned, not swallowed.
pub async fn try_load_posts(source: &dyn FeedSource, window: Window) -> Result<Vec<FeedItem>, FeedError> {
    let log = telemetry::posts();
    // instrument, not enter: this future is spawned by the page and must stay Send
    let xml = source
        .fetch()
        .instrument(log.span_kv(&PostsPhase::Fetch, [("source", source.describe())]))
        .await?;
    let _s = log.span_kv(&PostsPhase::Parse, [("bytes", xml.len().to_string()), ("window", window.to_string())]).entered();
    let posts = parse::adapt(&xml, window)?;
    log.window_summary(posts.len(), &window.to_string());
    Ok(posts)
}

/// Fail-soft variant used by the page: any failure is logged and the page
/// gets no posts.
pub async fn load_posts(source: &dyn FeedSource, window: Window) -> Vec<FeedItem> {
    match try_load_posts(source, window).await {
        Ok(posts) => posts,
        Err(err) => {
            let log = telemetry::posts();
            log.warn_kv("⚠️ Feed unavailable, showing no posts", [
                ("source", source.describe()),
                ("kind", err.kind().to_string()),
                ("error", err.to_string()),
            ]);
            Vec::new()
        }
    }
}
