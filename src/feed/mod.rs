use anyhow::Result;
use clap::Args;

use crate::config::SiteConfig;
use crate::output::types::Meta;
use crate::telemetry::{self};

pub mod error;
pub mod fetch;
pub mod parse;
pub mod pipeline;
pub mod types;
pub mod window;

use fetch::HttpFeedSource;

/// portfolio posts
#[derive(Args)]
pub struct PostsCmd {
    /// Fail with the feed error instead of printing an empty list
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

pub async fn run(cfg: &SiteConfig, args: PostsCmd) -> Result<()> {
    let log = telemetry::posts();
    let _g = log.root_span_kv([
        ("url", cfg.feed_url.to_string()),
        ("window", cfg.window.to_string()),
        ("strict", args.strict.to_string()),
    ]).entered();

    let source = HttpFeedSource::new(cfg.feed_url.clone(), cfg.feed_timeout)?;
    let posts = if args.strict {
        pipeline::try_load_posts(&source, cfg.window).await?
    } else {
        pipeline::load_posts(&source, cfg.window).await
    };

    if telemetry::config::json_mode() {
        let list = types::PostList { items: &posts };
        log.result_with_meta(&list, Some(Meta::feed(cfg.feed_url.as_str(), cfg.window)))?;
        return Ok(());
    }

    if posts.is_empty() { log.info("📭 No posts"); }
    for p in &posts {
        let date = if p.published_at.is_empty() { "-" } else { p.published_at.as_str() };
        let tags = if p.tags.is_empty() { String::new() } else { format!(" [{}]", p.tags.join(", ")) };
        println!("{}  {}  {}{}", date, p.title, p.link, tags);
    }
    Ok(())
}
