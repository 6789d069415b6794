use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use url::Url;

use crate::feed::window::Window;

pub const DEFAULT_FEED_URL: &str = "https://timpepper.dev/blog/posts/feed/rss.xml";
pub const DEFAULT_OUT_PATH: &str = "dist/index.html";

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub feed_url: Url,
    pub window: Window,
    /// None leaves reqwest's own defaults in place.
    pub feed_timeout: Option<Duration>,
    pub out_path: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let feed_url = std::env::var("PORTFOLIO_FEED_URL").ok();
        let window = std::env::var("PORTFOLIO_FEED_WINDOW").ok();
        let timeout = std::env::var("PORTFOLIO_FEED_TIMEOUT_SECS").ok();
        Self::from_parts(feed_url.as_deref(), window.as_deref(), timeout.as_deref())
    }

    pub fn from_parts(feed_url: Option<&str>, window: Option<&str>, timeout_secs: Option<&str>) -> Result<Self> {
        let feed_url = parse_feed_url(feed_url.unwrap_or(DEFAULT_FEED_URL))?;
        let window = match window {
            Some(w) => w.parse::<Window>()?,
            None => Window::default(),
        };
        let feed_timeout = match timeout_secs {
            Some(s) => match s.trim().parse::<u64>() {
                Ok(0) | Err(_) => bail!("PORTFOLIO_FEED_TIMEOUT_SECS must be a positive integer, got {:?}", s),
                Ok(secs) => Some(Duration::from_secs(secs)),
            },
            None => None,
        };
        Ok(SiteConfig { feed_url, window, feed_timeout, out_path: PathBuf::from(DEFAULT_OUT_PATH) })
    }

    /// Apply CLI flags on top of the environment.
    pub fn with_overrides(mut self, feed_url: Option<&str>, window: Option<Window>) -> Result<Self> {
        if let Some(u) = feed_url { self.feed_url = parse_feed_url(u)?; }
        if let Some(w) = window { self.window = w; }
        Ok(self)
    }
}

fn parse_feed_url(raw: &str) -> Result<Url> {
    let url = match Url::parse(raw) {
        Ok(u) => u,
        Err(_) => bail!("Invalid feed URL: {}", raw),
    };
    if !matches!(url.scheme(), "http" | "https") { bail!("Feed URL must be http(s): {}", raw); }
    Ok(url)
}
