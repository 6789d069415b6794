use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::feed::fetch::HttpFeedSource;
use crate::feed::window::Window;
use crate::output::types::Meta;
use crate::profile::PROFILE;
use crate::projects::catalog::PROJECTS;
use crate::telemetry::{self};
use crate::telemetry::ops::render::Phase as RenderPhase;

use super::html;
use super::reveal::RevealSchedule;
use super::state::Page;

/// portfolio render (plan-only by default; use --apply to write)
#[derive(Args)]
pub struct RenderCmd {
    /// Output file; defaults to dist/index.html
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pub apply: bool,
}

#[derive(Serialize)]
struct RenderPlan<'a> {
    out: &'a Path,
    feed_url: &'a str,
    window: Window,
    projects: usize,
}

#[derive(Serialize)]
struct RenderResult<'a> {
    out: &'a Path,
    bytes: usize,
    posts: usize,
}

pub async fn run(cfg: &SiteConfig, args: RenderCmd) -> Result<()> {
    let out = args.out.unwrap_or_else(|| cfg.out_path.clone());
    let log = telemetry::render();
    let _g = log.root_span_kv([
        ("mode", if args.apply { "apply".to_string() } else { "plan".to_string() }),
        ("out", out.display().to_string()),
        ("url", cfg.feed_url.to_string()),
    ]).entered();

    if !args.apply {
        let _s = log.span(&RenderPhase::Plan).entered();
        log.info(format!("📝 Render plan — out={} feed={} window={} projects={}", out.display(), cfg.feed_url, cfg.window, PROJECTS.len()));
        log.info("   Use --apply to execute.");
        if telemetry::config::json_mode() {
            let plan = RenderPlan { out: &out, feed_url: cfg.feed_url.as_str(), window: cfg.window, projects: PROJECTS.len() };
            log.plan(&plan)?;
        }
        return Ok(());
    }

    let t0 = Instant::now();
    let schedule = RevealSchedule::default();
    let state = {
        let _s = log.span(&RenderPhase::Load).entered();
        let source = HttpFeedSource::new(cfg.feed_url.clone(), cfg.feed_timeout)?;
        // the static page only needs posts; the reveal plays in the browser
        let mut page = Page::new(cfg.window, RevealSchedule::immediate());
        page.mount(Arc::new(source));
        let state = page.wait_loaded().await;
        page.unmount();
        page.join().await;
        state
    };

    let doc = html::render_document(&PROFILE, PROJECTS, &state.posts, &schedule)?;
    {
        let _s = log.span_kv(&RenderPhase::Write, [("bytes", doc.len().to_string())]).entered();
        write_file(&out, &doc).await?;
    }
    log.info(format!("✅ Wrote {} ({} bytes, {} posts)", out.display(), doc.len(), state.posts.len()));

    if telemetry::config::json_mode() {
        let result = RenderResult { out: &out, bytes: doc.len(), posts: state.posts.len() };
        let meta = Meta::feed(cfg.feed_url.as_str(), cfg.window).with_duration_ms(t0.elapsed().as_millis());
        log.result_with_meta(&result, Some(meta))?;
    }
    Ok(())
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await.with_context(|| format!("creating {}", dir.display()))?;
    }
    tokio::fs::write(path, contents).await.with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_file_creates_parent_dirs() {
        let root = std::env::temp_dir().join(format!("portfolio-render-{}", uuid::Uuid::new_v4()));
        let path = root.join("dist").join("index.html");
        write_file(&path, "<!DOCTYPE html>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>");
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn write_file_reports_the_path_on_failure() {
        let root = std::env::temp_dir().join(format!("portfolio-render-{}", uuid::Uuid::new_v4()));
        std::fs::write(&root, "a file, not a directory").unwrap();
        let err = write_file(&root.join("index.html"), "x").await.unwrap_err();
        assert!(format!("{err:#}").contains(&root.display().to_string()));
        std::fs::remove_file(&root).unwrap();
    }
}
