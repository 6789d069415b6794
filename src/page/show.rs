use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use crate::config::SiteConfig;
use crate::feed::fetch::HttpFeedSource;
use crate::profile::PROFILE;
use crate::projects::catalog::PROJECTS;
use crate::telemetry::{self};
use crate::telemetry::ops::show::Phase as ShowPhase;

use super::reveal::{RevealSchedule, Section};
use super::state::{Page, PageState};
use super::text;

/// portfolio show: preview the page in the terminal
#[derive(Args)]
pub struct ShowCmd {
    /// Show every section at once instead of staggering them
    #[arg(long, default_value_t = false)]
    pub no_reveal: bool,
}

/// Tracks what has already been printed so each section appears once.
#[derive(Default)]
struct Printed {
    sections: Vec<Section>,
    posts: bool,
}

impl Printed {
    /// Lines to print for whatever became visible since the last call.
    fn advance(&mut self, state: &PageState) -> Vec<String> {
        let mut lines = Vec::new();
        for section in state.visible.iter().copied() {
            if self.sections.contains(&section) { continue; }
            self.sections.push(section);
            match section {
                Section::Header => lines.extend(text::header_lines(&PROFILE)),
                Section::Projects => lines.extend(text::project_lines(PROJECTS)),
                Section::Posts if !state.posts_loaded => lines.push("Latest From the Blog (loading…)".to_string()),
                Section::Posts => { self.posts = true; lines.extend(text::post_lines(&state.posts)); }
            }
            lines.push(String::new());
        }
        if !self.posts && state.posts_loaded && state.is_visible(Section::Posts) {
            self.posts = true;
            // heading was already printed while loading
            lines.extend(text::post_lines(&state.posts).into_iter().skip(1));
            lines.push(String::new());
        }
        lines
    }

    fn done(&self, expected: usize) -> bool { self.posts && self.sections.len() >= expected }
}

pub async fn run(cfg: &SiteConfig, args: ShowCmd) -> Result<()> {
    let log = telemetry::show();
    let _g = log.root_span_kv([("url", cfg.feed_url.to_string()), ("reveal", (!args.no_reveal).to_string())]).entered();

    let schedule = if args.no_reveal { RevealSchedule::immediate() } else { RevealSchedule::default() };
    let mut page = Page::new(cfg.window, schedule);
    let mut rx = page.subscribe();
    {
        let _s = log.span(&ShowPhase::Mount).entered();
        let source = HttpFeedSource::new(cfg.feed_url.clone(), cfg.feed_timeout)?;
        page.mount(Arc::new(source));
    }

    let expected = page.schedule().steps().len();
    let mut printed = Printed::default();
    let _s = log.span(&ShowPhase::Reveal).entered();
    loop {
        let lines = printed.advance(&rx.borrow_and_update());
        for l in lines { println!("{}", l); }
        if printed.done(expected) { break; }

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log.info("🛑 Interrupted");
                break;
            }
            changed = rx.changed() => { if changed.is_err() { break; } }
        }
    }

    let _u = log.span(&ShowPhase::Unmount).entered();
    page.unmount();
    page.join().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::FeedItem;

    fn state(visible: &[Section], posts: Option<Vec<FeedItem>>) -> PageState {
        PageState {
            posts_loaded: posts.is_some(),
            posts: posts.unwrap_or_default(),
            visible: visible.iter().copied().collect(),
        }
    }

    #[test]
    fn sections_print_once() {
        let mut p = Printed::default();
        let first = p.advance(&state(&[Section::Header], None));
        assert_eq!(first[0], "Tim Pepper");
        assert!(p.advance(&state(&[Section::Header], None)).is_empty());
    }

    #[test]
    fn posts_follow_their_heading_when_late() {
        let mut p = Printed::default();
        p.advance(&state(&[Section::Header, Section::Projects], None));
        let loading = p.advance(&state(&Section::ALL, None));
        assert_eq!(loading[0], "Latest From the Blog (loading…)");
        assert!(!p.done(3));

        let post = FeedItem { title: "Post 1".into(), link: "https://x/1".into(), published_at: "2024-01-01".into(), tags: vec![] };
        let late = p.advance(&state(&Section::ALL, Some(vec![post])));
        assert_eq!(late[0], "  Post 1 <https://x/1>");
        assert!(p.done(3));
    }

    #[test]
    fn loaded_before_reveal_prints_with_section() {
        let mut p = Printed::default();
        let lines = p.advance(&state(&Section::ALL, Some(vec![])));
        assert!(lines.contains(&"Latest From the Blog".to_string()));
        assert!(p.done(3));
    }
}
