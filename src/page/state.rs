use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::Instrument;

use crate::feed::fetch::FeedSource;
use crate::feed::pipeline;
use crate::feed::types::FeedItem;
use crate::feed::window::Window;
use crate::telemetry::{self};
use crate::telemetry::ops::page::Phase as PagePhase;

use super::reveal::{RevealSchedule, Section};

/// What the page currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub posts: Vec<FeedItem>,
    /// Set once the feed attempt finished, even if it produced nothing.
    pub posts_loaded: bool,
    pub visible: BTreeSet<Section>,
}

impl PageState {
    pub fn is_visible(&self, section: Section) -> bool { self.visible.contains(&section) }
}

/// The page component. Owns its state and everything it spawns; dropping or
/// unmounting it cancels the feed fetch and the reveal timers, and late
/// feed results are thrown away.
pub struct Page {
    state: Arc<watch::Sender<PageState>>,
    token: CancellationToken,
    window: Window,
    schedule: RevealSchedule,
    tasks: Vec<JoinHandle<()>>,
    _guard: DropGuard,
}

impl Page {
    pub fn new(window: Window, schedule: RevealSchedule) -> Self {
        let (tx, _rx) = watch::channel(PageState::default());
        let token = CancellationToken::new();
        let guard = token.clone().drop_guard();
        Page { state: Arc::new(tx), token, window, schedule, tasks: Vec::new(), _guard: guard }
    }

    pub fn schedule(&self) -> &RevealSchedule { &self.schedule }

    pub fn subscribe(&self) -> watch::Receiver<PageState> { self.state.subscribe() }

    pub fn snapshot(&self) -> PageState { self.state.borrow().clone() }

    pub fn is_mounted(&self) -> bool { !self.tasks.is_empty() && !self.token.is_cancelled() }

    /// Start loading posts and playing the reveal schedule.
    pub fn mount(&mut self, source: Arc<dyn FeedSource>) {
        if self.is_mounted() || self.token.is_cancelled() { return; }

        let log = telemetry::page();
        let token = self.token.clone();
        let tx = Arc::clone(&self.state);
        let window = self.window;
        let load_span = log.span_kv(&PagePhase::Load, [("window", window.to_string()), ("source", source.describe())]);
        self.tasks.push(tokio::spawn(async move {
            let posts = tokio::select! {
                biased;
                _ = token.cancelled() => return,
                posts = pipeline::load_posts(source.as_ref(), window) => posts,
            };
            // unmounted while the response was being parsed
            if token.is_cancelled() { return; }
            tx.send_modify(|s| {
                s.posts = posts;
                s.posts_loaded = true;
            });
        }.instrument(load_span)));

        let token = self.token.clone();
        let tx = Arc::clone(&self.state);
        let schedule = self.schedule.clone();
        let reveal_span = log.span_kv(&PagePhase::Reveal, [("steps", schedule.steps().len().to_string())]);
        self.tasks.push(tokio::spawn(async move {
            schedule
                .play(&token, |section| {
                    tx.send_modify(|s| {
                        s.visible.insert(section);
                    });
                })
                .await;
        }.instrument(reveal_span)));
    }

    pub fn unmount(&mut self) {
        self.token.cancel();
    }

    /// Wait for the spawned work to wind down after `unmount`.
    /// A task that panicked is logged; the page keeps whatever state it had.
    pub async fn join(&mut self) {
        let log = telemetry::page();
        for task in self.tasks.drain(..) {
            if let Err(err) = task.await {
                log.warn_kv("⚠️ Page task failed", [("panic", err.is_panic().to_string()), ("error", err.to_string())]);
            }
        }
    }

    /// Resolves once posts are set, or with the current state if the page is
    /// unmounted first.
    pub async fn wait_loaded(&self) -> PageState {
        self.wait_until(|s| s.posts_loaded).await
    }

    /// Resolves once every scheduled section is visible and posts are set.
    #[cfg(test)]
    pub async fn wait_settled(&self) -> PageState {
        let wanted: BTreeSet<Section> = self.schedule.steps().iter().map(|s| s.section).collect();
        self.wait_until(move |s| s.posts_loaded && wanted.is_subset(&s.visible)).await
    }

    async fn wait_until<F>(&self, mut done: F) -> PageState
    where
        F: FnMut(&PageState) -> bool,
    {
        let mut rx = self.subscribe();
        tokio::select! {
            _ = self.token.cancelled() => {}
            r = rx.wait_for(|s| done(s)) => { if let Ok(s) = r { return s.clone(); } }
        }
        self.snapshot()
    }
}
