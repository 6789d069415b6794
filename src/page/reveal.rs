use std::time::Duration;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Revealable parts of the page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Projects,
    Posts,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Header, Section::Projects, Section::Posts];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    /// Wait relative to the previous step.
    pub delay: Duration,
    pub section: Section,
}

/// Ordered (delay, section) steps played back on one timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSchedule {
    steps: Vec<RevealStep>,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        RevealSchedule::new(vec![
            RevealStep { delay: Duration::ZERO, section: Section::Header },
            RevealStep { delay: Duration::from_millis(200), section: Section::Projects },
            RevealStep { delay: Duration::from_millis(200), section: Section::Posts },
        ])
    }
}

impl RevealSchedule {
    pub fn new(steps: Vec<RevealStep>) -> Self { RevealSchedule { steps } }

    /// Everything visible at once.
    pub fn immediate() -> Self {
        RevealSchedule::new(Section::ALL.iter().map(|&section| RevealStep { delay: Duration::ZERO, section }).collect())
    }

    pub fn steps(&self) -> &[RevealStep] { &self.steps }

    /// Time from mount until `section` shows, if it is scheduled at all.
    pub fn offset_of(&self, section: Section) -> Option<Duration> {
        let mut at = Duration::ZERO;
        for step in &self.steps {
            at += step.delay;
            if step.section == section { return Some(at); }
        }
        None
    }

    /// Apply each step in order. Returns false if `token` fired first.
    pub async fn play<F>(&self, token: &CancellationToken, mut apply: F) -> bool
    where
        F: FnMut(Section),
    {
        for step in &self.steps {
            tokio::select! {
                biased;
                _ = token.cancelled() => return false,
                _ = tokio::time::sleep(step.delay) => apply(step.section),
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn offsets_accumulate() {
        let s = RevealSchedule::default();
        assert_eq!(s.offset_of(Section::Header), Some(Duration::ZERO));
        assert_eq!(s.offset_of(Section::Projects), Some(Duration::from_millis(200)));
        assert_eq!(s.offset_of(Section::Posts), Some(Duration::from_millis(400)));
    }

    #[test]
    fn unscheduled_section_has_no_offset() {
        let s = RevealSchedule::new(vec![RevealStep { delay: Duration::ZERO, section: Section::Header }]);
        assert_eq!(s.offset_of(Section::Posts), None);
    }

    #[tokio::test(start_paused = true)]
    async fn plays_in_order_with_delays() {
        let start = Instant::now();
        let mut seen: Vec<(Section, u128)> = Vec::new();
        let done = RevealSchedule::default()
            .play(&CancellationToken::new(), |s| seen.push((s, start.elapsed().as_millis())))
            .await;
        assert!(done);
        assert_eq!(seen, vec![(Section::Header, 0), (Section::Projects, 200), (Section::Posts, 400)]);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_cancelled() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            canceller.cancel();
        });
        let mut seen = Vec::new();
        let done = RevealSchedule::default().play(&token, |s| seen.push(s)).await;
        assert!(!done);
        assert_eq!(seen, vec![Section::Header, Section::Projects]);
    }

    #[tokio::test]
    async fn already_cancelled_applies_nothing() {
        let token = CancellationToken::new();
        token.cancel();
        let mut seen = Vec::new();
        assert!(!RevealSchedule::immediate().play(&token, |s| seen.push(s)).await);
        assert!(seen.is_empty());
    }
}
