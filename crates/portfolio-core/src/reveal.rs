//! One-shot reveal latch for page sections.
//!
//! Each section owns a [`RevealLatch`] that flips to revealed the first time
//! its visible fraction reaches the threshold and never flips back. Visible
//! fractions come from any [`VisibilitySource`]: the desktop shell feeds an
//! IntersectionObserver through a [`ChannelSource`], while [`ScrollProbe`]
//! derives them from raw scroll offsets and section geometry.

use std::future::Future;

use tokio::sync::mpsc;

use crate::config::DEFAULT_REVEAL_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Outcome of feeding one observation to a latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// This observation flipped the latch
    Latched,
    /// No state change
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    state: RevealState,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: RevealState::Hidden,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed a visible fraction. Only the first crossing changes state.
    pub fn observe(&mut self, ratio: f64) -> Transition {
        match self.state {
            RevealState::Revealed => Transition::Unchanged,
            RevealState::Hidden if ratio >= self.threshold => {
                self.state = RevealState::Revealed;
                Transition::Latched
            }
            RevealState::Hidden => Transition::Unchanged,
        }
    }
}

/// Yields successive visible fractions for one section root.
pub trait VisibilitySource {
    /// Next visible fraction in `[0, 1]`, or `None` once the source is closed.
    fn next_ratio(&mut self) -> impl Future<Output = Option<f64>>;
}

/// Visibility source fed through an unbounded channel.
#[derive(Debug)]
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<f64>,
}

impl ChannelSource {
    /// Create a source and the sender that feeds it.
    pub fn new() -> (mpsc::UnboundedSender<f64>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

impl VisibilitySource for ChannelSource {
    async fn next_ratio(&mut self) -> Option<f64> {
        self.rx.recv().await
    }
}

/// Vertical extent of a section in document coordinates (px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

/// Fraction of `rect` inside the viewport `[scroll_y, scroll_y + viewport_height)`.
pub fn visible_ratio(rect: SectionRect, scroll_y: f64, viewport_height: f64) -> f64 {
    if rect.height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let view_top = scroll_y;
    let view_bottom = scroll_y + viewport_height;
    let overlap = (rect.top + rect.height).min(view_bottom) - rect.top.max(view_top);
    (overlap.max(0.0) / rect.height).clamp(0.0, 1.0)
}

/// Visibility source computed from scroll offsets instead of an observer.
#[derive(Debug)]
pub struct ScrollProbe {
    rect: SectionRect,
    viewport_height: f64,
    scroll_rx: mpsc::UnboundedReceiver<f64>,
}

impl ScrollProbe {
    /// Create a probe for `rect` and the sender for scroll offsets.
    pub fn new(rect: SectionRect, viewport_height: f64) -> (mpsc::UnboundedSender<f64>, Self) {
        let (tx, scroll_rx) = mpsc::unbounded_channel();
        (
            tx,
            Self {
                rect,
                viewport_height,
                scroll_rx,
            },
        )
    }
}

impl VisibilitySource for ScrollProbe {
    async fn next_ratio(&mut self) -> Option<f64> {
        let scroll_y = self.scroll_rx.recv().await?;
        Some(visible_ratio(self.rect, scroll_y, self.viewport_height))
    }
}

/// Drive `source` until the latch flips or the source closes.
///
/// Calls `on_reveal` exactly once on the flip and then drops the source,
/// which disconnects it. Returns whether the latch ended up revealed.
pub async fn watch_reveal<S, F>(latch: &mut RevealLatch, mut source: S, on_reveal: F) -> bool
where
    S: VisibilitySource,
    F: FnOnce(),
{
    if latch.is_revealed() {
        return true;
    }
    while let Some(ratio) = source.next_ratio().await {
        if latch.observe(ratio) == Transition::Latched {
            drop(source);
            on_reveal();
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        let latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert_eq!(latch.threshold(), 0.1);
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut latch = RevealLatch::new(0.1);
        assert_eq!(latch.observe(0.05), Transition::Unchanged);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn crossing_threshold_latches_once() {
        let mut latch = RevealLatch::new(0.1);
        assert_eq!(latch.observe(0.1), Transition::Latched);
        assert_eq!(latch.observe(0.8), Transition::Unchanged);
        assert!(latch.is_revealed());
    }

    #[test]
    fn never_reverts() {
        let mut latch = RevealLatch::new(0.1);
        latch.observe(0.5);
        latch.observe(0.0);
        assert_eq!(latch.state(), RevealState::Revealed);
    }

    #[test]
    fn visible_ratio_geometry() {
        let rect = SectionRect { top: 1000.0, height: 500.0 };
        // Entirely above the section
        assert_eq!(visible_ratio(rect, 0.0, 800.0), 0.0);
        // Top 100px visible
        assert!((visible_ratio(rect, 300.0, 800.0) - 0.2).abs() < 1e-9);
        // Fully visible
        assert_eq!(visible_ratio(rect, 900.0, 800.0), 1.0);
        // Scrolled past
        assert_eq!(visible_ratio(rect, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn visible_ratio_degenerate() {
        let rect = SectionRect { top: 0.0, height: 0.0 };
        assert_eq!(visible_ratio(rect, 0.0, 800.0), 0.0);
    }

    #[tokio::test]
    async fn watch_reveal_fires_once_and_disconnects() {
        let (tx, source) = ChannelSource::new();
        let mut latch = RevealLatch::new(0.1);
        let mut calls = 0;

        tx.send(0.0).unwrap();
        tx.send(0.05).unwrap();
        tx.send(0.3).unwrap();
        tx.send(0.9).unwrap();

        let revealed = watch_reveal(&mut latch, source, || calls += 1).await;
        assert!(revealed);
        assert_eq!(calls, 1);
        // Receiver dropped on latch
        assert!(tx.send(1.0).is_err());
    }

    #[tokio::test]
    async fn watch_reveal_returns_false_on_close() {
        let (tx, source) = ChannelSource::new();
        let mut latch = RevealLatch::new(0.1);
        tx.send(0.01).unwrap();
        drop(tx);

        let revealed = watch_reveal(&mut latch, source, || panic!("must not reveal")).await;
        assert!(!revealed);
        assert!(!latch.is_revealed());
    }

    #[tokio::test]
    async fn scroll_probe_reveals_on_scroll() {
        let rect = SectionRect { top: 1000.0, height: 1000.0 };
        let (tx, probe) = ScrollProbe::new(rect, 800.0);
        let mut latch = RevealLatch::new(0.1);

        tx.send(0.0).unwrap();
        tx.send(250.0).unwrap(); // 50px of 1000 visible
        tx.send(400.0).unwrap(); // 200px visible

        assert!(watch_reveal(&mut latch, probe, || {}).await);
    }
}
