//! Hooks bridging DOM observers into the core state machines.
//!
//! The webview reports through `dioxus.send`; each report becomes a value on
//! the Rust side via [`Eval::recv`].

use dioxus::document::Eval;
use dioxus::prelude::*;
use portfolio_core::{watch_reveal, RevealLatch, Section, VisibilitySource};

use crate::context::use_config;

/// Visible fractions of one element, reported by an `IntersectionObserver`.
///
/// Dropping the source drops the eval channel; the script disconnects its
/// observer on its own once the threshold is crossed.
struct ObserverSource {
    eval: Eval,
}

impl ObserverSource {
    fn observe(element_id: &str, threshold: f64) -> Self {
        let script = format!(
            r#"
            const el = document.getElementById("{element_id}");
            if (el) {{
                const observer = new IntersectionObserver((entries) => {{
                    for (const entry of entries) {{
                        dioxus.send(entry.intersectionRatio);
                        if (entry.intersectionRatio >= {threshold}) {{
                            observer.disconnect();
                        }}
                    }}
                }}, {{ threshold: [0, {threshold}] }});
                observer.observe(el);
            }}
            "#
        );
        Self {
            eval: dioxus::document::eval(&script),
        }
    }
}

impl VisibilitySource for ObserverSource {
    async fn next_ratio(&mut self) -> Option<f64> {
        match self.eval.recv::<f64>().await {
            Ok(ratio) => Some(ratio),
            Err(e) => {
                tracing::debug!(error = ?e, "Visibility observer closed");
                None
            }
        }
    }
}

/// One-shot reveal flag for a section.
///
/// Starts `false` and flips to `true` the first time at least the configured
/// fraction of the section root is visible. It never flips back.
pub fn use_reveal(section: Section) -> ReadOnlySignal<bool> {
    let threshold = use_config().reveal_threshold;
    let mut revealed = use_signal(|| false);

    // Runs after mount, so the section root is in the DOM
    use_effect(move || {
        spawn(async move {
            let source = ObserverSource::observe(section.id(), threshold);
            let mut latch = RevealLatch::new(threshold);
            watch_reveal(&mut latch, source, || {
                tracing::info!(section = %section, "Section revealed");
                revealed.set(true);
            })
            .await;
        });
    });

    revealed.into()
}

/// Window scroll offsets, reported on every `scroll` event.
pub struct ScrollWatcher {
    eval: Eval,
}

impl ScrollWatcher {
    pub fn start() -> Self {
        let eval = dioxus::document::eval(
            r#"
            const report = () => dioxus.send(window.scrollY);
            window.addEventListener("scroll", report, { passive: true });
            report();
            "#,
        );
        Self { eval }
    }

    /// Next scroll offset, or `None` once the channel is gone.
    pub async fn next(&mut self) -> Option<f64> {
        self.eval.recv::<f64>().await.ok()
    }
}
