//! Removal timing of click effects under a paused tokio clock.

use std::time::Duration;

use portfolio_core::{Activation, EffectId, EffectLayer, Point, SequenceRandom};

const LIFETIME: Duration = Duration::from_millis(2000);

fn layer() -> EffectLayer<SequenceRandom> {
    EffectLayer::new(SequenceRandom::new([0.1, 0.9, 0.5]), LIFETIME)
}

fn click(x: f64, y: f64) -> Activation {
    Activation::Mouse(Point::new(x, y))
}

/// Let spawned removal tasks run.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

#[tokio::test(start_paused = true)]
async fn effect_removed_at_lifetime_not_before() {
    let layer = layer();
    layer.activate(&click(10.0, 10.0)).unwrap();
    settle().await;

    advance_ms(1999).await;
    assert_eq!(layer.len(), 1, "removed before its lifetime");

    advance_ms(1).await;
    assert!(layer.is_empty(), "still present after its lifetime");
}

#[tokio::test(start_paused = true)]
async fn timers_are_independent() {
    let layer = layer();
    let first = layer.activate(&click(0.0, 0.0)).unwrap();
    advance_ms(500).await;
    let second = layer.activate(&click(5.0, 5.0)).unwrap();

    advance_ms(1500).await;
    let ids: Vec<EffectId> = layer.snapshot().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second.id]);
    assert!(first.id < second.id);

    advance_ms(500).await;
    assert!(layer.is_empty());
}

#[tokio::test(start_paused = true)]
async fn empty_touch_spawns_nothing() {
    let layer = layer();
    assert!(layer.activate(&Activation::Touch(vec![])).is_none());
    assert!(layer.is_empty());

    let touch = Activation::Touch(vec![Point::new(40.0, 60.0)]);
    let effect = layer.activate(&touch).unwrap();
    assert_eq!(effect.origin, Point::new(40.0, 60.0));
}

#[tokio::test(start_paused = true)]
async fn revision_changes_on_spawn_and_removal() {
    let layer = layer();
    let mut rx = layer.subscribe();
    let start = *rx.borrow_and_update();

    layer.activate(&click(1.0, 1.0)).unwrap();
    assert!(rx.has_changed().unwrap());
    let after_spawn = *rx.borrow_and_update();
    assert_eq!(after_spawn, start + 1);

    advance_ms(2000).await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), after_spawn + 1);
}

#[tokio::test(start_paused = true)]
async fn many_clicks_all_expire() {
    let layer = layer();
    for i in 0..50 {
        layer.activate(&click(i as f64, i as f64)).unwrap();
        advance_ms(10).await;
    }
    assert!(!layer.is_empty());

    advance_ms(2000).await;
    assert!(layer.is_empty());
}
