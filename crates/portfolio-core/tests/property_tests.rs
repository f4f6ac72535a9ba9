//! Property-based tests for the effect set, reveal latch and gallery filter.

use proptest::prelude::*;
use portfolio_core::content::PROJECTS;
use portfolio_core::effects::{BASE_RISE, DRIFT_SPREAD, RISE_JITTER};
use portfolio_core::{
    filter_projects, Activation, Category, EffectManager, ExperienceToggle, Point, RevealLatch,
    SequenceRandom, Transition,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn point_strategy() -> impl Strategy<Value = Point> {
    (0.0..4000.0f64, 0.0..4000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn activation_strategy() -> impl Strategy<Value = Activation> {
    prop_oneof![
        3 => point_strategy().prop_map(Activation::Mouse),
        2 => prop::collection::vec(point_strategy(), 0..3).prop_map(Activation::Touch),
    ]
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// Operations on an effect manager
#[derive(Debug, Clone)]
enum EffectOp {
    Activate(Activation),
    Remove(u64),
}

fn effect_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<EffectOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => activation_strategy().prop_map(EffectOp::Activate),
            1 => (0..64u64).prop_map(EffectOp::Remove),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every accepted activation creates exactly one effect with a fresh, larger id
    #[test]
    fn ids_strictly_increase(activations in prop::collection::vec(activation_strategy(), 0..60)) {
        let mut manager = EffectManager::new(SequenceRandom::new([0.3, 0.7]));
        let mut last = None;

        for activation in &activations {
            let before = manager.len();
            match manager.activate(activation) {
                Some(effect) => {
                    prop_assert_eq!(manager.len(), before + 1);
                    if let Some(prev) = last {
                        prop_assert!(effect.id > prev);
                    }
                    last = Some(effect.id);
                }
                None => {
                    prop_assert!(matches!(activation, Activation::Touch(t) if t.is_empty()));
                    prop_assert_eq!(manager.len(), before);
                }
            }
        }
    }

    /// Removal never disturbs the relative order of the survivors
    #[test]
    fn active_set_stays_sorted(ops in effect_ops_strategy(80)) {
        let mut manager = EffectManager::new(SequenceRandom::new([0.5]));
        for op in ops {
            match op {
                EffectOp::Activate(a) => { manager.activate(&a); }
                EffectOp::Remove(id) => { manager.remove(portfolio_core::EffectId(id)); }
            }
            let ids: Vec<_> = manager.active().iter().map(|e| e.id).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(ids, sorted);
        }
    }

    /// Drift stays within the documented bounds for any sample sequence
    #[test]
    fn drift_within_bounds(samples in prop::collection::vec(0.0..1.0f64, 1..16), clicks in 1..30usize) {
        let mut manager = EffectManager::new(SequenceRandom::new(samples));
        for i in 0..clicks {
            let effect = manager.activate(&Activation::Mouse(Point::new(i as f64, 0.0))).unwrap();
            prop_assert!(effect.drift.dx >= -DRIFT_SPREAD && effect.drift.dx < DRIFT_SPREAD);
            prop_assert!(effect.drift.rise >= BASE_RISE && effect.drift.rise < BASE_RISE + RISE_JITTER);
        }
    }

    /// Once revealed, no observation sequence reverts the latch
    #[test]
    fn latch_is_monotonic(ratios in prop::collection::vec(0.0..=1.0f64, 0..50)) {
        let mut latch = RevealLatch::new(0.1);
        let mut latched_count = 0;
        let mut seen_reveal = false;

        for ratio in ratios {
            if latch.observe(ratio) == Transition::Latched {
                latched_count += 1;
            }
            if seen_reveal {
                prop_assert!(latch.is_revealed());
            }
            seen_reveal |= latch.is_revealed();
        }
        prop_assert!(latched_count <= 1);
    }

    /// Filtering equals the predicate applied to the full list, order kept
    #[test]
    fn filter_matches_predicate(category in category_strategy()) {
        let visible: Vec<u32> = filter_projects(PROJECTS, category).iter().map(|p| p.id).collect();
        let expected: Vec<u32> = PROJECTS
            .iter()
            .filter(|p| category == Category::All || p.category == category)
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(visible, expected);
    }

    /// The experience toggle only ever reflects the last button pressed
    #[test]
    fn toggle_reflects_last_press(presses in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut toggle = ExperienceToggle::default();
        for &more in &presses {
            if more { toggle.show_more() } else { toggle.show_less() }
        }
        prop_assert_eq!(toggle.is_expanded(), presses.last().copied().unwrap_or(false));
    }
}
