//! Click effects: short-lived ghosts spawned at pointer activations.
//!
//! [`EffectManager`] owns the active set and is pure state. [`EffectLayer`]
//! wraps it for the running app: it schedules each effect's removal on the
//! tokio runtime and publishes a revision counter so the view can re-render.
//!
//! ```text
//! click/touch ──▶ Activation ──▶ activate() ──▶ Effect { id, origin, drift }
//!                                     │
//!                                     └── sleep(lifetime) ──▶ remove(id)
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::random::{RandomSource, ThreadRandom};

/// Glyph rendered for each effect
pub const EFFECT_GLYPH: &str = "\u{1F47B}";

/// Half the rendered glyph size, used to centre it on the activation point
pub const GLYPH_HALF_SIZE: f64 = 12.0;

/// Horizontal drift is uniform in `[-DRIFT_SPREAD, DRIFT_SPREAD)`
pub const DRIFT_SPREAD: f64 = 50.0;

/// Minimum upward travel (px)
pub const BASE_RISE: f64 = 100.0;

/// Extra upward travel, uniform in `[0, RISE_JITTER)`
pub const RISE_JITTER: f64 = 50.0;

/// Scale at the end of the animation
pub const FINAL_SCALE: f64 = 0.8;

/// A point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A pointer activation as delivered by the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Mouse click at a client position
    Mouse(Point),
    /// Touch start with the active touch list
    Touch(Vec<Point>),
}

impl Activation {
    /// Activation point, or `None` for a touch with no contacts.
    pub fn point(&self) -> Option<Point> {
        match self {
            Activation::Mouse(p) => Some(*p),
            Activation::Touch(touches) => touches.first().copied(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-effect animation target, rolled once at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Horizontal offset at the end of the animation
    pub dx: f64,
    /// Upward travel at the end of the animation (positive = up)
    pub rise: f64,
}

impl Drift {
    pub fn roll(random: &mut impl RandomSource) -> Self {
        Self {
            dx: random.next_range(-DRIFT_SPREAD, DRIFT_SPREAD),
            rise: BASE_RISE + random.next_range(0.0, RISE_JITTER),
        }
    }
}

/// One transient effect. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub id: EffectId,
    pub origin: Point,
    pub drift: Drift,
}

impl Effect {
    /// Top-left corner of the glyph box so the glyph is centred on `origin`.
    pub fn anchor(&self) -> Point {
        Point::new(self.origin.x - GLYPH_HALF_SIZE, self.origin.y - GLYPH_HALF_SIZE)
    }

    /// Inline style for the overlay element.
    ///
    /// The keyframes live in the global stylesheet and read the custom
    /// properties set here.
    pub fn style(&self, lifetime: Duration) -> String {
        let anchor = self.anchor();
        format!(
            "left: {:.1}px; top: {:.1}px; --drift-x: {:.1}px; --rise: {:.1}px; --end-scale: {}; animation-duration: {}ms;",
            anchor.x,
            anchor.y,
            self.drift.dx,
            self.drift.rise,
            FINAL_SCALE,
            lifetime.as_millis()
        )
    }
}

/// Owns the active effect set.
#[derive(Debug)]
pub struct EffectManager<R = ThreadRandom> {
    next_id: u64,
    active: Vec<Effect>,
    random: R,
}

impl Default for EffectManager<ThreadRandom> {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}

impl<R: RandomSource> EffectManager<R> {
    pub fn new(random: R) -> Self {
        Self {
            next_id: 0,
            active: Vec::new(),
            random,
        }
    }

    /// Create an effect for an activation.
    ///
    /// Returns `None` (and allocates no id) for a touch without contacts.
    pub fn activate(&mut self, activation: &Activation) -> Option<Effect> {
        let origin = activation.point()?;
        let id = EffectId(self.next_id);
        self.next_id += 1;

        let effect = Effect {
            id,
            origin,
            drift: Drift::roll(&mut self.random),
        };
        self.active.push(effect.clone());
        tracing::trace!(id = id.0, x = origin.x, y = origin.y, "Effect spawned");
        Some(effect)
    }

    /// Remove an effect by id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: EffectId) -> bool {
        let before = self.active.len();
        self.active.retain(|e| e.id != id);
        before != self.active.len()
    }

    /// Active effects in creation order.
    pub fn active(&self) -> &[Effect] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Shared, timer-driven handle over an [`EffectManager`].
///
/// Cloning shares the same active set. Must be used from inside a tokio
/// runtime because removals are spawned as tasks.
pub struct EffectLayer<R = ThreadRandom> {
    manager: Arc<Mutex<EffectManager<R>>>,
    lifetime: Duration,
    revision: Arc<watch::Sender<u64>>,
}

impl<R> Clone for EffectLayer<R> {
    fn clone(&self) -> Self {
        Self {
            manager: Arc::clone(&self.manager),
            lifetime: self.lifetime,
            revision: Arc::clone(&self.revision),
        }
    }
}

impl<R: RandomSource + Send + 'static> EffectLayer<R> {
    pub fn new(random: R, lifetime: Duration) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            manager: Arc::new(Mutex::new(EffectManager::new(random))),
            lifetime,
            revision: Arc::new(revision),
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Spawn an effect and schedule its removal after the lifetime.
    pub fn activate(&self, activation: &Activation) -> Option<Effect> {
        let effect = self.manager.lock().activate(activation)?;
        self.bump();

        let id = effect.id;
        let manager = Arc::clone(&self.manager);
        let revision = Arc::clone(&self.revision);
        let deadline = tokio::time::Instant::now() + self.lifetime;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let removed = manager.lock().remove(id);
            if removed {
                revision.send_modify(|r| *r = r.wrapping_add(1));
            }
        });

        Some(effect)
    }

    /// Copy of the active set in creation order.
    pub fn snapshot(&self) -> Vec<Effect> {
        self.manager.lock().active().to_vec()
    }

    pub fn len(&self) -> usize {
        self.manager.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.manager.lock().is_empty()
    }

    /// Receiver that changes whenever the active set changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r = r.wrapping_add(1));
    }
}
