//! Effect Overlay Component
//!
//! Fixed, click-through layer that renders the active click effects. The set
//! itself lives in the shared `EffectLayer`; this component only mirrors its
//! snapshot whenever the layer's revision changes.

use dioxus::prelude::*;
use portfolio_core::effects::EFFECT_GLYPH;
use portfolio_core::Effect;

use crate::context::use_effects;

#[component]
pub fn EffectOverlay() -> Element {
    let layer = use_effects();
    let lifetime = layer.lifetime();
    let mut active: Signal<Vec<Effect>> = use_signal(Vec::new);

    use_future(move || {
        let layer = layer.clone();
        async move {
            let mut revision = layer.subscribe();
            loop {
                active.set(layer.snapshot());
                if revision.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    rsx! {
        div { class: "effect-layer", "aria-hidden": "true",
            for effect in active.read().iter() {
                div {
                    key: "{effect.id}",
                    class: "click-effect",
                    style: "{effect.style(lifetime)}",
                    "{EFFECT_GLYPH}"
                }
            }
        }
    }
}
