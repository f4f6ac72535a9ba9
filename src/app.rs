use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use portfolio_core::{Activation, EffectLayer, Point, ThreadRandom};

use crate::components::{About, Contact, EffectOverlay, Footer, Hero, Navbar, Projects, Skills};
use crate::context::get_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, config and the click-effect layer. Every click or
/// touch inside the root bubbles up here and spawns an effect; handlers never
/// stop propagation or prevent defaults, so the page behaves as usual.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_config);
    let effects = use_context_provider(|| EffectLayer::new(ThreadRandom, config.effect_lifetime()));

    let on_click = {
        let effects = effects.clone();
        move |evt: MouseEvent| {
            let at = evt.client_coordinates();
            effects.activate(&Activation::Mouse(Point::new(at.x, at.y)));
        }
    };
    let on_touch = {
        let effects = effects.clone();
        move |evt: TouchEvent| {
            let touches = evt
                .touches()
                .iter()
                .map(|t| {
                    let at = t.client_coordinates();
                    Point::new(at.x, at.y)
                })
                .collect();
            effects.activate(&Activation::Touch(touches));
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app-root",
            onclick: on_click,
            ontouchstart: on_touch,
            Navbar {}
            main {
                Hero {}
                About {}
                Projects {}
                Skills {}
                Contact {}
            }
            Footer {}
        }
        EffectOverlay {}
    }
}
