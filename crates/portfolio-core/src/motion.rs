//! Entrance animation presets gated on a section's reveal latch.
//!
//! A consumer picks an [`Entrance`] and renders `entrance.style(revealed)`;
//! the stylesheet transitions between the two states. Elements that can
//! mount after the reveal use `entrance.animation(revealed)` instead.

/// Delay for the `index`-th element of a staggered group (seconds).
pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

/// Where an element starts before its section is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Slide up from below by this many px
    Rise(f64),
    /// Slide in horizontally (negative = from the left)
    Slide(f64),
    /// Grow from this scale
    Scale(f64),
    /// Fade only
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset: Offset,
    /// Seconds
    pub duration: f64,
    /// Seconds
    pub delay: f64,
}

impl Entrance {
    pub const fn new(offset: Offset, duration: f64) -> Self {
        Self {
            offset,
            duration,
            delay: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Section headers: rise 30px over 0.8s
    pub const fn header() -> Self {
        Self::new(Offset::Rise(30.0), 0.8)
    }

    /// Inline CSS for the hidden or revealed state.
    ///
    /// Uses a transition, so it only animates an element that was rendered
    /// hidden first.
    pub fn style(&self, revealed: bool) -> String {
        let transition = format!(
            "transition: opacity {d}s ease-out {l}s, transform {d}s ease-out {l}s;",
            d = self.duration,
            l = self.delay
        );
        if revealed {
            return format!("opacity: 1; transform: none; {}", transition);
        }
        format!(
            "opacity: {}; transform: {}; {}",
            self.from_opacity(),
            self.from_transform(),
            transition
        )
    }

    /// Keyframe variant of [`style`](Self::style).
    ///
    /// Plays the `entrance` keyframes from the global stylesheet, so an
    /// element mounted after its section was revealed still animates in.
    pub fn animation(&self, revealed: bool) -> String {
        if !revealed {
            return format!(
                "opacity: {}; transform: {};",
                self.from_opacity(),
                self.from_transform()
            );
        }
        format!(
            "--entrance-opacity: {}; --entrance-from: {}; animation: entrance {}s ease-out {}s both;",
            self.from_opacity(),
            self.from_transform(),
            self.duration,
            self.delay
        )
    }

    fn from_transform(&self) -> String {
        match self.offset {
            Offset::Rise(px) => format!("translateY({}px)", px),
            Offset::Slide(px) => format!("translateX({}px)", px),
            Offset::Scale(s) => format!("scale({})", s),
            Offset::None => "none".to_string(),
        }
    }

    fn from_opacity(&self) -> u8 {
        match self.offset {
            // Scale-ins stay opaque, matching the stat tiles
            Offset::Scale(_) => 1,
            _ => 0,
        }
    }
}

/// Skill bar fill: 0% until revealed, then the skill level.
pub fn bar_fill_style(level: u8, revealed: bool, delay: f64) -> String {
    let width = if revealed { level } else { 0 };
    format!(
        "width: {}%; transition: width 1s ease-out {}s;",
        width, delay
    )
}

/// Per-group timings
pub mod timing {
    /// Project cards: 0.1s apart
    pub const PROJECT_STEP: f64 = 0.1;
    /// Skill categories: 0.2s apart
    pub const SKILL_CATEGORY_STEP: f64 = 0.2;
    /// Skill bars start at 0.5s, 0.1s apart
    pub const SKILL_BAR_BASE: f64 = 0.5;
    pub const SKILL_BAR_STEP: f64 = 0.1;
    /// Tag cloud starts at 1.0s, 0.05s apart
    pub const TAG_BASE: f64 = 1.0;
    pub const TAG_STEP: f64 = 0.05;
    /// Timeline entries start at 0.6s, 0.2s apart
    pub const TIMELINE_BASE: f64 = 0.6;
    pub const TIMELINE_STEP: f64 = 0.2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_linear() {
        assert_eq!(stagger(0.0, 0.1, 0), 0.0);
        assert!((stagger(0.5, 0.1, 3) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn hidden_header_is_offset_and_transparent() {
        let style = Entrance::header().style(false);
        assert!(style.starts_with("opacity: 0; transform: translateY(30px);"));
    }

    #[test]
    fn revealed_clears_transform() {
        let style = Entrance::new(Offset::Slide(-30.0), 0.8)
            .with_delay(0.2)
            .style(true);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("0.8s ease-out 0.2s"));
    }

    #[test]
    fn scale_entrance_stays_opaque() {
        let style = Entrance::new(Offset::Scale(0.0), 0.5).style(false);
        assert!(style.starts_with("opacity: 1; transform: scale(0);"));
    }

    #[test]
    fn animation_hidden_until_revealed() {
        let card = Entrance::new(Offset::Rise(30.0), 0.6).with_delay(0.2);
        assert_eq!(card.animation(false), "opacity: 0; transform: translateY(30px);");
        assert!(!card.animation(false).contains("animation"));
    }

    #[test]
    fn animation_plays_keyframes_with_delay() {
        let style = Entrance::new(Offset::Rise(30.0), 0.6)
            .with_delay(0.2)
            .animation(true);
        assert!(style.contains("--entrance-opacity: 0;"));
        assert!(style.contains("--entrance-from: translateY(30px);"));
        assert!(style.ends_with("animation: entrance 0.6s ease-out 0.2s both;"));
        // No static end state: the keyframes own opacity and transform
        assert!(!style.starts_with("opacity"));
    }

    #[test]
    fn bar_fill_follows_reveal() {
        assert!(bar_fill_style(90, false, 0.5).starts_with("width: 0%;"));
        assert!(bar_fill_style(90, true, 0.5).starts_with("width: 90%;"));
    }
}
