//! Declarative motion descriptors.
//!
//! Every animated element on the page carries a [`MotionSpec`] serialized
//! into its `data-animate` attribute. The composer only *declares* motion -
//! initial state, target state, transition, trigger - as plain immutable
//! values; the `motion-wasm` runtime (or any other consumer of the
//! attribute) owns timing and playback and is never queried back.
//!
//! Presets are named constants rather than shared mutable objects, so two
//! sections using [`SECTION_REVEAL`] cannot observe each other. Staggered
//! grids derive per-card delays with [`MotionSpec::staggered`] instead of
//! container-level stagger configuration.
//!
//! # Example
//!
//! ```rust
//! use topnotch_landing::motion::{MotionSpec, CARD_RISE, CARD_HOVER};
//!
//! let spec = MotionSpec::in_view(CARD_RISE, 0.3)
//!     .staggered(2, 0.1)
//!     .with_hover(CARD_HOVER);
//! let json = spec.attr();
//! assert!(json.contains("\"once\":true"));
//! ```

use serde::{Deserialize, Serialize};

/// Visual properties an element animates between.
///
/// Unset axes are left untouched by the runtime, so a hover state that only
/// sets `y` composes with whatever opacity the entrance left behind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Opacity in `0.0..=1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Horizontal offset in CSS pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Vertical offset in CSS pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Uniform scale factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    /// Rotation in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f32>,
}

impl MotionState {
    /// The empty state: no axis set.
    pub const NONE: MotionState = MotionState {
        opacity: None,
        x: None,
        y: None,
        scale: None,
        rotate: None,
    };

    /// Returns a copy with `opacity` set.
    pub const fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Returns a copy with the horizontal offset set.
    pub const fn x(mut self, value: f32) -> Self {
        self.x = Some(value);
        self
    }

    /// Returns a copy with the vertical offset set.
    pub const fn y(mut self, value: f32) -> Self {
        self.y = Some(value);
        self
    }

    /// Returns a copy with the scale factor set.
    pub const fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    /// Returns a copy with the rotation set.
    pub const fn rotate(mut self, value: f32) -> Self {
        self.rotate = Some(value);
        self
    }

    /// CSS `transform` value for this state, if any transform axis is set.
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(x) = self.x {
            parts.push(format!("translateX({x}px)"));
        }
        if let Some(y) = self.y {
            parts.push(format!("translateY({y}px)"));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({scale})"));
        }
        if let Some(rotate) = self.rotate {
            parts.push(format!("rotate({rotate}deg)"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Timing curve of a transition. Serialized with the CSS timing-function
/// names so the payload maps 1:1 onto `transition-timing-function`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Decelerating curve, used for entrances.
    EaseOut,
    /// Symmetric curve, used for the reversible hover lift.
    EaseInOut,
}

impl Easing {
    /// CSS `transition-timing-function` keyword.
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// How an element moves from one state to another.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Duration in seconds.
    pub duration: f32,
    /// Delay before the transition starts, in seconds.
    pub delay: f32,
    /// Timing curve.
    pub ease: Easing,
}

impl Transition {
    /// Ease-out transition with no delay.
    pub const fn ease_out(duration: f32) -> Self {
        Transition {
            duration,
            delay: 0.0,
            ease: Easing::EaseOut,
        }
    }

    /// Ease-in-out transition with no delay.
    pub const fn ease_in_out(duration: f32) -> Self {
        Transition {
            duration,
            delay: 0.0,
            ease: Easing::EaseInOut,
        }
    }

    /// Returns a copy that starts after `delay` seconds.
    pub const fn after(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// CSS `transition` value covering the two animated properties.
    pub fn css(&self) -> String {
        let Transition {
            duration,
            delay,
            ease,
        } = self;
        let ease = ease.css();
        format!("opacity {duration}s {ease} {delay}s, transform {duration}s {ease} {delay}s")
    }
}

/// A named entrance: initial state, target state, transition. A pure value;
/// attaching the same preset to two elements shares nothing at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionPreset {
    /// State applied before the trigger fires.
    pub initial: MotionState,
    /// State transitioned to when the trigger fires.
    pub target: MotionState,
    /// How to travel between the two.
    pub transition: Transition,
}

/// What starts an entrance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    /// Fire as soon as the element is attached to the document.
    Mount,
    /// Fire the first time the element is sufficiently visible.
    InView {
        /// Visibility fraction that must be reached (`0.0..=1.0`).
        amount: f32,
        /// When true the entrance never re-triggers after firing.
        once: bool,
    },
}

/// Reversible hover state, distinct from the entrance. Entering hover
/// transitions to `target`; leaving transitions back to the entrance
/// target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hover {
    /// State while hovered.
    pub target: MotionState,
    /// Transition used in both directions.
    pub transition: Transition,
}

/// Complete motion descriptor for one element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionSpec {
    /// The entrance.
    pub preset: MotionPreset,
    /// What starts the entrance.
    pub trigger: Trigger,
    /// Optional hover sub-cycle.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hover: Option<Hover>,
}

impl MotionSpec {
    /// Entrance that plays on mount.
    pub const fn mount(preset: MotionPreset) -> Self {
        MotionSpec {
            preset,
            trigger: Trigger::Mount,
            hover: None,
        }
    }

    /// Entrance that plays once the element is `amount` visible, exactly
    /// once.
    pub const fn in_view(preset: MotionPreset, amount: f32) -> Self {
        MotionSpec {
            preset,
            trigger: Trigger::InView { amount, once: true },
            hover: None,
        }
    }

    /// Adds a reversible hover state.
    pub fn with_hover(mut self, hover: Hover) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Postpones the entrance by `index * step` seconds. Grids use this to
    /// ripple their cards without sharing stagger state.
    pub fn staggered(mut self, index: usize, step: f32) -> Self {
        self.preset.transition.delay += index as f32 * step;
        self
    }

    /// The `data-animate` attribute payload.
    pub fn attr(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".into())
    }
}

/// Delay step between neighbouring cards of a staggered grid, in seconds.
pub const STAGGER_STEP: f32 = 0.1;

/// Full-page fade applied to the document body on mount.
pub const PAGE_FADE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0),
    target: MotionState::NONE.opacity(1.0),
    transition: Transition::ease_out(0.5),
};

/// Header drops in from just above its resting position.
pub const HEADER_DROP: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(-20.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.6),
};

/// Hero panel rises while fading in.
pub const HERO_RISE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(50.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.8),
};

/// Hero badge slides in from the left, after the panel has started.
pub const BADGE_SLIDE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).x(-20.0),
    target: MotionState::NONE.opacity(1.0).x(0.0),
    transition: Transition::ease_out(0.6).after(0.3),
};

/// Hero headline rise.
pub const TITLE_RISE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(30.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.8).after(0.4),
};

/// Hero sub-copy rise.
pub const COPY_RISE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(20.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.6).after(0.6),
};

/// Hero call-to-action rise, last of the mount sequence.
pub const CTA_RISE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(20.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.6).after(0.8),
};

/// Whole-section fade used by the viewport-triggered sections.
pub const SECTION_REVEAL: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0),
    target: MotionState::NONE.opacity(1.0),
    transition: Transition::ease_out(0.5),
};

/// Small rise for items inside a revealed section.
pub const ITEM_RISE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(20.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.5),
};

/// Card entrance for the services and blog grids.
pub const CARD_RISE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(30.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.6),
};

/// Reversible lift while a card is hovered.
pub const CARD_HOVER: Hover = Hover {
    target: MotionState::NONE.y(-8.0),
    transition: Transition::ease_in_out(0.3),
};

/// Contact call-to-action entrance.
pub const CONTACT_RISE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(30.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.8),
};

/// Footer entrance.
pub const FOOTER_RISE: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).y(20.0),
    target: MotionState::NONE.opacity(1.0).y(0.0),
    transition: Transition::ease_out(0.8),
};

/// Star-rating row pops from slightly shrunken to full size.
pub const STAR_POP: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).scale(0.8),
    target: MotionState::NONE.opacity(1.0).scale(1.0),
    transition: Transition::ease_out(0.3).after(0.5),
};

/// Individual stars spin upright one after another (staggered per star).
pub const STAR_SPIN: MotionPreset = MotionPreset {
    initial: MotionState::NONE.opacity(0.0).rotate(-180.0),
    target: MotionState::NONE.opacity(1.0).rotate(0.0),
    transition: Transition::ease_out(0.3).after(0.7),
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hero_rise_matches_documented_values() {
        assert_eq!(HERO_RISE.initial.y, Some(50.0));
        assert_eq!(HERO_RISE.initial.opacity, Some(0.0));
        assert_eq!(HERO_RISE.target.y, Some(0.0));
        assert_eq!(HERO_RISE.transition.duration, 0.8);
        assert_eq!(HERO_RISE.transition.ease, Easing::EaseOut);
    }

    #[test]
    fn easing_serializes_as_css_keyword() {
        let json = serde_json::to_string(&Easing::EaseInOut).unwrap();
        assert_eq!(json, "\"ease-in-out\"");
        assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
    }

    #[test]
    fn spec_round_trips_through_json() {
        let spec = MotionSpec::in_view(CARD_RISE, 0.2)
            .staggered(1, STAGGER_STEP)
            .with_hover(CARD_HOVER);
        let json = spec.attr();
        let parsed: MotionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn mount_trigger_serializes_as_bare_string() {
        let json = MotionSpec::mount(PAGE_FADE).attr();
        assert!(json.contains("\"trigger\":\"mount\""));
        assert!(!json.contains("hover"));
    }

    #[test]
    fn in_view_carries_amount_and_once() {
        let json = MotionSpec::in_view(SECTION_REVEAL, 0.3).attr();
        assert!(json.contains("\"in-view\""));
        assert!(json.contains("\"amount\":0.3"));
        assert!(json.contains("\"once\":true"));
    }

    #[test]
    fn staggered_accumulates_delay() {
        let spec = MotionSpec::mount(STAR_SPIN).staggered(3, STAGGER_STEP);
        let expected = 0.7 + 3.0 * STAGGER_STEP;
        assert!((spec.preset.transition.delay - expected).abs() < 1e-6);
    }

    #[test]
    fn transform_combines_set_axes_in_order() {
        let state = MotionState::NONE.x(4.0).y(-8.0).scale(1.5).rotate(-180.0);
        assert_eq!(
            state.transform().unwrap(),
            "translateX(4px) translateY(-8px) scale(1.5) rotate(-180deg)"
        );
        assert_eq!(MotionState::NONE.opacity(1.0).transform(), None);
    }

    #[test]
    fn transition_css_covers_opacity_and_transform() {
        let css = Transition::ease_out(0.6).after(0.3).css();
        assert_eq!(css, "opacity 0.6s ease-out 0.3s, transform 0.6s ease-out 0.3s");
    }
}
