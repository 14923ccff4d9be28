//! UI primitive kit: button, card, badge, avatar, separator, figure.
//!
//! These are the opaque building blocks the sections compose. Each takes
//! content plus a small set of visual-variant flags and renders a plain
//! HTML box; none of them owns data or behavior.

use crate::types::initials;
use leptos::prelude::*;

/// Button fill style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid dark background, the default call-to-action look.
    Filled,
    /// Transparent background with a visible border.
    Outline,
    /// No background or border, text only.
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Filled => "btn-filled",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button size step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact, used in the header and floating cards.
    Sm,
    /// Default.
    Md,
    /// Prominent, used for the hero and contact calls to action.
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// Pill-shaped button.
#[component]
pub fn Button(
    /// Fill style
    #[prop(default = ButtonVariant::Filled)]
    variant: ButtonVariant,
    /// Size step
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = format!("btn {} {} {}", variant.class(), size.class(), class);
    view! {
        <button class=class.trim_end().to_string()>{children()}</button>
    }
}

/// Rounded content box with an optional extra class.
#[component]
pub fn Card(
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {class}").trim_end().to_string()>{children()}</div>
    }
}

/// Card title/description slot.
#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card-header">{children()}</div> }
}

/// Card title line.
#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h3 class="card-title">{children()}</h3> }
}

/// Muted line under the title.
#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="card-description">{children()}</p> }
}

/// Card body slot.
#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

/// Small rounded label.
#[component]
pub fn Badge(
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge {class}").trim_end().to_string()>{children()}</span>
    }
}

/// Round portrait with fallback initials.
///
/// The image sits on top of the initials; if it never loads, the initials
/// derived from `name` stay visible underneath. No load-state tracking.
#[component]
pub fn Avatar(
    /// Portrait URL
    src: &'static str,
    /// Person's name, used for alt text and fallback initials
    name: &'static str,
) -> impl IntoView {
    view! {
        <span class="avatar">
            <span class="avatar-fallback">{initials(name)}</span>
            <img class="avatar-image" src=src alt=name loading="lazy" />
        </span>
    }
}

/// Thin dividing line.
#[component]
pub fn Separator(
    /// When true the line runs vertically
    #[prop(default = false)]
    vertical: bool,
) -> impl IntoView {
    let class = if vertical {
        "separator separator-vertical"
    } else {
        "separator"
    };
    view! { <div class=class role="separator"></div> }
}

/// Image region: either fills its positioned container or renders at a
/// fixed size. Loading, caching, and failure are the browser's problem;
/// the surrounding layout never depends on the image resolving.
#[component]
pub fn Figure(
    /// Image URL
    src: &'static str,
    /// Alt text
    alt: &'static str,
    /// When true the image covers its container; otherwise `width`/`height`
    /// apply
    #[prop(default = true)]
    fill: bool,
    /// Fixed width in pixels (ignored when `fill`)
    #[prop(default = 0)]
    width: u32,
    /// Fixed height in pixels (ignored when `fill`)
    #[prop(default = 0)]
    height: u32,
) -> impl IntoView {
    if fill {
        view! { <img class="figure figure-fill" src=src alt=alt loading="lazy" /> }.into_any()
    } else {
        view! {
            <img
                class="figure"
                src=src
                alt=alt
                width=width.to_string()
                height=height.to_string()
                loading="lazy"
            />
        }
        .into_any()
    }
}
