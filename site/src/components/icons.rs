//! SVG icon components.
//!
//! The page uses a four-glyph vocabulary (arrow, check-circle, phone, star)
//! rendered as inline stroke-based SVGs, so the document stays a single
//! self-contained file with no font or sprite requests.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_ARROW_RIGHT size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "16")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// Five-pointed star. Filled stars paint the glyph with the current color;
/// outline stars keep a thin stroke only, matching the rating indicator's
/// two visual variants.
#[component]
pub fn StarIcon(
    /// Whether the star is painted solid
    filled: bool,
    /// Icon size in pixels
    #[prop(default = "16")]
    size: &'static str,
) -> impl IntoView {
    let (fill, stroke_width, class) = if filled {
        ("currentColor", "0", "star-icon filled")
    } else {
        ("none", "1.5", "star-icon outline")
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=fill
            stroke="currentColor"
            stroke-width=stroke_width
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            class=class
        >
            <path d=ICON_STAR></path>
        </svg>
    }
}

/// Right-pointing arrow
pub const ICON_ARROW_RIGHT: &str = "M5 12h14 M12 5l7 7-7 7";

/// Check mark inside a circle
pub const ICON_CHECK_CIRCLE: &str =
    "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20 M9 12l2 2 4-4";

/// Telephone handset
pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

/// Five-pointed star, shared by the filled and outline variants
pub const ICON_STAR: &str =
    "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";
