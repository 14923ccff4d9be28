//! # topnotch-landing
//!
//! Leptos SSR renderer for the Top-Notch Roofing landing page.
//!
//! The whole page is a tree of [Leptos](https://leptos.dev/) components
//! over hardcoded literal data tables, rendered server-side to one static
//! HTML string. There is no backend, no reactive runtime, and no
//! hydration; the only interactive piece is the optional `motion-wasm`
//! runtime, which reads the `data-animate` descriptors this crate emits
//! and plays the entrance/hover animations in the browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use topnotch_landing::{render_page, PageContext};
//!
//! // Fully static page, no animation runtime
//! let html = render_page(&PageContext::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Fixed year, for reproducible output
//! let html = render_page(&PageContext::new(2024));
//! assert!(html.contains("2024 Top-Notch Roofing"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content data model (nav links, cards, stats, quotes)
//! - [`components`] - the page sections and UI primitives
//! - [`motion`] - declarative animation descriptors
//! - [`styles`] - the inline CSS constant
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait - `view! { ... }` to
//! `to_html()` - with no reactive runtime. The output is a complete,
//! self-contained document.

#![doc(html_root_url = "https://docs.rs/topnotch-landing/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod motion;
pub mod styles;
pub mod types;

use chrono::Datelike;
use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Everything the composer needs that is not a compile-time literal: the
/// calendar year for the footer and the animation-runtime assets.
///
/// The year is injected rather than read inside the renderer, so the
/// composer stays a pure function; [`PageContext::default`] is the single
/// place the ambient clock is consulted.
#[derive(Clone, Debug)]
pub struct PageContext {
    /// Calendar year shown in the footer copyright line.
    pub year: i32,
    /// Animation runtime assets. All-empty keeps the page static.
    pub assets: MotionAssets,
}

impl PageContext {
    /// Context with a fixed year and no animation runtime.
    pub fn new(year: i32) -> Self {
        PageContext {
            year,
            assets: MotionAssets::default(),
        }
    }

    /// Returns a copy with the given runtime assets.
    pub fn with_assets(mut self, assets: MotionAssets) -> Self {
        self.assets = assets;
        self
    }
}

impl Default for PageContext {
    fn default() -> Self {
        PageContext::new(chrono::Local::now().year())
    }
}

/// Assets for the `motion-wasm` animation runtime.
///
/// Either point `runtime_path` at the wasm-pack JS glue (loaded as a
/// module script), or inline the whole runtime via `wasm_base64` +
/// `wasm_js_glue` for a single-file document. Defaults to neither: the
/// descriptors are still emitted but nothing plays them.
///
/// # Example
///
/// ```rust
/// use topnotch_landing::MotionAssets;
///
/// let assets = MotionAssets {
///     runtime_path: "./motion/motion_wasm.js".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Default, Debug)]
pub struct MotionAssets {
    /// Path to the runtime's JS entry point (wasm-pack `--target web`)
    pub runtime_path: String,
    /// Inline WASM module, base64 encoded
    pub wasm_base64: Option<String>,
    /// Inline JS glue for the WASM module
    pub wasm_js_glue: Option<String>,
}

/// Render the complete landing page.
///
/// The one entry point: a pure function from the embedded literal tables
/// and the given context to a complete `<!DOCTYPE html>` document. It
/// cannot fail - there is no I/O and no parsing on the render path.
///
/// # Example
///
/// ```rust
/// use topnotch_landing::{render_page, PageContext};
///
/// let html = render_page(&PageContext::new(2025));
/// assert!(html.contains("Building Strong Roofs"));
/// ```
pub fn render_page(ctx: &PageContext) -> String {
    let doc = view! {
        <PageDocument year=ctx.year assets=ctx.assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> String {
        render_page(&PageContext::new(2024))
    }

    #[test]
    fn renders_complete_document() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Top-Notch Roofing"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn footer_year_is_injected() {
        let html = page();
        assert!(html.contains("2024 Top-Notch Roofing. All rights reserved."));

        let other = render_page(&PageContext::new(1999));
        assert!(other.contains("1999 Top-Notch Roofing. All rights reserved."));
    }

    #[test]
    fn default_context_uses_current_year() {
        let year = chrono::Local::now().year();
        let html = render_page(&PageContext::default());
        assert!(html.contains(&format!("{year} Top-Notch Roofing")));
    }

    #[test]
    fn anchors_present_exactly_once() {
        let html = page();
        for anchor in ["id=\"hero\"", "id=\"solutions\"", "id=\"blog\"", "id=\"contact\""] {
            assert_eq!(html.matches(anchor).count(), 1, "anchor {anchor}");
        }
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let html = page();
        let landmarks = [
            "&amp; Bldr",                                 // header
            "Building Strong Roofs, Building Trust*",     // hero
            "Trusted Roofing Experts for Over 20 Years",  // trust
            "Services tailored to every roofline",        // services
            "Roofing Tips &amp; Industry Updates",        // blog
            "Square feet protected",                      // stats
            "Keeping Roofs Strong for Generations",       // value
            "Loved by Businesses, Trusted by Professionals", // testimonials
            "Need a New Roof or Quick Repair?",           // contact
            "Top-Notch Roofing, Lasting Results*",        // footer
        ];
        let mut last = 0;
        for landmark in landmarks {
            let pos = html.find(landmark).unwrap_or_else(|| panic!("missing {landmark}"));
            assert!(pos > last, "{landmark} out of order");
            last = pos;
        }
    }

    #[test]
    fn services_grid_has_three_cards_in_order() {
        let html = page();
        let a = html.find("Installation &amp; Repair").unwrap();
        let b = html.find("Emergency Response").unwrap();
        let c = html.find("Maintenance Programs").unwrap();
        assert!(a < b && b < c);
        assert_eq!(html.matches("class=\"solution-card\"").count(), 3);
    }

    #[test]
    fn blog_grid_has_three_dated_posts() {
        let html = page();
        assert_eq!(html.matches("class=\"blog-card\"").count(), 3);
        for (date, read_time) in [
            ("Dec 15, 2024", "5 min read"),
            ("Nov 28, 2024", "8 min read"),
            ("Nov 12, 2024", "6 min read"),
        ] {
            assert!(html.contains(date));
            assert!(html.contains(read_time));
        }
    }

    #[test]
    fn nav_marks_contact_active() {
        let html = page();
        assert_eq!(html.matches("nav-link-active").count(), 1);
        let active = html.find("nav-link-active").unwrap();
        let contact = html[active..].find("Contact").unwrap();
        assert!(contact < 120, "active class not on the Contact link");
    }

    #[test]
    fn testimonial_fallback_initials_render() {
        let html = page();
        for fallback in ["JP", "CR", "EW"] {
            assert!(html.contains(&format!(
                "<span class=\"avatar-fallback\">{fallback}</span>"
            )));
        }
    }

    #[test]
    fn hero_rating_renders_five_filled_stars() {
        let html = page();
        // 4.9 in the hero rounds to 5 filled; 4.8 on the float card too;
        // trust's 4.5 rounds half-up to 5 as well, so the whole page has
        // no outline stars.
        assert_eq!(html.matches("star-icon filled").count(), 15);
        assert_eq!(html.matches("star-icon outline").count(), 0);
    }

    #[test]
    fn descriptors_present_but_no_scripts_by_default() {
        let html = page();
        assert!(html.contains("data-animate"));
        // Attribute values are HTML-escaped, so the JSON quotes arrive as
        // &quot;
        assert!(html.contains("&quot;trigger&quot;:&quot;mount&quot;"));
        assert!(html.contains("&quot;once&quot;:true"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn runtime_path_emits_module_script() {
        let ctx = PageContext::new(2024).with_assets(MotionAssets {
            runtime_path: "./motion/motion_wasm.js".into(),
            ..Default::default()
        });
        let html = render_page(&ctx);
        assert!(html.contains("<script type=\"module\">"));
        assert!(html.contains("./motion/motion_wasm.js"));
    }

    #[test]
    fn hover_specs_only_on_services_and_blog_cards() {
        let html = page();
        assert_eq!(html.matches("&quot;hover&quot;").count(), 6);
    }
}
