//! Footer with the computed copyright year.

use super::ui::{Button, Separator};
use crate::motion::{MotionSpec, FOOTER_RISE};
use leptos::prelude::*;

const FOOTER_LINKS: &[&str] = &["Privacy", "Terms", "Careers"];

/// Dark footer: heading, copy, "Schedule inspection" button, separator,
/// copyright line with the injected year, and the legal links. The year is
/// the only non-literal value on the page; it arrives via `PageContext`
/// rather than being read from the clock here.
#[component]
pub fn SiteFooter(
    /// Calendar year shown in the copyright line
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="site-footer" data-animate=MotionSpec::in_view(FOOTER_RISE, 0.3).attr()>
            <div class="footer-inner">
                <div class="footer-top">
                    <div>
                        <h3 class="footer-title">"Top-Notch Roofing, Lasting Results*"</h3>
                        <p class="footer-copy">
                            "Premium materials, precise installation, and proactive care\u{2014}that is how we protect what matters most."
                        </p>
                    </div>
                    <Button class="footer-cta">"Schedule inspection"</Button>
                </div>
                <Separator />
                <div class="footer-bottom">
                    <p class="footer-legal">
                        {format!("\u{a9} {year} Top-Notch Roofing. All rights reserved.")}
                    </p>
                    <div class="footer-links">
                        {FOOTER_LINKS.iter().map(|label| {
                            view! { <a href="#" class="footer-link">{*label}</a> }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
