//! Root document component - the complete HTML page.

use super::{
    BlogSection, ContactSection, Hero, SiteFooter, SiteHeader, SolutionsSection, StatsSection,
    TestimonialsSection, TrustSection, ValueSection,
};
use crate::motion::{MotionSpec, PAGE_FADE};
use crate::styles::PAGE_CSS;
use crate::MotionAssets;
use leptos::prelude::*;

/// The complete HTML document: `<head>` with the inline stylesheet, the
/// ten sections in their fixed order, and the motion runtime scripts at
/// the end of `<body>`. The `#hero` anchor sits on the page shell, which
/// fades in on mount.
#[component]
pub fn PageDocument(
    /// Calendar year for the footer copyright line
    year: i32,
    /// Animation runtime assets (all-empty renders a static page)
    assets: MotionAssets,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Top-Notch Roofing"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <div id="hero" class="page" data-animate=MotionSpec::mount(PAGE_FADE).attr()>
                    <div class="page-backdrop"></div>
                    <SiteHeader />
                    <main class="page-main">
                        <Hero />
                        <TrustSection />
                        <SolutionsSection />
                        <BlogSection />
                        <StatsSection />
                        <ValueSection />
                        <TestimonialsSection />
                        <ContactSection />
                    </main>
                    <SiteFooter year=year />
                </div>
                <MotionScripts assets=assets />
            </body>
        </html>
    }
}

/// Script tags for the motion runtime. Nothing is emitted when no assets
/// are configured; the descriptors then stay inert and the page renders
/// fully static.
#[component]
fn MotionScripts(assets: MotionAssets) -> impl IntoView {
    let inline = match (&assets.wasm_js_glue, &assets.wasm_base64) {
        (Some(glue), Some(wasm)) => Some(format!(
            r#"{glue}
const bytes = Uint8Array.from(atob("{wasm}"), (c) => c.charCodeAt(0));
initSync({{ module: bytes }});"#
        )),
        _ => None,
    };

    view! {
        {(!assets.runtime_path.is_empty()).then(|| view! {
            <script type="module">
                {format!(
                    "import init from \"{}\";\ninit();",
                    assets.runtime_path
                )}
            </script>
        })}
        {inline.map(|script| view! {
            <script type="module">{script}</script>
        })}
    }
}
