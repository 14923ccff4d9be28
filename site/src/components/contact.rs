//! Contact call-to-action.

use super::ui::{Button, ButtonSize, ButtonVariant};
use crate::motion::{MotionSpec, CONTACT_RISE};
use leptos::prelude::*;

/// `#contact` anchor: heading, copy, the white "Need a new roof?" pill,
/// and the quote / explore buttons. Rises in once at 30% visibility.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section
            id="contact"
            class="contact"
            data-animate=MotionSpec::in_view(CONTACT_RISE, 0.3).attr()
        >
            <div class="contact-glow"></div>
            <div class="contact-grid">
                <div class="contact-copy">
                    <h2 class="section-title">"Need a New Roof or Quick Repair?"</h2>
                    <p class="section-copy">
                        "Tell us about your project and a project specialist will reach out within one business day."
                    </p>
                    <div class="contact-pill">
                        <div>
                            <p class="contact-pill-title">"Need a new roof?"</p>
                            <p class="contact-pill-copy">"We are ready when you are."</p>
                        </div>
                    </div>
                </div>
                <div class="contact-actions">
                    <Button size=ButtonSize::Lg>"Get a quote"</Button>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Lg>
                        "Explore services"
                    </Button>
                </div>
            </div>
        </section>
    }
}
