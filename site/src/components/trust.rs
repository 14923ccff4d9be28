//! Trust / credentials section.

use super::icons::{Icon, ICON_ARROW_RIGHT, ICON_CHECK_CIRCLE};
use super::rating::StarRating;
use super::ui::{Badge, Button, ButtonVariant, Card, CardContent, Figure, Separator};
use crate::motion::{MotionSpec, ITEM_RISE, SECTION_REVEAL};
use leptos::prelude::*;

/// "Trusted Experts" band: heading, 4.5 rating with count, licensing line,
/// outline "Our work" button, plus two captioned photo cards. Reveals once
/// at 30% visibility.
#[component]
pub fn TrustSection() -> impl IntoView {
    view! {
        <section class="trust" data-animate=MotionSpec::in_view(SECTION_REVEAL, 0.3).attr()>
            <div class="trust-copy" data-animate=MotionSpec::in_view(ITEM_RISE, 0.3).attr()>
                <Badge>"Trusted Experts"</Badge>
                <h2 class="section-title">"Trusted Roofing Experts for Over 20 Years"</h2>
                <p class="section-copy">
                    "From consultation to installation, our dedicated team guides you every step of the way. We pair premium materials with meticulous craftsmanship to deliver roofs that last."
                </p>
                <div class="trust-proof">
                    <div class="trust-rating">
                        <StarRating value=4.5 />
                        <span><strong>"4.5"</strong>" \u{2022} 125 ratings"</span>
                    </div>
                    <Separator vertical=true />
                    <div class="trust-licensed">
                        <Icon path=ICON_CHECK_CIRCLE />
                        "Licensed, bonded & insured crews"
                    </div>
                </div>
                <Button variant=ButtonVariant::Outline>
                    "Our work"
                    <Icon path=ICON_ARROW_RIGHT />
                </Button>
            </div>
            <div class="trust-gallery">
                <Card class="trust-card">
                    <div class="trust-photo">
                        <Figure
                            src="https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?auto=format&fit=crop&w=900&q=80"
                            alt="Roof with dormer windows"
                        />
                    </div>
                    <CardContent>
                        "High-end finish work for modern and heritage homes alike."
                    </CardContent>
                </Card>
                <Card class="trust-card trust-card-muted">
                    <div class="trust-photo">
                        <Figure
                            src="https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=900&q=80"
                            alt="Architectural illustration"
                        />
                    </div>
                    <CardContent>
                        "Collaborative planning with architects, GCs, and HOA boards."
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}
