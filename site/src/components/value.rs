//! Long-term-value section.

use super::icons::{Icon, ICON_CHECK_CIRCLE};
use super::ui::{Badge, Card, Figure};
use crate::motion::{MotionSpec, SECTION_REVEAL};
use leptos::prelude::*;

const VALUE_POINTS: &[&str] = &[
    "Annual inspections with thermal imaging reports",
    "Dedicated project manager for every install",
    "Financing options that fit your budget",
];

/// "Keeping Roofs Strong" band: copy with a check-circle list, the family
/// photo, and the warranty card. Reveals once at 20% visibility.
#[component]
pub fn ValueSection() -> impl IntoView {
    view! {
        <section class="value" data-animate=MotionSpec::in_view(SECTION_REVEAL, 0.2).attr()>
            <div class="value-copy">
                <Badge>"Keeping Roofs Strong"</Badge>
                <h2 class="section-title">"Keeping Roofs Strong for Generations"</h2>
                <p class="section-copy">
                    "Families count on us to deliver roofs that stand the test of time. Our preventative maintenance plans ensure your investment is protected year after year."
                </p>
                <ul class="value-list">
                    {VALUE_POINTS.iter().map(|point| {
                        view! {
                            <li class="value-item">
                                <Icon path=ICON_CHECK_CIRCLE />
                                {*point}
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
            <div class="value-media">
                <div class="value-photo">
                    <Figure
                        src="https://images.unsplash.com/photo-1507089947368-19c1da9775ae?auto=format&fit=crop&w=1100&q=80"
                        alt="Family outside their home"
                    />
                </div>
                <Card class="warranty-card">
                    <span class="warranty-photo">
                        <Figure
                            src="https://images.unsplash.com/photo-1524230572899-a752b3835840?auto=format&fit=crop&w=400&q=80"
                            alt="Helping hands"
                            fill=false
                            width=48
                            height=48
                        />
                    </span>
                    <div>
                        <p class="warranty-title">"10-year craftsmanship warranty"</p>
                        <p class="warranty-copy">
                            "Backed by responsive service and dedicated support teams."
                        </p>
                    </div>
                </Card>
            </div>
        </section>
    }
}
