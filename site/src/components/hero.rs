//! Hero panel with the floating project card.

use super::rating::StarRating;
use super::ui::{
    Badge, Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle, Figure,
};
use crate::motion::{MotionSpec, BADGE_SLIDE, COPY_RISE, CTA_RISE, HERO_RISE, TITLE_RISE};
use leptos::prelude::*;

/// Dark gradient hero: badge, headline, sub-copy, quote button, 4.9-star
/// rating block, and the roof photo with a floating "Roof Installation"
/// card. The panel and its inner pieces all animate on mount, in a fixed
/// delay sequence.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" data-animate=MotionSpec::mount(HERO_RISE).attr()>
            <div class="hero-glow"></div>
            <div class="hero-grid">
                <div class="hero-copy">
                    <div data-animate=MotionSpec::mount(BADGE_SLIDE).attr()>
                        <Badge class="badge-hero">"Roofing done right"</Badge>
                    </div>
                    <h1 class="hero-title" data-animate=MotionSpec::mount(TITLE_RISE).attr()>
                        "Building Strong Roofs, Building Trust*"
                    </h1>
                    <p class="hero-subtitle" data-animate=MotionSpec::mount(COPY_RISE).attr()>
                        "Resilient roofing solutions built to withstand every season\u{2014}keeping your home safe, secure, and stylish for decades."
                    </p>
                    <div class="hero-actions">
                        <div data-animate=MotionSpec::mount(CTA_RISE).attr()>
                            <Button size=ButtonSize::Lg>"Get a free quote"</Button>
                        </div>
                        <div class="hero-reviews">
                            <StarRating value=4.9 />
                            <div>
                                <p class="reviews-count">"125 recent reviews"</p>
                                <p class="reviews-note">
                                    "Trusted by homeowners, HOAs, and developers"
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="hero-media">
                    <div class="hero-photo">
                        <Figure
                            src="https://images.unsplash.com/photo-1570126686778-16ba7c999fe5?auto=format&fit=crop&w=1200&q=80"
                            alt="Newly installed green roof"
                        />
                    </div>
                    <Card class="hero-float-card">
                        <CardHeader>
                            <CardTitle>"Roof Installation"</CardTitle>
                            <CardDescription>
                                "Starting at "<strong>"$50,000"</strong>
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <div class="float-card-rating">
                                <StarRating value=4.8 />
                                <span>"4.8 \u{2022} 212 jobs"</span>
                            </div>
                            <Button size=ButtonSize::Sm class="btn-block">"View project"</Button>
                        </CardContent>
                    </Card>
                </div>
            </div>
        </section>
    }
}
