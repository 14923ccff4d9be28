//! Services (solutions) grid.

use super::ui::{Badge, Card, CardDescription, CardHeader, CardTitle, Figure};
use crate::motion::{MotionSpec, CARD_HOVER, CARD_RISE, SECTION_REVEAL, STAGGER_STEP};
use crate::types::SolutionCard;
use leptos::prelude::*;

/// The three service offerings, in display order.
pub const SOLUTION_CARDS: &[SolutionCard] = &[
    SolutionCard {
        title: "Installation & Repair",
        description: "Fast turnarounds for residential and commercial roofs.",
        image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=800&q=80",
    },
    SolutionCard {
        title: "Emergency Response",
        description: "24/7 crews ready to keep water and storm damage at bay.",
        image: "https://images.unsplash.com/photo-1503387762-592deb58ef4e?auto=format&fit=crop&w=800&q=80",
    },
    SolutionCard {
        title: "Maintenance Programs",
        description: "Proactive inspections extend the life of every shingle.",
        image: "https://images.unsplash.com/photo-1597004898526-0d74a5b37b7d?auto=format&fit=crop&w=800&q=80",
    },
];

/// `#solutions` anchor: badge, heading, intro copy, and the three service
/// cards. Cards ripple in and carry the reversible hover lift.
#[component]
pub fn SolutionsSection() -> impl IntoView {
    view! {
        <section
            id="solutions"
            class="solutions"
            data-animate=MotionSpec::in_view(SECTION_REVEAL, 0.2).attr()
        >
            <div class="section-header">
                <Badge>"Comprehensive Roofing Solutions"</Badge>
                <h2 class="section-title">"Services tailored to every roofline"</h2>
                <p class="section-copy">
                    "Whether it is a single-family home or a large community development, we deliver engineered solutions that protect investments and boost curb appeal."
                </p>
            </div>
            <div class="card-grid">
                {SOLUTION_CARDS.iter().enumerate().map(|(index, card)| {
                    let spec = MotionSpec::in_view(CARD_RISE, 0.2)
                        .staggered(index, STAGGER_STEP)
                        .with_hover(CARD_HOVER);
                    view! {
                        <div class="solution-card" data-animate=spec.attr()>
                            <Card>
                                <div class="solution-photo">
                                    <Figure src=card.image alt=card.title />
                                    <span class="solution-chip">"\u{2192}"</span>
                                </div>
                                <CardHeader>
                                    <CardTitle>{card.title}</CardTitle>
                                    <CardDescription>{card.description}</CardDescription>
                                </CardHeader>
                            </Card>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_cards_in_literal_order() {
        let titles: Vec<_> = SOLUTION_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "Installation & Repair",
                "Emergency Response",
                "Maintenance Programs"
            ]
        );
    }
}
