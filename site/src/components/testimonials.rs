//! Testimonials grid.

use super::ui::{Avatar, Badge, Card, CardContent};
use crate::motion::{MotionSpec, SECTION_REVEAL};
use crate::types::Testimonial;
use leptos::prelude::*;

/// The three customer quotes, in display order.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Jamie Patel",
        role: "Facilities Director, Northwind Inc.",
        quote: "They handled our multi-building retrofit with zero disruption to operations.",
        image: "https://images.unsplash.com/photo-1544723795-3fb6469f5b39?auto=format&fit=crop&w=400&q=80",
    },
    Testimonial {
        name: "Carlos Ramirez",
        role: "Owner, CR Developments",
        quote: "Reliable, transparent, and always ahead of schedule\u{2014}exactly what we need in a partner.",
        image: "https://images.unsplash.com/photo-1487412947147-5cebf100ffc2?auto=format&fit=crop&w=400&q=80",
    },
    Testimonial {
        name: "Erica Wong",
        role: "Community Manager, Brightside Homes",
        quote: "Our residents rave about the craftsmanship. The new roofs look incredible.",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=400&q=80",
    },
];

/// Three quote cards with avatars. Reveals once at 20% visibility.
#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="testimonials" data-animate=MotionSpec::in_view(SECTION_REVEAL, 0.2).attr()>
            <div class="section-header">
                <Badge>"Testimonials"</Badge>
                <h2 class="section-title">"Loved by Businesses, Trusted by Professionals"</h2>
            </div>
            <div class="card-grid">
                {TESTIMONIALS.iter().map(|testimonial| {
                    view! {
                        <Card class="testimonial-card">
                            <CardContent>
                                <p class="testimonial-quote">
                                    "\u{201c}"{testimonial.quote}"\u{201d}"
                                </p>
                                <div class="testimonial-person">
                                    <Avatar src=testimonial.image name=testimonial.name />
                                    <div class="testimonial-id">
                                        <p class="testimonial-name">{testimonial.name}</p>
                                        <p class="testimonial-role">{testimonial.role}</p>
                                    </div>
                                </div>
                            </CardContent>
                        </Card>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::initials;

    #[test]
    fn three_testimonials_with_initials() {
        assert_eq!(TESTIMONIALS.len(), 3);
        let fallbacks: Vec<_> = TESTIMONIALS.iter().map(|t| initials(t.name)).collect();
        assert_eq!(fallbacks, ["JP", "CR", "EW"]);
    }
}
