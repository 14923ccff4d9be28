//! Blog teaser grid.

use super::icons::{Icon, ICON_ARROW_RIGHT};
use super::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Figure,
};
use crate::motion::{MotionSpec, CARD_HOVER, CARD_RISE, SECTION_REVEAL, STAGGER_STEP};
use crate::types::BlogPost;
use leptos::prelude::*;

/// `#blog` anchor: badge, heading, three teaser cards with ghost
/// "Read more" buttons, and a trailing outline "View all posts" button.
/// The posts stay inlined here rather than hoisted to a named table.
#[component]
pub fn BlogSection() -> impl IntoView {
    let posts = [
        BlogPost {
            title: "Winter Roof Maintenance Guide",
            description: "Essential tips to protect your roof during harsh winter conditions and prevent costly damage.",
            image: "https://images.unsplash.com/photo-1570126686778-16ba7c999fe5?auto=format&fit=crop&w=800&q=80",
            date: "Dec 15, 2024",
            read_time: "5 min read",
        },
        BlogPost {
            title: "Choosing the Right Roofing Material",
            description: "A comprehensive comparison of asphalt, metal, and tile roofing options for your home.",
            image: "https://images.unsplash.com/photo-1507089947368-19c1da9775ae?auto=format&fit=crop&w=800&q=80",
            date: "Nov 28, 2024",
            read_time: "8 min read",
        },
        BlogPost {
            title: "Signs You Need Roof Replacement",
            description: "Don't wait for a leak! Learn the early warning signs that indicate it's time for a new roof.",
            image: "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?auto=format&fit=crop&w=800&q=80",
            date: "Nov 12, 2024",
            read_time: "6 min read",
        },
    ];

    view! {
        <section
            id="blog"
            class="blog"
            data-animate=MotionSpec::in_view(SECTION_REVEAL, 0.2).attr()
        >
            <div class="section-header">
                <Badge>"Latest Insights"</Badge>
                <h2 class="section-title">"Roofing Tips & Industry Updates"</h2>
                <p class="section-copy">
                    "Expert advice, maintenance guides, and industry insights to help you make informed decisions about your roofing needs."
                </p>
            </div>
            <div class="card-grid">
                {posts.into_iter().enumerate().map(|(index, post)| {
                    let spec = MotionSpec::in_view(CARD_RISE, 0.3)
                        .staggered(index, STAGGER_STEP)
                        .with_hover(CARD_HOVER);
                    view! {
                        <div class="blog-card" data-animate=spec.attr()>
                            <Card>
                                <div class="blog-photo">
                                    <Figure src=post.image alt=post.title />
                                </div>
                                <CardHeader>
                                    <div class="blog-meta">
                                        <span class="blog-date">{post.date}</span>
                                        <span class="blog-read-time">{post.read_time}</span>
                                    </div>
                                    <CardTitle>{post.title}</CardTitle>
                                    <CardDescription>{post.description}</CardDescription>
                                </CardHeader>
                                <CardContent>
                                    <Button variant=ButtonVariant::Ghost class="btn-block">
                                        "Read more"
                                        <Icon path=ICON_ARROW_RIGHT />
                                    </Button>
                                </CardContent>
                            </Card>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
            <div class="blog-footer">
                <Button variant=ButtonVariant::Outline size=ButtonSize::Lg>
                    "View all posts"
                    <Icon path=ICON_ARROW_RIGHT />
                </Button>
            </div>
        </section>
    }
}
