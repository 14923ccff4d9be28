//! Leptos UI components for the landing page.
//!
//! One module per section, plus the primitive kit, icon vocabulary, and
//! the star-rating indicator. Each component is a `#[component]` function
//! over its literal data table; composition happens in [`PageDocument`].
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── SiteHeader (nav links, "Call us")
//! ├── Hero (badge, headline, rating, floating project card)
//! ├── TrustSection
//! ├── SolutionsSection (3 service cards)
//! ├── BlogSection (3 teaser cards)
//! ├── StatsSection (3 stat cards)
//! ├── ValueSection (check-circle list, warranty card)
//! ├── TestimonialsSection (3 quote cards with avatars)
//! ├── ContactSection
//! └── SiteFooter (computed year)
//! ```

mod blog;
mod contact;
mod document;
mod footer;
mod header;
mod hero;
mod icons;
mod rating;
mod solutions;
mod stats;
mod testimonials;
mod trust;
mod ui;
mod value;

pub use blog::BlogSection;
pub use contact::ContactSection;
pub use document::PageDocument;
pub use footer::SiteFooter;
pub use header::{nav_link_class, SiteHeader, NAV_LINKS};
pub use hero::Hero;
pub use icons::*;
pub use rating::{filled_stars, StarRating};
pub use solutions::{SolutionsSection, SOLUTION_CARDS};
pub use stats::{StatsSection, STATS};
pub use testimonials::{TestimonialsSection, TESTIMONIALS};
pub use trust::TrustSection;
pub use ui::*;
pub use value::ValueSection;
