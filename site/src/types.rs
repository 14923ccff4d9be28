//! Content data model for the landing page.
//!
//! Every entity here is an immutable literal record: the tables are `const`
//! slices of `&'static str` fields, fixed at compile time and never mutated.
//! The types are designed to be:
//!
//! - **Copy-friendly** - plain static data, no allocation at render time
//! - **Serializable** - mirrors the house style for renderable data
//!
//! The tables themselves live next to the section that renders them (see
//! [`crate::components`]); the blog teasers are inlined at their call site.

use serde::Serialize;

/// One entry of the in-page navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible label ("Home", "Services", ...).
    pub label: &'static str,
    /// In-page anchor target ("#hero", "#solutions", ...).
    pub href: &'static str,
}

/// One card of the services (solutions) grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SolutionCard {
    /// Service name shown as the card title.
    pub title: &'static str,
    /// Single-sentence pitch below the title.
    pub description: &'static str,
    /// Cover photo URL.
    pub image: &'static str,
}

/// One entry of the stats band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    /// Display value, already formatted ("50+", "2M", "85%").
    pub value: &'static str,
    /// Short explanation of what the value counts.
    pub label: &'static str,
}

/// One customer quote card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Customer name, also the source of the avatar fallback initials.
    pub name: &'static str,
    /// Role and company line under the name.
    pub role: &'static str,
    /// The quote itself, without surrounding quotation marks.
    pub quote: &'static str,
    /// Avatar photo URL.
    pub image: &'static str,
}

/// One blog teaser card.
///
/// The three posts are inlined where the blog grid renders rather than
/// hoisted to a named table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// Post title.
    pub title: &'static str,
    /// Teaser sentence.
    pub description: &'static str,
    /// Cover photo URL.
    pub image: &'static str,
    /// Publication date, preformatted ("Dec 15, 2024").
    pub date: &'static str,
    /// Reading time, preformatted ("5 min read").
    pub read_time: &'static str,
}

/// Fallback avatar glyph for a person's name: the first letter of every
/// whitespace-separated token, concatenated ("Jamie Patel" -> "JP").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_concatenate_first_letters() {
        assert_eq!(initials("Jamie Patel"), "JP");
        assert_eq!(initials("Carlos Ramirez"), "CR");
        assert_eq!(initials("Erica Wong"), "EW");
    }

    #[test]
    fn initials_handle_irregular_whitespace() {
        assert_eq!(initials("  Ada   Lovelace "), "AL");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }
}
