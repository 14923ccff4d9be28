//! Header with the in-page navigation list.

use super::icons::{Icon, ICON_PHONE};
use super::ui::{Button, ButtonSize};
use crate::motion::{MotionSpec, HEADER_DROP};
use crate::types::NavLink;
use leptos::prelude::*;

/// The four in-page anchors, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "#hero",
    },
    NavLink {
        label: "Services",
        href: "#solutions",
    },
    NavLink {
        label: "Blog",
        href: "#blog",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// The statically highlighted link. The page does not track scroll
/// position, so the active mark never moves.
const ACTIVE_LABEL: &str = "Contact";

/// Class variant for a nav link: the active link gets an underline mark,
/// everything else the plain style.
pub fn nav_link_class(label: &str) -> &'static str {
    if label == ACTIVE_LABEL {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}

/// Sticky header: round logo mark, brand, nav links, "Call us" pill.
/// Drops in from above on mount.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header" data-animate=MotionSpec::mount(HEADER_DROP).attr()>
            <div class="header-inner">
                <a href="#" class="brand">
                    <span class="brand-mark">"B"</span>
                    <span class="brand-name">"& Bldr"</span>
                </a>
                <nav class="header-nav">
                    {NAV_LINKS.iter().map(|link| {
                        view! {
                            <a href=link.href class=nav_link_class(link.label)>
                                {link.label}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
                <Button size=ButtonSize::Sm class="header-call">
                    <Icon path=ICON_PHONE />
                    "Call us"
                </Button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_fixed_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Home", "Services", "Blog", "Contact"]);
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(anchors, ["#hero", "#solutions", "#blog", "#contact"]);
    }

    #[test]
    fn exactly_one_link_is_active() {
        let active: Vec<_> = NAV_LINKS
            .iter()
            .filter(|l| nav_link_class(l.label).contains("nav-link-active"))
            .map(|l| l.label)
            .collect();
        assert_eq!(active, ["Contact"]);
    }
}
