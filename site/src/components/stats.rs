//! Stats band.

use super::ui::{Card, CardDescription, CardHeader, CardTitle};
use crate::motion::{MotionSpec, SECTION_REVEAL};
use crate::types::StatEntry;
use leptos::prelude::*;

/// The three headline numbers.
pub const STATS: &[StatEntry] = &[
    StatEntry {
        value: "50+",
        label: "Expert roofers on staff",
    },
    StatEntry {
        value: "2M",
        label: "Square feet protected",
    },
    StatEntry {
        value: "85%",
        label: "Projects from referrals",
    },
];

/// Three stat cards on a white band. Reveals once at 30% visibility.
#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats" data-animate=MotionSpec::in_view(SECTION_REVEAL, 0.3).attr()>
            {STATS.iter().map(|stat| {
                view! {
                    <Card class="stat-card">
                        <CardHeader>
                            <CardTitle>{stat.value}</CardTitle>
                            <CardDescription>{stat.label}</CardDescription>
                        </CardHeader>
                    </Card>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_stats_with_display_values() {
        let values: Vec<_> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, ["50+", "2M", "85%"]);
        assert!(STATS.iter().all(|s| !s.label.is_empty()));
    }
}
