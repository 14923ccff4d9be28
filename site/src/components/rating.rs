//! Star rating indicator - fixed five-icon row.

use super::icons::StarIcon;
use crate::motion::{MotionSpec, STAGGER_STEP, STAR_POP, STAR_SPIN};
use leptos::prelude::*;

/// Number of stars painted solid for a rating.
///
/// Uses `f64::round`, which for non-negative input rounds half-up (ties
/// away from zero): 4.5 -> 5, 4.4 -> 4. Callers only pass values in
/// [0, 5]; the count is clamped to that range anyway so an out-of-range
/// value can never paint more than five stars.
pub fn filled_stars(value: f64) -> usize {
    (value.round() as i64).clamp(0, 5) as usize
}

/// Row of exactly five stars: `filled_stars(value)` solid, the rest
/// outline. The row pops in on mount and each star spins upright with a
/// per-star delay.
#[component]
pub fn StarRating(
    /// Rating in [0, 5]
    value: f64,
) -> impl IntoView {
    let filled = filled_stars(value);

    view! {
        <div class="star-rating" data-animate=MotionSpec::mount(STAR_POP).attr()>
            {(0..5).map(|index| {
                let spec = MotionSpec::mount(STAR_SPIN).staggered(index, STAGGER_STEP);
                let is_filled = index < filled;
                view! {
                    <span class="star" data-animate=spec.attr()>
                        <StarIcon filled=is_filled />
                    </span>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(filled_stars(4.5), 5);
        assert_eq!(filled_stars(3.5), 4);
        assert_eq!(filled_stars(4.4), 4);
        assert_eq!(filled_stars(4.9), 5);
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(filled_stars(5.0), 5);
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(filled_stars(7.3), 5);
        assert_eq!(filled_stars(-1.0), 0);
    }

    #[test]
    fn whole_range_always_sums_to_five() {
        for tenths in 0..=50 {
            let value = tenths as f64 / 10.0;
            let filled = filled_stars(value);
            assert!(filled <= 5);
            assert_eq!(filled + (5 - filled), 5);
        }
    }
}
