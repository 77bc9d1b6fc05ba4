use leptos::*;
use crate::models::review::{star_string, MAX_RATING};
use crate::models::summary::{total_label, RatingSummary};

/// Average, total and one bar per star value (5 down to 1). Shows zeros until
/// there is at least one review.
#[component]
pub fn RatingSummaryPanel(summary: Signal<Option<RatingSummary>>) -> impl IntoView {
    let average = move || {
        summary
            .get()
            .map(|s| s.average_label())
            .unwrap_or_else(|| "0.0".to_string())
    };
    let stars = move || star_string(summary.get().map_or(0, |s| s.average.round() as u8));
    let total = move || summary.get().map_or_else(|| total_label(0), |s| s.total_label());

    view! {
        <div class="rating-summary">
            <div class="rating-overview">
                <span id="averageRating" class="average-rating">{average}</span>
                <span class="rating-stars">{stars}</span>
                <span id="totalRatings" class="total-ratings">{total}</span>
            </div>
            <div class="rating-bars">
                {(1..=MAX_RATING).rev().map(|value| {
                    let percentage = move || {
                        format!("{}%", summary.get().map_or(0, |s| s.percentage_for(value)))
                    };
                    view! {
                        <div class="rating-bar-row">
                            <span class="rating-label">{format!("{} ★", value)}</span>
                            <div class="rating-bar-track">
                                <div class="rating-bar" style:width=percentage></div>
                            </div>
                            <span class="rating-percentage">{percentage}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
