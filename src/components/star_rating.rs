use leptos::*;
use crate::models::rating_input::RatingInput;

const PREVIEW_FILLED: &str = "#ffa500";
const PREVIEW_EMPTY: &str = "#ddd";

/// Five clickable stars. Hovering previews a rating, leaving the row restores
/// the committed one, clicking commits.
#[component]
pub fn StarRatingInput(
    rating: Signal<RatingInput>,
    on_hover: Callback<u8>,
    on_leave: Callback<()>,
    on_select: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="star-rating-input" on:mouseleave=move |_| on_leave.call(())>
            {RatingInput::stars().map(|star| view! {
                <span
                    class="star"
                    data-rating=star.to_string()
                    class:active={move || rating.get().committed() >= star}
                    style:color=move || {
                        let input = rating.get();
                        match (input.is_previewing(), input.is_filled(star)) {
                            (true, true) => Some(PREVIEW_FILLED),
                            (true, false) => Some(PREVIEW_EMPTY),
                            _ => None,
                        }
                    }
                    on:mouseenter=move |_| on_hover.call(star)
                    on:click=move |_| on_select.call(star)
                >
                    {move || if rating.get().is_filled(star) { "★" } else { "☆" }}
                </span>
            }).collect_view()}
        </div>
    }
}
