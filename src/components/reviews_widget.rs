use leptos::*;
use leptos::logging::{error, log};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::components::rating_summary::RatingSummaryPanel;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::components::star_rating::StarRatingInput;
use crate::config::use_site_config;
use crate::models::rating_input::RatingInput;
use crate::models::review::ReviewDraft;
use crate::models::session::ReviewSession;
use crate::storage::LocalStorage;
use crate::utils::dom::alert;
use crate::utils::leptos_owner::with_owner_safe;

pub const SUCCESS_MESSAGE: &str = "✓ Avaliação enviada com sucesso!";

/// Course reviews: summary, star picker and form, and the list of reviews,
/// all backed by one `ReviewSession` persisted in `localStorage`. The star
/// picker has its own signal so hovering never touches the collection.
#[component]
pub fn ReviewsWidget() -> impl IntoView {
    let config = use_site_config();
    let session = create_rw_signal(ReviewSession::restore(LocalStorage, &config));

    let reviews = create_memo(move |_| session.with(|s| s.newest_first()));
    let summary = create_memo(move |_| session.with(|s| s.summary()));
    let rating = create_rw_signal(RatingInput::default());

    // Each notice removes itself after the configured delay.
    let notices = create_rw_signal(Vec::<u64>::new());
    let next_notice = store_value(0u64);
    let notice_duration = config.notice_duration_ms;
    let owner = Owner::current();
    let show_notice = move || {
        let id = next_notice.get_value();
        next_notice.set_value(id + 1);
        notices.update(|n| n.push(id));

        spawn_local(async move {
            TimeoutFuture::new(notice_duration).await;
            with_owner_safe(owner, "success notice", || {
                notices.update(|n| n.retain(|&other| other != id));
            });
        });
    };

    let on_submit = Callback::new(move |draft: ReviewDraft| {
        let mut input = rating.get_untracked();
        match session.try_update(|s| s.submit(&mut input, &draft)) {
            Some(Ok(_)) => {
                rating.set(input);
                show_notice();
                true
            }
            Some(Err(e)) => {
                alert(&e.to_string());
                false
            }
            None => false,
        }
    });

    let on_helpful = Callback::new(move |id: i64| {
        if let Some(Err(e)) = session.try_update(|s| s.mark_helpful(id)) {
            error!("[REVIEWS] Helpful vote for {} not saved: {}", id, e);
            alert(&e.to_string());
        }
    });

    let on_hover = Callback::new(move |star: u8| rating.update(|r| r.hover(star)));
    let on_leave = Callback::new(move |_: ()| rating.update(|r| r.leave()));
    let on_select = Callback::new(move |star: u8| rating.update(|r| r.select(star)));

    // Another tab rewrote the collection: last write wins, so just re-read it.
    let reviews_key = config.reviews_key.clone();
    let storage_listener = window_event_listener(ev::storage, move |ev: web_sys::StorageEvent| {
        let key = ev.key();
        if key.is_none() || key.as_deref() == Some(reviews_key.as_str()) {
            log!("[REVIEWS] Stored reviews changed in another tab, reloading");
            session.update(|s| s.reload());
        }
    });
    on_cleanup(move || storage_listener.remove());

    view! {
        <section class="reviews-section" id="avaliacoes">
            <RatingSummaryPanel summary=summary.into() />
            <div class="review-form-container">
                {move || notices.get().into_iter().map(|id| view! {
                    <div class="success-message" data-notice-id=id.to_string()>{ SUCCESS_MESSAGE }</div>
                }).collect_view()}
                <ReviewForm on_submit=on_submit>
                    <StarRatingInput
                        rating=rating.into()
                        on_hover=on_hover
                        on_leave=on_leave
                        on_select=on_select
                    />
                </ReviewForm>
            </div>
            <ReviewsList reviews=reviews.into() on_helpful=on_helpful />
        </section>
    }
}
