use leptos::*;
use crate::models::review::Review;
use crate::utils::html::escape_html;

/// Markup for a review heading. The name is escaped; stars and date are
/// generated by the site and inserted as-is.
pub fn review_header_markup(review: &Review) -> String {
    format!(
        r#"<h4>{} <span class="rating">{}</span></h4><span class="review-date">{}</span>"#,
        escape_html(&review.name),
        review.stars(),
        review.date
    )
}

pub fn helpful_label(helpful: u32) -> String {
    format!(" Útil ({})", helpful)
}

/// Renders every review, newest first. The whole list is rebuilt whenever
/// the collection changes.
#[component]
pub fn ReviewsList(reviews: Signal<Vec<Review>>, on_helpful: Callback<i64>) -> impl IntoView {
    view! {
        <div id="courseReviews" class="reviews-list">
            {move || reviews.get().into_iter().map(|review| {
                let id = review.id;
                view! {
                    <div class="review" data-review-id=id.to_string()>
                        <div class="review-header" inner_html=review_header_markup(&review)></div>
                        <p inner_html=escape_html(&review.text)></p>
                        <div class="review-actions">
                            <button class="helpful-btn" on:click=move |_| on_helpful.call(id)>
                                <span>{ "👍" }</span>
                                {helpful_label(review.helpful)}
                            </button>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(name: &str) -> Review {
        Review {
            id: 7,
            name: name.into(),
            rating: 3,
            text: "texto".into(),
            date: "02/01/2025".into(),
            helpful: 0,
        }
    }

    #[test]
    fn header_contains_stars_and_date() {
        assert_eq!(
            review_header_markup(&review("Ana")),
            r#"<h4>Ana <span class="rating">★★★☆☆</span></h4><span class="review-date">02/01/2025</span>"#
        );
    }

    #[test]
    fn header_escapes_the_name() {
        let markup = review_header_markup(&review("<script>alert(1)</script>"));
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn helpful_button_label() {
        assert_eq!(helpful_label(3), " Útil (3)");
    }
}
