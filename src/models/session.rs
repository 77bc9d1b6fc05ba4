use chrono::{DateTime, Local};
use leptos::logging::{error, log, warn};

use super::rating_input::RatingInput;
use super::review::{Review, ReviewDraft};
use super::summary::RatingSummary;
use crate::config::SiteConfig;
use crate::errors::{ReviewError, StoreError};
use crate::storage::{load_reviews, save_reviews, KeyValueStore};

/// State of one review widget: the collection (in submission order) and the
/// store it is persisted to. The star picker lives with the view and is
/// handed in on submit.
///
/// Every mutation writes the whole collection back before it is committed in
/// memory, so a failed write leaves the session untouched.
#[derive(Debug)]
pub struct ReviewSession<S> {
    store: S,
    key: String,
    date_format: String,
    reviews: Vec<Review>,
}

impl<S: KeyValueStore> ReviewSession<S> {
    pub fn restore(store: S, config: &SiteConfig) -> Self {
        let mut session = Self {
            store,
            key: config.reviews_key.clone(),
            date_format: config.date_format.clone(),
            reviews: Vec::new(),
        };
        session.reload();
        session
    }

    /// Re-reads the persisted collection. Unreadable data counts as empty and
    /// stays in storage until the next write replaces it.
    pub fn reload(&mut self) {
        self.reviews = match load_reviews(&self.store, &self.key) {
            Ok(reviews) => {
                log!("[REVIEWS] Restored {} reviews", reviews.len());
                reviews
            }
            Err(e @ StoreError::Corrupt(_)) => {
                warn!("[REVIEWS] Ignoring stored reviews: {}", e);
                Vec::new()
            }
            Err(e) => {
                error!("[REVIEWS] Could not read reviews: {}", e);
                Vec::new()
            }
        };
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reviews in submission order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Reviews in display order.
    pub fn newest_first(&self) -> Vec<Review> {
        self.reviews.iter().rev().cloned().collect()
    }

    pub fn summary(&self) -> Option<RatingSummary> {
        RatingSummary::from_reviews(&self.reviews)
    }

    pub fn submit(&mut self, rating: &mut RatingInput, draft: &ReviewDraft) -> Result<Review, ReviewError> {
        self.submit_at(rating, draft, Local::now())
    }

    /// Validates the draft against the committed rating, appends the new
    /// review, persists the collection and clears the star picker. On error
    /// neither the session nor the picker changes.
    pub fn submit_at(
        &mut self,
        input: &mut RatingInput,
        draft: &ReviewDraft,
        now: DateTime<Local>,
    ) -> Result<Review, ReviewError> {
        let rating = input.committed();
        if rating == 0 {
            return Err(ReviewError::MissingRating);
        }
        let (name, text) = draft.validate()?;

        let review = Review::create(name, text, rating, now, &self.date_format, &self.reviews);
        let mut reviews = self.reviews.clone();
        reviews.push(review.clone());
        save_reviews(&self.store, &self.key, &reviews)?;

        self.reviews = reviews;
        input.reset();
        log!("[REVIEWS] Review {} submitted with {} stars", review.id, review.rating);
        Ok(review)
    }

    /// Adds one helpful vote. Returns `false` when no review has that id.
    pub fn mark_helpful(&mut self, id: i64) -> Result<bool, StoreError> {
        let Some(index) = self.reviews.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let mut reviews = self.reviews.clone();
        reviews[index].helpful = reviews[index].helpful.saturating_add(1);
        save_reviews(&self.store, &self.key, &reviews)?;

        self.reviews = reviews;
        log!("[REVIEWS] Review {} marked helpful", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn session() -> (ReviewSession<MemoryStorage>, MemoryStorage) {
        let store = MemoryStorage::default();
        (ReviewSession::restore(store.clone(), &SiteConfig::default()), store)
    }

    fn at(millis: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(millis).unwrap()
    }

    fn persisted(store: &MemoryStorage) -> Option<String> {
        store.get("courseReviews").unwrap()
    }

    fn picked(stars: u8) -> RatingInput {
        let mut input = RatingInput::default();
        input.select(stars);
        input
    }

    fn submit(session: &mut ReviewSession<MemoryStorage>, rating: u8, name: &str, millis: i64) -> Review {
        session
            .submit_at(&mut picked(rating), &ReviewDraft::new(name, "Comentário"), at(millis))
            .unwrap()
    }

    #[test]
    fn submit_without_rating_changes_nothing() {
        let (mut session, store) = session();
        let result = session.submit_at(
            &mut RatingInput::default(),
            &ReviewDraft::new("Ana", "Ótimo curso"),
            at(1),
        );
        assert!(matches!(result, Err(ReviewError::MissingRating)));
        assert!(session.reviews().is_empty());
        assert_eq!(persisted(&store), None);
    }

    #[test]
    fn submit_with_blank_fields_changes_nothing() {
        let (mut session, store) = session();
        let mut input = picked(4);
        for draft in [ReviewDraft::new("  ", "Ótimo curso"), ReviewDraft::new("Ana", "")] {
            let result = session.submit_at(&mut input, &draft, at(1));
            assert!(matches!(result, Err(ReviewError::MissingFields)));
        }
        assert!(session.reviews().is_empty());
        assert_eq!(persisted(&store), None);
        assert_eq!(input.committed(), 4);
    }

    #[test]
    fn valid_submit_appends_and_persists() {
        let (mut session, store) = session();
        let earlier = submit(&mut session, 5, "Bia", 1_000);

        let mut input = picked(4);
        let review = session
            .submit_at(&mut input, &ReviewDraft::new("Ana", "Ótimo curso"), at(1_000))
            .unwrap();

        assert_eq!(review.name, "Ana");
        assert_eq!(review.rating, 4);
        assert_eq!(review.text, "Ótimo curso");
        assert_eq!(review.helpful, 0);
        assert_ne!(review.id, earlier.id);
        assert_eq!(session.reviews().len(), 2);
        assert_eq!(session.reviews().last(), Some(&review));
        assert_eq!(session.newest_first().first(), Some(&review));
        assert_eq!(input.committed(), 0);

        let reloaded = ReviewSession::restore(store, &SiteConfig::default());
        assert_eq!(reloaded.reviews(), session.reviews());
    }

    #[test]
    fn mark_helpful_increments_only_the_target() {
        let (mut session, _store) = session();
        let first = submit(&mut session, 5, "Ana", 1);
        let second = submit(&mut session, 3, "Bia", 2);

        assert!(session.mark_helpful(first.id).unwrap());
        let reviews = session.reviews();
        assert_eq!(reviews[0].helpful, 1);
        assert_eq!(reviews[1], second);
        assert_eq!(Review { helpful: 0, ..reviews[0].clone() }, first);
    }

    #[test]
    fn mark_helpful_unknown_id_is_noop() {
        let (mut session, store) = session();
        submit(&mut session, 5, "Ana", 1);
        let before = persisted(&store);

        assert!(!session.mark_helpful(999).unwrap());
        assert_eq!(persisted(&store), before);
        assert_eq!(session.reviews()[0].helpful, 0);
    }

    #[test]
    fn helpful_votes_are_not_deduplicated() {
        let (mut session, _store) = session();
        let review = submit(&mut session, 2, "Ana", 1);
        for _ in 0..3 {
            session.mark_helpful(review.id).unwrap();
        }
        assert_eq!(session.reviews()[0].helpful, 3);
    }

    #[test]
    fn helpful_count_saturates_at_max() {
        let store = MemoryStorage::default();
        store
            .set(
                "courseReviews",
                r#"[{"id":1,"name":"Ana","rating":5,"text":"Bom","date":"01/01/2025","helpful":4294967295}]"#,
            )
            .unwrap();
        let mut session = ReviewSession::restore(store.clone(), &SiteConfig::default());

        assert!(session.mark_helpful(1).unwrap());
        assert_eq!(session.reviews()[0].helpful, u32::MAX);
        let reloaded = ReviewSession::restore(store, &SiteConfig::default());
        assert_eq!(reloaded.reviews()[0].helpful, u32::MAX);
    }

    #[test]
    fn summary_follows_the_collection() {
        let (mut session, _store) = session();
        assert_eq!(session.summary(), None);
        for (i, rating) in [5, 5, 4, 3, 1].into_iter().enumerate() {
            submit(&mut session, rating, "Aluno", i as i64);
        }
        let summary = session.summary().unwrap();
        assert_eq!(summary.average_label(), "3.6");
        assert_eq!(summary.total_label(), "5 avaliações");
    }

    #[test]
    fn corrupt_storage_restores_empty_and_is_replaced_on_write() {
        let store = MemoryStorage::default();
        store.set("courseReviews", "{broken").unwrap();
        let mut session = ReviewSession::restore(store.clone(), &SiteConfig::default());
        assert!(session.reviews().is_empty());
        assert_eq!(persisted(&store).as_deref(), Some("{broken"));

        submit(&mut session, 4, "Ana", 1);
        let reloaded = ReviewSession::restore(store, &SiteConfig::default());
        assert_eq!(reloaded.reviews().len(), 1);
    }

    #[test]
    fn reload_picks_up_writes_from_elsewhere() {
        let (mut session, store) = session();
        let mut other = ReviewSession::restore(store.clone(), &SiteConfig::default());
        submit(&mut other, 5, "Outra aba", 1);

        assert!(session.reviews().is_empty());
        session.reload();
        assert_eq!(session.reviews().len(), 1);
    }
}
