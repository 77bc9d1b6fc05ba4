use super::review::{Review, MAX_RATING};

/// Aggregate statistics over the whole review collection. Bucket arrays are
/// ordered from 5 stars down to 1 star, matching the rendered bars.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub total: usize,
    pub counts: [usize; 5],
    pub percentages: [u32; 5],
}

impl RatingSummary {
    /// `None` for an empty collection.
    pub fn from_reviews(reviews: &[Review]) -> Option<Self> {
        if reviews.is_empty() {
            return None;
        }

        let total = reviews.len();
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();

        let mut counts = [0usize; 5];
        for review in reviews {
            if let Some(index) = bucket_index(review.rating) {
                counts[index] += 1;
            }
        }

        // Each bucket is rounded on its own, so the five values need not add up to 100.
        let percentages = counts.map(|count| (count as f64 / total as f64 * 100.0).round() as u32);

        Some(Self {
            average: f64::from(sum) / total as f64,
            total,
            counts,
            percentages,
        })
    }

    /// One decimal place, halves rounded up (3.25 is "3.3").
    pub fn average_label(&self) -> String {
        format!("{:.1}", (self.average * 10.0).round() / 10.0)
    }

    pub fn total_label(&self) -> String {
        total_label(self.total)
    }

    pub fn percentage_for(&self, stars: u8) -> u32 {
        bucket_index(stars).map_or(0, |i| self.percentages[i])
    }
}

pub fn total_label(total: usize) -> String {
    format!("{} avaliações", total)
}

/// Bar index for a star value: 5 stars is index 0.
pub fn bucket_index(stars: u8) -> Option<usize> {
    (1..=MAX_RATING)
        .contains(&stars)
        .then(|| usize::from(MAX_RATING - stars))
}
