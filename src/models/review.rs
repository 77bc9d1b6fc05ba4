// src/models/review.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::errors::ReviewError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,          // Creation timestamp in milliseconds, unique within the collection
    pub name: String,     // Reviewer name, trimmed
    pub rating: u8,       // 1 to 5 stars
    pub text: String,     // Review body, trimmed
    pub date: String,     // Localized creation date
    pub helpful: u32,     // Helpful votes
}

/// Raw form input for a review that has not been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub text: String,
}

impl ReviewDraft {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Trims both fields; fails if either ends up empty.
    pub fn validate(&self) -> Result<(String, String), ReviewError> {
        let name = self.name.trim();
        let text = self.text.trim();
        if name.is_empty() || text.is_empty() {
            return Err(ReviewError::MissingFields);
        }
        Ok((name.to_string(), text.to_string()))
    }
}

impl Review {
    /// Builds a review from validated input. `existing` is the current
    /// collection, used to keep the id unique.
    pub fn create(
        name: String,
        text: String,
        rating: u8,
        now: DateTime<Local>,
        date_format: &str,
        existing: &[Review],
    ) -> Self {
        Review {
            id: next_id(now.timestamp_millis(), existing),
            name,
            rating,
            text,
            date: now.format(date_format).to_string(),
            helpful: 0,
        }
    }

    pub fn stars(&self) -> String {
        star_string(self.rating)
    }
}

pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Filled stars followed by empty ones, always five glyphs.
pub fn star_string(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

fn next_id(timestamp: i64, existing: &[Review]) -> i64 {
    match existing.iter().map(|r| r.id).max() {
        Some(max) if max >= timestamp => max + 1,
        _ => timestamp,
    }
}
