use super::review::{is_valid_rating, MAX_RATING};

/// Star picker state. `committed` is the clicked rating (0 = none),
/// `preview` the star under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingInput {
    committed: u8,
    preview: Option<u8>,
}

impl RatingInput {
    pub fn committed(&self) -> u8 {
        self.committed
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// Rating currently shown: the hovered star wins over the committed one.
    pub fn displayed(&self) -> u8 {
        self.preview.unwrap_or(self.committed)
    }

    pub fn is_filled(&self, star: u8) -> bool {
        star >= 1 && star <= self.displayed()
    }

    pub fn hover(&mut self, star: u8) {
        if is_valid_rating(star) {
            self.preview = Some(star);
        }
    }

    pub fn leave(&mut self) {
        self.preview = None;
    }

    pub fn select(&mut self, star: u8) {
        if is_valid_rating(star) {
            self.committed = star;
            self.preview = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn stars() -> impl Iterator<Item = u8> {
        1..=MAX_RATING
    }
}
