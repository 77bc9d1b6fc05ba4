use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging::{log, warn};

use crate::errors::StoreError;
use crate::models::review::{is_valid_rating, Review};

/// String key/value persistence. The browser backend is `localStorage`;
/// tests use the in-memory one.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

/// Shared in-memory map; clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads the whole review collection. A missing key is an empty collection;
/// entries with an impossible rating are dropped.
pub fn load_reviews<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<Review>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    let mut reviews: Vec<Review> = serde_json::from_str(&raw).map_err(StoreError::Corrupt)?;
    let before = reviews.len();
    reviews.retain(|r| is_valid_rating(r.rating));
    if reviews.len() != before {
        warn!(
            "[STORAGE] Dropped {} stored reviews with an invalid rating",
            before - reviews.len()
        );
    }
    Ok(reviews)
}

/// Replaces the whole persisted collection.
pub fn save_reviews<S: KeyValueStore>(
    store: &S,
    key: &str,
    reviews: &[Review],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(reviews).map_err(StoreError::Encode)?;
    store.set(key, &raw)?;
    log!("[STORAGE] Saved {} reviews under '{}'", reviews.len(), key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "courseReviews";

    fn review(id: i64, rating: u8) -> Review {
        Review {
            id,
            name: format!("Aluno {}", id),
            rating,
            text: "Muito bom <b>mesmo</b>".into(),
            date: "10/05/2025".into(),
            helpful: id as u32,
        }
    }

    #[test]
    fn missing_key_is_empty() {
        let store = MemoryStorage::default();
        assert!(load_reviews(&store, KEY).unwrap().is_empty());
    }

    #[test]
    fn save_then_load_reproduces_collection() {
        let store = MemoryStorage::default();
        let reviews = vec![review(3, 5), review(1, 2), review(2, 4)];
        save_reviews(&store, KEY, &reviews).unwrap();
        assert_eq!(load_reviews(&store, KEY).unwrap(), reviews);
    }

    #[test]
    fn reads_json_written_by_the_static_site() {
        let store = MemoryStorage::default();
        store
            .set(
                KEY,
                r#"[{"id":1714000000000,"name":"Ana","rating":4,"text":"Ótimo curso","date":"25/04/2024","helpful":3}]"#,
            )
            .unwrap();
        let reviews = load_reviews(&store, KEY).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].name, "Ana");
        assert_eq!(reviews[0].helpful, 3);
    }

    #[test]
    fn corrupt_json_is_an_error() {
        let store = MemoryStorage::default();
        store.set(KEY, "not json").unwrap();
        assert!(matches!(load_reviews(&store, KEY), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn invalid_ratings_are_dropped() {
        let store = MemoryStorage::default();
        let mut bad = review(2, 5);
        bad.rating = 9;
        save_reviews(&store, KEY, &[review(1, 3), bad]).unwrap();
        let reviews = load_reviews(&store, KEY).unwrap();
        assert_eq!(reviews, vec![review(1, 3)]);
    }

    #[test]
    fn memory_storage_clones_share_entries() {
        let store = MemoryStorage::default();
        let other = store.clone();
        store.set("fonte", "aumentada").unwrap();
        assert_eq!(other.get("fonte").unwrap().as_deref(), Some("aumentada"));
        other.remove("fonte").unwrap();
        assert_eq!(store.get("fonte").unwrap(), None);
    }
}
