use super::KeyValueStorage;
use crate::error::{FolioError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory key-value storage for testing.
///
/// Uses `RefCell` for interior mutability since folio is single-threaded.
#[derive(Default)]
pub struct MemStorage {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a raw value, e.g. corrupt JSON.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `set_item` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStorage for MemStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(FolioError::Storage("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Post;

    /// A minimal post with every derived field filled from `id`.
    pub fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {}", id),
            excerpt: format!("Excerpt {}", id),
            content: format!("<p>Content {}</p>", id),
            date: "January 1, 2024".to_string(),
            author: "Tester".to_string(),
            read_time: "1 min read".to_string(),
            image: String::new(),
            tags: vec!["Test".to_string()],
            slug: format!("post-{}", id),
        }
    }

    pub fn posts(ids: &[&str]) -> Vec<Post> {
        ids.iter().map(|id| post(id)).collect()
    }
}
