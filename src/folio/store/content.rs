//! # Content Store
//!
//! The single source of truth for the post collection. It keeps an ordered
//! `Vec<Post>` in memory and mirrors it to a [`KeyValueStorage`] slot on every
//! change.
//!
//! ## Lifecycle
//!
//! - **Initialize**: read the slot; absent or malformed data silently falls
//!   back to the seed set. Loading never fails.
//! - **Mutate**: `add_post` prepends, `update_post` replaces by id,
//!   `delete_post` removes by id. Each applies the change in memory, notifies
//!   observers with the new collection, then writes the whole collection back
//!   (write-through, last write wins).
//! - **Reload**: re-run initialization against the same slot.
//!
//! Lookups are linear scans; the collection is a handful of posts.

use super::KeyValueStorage;
use crate::error::{FolioError, Result};
use crate::model::Post;
use crate::seed::seed_posts;
use serde::{Deserialize, Serialize};

/// How `add_post` treats an id or slug that is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Accept the post anyway; lookups by that id or slug become ambiguous.
    #[default]
    Allow,
    /// Refuse the post with [`FolioError::DuplicatePost`].
    Reject,
}

/// Handle returned by [`ContentStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&[Post])>;

pub struct ContentStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    posts: Vec<Post>,
    policy: DuplicatePolicy,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl<S: KeyValueStorage> ContentStore<S> {
    /// Loads the collection stored under `key`, or the seed set.
    pub fn initialize(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let posts = load_posts(&storage, &key);
        Self {
            storage,
            key,
            posts,
            policy: DuplicatePolicy::default(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// First post with `slug`. With duplicates present, later ones are
    /// unreachable through this lookup.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Register a callback invoked with the full collection after every change.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&[Post]) + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Prepends `post`.
    pub fn add_post(&mut self, post: Post) -> Result<()> {
        if let Some(field) = self.collision(&post) {
            let value = match field {
                "id" => post.id.clone(),
                _ => post.slug.clone(),
            };
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(FolioError::DuplicatePost { field, value });
                }
                DuplicatePolicy::Allow => {
                    tracing::warn!(field, %value, "adding post with duplicate {}", field);
                }
            }
        }

        tracing::debug!(id = %post.id, slug = %post.slug, "adding post");
        self.posts.insert(0, post);
        self.commit()
    }

    /// Replaces every post whose id equals `id` with `post`. Returns how many
    /// were replaced; zero leaves the collection as it was.
    pub fn update_post(&mut self, id: &str, post: Post) -> Result<usize> {
        let mut replaced = 0;
        for slot in self.posts.iter_mut().filter(|p| p.id == id) {
            *slot = post.clone();
            replaced += 1;
        }
        tracing::debug!(id, replaced, "updating post");
        self.commit()?;
        Ok(replaced)
    }

    /// Removes every post whose id equals `id`. Returns how many were removed.
    pub fn delete_post(&mut self, id: &str) -> Result<usize> {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        let removed = before - self.posts.len();
        tracing::debug!(id, removed, "deleting post");
        self.commit()?;
        Ok(removed)
    }

    /// Replaces the collection with the seed set.
    pub fn reset(&mut self) -> Result<()> {
        self.posts = seed_posts();
        self.commit()
    }

    /// Re-reads the slot, discarding in-memory state. Observers are notified.
    pub fn reload(&mut self) {
        self.posts = load_posts(&self.storage, &self.key);
        self.notify();
    }

    fn collision(&self, post: &Post) -> Option<&'static str> {
        if self.posts.iter().any(|p| p.id == post.id) {
            Some("id")
        } else if self.posts.iter().any(|p| p.slug == post.slug) {
            Some("slug")
        } else {
            None
        }
    }

    fn commit(&mut self) -> Result<()> {
        self.notify();
        self.persist()
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.posts);
        }
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.posts)?;
        self.storage.set_item(&self.key, &json).inspect_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to persist posts");
        })
    }
}

/// Reads the collection under `key`, falling back to the seed set when the
/// slot is empty, unreadable, or holds anything but an array of posts.
pub fn load_posts<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<Post> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored posts, using seed set");
            return seed_posts();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read stored posts, using seed set");
            return seed_posts();
        }
    };

    match serde_json::from_str::<Vec<Post>>(&raw) {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored posts are malformed, using seed set");
            seed_posts()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{post, posts};
    use crate::store::memory::MemStorage;
    use crate::store::DEFAULT_STORAGE_KEY;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_with(ids: &[&str]) -> ContentStore<MemStorage> {
        let json = serde_json::to_string(&posts(ids)).unwrap();
        let storage = MemStorage::with_item(DEFAULT_STORAGE_KEY, &json);
        ContentStore::initialize(storage, DEFAULT_STORAGE_KEY)
    }

    fn ids(store: &ContentStore<MemStorage>) -> Vec<&str> {
        store.posts().iter().map(|p| p.id.as_str()).collect()
    }

    fn stored(store: &ContentStore<MemStorage>) -> Vec<Post> {
        let raw = store.storage().get_item(store.key()).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn empty_slot_yields_seed_set() {
        let store = ContentStore::initialize(MemStorage::new(), DEFAULT_STORAGE_KEY);
        assert_eq!(store.posts(), seed_posts().as_slice());
    }

    #[test]
    fn corrupt_slot_yields_seed_set() {
        let storage = MemStorage::with_item(DEFAULT_STORAGE_KEY, "{not json");
        let store = ContentStore::initialize(storage, DEFAULT_STORAGE_KEY);
        assert_eq!(store.posts(), seed_posts().as_slice());
    }

    #[test]
    fn wrong_shape_yields_seed_set() {
        let storage = MemStorage::with_item(DEFAULT_STORAGE_KEY, r#"{"id":"1"}"#);
        let store = ContentStore::initialize(storage, DEFAULT_STORAGE_KEY);
        assert_eq!(store.posts(), seed_posts().as_slice());
    }

    #[test]
    fn initialize_does_not_write() {
        let store = ContentStore::initialize(MemStorage::new(), DEFAULT_STORAGE_KEY);
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn stored_collection_is_loaded_in_order() {
        let store = store_with(&["9", "4", "7"]);
        assert_eq!(ids(&store), vec!["9", "4", "7"]);
    }

    #[test]
    fn stored_empty_array_is_not_replaced_by_seed() {
        let storage = MemStorage::with_item(DEFAULT_STORAGE_KEY, "[]");
        let store = ContentStore::initialize(storage, DEFAULT_STORAGE_KEY);
        assert!(store.posts().is_empty());
    }

    #[test]
    fn add_prepends_and_persists() {
        let mut store = store_with(&["1", "2"]);
        let new = post("5");
        store.add_post(new.clone()).unwrap();

        let mut expected = vec![new];
        expected.extend(posts(&["1", "2"]));
        assert_eq!(store.posts(), expected.as_slice());
        assert_eq!(stored(&store), expected);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = store_with(&["1", "2", "3"]);
        let mut replacement = post("2");
        replacement.title = "Rewritten".to_string();

        let replaced = store.update_post("2", replacement.clone()).unwrap();

        assert_eq!(replaced, 1);
        assert_eq!(store.posts().len(), 3);
        assert_eq!(store.posts()[1], replacement);
        assert_eq!(store.posts()[0], post("1"));
        assert_eq!(store.posts()[2], post("3"));
        assert_eq!(stored(&store), store.posts());
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = store_with(&["1", "2"]);
        let replaced = store.update_post("42", post("42")).unwrap();
        assert_eq!(replaced, 0);
        assert_eq!(store.posts(), posts(&["1", "2"]).as_slice());
    }

    #[test]
    fn update_replaces_every_duplicate() {
        let mut store = store_with(&["1", "2", "1"]);
        let mut replacement = post("1");
        replacement.title = "Both".to_string();

        assert_eq!(store.update_post("1", replacement).unwrap(), 2);
        assert_eq!(store.posts()[0].title, "Both");
        assert_eq!(store.posts()[2].title, "Both");
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut store = store_with(&["1", "2", "3"]);
        assert_eq!(store.delete_post("2").unwrap(), 1);
        assert_eq!(ids(&store), vec!["1", "3"]);
        assert_eq!(stored(&store), posts(&["1", "3"]));
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut store = store_with(&["1"]);
        assert_eq!(store.delete_post("9").unwrap(), 0);
        assert_eq!(ids(&store), vec!["1"]);
    }

    #[test]
    fn allow_policy_accepts_duplicates() {
        let mut store = store_with(&["1"]);
        store.add_post(post("1")).unwrap();
        assert_eq!(ids(&store), vec!["1", "1"]);
    }

    #[test]
    fn reject_policy_refuses_duplicate_id() {
        let mut store = store_with(&["1"]).with_duplicate_policy(DuplicatePolicy::Reject);
        let err = store.add_post(post("1")).unwrap_err();
        assert!(matches!(err, FolioError::DuplicatePost { field: "id", .. }));
        assert_eq!(ids(&store), vec!["1"]);
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn reject_policy_refuses_duplicate_slug() {
        let mut store = store_with(&["1"]).with_duplicate_policy(DuplicatePolicy::Reject);
        let mut other = post("2");
        other.slug = "post-1".to_string();
        let err = store.add_post(other).unwrap_err();
        assert!(matches!(err, FolioError::DuplicatePost { field: "slug", .. }));
    }

    #[test]
    fn observers_see_every_mutation() {
        let mut store = store_with(&["1", "2"]);
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |posts| sink.borrow_mut().push(posts.len()));

        store.add_post(post("3")).unwrap();
        store.update_post("1", post("1")).unwrap();
        store.delete_post("2").unwrap();

        assert_eq!(*seen.borrow(), vec![3, 3, 2]);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut store = store_with(&["1"]);
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.delete_post("1").unwrap();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn write_failure_is_returned_after_in_memory_change() {
        let mut store = store_with(&["1"]);
        store.storage().set_simulate_write_error(true);

        let err = store.add_post(post("2")).unwrap_err();

        assert!(matches!(err, FolioError::Storage(_)));
        assert_eq!(ids(&store), vec!["2", "1"]);
    }

    #[test]
    fn find_by_slug_returns_first_match() {
        let mut store = store_with(&["1", "2"]);
        let mut dup = post("3");
        dup.slug = "post-2".to_string();
        store.add_post(dup).unwrap();

        assert_eq!(store.find_by_slug("post-2").unwrap().id, "3");
        assert_eq!(store.find_by_id("1").unwrap().slug, "post-1");
        assert!(store.find_by_slug("missing").is_none());
    }

    #[test]
    fn reset_restores_seed_and_persists() {
        let mut store = store_with(&["1"]);
        store.reset().unwrap();
        assert_eq!(store.posts(), seed_posts().as_slice());
        assert_eq!(stored(&store), seed_posts());
    }

    #[test]
    fn reload_picks_up_external_writes() {
        let mut store = store_with(&["1"]);
        let json = serde_json::to_string(&posts(&["8"])).unwrap();
        store.storage().set_item(DEFAULT_STORAGE_KEY, &json).unwrap();

        store.reload();
        assert_eq!(ids(&store), vec!["8"]);
    }

    #[test]
    fn persisted_collection_round_trips() {
        let mut store = store_with(&[]);
        store.add_post(post("a")).unwrap();
        store.add_post(post("b")).unwrap();

        let reopened = ContentStore::initialize(
            MemStorage::with_item(DEFAULT_STORAGE_KEY, &serde_json::to_string(store.posts()).unwrap()),
            DEFAULT_STORAGE_KEY,
        );
        assert_eq!(reopened.posts(), store.posts());
    }
}
