//! # Storage Layer
//!
//! Posts are persisted through a single key-value slot, the way a browser's
//! local storage holds them. [`KeyValueStorage`] is that capability; the
//! [`content::ContentStore`] sits on top of it and owns the post collection.
//!
//! ## Persisted Layout
//!
//! One entry, keyed by a fixed literal (`blogPosts` by default), whose value
//! is the whole collection as a JSON array of post objects. There is no schema
//! version: any shape change to `Post` breaks previously stored data, which
//! then falls back to the seed set on the next load.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: one `<key>.json` file per key inside a data directory.
//! - [`memory::MemStorage`]: for testing logic without filesystem I/O.
//!
//! ```text
//! <data dir>/
//! ├── config.json        # FolioConfig
//! └── blogPosts.json     # Persisted post collection
//! ```

use crate::error::Result;

pub mod content;
pub mod fs;
pub mod memory;

/// Key the post collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "blogPosts";

/// Abstract interface for string-valued key-value persistence.
///
/// All methods take `&self`; implementations that need mutation use interior
/// mutability since folio is single-threaded.
pub trait KeyValueStorage {
    /// Read the value stored under `key`. `Ok(None)` when nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value entirely.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
