//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! every folio operation, whatever the UI.
//!
//! The facade owns the [`ContentStore`], supplies the current time to
//! commands that stamp posts, and hands back structured `CmdResult`s. It does
//! no formatting and no terminal I/O.
//!
//! `FolioApi<S: KeyValueStorage>` is generic over the storage backend:
//! - Production: `FolioApi<FileStorage>`
//! - Testing: `FolioApi<MemStorage>`

use crate::commands;
use crate::config::FolioConfig;
use crate::error::Result;
use crate::model::PostDraft;
use crate::store::content::ContentStore;
use crate::store::KeyValueStorage;
use chrono::Local;

pub struct FolioApi<S: KeyValueStorage> {
    store: ContentStore<S>,
    defaults: commands::PostDefaults,
    paths: commands::FolioPaths,
}

impl<S: KeyValueStorage> FolioApi<S> {
    /// Builds the content store over `storage` using the key, duplicate
    /// policy and post defaults from `config`.
    pub fn new(storage: S, config: &FolioConfig, paths: commands::FolioPaths) -> Self {
        let store = ContentStore::initialize(storage, config.storage_key.clone())
            .with_duplicate_policy(config.duplicates);
        Self {
            store,
            defaults: commands::PostDefaults::from(config),
            paths,
        }
    }

    pub fn create_post(&mut self, draft: &PostDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft, &Local::now(), &self.defaults)
    }

    pub fn update_post(&mut self, id: &str, draft: &PostDraft) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, draft, &self.defaults)
    }

    /// Current contents of a post as a draft, for partial edits.
    pub fn draft_for(&self, id: &str) -> Result<PostDraft> {
        commands::update::draft_from_existing(&self.store, id)
    }

    pub fn delete_posts<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn list_posts(&self, filter: &PostFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_post(&self, slug: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, slug)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &ContentStore<S> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::PostFilter;
pub use commands::{CmdMessage, CmdResult, FolioPaths, MessageLevel, PostDefaults};
