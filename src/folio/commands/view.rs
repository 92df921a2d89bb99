use crate::commands::CmdResult;
use crate::error::{FolioError, Result};
use crate::store::content::ContentStore;
use crate::store::KeyValueStorage;

/// Looks a post up by slug, the way the `/blog/:slug` route does.
pub fn run<S: KeyValueStorage>(store: &ContentStore<S>, slug: &str) -> Result<CmdResult> {
    let post = store
        .find_by_slug(slug)
        .cloned()
        .ok_or_else(|| FolioError::PostNotFound(slug.to_string()))?;
    Ok(CmdResult::default().with_listed_posts(vec![post]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStorage;
    use crate::store::DEFAULT_STORAGE_KEY;

    #[test]
    fn finds_post_by_slug() {
        let store = ContentStore::initialize(MemStorage::new(), DEFAULT_STORAGE_KEY);
        let result = run(&store, "introduction-machine-learning-beginners").unwrap();
        assert_eq!(result.listed_posts[0].id, "3");
    }

    #[test]
    fn missing_slug_is_not_found() {
        let store = ContentStore::initialize(MemStorage::new(), DEFAULT_STORAGE_KEY);
        assert!(matches!(
            run(&store, "nope"),
            Err(FolioError::PostNotFound(_))
        ));
    }
}
