use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Post;
use crate::store::content::ContentStore;
use crate::store::KeyValueStorage;

/// Category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Blog index filter. Both criteria are case-insensitive substring matches
/// and the store's order is preserved.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Keep posts with a tag containing this. `None` or `All` keeps everything.
    pub category: Option<String>,
    /// Keep posts whose title, excerpt or any tag contains this.
    pub search: Option<String>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        self.matches_category(post) && self.matches_search(post)
    }

    fn matches_category(&self, post: &Post) -> bool {
        match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => {
                let needle = category.to_lowercase();
                post.tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
            }
        }
    }

    fn matches_search(&self, post: &Post) -> bool {
        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.excerpt.to_lowercase().contains(&needle)
                    || post
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            }
        }
    }
}

pub fn run<S: KeyValueStorage>(store: &ContentStore<S>, filter: &PostFilter) -> Result<CmdResult> {
    let listed = store
        .posts()
        .iter()
        .filter(|post| filter.matches(post))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_posts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStorage;
    use crate::store::DEFAULT_STORAGE_KEY;

    fn store() -> ContentStore<MemStorage> {
        ContentStore::initialize(MemStorage::new(), DEFAULT_STORAGE_KEY)
    }

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.listed_posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn no_filter_lists_everything_in_order() {
        let result = run(&store(), &PostFilter::default()).unwrap();
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn all_category_is_no_filter() {
        let filter = PostFilter {
            category: Some("All".into()),
            ..Default::default()
        };
        assert_eq!(run(&store(), &filter).unwrap().listed_posts.len(), 3);
    }

    #[test]
    fn category_matches_tag_substrings() {
        let filter = PostFilter {
            category: Some("web development".into()),
            ..Default::default()
        };
        assert_eq!(ids(&run(&store(), &filter).unwrap()), vec!["2"]);
    }

    #[test]
    fn search_covers_title_excerpt_and_tags() {
        let by_title = PostFilter {
            search: Some("MACHINE".into()),
            ..Default::default()
        };
        assert_eq!(ids(&run(&store(), &by_title).unwrap()), vec!["3"]);

        let by_excerpt = PostFilter {
            search: Some("backend".into()),
            ..Default::default()
        };
        assert_eq!(ids(&run(&store(), &by_excerpt).unwrap()), vec!["2"]);

        let by_tag = PostFilter {
            search: Some("science".into()),
            ..Default::default()
        };
        assert_eq!(ids(&run(&store(), &by_tag).unwrap()), vec!["1"]);
    }

    #[test]
    fn category_and_search_combine() {
        let filter = PostFilter {
            category: Some("AI".into()),
            search: Some("data".into()),
        };
        assert!(run(&store(), &filter).unwrap().listed_posts.is_empty());
    }
}
