use crate::commands::{CmdMessage, CmdResult, PostDefaults};
use crate::error::{FolioError, Result};
use crate::model::{estimate_read_time, parse_tags, slugify, PostDraft};
use crate::store::content::ContentStore;
use crate::store::KeyValueStorage;

/// Rewrites the post with `id` from `draft`. Identity, publish date and
/// author are kept; everything derived from the draft is recomputed.
pub fn run<S: KeyValueStorage>(
    store: &mut ContentStore<S>,
    id: &str,
    draft: &PostDraft,
    defaults: &PostDefaults,
) -> Result<CmdResult> {
    if draft.title.trim().is_empty() {
        return Err(FolioError::Api("Title cannot be empty".into()));
    }

    let mut result = CmdResult::default();
    let Some(existing) = store.find_by_id(id) else {
        result.add_message(CmdMessage::info(format!("No post with id {}", id)));
        return Ok(result);
    };

    let mut post = existing.clone();
    post.title = draft.title.clone();
    post.excerpt = draft.excerpt.clone();
    post.content = draft.content.clone();
    post.read_time = estimate_read_time(&draft.content);
    post.image = if draft.image.is_empty() {
        defaults.fallback_image.clone()
    } else {
        draft.image.clone()
    };
    post.tags = parse_tags(&draft.tags);
    post.slug = slugify(&draft.title);

    store.update_post(id, post.clone())?;
    result.add_message(CmdMessage::success(format!(
        "Post updated ({}): {}",
        post.slug, post.title
    )));
    result.affected_posts.push(post);
    Ok(result)
}

/// Draft pre-filled from an existing post, for partial edits.
pub fn draft_from_existing<S: KeyValueStorage>(
    store: &ContentStore<S>,
    id: &str,
) -> Result<PostDraft> {
    let post = store
        .find_by_id(id)
        .ok_or_else(|| FolioError::PostNotFound(id.to_string()))?;
    Ok(PostDraft {
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        content: post.content.clone(),
        image: post.image.clone(),
        tags: post.tags.join(", "),
    })
}
