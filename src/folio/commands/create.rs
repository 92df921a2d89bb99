use crate::commands::{CmdMessage, CmdResult, PostDefaults};
use crate::error::{FolioError, Result};
use crate::model::{Post, PostDraft};
use crate::store::content::ContentStore;
use crate::store::KeyValueStorage;
use chrono::{DateTime, TimeZone};

pub fn run<S, Tz>(
    store: &mut ContentStore<S>,
    draft: &PostDraft,
    now: &DateTime<Tz>,
    defaults: &PostDefaults,
) -> Result<CmdResult>
where
    S: KeyValueStorage,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if draft.title.trim().is_empty() {
        return Err(FolioError::Api("Title cannot be empty".into()));
    }

    let post = Post::from_draft(draft, now, &defaults.author, &defaults.fallback_image);
    store.add_post(post.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post created ({}): {}",
        post.slug, post.title
    )));
    result.affected_posts.push(post);
    Ok(result)
}
