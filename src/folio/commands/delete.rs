use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::content::ContentStore;
use crate::store::KeyValueStorage;

pub fn run<S: KeyValueStorage, I: AsRef<str>>(
    store: &mut ContentStore<S>,
    ids: &[I],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let Some(post) = store.find_by_id(id).cloned() else {
            result.add_message(CmdMessage::warning(format!("No post with id {}", id)));
            continue;
        };
        store.delete_post(id)?;
        result.add_message(CmdMessage::success(format!(
            "Post deleted ({}): {}",
            post.id, post.title
        )));
        result.affected_posts.push(post);
    }

    Ok(result)
}
