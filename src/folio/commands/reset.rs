use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::content::ContentStore;
use crate::store::KeyValueStorage;

pub fn run<S: KeyValueStorage>(store: &mut ContentStore<S>) -> Result<CmdResult> {
    let dropped = store.posts().len();
    store.reset()?;

    let mut result = CmdResult::default().with_listed_posts(store.posts().to_vec());
    result.add_message(CmdMessage::success(format!(
        "Restored {} seed posts (replaced {})",
        store.posts().len(),
        dropped
    )));
    Ok(result)
}
