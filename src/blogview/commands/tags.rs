use crate::commands::CmdResult;
use crate::error::Result;
use crate::source::BlogSource;
use crate::store::BlogStore;

use super::helpers::ensure_loaded;

pub fn run<S: BlogSource>(store: &mut BlogStore<S>) -> Result<CmdResult> {
    ensure_loaded(store)?;
    let selected = store.state().selected_tag.clone();
    Ok(CmdResult::default().with_tags(store.all_tags(), selected))
}
