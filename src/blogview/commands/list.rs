use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::source::BlogSource;
use crate::store::BlogStore;

use super::helpers::ensure_loaded;

pub const NO_MATCHES: &str = "No articles found matching your criteria.";

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
}

pub fn run<S: BlogSource>(store: &mut BlogStore<S>, query: ListQuery) -> Result<CmdResult> {
    ensure_loaded(store)?;

    store.set_search_query(query.search.unwrap_or_default());
    store.set_selected_tag(query.tag);

    let listed = store.filtered_posts();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(NO_MATCHES));
    }
    Ok(result.with_listed_posts(listed))
}
