use crate::commands::CmdResult;
use crate::error::Result;
use crate::source::BlogSource;
use crate::store::BlogStore;

use super::helpers::{ensure_loaded, find_post};

pub fn run<S: BlogSource>(store: &mut BlogStore<S>, selector: &str) -> Result<CmdResult> {
    ensure_loaded(store)?;
    let post = find_post(store, selector)?.clone();
    Ok(CmdResult::default().with_listed_posts(vec![post]))
}
