//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for UIs. It dispatches to `commands/*.rs` and returns structured
//! [`CmdResult`]s. It does no business logic, no I/O and no formatting.
//!
//! `BlogApi<S: BlogSource>` is generic over the source:
//! - Production: `BlogApi<HttpSource>`
//! - Testing: `BlogApi<InMemorySource>`

use crate::commands;
use crate::error::Result;
use crate::source::BlogSource;
use crate::store::BlogStore;
use std::path::{Path, PathBuf};

pub struct BlogApi<S: BlogSource> {
    store: BlogStore<S>,
    config_dir: PathBuf,
}

impl<S: BlogSource> BlogApi<S> {
    pub fn new(store: BlogStore<S>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn list_posts(&mut self, query: ListQuery) -> Result<CmdResult> {
        commands::list::run(&mut self.store, query)
    }

    pub fn view_post(&mut self, selector: &str) -> Result<CmdResult> {
        commands::view::run(&mut self.store, selector)
    }

    pub fn list_tags(&mut self) -> Result<CmdResult> {
        commands::tags::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &BlogStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BlogStore<S> {
        &mut self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use commands::config::ConfigAction;
pub use commands::list::ListQuery;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
