//! # Blog Store
//!
//! [`BlogStore`] is the state container every UI reads from. It is created once,
//! owned by whoever drives the UI, and passed around by reference. There is no
//! process-wide instance.
//!
//! The container surface is small:
//! - **get**: [`BlogStore::state`] returns the current [`BlogState`]
//! - **subscribe**: [`BlogStore::subscribe`] registers a listener that is called
//!   with the new state after every mutation
//! - **dispatch**: [`BlogStore::dispatch`] applies an [`Action`]
//!
//! Each action also has a direct method (`fetch_posts`, `set_search_query`, ...).
//!
//! ## Loading
//!
//! Posts and authors come from two endpoints. [`BlogStore::load`] runs them as
//! an explicit two-phase sequence: posts first, then authors, then the join.
//! The two fetches can still be called on their own in any order. Authors that
//! arrive first are kept and joined when posts arrive.
//!
//! A failed post fetch is surfaced through [`BlogState::error`]. A failed author
//! fetch is only logged; posts stay visible without author names.
//!
//! ## Execution Model
//!
//! Single-threaded and synchronous. Mutations replace whole fields. There are no
//! retries and no cancellation; if a fetch is called twice the last one to
//! finish wins.

use crate::enrich::{attach_authors, Enricher};
use crate::filter::{collect_tags, PostFilter};
use crate::helpers::generate_slug;
use crate::model::{Author, EnrichedPost, PostId};
use crate::source::BlogSource;
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogState {
    /// Enriched posts, in API response order.
    pub posts: Vec<EnrichedPost>,
    pub authors: Vec<Author>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub search_query: String,
    pub selected_tag: Option<String>,
    /// When posts were last fetched successfully.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl BlogState {
    pub fn status(&self) -> LoadStatus {
        if self.is_loading {
            LoadStatus::Loading
        } else if self.error.is_some() {
            LoadStatus::Errored
        } else if self.fetched_at.is_some() {
            LoadStatus::Loaded
        } else {
            LoadStatus::Idle
        }
    }

    pub fn filter(&self) -> PostFilter {
        PostFilter::new(self.search_query.clone(), self.selected_tag.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchPosts,
    FetchUsers,
    Load,
    SetSearchQuery(String),
    SetSelectedTag(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&BlogState)>;

pub struct BlogStore<S: BlogSource> {
    source: S,
    enricher: Enricher,
    state: BlogState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: BlogSource> BlogStore<S> {
    pub fn new(source: S) -> Self {
        Self::with_enricher(source, Enricher::default())
    }

    pub fn with_enricher(source: S, enricher: Enricher) -> Self {
        Self {
            source,
            enricher,
            state: BlogState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &BlogState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn subscribe(&mut self, listener: impl Fn(&BlogState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::FetchPosts => self.fetch_posts(),
            Action::FetchUsers => self.fetch_users(),
            Action::Load => self.load(),
            Action::SetSearchQuery(query) => self.set_search_query(query),
            Action::SetSelectedTag(tag) => self.set_selected_tag(tag),
        }
    }

    pub fn fetch_posts(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
        self.notify();

        match self.source.fetch_posts() {
            Ok(posts) => {
                let mut enriched = self.enricher.enrich_all(posts);
                if !self.state.authors.is_empty() {
                    attach_authors(&mut enriched, &self.state.authors);
                }
                info!(count = enriched.len(), "fetched posts");
                self.state.posts = enriched;
                self.state.fetched_at = Some(self.enricher.now());
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch posts");
                self.state.error = Some(e.to_string());
            }
        }

        self.state.is_loading = false;
        self.notify();
    }

    pub fn fetch_users(&mut self) {
        match self.source.fetch_users() {
            Ok(authors) => {
                info!(count = authors.len(), "fetched authors");
                attach_authors(&mut self.state.posts, &authors);
                self.state.authors = authors;
                self.notify();
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch users");
            }
        }
    }

    /// Posts, then authors. Authors are fetched even when posts fail, so a
    /// later post refetch has them to join against.
    pub fn load(&mut self) {
        self.fetch_posts();
        self.fetch_users();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.notify();
    }

    pub fn set_selected_tag(&mut self, tag: Option<String>) {
        self.state.selected_tag = tag;
        self.notify();
    }

    /// Posts matching the current search and tag, in stored order.
    pub fn filtered_posts(&self) -> Vec<EnrichedPost> {
        self.state.filter().apply(&self.state.posts)
    }

    pub fn post_by_id(&self, id: PostId) -> Option<&EnrichedPost> {
        self.state.posts.iter().find(|p| p.id() == id)
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&EnrichedPost> {
        let wanted = generate_slug(slug);
        self.state.posts.iter().find(|p| p.slug() == wanted)
    }

    /// Tag filter options: every tag on a stored post, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        collect_tags(&self.state.posts)
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}
