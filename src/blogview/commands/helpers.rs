use crate::error::{BlogError, Result};
use crate::model::{EnrichedPost, PostId};
use crate::source::BlogSource;
use crate::store::{BlogStore, LoadStatus};

/// Runs the two-phase load unless posts were already fetched. A post failure
/// becomes an `Err` so commands can stop early.
pub fn ensure_loaded<S: BlogSource>(store: &mut BlogStore<S>) -> Result<()> {
    if store.state().fetched_at.is_none() {
        store.load();
    }
    match (store.state().status(), &store.state().error) {
        (LoadStatus::Errored, Some(message)) => Err(BlogError::FetchFailed(message.clone())),
        _ => Ok(()),
    }
}

/// A selector is a numeric post id, or otherwise a title slug.
pub fn find_post<'a, S: BlogSource>(
    store: &'a BlogStore<S>,
    selector: &str,
) -> Result<&'a EnrichedPost> {
    let selector = selector.trim();
    let found = match selector.parse::<PostId>() {
        Ok(id) => store.post_by_id(id),
        Err(_) => store.post_by_slug(selector),
    };
    found.ok_or_else(|| BlogError::PostNotFound(selector.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::sample_source;
    use crate::source::memory::InMemorySource;

    #[test]
    fn loads_once() {
        let mut store = BlogStore::new(sample_source());
        ensure_loaded(&mut store).unwrap();
        ensure_loaded(&mut store).unwrap();
        assert_eq!(store.source().post_calls(), 1);
        assert_eq!(store.source().user_calls(), 1);
    }

    #[test]
    fn surfaces_post_failure() {
        let mut store = BlogStore::new(InMemorySource::new().failing_posts());
        match ensure_loaded(&mut store) {
            Err(BlogError::FetchFailed(msg)) => assert_eq!(msg, "Failed to fetch blogs"),
            other => panic!("Expected FetchFailed, got {:?}", other),
        }
    }

    #[test]
    fn finds_by_id_or_slug() {
        let mut store = BlogStore::new(sample_source());
        ensure_loaded(&mut store).unwrap();

        assert_eq!(find_post(&store, "3").unwrap().title(), "Testing Rust");
        assert_eq!(find_post(&store, "react-tutorial").unwrap().id(), 1);
        assert!(matches!(
            find_post(&store, "404"),
            Err(BlogError::PostNotFound(_))
        ));
    }
}
