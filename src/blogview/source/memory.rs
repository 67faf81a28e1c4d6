use super::BlogSource;
use crate::error::{BlogError, Result, POSTS_FETCH_FAILED, USERS_FETCH_FAILED};
use crate::model::{Author, Post};
use std::cell::Cell;

/// Canned source. An endpoint set to `None` behaves like a non-success response.
#[derive(Debug)]
pub struct InMemorySource {
    posts: Option<Vec<Post>>,
    users: Option<Vec<Author>>,
    post_calls: Cell<usize>,
    user_calls: Cell<usize>,
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySource {
    /// Both endpoints succeed with empty collections.
    pub fn new() -> Self {
        Self {
            posts: Some(Vec::new()),
            users: Some(Vec::new()),
            post_calls: Cell::new(0),
            user_calls: Cell::new(0),
        }
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = Some(posts);
        self
    }

    pub fn with_users(mut self, users: Vec<Author>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn failing_posts(mut self) -> Self {
        self.posts = None;
        self
    }

    pub fn failing_users(mut self) -> Self {
        self.users = None;
        self
    }

    pub fn set_posts(&mut self, posts: Option<Vec<Post>>) {
        self.posts = posts;
    }

    pub fn set_users(&mut self, users: Option<Vec<Author>>) {
        self.users = users;
    }

    pub fn post_calls(&self) -> usize {
        self.post_calls.get()
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.get()
    }
}

impl BlogSource for InMemorySource {
    fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.post_calls.set(self.post_calls.get() + 1);
        self.posts
            .clone()
            .ok_or_else(|| BlogError::FetchFailed(POSTS_FETCH_FAILED.to_string()))
    }

    fn fetch_users(&self) -> Result<Vec<Author>> {
        self.user_calls.set(self.user_calls.get() + 1);
        self.users
            .clone()
            .ok_or_else(|| BlogError::UserFetchFailed(USERS_FETCH_FAILED.to_string()))
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn serves_canned_data_and_counts_calls() {
        let source = sample_source();
        assert_eq!(source.fetch_posts().unwrap().len(), 3);
        assert_eq!(source.fetch_users().unwrap().len(), 2);
        assert_eq!(source.fetch_posts().unwrap()[0].title, "React Tutorial");
        assert_eq!(source.post_calls(), 2);
        assert_eq!(source.user_calls(), 1);
    }

    #[test]
    fn failing_endpoints_use_status_messages() {
        let source = InMemorySource::new().failing_posts().failing_users();
        match source.fetch_posts() {
            Err(e @ BlogError::FetchFailed(_)) => {
                assert_eq!(e.to_string(), "Failed to fetch blogs")
            }
            other => panic!("Expected FetchFailed, got {:?}", other),
        }
        assert!(matches!(
            source.fetch_users(),
            Err(BlogError::UserFetchFailed(_))
        ));
    }

    #[test]
    fn endpoints_can_be_toggled() {
        let mut source = InMemorySource::new().failing_posts();
        assert!(source.fetch_posts().is_err());
        source.set_posts(Some(sample_posts()));
        assert_eq!(source.fetch_posts().unwrap().len(), 3);
    }
}
