//! # Source Layer
//!
//! The [`BlogSource`] trait abstracts the two remote read endpoints the store
//! depends on. Everything above this layer works against the trait, so the store
//! and commands can be exercised without a network.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: Production HTTP/JSON source
//!   - `GET {base_url}/posts`
//!   - `GET {base_url}/users`
//!   - No request bodies, no auth headers, no pagination
//!
//! - [`memory::InMemorySource`]: In-memory source for testing
//!   - Canned posts and users
//!   - Either endpoint can be made to fail
//!
//! ## Failure Contract
//!
//! Post failures come back as [`BlogError::FetchFailed`](crate::error::BlogError::FetchFailed),
//! author failures as [`BlogError::UserFetchFailed`](crate::error::BlogError::UserFetchFailed).
//! A non-success response uses the fixed messages in [`crate::error`]; transport
//! and decoding failures carry the underlying message.

use crate::error::Result;
use crate::model::{Author, Post};

pub mod http;
pub mod memory;

pub trait BlogSource {
    /// Fetch all posts, in the order the source returns them.
    fn fetch_posts(&self) -> Result<Vec<Post>>;

    /// Fetch all authors.
    fn fetch_users(&self) -> Result<Vec<Author>>;
}

impl<S: BlogSource + ?Sized> BlogSource for &S {
    fn fetch_posts(&self) -> Result<Vec<Post>> {
        (**self).fetch_posts()
    }

    fn fetch_users(&self) -> Result<Vec<Author>> {
        (**self).fetch_users()
    }
}
