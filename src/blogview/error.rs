use thiserror::Error;

/// Message surfaced when the post endpoint answers with a non-success status.
pub const POSTS_FETCH_FAILED: &str = "Failed to fetch blogs";

/// Message used when the author endpoint answers with a non-success status.
pub const USERS_FETCH_FAILED: &str = "Failed to fetch users";

#[derive(Error, Debug)]
pub enum BlogError {
    /// Post fetch failed. Displays as the bare message so it can be shown as-is.
    #[error("{0}")]
    FetchFailed(String),

    #[error("{0}")]
    UserFetchFailed(String),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BlogError>;
