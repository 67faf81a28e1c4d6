use super::BlogSource;
use crate::error::{BlogError, Result, POSTS_FETCH_FAILED, USERS_FETCH_FAILED};
use crate::model::{Author, Post};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

const POSTS_PATH: &str = "posts";
const USERS_PATH: &str = "users";

/// Reads posts and authors from a JSONPlaceholder-compatible HTTP API.
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body. `Err` carries a plain message; the
    /// caller picks the error variant.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        status_message: &str,
    ) -> std::result::Result<T, String> {
        let url = self.endpoint(path);
        debug!(%url, "sending request");

        let response = self.client.get(&url).send().map_err(|e| e.to_string())?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(status_message.to_string());
        }
        response.json::<T>().map_err(|e| e.to_string())
    }
}

impl BlogSource for HttpSource {
    fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.get_json(POSTS_PATH, POSTS_FETCH_FAILED)
            .map_err(BlogError::FetchFailed)
    }

    fn fetch_users(&self) -> Result<Vec<Author>> {
        self.get_json(USERS_PATH, USERS_FETCH_FAILED)
            .map_err(BlogError::UserFetchFailed)
    }
}
