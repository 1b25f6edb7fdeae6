//! Posts service client
//!
//! `PostsApi` is the seam the widgets talk to. `HttpPostsClient` is the real
//! implementation over reqwest; tests swap in an in-memory double.
//!
//! | operation     | request                 | success                  |
//! |---------------|-------------------------|--------------------------|
//! | `list_posts`  | `GET /posts`            | 2xx + JSON array         |
//! | `create_post` | `POST /posts` (JSON)    | 2xx + JSON object w/ id  |
//! | `update_post` | `PUT /posts/{id}` (JSON)| 2xx, body ignored        |
//! | `delete_post` | `DELETE /posts/{id}`    | 2xx, body ignored        |

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::model::{NewPost, Post};

/// Operations against the remote posts collection
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the whole collection
    async fn list_posts(&self) -> ApiResult<Vec<Post>>;

    /// Create a post and return it with its server-assigned id
    async fn create_post(&self, post: &NewPost) -> ApiResult<Post>;

    /// Replace a post with the full record given
    async fn update_post(&self, post: &Post) -> ApiResult<()>;

    /// Delete a post by id
    async fn delete_post(&self, id: u64) -> ApiResult<()>;
}

/// reqwest-backed client for a JSONPlaceholder-style service
#[derive(Debug, Clone)]
pub struct HttpPostsClient {
    client: Client,
    base_url: String,
}

impl HttpPostsClient {
    /// Build a client from resolved API settings
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }
}

#[async_trait]
impl PostsApi for HttpPostsClient {
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let url = self.collection_url();
        debug!(%url, "GET posts");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::transport("GET", &url, e))?;

        let response = ensure_success("GET", &url, response)?;
        decode_json(response, "GET", &url, "posts list").await
    }

    async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        let url = self.collection_url();
        debug!(%url, title = %post.title, "POST post");

        // .json() also sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(post)
            .send()
            .await
            .map_err(|e| ApiError::transport("POST", &url, e))?;

        let response = ensure_success("POST", &url, response)?;
        decode_json(response, "POST", &url, "created post").await
    }

    async fn update_post(&self, post: &Post) -> ApiResult<()> {
        let url = self.item_url(post.id);
        debug!(%url, "PUT post");

        let response = self
            .client
            .put(&url)
            .json(post)
            .send()
            .await
            .map_err(|e| ApiError::transport("PUT", &url, e))?;

        ensure_success("PUT", &url, response)?;
        Ok(())
    }

    async fn delete_post(&self, id: u64) -> ApiResult<()> {
        let url = self.item_url(id);
        debug!(%url, "DELETE post");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::transport("DELETE", &url, e))?;

        ensure_success("DELETE", &url, response)?;
        Ok(())
    }
}

fn ensure_success(method: &'static str, url: &str, response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::status(method, url, status.as_u16()))
    }
}

async fn decode_json<T: DeserializeOwned>(
    response: Response,
    method: &'static str,
    url: &str,
    context: &str,
) -> ApiResult<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::transport(method, url, e))?;

    serde_json::from_str(&text).map_err(|e| ApiError::decode(context, e))
}

/// Strip trailing slashes and reject anything that is not http(s).
pub fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(ApiError::invalid_base_url(raw, "must not be empty"));
    }

    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| ApiError::invalid_base_url(raw, "scheme must be http or https"))?;

    if rest.is_empty() {
        return Err(ApiError::invalid_base_url(raw, "missing host"));
    }

    Ok(trimmed.to_string())
}
