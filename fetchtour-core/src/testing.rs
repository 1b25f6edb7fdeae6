//! In-memory `PostsApi` double for widget tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::PostsApi;
use crate::error::{ApiError, ApiResult};
use crate::model::{NewPost, Post};

/// A request the double received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewPost),
    Update(Post),
    Delete(u64),
}

/// Scripted responses; `Err(status)` answers with that HTTP status.
pub struct FakePosts {
    pub list: Result<Vec<Post>, u16>,
    pub create: Result<Post, u16>,
    pub update_status: u16,
    pub delete_status: u16,
    calls: Mutex<Vec<Call>>,
}

impl FakePosts {
    pub fn new() -> Self {
        Self {
            list: Ok(sample_posts(10)),
            create: Ok(Post {
                id: 101,
                title: String::new(),
                body: String::new(),
                user_id: 1,
            }),
            update_status: 200,
            delete_status: 200,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_list(mut self, list: Result<Vec<Post>, u16>) -> Self {
        self.list = list;
        self
    }

    pub fn with_create(mut self, create: Result<Post, u16>) -> Self {
        self.create = create;
        self
    }

    pub fn with_update_status(mut self, status: u16) -> Self {
        self.update_status = status;
        self
    }

    pub fn with_delete_status(mut self, status: u16) -> Self {
        self.delete_status = status;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn check(method: &'static str, url: &str, status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::status(method, url, status))
    }
}

#[async_trait]
impl PostsApi for FakePosts {
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        self.record(Call::List);
        match &self.list {
            Ok(posts) => Ok(posts.clone()),
            Err(status) => Err(ApiError::status("GET", "fake://posts", *status)),
        }
    }

    async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        self.record(Call::Create(post.clone()));
        match &self.create {
            Ok(created) => Ok(created.clone()),
            Err(status) => Err(ApiError::status("POST", "fake://posts", *status)),
        }
    }

    async fn update_post(&self, post: &Post) -> ApiResult<()> {
        self.record(Call::Update(post.clone()));
        check("PUT", &format!("fake://posts/{}", post.id), self.update_status)
    }

    async fn delete_post(&self, id: u64) -> ApiResult<()> {
        self.record(Call::Delete(id));
        check("DELETE", &format!("fake://posts/{}", id), self.delete_status)
    }
}

pub fn sample_posts(n: u64) -> Vec<Post> {
    (1..=n)
        .map(|id| Post {
            id,
            title: format!("post {}", id),
            body: format!("body of post {}", id),
            user_id: (id - 1) / 10 + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_item_calls_name_the_post() {
        let api = FakePosts::new().with_update_status(500).with_delete_status(404);

        let err = api.update_post(&sample_posts(3)[2]).await.unwrap_err();
        assert!(err.to_string().contains("fake://posts/3"));

        let err = api.delete_post(7).await.unwrap_err();
        assert!(err.to_string().contains("fake://posts/7"));
        assert_eq!(err.http_status(), Some(404));
    }
}
