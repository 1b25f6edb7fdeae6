//! Network calls off the render loop
//!
//! The app turns key presses into `Request`s. Each request runs on its own
//! tokio task and reports back a `Completion` over an unbounded channel,
//! which the loop drains before every frame.

use std::sync::Arc;

use fetchtour_core::error::ApiResult;
use fetchtour_core::{NewPost, Post, PostsApi};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// A network call a widget asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    LoadFetchList,
    LoadEditList,
    LoadDeleteList,
    Create(NewPost),
    Update(Post),
    Delete(u64),
}

/// The settled result, tagged with the widget it belongs to
#[derive(Debug)]
pub enum Completion {
    FetchListLoaded(ApiResult<Vec<Post>>),
    EditListLoaded(ApiResult<Vec<Post>>),
    DeleteListLoaded(ApiResult<Vec<Post>>),
    Created(ApiResult<Post>),
    Updated(ApiResult<()>),
    Deleted(ApiResult<()>),
}

/// Run one request to completion
pub async fn perform(api: &dyn PostsApi, request: Request) -> Completion {
    match request {
        Request::LoadFetchList => Completion::FetchListLoaded(api.list_posts().await),
        Request::LoadEditList => Completion::EditListLoaded(api.list_posts().await),
        Request::LoadDeleteList => Completion::DeleteListLoaded(api.list_posts().await),
        Request::Create(post) => Completion::Created(api.create_post(&post).await),
        Request::Update(post) => Completion::Updated(api.update_post(&post).await),
        Request::Delete(id) => Completion::Deleted(api.delete_post(id).await),
    }
}

/// Spawns requests and forwards their completions
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn PostsApi>,
    tx: UnboundedSender<Completion>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn PostsApi>, tx: UnboundedSender<Completion>) -> Self {
        Self { api, tx }
    }

    pub fn dispatch(&self, request: Request) {
        debug!(?request, "dispatching");
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let completion = perform(api.as_ref(), request).await;
            // receiver is gone only after the loop exited
            let _ = tx.send(completion);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fetchtour_core::error::ApiError;
    use tokio::sync::mpsc;

    /// Answers every read with two posts and refuses every delete
    struct TwoPosts;

    #[async_trait]
    impl PostsApi for TwoPosts {
        async fn list_posts(&self) -> ApiResult<Vec<Post>> {
            Ok((1..=2)
                .map(|id| Post {
                    id,
                    title: format!("t{}", id),
                    body: String::new(),
                    user_id: 1,
                })
                .collect())
        }

        async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
            Ok(Post {
                id: 101,
                title: post.title.clone(),
                body: post.body.clone(),
                user_id: post.user_id,
            })
        }

        async fn update_post(&self, _post: &Post) -> ApiResult<()> {
            Ok(())
        }

        async fn delete_post(&self, id: u64) -> ApiResult<()> {
            Err(ApiError::status("DELETE", format!("test://posts/{}", id), 404))
        }
    }

    #[tokio::test]
    async fn test_perform_tags_completion_with_widget() {
        let completion = perform(&TwoPosts, Request::LoadEditList).await;
        assert!(matches!(completion, Completion::EditListLoaded(Ok(ref posts)) if posts.len() == 2));

        let completion = perform(&TwoPosts, Request::Create(NewPost::new("A", "B", 1))).await;
        assert!(matches!(completion, Completion::Created(Ok(ref post)) if post.id == 101));

        let completion = perform(&TwoPosts, Request::Delete(9)).await;
        assert!(matches!(completion, Completion::Deleted(Err(_))));
    }

    #[tokio::test]
    async fn test_dispatcher_forwards_completions() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(Arc::new(TwoPosts), tx);

        dispatcher.dispatch(Request::LoadFetchList);
        dispatcher.dispatch(Request::Delete(1));

        let mut loaded = false;
        let mut deleted = false;
        for _ in 0..2 {
            match rx.recv().await {
                Some(Completion::FetchListLoaded(Ok(_))) => loaded = true,
                Some(Completion::Deleted(Err(_))) => deleted = true,
                other => panic!("unexpected completion: {:?}", other),
            }
        }
        assert!(loaded && deleted);
    }
}
