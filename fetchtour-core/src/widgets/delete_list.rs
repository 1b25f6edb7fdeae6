//! Confirm-then-delete list (DELETE)
//!
//! Deletion is two-step: `request_delete` records which post awaits a yes/no
//! answer, then `confirm` sends the request or `decline` drops it. Removal
//! from the local list is optimistic, based on the HTTP status alone.

use tracing::{info, warn};

use crate::api::PostsApi;
use crate::error::ApiResult;
use crate::model::{truncate_posts, Post, PICK_LIST_LIMIT};
use crate::widgets::{Alert, LOAD_ERROR};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";
pub const DELETE_SUCCESS: &str = "Post deleted successfully!";
pub const DELETE_ERROR: &str = "Could not delete the post.";

/// Blocking yes/no prompt
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct DeleteList {
    posts: Vec<Post>,
    message: Option<Alert>,
    loading: bool,
    loading_in_flight: bool,
    /// Post waiting for the user's answer
    pending: Option<u64>,
    /// Post whose delete request is running
    deleting: Option<u64>,
    limit: usize,
}

impl DeleteList {
    pub fn new(limit: usize) -> Self {
        Self {
            posts: Vec::new(),
            message: None,
            loading: true,
            loading_in_flight: false,
            pending: None,
            deleting: None,
            limit,
        }
    }

    pub fn begin_mount(&mut self) -> bool {
        if self.loading_in_flight {
            return false;
        }
        self.loading_in_flight = true;
        self.loading = true;
        true
    }

    pub fn finish_mount(&mut self, result: ApiResult<Vec<Post>>) {
        self.loading_in_flight = false;
        self.loading = false;

        match result {
            Ok(posts) => {
                self.posts = truncate_posts(posts, self.limit);
                info!(kept = self.posts.len(), "delete list loaded");
            }
            Err(err) => {
                warn!(error = %err, "delete list failed to load");
                self.message = Some(Alert::danger(LOAD_ERROR));
            }
        }
    }

    pub async fn mount(&mut self, api: &dyn PostsApi) {
        if !self.begin_mount() {
            return;
        }
        let result = api.list_posts().await;
        self.finish_mount(result);
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: u64) -> bool {
        if self.deleting.is_some() || !self.posts.iter().any(|p| p.id == id) {
            return false;
        }
        self.pending = Some(id);
        true
    }

    /// The user said no: forget the request, touch nothing else.
    pub fn decline(&mut self) {
        self.pending = None;
    }

    /// The user said yes: hand out the id to delete.
    pub fn begin_confirm(&mut self) -> Option<u64> {
        if self.deleting.is_some() {
            return None;
        }
        let id = self.pending.take()?;
        self.deleting = Some(id);
        Some(id)
    }

    pub fn finish_delete(&mut self, result: ApiResult<()>) {
        let Some(id) = self.deleting.take() else {
            return;
        };

        match result {
            Ok(()) => {
                info!(id, "post deleted");
                self.posts.retain(|p| p.id != id);
                self.message = Some(Alert::success(DELETE_SUCCESS));
            }
            Err(err) => {
                warn!(id, error = %err, "delete failed");
                self.message = Some(Alert::danger(DELETE_ERROR));
            }
        }
    }

    /// Send the pending delete and settle. Returns whether a request was sent.
    pub async fn confirm(&mut self, api: &dyn PostsApi) -> bool {
        let Some(id) = self.begin_confirm() else {
            return false;
        };
        let result = api.delete_post(id).await;
        self.finish_delete(result);
        true
    }

    /// Request, prompt and delete in one call
    pub async fn delete_with(&mut self, api: &dyn PostsApi, id: u64, prompt: &dyn Confirm) -> bool {
        if !self.request_delete(id) {
            return false;
        }
        if !prompt.confirm(DELETE_PROMPT) {
            self.decline();
            return false;
        }
        self.confirm(api).await
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    pub fn message(&self) -> Option<&Alert> {
        self.message.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }
}

impl Default for DeleteList {
    fn default() -> Self {
        Self::new(PICK_LIST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_posts, Call, FakePosts};
    use crate::widgets::AlertKind;

    struct Answer(bool);

    impl Confirm for Answer {
        fn confirm(&self, _prompt: &str) -> bool {
            self.0
        }
    }

    fn ids(list: &DeleteList) -> Vec<u64> {
        list.posts().iter().map(|p| p.id).collect()
    }

    async fn mounted(api: &FakePosts) -> DeleteList {
        let mut list = DeleteList::default();
        list.mount(api).await;
        list
    }

    #[tokio::test]
    async fn test_mount_keeps_three() {
        let api = FakePosts::new().with_list(Ok(sample_posts(100)));
        let list = mounted(&api).await;
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_mount_failure_sets_error() {
        let api = FakePosts::new().with_list(Err(500));
        let mut list = mounted(&api).await;

        assert!(list.posts().is_empty());
        assert!(list.message().unwrap().is_error());
        assert!(!list.is_loading());
        assert!(!list.request_delete(1));
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_only_that_entry() {
        let api = FakePosts::new().with_list(Ok(sample_posts(10)));
        let mut list = DeleteList::new(10);
        list.mount(&api).await;

        assert!(list.delete_with(&api, 7, &Answer(true)).await);

        assert_eq!(ids(&list), vec![1, 2, 3, 4, 5, 6, 8, 9, 10]);
        assert_eq!(list.message().unwrap().kind, AlertKind::Success);
        assert_eq!(api.calls(), vec![Call::List, Call::Delete(7)]);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        assert!(!list.delete_with(&api, 2, &Answer(false)).await);

        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert_eq!(list.pending(), None);
        assert!(list.message().is_none());
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_two_step_flow() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        assert!(list.request_delete(3));
        assert_eq!(list.pending(), Some(3));
        list.decline();
        assert_eq!(list.pending(), None);

        assert!(list.request_delete(1));
        assert!(list.confirm(&api).await);
        assert_eq!(ids(&list), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_list() {
        let api = FakePosts::new().with_delete_status(500);
        let mut list = mounted(&api).await;

        assert!(list.delete_with(&api, 1, &Answer(true)).await);

        assert_eq!(ids(&list), vec![1, 2, 3]);
        let message = list.message().unwrap();
        assert!(message.is_error());
        assert!(!message.text.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_requested() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        assert!(!list.request_delete(42));
        assert!(!list.confirm(&api).await);
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_no_second_delete_while_one_runs() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        list.request_delete(1);
        assert_eq!(list.begin_confirm(), Some(1));
        assert!(!list.request_delete(2));
        assert!(list.is_deleting());

        list.finish_delete(Ok(()));
        assert_eq!(ids(&list), vec![2, 3]);
        assert!(list.request_delete(2));
    }
}
