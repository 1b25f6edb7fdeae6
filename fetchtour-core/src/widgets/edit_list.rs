//! Pick-and-edit list (PUT)
//!
//! Selecting a post copies its title/body into the edit fields. A successful
//! update patches the local copy from the submitted record; the response
//! body is never consulted.

use tracing::{info, warn};

use crate::api::PostsApi;
use crate::error::ApiResult;
use crate::model::{truncate_posts, Post, PICK_LIST_LIMIT};
use crate::widgets::{Alert, LOAD_ERROR};

pub const UPDATE_SUCCESS: &str = "Post updated successfully!";
pub const UPDATE_ERROR: &str = "Could not update the post.";

#[derive(Debug, Clone)]
pub struct EditList {
    posts: Vec<Post>,
    selected: Option<Post>,
    title: String,
    body: String,
    message: Option<Alert>,
    loading: bool,
    loading_in_flight: bool,
    /// Record sent by the pending update
    submitting: Option<Post>,
    limit: usize,
}

impl EditList {
    pub fn new(limit: usize) -> Self {
        Self {
            posts: Vec::new(),
            selected: None,
            title: String::new(),
            body: String::new(),
            message: None,
            loading: true,
            loading_in_flight: false,
            submitting: None,
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
                info!(kept = self.posts.len(), "edit list loaded");
            }
            Err(err) => {
                warn!(error = %err, "edit list failed to load");
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

    /// Select a post for editing. Unknown ids are ignored.
    pub fn select(&mut self, id: u64) -> bool {
        if self.submitting.is_some() {
            return false;
        }
        let Some(post) = self.posts.iter().find(|p| p.id == id) else {
            return false;
        };
        self.title = post.title.clone();
        self.body = post.body.clone();
        self.selected = Some(post.clone());
        true
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if self.selected.is_some() && self.submitting.is_none() {
            self.title = title.into();
        }
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        if self.selected.is_some() && self.submitting.is_none() {
            self.body = body.into();
        }
    }

    /// Full record for the update, or None without a selection or while
    /// another update is pending.
    pub fn begin_submit(&mut self) -> Option<Post> {
        if self.submitting.is_some() {
            return None;
        }
        let selected = self.selected.as_ref()?;
        let record = selected.with_edits(&self.title, &self.body);
        self.submitting = Some(record.clone());
        Some(record)
    }

    pub fn finish_submit(&mut self, result: ApiResult<()>) {
        let Some(record) = self.submitting.take() else {
            return;
        };

        match result {
            Ok(()) => {
                info!(id = record.id, "post updated");
                if let Some(entry) = self.posts.iter_mut().find(|p| p.id == record.id) {
                    entry.title = record.title;
                    entry.body = record.body;
                }
                self.message = Some(Alert::success(UPDATE_SUCCESS));
                self.selected = None;
                self.title.clear();
                self.body.clear();
            }
            Err(err) => {
                warn!(id = record.id, error = %err, "update failed");
                self.message = Some(Alert::danger(UPDATE_ERROR));
            }
        }
    }

    /// Submit and settle. Returns whether a request was sent.
    pub async fn submit(&mut self, api: &dyn PostsApi) -> bool {
        let Some(record) = self.begin_submit() else {
            return false;
        };
        let result = api.update_post(&record).await;
        self.finish_submit(result);
        true
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn selected(&self) -> Option<&Post> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected.as_ref().map(|p| p.id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn message(&self) -> Option<&Alert> {
        self.message.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }
}

impl Default for EditList {
    fn default() -> Self {
        Self::new(PICK_LIST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_posts, Call, FakePosts};
    use crate::widgets::AlertKind;

    async fn mounted(api: &FakePosts) -> EditList {
        let mut list = EditList::default();
        list.mount(api).await;
        list
    }

    #[tokio::test]
    async fn test_mount_keeps_three() {
        let api = FakePosts::new().with_list(Ok(sample_posts(100)));
        let list = mounted(&api).await;

        let ids: Vec<u64> = list.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!list.is_loading());
        assert!(list.message().is_none());
    }

    #[tokio::test]
    async fn test_mount_failure_sets_error() {
        let api = FakePosts::new().with_list(Err(404));
        let list = mounted(&api).await;

        assert!(list.posts().is_empty());
        assert!(list.message().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_select_copies_fields() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        assert!(list.select(2));
        assert_eq!(list.selected_id(), Some(2));
        assert_eq!(list.title(), "post 2");
        assert_eq!(list.body(), "body of post 2");

        assert!(!list.select(99));
        assert_eq!(list.selected_id(), Some(2));
    }

    #[tokio::test]
    async fn test_update_patches_local_entry_and_clears_selection() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        list.select(1);
        list.set_title("Changed");
        assert!(list.submit(&api).await);

        assert_eq!(list.posts()[0].id, 1);
        assert_eq!(list.posts()[0].title, "Changed");
        assert_eq!(list.posts()[0].body, "body of post 1");
        assert_eq!(list.posts()[1].title, "post 2");
        assert!(list.selected().is_none());
        assert_eq!(list.title(), "");
        assert_eq!(list.body(), "");
        assert_eq!(list.message().unwrap().kind, AlertKind::Success);
    }

    #[tokio::test]
    async fn test_update_sends_full_record_with_original_owner() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        list.select(3);
        list.set_title("t");
        list.set_body("b");
        list.submit(&api).await;

        let sent = Post {
            id: 3,
            title: "t".to_string(),
            body: "b".to_string(),
            user_id: 1,
        };
        assert_eq!(api.calls(), vec![Call::List, Call::Update(sent)]);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_state_untouched() {
        let api = FakePosts::new().with_update_status(500);
        let mut list = mounted(&api).await;
        let before = list.posts().to_vec();

        list.select(1);
        list.set_title("Changed");
        list.submit(&api).await;

        assert_eq!(list.posts(), before.as_slice());
        assert_eq!(list.selected_id(), Some(1));
        assert_eq!(list.title(), "Changed");
        assert!(list.message().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_submit_without_selection_sends_nothing() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        assert!(!list.submit(&api).await);
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_selection_frozen_while_submitting() {
        let api = FakePosts::new();
        let mut list = mounted(&api).await;

        list.select(1);
        assert!(list.begin_submit().is_some());
        assert!(list.begin_submit().is_none());
        assert!(!list.select(2));

        list.finish_submit(Ok(()));
        assert!(!list.is_submitting());
    }
}
