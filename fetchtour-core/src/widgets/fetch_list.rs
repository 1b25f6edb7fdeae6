//! Read-only list (GET)

use tracing::{info, warn};

use crate::api::PostsApi;
use crate::error::ApiResult;
use crate::model::{truncate_posts, Post, FETCH_LIST_LIMIT};
use crate::widgets::LOAD_ERROR;

/// What the list should render right now
#[derive(Debug, PartialEq, Eq)]
pub enum FetchListView<'a> {
    Loading,
    /// The error supersedes the list
    Failed(&'a str),
    Loaded(&'a [Post]),
}

/// Fetches the collection once on mount and keeps the first few entries.
#[derive(Debug, Clone)]
pub struct FetchList {
    posts: Vec<Post>,
    error: Option<String>,
    loading: bool,
    in_flight: bool,
    limit: usize,
}

impl FetchList {
    pub fn new(limit: usize) -> Self {
        Self {
            posts: Vec::new(),
            error: None,
            loading: true,
            in_flight: false,
            limit,
        }
    }

    /// Start the mount fetch. Returns false if one is already running.
    pub fn begin_mount(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.loading = true;
        true
    }

    /// Settle the mount fetch
    pub fn finish_mount(&mut self, result: ApiResult<Vec<Post>>) {
        self.in_flight = false;
        self.loading = false;

        match result {
            Ok(posts) => {
                let total = posts.len();
                self.posts = truncate_posts(posts, self.limit);
                self.error = None;
                info!(total, kept = self.posts.len(), "fetch list loaded");
            }
            Err(err) => {
                warn!(error = %err, "fetch list failed to load");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
    }

    /// Fetch and settle in one go
    pub async fn mount(&mut self, api: &dyn PostsApi) {
        if !self.begin_mount() {
            return;
        }
        let result = api.list_posts().await;
        self.finish_mount(result);
    }

    pub fn view(&self) -> FetchListView<'_> {
        if let Some(ref error) = self.error {
            FetchListView::Failed(error)
        } else if self.loading {
            FetchListView::Loading
        } else {
            FetchListView::Loaded(&self.posts)
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for FetchList {
    fn default() -> Self {
        Self::new(FETCH_LIST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_posts, Call, FakePosts};

    #[test]
    fn test_starts_loading() {
        let list = FetchList::default();
        assert_eq!(list.view(), FetchListView::Loading);
        assert!(list.is_loading());
    }

    #[tokio::test]
    async fn test_mount_keeps_first_five_in_order() {
        let api = FakePosts::new().with_list(Ok(sample_posts(100)));
        let mut list = FetchList::default();

        list.mount(&api).await;

        let ids: Vec<u64> = list.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(!list.is_loading());
        assert!(matches!(list.view(), FetchListView::Loaded(posts) if posts.len() == 5));
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_mount_with_short_collection() {
        let api = FakePosts::new().with_list(Ok(sample_posts(2)));
        let mut list = FetchList::default();

        list.mount(&api).await;

        assert_eq!(list.posts().len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_mounts_render_the_same_list() {
        let api = FakePosts::new().with_list(Ok(sample_posts(12)));

        let mut first = FetchList::default();
        first.mount(&api).await;
        let mut second = FetchList::default();
        second.mount(&api).await;

        assert_eq!(first.posts(), second.posts());
    }

    #[tokio::test]
    async fn test_error_supersedes_list() {
        let api = FakePosts::new().with_list(Err(500));
        let mut list = FetchList::default();

        list.mount(&api).await;

        assert!(!list.is_loading());
        assert_eq!(list.view(), FetchListView::Failed(LOAD_ERROR));
        assert!(list.posts().is_empty());
    }

    #[test]
    fn test_second_begin_is_refused_while_in_flight() {
        let mut list = FetchList::default();
        assert!(list.begin_mount());
        assert!(!list.begin_mount());

        list.finish_mount(Ok(sample_posts(1)));
        assert!(list.begin_mount());
    }
}
