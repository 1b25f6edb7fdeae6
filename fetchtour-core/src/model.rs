use serde::{Deserialize, Serialize};

/// Owner identifier attached to every post created from the tour
pub const DEFAULT_OWNER_ID: u64 = 1;

/// Entries kept by the read-only list
pub const FETCH_LIST_LIMIT: usize = 5;

/// Entries kept by the lists that pick a post to edit or delete
pub const PICK_LIST_LIMIT: usize = 3;

/// A post as served by the remote collection.
///
/// The wire format uses camelCase keys (`userId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned identifier
    pub id: u64,
    pub title: String,
    pub body: String,
    /// Owner of the post
    pub user_id: u64,
}

/// Body of a create request; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: u64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}

impl Post {
    /// Copy of this post with the editable fields replaced.
    ///
    /// Identifier and owner are carried over unchanged.
    pub fn with_edits(&self, title: &str, body: &str) -> Self {
        Self {
            id: self.id,
            title: title.to_string(),
            body: body.to_string(),
            user_id: self.user_id,
        }
    }
}

/// Keep the first `limit` posts, preserving order.
pub fn truncate_posts(mut posts: Vec<Post>, limit: usize) -> Vec<Post> {
    posts.truncate(limit);
    posts
}
