//! fetchtour-core - the four HTTP verbs against a posts collection
//!
//! - [`model`]: the `Post` record and list truncation
//! - [`api`]: the `PostsApi` seam and its reqwest implementation
//! - [`error`]: structured errors for the client and config layers
//! - [`config`]: `~/.fetchtour/config.toml` loading and resolution
//! - [`widgets`]: one independent state container per verb

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use api::{HttpPostsClient, PostsApi};
pub use config::{ApiConfig, TourConfig, WidgetsConfig};
pub use error::{ApiError, ConfigError};
pub use model::{NewPost, Post, DEFAULT_OWNER_ID, FETCH_LIST_LIMIT, PICK_LIST_LIMIT};
pub use widgets::{Alert, AlertKind, Confirm, CreateForm, DeleteList, EditList, FetchList, FetchListView};
