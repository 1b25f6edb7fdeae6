//! Widget state containers, one per HTTP verb
//!
//! Each widget owns its own copy of the posts it shows; nothing is shared
//! between them. Every request goes through a `begin_*` / `finish_*` pair so
//! a front end can run the network call elsewhere (a spawned task) and feed
//! the result back. The `async` convenience methods do both in one await.
//!
//! A trigger that arrives while the same widget already has a request in
//! flight is refused by `begin_*`.

pub mod create_form;
pub mod delete_list;
pub mod edit_list;
pub mod fetch_list;

pub use create_form::CreateForm;
pub use delete_list::{Confirm, DeleteList};
pub use edit_list::EditList;
pub use fetch_list::{FetchList, FetchListView};

/// Colour of an alert (success green, danger red)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

/// The message a widget shows after a request settles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Danger,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Danger
    }
}

/// Message shown when a list fails to load
pub const LOAD_ERROR: &str = "Could not fetch the posts.";
