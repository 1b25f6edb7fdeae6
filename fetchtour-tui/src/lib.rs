//! fetchtour page - the four verb widgets in one terminal screen
//!
//! - GET panel: the first posts of the collection, fetched on start
//! - POST panel: title/body form that creates a post
//! - PUT panel: pick a post, edit it, send the full record
//! - DELETE panel: pick a post, confirm, delete it
//!
//! Each panel drives its own widget from `fetchtour-core`; nothing is shared.

pub mod app;
pub mod dispatch;
pub mod logging;
pub mod mode;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use dispatch::{Completion, Dispatcher, Request};
pub use mode::{AppMode, Field, Panel};
pub use terminal::run;
pub use ui::UI;
