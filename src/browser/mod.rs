//! Browser Bindings
//!
//! Thin wrappers over the browser APIs the page talks to, organized by concern.

mod dialog;
mod menu;
mod storage;

pub use dialog::*;
pub use menu::*;
pub use storage::*;
