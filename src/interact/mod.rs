//! Multi-step pointer gesture state machines. Pure state; the UI layer
//! feeds them pointer events and applies their commits to the store.

pub mod drag;
pub mod resize;

pub use drag::{DragCommit, DragController, Slot};
pub use resize::{ResizeCommit, ResizeController, PIXELS_PER_HOUR};
