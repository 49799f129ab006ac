//! Models for the metadata table editor
//!
//! Component-local state: edit buffers for the name and description inputs,
//! the visibility choices, and save status tracking.

mod edit_buffer;
mod save_status;
pub mod visibility;

pub use edit_buffer::EditBuffer;
pub use save_status::{SaveStatus, SaveTracker};
pub use visibility::{VISIBILITY_OPTIONS, VisibilityOption};
