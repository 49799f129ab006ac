//! Rendering for the metadata table
//!
//! Sub-module of `panel` - one render function per section of the editor.

pub(super) mod header;
pub(super) mod labels;
pub(super) mod lists;
pub(super) mod title;
