//! User-facing text

pub const VISIBILITY: &str = "Visibility";
pub const WHY_HIDE: &str = "Why Hide?";
pub const METADATA_STRENGTH: &str = "Metadata Strength";
pub const NO_DESCRIPTION: &str = "No table description yet";
pub const SAVING: &str = "Saving…";
pub const SAVE_FAILED: &str = "Failed to save";

/// Progress bar color for metadata strength
pub const STRENGTH_COLOR: &str = "grey2";
