//! Named constants shared by the whole application.
//!
//! The backend treats a handful of ids as magic values; they are collected
//! here so no literal is repeated at call sites.

/// Versioned REST prefix, appended to the backend base URL.
pub const API_PREFIX: &str = "/api/v1";

/// Sentinel category holding draft docs that have not been categorized yet.
/// Excluded from normal category listings and rejected as the category of a
/// published doc.
pub const DRAFT_CATEGORY_ID: &str = "65f1c0a9b6e4d21f38d0a001";

/// Media record used when a doc is saved without a header or thumbnail image.
pub const DEFAULT_MEDIA_ID: &str = "65f1c0a9b6e4d21f38d0a0fe";

/// A doc carries between one and five tags once it leaves draft.
pub const MAX_DOC_TAGS: usize = 5;

/// Homepage curation slots: at most 3 docs and 5 subcategories system-wide.
pub const MAX_HOMEPAGE_DOCS: u64 = 3;
pub const MAX_HOMEPAGE_SUBCATEGORIES: u64 = 5;

pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 160;
pub const EXCERPT_MIN_LEN: usize = 10;
pub const EXCERPT_MAX_LEN: usize = 160;
