//! Deep link configuration.
//!
//! Centralizes the constants that define the `podnet://` grammar. None of
//! these are runtime-configurable: every generated link must stay parseable
//! by every build of the application.

// =============================================================================
// Scheme
// =============================================================================

/// URI scheme name registered with the host OS.
pub const SCHEME: &str = "podnet";

/// Prefix every deep link must start with.
pub const SCHEME_PREFIX: &str = "podnet://";

// =============================================================================
// Documents Path Segments
// =============================================================================

/// `podnet://documents/document/<id>`
pub const SEGMENT_DOCUMENT: &str = "document";

/// `podnet://documents/drafts`
pub const SEGMENT_DRAFTS: &str = "drafts";

/// `podnet://documents/publish`
pub const SEGMENT_PUBLISH: &str = "publish";

/// `podnet://documents/debug`
pub const SEGMENT_DEBUG: &str = "debug";

// =============================================================================
// Publish Query Parameters
// =============================================================================

/// Draft being edited in the publish screen.
pub const PARAM_EDITING_DRAFT_ID: &str = "editingDraftId";

/// Pre-selected content type tab.
pub const PARAM_CONTENT_TYPE: &str = "contentType";

/// Post being replied to (`post_<id>:<id>`).
pub const PARAM_REPLY_TO: &str = "replyTo";

// =============================================================================
// Browser Integration
// =============================================================================

/// Hash prefix stripped before a deep link carried in `location.hash` is
/// handed to the validator.
#[cfg(target_arch = "wasm32")]
pub const HASH_PREFIX: &str = "#";
