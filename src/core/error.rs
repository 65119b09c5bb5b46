//! Error types for deep link handling.
//!
//! Each tier of the pipeline has its own type:
//!
//! - [`ParseError`] - Untrusted input that is not a parseable `podnet://` link
//! - [`GenerateError`] - Caller-constructed routes the generator refuses
//! - [`DispatchError`] - Failures wiring the manager to its event source

use thiserror::Error;

use crate::config::SCHEME_PREFIX;

/// Why a string could not be parsed as a deep link.
///
/// Returned as a value, never raised: parsing must be total over arbitrary
/// external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not start with `podnet://`.
    #[error("Invalid URL scheme. Expected {}", SCHEME_PREFIX)]
    InvalidScheme,
    /// Nothing between the scheme and the path.
    #[error("Missing app in deep link URL")]
    MissingApp,
    /// Authority is not a known mini app.
    #[error("Invalid app: {app}. Valid apps are: {valid}")]
    UnknownApp { app: String, valid: String },
    /// `document/<segment>` where the segment is not an integer.
    #[error("Invalid document ID: {0}")]
    InvalidDocumentId(String),
    /// `document/<segment>` where the segment is an integer outside `i64`.
    #[error("Document ID out of range: {0}")]
    DocumentIdOutOfRange(String),
}

/// A route the generator cannot turn into a link.
///
/// These indicate a bug in the calling code, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Document ID is required for document-detail route and must be positive, got {0}")]
    InvalidDocumentId(i64),
}

/// Failure to start listening for incoming deep links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The host event source refused the subscription.
    #[error("failed to subscribe to deep link events: {0}")]
    Subscribe(String),
    /// `stop_listening` ran before the subscription completed.
    #[error("listening was stopped before the subscription completed")]
    Cancelled,
}

/// Error a handler may return; logged by the manager and otherwise ignored.
pub type HandlerError = Box<dyn std::error::Error>;
