//! Parse and validation results for incoming deep links.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::{AppRouteData, MiniApp};
use crate::core::error::ParseError;

// ============================================================================
// DeepLinkData
// ============================================================================

/// A deep link resolved to a destination.
///
/// `route` is always present: even an invalid link carries a destination the
/// navigation layer can render. `app` always equals `route.app()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkData {
    pub app: MiniApp,
    pub route: AppRouteData,
    pub valid: bool,
    /// The string exactly as it was received, before trimming.
    pub original_url: String,
    /// Raw path component as received (e.g. `/document/123`).
    #[serde(default)]
    pub path: String,
    /// Decoded query parameters, last value wins.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl DeepLinkData {
    /// Valid data for `route` with no path or query recorded.
    pub fn new(route: AppRouteData, original_url: impl Into<String>) -> Self {
        Self {
            app: route.app(),
            route,
            valid: true,
            original_url: original_url.into(),
            path: String::new(),
            params: BTreeMap::new(),
        }
    }

    /// The unconditional safe destination: the documents list, marked invalid.
    pub fn fallback(original_url: impl Into<String>) -> Self {
        Self {
            valid: false,
            ..Self::new(AppRouteData::default(), original_url)
        }
    }

    /// Replace the route, keeping `app` in sync.
    pub fn set_route(&mut self, route: AppRouteData) {
        self.app = route.app();
        self.route = route;
    }

    /// Whether the link addressed anything beyond the app itself.
    pub fn has_route_parameters(&self) -> bool {
        !self.params.is_empty() || self.path.split('/').any(|segment| !segment.is_empty())
    }
}

// ============================================================================
// Validation Issues
// ============================================================================

/// Recoverable issue: the link still navigates to the requested screen.
///
/// Only [`ValidationWarning::ContentTypeCorrected`] changes the data; the
/// format warnings leave the offending value in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationWarning {
    /// `contentType` was not recognized and was replaced with `document`.
    ContentTypeCorrected { given: String },
    /// `replyTo` does not match `post_<id>:<id>`; kept as is.
    MalformedReplyTo { value: String },
    /// `editingDraftId` is not a canonical UUID; kept as is.
    MalformedDraftId { value: String },
    /// A parameterless app received a path or query.
    IgnoredRouteParameters { app: MiniApp },
}

impl ValidationWarning {
    /// Whether the validator altered the data for this warning.
    pub fn is_corrected(&self) -> bool {
        matches!(self, Self::ContentTypeCorrected { .. })
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContentTypeCorrected { given } => write!(
                f,
                "Invalid content type: {}. Defaulting to \"document\"",
                given
            ),
            Self::MalformedReplyTo { value } => write!(
                f,
                "Invalid replyTo format: {}. Expected post_<id>:<id>",
                value
            ),
            Self::MalformedDraftId { value } => {
                write!(f, "Invalid editingDraftId format: {}. Expected a UUID", value)
            }
            Self::IgnoredRouteParameters { app } => {
                write!(f, "App '{}' does not accept route parameters; ignoring them", app)
            }
        }
    }
}

impl Serialize for ValidationWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Unrecoverable issue: the requested destination was replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The string is not a parseable `podnet://` link.
    Unparseable(ParseError),
    /// Document ids must be positive.
    InvalidDocumentId { id: i64 },
    /// The final safety pass had to replace a route nothing else caught.
    NotNavigable,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable(err) => write!(f, "{}", err),
            Self::InvalidDocumentId { id } => {
                write!(f, "Invalid document ID: {}. Must be a positive integer", id)
            }
            Self::NotNavigable => write!(f, "Route is not navigable; using default route"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// ValidationResult
// ============================================================================

/// Output of [`validate_deep_link_url`](crate::validate_deep_link_url).
///
/// `data` is always navigable. `valid` is exactly `errors.is_empty()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub data: DeepLinkData,
    pub warnings: Vec<ValidationWarning>,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Result for input that could not be parsed at all.
    pub fn fallback(original_url: impl Into<String>, error: ParseError) -> Self {
        Self {
            valid: false,
            data: DeepLinkData::fallback(original_url),
            warnings: Vec::new(),
            errors: vec![ValidationError::Unparseable(error)],
        }
    }

    /// JSON rendering for logs and telemetry.
    pub fn diagnostics_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}
