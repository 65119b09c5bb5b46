//! Data models for deep link routing.
//!
//! Contains domain types for:
//! - [`MiniApp`] - The closed set of top-level destinations
//! - [`DocumentRoute`], [`AppRouteData`], [`PublishParams`], [`ContentType`] - Typed routes
//! - [`DeepLinkData`], [`ValidationResult`] - Parse and validation output

mod app;
mod deep_link;
mod route;

pub use app::MiniApp;
pub use deep_link::{DeepLinkData, ValidationError, ValidationResult, ValidationWarning};
pub use route::{AppRouteData, ContentType, DocumentRoute, PublishParams, UnrecognizedContentType};
