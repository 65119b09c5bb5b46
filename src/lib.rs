//! `podnet://` deep links.
//!
//! Parses externally supplied URLs into typed routes, validates them into a
//! destination that is always safe to navigate to, generates shareable links
//! from routes, and dispatches incoming links to the host application's
//! router.
//!
//! ```
//! use podnet_links::{AppRouteData, DocumentRoute, UrlOptions, generate_documents_url,
//!     validate_deep_link_url};
//!
//! let url = generate_documents_url(&DocumentRoute::DocumentDetail { id: 123 }, &UrlOptions::default())
//!     .unwrap();
//! assert_eq!(url, "podnet://documents/document/123");
//!
//! let result = validate_deep_link_url(&url);
//! assert!(result.valid);
//! assert_eq!(result.data.route, AppRouteData::Documents(DocumentRoute::DocumentDetail { id: 123 }));
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{
    DeepLinkHandler, DeepLinkManager, DispatchError, GenerateError, HandlerError, HandlerId,
    Navigator, ParseError, ParseResult, UrlCallback, UrlEventSource, UrlOptions,
    apply_safety_fallbacks, check_structure, create_navigation_handler, generate_app_url,
    generate_documents_url, generate_url, initialize_deep_linking, is_navigable,
    is_valid_deep_link_url, navigate_to, parse_deep_link_url, validate_deep_link_url,
};
pub use models::{
    AppRouteData, ContentType, DeepLinkData, DocumentRoute, MiniApp, PublishParams,
    UnrecognizedContentType, ValidationError, ValidationResult, ValidationWarning,
};
#[cfg(target_arch = "wasm32")]
pub use utils::dom::BrowserHashSource;
