//! Core deep link logic.
//!
//! This module provides:
//! - [`parse_deep_link_url`] strict parsing into typed routes
//! - [`validate_deep_link_url`] sanitizing validation with diagnostics
//! - [`generate_documents_url`] / [`generate_app_url`] link generation
//! - [`DeepLinkManager`] event subscription and handler dispatch
//! - [`Navigator`] and [`create_navigation_handler`] for the host router

pub mod dispatch;
pub mod error;
pub mod generator;
pub mod navigation;
pub mod parser;
pub mod validator;

pub use dispatch::{
    DeepLinkHandler, DeepLinkManager, HandlerId, UrlCallback, UrlEventSource,
    initialize_deep_linking,
};
pub use error::{DispatchError, GenerateError, HandlerError, ParseError};
pub use generator::{UrlOptions, generate_app_url, generate_documents_url, generate_url};
pub use navigation::{Navigator, create_navigation_handler, navigate_to};
pub use parser::{ParseResult, check_structure, is_valid_deep_link_url, parse_deep_link_url};
pub use validator::{apply_safety_fallbacks, is_navigable, validate_deep_link_url};
