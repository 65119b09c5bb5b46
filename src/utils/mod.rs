//! Utility modules for URL handling and browser integration.
//!
//! Provides:
//! - [`url`] - URL splitting, query parsing and encoding
//! - [`patterns`] - Format checks for publish parameters
//! - `dom` - `BrowserHashSource`, a `hashchange` event source (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod patterns;
pub mod url;
