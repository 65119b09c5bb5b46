//! Deep link generation, the inverse of the parser.
//!
//! Routes built here by application code are trusted, so an impossible route
//! is reported as a [`GenerateError`] instead of being silently repaired.

use std::collections::BTreeMap;

use crate::config::{
    PARAM_CONTENT_TYPE, PARAM_EDITING_DRAFT_ID, PARAM_REPLY_TO, SCHEME_PREFIX, SEGMENT_DEBUG,
    SEGMENT_DOCUMENT, SEGMENT_DRAFTS, SEGMENT_PUBLISH,
};
use crate::core::error::GenerateError;
use crate::models::{AppRouteData, DocumentRoute, MiniApp};
use crate::utils::url::encode_query;

/// Options shared by all generator functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlOptions {
    /// Prefix the output with `podnet://` (default `true`).
    pub include_scheme: bool,
    /// Extra query parameters appended after the route's own.
    pub params: BTreeMap<String, String>,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            include_scheme: true,
            params: BTreeMap::new(),
        }
    }
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `documents/drafts` instead of `podnet://documents/drafts`.
    pub fn without_scheme(mut self) -> Self {
        self.include_scheme = false;
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Link to an app's base screen.
pub fn generate_app_url(app: MiniApp, options: &UrlOptions) -> String {
    build_url(app, "/", Vec::new(), options)
}

/// Link to a screen inside the documents app.
pub fn generate_documents_url(
    route: &DocumentRoute,
    options: &UrlOptions,
) -> Result<String, GenerateError> {
    let mut query: Vec<(&str, &str)> = Vec::new();

    let path = match route {
        DocumentRoute::DocumentsList => "/".to_string(),
        DocumentRoute::DocumentDetail { id } => {
            if *id <= 0 {
                return Err(GenerateError::InvalidDocumentId(*id));
            }
            format!("/{}/{}", SEGMENT_DOCUMENT, id)
        }
        DocumentRoute::Drafts => format!("/{}", SEGMENT_DRAFTS),
        DocumentRoute::Publish(params) => {
            if let Some(draft_id) = &params.editing_draft_id {
                query.push((PARAM_EDITING_DRAFT_ID, draft_id.as_str()));
            }
            if let Some(content_type) = &params.content_type {
                query.push((PARAM_CONTENT_TYPE, content_type.as_str()));
            }
            if let Some(reply_to) = &params.reply_to {
                query.push((PARAM_REPLY_TO, reply_to.as_str()));
            }
            format!("/{}", SEGMENT_PUBLISH)
        }
        DocumentRoute::Debug => format!("/{}", SEGMENT_DEBUG),
    };

    Ok(build_url(MiniApp::Documents, &path, query, options))
}

/// Link to any destination, e.g. to share the screen currently shown.
pub fn generate_url(route: &AppRouteData, options: &UrlOptions) -> Result<String, GenerateError> {
    match route {
        AppRouteData::Documents(route) => generate_documents_url(route, options),
        AppRouteData::PodCollection | AppRouteData::PodEditor | AppRouteData::Frogcrypto => {
            Ok(generate_app_url(route.app(), options))
        }
    }
}

fn build_url<'a>(
    app: MiniApp,
    path: &str,
    mut query: Vec<(&'a str, &'a str)>,
    options: &'a UrlOptions,
) -> String {
    for (key, value) in &options.params {
        if !query.iter().any(|(existing, _)| *existing == key.as_str()) {
            query.push((key.as_str(), value.as_str()));
        }
    }

    let scheme = if options.include_scheme {
        SCHEME_PREFIX
    } else {
        ""
    };

    let mut url = format!("{}{}{}", scheme, app, path);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&encode_query(query));
    }
    url
}

// =============================================================================
// Tests
// =============================================================================
