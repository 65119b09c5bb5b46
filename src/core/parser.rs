//! Deep link parser.
//!
//! Strict and side-effect free: a string either becomes a [`DeepLinkData`]
//! or a [`ParseError`]. Semantic checks (positive ids, parameter formats)
//! belong to the validator.
//!
//! Documents paths are matched in order:
//! 1. `/` or empty → documents list
//! 2. `/document/<id>` → document detail (`<id>` must fit an `i64`)
//! 3. `/drafts` → drafts
//! 4. `/publish` → publish, hints read from the query
//! 5. `/debug` → debug
//! 6. anything else → documents list, with a warning logged

use std::collections::BTreeMap;
use std::num::IntErrorKind;

use crate::config::{
    PARAM_CONTENT_TYPE, PARAM_EDITING_DRAFT_ID, PARAM_REPLY_TO, SCHEME_PREFIX, SEGMENT_DEBUG,
    SEGMENT_DOCUMENT, SEGMENT_DRAFTS, SEGMENT_PUBLISH,
};
use crate::core::error::ParseError;
use crate::models::{
    AppRouteData, ContentType, DeepLinkData, DocumentRoute, MiniApp, PublishParams,
};
use crate::utils::url::{parse_query, path_segments, split_url};

/// Outcome of [`parse_deep_link_url`].
pub type ParseResult = Result<DeepLinkData, ParseError>;

/// Check the scheme and app without parsing the rest.
pub fn check_structure(url: &str) -> Result<MiniApp, ParseError> {
    let rest = url
        .trim()
        .strip_prefix(SCHEME_PREFIX)
        .ok_or(ParseError::InvalidScheme)?;

    let authority = split_url(rest).authority;
    if authority.is_empty() {
        return Err(ParseError::MissingApp);
    }

    authority.parse()
}

/// Whether `url` has the `podnet://` scheme and names a known app.
pub fn is_valid_deep_link_url(url: &str) -> bool {
    check_structure(url).is_ok()
}

/// Parse a deep link into typed route data.
pub fn parse_deep_link_url(url: &str) -> ParseResult {
    let app = check_structure(url)?;

    // check_structure already proved the prefix is present
    let rest = url.trim().strip_prefix(SCHEME_PREFIX).unwrap_or_default();
    let parts = split_url(rest);
    let params = parse_query(parts.query);

    let route = match app {
        MiniApp::Documents => {
            AppRouteData::Documents(parse_documents_route(parts.path, &params, url)?)
        }
        MiniApp::PodCollection => AppRouteData::PodCollection,
        MiniApp::PodEditor => AppRouteData::PodEditor,
        MiniApp::Frogcrypto => AppRouteData::Frogcrypto,
    };

    Ok(DeepLinkData {
        path: parts.path.to_string(),
        params,
        ..DeepLinkData::new(route, url)
    })
}

fn parse_documents_route(
    path: &str,
    params: &BTreeMap<String, String>,
    url: &str,
) -> Result<DocumentRoute, ParseError> {
    let segments = path_segments(path);
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    let route = match segments.as_slice() {
        [] => DocumentRoute::DocumentsList,
        [SEGMENT_DOCUMENT, id] => {
            let id = id.parse::<i64>().map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ParseError::DocumentIdOutOfRange((*id).to_string())
                }
                _ => ParseError::InvalidDocumentId((*id).to_string()),
            })?;
            DocumentRoute::DocumentDetail { id }
        }
        [SEGMENT_DRAFTS] => DocumentRoute::Drafts,
        [SEGMENT_PUBLISH] => DocumentRoute::Publish(PublishParams {
            editing_draft_id: params.get(PARAM_EDITING_DRAFT_ID).cloned(),
            content_type: params
                .get(PARAM_CONTENT_TYPE)
                .map(|value| ContentType::from(value.as_str())),
            reply_to: params.get(PARAM_REPLY_TO).cloned(),
        }),
        [SEGMENT_DEBUG] => DocumentRoute::Debug,
        _ => {
            log::warn!(
                "unknown documents path '{}' in deep link {}; showing documents list",
                path,
                url
            );
            DocumentRoute::DocumentsList
        }
    };

    Ok(route)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn document_route(url: &str) -> DocumentRoute {
        let data = parse_deep_link_url(url).expect("url should parse");
        match data.route {
            AppRouteData::Documents(route) => route,
            other => panic!("expected documents route, got {:?}", other),
        }
    }

    #[test]
    fn test_documents_list() {
        let data = parse_deep_link_url("podnet://documents/").unwrap();
        assert_eq!(data.app, MiniApp::Documents);
        assert!(data.valid);
        assert_eq!(
            data.route,
            AppRouteData::Documents(DocumentRoute::DocumentsList)
        );
        assert_eq!(document_route("podnet://documents"), DocumentRoute::DocumentsList);
    }

    #[test]
    fn test_document_detail() {
        assert_eq!(
            document_route("podnet://documents/document/123"),
            DocumentRoute::DocumentDetail { id: 123 }
        );
        // sign is kept; positivity is the validator's concern
        assert_eq!(
            document_route("podnet://documents/document/-4"),
            DocumentRoute::DocumentDetail { id: -4 }
        );
        assert_eq!(
            document_route("podnet://documents/document/0"),
            DocumentRoute::DocumentDetail { id: 0 }
        );
    }

    #[test]
    fn test_document_detail_non_numeric_is_error() {
        assert_eq!(
            parse_deep_link_url("podnet://documents/document/abc"),
            Err(ParseError::InvalidDocumentId("abc".to_string()))
        );
        assert_eq!(
            parse_deep_link_url("podnet://documents/document/12abc"),
            Err(ParseError::InvalidDocumentId("12abc".to_string()))
        );
    }

    #[test]
    fn test_document_detail_overflow_is_out_of_range() {
        let err =
            parse_deep_link_url("podnet://documents/document/99999999999999999999").unwrap_err();
        assert_eq!(
            err,
            ParseError::DocumentIdOutOfRange("99999999999999999999".to_string())
        );
        assert_eq!(
            err.to_string(),
            "Document ID out of range: 99999999999999999999"
        );
        assert_eq!(
            parse_deep_link_url("podnet://documents/document/-99999999999999999999"),
            Err(ParseError::DocumentIdOutOfRange(
                "-99999999999999999999".to_string()
            ))
        );
    }

    #[test]
    fn test_simple_segments() {
        assert_eq!(document_route("podnet://documents/drafts"), DocumentRoute::Drafts);
        assert_eq!(document_route("podnet://documents/debug/"), DocumentRoute::Debug);
    }

    #[test]
    fn test_publish_reads_query_without_validation() {
        let route = document_route(
            "podnet://documents/publish?contentType=bogus&replyTo=post_1%3A2&editingDraftId=nope",
        );
        assert_eq!(
            route,
            DocumentRoute::Publish(PublishParams {
                editing_draft_id: Some("nope".to_string()),
                content_type: Some(ContentType::from("bogus")),
                reply_to: Some("post_1:2".to_string()),
            })
        );
        assert_eq!(
            document_route("podnet://documents/publish"),
            DocumentRoute::Publish(PublishParams::default())
        );
    }

    #[test]
    fn test_unknown_path_falls_back_to_list() {
        assert_eq!(
            document_route("podnet://documents/settings/profile"),
            DocumentRoute::DocumentsList
        );
        // `document` without an id is not a detail route
        assert_eq!(
            document_route("podnet://documents/document"),
            DocumentRoute::DocumentsList
        );
        assert_eq!(
            document_route("podnet://documents/document/1/extra"),
            DocumentRoute::DocumentsList
        );
    }

    #[test]
    fn test_simple_apps_ignore_path() {
        let data = parse_deep_link_url("podnet://pod-editor/anything?x=1").unwrap();
        assert_eq!(data.app, MiniApp::PodEditor);
        assert_eq!(data.route, AppRouteData::PodEditor);
        assert_eq!(data.path, "/anything");
        assert_eq!(data.params.get("x").map(String::as_str), Some("1"));

        for app in [MiniApp::PodCollection, MiniApp::Frogcrypto] {
            let data = parse_deep_link_url(&format!("podnet://{}", app)).unwrap();
            assert_eq!(data.app, app);
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let data = parse_deep_link_url("  podnet://documents/drafts\n").unwrap();
        assert_eq!(data.original_url, "  podnet://documents/drafts\n");
        assert_eq!(data.route, AppRouteData::Documents(DocumentRoute::Drafts));
    }

    #[test]
    fn test_scheme_errors() {
        assert_eq!(
            parse_deep_link_url("https://documents/"),
            Err(ParseError::InvalidScheme)
        );
        assert_eq!(parse_deep_link_url(""), Err(ParseError::InvalidScheme));
        assert_eq!(
            parse_deep_link_url("PODNET://documents/"),
            Err(ParseError::InvalidScheme)
        );
        assert_eq!(parse_deep_link_url("podnet://"), Err(ParseError::MissingApp));
        assert_eq!(
            parse_deep_link_url("podnet:///document/1"),
            Err(ParseError::MissingApp)
        );
    }

    #[test]
    fn test_unknown_app_lists_valid_apps() {
        let err = parse_deep_link_url("podnet://settings/").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("settings"));
        for app in MiniApp::ALL {
            assert!(message.contains(app.as_str()));
        }
    }

    #[test]
    fn test_is_valid_deep_link_url() {
        assert!(is_valid_deep_link_url("podnet://documents/"));
        assert!(is_valid_deep_link_url("podnet://frogcrypto"));
        // structural check only: the id is not inspected
        assert!(is_valid_deep_link_url("podnet://documents/document/abc"));
        assert!(!is_valid_deep_link_url("https://documents/"));
        assert!(!is_valid_deep_link_url("podnet://unknown/"));
        assert!(!is_valid_deep_link_url("garbage"));
    }
}
