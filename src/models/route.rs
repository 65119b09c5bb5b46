//! Typed navigation targets for `podnet://` deep links.
//!
//! URL format: `podnet://<app>/<path>?<query>`
//! - `podnet://documents/` → [`DocumentRoute::DocumentsList`]
//! - `podnet://documents/document/123` → [`DocumentRoute::DocumentDetail`]
//! - `podnet://documents/drafts` → [`DocumentRoute::Drafts`]
//! - `podnet://documents/publish?contentType=link` → [`DocumentRoute::Publish`]
//! - `podnet://documents/debug` → [`DocumentRoute::Debug`]
//! - `podnet://pod-editor/` → [`AppRouteData::PodEditor`]

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MiniApp;

// ============================================================================
// Content Type
// ============================================================================

/// Content type tab pre-selected on the publish screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    #[default]
    Document,
    Link,
    File,
    /// Value received from an untrusted URL that is none of the above.
    /// Only parser output carries this; validated routes never do.
    Unrecognized(UnrecognizedContentType),
}

/// Raw `contentType` value that names no known tab.
///
/// Only obtainable through `ContentType::from`, so it never holds
/// `document`, `link` or `file`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnrecognizedContentType(String);

impl UnrecognizedContentType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnrecognizedContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ContentType {
    /// Wire value written into the `contentType` query parameter.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Document => "document",
            Self::Link => "link",
            Self::File => "file",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    #[inline]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for ContentType {
    fn from(value: &str) -> Self {
        match value {
            "document" => Self::Document,
            "link" => Self::Link,
            "file" => Self::File,
            other => Self::Unrecognized(UnrecognizedContentType(other.to_string())),
        }
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "document" | "link" | "file" => Self::from(value.as_str()),
            _ => Self::Unrecognized(UnrecognizedContentType(value)),
        }
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        match value {
            ContentType::Unrecognized(raw) => raw.0,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Document Routes
// ============================================================================

/// Optional hints for the publish screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishParams {
    /// Draft to reopen, expected in canonical UUID form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing_draft_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Post being replied to, expected as `post_<id>:<id>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Screens inside the documents app.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DocumentRoute {
    /// `podnet://documents/`
    #[default]
    DocumentsList,
    /// `podnet://documents/document/<id>`
    DocumentDetail {
        /// Document id as parsed; only positive ids are navigable.
        id: i64,
    },
    /// `podnet://documents/drafts`
    Drafts,
    /// `podnet://documents/publish?...`
    Publish(PublishParams),
    /// `podnet://documents/debug`
    Debug,
}

// ============================================================================
// App Routes
// ============================================================================

/// A destination: the app plus, for `documents`, the screen inside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "app", content = "route", rename_all = "kebab-case")]
pub enum AppRouteData {
    Documents(DocumentRoute),
    PodCollection,
    PodEditor,
    Frogcrypto,
}

impl AppRouteData {
    /// Default destination for an app.
    pub fn default_for(app: MiniApp) -> Self {
        match app {
            MiniApp::Documents => Self::Documents(DocumentRoute::DocumentsList),
            MiniApp::PodCollection => Self::PodCollection,
            MiniApp::PodEditor => Self::PodEditor,
            MiniApp::Frogcrypto => Self::Frogcrypto,
        }
    }

    /// App this route belongs to.
    pub fn app(&self) -> MiniApp {
        match self {
            Self::Documents(_) => MiniApp::Documents,
            Self::PodCollection => MiniApp::PodCollection,
            Self::PodEditor => MiniApp::PodEditor,
            Self::Frogcrypto => MiniApp::Frogcrypto,
        }
    }

    /// Document route, if this is the documents app.
    pub fn document_route(&self) -> Option<&DocumentRoute> {
        match self {
            Self::Documents(route) => Some(route),
            _ => None,
        }
    }
}

impl Default for AppRouteData {
    fn default() -> Self {
        Self::Documents(DocumentRoute::DocumentsList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_type_from_str() {
        assert_eq!(ContentType::from("document"), ContentType::Document);
        assert_eq!(ContentType::from("link"), ContentType::Link);
        assert_eq!(ContentType::from("file"), ContentType::File);
        assert!(matches!(
            ContentType::from("Link"),
            ContentType::Unrecognized(raw) if raw.as_str() == "Link"
        ));
        assert!(!ContentType::from("video").is_recognized());
    }

    #[test]
    fn test_known_literals_never_unrecognized() {
        for raw in ["document", "link", "file"] {
            assert!(ContentType::from(raw).is_recognized());
            assert!(ContentType::from(raw.to_string()).is_recognized());
            let decoded: ContentType = serde_json::from_value(json!(raw)).unwrap();
            assert!(decoded.is_recognized());
            assert_eq!(decoded, ContentType::from(raw));
        }
    }

    #[test]
    fn test_content_type_keeps_raw_value() {
        let ct = ContentType::from("invalid-type".to_string());
        assert_eq!(ct.as_str(), "invalid-type");
        assert_eq!(String::from(ct), "invalid-type");
    }

    #[test]
    fn test_document_route_wire_shape() {
        assert_eq!(
            serde_json::to_value(DocumentRoute::DocumentDetail { id: 123 }).unwrap(),
            json!({ "type": "document-detail", "id": 123 })
        );
        assert_eq!(
            serde_json::to_value(DocumentRoute::DocumentsList).unwrap(),
            json!({ "type": "documents-list" })
        );
        let publish = DocumentRoute::Publish(PublishParams {
            content_type: Some(ContentType::Link),
            reply_to: Some("post_1:2".to_string()),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(publish).unwrap(),
            json!({ "type": "publish", "contentType": "link", "replyTo": "post_1:2" })
        );
    }

    #[test]
    fn test_document_detail_requires_id() {
        let result: Result<DocumentRoute, _> =
            serde_json::from_value(json!({ "type": "document-detail" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_app_route_wire_shape() {
        assert_eq!(
            serde_json::to_value(AppRouteData::default()).unwrap(),
            json!({ "app": "documents", "route": { "type": "documents-list" } })
        );
        assert_eq!(
            serde_json::to_value(AppRouteData::PodEditor).unwrap(),
            json!({ "app": "pod-editor" })
        );
        let parsed: AppRouteData = serde_json::from_value(json!({ "app": "frogcrypto" })).unwrap();
        assert_eq!(parsed, AppRouteData::Frogcrypto);
    }

    #[test]
    fn test_default_for_matches_app() {
        for app in MiniApp::ALL {
            assert_eq!(AppRouteData::default_for(app).app(), app);
        }
        assert_eq!(
            AppRouteData::default_for(MiniApp::Documents).document_route(),
            Some(&DocumentRoute::DocumentsList)
        );
        assert_eq!(AppRouteData::PodCollection.document_route(), None);
    }
}
