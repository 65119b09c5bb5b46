//! Top-level destinations addressable by a deep link.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::ParseError;

/// Screen family named by the authority of a `podnet://` URL.
///
/// The set is closed: adding a variant forces every `match` in the parser,
/// validator, generator and navigation adapter to handle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MiniApp {
    /// Document browser, the only app with its own routes.
    Documents,
    /// POD collection screen.
    PodCollection,
    /// POD editor screen.
    PodEditor,
    /// FrogCrypto game screen.
    Frogcrypto,
}

impl MiniApp {
    /// All apps in declaration order.
    pub const ALL: [MiniApp; 4] = [
        MiniApp::Documents,
        MiniApp::PodCollection,
        MiniApp::PodEditor,
        MiniApp::Frogcrypto,
    ];

    /// Wire name used as the URL authority.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::PodCollection => "pod-collection",
            Self::PodEditor => "pod-editor",
            Self::Frogcrypto => "frogcrypto",
        }
    }

    /// Whether this app is a parameterless destination.
    #[inline]
    pub fn is_simple(self) -> bool {
        !matches!(self, Self::Documents)
    }

    /// Comma-separated list of every wire name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|app| app.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for MiniApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MiniApp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|app| app.as_str() == s)
            .ok_or_else(|| ParseError::UnknownApp {
                app: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}
