//! URL splitting and query-string utilities.
//!
//! `podnet://` is not a special scheme, so the pieces are cut by hand rather
//! than through a WHATWG parser: authority up to the first `/`, `?` or `#`,
//! path up to `?` or `#`, query up to `#`. Fragments are dropped.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// The components of a URL after its scheme prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub authority: &'a str,
    pub path: &'a str,
    pub query: &'a str,
}

/// Split the part of a URL following `scheme://`.
pub fn split_url(rest: &str) -> UrlParts<'_> {
    let rest = match rest.find('#') {
        Some(idx) => &rest[..idx],
        None => rest,
    };

    let (before_query, query) = match rest.split_once('?') {
        Some((before, query)) => (before, query),
        None => (rest, ""),
    };

    let (authority, path) = match before_query.find('/') {
        Some(idx) => before_query.split_at(idx),
        None => (before_query, ""),
    };

    UrlParts {
        authority,
        path,
        query,
    }
}

/// Percent-decode a URL component.
///
/// Sequences that decode to invalid UTF-8 leave the input untouched.
pub fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

/// Parse a query string into a flat map. Later keys overwrite earlier ones;
/// `+` decodes to a space.
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(&key.replace('+', " "));
        if key.is_empty() {
            continue;
        }
        let value = decode_component(&value.replace('+', " "));
        params.insert(key, value);
    }

    params
}

/// Split a path into non-empty, decoded segments.
pub fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(decode_component)
        .collect()
}

/// Encode key/value pairs as a query string (without the leading `?`).
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
