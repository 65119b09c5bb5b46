//! Format checks for optional publish parameters.

use std::sync::LazyLock;

use regex::Regex;

/// `post_<digits>:<digits>`
static REPLY_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^post_[0-9]+:[0-9]+$").expect("replyTo pattern is valid"));

/// Canonical 8-4-4-4-12 UUID, versions 1 through 5, RFC 4122 variant.
static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .expect("UUID pattern is valid")
});

/// Check a `replyTo` value.
pub fn is_valid_reply_to(value: &str) -> bool {
    REPLY_TO.is_match(value)
}

/// Check an `editingDraftId` value.
pub fn is_valid_uuid(value: &str) -> bool {
    UUID.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_to() {
        assert!(is_valid_reply_to("post_123:456"));
        assert!(is_valid_reply_to("post_0:0"));
        assert!(!is_valid_reply_to("post_123"));
        assert!(!is_valid_reply_to("post_a:1"));
        assert!(!is_valid_reply_to("xpost_1:2"));
        assert!(!is_valid_reply_to("post_1:2 "));
        assert!(!is_valid_reply_to(""));
    }

    #[test]
    fn test_uuid_versions() {
        assert!(is_valid_uuid("123e4567-e89b-12d3-a456-426614174000"));
        assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_valid_uuid("550E8400-E29B-41D4-A716-446655440000"));
        // version 7 is outside 1-5
        assert!(!is_valid_uuid("018f6d2e-8c1b-7a3e-9f00-000000000000"));
        // variant nibble must be 8, 9, a or b
        assert!(!is_valid_uuid("550e8400-e29b-41d4-c716-446655440000"));
    }

    #[test]
    fn test_uuid_shape() {
        assert!(!is_valid_uuid("not-a-uuid"));
        assert!(!is_valid_uuid("550e8400e29b41d4a716446655440000"));
        assert!(!is_valid_uuid("{550e8400-e29b-41d4-a716-446655440000}"));
        assert!(!is_valid_uuid(""));
    }
}
