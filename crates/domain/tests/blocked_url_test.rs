use focus_guard_domain::{BlockedUrl, DomainError};

const PROTECTED: &str = "tivoku.com";

#[test]
fn test_blocked_url_creation() {
    let entry = BlockedUrl::new("example.com/*");

    assert!(entry.id.is_none());
    assert!(entry.added_at.is_none());
    assert_eq!(entry.url, "example.com/*");
    assert!(entry.is_wildcard());
    assert!(!BlockedUrl::new("example.com").is_wildcard());
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn test_validate_accepts_normalized_urls() {
    assert!(BlockedUrl::validate("example.com", &[], PROTECTED).is_ok());
    assert!(BlockedUrl::validate("sub-domain.example.com/a/b", &[], PROTECTED).is_ok());
    assert!(BlockedUrl::validate("example.com/*", &[], PROTECTED).is_ok());
}

#[test]
fn test_validate_rejects_invalid_characters() {
    for candidate in ["example.com/a b", "Example.com", "example.com/path_x", "exa%mple.com"] {
        let err = BlockedUrl::validate(candidate, &[], PROTECTED).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidBlockedUrl("Invalid characters in URL".to_string())
        );
    }
}

#[test]
fn test_validate_rejects_empty() {
    assert!(matches!(
        BlockedUrl::validate("", &[], PROTECTED),
        Err(DomainError::InvalidBlockedUrl(_))
    ));
}

#[test]
fn test_validate_wildcard_skips_character_check() {
    assert!(BlockedUrl::validate("example.com/path_x/*", &[], PROTECTED).is_ok());
}

#[test]
fn test_validate_rejects_blocking_page_host() {
    let err = BlockedUrl::validate("tivoku.com/*", &[], PROTECTED).unwrap_err();
    assert!(matches!(err, DomainError::InvalidBlockedUrl(msg) if msg.contains("website blocker")));
}

#[test]
fn test_validate_empty_protected_host_allows_everything() {
    assert!(BlockedUrl::validate("tivoku.com", &[], "").is_ok());
}

#[test]
fn test_validate_rejects_duplicates() {
    let existing = vec![BlockedUrl::new("example.com"), BlockedUrl::new("other.org/*")];

    assert_eq!(
        BlockedUrl::validate("other.org/*", &existing, PROTECTED),
        Err(DomainError::BlockedUrlAlreadyExists("other.org/*".to_string()))
    );
    assert!(BlockedUrl::validate("example.com/*", &existing, PROTECTED).is_ok());
}
