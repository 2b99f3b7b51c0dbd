use focus_guard_domain::{normalize, NormalizeMode};

// ── url mode ──────────────────────────────────────────────────────────────────

#[test]
fn test_url_mode_strips_scheme_www_query_and_trailing_slash() {
    assert_eq!(
        normalize("HTTPS://WWW.Example.com/Foo/?x=1", NormalizeMode::Url),
        "example.com/foo"
    );
    assert_eq!(normalize("example.com/Foo", NormalizeMode::Url), "example.com/foo");
}

#[test]
fn test_url_mode_equivalent_inputs_converge() {
    let variants = [
        "http://example.com/docs",
        "https://example.com/docs/",
        "https://www.example.com/docs?page=2",
        "WWW.EXAMPLE.COM/docs",
        "example.com/docs",
    ];

    for variant in variants {
        assert_eq!(normalize(variant, NormalizeMode::Url), "example.com/docs", "{}", variant);
    }
}

#[test]
fn test_url_mode_is_idempotent() {
    let inputs = [
        "https://www.github.com/rust-lang/rust/issues?q=is%3Aopen",
        "http://news.ycombinator.com/",
        "reddit.com/r/rust",
        "EXAMPLE.org",
    ];

    for input in inputs {
        let once = normalize(input, NormalizeMode::Url);
        assert_eq!(normalize(&once, NormalizeMode::Url), once);
    }
}

#[test]
fn test_prefixes_are_stripped_once_in_order() {
    // www. comes after the scheme, so a scheme after www. survives
    assert_eq!(
        normalize("www.https://example.com", NormalizeMode::Url),
        "https://example.com"
    );
    assert_eq!(normalize("https://www.www.example.com", NormalizeMode::Url), "www.example.com");
    assert_eq!(normalize("http://https://example.com", NormalizeMode::Url), "https://example.com");
}

#[test]
fn test_www_is_only_stripped_as_prefix() {
    assert_eq!(normalize("example.com/www.page", NormalizeMode::Url), "example.com/www.page");
}

#[test]
fn test_query_is_cut_at_first_question_mark() {
    assert_eq!(normalize("example.com/a?b=1?c=2", NormalizeMode::Url), "example.com/a");
    assert_eq!(normalize("example.com?x", NormalizeMode::Url), "example.com");
}

#[test]
fn test_only_one_trailing_slash_is_removed() {
    assert_eq!(normalize("example.com//", NormalizeMode::Url), "example.com/");
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize("", NormalizeMode::Url), "");
    assert_eq!(normalize("https://", NormalizeMode::Url), "");
}

// ── domain mode ───────────────────────────────────────────────────────────────

#[test]
fn test_domain_mode_keeps_host_only() {
    assert_eq!(
        normalize("https://www.YouTube.com/watch?v=abc", NormalizeMode::Domain),
        "youtube.com/*"
    );
    assert_eq!(normalize("news.ycombinator.com", NormalizeMode::Domain), "news.ycombinator.com/*");
}

#[test]
fn test_domain_mode_drops_query_on_bare_host() {
    assert_eq!(normalize("example.com?ref=home", NormalizeMode::Domain), "example.com/*");
}

// ── starts-with mode ──────────────────────────────────────────────────────────

#[test]
fn test_starts_with_mode_appends_single_slash_wildcard() {
    assert_eq!(
        normalize("https://reddit.com/r/rust", NormalizeMode::StartsWith),
        "reddit.com/r/rust/*"
    );
    assert_eq!(
        normalize("https://reddit.com/r/rust/", NormalizeMode::StartsWith),
        "reddit.com/r/rust/*"
    );
}

#[test]
fn test_starts_with_mode_drops_query_before_wildcard() {
    assert_eq!(
        normalize("example.com/search?q=rust", NormalizeMode::StartsWith),
        "example.com/search/*"
    );
}

// ── NormalizeMode ─────────────────────────────────────────────────────────────

#[test]
fn test_normalize_mode_from_str() {
    assert_eq!("url".parse::<NormalizeMode>(), Ok(NormalizeMode::Url));
    assert_eq!("domain".parse::<NormalizeMode>(), Ok(NormalizeMode::Domain));
    assert_eq!("starts-with".parse::<NormalizeMode>(), Ok(NormalizeMode::StartsWith));
    assert!("prefix".parse::<NormalizeMode>().is_err());
}

#[test]
fn test_normalize_mode_display_round_trips() {
    for mode in [NormalizeMode::Url, NormalizeMode::Domain, NormalizeMode::StartsWith] {
        assert_eq!(mode.to_string().parse::<NormalizeMode>(), Ok(mode));
    }
}

#[test]
fn test_normalize_mode_default_is_url() {
    assert_eq!(NormalizeMode::default(), NormalizeMode::Url);
}
