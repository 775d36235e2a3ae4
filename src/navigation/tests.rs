//! Tests for navigation classification and interception.

use std::sync::Arc;

use tempfile::TempDir;

use super::surface::escape_js;
use super::{classify, NavDecision, NavTarget, NavigationInterceptor, OriginPolicy};
use crate::resolver::ContentResolver;

fn test_policy() -> OriginPolicy {
    OriginPolicy::new("phydemo.app", "/ray-optics")
}

fn create_test_interceptor() -> (NavigationInterceptor, TempDir) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("www");
    std::fs::create_dir_all(root.join("gallery")).unwrap();
    std::fs::write(root.join("gallery/index.html"), "<html>gallery</html>").unwrap();
    std::fs::write(root.join("about.html"), "<html>about</html>").unwrap();

    let resolver = Arc::new(ContentResolver::new(&root, "gallery/index.html"));
    (NavigationInterceptor::new(resolver, test_policy()), temp)
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classify_external_url() {
    let target = classify("https://example.com/other", &test_policy());
    assert_eq!(
        target,
        NavTarget::WebExternal("https://example.com/other".to_string())
    );
}

#[test]
fn test_classify_canonical_url_strips_prefix() {
    let target = classify(
        "https://phydemo.app/ray-optics/gallery/#convex-lens",
        &test_policy(),
    );
    assert_eq!(
        target,
        NavTarget::Canonical {
            path: "/gallery/".to_string(),
            fragment: Some("convex-lens".to_string()),
        }
    );
}

#[test]
fn test_classify_canonical_bare_prefix() {
    let target = classify("https://phydemo.app/ray-optics", &test_policy());
    assert_eq!(
        target,
        NavTarget::Canonical {
            path: "/".to_string(),
            fragment: None,
        }
    );
}

#[test]
fn test_classify_canonical_subdomain() {
    let target = classify("https://www.phydemo.app/ray-optics/about", &test_policy());
    assert!(matches!(target, NavTarget::Canonical { .. }));
}

#[test]
fn test_classify_lookalike_host_is_external() {
    let target = classify("https://phydemo.app.evil.example/x", &test_policy());
    assert!(matches!(target, NavTarget::WebExternal(_)));
}

#[test]
fn test_classify_prefix_only_matches_segment_boundary() {
    // `/ray-opticsextra` is not the published prefix.
    let target = classify("https://phydemo.app/ray-opticsextra/page", &test_policy());
    assert_eq!(
        target,
        NavTarget::Canonical {
            path: "/ray-opticsextra/page".to_string(),
            fragment: None,
        }
    );
}

#[test]
fn test_classify_file_url() {
    let target = classify("file:///opt/kiosk/www/about.html#top", &test_policy());
    assert_eq!(
        target,
        NavTarget::LocalFile {
            path: "/opt/kiosk/www/about.html".to_string(),
            fragment: Some("top".to_string()),
        }
    );
}

#[test]
fn test_classify_content_scheme() {
    let target = classify("kiosk://localhost/gallery/index.html", &test_policy());
    assert!(matches!(target, NavTarget::InContent { .. }));
}

#[test]
fn test_classify_windows_content_host() {
    // Wry maps custom schemes to https://<scheme>.localhost on Windows.
    let target = classify("https://kiosk.localhost/gallery/", &test_policy());
    assert!(matches!(target, NavTarget::InContent { .. }));
}

#[test]
fn test_classify_unknown_scheme_and_malformed() {
    assert_eq!(classify("mailto:someone@example.com", &test_policy()), NavTarget::Other);
    assert_eq!(classify("not a url", &test_policy()), NavTarget::Other);
    assert_eq!(classify("", &test_policy()), NavTarget::Other);
}

// ============================================================================
// Will-navigate decisions
// ============================================================================

#[test]
fn test_navigate_external_delegates_to_browser() {
    let (interceptor, _temp) = create_test_interceptor();
    let decision = interceptor.decide_navigate("https://example.com/other");
    assert_eq!(
        decision,
        NavDecision::OpenExternal("https://example.com/other".to_string())
    );
}

#[test]
fn test_navigate_canonical_loads_local_document_with_fragment() {
    let (interceptor, _temp) = create_test_interceptor();
    let decision =
        interceptor.decide_navigate("https://phydemo.app/ray-optics/gallery/#convex-lens");
    let expected = interceptor.resolver().root().join("gallery/index.html");
    assert_eq!(
        decision,
        NavDecision::LoadLocal {
            path: expected,
            fragment: Some("convex-lens".to_string()),
        }
    );
}

#[test]
fn test_navigate_file_url_resolves_locally() {
    let (interceptor, _temp) = create_test_interceptor();
    let root = interceptor.resolver().root().to_path_buf();
    let raw = format!("file://{}", root.join("about.html").display());
    let decision = interceptor.decide_navigate(&raw);
    assert_eq!(
        decision,
        NavDecision::LoadLocal {
            path: root.join("about.html"),
            fragment: None,
        }
    );
}

#[test]
fn test_navigate_in_content_is_allowed() {
    let (interceptor, _temp) = create_test_interceptor();
    let decision = interceptor.decide_navigate("kiosk://localhost/gallery/index.html");
    assert_eq!(decision, NavDecision::Allow);
}

#[test]
fn test_navigate_unknown_scheme_cancels() {
    let (interceptor, _temp) = create_test_interceptor();
    assert_eq!(
        interceptor.decide_navigate("mailto:someone@example.com"),
        NavDecision::Cancel
    );
    assert_eq!(interceptor.decide_navigate("not a url"), NavDecision::Cancel);
}

#[test]
fn test_navigate_canonical_traversal_stays_inside_root() {
    // URL parsing already folds dot segments; whatever survives is still
    // confined to the content root by the resolver.
    let (interceptor, _temp) = create_test_interceptor();
    let decision =
        interceptor.decide_navigate("https://phydemo.app/ray-optics/../../etc/passwd");
    match decision {
        NavDecision::LoadLocal { path, .. } => {
            assert!(path.starts_with(interceptor.resolver().root()));
        }
        other => panic!("expected LoadLocal, got {other:?}"),
    }
}

// ============================================================================
// New-window decisions
// ============================================================================

#[test]
fn test_new_window_external_delegates() {
    let (interceptor, _temp) = create_test_interceptor();
    let decision = interceptor.decide_new_window("https://example.com/paper.pdf");
    assert!(matches!(decision, NavDecision::OpenExternal(_)));
}

#[test]
fn test_new_window_never_allows() {
    let (interceptor, _temp) = create_test_interceptor();
    for raw in [
        "kiosk://localhost/gallery/index.html",
        "https://phydemo.app/ray-optics/gallery/",
        "https://example.com/other",
        "mailto:someone@example.com",
    ] {
        assert_ne!(interceptor.decide_new_window(raw), NavDecision::Allow, "{raw}");
    }
}

#[test]
fn test_new_window_in_content_loads_same_surface() {
    let (interceptor, _temp) = create_test_interceptor();
    let decision = interceptor.decide_new_window("kiosk://localhost/about.html");
    let expected = interceptor.resolver().root().join("about.html");
    assert_eq!(
        decision,
        NavDecision::LoadLocal {
            path: expected,
            fragment: None,
        }
    );
}

// ============================================================================
// Script escaping
// ============================================================================

#[test]
fn test_escape_js_quotes_and_backslashes() {
    assert_eq!(escape_js(r#"plain"#), "plain");
    assert_eq!(escape_js(r#"a"b"#), r#"a\"b"#);
    assert_eq!(escape_js(r"a\b"), r"a\\b");
    assert_eq!(escape_js(r#"\""#), r#"\\\""#);
}
