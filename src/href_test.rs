use super::*;

// =============================================================
// page_path
// =============================================================

#[test]
fn regular_page_gets_pretty_url() {
    assert_eq!(page_path(Path::new("docs/guide/install.md"), None, None), "/docs/guide/install/");
}

#[test]
fn section_index_maps_to_directory() {
    assert_eq!(page_path(Path::new("docs/_index.md"), None, None), "/docs/");
    assert_eq!(page_path(Path::new("docs/bundle/index.md"), None, None), "/docs/bundle/");
}

#[test]
fn root_index_maps_to_root() {
    assert_eq!(page_path(Path::new("_index.md"), None, None), "/");
}

#[test]
fn slug_replaces_last_segment() {
    assert_eq!(page_path(Path::new("docs/Getting Started.md"), None, Some("start")), "/docs/start/");
}

#[test]
fn segments_are_lowercased_and_hyphenated() {
    assert_eq!(page_path(Path::new("Docs/Getting Started.md"), None, None), "/docs/getting-started/");
}

#[test]
fn url_override_wins() {
    assert_eq!(page_path(Path::new("docs/a.md"), Some("/elsewhere/"), Some("x")), "/elsewhere/");
    assert_eq!(page_path(Path::new("docs/a.md"), Some("no-slash/"), None), "/no-slash/");
}

#[test]
fn absolute_url_override_is_kept() {
    assert_eq!(page_path(Path::new("docs/a.md"), Some("https://example.com/x/"), None), "https://example.com/x/");
    assert_eq!(page_path(Path::new("docs/a.md"), Some("//cdn.example.com/x/"), None), "//cdn.example.com/x/");
}

#[test]
fn blank_url_override_is_ignored() {
    assert_eq!(page_path(Path::new("docs/a.md"), Some("  "), None), "/docs/a/");
}

// =============================================================
// href
// =============================================================

#[test]
fn permalink_prefixes_full_base_url() {
    assert_eq!(
        href(HrefMode::Permalink, "https://example.github.io/community/", "/docs/a/"),
        "https://example.github.io/community/docs/a/"
    );
}

#[test]
fn relative_prefixes_base_path_only() {
    assert_eq!(href(HrefMode::Relative, "https://example.github.io/community/", "/docs/a/"), "/community/docs/a/");
    assert_eq!(href(HrefMode::Relative, "https://example.com", "/docs/a/"), "/docs/a/");
    assert_eq!(href(HrefMode::Relative, "https://example.com/", "/docs/a/"), "/docs/a/");
}

#[test]
fn root_base_url_yields_root_relative_links() {
    assert_eq!(href(HrefMode::Permalink, "/", "/docs/a/"), "/docs/a/");
    assert_eq!(href(HrefMode::Relative, "/", "/docs/a/"), "/docs/a/");
}

#[test]
fn absolute_path_ignores_base_url() {
    let path = "https://example.com/x/";
    assert_eq!(href(HrefMode::Permalink, "https://docs.example.org/", path), path);
    assert_eq!(href(HrefMode::Relative, "https://docs.example.org/site/", path), path);
}

#[test]
fn default_mode_is_permalink() {
    assert_eq!(HrefMode::default(), HrefMode::Permalink);
}
