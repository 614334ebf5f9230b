//! Page URLs, following the site generator's pretty-URL rules.
//!
//! `docs/guide/install.md` is served at `/docs/guide/install/`; a section or
//! bundle index (`_index.md`, `index.md`) at its directory. Paths are
//! lowercased and spaces become hyphens.

#[cfg(test)]
#[path = "href_test.rs"]
mod href_test;

use std::path::{Component, Path};

use clap::ValueEnum;

/// How links are written into the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HrefMode {
    /// Absolute URL including scheme and host of the base URL.
    #[default]
    Permalink,
    /// Root-relative path including the base URL's path prefix.
    Relative,
}

/// Site-root path of the content file at `rel` (relative to the content dir).
#[must_use]
pub fn page_path(rel: &Path, url: Option<&str>, slug: Option<&str>) -> String {
    if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
        return if url.starts_with('/') || is_absolute_url(url) { url.to_owned() } else { format!("/{url}") };
    }

    let mut segments: Vec<String> = rel
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(s) => Some(urlize(&s.to_string_lossy())),
            _ => None,
        })
        .collect();

    let stem = rel.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
    if stem != "_index" && stem != "index" {
        segments.push(urlize(slug.unwrap_or(stem.as_str())));
    }

    if segments.is_empty() { "/".to_owned() } else { format!("/{}/", segments.join("/")) }
}

/// Final link for a page path under `base_url`. Absolute URLs are kept as-is.
#[must_use]
pub fn href(mode: HrefMode, base_url: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_owned();
    }
    let prefix = match mode {
        HrefMode::Permalink => base_url.trim_end_matches('/'),
        HrefMode::Relative => base_path(base_url),
    };
    format!("{prefix}{path}")
}

/// Path component of `base_url` without its trailing slash.
fn base_path(base_url: &str) -> &str {
    let path = match base_url.find("://") {
        Some(scheme_end) => {
            let after_scheme = &base_url[scheme_end + 3..];
            after_scheme.find('/').map_or("", |i| &after_scheme[i..])
        }
        None => base_url,
    };
    path.trim_end_matches('/')
}

/// `scheme://...` or protocol-relative `//host/...`.
fn is_absolute_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }
    url.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

fn urlize(segment: &str) -> String {
    segment.trim().to_lowercase().replace(' ', "-")
}
