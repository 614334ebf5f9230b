//! Page front matter.
//!
//! Content files open with a metadata block fenced by `---` (YAML) or `+++`
//! (TOML). Only the keys the payload needs are read; everything else the site
//! generator understands is ignored.

#[cfg(test)]
#[path = "front_matter_test.rs"]
mod front_matter_test;

use std::path::Path;

use serde::Deserialize;

use crate::error::IndexerError;

/// Metadata read from a content file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub draft: bool,
    pub weight: Option<i64>,
    /// Absolute path override for the page.
    pub url: Option<String>,
    /// Replacement for the last path segment.
    pub slug: Option<String>,
}

/// Split `raw` into front matter and body, parsing the front matter.
///
/// A file without a fence has default front matter and the whole text as body.
pub fn parse<'a>(path: &Path, raw: &'a str) -> Result<(FrontMatter, &'a str), IndexerError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let (fence, yaml) = if starts_with_fence(raw, "---") {
        ("---", true)
    } else if starts_with_fence(raw, "+++") {
        ("+++", false)
    } else {
        return Ok((FrontMatter::default(), raw));
    };

    let after_open = raw.find('\n').map_or(raw.len(), |i| i + 1);
    let rest = &raw[after_open..];
    let (block, body) =
        split_at_closing(rest, fence).ok_or_else(|| IndexerError::UnterminatedFrontMatter(path.to_path_buf()))?;

    if block.trim().is_empty() {
        return Ok((FrontMatter::default(), body));
    }
    let front = if yaml {
        serde_yaml::from_str(block).map_err(|source| IndexerError::Yaml { path: path.to_path_buf(), source })?
    } else {
        toml::from_str(block).map_err(|source| IndexerError::Toml { path: path.to_path_buf(), source })?
    };
    Ok((front, body))
}

fn starts_with_fence(raw: &str, fence: &str) -> bool {
    raw.lines().next().is_some_and(|line| line.trim_end() == fence)
}

/// Find the line holding only `fence`; return the text before it and after it.
fn split_at_closing<'a>(rest: &'a str, fence: &str) -> Option<(&'a str, &'a str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == fence {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
