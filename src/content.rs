//! Content directory walk.
//!
//! Pages come from `<content>/<section>/**/*.md` for each configured section.
//! Drafts are skipped. Order follows the site generator's default page sort
//! closely enough for stable ids: weighted pages first by weight, then the
//! rest, ties broken by path.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::IndexerError;
use crate::front_matter::{self, FrontMatter};

/// A content file that belongs in the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Path relative to the content directory, `/`-agnostic.
    pub rel_path: PathBuf,
    pub front: FrontMatter,
    /// Markdown after the front matter.
    pub body: String,
}

impl Page {
    /// Front matter title, or a title derived from the file or directory name.
    #[must_use]
    pub fn title(&self) -> String {
        if let Some(title) = self.front.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            return title.to_owned();
        }
        let stem = self.rel_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        let name = if stem == "_index" || stem == "index" {
            self.rel_path
                .parent()
                .and_then(Path::file_name)
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default()
        } else {
            stem
        };
        humanize(&name)
    }
}

/// Collect every non-draft page under the given sections, sorted.
pub fn collect(content_dir: &Path, sections: &[String]) -> Result<Vec<Page>, IndexerError> {
    if !content_dir.is_dir() {
        return Err(IndexerError::MissingContentDir(content_dir.to_path_buf()));
    }

    let mut pages = Vec::new();
    for section in sections {
        let dir = content_dir.join(section);
        if !dir.is_dir() {
            tracing::warn!(section = %section, dir = %dir.display(), "section directory missing; skipping");
            continue;
        }
        let mut files = Vec::new();
        collect_markdown(&dir, &mut files)?;
        tracing::debug!(section = %section, files = files.len(), "scanned section");

        for path in files {
            let raw = fs::read_to_string(&path).map_err(|source| IndexerError::Read { path: path.clone(), source })?;
            let (front, body) = front_matter::parse(&path, &raw)?;
            if front.draft {
                tracing::debug!(path = %path.display(), "skipping draft");
                continue;
            }
            let rel_path = path.strip_prefix(content_dir).map_or_else(|_| path.clone(), Path::to_path_buf);
            pages.push(Page { rel_path, front, body: body.to_owned() });
        }
    }

    pages.sort_by(page_order);
    Ok(pages)
}

/// Every `.md` file under `dir`. Symlinks are not followed, so a link back
/// into the tree cannot repeat pages.
fn collect_markdown(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), IndexerError> {
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|err| IndexerError::Read {
            path: err.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf),
            source: io::Error::from(err),
        })?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == "md") {
            out.push(entry.into_path());
        }
    }
    Ok(())
}

/// Weighted pages (non-zero weight) ascending, then unweighted; then by path.
fn page_order(a: &Page, b: &Page) -> Ordering {
    let weight = |p: &Page| p.front.weight.filter(|w| *w != 0);
    match (weight(a), weight(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.rel_path.cmp(&b.rel_path))
}

fn humanize(name: &str) -> String {
    let spaced = name.replace(['-', '_'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
