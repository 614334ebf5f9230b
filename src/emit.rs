//! Pages to a validated document payload, and the payload to text.

#[cfg(test)]
#[path = "emit_test.rs"]
mod emit_test;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use search::{DocId, Document, DocumentSet};

use crate::content::Page;
use crate::error::IndexerError;
use crate::href::{self, HrefMode};
use crate::markdown;

pub const DEFAULT_SCRIPT_ID: &str = "search-docs";

/// Output encoding of the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// JSON island ready to paste into a page template.
    Script,
}

/// How pages become documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub href_mode: HrefMode,
    pub base_url: String,
    pub include_content: bool,
}

/// Assign ids in page order and build the validated document set.
pub fn documents(pages: &[Page], options: &DocumentOptions) -> Result<DocumentSet, IndexerError> {
    let mut docs = Vec::with_capacity(pages.len());
    for (slot, page) in pages.iter().enumerate() {
        let id = DocId::try_from(slot).map_err(|_| IndexerError::TooManyPages(pages.len()))?;
        let path = href::page_path(&page.rel_path, page.front.url.as_deref(), page.front.slug.as_deref());
        let content = if options.include_content { markdown::plain_text(&page.body) } else { String::new() };
        docs.push(Document {
            id,
            href: href::href(options.href_mode, &options.base_url, &path),
            title: page.title(),
            description: page.front.description.as_deref().map(str::trim).unwrap_or_default().to_owned(),
            content,
        });
    }
    Ok(DocumentSet::new(docs)?)
}

/// Encode the payload.
pub fn render(set: &DocumentSet, format: Format, script_id: &str) -> Result<String, IndexerError> {
    match format {
        Format::Json => {
            let mut text = serde_json::to_string_pretty(set.as_slice())?;
            text.push('\n');
            Ok(text)
        }
        Format::Script => {
            let json = serde_json::to_string(set.as_slice())?.replace("</", "<\\/");
            Ok(format!("<script type=\"application/json\" id=\"{}\">{json}</script>\n", escape_attr(script_id)))
        }
    }
}

/// Write to `output`, creating parent directories, or to stdout when `None`.
pub fn write(output: Option<&Path>, text: &str) -> Result<(), IndexerError> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .map_err(|source| IndexerError::Write { path: parent.to_path_buf(), source })?;
            }
            fs::write(path, text).map_err(|source| IndexerError::Write { path: path.to_path_buf(), source })
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| IndexerError::Write { path: "<stdout>".into(), source })
        }
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;").replace('>', "&gt;")
}

/// The JSON array inside a payload produced in either format.
#[must_use]
pub fn payload_json(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("<script") {
        return trimmed;
    }
    let start = trimmed.find('>').map_or(0, |i| i + 1);
    let end = trimmed.rfind("</script>").filter(|end| *end >= start).unwrap_or(trimmed.len());
    trimmed[start..end].trim()
}
