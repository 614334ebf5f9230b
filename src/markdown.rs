//! Markdown body to indexable plain text.
//!
//! Keeps prose and inline code, drops markup, raw HTML, and template
//! shortcodes, and collapses all whitespace to single spaces.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, TagEnd};

/// Render a markdown body as a single line of plain text.
#[must_use]
pub fn plain_text(body: &str) -> String {
    let source = strip_shortcodes(body);
    let mut text = String::with_capacity(source.len());
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    for event in Parser::new_ext(&source, options) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image) => {}
            // Block ends and line breaks separate words.
            Event::SoftBreak | Event::HardBreak | Event::End(_) => text.push(' '),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove `{{< ... >}}` and `{{% ... %}}` shortcode tags, keeping any text
/// between an opening and closing tag.
#[must_use]
pub fn strip_shortcodes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(start) = rest.find("{{") {
        let open = &rest[start..];
        let close = if open.starts_with("{{<") {
            ">}}"
        } else if open.starts_with("{{%") {
            "%}}"
        } else {
            out.push_str(&rest[..start + 2]);
            rest = &rest[start + 2..];
            continue;
        };
        out.push_str(&rest[..start]);
        match open.find(close) {
            Some(end) => {
                out.push(' ');
                rest = &open[end + close.len()..];
            }
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
