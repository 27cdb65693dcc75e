//! Immutable rich-text document and its HTML serialization.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::fmt::Write as _;

/// A finished rich-text document: an ordered list of blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// One block-level element (paragraph, heading, or bullet item).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
}

/// Block-level style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockKind {
    #[default]
    Paragraph,
    Heading,
    Bullet,
}

/// A run of text with uniform inline marks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub marks: Marks,
}

/// Inline styling applied to a span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::default(),
        }
    }
}

impl Document {
    /// Serialize the document to an HTML string.
    ///
    /// Paragraphs become `<p>`, headings `<h2>`, and consecutive bullet
    /// blocks a single `<ul>` of `<li>` items. Span text is escaped;
    /// the store renders the result verbatim on every client.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let mut in_list = false;

        for block in &self.blocks {
            let is_bullet = block.kind == BlockKind::Bullet;
            if in_list && !is_bullet {
                html.push_str("</ul>");
                in_list = false;
            }

            match block.kind {
                BlockKind::Paragraph => {
                    let _ = write!(html, "<p>{}</p>", spans_to_html(&block.spans));
                }
                BlockKind::Heading => {
                    let _ = write!(html, "<h2>{}</h2>", spans_to_html(&block.spans));
                }
                BlockKind::Bullet => {
                    if !in_list {
                        html.push_str("<ul>");
                        in_list = true;
                    }
                    let _ = write!(html, "<li>{}</li>", spans_to_html(&block.spans));
                }
            }
        }

        if in_list {
            html.push_str("</ul>");
        }
        html
    }

    /// True if no block contains any text.
    pub fn is_empty(&self) -> bool {
        self.blocks
            .iter()
            .all(|b| b.spans.iter().all(|s| s.text.is_empty()))
    }
}

fn spans_to_html(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        let escaped = escape(&span.text);
        match (span.marks.bold, span.marks.italic) {
            (false, false) => out.push_str(&escaped),
            (true, false) => {
                let _ = write!(out, "<strong>{escaped}</strong>");
            }
            (false, true) => {
                let _ = write!(out, "<em>{escaped}</em>");
            }
            (true, true) => {
                let _ = write!(out, "<strong><em>{escaped}</em></strong>");
            }
        }
    }
    out
}

/// Escape text content for inclusion in HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
