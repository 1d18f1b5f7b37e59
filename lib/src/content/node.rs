//! Typed content nodes for page bodies.
//!
//! A body is an ordered sequence of [`Block`]s; paragraphs hold ordered
//! [`Inline`] runs. Nesting stops there: no lists inside paragraphs, no
//! blocks inside blocks.

use serde::Serialize;

/// An inline element within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    /// A plain text run.
    Text(String),
    /// An emphasized text run.
    Emphasis(String),
    /// A hyperlink embedded in body text.
    Link { text: String, href: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::Emphasis(text.into())
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// A block-level element in a page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A section heading. Levels are clamped to 1..=6 at render time.
    Heading { level: u8, text: String },
    /// A paragraph of inline content.
    Paragraph(Vec<Inline>),
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Self::Paragraph(inlines)
    }

    /// A paragraph containing a single plain text run.
    pub fn text_paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(vec![Inline::text(text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_paragraph_wraps_single_run() {
        let block = Block::text_paragraph("hello");
        assert_eq!(
            block,
            Block::Paragraph(vec![Inline::Text("hello".to_string())])
        );
    }

    #[test]
    fn test_link_constructor() {
        let inline = Inline::link("docs", "https://example.com/docs");
        let Inline::Link { text, href } = inline else {
            panic!("expected a link");
        };
        assert_eq!(text, "docs");
        assert_eq!(href, "https://example.com/docs");
    }
}
