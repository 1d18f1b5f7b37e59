//! HTML output for page models.
//!
//! Produces one standalone document per call: head metadata, an optional
//! embedded stylesheet, and a two-column grid (portrait left, biography
//! right, social list aside) that collapses to a single column on narrow
//! viewports.
//!
//! ## Examples
//!
//! ```
//! use mugshot_lib::{HtmlOptions, SiteConfig, about_page, as_html};
//!
//! let page = about_page(&SiteConfig::default());
//! let html = as_html(&page, HtmlOptions::default());
//! assert!(html.contains("<ul role=\"list\">"));
//! ```

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::content::node::{Block, Inline};
use crate::content::page::{PageModel, SocialLink};
use crate::render::link::HtmlLink;

/// Options for HTML output with sensible defaults.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct HtmlOptions {
    /// Include the embedded stylesheet.
    pub include_styles: bool,
    /// Language attribute for the root element.
    pub lang: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            include_styles: true,
            lang: "en".to_string(),
        }
    }
}

/// Converts a page model to a standalone HTML document.
///
/// The transform is pure and total: it performs no I/O, never fails, and
/// rendering the same model twice yields byte-identical output. Links with
/// empty destinations render as non-navigating anchors.
pub fn as_html(page: &PageModel, options: HtmlOptions) -> String {
    tracing::trace!(title = %page.meta.title, "rendering page to html");
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n");
    output.push_str(&format!(
        "<html lang=\"{}\">\n<head>\n",
        encode_double_quoted_attribute(&options.lang)
    ));
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    output.push_str(&format!(
        "<title>{}</title>\n",
        encode_text(&page.meta.title)
    ));
    output.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        encode_double_quoted_attribute(&page.meta.description)
    ));
    if !page.meta.keywords.is_empty() {
        output.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\">\n",
            encode_double_quoted_attribute(&page.meta.keywords.join(", "))
        ));
    }
    if options.include_styles {
        output.push_str(generate_styles());
    }
    output.push_str("</head>\n<body>\n");

    output.push_str("<div class=\"about-grid\">\n");

    output.push_str("<div class=\"portrait-column\">\n");
    output.push_str(&format!(
        "<img class=\"portrait\" src=\"{}\" alt=\"\">\n",
        encode_double_quoted_attribute(page.portrait.as_str())
    ));
    output.push_str("</div>\n");

    output.push_str("<div class=\"text-column\">\n");
    output.push_str(&format!("<h1>{}</h1>\n", encode_text(&page.heading)));
    for block in &page.sections {
        render_block(&mut output, block);
    }
    output.push_str("</div>\n");

    output.push_str("<div class=\"social-column\">\n<ul role=\"list\">\n");
    for link in &page.social {
        render_social(&mut output, link);
    }
    output.push_str("</ul>\n</div>\n");

    output.push_str("</div>\n</body>\n</html>\n");

    output
}

fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            output.push_str(&format!("<h{level}>{}</h{level}>\n", encode_text(text)));
        }
        Block::Paragraph(inlines) => {
            output.push_str("<p>");
            for inline in inlines {
                render_inline(output, inline);
            }
            output.push_str("</p>\n");
        }
    }
}

fn render_inline(output: &mut String, inline: &Inline) {
    match inline {
        Inline::Text(text) => {
            output.push_str(encode_text(text).as_ref());
        }
        Inline::Emphasis(text) => {
            output.push_str(&format!("<em>{}</em>", encode_text(text)));
        }
        Inline::Link { text, href } => {
            let link = HtmlLink::new(text, href).with_class("inline-link");
            output.push_str(&link.to_html());
        }
    }
}

/// Emits one social list item: icon glyph, then label, hyperlinked together.
///
/// Items render unconditionally; an unresolved destination becomes a
/// non-navigating anchor rather than omitting the item.
fn render_social(output: &mut String, link: &SocialLink) {
    output.push_str(&format!(
        "<li class=\"social social-{}\"><a href=\"{}\">",
        link.icon,
        encode_double_quoted_attribute(&link.href)
    ));
    output.push_str(&format!(
        "<svg viewBox=\"0 0 24 24\" aria-hidden=\"true\"><path fill-rule=\"evenodd\" d=\"{}\"/></svg>",
        link.icon.glyph()
    ));
    output.push_str(&format!("<span>{}</span>", encode_text(&link.label)));
    output.push_str("</a></li>\n");
}

/// The fixed layout stylesheet: a one-column grid that becomes two columns
/// (text first, portrait and social links to the right) from 1024px up.
fn generate_styles() -> &'static str {
    r#"<style>
body {
    margin: 0;
    font-family: system-ui, sans-serif;
    color: #27272a;
}

.about-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 4rem;
    max-width: 72rem;
    margin: 4rem auto;
    padding: 0 1.5rem;
}

.portrait {
    max-width: 20rem;
    width: 100%;
    aspect-ratio: 1 / 1;
    object-fit: cover;
    border-radius: 1rem;
    transform: rotate(3deg);
    background-color: #f4f4f5;
}

.text-column h1 {
    font-size: 2.5rem;
    letter-spacing: -0.025em;
}

.text-column p {
    line-height: 1.6;
    color: #52525b;
}

.inline-link {
    color: inherit;
    border-bottom: 1px dotted currentColor;
    text-decoration: none;
}

.social-column ul {
    list-style: none;
    margin: 0;
    padding: 0;
}

.social {
    margin-top: 1rem;
}

.social a {
    display: flex;
    align-items: center;
    font-size: 0.875rem;
    font-weight: 500;
    color: #27272a;
    text-decoration: none;
}

.social svg {
    width: 1.5rem;
    height: 1.5rem;
    flex: none;
    fill: #71717a;
}

.social span {
    margin-left: 1rem;
}

.social-mail {
    margin-top: 2rem;
    border-top: 1px solid #f4f4f5;
    padding-top: 2rem;
}

@media (min-width: 1024px) {
    .about-grid {
        grid-template-columns: 1fr 1fr;
        grid-template-rows: auto 1fr;
    }

    .text-column {
        order: -1;
        grid-row: span 2;
    }
}
</style>
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::icon::IconKind;
    use crate::content::page::{AssetRef, PageMeta};

    fn sample_page() -> PageModel {
        PageModel {
            meta: PageMeta {
                title: "About | Patrick Kellar".to_string(),
                description: "A page about me".to_string(),
                keywords: vec!["one".to_string(), "two".to_string()],
            },
            portrait: AssetRef::new("images/portrait.jpg"),
            heading: "Hello".to_string(),
            sections: vec![
                Block::heading(2, "Section"),
                Block::paragraph(vec![
                    Inline::text("Read the "),
                    Inline::link("docs", "/docs"),
                    Inline::text(" please."),
                ]),
            ],
            social: vec![
                SocialLink {
                    label: "Follow on GitHub".to_string(),
                    href: String::new(),
                    icon: IconKind::GitHub,
                },
                SocialLink {
                    label: "mail me".to_string(),
                    href: "mailto:someone@example.com".to_string(),
                    icon: IconKind::Mail,
                },
            ],
        }
    }

    #[test]
    fn test_head_metadata() {
        let html = as_html(&sample_page(), HtmlOptions::default());
        assert!(html.contains("<title>About | Patrick Kellar</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"A page about me\">"));
        assert!(html.contains("<meta name=\"keywords\" content=\"one, two\">"));
    }

    #[test]
    fn test_empty_href_renders_non_navigating_anchor() {
        let html = as_html(&sample_page(), HtmlOptions::default());
        assert!(html.contains("<li class=\"social social-github\"><a href=\"\">"));
        assert!(html.contains("Follow on GitHub"));
    }

    #[test]
    fn test_social_items_carry_glyph_and_label() {
        let html = as_html(&sample_page(), HtmlOptions::default());
        assert!(html.contains(IconKind::Mail.glyph()));
        assert!(html.contains("<span>mail me</span>"));
    }

    #[test]
    fn test_inline_link_rendered_with_class() {
        let html = as_html(&sample_page(), HtmlOptions::default());
        assert!(html.contains("<a href=\"/docs\" class=\"inline-link\">docs</a>"));
    }

    #[test]
    fn test_emphasis_rendered_as_em() {
        let mut page = sample_page();
        page.sections = vec![Block::paragraph(vec![
            Inline::text("really "),
            Inline::emphasis("important"),
        ])];
        let html = as_html(&page, HtmlOptions::default());
        assert!(html.contains("<p>really <em>important</em></p>"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let page = sample_page();
        let first = as_html(&page, HtmlOptions::default());
        let second = as_html(&page, HtmlOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_styles_can_be_omitted() {
        let options = HtmlOptions {
            include_styles: false,
            ..Default::default()
        };
        let html = as_html(&sample_page(), options);
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut page = sample_page();
        page.heading = "<b>bold</b> & co".to_string();
        let html = as_html(&page, HtmlOptions::default());
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("bold"));
    }

    #[test]
    fn test_heading_levels_are_clamped() {
        let mut page = sample_page();
        page.sections = vec![Block::heading(9, "deep")];
        let html = as_html(&page, HtmlOptions::default());
        assert!(html.contains("<h6>deep</h6>"));
    }
}
