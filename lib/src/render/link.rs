//! HTML anchor rendering.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// A container pairing display text with a link destination.
///
/// An empty destination is valid: the anchor still renders, it just doesn't
/// navigate anywhere. Destinations are emitted as given, without validation.
///
/// ## Examples
///
/// ```
/// use mugshot_lib::render::HtmlLink;
///
/// let link = HtmlLink::new("Click here", "https://example.com")
///     .with_class("btn")
///     .with_title("Opens example.com");
/// assert!(link.to_html().starts_with(r#"<a href="https://example.com""#));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlLink {
    /// The text to display.
    display: String,
    /// The link destination, possibly empty.
    href: String,
    /// Optional CSS class attribute.
    class: Option<String>,
    /// Optional target attribute (e.g. "_blank").
    target: Option<String>,
    /// Optional title/tooltip attribute.
    title: Option<String>,
}

impl HtmlLink {
    /// Creates a new link with the given display text and destination.
    pub fn new(display: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            href: href.into(),
            ..Self::default()
        }
    }

    /// Sets the CSS class attribute.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the target attribute.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the title/tooltip attribute.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the link destination.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Renders the link as an `<a>` element with escaped attributes and text.
    pub fn to_html(&self) -> String {
        let mut attrs = format!(r#"href="{}""#, encode_double_quoted_attribute(&self.href));

        if let Some(class) = &self.class {
            attrs.push_str(&format!(
                r#" class="{}""#,
                encode_double_quoted_attribute(class)
            ));
        }
        if let Some(target) = &self.target {
            attrs.push_str(&format!(
                r#" target="{}""#,
                encode_double_quoted_attribute(target)
            ));
        }
        if let Some(title) = &self.title {
            attrs.push_str(&format!(
                r#" title="{}""#,
                encode_double_quoted_attribute(title)
            ));
        }

        format!("<a {}>{}</a>", attrs, encode_text(&self.display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_anchor() {
        let link = HtmlLink::new("Click here", "https://example.com");
        assert_eq!(
            link.to_html(),
            r#"<a href="https://example.com">Click here</a>"#
        );
    }

    #[test]
    fn test_empty_href_still_renders() {
        let link = HtmlLink::new("Nowhere", "");
        assert_eq!(link.to_html(), r#"<a href="">Nowhere</a>"#);
    }

    #[test]
    fn test_optional_attributes() {
        let link = HtmlLink::new("Styled", "https://example.com")
            .with_class("btn btn-primary")
            .with_target("_blank")
            .with_title("Opens in new tab");
        let html = link.to_html();
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"title="Opens in new tab""#));
    }

    #[test]
    fn test_display_text_is_escaped() {
        let link = HtmlLink::new("<script>alert(1)</script>", "https://example.com");
        let html = link.to_html();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_href_quotes_are_escaped() {
        let link = HtmlLink::new("x", r#"https://example.com/?q="quoted""#);
        let html = link.to_html();
        assert!(html.contains("&quot;quoted&quot;"));
    }
}
