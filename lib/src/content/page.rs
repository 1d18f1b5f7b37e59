//! The page model: an immutable description of one content page.

use serde::Serialize;

use crate::content::icon::IconKind;
use crate::content::node::Block;
use crate::error::PageResult;

/// Document metadata rendered into the HTML head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Ordered keyword list, joined with `", "` in the keywords meta tag.
    pub keywords: Vec<String>,
}

/// An opaque reference to an image asset.
///
/// Resolution and loading belong to an external asset pipeline; the renderer
/// emits the reference verbatim as an `src` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single outbound identity link: platform label, destination, and icon.
///
/// An empty `href` is valid and renders as a non-navigating link; configured
/// destinations are never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: IconKind,
}

/// In-memory description of one page, independent of output format.
///
/// Constructed once per render, then discarded. The `social` order is
/// meaningful: links render top-to-bottom exactly as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageModel {
    pub meta: PageMeta,
    pub portrait: AssetRef,
    /// The page's main heading, rendered above the body sections.
    pub heading: String,
    pub sections: Vec<Block>,
    pub social: Vec<SocialLink>,
}

impl PageModel {
    /// Serializes the model as pretty-printed JSON.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::PageError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> PageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_ref_is_verbatim() {
        let asset = AssetRef::new("images/portrait.jpg");
        assert_eq!(asset.as_str(), "images/portrait.jpg");
    }

    #[test]
    fn test_model_serializes_to_json() {
        let model = PageModel {
            meta: PageMeta {
                title: "t".to_string(),
                description: "d".to_string(),
                keywords: vec!["k".to_string()],
            },
            portrait: AssetRef::new("p.jpg"),
            heading: "h".to_string(),
            sections: vec![Block::text_paragraph("body")],
            social: vec![SocialLink {
                label: "GitHub".to_string(),
                href: String::new(),
                icon: IconKind::GitHub,
            }],
        };

        let json = model.to_json().unwrap();
        assert!(json.contains("\"title\": \"t\""));
        assert!(json.contains("GitHub"));
    }
}
