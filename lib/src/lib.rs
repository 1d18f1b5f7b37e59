//! Mugshot - renders a personal about page to a standalone HTML document.
//!
//! The page content is fixed: a portrait, a biography, and an ordered list of
//! social links whose destinations come from environment configuration read
//! once at startup. The library models the page as typed content nodes and
//! renders them in a single pass.
//!
//! ## Modules
//!
//! - [`about`] - The about page content and its builder
//! - [`config`] - The site configuration snapshot
//! - [`content`] - Typed page content: metadata, body blocks, social links
//! - [`error`] - Error types
//! - [`render`] - Rendering of page models to HTML
//!
//! ## Examples
//!
//! ```
//! use mugshot_lib::{HtmlOptions, SiteConfig, about_page, as_html};
//!
//! let config = SiteConfig::default();
//! let page = about_page(&config);
//! let html = as_html(&page, HtmlOptions::default());
//! assert!(html.contains("<title>About | Patrick Kellar</title>"));
//! ```

pub mod about;
pub mod config;
pub mod content;
pub mod error;
pub mod render;

pub use about::about_page;
pub use config::SiteConfig;
pub use content::{Block, IconKind, Inline, PageMeta, PageModel, SocialLink};
pub use error::{PageError, PageResult};
pub use render::{HtmlOptions, as_html};
