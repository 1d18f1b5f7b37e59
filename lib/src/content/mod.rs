//! Typed page content: metadata, body blocks, and social links.

pub mod icon;
pub mod node;
pub mod page;

pub use icon::IconKind;
pub use node::{Block, Inline};
pub use page::{AssetRef, PageMeta, PageModel, SocialLink};
