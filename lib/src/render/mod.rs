//! Rendering of page models to markup output.
//!
//! Rendering is a single-pass, stateless transform: the same model always
//! produces byte-identical output, and nothing in here can fail.

pub mod html;
pub mod link;

pub use html::{HtmlOptions, as_html};
pub use link::HtmlLink;
