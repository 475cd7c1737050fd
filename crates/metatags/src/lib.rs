//! Metatags
//!
//! Builder for the markup that goes inside an HTML `<head>`.
//!
//! # Modules
//!
//! - [`attributes`] - Ordered attribute mappings and their serialization
//! - [`group`] - Append-only fragment storage for one category
//! - [`builder`] - The [`MetaTags`] builder and its render pipeline
//!
//! # Example
//!
//! ```
//! use metatags::MetaTags;
//!
//! let mut tags = MetaTags::new();
//! tags.script("console.log(1)")
//!     .title("Hello")
//!     .og("title", "Hello");
//!
//! assert_eq!(
//!     tags.render(&[]),
//!     "<title>Hello</title>\n    <meta property=\"og:title\" content=\"Hello\">\n    <script>console.log(1)</script>\n"
//! );
//! ```

pub mod attributes;
pub mod builder;
pub mod group;

pub use attributes::{AttrValue, Attributes};
pub use builder::{LinkTarget, MetaKey, MetaTags, MetaTagsError, MetaValue, Result};
pub use group::Group;
pub use metatags_core::{Category, Config, CoreError, RenderConfig};
