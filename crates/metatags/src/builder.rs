//! The `<head>` markup builder.
//!
//! Each tag method serializes one fragment and files it under its
//! [`Category`]. Rendering walks a category order and joins the stored
//! fragments, so output order never depends on the order of calls across
//! categories.

use std::fmt;

use metatags_core::{Category, Config, config::DEFAULT_INDENTATION};
use serde::{Serialize, ser::Error as _};
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{attributes::Attributes, group::Group};

/// Indentation used inside pretty-printed JSON-LD.
const JSON_INDENT: &[u8] = b"    ";

/// Builder errors.
#[derive(Debug, Error)]
pub enum MetaTagsError {
    /// JSON-LD payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, MetaTagsError>;

/// Left-hand side of [`MetaTags::meta`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaKey {
    /// Becomes the `name` attribute.
    Name(String),
    /// Used as the full attribute set.
    Attrs(Attributes),
}

impl From<&str> for MetaKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for MetaKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Attributes> for MetaKey {
    fn from(attrs: Attributes) -> Self {
        Self::Attrs(attrs)
    }
}

/// Right-hand side of [`MetaTags::meta`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MetaValue {
    /// Becomes the `content` attribute unless empty.
    Content(String),
    /// Merged over the attributes derived from the key.
    Attrs(Attributes),
    /// Adds nothing.
    #[default]
    None,
}

impl From<&str> for MetaValue {
    fn from(content: &str) -> Self {
        Self::Content(content.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(content: String) -> Self {
        Self::Content(content)
    }
}

impl From<Attributes> for MetaValue {
    fn from(attrs: Attributes) -> Self {
        Self::Attrs(attrs)
    }
}

impl<T: Into<MetaValue>> From<Option<T>> for MetaValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

/// Target of [`MetaTags::link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Becomes the `href` attribute, right after `rel`.
    Href(String),
    /// Attributes placed after `rel`.
    Attrs(Attributes),
}

impl From<&str> for LinkTarget {
    fn from(href: &str) -> Self {
        Self::Href(href.to_string())
    }
}

impl From<String> for LinkTarget {
    fn from(href: String) -> Self {
        Self::Href(href)
    }
}

impl From<Attributes> for LinkTarget {
    fn from(attrs: Attributes) -> Self {
        Self::Attrs(attrs)
    }
}

/// Accumulates `<head>` fragments and renders them in category order.
#[derive(Debug, Clone)]
pub struct MetaTags {
    groups: [Option<Group>; Category::COUNT],
    indentation: String,
    minimize: bool,
    order: Vec<Category>,
}

impl Default for MetaTags {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaTags {
    /// Create a builder with four-space indentation and pretty output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(None, false)
    }

    /// Create a builder with explicit options.
    ///
    /// `None` or an empty indentation resolves to four spaces.
    #[must_use]
    pub fn with_options(indentation: Option<&str>, minimize: bool) -> Self {
        let indentation = match indentation {
            Some(indentation) if !indentation.is_empty() => indentation,
            _ => DEFAULT_INDENTATION,
        };

        Self {
            groups: Default::default(),
            indentation: indentation.to_string(),
            minimize,
            order: Category::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Create a builder from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut render = config.render.clone();
        render.normalize();

        Self {
            groups: Default::default(),
            indentation: render.indentation,
            minimize: render.minimize,
            order: render.order,
        }
    }

    /// Indentation unit used by pretty rendering.
    #[must_use]
    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    /// Whether the builder renders without separators.
    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.minimize
    }

    /// Order used by `render(&[])`.
    #[must_use]
    pub fn default_order(&self) -> &[Category] {
        &self.order
    }

    /// Group for a category, if anything was added to it.
    #[must_use]
    pub fn group(&self, category: Category) -> Option<&Group> {
        self.groups[category.index()].as_ref()
    }

    /// Total number of stored fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().flatten().map(Group::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `<title>{title}</title>`.
    pub fn title(&mut self, title: &str) -> &mut Self {
        self.add_tag(format!("<title>{title}</title>"), Category::Title)
    }

    /// Add a `<meta>` tag from a name or attribute set plus content or extra attributes.
    pub fn meta(&mut self, key: impl Into<MetaKey>, value: impl Into<MetaValue>) -> &mut Self {
        let mut attributes = match key.into() {
            MetaKey::Name(name) => Attributes::new().with("name", name),
            MetaKey::Attrs(attrs) => attrs,
        };

        match value.into() {
            MetaValue::Content(content) if !content.is_empty() => {
                attributes.set("content", content);
            }
            MetaValue::Attrs(extra) => {
                attributes.merge(extra);
            }
            MetaValue::Content(_) | MetaValue::None => {}
        }

        self.add_element("meta", &attributes, Category::Meta)
    }

    /// Add `<meta charset="…">`.
    pub fn charset(&mut self, charset: &str) -> &mut Self {
        let attributes = Attributes::from([("charset", charset)]);
        self.add_element("meta", &attributes, Category::Meta)
    }

    /// Add `<meta name="description" content="…">`.
    pub fn description(&mut self, description: &str) -> &mut Self {
        self.meta("description", description)
    }

    /// Add `<meta name="robots" content="…">`.
    pub fn robots(&mut self, robots: &str) -> &mut Self {
        self.meta("robots", robots)
    }

    /// Add an Open Graph property.
    pub fn og(&mut self, key: &str, value: &str) -> &mut Self {
        let attributes = Attributes::new()
            .with("property", format!("og:{key}"))
            .with("content", value);
        self.add_element("meta", &attributes, Category::Og)
    }

    /// Add a Twitter card property.
    pub fn twitter(&mut self, key: &str, value: &str) -> &mut Self {
        let attributes = Attributes::new()
            .with("name", format!("twitter:{key}"))
            .with("content", value);
        self.add_element("meta", &attributes, Category::Twitter)
    }

    /// Add a geotag such as `geo.region` or `geo.placename`.
    pub fn geo(&mut self, key: &str, value: &str) -> &mut Self {
        let attributes = Attributes::new()
            .with("name", format!("geo.{key}"))
            .with("content", value);
        self.add_element("meta", &attributes, Category::Geo)
    }

    /// Add a `<link>` tag.
    ///
    /// `extra` is merged last and may override `rel` or `href`.
    pub fn link(
        &mut self,
        rel: &str,
        target: impl Into<LinkTarget>,
        extra: impl Into<Attributes>,
    ) -> &mut Self {
        let mut attributes = Attributes::new().with("rel", rel);
        match target.into() {
            LinkTarget::Href(href) => {
                attributes.set("href", href);
            }
            LinkTarget::Attrs(attrs) => {
                attributes.merge(attrs);
            }
        }
        attributes.merge(extra.into());

        self.add_element("link", &attributes, Category::Link)
    }

    /// Add `<link rel="icon">` with an optional MIME type.
    pub fn favicon(&mut self, href: &str, mime: Option<&str>) -> &mut Self {
        self.link("icon", href, Attributes::new().with("type", mime))
    }

    /// Add a CSS stylesheet link with an optional media query.
    pub fn stylesheet(&mut self, href: &str, media: Option<&str>) -> &mut Self {
        let extra = Attributes::new()
            .with("type", "text/css")
            .with("media", media);
        self.link("stylesheet", href, extra)
    }

    /// Add an inline `<style>` block. The CSS is embedded verbatim.
    pub fn style(&mut self, css: &str) -> &mut Self {
        self.add_tag(format!(r#"<style type="text/css">{css}</style>"#), Category::Style)
    }

    /// Add an inline `<script>` block. The code is embedded verbatim.
    pub fn script(&mut self, js: &str) -> &mut Self {
        self.add_tag(format!("<script>{js}</script>"), Category::Script)
    }

    /// Add a JSON-LD structured data block.
    ///
    /// Pretty-printed unless the builder is minimized. Slashes are never escaped.
    pub fn json_ld<S: Serialize + ?Sized>(&mut self, schema: &S) -> Result<&mut Self> {
        let json = if self.minimize {
            serde_json::to_string(schema)?
        } else {
            let mut buf = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(
                &mut buf,
                PrettyFormatter::with_indent(JSON_INDENT),
            );
            schema.serialize(&mut serializer)?;
            String::from_utf8(buf).map_err(serde_json::Error::custom)?
        };

        Ok(self.add_tag(
            format!(r#"<script type="application/ld+json">{json}</script>"#),
            Category::JsonLd,
        ))
    }

    /// Render the stored fragments.
    ///
    /// An empty `categories` slice means the builder's default order. Categories
    /// with nothing stored are skipped.
    #[must_use]
    pub fn render(&self, categories: &[Category]) -> String {
        let order: &[Category] = if categories.is_empty() {
            &self.order
        } else {
            categories
        };

        let fragments: Vec<&str> = order
            .iter()
            .filter_map(|category| self.group(*category))
            .flat_map(Group::iter)
            .collect();

        debug!(
            fragments = fragments.len(),
            categories = order.len(),
            minimize = self.minimize,
            "rendering head tags"
        );

        if self.minimize {
            return fragments.concat();
        }

        if fragments.is_empty() {
            return String::new();
        }

        let mut html = fragments.join(&format!("\n{}", self.indentation));
        html.push('\n');
        html
    }

    /// Render using category names. Unknown names are skipped.
    #[must_use]
    pub fn render_names(&self, names: &[&str]) -> String {
        if names.is_empty() {
            return self.render(&[]);
        }

        let categories: Vec<Category> = names
            .iter()
            .filter_map(|name| match name.parse() {
                Ok(category) => Some(category),
                Err(err) => {
                    debug!(%err, "skipping category");
                    None
                }
            })
            .collect();

        if categories.is_empty() {
            return String::new();
        }

        self.render(&categories)
    }

    /// Serialize `<{name} {attributes}>` and store it, unless no attribute survives.
    fn add_element(&mut self, name: &str, attributes: &Attributes, category: Category) -> &mut Self {
        let rendered = attributes.render();
        if rendered.is_empty() {
            trace!(element = name, %category, "dropping tag without attributes");
            return self;
        }

        self.add_tag(format!("<{name} {rendered}>"), category)
    }

    fn add_tag(&mut self, tag: String, category: Category) -> &mut Self {
        self.groups[category.index()]
            .get_or_insert_with(Group::new)
            .push(tag);
        self
    }
}

impl fmt::Display for MetaTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}
