//! Ordered attribute mappings.
//!
//! [`Attributes`] keeps insertion order, and setting a name that already
//! exists overwrites the value where it stands. Serialization follows a small
//! set of rules:
//!
//! - `Flag(true)` renders the bare attribute name, `Flag(false)` nothing.
//! - `Text` renders `name="value"` verbatim, without escaping.
//! - Empty text and `Absent` are dropped. `"0"` is kept.

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttrValue {
    /// String value, emitted as `name="value"`.
    Text(String),
    /// Boolean attribute, emitted as a bare name when true.
    Flag(bool),
    /// No value; the attribute is skipped.
    #[default]
    Absent,
}

impl AttrValue {
    /// Whether this value produces any output.
    #[must_use]
    pub fn is_emitted(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Flag(flag) => *flag,
            Self::Absent => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, char);

/// Insertion-ordered attribute mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Builder-style variant of [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Apply every entry of `other` on top of this mapping.
    pub fn merge(&mut self, other: Attributes) -> &mut Self {
        for (name, value) in other.entries {
            self.set(name, value);
        }
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of entries, emitted or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Serialize to `name="value" flag ...`.
    ///
    /// Returns an empty string when nothing survives filtering.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_emitted())
            .map(|(name, value)| match value {
                AttrValue::Text(text) => format!(r#"{name}="{text}""#),
                _ => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
