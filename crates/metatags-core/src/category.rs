//! Tag categories.
//!
//! Every fragment the builder produces belongs to exactly one category. The
//! category decides which group the fragment is stored in and, through the
//! render order, where it appears in the output.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Classification of a `<head>` fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Title,
    Meta,
    Og,
    Twitter,
    Geo,
    Link,
    Style,
    Script,
    JsonLd,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// Render order used when the caller does not supply one.
    pub const DEFAULT_ORDER: [Category; Self::COUNT] = [
        Self::Title,
        Self::Meta,
        Self::Og,
        Self::Twitter,
        Self::Geo,
        Self::Link,
        Self::Style,
        Self::Script,
        Self::JsonLd,
    ];

    /// Canonical name of the category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Meta => "meta",
            Self::Og => "og",
            Self::Twitter => "twitter",
            Self::Geo => "geo",
            Self::Link => "link",
            Self::Style => "style",
            Self::Script => "script",
            Self::JsonLd => "json-ld",
        }
    }

    /// Stable slot index in `0..Category::COUNT`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DEFAULT_ORDER
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::unknown_category(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for category in Category::DEFAULT_ORDER {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "opengraph".parse::<Category>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(name) if name == "opengraph"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Title".parse::<Category>().is_err());
        assert!("json_ld".parse::<Category>().is_err());
    }

    #[test]
    fn test_indices_are_distinct_and_in_range() {
        let mut seen = [false; Category::COUNT];
        for category in Category::DEFAULT_ORDER {
            let index = category.index();
            assert!(index < Category::COUNT);
            assert!(!seen[index], "duplicate index for {category}");
            seen[index] = true;
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Category::JsonLd).unwrap();
        assert_eq!(json, r#""json-ld""#);

        let order: Vec<Category> = serde_json::from_str(r#"["og", "twitter", "json-ld"]"#).unwrap();
        assert_eq!(order, vec![Category::Og, Category::Twitter, Category::JsonLd]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Twitter.to_string(), "twitter");
        assert_eq!(format!("{}", Category::JsonLd), "json-ld");
    }
}
