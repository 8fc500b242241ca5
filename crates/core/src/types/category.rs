//! Product categories and the category filter.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Category`] or [`CategoryFilter`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// The closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cosmetics,
    Stationery,
    Grocery,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Cosmetics, Self::Stationery, Self::Grocery];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cosmetics => "Cosmetics",
            Self::Stationery => "Stationery",
            Self::Grocery => "Grocery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}

/// Which categories the catalog view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// A single category.
    Only(Category),
}

impl CategoryFilter {
    /// Every filter option, in the order the category tabs are shown.
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(Category::Cosmetics),
        Self::Only(Category::Stationery),
        Self::Only(Category::Grocery),
    ];

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "grocery".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Grocery)
        );
        assert_eq!(
            "Toys".parse::<CategoryFilter>(),
            Err(CategoryError("Toys".to_string()))
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Stationery));
        assert!(CategoryFilter::Only(Category::Cosmetics).matches(Category::Cosmetics));
        assert!(!CategoryFilter::Only(Category::Cosmetics).matches(Category::Grocery));
    }

    #[test]
    fn test_options_labels() {
        let labels: Vec<_> = CategoryFilter::OPTIONS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Cosmetics", "Stationery", "Grocery"]);
    }
}
