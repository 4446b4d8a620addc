//! Filter query types.
//!
//! A `FilterQuery` is a transient value object: the UI shell assembles one
//! from its three independent controls (text field, category chip group,
//! min/max price pair) on every interaction, hands it to the filter, and
//! discards it. It holds no identity and is never stored.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` price bound.
///
/// The range is evaluated exactly as given: `min > max` is not validated
/// or reordered, it simply matches nothing. Callers sanitize numeric
/// input before constructing one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Build a range from the two bound values, as entered.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Return true if `price` lies within the inclusive bound.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    /// The permissive range: covers every non-negative price.
    fn default() -> Self {
        Self { min: 0.0, max: f64::MAX }
    }
}

/// The set of category chips currently selected.
///
/// An empty selection means "no category restriction" — every entry
/// passes the category test. Labels are matched exactly against
/// `CatalogEntry::category`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySelection {
    inner: HashSet<String>,
}

impl CategorySelection {
    /// Add a category label to the selection.
    pub fn select(&mut self, category: impl Into<String>) {
        self.inner.insert(category.into());
    }

    /// Chip-tap semantics: select the label if absent, deselect if present.
    pub fn toggle(&mut self, category: &str) {
        if !self.inner.remove(category) {
            self.inner.insert(category.to_string());
        }
    }

    /// Return true if the label is currently selected.
    pub fn contains(&self, category: &str) -> bool {
        self.inner.contains(category)
    }

    /// Return true if no category is selected (no restriction).
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of selected labels.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Return an iterator over all selected labels.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }
}

/// The combined constraints applied in one filtering pass.
///
/// All three constraints are ANDed; there is no OR mode. The default
/// query (empty text, empty selection, permissive range) matches every
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Case-insensitive substring matched against name and brand.
    /// Empty matches all.
    pub text: String,
    /// Selected category labels. Empty means no restriction.
    pub categories: CategorySelection,
    /// Inclusive price bound.
    pub price_range: PriceRange,
}

impl FilterQuery {
    /// The permissive query matching every entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text constraint.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add one category label to the selection.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.select(category);
        self
    }

    /// Set the price bound.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }
}
