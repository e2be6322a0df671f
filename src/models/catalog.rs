//! Immutable problem data: the items that can be put on a menu and the nutrient
//! minimums a menu has to reach.
//!
//! Both tables are built once before evolution starts and are only ever read
//! afterwards. Every item carries an attribute vector whose first component is the
//! price and whose remaining components are nutrient quantities, in the same order
//! as the entries of the [`ConstraintSet`].

use super::ConfigurationError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single selectable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    /// `[price, nutrient_1, .., nutrient_k]`
    pub attributes: Vec<f64>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, attributes: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    pub fn price(&self) -> f64 {
        self.attributes[0]
    }

    pub fn nutrients(&self) -> &[f64] {
        &self.attributes[1..]
    }
}

/// Ordered, immutable list of catalog items. Gene `i` of a genome selects item `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Validates that the catalog is non-empty and that all items share the same
    /// attribute layout (a price plus at least zero nutrients).
    #[instrument(level = "debug", skip(items), fields(items_count = items.len()))]
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, ConfigurationError> {
        let expected = items
            .first()
            .map(|item| item.attributes.len())
            .ok_or(ConfigurationError::EmptyCatalog)?;

        for item in &items {
            if item.attributes.is_empty() || item.attributes.len() != expected {
                return Err(ConfigurationError::AttributeLengthMismatch {
                    item: item.name.clone(),
                    expected: expected.max(1),
                    got: item.attributes.len(),
                });
            }
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nutrient columns, i.e. the attribute length minus the price.
    pub fn nutrient_count(&self) -> usize {
        self.items[0].attributes.len() - 1
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<CatalogItem>::deserialize(deserializer)?;
        Catalog::new(items).map_err(serde::de::Error::custom)
    }
}

/// Minimum required quantity of one nutrient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientMinimum {
    pub name: String,
    pub minimum: f64,
}

impl NutrientMinimum {
    pub fn new(name: impl Into<String>, minimum: f64) -> Self {
        Self {
            name: name.into(),
            minimum,
        }
    }
}

/// Ordered nutrient minimums, aligned with the nutrient columns of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintSet {
    minimums: Vec<NutrientMinimum>,
}

impl ConstraintSet {
    pub fn new(minimums: Vec<NutrientMinimum>) -> Self {
        Self { minimums }
    }

    pub fn minimums(&self) -> &[NutrientMinimum] {
        &self.minimums
    }

    pub fn len(&self) -> usize {
        self.minimums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.minimums.iter().map(|minimum| minimum.name.as_str())
    }
}
