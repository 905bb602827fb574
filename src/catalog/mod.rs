//! Product catalog: types, loading, and lookup.
//!
//! The storefront ships its catalog client-side; a default set is embedded
//! at compile time and can be replaced with `--catalog <file>`. Browsing
//! and filtering never touch the network.

pub mod filter;

pub use filter::ProductFilter;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_CATALOG: &str = include_str!("data.json");

/// A size option within a color variant. Prices are whole currency units.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SizeOption {
    pub name: String,
    pub price: u32,
}

/// One color of a product with its size/price matrix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorVariant {
    pub name: String,
    pub sizes: Vec<SizeOption>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub slug: String,
    pub division: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated search tags.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub image: String,
    pub base_price: u32,
    pub colors: Vec<ColorVariant>,
}

impl Product {
    /// Iterate every variant price across colors and sizes.
    pub fn prices(&self) -> impl Iterator<Item = u32> + '_ {
        self.colors
            .iter()
            .flat_map(|color| color.sizes.iter().map(|size| size.price))
    }

    /// Price for a specific color/size combination, if stocked.
    #[must_use]
    pub fn price_of(&self, color: &str, size: &str) -> Option<u32> {
        self.colors
            .iter()
            .find(|variant| variant.name.eq_ignore_ascii_case(color))?
            .sizes
            .iter()
            .find(|option| option.name.eq_ignore_ascii_case(size))
            .map(|option| option.price)
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The catalog embedded at compile time.
    ///
    /// # Errors
    /// Returns an error if the embedded data is malformed, which would be a
    /// packaging bug.
    pub fn embedded() -> Result<Self> {
        let products =
            serde_json::from_str(DEFAULT_CATALOG).context("failed to parse embedded catalog")?;
        Ok(Self { products })
    }

    /// Load a catalog override from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let products = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
        Ok(Self { products })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look a product up by slug for the details view.
    ///
    /// # Errors
    /// Returns an error naming the slug when no product matches.
    pub fn find(&self, slug: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|product| product.slug == slug)
            .ok_or_else(|| anyhow!("no product with slug {slug}"))
    }

    /// Products matching `filter`, in catalog order.
    #[must_use]
    pub fn filtered(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }
}
