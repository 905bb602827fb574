//! Local cart affordances.
//!
//! The cart lives next to the session file and never crosses the network;
//! lines reference catalog variants (slug + color + size) with the unit
//! price captured at add time, mirroring how the backend keys cart items
//! by product variant.

use crate::catalog::Catalog;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartLine {
    pub id: Uuid,
    pub slug: String,
    pub color: String,
    pub size: String,
    pub unit_price: u32,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub const fn subtotal(&self) -> u32 {
        self.unit_price * self.quantity
    }
}

#[derive(Debug, Default)]
pub struct Cart {
    path: Option<PathBuf>,
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the cart from `path`. A missing file yields an empty cart.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let lines = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read cart file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse cart file {}", path.display()))?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            lines,
        })
    }

    /// Persist the cart to its backing file, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create cart directory {}", parent.display())
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.lines)?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write cart file {}", path.display()))
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total across all lines.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Add `quantity` of a catalog variant. An existing line for the same
    /// slug/color/size is merged by bumping its quantity.
    ///
    /// # Errors
    /// Returns an error when the variant does not exist in the catalog or
    /// the quantity is zero.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        slug: &str,
        color: &str,
        size: &str,
        quantity: u32,
    ) -> Result<&CartLine> {
        if quantity == 0 {
            return Err(anyhow!("quantity must be at least 1"));
        }

        let product = catalog.find(slug)?;
        let unit_price = product
            .price_of(color, size)
            .ok_or_else(|| anyhow!("{slug} is not stocked in {color} / {size}"))?;

        let position = self.lines.iter().position(|line| {
            line.slug == slug
                && line.color.eq_ignore_ascii_case(color)
                && line.size.eq_ignore_ascii_case(size)
        });

        let index = match position {
            Some(index) => {
                self.lines[index].quantity += quantity;
                index
            }
            None => {
                self.lines.push(CartLine {
                    id: Uuid::new_v4(),
                    slug: slug.to_string(),
                    color: color.to_string(),
                    size: size.to_string(),
                    unit_price,
                    quantity,
                });
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[index])
    }

    /// Remove a line by id (a unique prefix is accepted).
    ///
    /// # Errors
    /// Returns an error when no line matches or the prefix is ambiguous.
    pub fn remove(&mut self, id: &str) -> Result<CartLine> {
        let matches: Vec<usize> = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.id.to_string().starts_with(id))
            .map(|(index, _)| index)
            .collect();

        match matches.as_slice() {
            [index] => Ok(self.lines.remove(*index)),
            [] => Err(anyhow!("no cart line with id {id}")),
            _ => Err(anyhow!("cart line id {id} is ambiguous")),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
