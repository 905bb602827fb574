//! Catalog browsing handlers. These never touch the network.

use crate::catalog::ProductFilter;
use crate::cli::globals::GlobalArgs;
use anyhow::Result;

/// List products matching the filter, in catalog order.
///
/// # Errors
/// Returns an error when the catalog cannot be loaded.
pub fn list(globals: &GlobalArgs, filter: &ProductFilter) -> Result<()> {
    let catalog = globals.catalog()?;
    let matched = catalog.filtered(filter);

    if matched.is_empty() {
        println!("No products match the given filters.");
        return Ok(());
    }

    for product in matched {
        let min = product.prices().min().unwrap_or(product.base_price);
        let max = product.prices().max().unwrap_or(product.base_price);
        let price = if min == max {
            min.to_string()
        } else {
            format!("{min}-{max}")
        };

        println!(
            "{:<28} {:<32} {:>9}  {} colors",
            product.slug,
            product.name,
            price,
            product.colors.len()
        );
    }

    Ok(())
}

/// Print one product with its full color/size matrix.
///
/// # Errors
/// Returns an error when the slug is unknown or the catalog cannot load.
pub fn show(globals: &GlobalArgs, slug: &str) -> Result<()> {
    let catalog = globals.catalog()?;
    let product = catalog.find(slug)?;

    println!("{} ({})", product.name, product.slug);
    println!("{} / {}", product.division, product.category);
    if !product.description.is_empty() {
        println!("{}", product.description);
    }

    for color in &product.colors {
        let sizes: Vec<String> = color
            .sizes
            .iter()
            .map(|size| format!("{} ({})", size.name, size.price))
            .collect();
        println!("  {:<12} {}", color.name, sizes.join(", "));
    }

    Ok(())
}
