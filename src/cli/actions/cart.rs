//! Local cart handlers.

use crate::cli::globals::GlobalArgs;
use anyhow::Result;

/// Print the cart lines and total.
///
/// # Errors
/// Returns an error when the cart file is corrupt.
pub fn show(globals: &GlobalArgs) -> Result<()> {
    let cart = globals.cart()?;

    if cart.is_empty() {
        println!("The cart is empty.");
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "{}  {:<28} {:<10} {:<4} {:>3} x {:>4} = {:>6}",
            line.id,
            line.slug,
            line.color,
            line.size,
            line.quantity,
            line.unit_price,
            line.subtotal()
        );
    }
    println!("Total: {}", cart.total());

    Ok(())
}

/// Add a variant to the cart, merging into an existing line when present.
///
/// # Errors
/// Returns an error for an unknown variant or a zero quantity.
pub fn add(globals: &GlobalArgs, slug: &str, color: &str, size: &str, quantity: u32) -> Result<()> {
    let catalog = globals.catalog()?;
    let mut cart = globals.cart()?;

    let line = cart.add(&catalog, slug, color, size, quantity)?.clone();
    cart.save()?;

    println!(
        "Added {} ({} / {}) x{}, line {}",
        line.slug, line.color, line.size, line.quantity, line.id
    );

    Ok(())
}

/// Remove a line by id or unique id prefix.
///
/// # Errors
/// Returns an error when the id is unknown or ambiguous.
pub fn remove(globals: &GlobalArgs, id: &str) -> Result<()> {
    let mut cart = globals.cart()?;

    let removed = cart.remove(id)?;
    cart.save()?;

    println!("Removed {} ({} / {}).", removed.slug, removed.color, removed.size);

    Ok(())
}

/// Drop every line from the cart.
///
/// # Errors
/// Returns an error when the cart file cannot be written.
pub fn clear(globals: &GlobalArgs) -> Result<()> {
    let mut cart = globals.cart()?;

    cart.clear();
    cart.save()?;

    println!("Cart cleared.");

    Ok(())
}
