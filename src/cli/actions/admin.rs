//! Staff-only administration handlers.

use crate::api::admin;
use crate::cli::actions::api_error;
use crate::cli::globals::GlobalArgs;
use anyhow::Result;

/// List one page of registered customers.
///
/// # Errors
/// Returns an error when the caller is not staff or the backend unreachable.
pub async fn customers(globals: &GlobalArgs, page: u32) -> Result<()> {
    let mut client = globals.api_client()?;

    let result = admin::customers(&mut client, page).await;
    client.persist_session()?;
    let listing = result.map_err(api_error)?;

    println!("{} customers, page {page}", listing.count);
    for customer in &listing.results {
        println!(
            "{:>6}  {:<20} {:<32} {} {}",
            customer.id, customer.username, customer.email, customer.first_name, customer.last_name
        );
    }

    if listing.next.is_some() {
        println!("More results on page {}.", page + 1);
    }

    Ok(())
}
