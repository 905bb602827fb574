//! Global CLI options shared by every subcommand.

use crate::api::ApiClient;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::cli::commands;
use crate::session::SessionStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct GlobalArgs {
    pub api_url: String,
    pub session_file: PathBuf,
    pub cart_file: PathBuf,
    pub catalog_file: Option<PathBuf>,
}

impl GlobalArgs {
    /// Extract the global options from parsed matches.
    ///
    /// # Errors
    /// Returns an error if a defaulted argument is somehow absent.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let api_url = matches
            .get_one::<String>(commands::ARG_API_URL)
            .cloned()
            .context("missing required argument: --api-url")?;

        let session_file = matches
            .get_one::<PathBuf>(commands::ARG_SESSION_FILE)
            .cloned()
            .context("missing required argument: --session-file")?;

        let cart_file = matches
            .get_one::<PathBuf>(commands::ARG_CART_FILE)
            .cloned()
            .context("missing required argument: --cart-file")?;

        let catalog_file = matches.get_one::<PathBuf>(commands::ARG_CATALOG).cloned();

        Ok(Self {
            api_url,
            session_file,
            cart_file,
            catalog_file,
        })
    }

    /// Build an API client backed by the session file.
    ///
    /// # Errors
    /// Returns an error if the session file is corrupt or the URL invalid.
    pub fn api_client(&self) -> Result<ApiClient> {
        let session = SessionStore::load(&self.session_file)?;
        ApiClient::new(&self.api_url, session)
    }

    /// Load the product catalog, embedded unless `--catalog` points at a file.
    ///
    /// # Errors
    /// Returns an error if the catalog file cannot be read or parsed.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_file {
            Some(path) => Catalog::from_file(path),
            None => Catalog::embedded(),
        }
    }

    /// Load the cart from its backing file.
    ///
    /// # Errors
    /// Returns an error if the cart file is corrupt.
    pub fn cart(&self) -> Result<Cart> {
        Cart::load(&self.cart_file)
    }
}
