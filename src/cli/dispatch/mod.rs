//! Command-line argument dispatch.
//!
//! This module parses validated CLI arguments and maps them to the
//! appropriate action together with the resolved global options.

use crate::api::types::Profile;
use crate::catalog::ProductFilter;
use crate::cli::actions::Action;
use crate::cli::commands::{admin, auth, cart, products, profile};
use crate::cli::globals::GlobalArgs;
use crate::forms::ProfileEdits;
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

/// Map validated CLI matches to globals and an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<(GlobalArgs, Action)> {
    let globals = GlobalArgs::parse(matches)?;

    let action = match matches.subcommand() {
        Some((auth::CMD_LOGIN, sub)) => Action::Login {
            username: required_string(sub, "username")?,
            password: secret(sub, "password")?,
        },

        Some((auth::CMD_REGISTER, sub)) => Action::Register {
            profile: Profile {
                username: required_string(sub, "username")?,
                email: required_string(sub, "email")?,
                first_name: required_string(sub, "first-name")?,
                last_name: required_string(sub, "last-name")?,
                phone_number: required_string(sub, "phone-number")?,
            },
            password: secret(sub, "password")?,
            confirm_password: secret(sub, "confirm-password")?,
        },

        Some((auth::CMD_LOGOUT, _)) => Action::Logout,

        Some((profile::CMD_PROFILE, sub)) => match sub.subcommand() {
            Some((profile::CMD_PROFILE_SHOW, _)) => Action::ProfileShow,
            Some((profile::CMD_PROFILE_UPDATE, sub)) => Action::ProfileUpdate {
                edits: ProfileEdits {
                    username: sub.get_one::<String>("username").cloned(),
                    first_name: sub.get_one::<String>("first-name").cloned(),
                    last_name: sub.get_one::<String>("last-name").cloned(),
                    email: sub.get_one::<String>("email").cloned(),
                    phone_number: sub.get_one::<String>("phone-number").cloned(),
                },
            },
            Some((profile::CMD_PROFILE_DELETE, sub)) => Action::ProfileDelete {
                password: secret(sub, "password")?,
            },
            _ => return Err(anyhow!("missing profile subcommand")),
        },

        Some((profile::CMD_PASSWORD, sub)) => Action::ChangePassword {
            old_password: secret(sub, "old-password")?,
            new_password: secret(sub, "new-password")?,
            confirm_password: secret(sub, "confirm-password")?,
        },

        Some((products::CMD_PRODUCTS, sub)) => match sub.subcommand() {
            Some((products::CMD_PRODUCTS_LIST, sub)) => Action::ProductsList {
                filter: ProductFilter {
                    divisions: sub
                        .get_many::<String>("division")
                        .map(|values| values.cloned().collect())
                        .unwrap_or_default(),
                    category: sub.get_one::<String>("category").cloned(),
                    min_price: sub.get_one::<u32>("min-price").copied(),
                    max_price: sub.get_one::<u32>("max-price").copied(),
                    query: sub.get_one::<String>("search").cloned(),
                },
            },
            Some((products::CMD_PRODUCTS_SHOW, sub)) => Action::ProductsShow {
                slug: required_string(sub, "slug")?,
            },
            _ => return Err(anyhow!("missing products subcommand")),
        },

        Some((cart::CMD_CART, sub)) => match sub.subcommand() {
            Some((cart::CMD_CART_SHOW, _)) => Action::CartShow,
            Some((cart::CMD_CART_ADD, sub)) => Action::CartAdd {
                slug: required_string(sub, "slug")?,
                color: required_string(sub, "color")?,
                size: required_string(sub, "size")?,
                quantity: sub.get_one::<u32>("quantity").copied().unwrap_or(1),
            },
            Some((cart::CMD_CART_REMOVE, sub)) => Action::CartRemove {
                id: required_string(sub, "id")?,
            },
            Some((cart::CMD_CART_CLEAR, _)) => Action::CartClear,
            _ => return Err(anyhow!("missing cart subcommand")),
        },

        Some((admin::CMD_ADMIN, sub)) => match sub.subcommand() {
            Some((admin::CMD_ADMIN_CUSTOMERS, sub)) => Action::AdminCustomers {
                page: sub.get_one::<u32>("page").copied().unwrap_or(1),
            },
            _ => return Err(anyhow!("missing admin subcommand")),
        },

        _ => return Err(anyhow!("missing subcommand")),
    };

    Ok((globals, action))
}

fn required_string(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn secret(matches: &ArgMatches, name: &str) -> Result<SecretString> {
    required_string(matches, name).map(SecretString::from)
}
