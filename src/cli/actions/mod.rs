//! Actions the CLI can execute, one handler module per concern.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod products;
pub mod profile;

use crate::api::types::Profile;
use crate::api::ApiError;
use crate::catalog::ProductFilter;
use crate::cli::globals::GlobalArgs;
use crate::forms::{label, ProfileEdits};
use anyhow::{anyhow, Result};
use secrecy::SecretString;
use serde_json::Value;

#[derive(Debug)]
pub enum Action {
    Login {
        username: String,
        password: SecretString,
    },
    Register {
        profile: Profile,
        password: SecretString,
        confirm_password: SecretString,
    },
    Logout,
    ProfileShow,
    ProfileUpdate {
        edits: ProfileEdits,
    },
    ProfileDelete {
        password: SecretString,
    },
    ChangePassword {
        old_password: SecretString,
        new_password: SecretString,
        confirm_password: SecretString,
    },
    ProductsList {
        filter: ProductFilter,
    },
    ProductsShow {
        slug: String,
    },
    CartShow,
    CartAdd {
        slug: String,
        color: String,
        size: String,
        quantity: u32,
    },
    CartRemove {
        id: String,
    },
    CartClear,
    AdminCustomers {
        page: u32,
    },
}

impl Action {
    /// Run the action with the resolved global options.
    ///
    /// # Errors
    /// Returns the handler's error: local validation, file IO, or a backend
    /// rejection.
    pub async fn execute(self, globals: &GlobalArgs) -> Result<()> {
        match self {
            Self::Login { username, password } => {
                auth::login(globals, &username, &password).await
            }
            Self::Register {
                profile,
                password,
                confirm_password,
            } => auth::register(globals, &profile, &password, &confirm_password).await,
            Self::Logout => auth::logout(globals).await,
            Self::ProfileShow => profile::show(globals).await,
            Self::ProfileUpdate { edits } => profile::update(globals, &edits).await,
            Self::ProfileDelete { password } => profile::delete(globals, &password).await,
            Self::ChangePassword {
                old_password,
                new_password,
                confirm_password,
            } => {
                profile::change_password(globals, &old_password, &new_password, &confirm_password)
                    .await
            }
            Self::ProductsList { filter } => products::list(globals, &filter),
            Self::ProductsShow { slug } => products::show(globals, &slug),
            Self::CartShow => cart::show(globals),
            Self::CartAdd {
                slug,
                color,
                size,
                quantity,
            } => cart::add(globals, &slug, &color, &size, quantity),
            Self::CartRemove { id } => cart::remove(globals, &id),
            Self::CartClear => cart::clear(globals),
            Self::AdminCustomers { page } => admin::customers(globals, page).await,
        }
    }
}

/// Render an API error for the terminal. Field-level validation maps from
/// the backend become one labeled line per field; everything else keeps the
/// error's own rendering.
pub(crate) fn api_error(err: ApiError) -> anyhow::Error {
    if let ApiError::Api { details, .. } = &err {
        if let Some(map) = details.as_object() {
            if !map.is_empty() && !map.contains_key("details") {
                let lines: Vec<String> = map
                    .iter()
                    .map(|(field, messages)| {
                        let rendered = match messages {
                            Value::Array(items) => items
                                .iter()
                                .map(|item| {
                                    item.as_str().map_or_else(|| item.to_string(), String::from)
                                })
                                .collect::<Vec<_>>()
                                .join(", "),
                            Value::String(message) => message.clone(),
                            other => other.to_string(),
                        };
                        format!("{}: {rendered}", label(field))
                    })
                    .collect();

                return anyhow!("{}", lines.join("\n"));
            }
        }
    }

    anyhow::Error::new(err)
}
