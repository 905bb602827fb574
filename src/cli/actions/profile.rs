//! Profile handlers: show, update, delete, and password change.

use crate::api::profile;
use crate::cli::actions::api_error;
use crate::cli::globals::GlobalArgs;
use crate::forms::{self, label, ProfileEdits};
use anyhow::Result;
use secrecy::SecretString;

/// Fetch and print the current profile.
///
/// # Errors
/// Returns an error when the session is invalid or the backend unreachable.
pub async fn show(globals: &GlobalArgs) -> Result<()> {
    let mut client = globals.api_client()?;

    let result = profile::fetch(&mut client).await;
    client.persist_session()?;
    let record = result.map_err(api_error)?;

    println!("{}: {}", label("username"), record.username);
    println!("{}: {}", label("first_name"), record.first_name);
    println!("{}: {}", label("last_name"), record.last_name);
    println!("{}: {}", label("email"), record.email);
    println!("{}: {}", label("phone_number"), record.phone_number);

    Ok(())
}

/// Apply edits on top of the last-fetched profile and push the result.
/// An update that changes nothing is rejected before any write reaches
/// the backend.
///
/// # Errors
/// Returns an error for a no-op update, a malformed edit, or a backend
/// rejection.
pub async fn update(globals: &GlobalArgs, edits: &ProfileEdits) -> Result<()> {
    let mut client = globals.api_client()?;

    let fetched = profile::fetch(&mut client).await;
    client.persist_session()?;
    let initial = fetched.map_err(api_error)?;

    let candidate = edits.reconcile(&initial)?;

    let result = profile::update(&mut client, &candidate).await;
    client.persist_session()?;
    let updated = result.map_err(api_error)?;

    println!("Profile updated for {}.", updated.username);

    Ok(())
}

/// Delete the account; the stored session is dropped on success.
///
/// # Errors
/// Returns an error when the password is wrong or the backend unreachable.
pub async fn delete(globals: &GlobalArgs, password: &SecretString) -> Result<()> {
    let mut client = globals.api_client()?;

    let result = profile::delete(&mut client, password).await;
    if result.is_ok() {
        client.session_mut().clear();
    }
    client.persist_session()?;

    let message = result.map_err(api_error)?;
    println!("{}", message.details);

    Ok(())
}

/// Change the password. Mismatched new/confirm values are rejected before
/// any network call.
///
/// # Errors
/// Returns an error for a local validation failure or a backend rejection.
pub async fn change_password(
    globals: &GlobalArgs,
    old_password: &SecretString,
    new_password: &SecretString,
    confirm_password: &SecretString,
) -> Result<()> {
    forms::validate_password_change(old_password, new_password, confirm_password)?;

    let mut client = globals.api_client()?;

    let result = profile::change_password(&mut client, old_password, new_password).await;
    client.persist_session()?;

    let message = result.map_err(api_error)?;
    println!("{}", message.details);

    Ok(())
}
