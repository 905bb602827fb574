//! Login, registration, and logout handlers.

use crate::api::{auth, types::Profile};
use crate::cli::actions::api_error;
use crate::cli::globals::GlobalArgs;
use crate::forms;
use anyhow::Result;
use secrecy::SecretString;
use tracing::info;

/// Log in and persist the session cookies the backend sets.
///
/// # Errors
/// Returns an error on bad credentials or an unreachable backend.
pub async fn login(globals: &GlobalArgs, username: &str, password: &SecretString) -> Result<()> {
    let mut client = globals.api_client()?;

    let result = auth::login(&mut client, username, password).await;
    client.persist_session()?;

    let message = result.map_err(api_error)?;
    info!("logged in as {username}");
    println!("{}", message.details);

    Ok(())
}

/// Create an account after local validation.
///
/// # Errors
/// Returns an error when local validation or the backend rejects the form.
pub async fn register(
    globals: &GlobalArgs,
    profile: &Profile,
    password: &SecretString,
    confirm_password: &SecretString,
) -> Result<()> {
    forms::validate_registration(profile, password, confirm_password)?;

    let mut client = globals.api_client()?;
    let created = auth::register(&mut client, profile, password)
        .await
        .map_err(api_error)?;

    println!("Account {} created, you can now log in.", created.username);

    Ok(())
}

/// Log out and drop the stored session.
///
/// # Errors
/// Returns an error when the backend rejects the request.
pub async fn logout(globals: &GlobalArgs) -> Result<()> {
    let mut client = globals.api_client()?;

    let result = auth::logout(&mut client).await;

    // The backend expires its cookies on success; clear the rest locally.
    if result.is_ok() {
        client.session_mut().clear();
    }
    client.persist_session()?;

    let message = result.map_err(api_error)?;
    println!("{}", message.details);

    Ok(())
}
