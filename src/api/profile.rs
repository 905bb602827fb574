//! Profile call sites: fetch, update, delete, change password.
//!
//! All four run through the retry-once wrapper, so an expired access
//! cookie costs one refresh round-trip instead of a failed user action.

use super::types::{ApiMessage, Profile};
use super::{ApiClient, ApiError};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

pub const PROFILE_PATH: &str = "/api/profile/";
pub const CHANGE_PASSWORD_PATH: &str = "/api/profile/change-password/";

pub async fn fetch(client: &mut ApiClient) -> Result<Profile, ApiError> {
    let value = client.request(Method::GET, PROFILE_PATH, None).await?;
    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}

/// Replace the profile wholesale; returns the record as the backend saved it.
pub async fn update(client: &mut ApiClient, profile: &Profile) -> Result<Profile, ApiError> {
    let body = serde_json::to_value(profile).map_err(|err| ApiError::Parse(err.to_string()))?;

    let value = client
        .request(Method::PUT, PROFILE_PATH, Some(&body))
        .await?;

    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}

/// Delete the account; the body carries the password confirmation.
pub async fn delete(
    client: &mut ApiClient,
    password: &SecretString,
) -> Result<ApiMessage, ApiError> {
    let body = json!({ "password": password.expose_secret() });

    let value = client
        .request(Method::DELETE, PROFILE_PATH, Some(&body))
        .await?;

    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}

/// Change the account password. Credentials are transient; nothing is
/// persisted client-side.
pub async fn change_password(
    client: &mut ApiClient,
    old_password: &SecretString,
    new_password: &SecretString,
) -> Result<ApiMessage, ApiError> {
    let body = json!({
        "old_password": old_password.expose_secret(),
        "new_password": new_password.expose_secret(),
    });

    let value = client
        .request(Method::PUT, CHANGE_PASSWORD_PATH, Some(&body))
        .await?;

    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}
