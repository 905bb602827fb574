//! Authentication call sites: login, register, logout.
//!
//! Login and register are the unauthenticated surface and bypass the
//! refresh-and-retry cycle; logout is an authenticated call and goes
//! through it. Passwords are exposed only at the request boundary.

use super::types::{ApiMessage, Profile};
use super::{ApiClient, ApiError};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";

/// Log in and let the backend set the session cookies.
pub async fn login(
    client: &mut ApiClient,
    username: &str,
    password: &SecretString,
) -> Result<ApiMessage, ApiError> {
    let body = json!({
        "username": username,
        "password": password.expose_secret(),
    });

    let value = client
        .request_once(Method::POST, LOGIN_PATH, Some(&body))
        .await?;

    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}

/// Register a new account; returns the created profile.
pub async fn register(
    client: &mut ApiClient,
    profile: &Profile,
    password: &SecretString,
) -> Result<Profile, ApiError> {
    let body = json!({
        "username": profile.username,
        "email": profile.email,
        "first_name": profile.first_name,
        "last_name": profile.last_name,
        "phone_number": profile.phone_number,
        "password": password.expose_secret(),
    });

    let value = client
        .request_once(Method::POST, REGISTER_PATH, Some(&body))
        .await?;

    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}

/// Log out; the backend expires the session cookies.
pub async fn logout(client: &mut ApiClient) -> Result<ApiMessage, ApiError> {
    let value = client.request(Method::GET, LOGOUT_PATH, None).await?;
    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}
