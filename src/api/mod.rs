//! HTTP client core for the Maryema backend.
//!
//! All account traffic funnels through [`ApiClient::request`]: JSON headers,
//! session cookies, and the single refresh-and-retry cycle on `401`. The
//! wrapper never loops; a persistently invalid session surfaces as the
//! original `401` error after at most one refresh attempt.

pub mod admin;
pub mod auth;
pub mod error;
pub mod profile;
pub mod types;

pub use error::ApiError;

use crate::session::SessionStore;
use crate::APP_USER_AGENT;
use anyhow::{anyhow, Result};
use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Token refresh endpoint; rotates the `access` cookie.
pub const REFRESH_PATH: &str = "/api/token/refresh/";

/// Normalize a base URL to `scheme://host:port`, filling in default ports.
///
/// # Errors
/// Returns an error if `url` cannot be parsed, has no host, or uses a
/// scheme other than http/https.
pub fn base_url(url: &str) -> Result<String> {
    let url = Url::parse(url)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {scheme}")),
        },
    };

    Ok(format!("{scheme}://{host}:{port}"))
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Build a client for `url`, carrying `session` cookies on every call.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// constructed.
    pub fn new(url: &str, session: SessionStore) -> Result<Self> {
        let http = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: base_url(url)?,
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// Persist the session cookies to their backing file.
    ///
    /// # Errors
    /// Returns an error if the session file cannot be written.
    pub fn persist_session(&self) -> Result<()> {
        self.session.save()
    }

    /// Issue an authenticated request with the retry-once policy.
    ///
    /// On `401`, performs one token refresh; if the refresh succeeds (2xx)
    /// the original request is reissued exactly once with identical method
    /// and body, and that outcome is returned, success or failure. Any
    /// other non-2xx returns the parsed JSON error body.
    pub async fn request(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.base_url);

        let mut response = self.send(method.clone(), &url, body).await?;

        if response.status().as_u16() == 401 {
            debug!("401 from {url}, refreshing session token");
            if self.refresh_session().await {
                response = self.send(method, &url, body).await?;
            }
        }

        Self::into_json(response).await
    }

    /// Issue a request without the refresh-and-retry cycle, for the
    /// unauthenticated surface (login, register).
    pub async fn request_once(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.send(method, &url, body).await?;
        Self::into_json(response).await
    }

    /// One refresh attempt. Returns whether the session was renewed; a
    /// failed or unreachable refresh leaves the original `401` standing.
    async fn refresh_session(&mut self) -> bool {
        let url = format!("{}{REFRESH_PATH}", self.base_url);

        match self.send(Method::POST, &url, None).await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!("token refresh rejected: HTTP {}", response.status());
                false
            }
            Err(err) => {
                warn!("token refresh unreachable: {err}");
                false
            }
        }
    }

    async fn send(
        &mut self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let mutating = matches!(method, Method::POST | Method::PUT | Method::DELETE);

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(cookies) = self.session.cookie_header() {
            request = request.header(COOKIE, cookies);
        }

        if mutating {
            if let Some(token) = self.session.csrf_token() {
                request = request.header("X-CSRFToken", token.to_string());
            }
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        self.capture_cookies(&response);

        Ok(response)
    }

    /// Fold every `Set-Cookie` from the response into the session store.
    fn capture_cookies(&mut self, response: &Response) {
        for header in response.headers().get_all(SET_COOKIE) {
            if let Ok(raw) = header.to_str() {
                self.session.apply_set_cookie(raw);
            }
        }
    }

    async fn into_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let payload = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if status.is_success() {
            Ok(payload)
        } else {
            Err(ApiError::Api {
                status: status.as_u16(),
                details: payload,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_http_port() -> Result<()> {
        let url = base_url("http://example.com")?;
        assert_eq!(url, "http://example.com:80");
        Ok(())
    }

    #[test]
    fn base_url_defaults_https_port() -> Result<()> {
        let url = base_url("https://example.com")?;
        assert_eq!(url, "https://example.com:443");
        Ok(())
    }

    #[test]
    fn base_url_keeps_explicit_port() -> Result<()> {
        let url = base_url("http://127.0.0.1:8000")?;
        assert_eq!(url, "http://127.0.0.1:8000");
        Ok(())
    }

    #[test]
    fn base_url_rejects_unsupported_scheme() {
        let err = base_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn base_url_rejects_missing_host() {
        assert!(base_url("http://").is_err());
    }
}
