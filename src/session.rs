//! File-backed cookie store for backend sessions.
//!
//! The backend sets `HttpOnly` cookies (`access`, `refresh`, and Django's
//! `csrftoken`) at login and rotates `access` on token refresh. This store
//! plays the browser's part between CLI invocations: it folds `Set-Cookie`
//! response headers into a name/value map, persists the map as JSON, and
//! produces the `Cookie` request header. Cookie values are opaque; they are
//! never decoded or inspected.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    cookies: BTreeMap<String, String>,
}

impl SessionStore {
    /// A store with no backing file, used by tests and one-shot calls.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store from `path`. A missing file yields an empty session.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let cookies = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read session file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse session file {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            cookies,
        })
    }

    /// Persist the store to its backing file, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written. In-memory stores are
    /// a no-op.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create session directory {}", parent.display())
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.cookies)?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write session file {}", path.display()))
    }

    /// Fold one `Set-Cookie` header into the store.
    ///
    /// Only the leading `name=value` pair matters; attributes are ignored
    /// except for deletions (empty value or `Max-Age=0`), which remove the
    /// cookie the way a browser would.
    pub fn apply_set_cookie(&mut self, header: &str) {
        let mut segments = header.split(';');
        let Some(pair) = segments.next() else {
            return;
        };
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };

        let name = name.trim();
        let value = value.trim().trim_matches('"');
        if name.is_empty() {
            return;
        }

        let expired = segments.any(|attr| {
            let attr = attr.trim().to_ascii_lowercase();
            attr == "max-age=0"
        });

        if value.is_empty() || expired {
            debug!("removing cookie {name}");
            self.cookies.remove(name);
        } else {
            debug!("storing cookie {name}");
            self.cookies.insert(name.to_string(), value.to_string());
        }
    }

    /// Render the `Cookie` request header, or `None` when no session exists.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }

        Some(
            self.cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Django's CSRF token cookie, attached as `X-CSRFToken` on mutations.
    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.cookies.get("csrftoken").map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Drop all cookies, e.g. after logout.
    pub fn clear(&mut self) {
        self.cookies.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_leading_name_value_pair() {
        let mut store = SessionStore::in_memory();
        store.apply_set_cookie("access=abc123; Path=/; HttpOnly; SameSite=Strict");
        store.apply_set_cookie("refresh=def456; Path=/; Max-Age=86400; HttpOnly");

        assert_eq!(
            store.cookie_header().as_deref(),
            Some("access=abc123; refresh=def456")
        );
    }

    #[test]
    fn deletion_removes_cookie() {
        let mut store = SessionStore::in_memory();
        store.apply_set_cookie("access=abc123; Path=/");
        store.apply_set_cookie("access=\"\"; Max-Age=0; Path=/");

        assert!(store.is_empty());
        assert_eq!(store.cookie_header(), None);
    }

    #[test]
    fn max_age_zero_removes_even_with_value() {
        let mut store = SessionStore::in_memory();
        store.apply_set_cookie("refresh=def456; Path=/");
        store.apply_set_cookie("refresh=def456; Max-Age=0; Path=/");

        assert!(store.is_empty());
    }

    #[test]
    fn csrf_token_is_exposed() {
        let mut store = SessionStore::in_memory();
        store.apply_set_cookie("csrftoken=token-xyz; Path=/");

        assert_eq!(store.csrf_token(), Some("token-xyz"));
    }

    #[test]
    fn malformed_headers_are_ignored() {
        let mut store = SessionStore::in_memory();
        store.apply_set_cookie("no-equals-sign");
        store.apply_set_cookie("=orphan-value");

        assert!(store.is_empty());
    }

    #[test]
    fn roundtrips_through_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");

        let mut store = SessionStore::load(&path)?;
        assert!(store.is_empty());

        store.apply_set_cookie("access=abc123; Path=/");
        store.save()?;

        let reloaded = SessionStore::load(&path)?;
        assert_eq!(reloaded.cookie_header().as_deref(), Some("access=abc123"));
        Ok(())
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = SessionStore::in_memory();
        store.apply_set_cookie("access=abc123");
        store.clear();

        assert!(store.is_empty());
    }
}
