//! # Maryema Storefront Client
//!
//! `maryema` is a client for the Maryema e-commerce REST backend: product
//! browsing and filtering, authentication (login/register/logout), profile
//! management, cart affordances, and a thin admin shell.
//!
//! ## Sessions
//!
//! The backend authenticates with `HttpOnly` cookies (`access` / `refresh`)
//! set at login. The client keeps them in a file-backed cookie store and
//! never inspects their contents. When a request comes back `401`, the
//! client performs exactly one token refresh and retries the original
//! request once; a second `401` is returned to the caller as-is.
//!
//! ## Catalog and cart
//!
//! The storefront ships its product catalog client-side. Browsing,
//! filtering, and the cart are local operations; only account data crosses
//! the network.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod cli;
pub mod forms;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
