//! Typed client for the WaniKani v2 API.
//!
//! Every response is checked against the shape declared for its endpoint before it is
//! handed back; anything unexpected is an [`Error::Validation`] rather than a partially
//! filled value.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod query;
pub mod schema;
mod wanikani;

#[cfg(test)]
mod fixtures;

pub use credentials::{watch_current_user, CredentialStore, CurrentUser, Token};
pub use error::{Error, Result, ValidationError};
pub use schema::{Collection, Pages, Resource};
pub use wanikani::{WaniKaniAPIClient, DEFAULT_BASE_URL};
