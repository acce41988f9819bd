//! Request extractors guarding the API.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.

pub mod auth;
