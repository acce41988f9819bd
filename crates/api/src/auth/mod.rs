//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token issuing and validation (issuer, audience,
//!   lifetime, signature).

pub mod jwt;
