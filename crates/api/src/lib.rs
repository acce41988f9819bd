//! Catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, auth, routes,
//! GraphQL schema) so integration tests and the binary entrypoint share them.

pub mod app;
pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
