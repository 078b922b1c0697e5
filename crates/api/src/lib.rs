//! acmon API server library.
//!
//! Exposes the building blocks (config, state, sessions, error
//! handling, routes, router) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod sessions;
pub mod state;
