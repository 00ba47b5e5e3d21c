//! Pazarin session relay server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! route gate) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
