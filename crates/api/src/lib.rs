//! School content API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, seed
//! routine) so integration tests and the binary entrypoint use the same
//! construction paths.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
