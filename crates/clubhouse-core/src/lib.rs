//! clubhouse-core - Core library for the Club House admin console
//!
//! This crate contains the backend transport, per-resource clients, state
//! controllers and table bindings used by every console front end.

pub mod auth;
pub mod config;
pub mod error;
pub mod filter;
pub mod health;
pub mod models;
pub mod notify;
pub mod resources;
pub mod sync;
pub mod table;
pub mod transport;
pub mod util;

#[cfg(test)]
mod test_support;

pub use config::ApiConfig;
pub use error::{Error, Result};
pub use transport::ApiClient;
