//! roster — user registration, debounced search and formatting demo
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod debounce;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
pub mod registry;
pub mod session;
pub mod utils;
