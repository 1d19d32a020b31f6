//! Shared types used across all modules.
//!
//! Defines the user record kept by the registry and the amount type
//! accepted by the currency formatter. Other modules import from here
//! rather than reaching into each other's internals.

pub mod amount;
pub mod user;

pub use amount::Amount;
pub use user::UserRecord;
