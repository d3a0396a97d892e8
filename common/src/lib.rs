//! Shared value types and inputs for DUID derivation.
//!
//! Everything here is a plain value: MAC addresses, 128-bit identifiers,
//! the colon-hex rendering used for every DUID, and the single place the
//! host identity is read from disk.

pub mod config;
pub mod error;
pub mod identity;
pub mod machine_id;
pub mod network;
pub mod utils;

pub use error::IdentityError;
