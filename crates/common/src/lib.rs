//! Shared utilities, configuration, and error handling for Markdown Ninja
//!
//! This crate provides common functionality used across the Markdown Ninja webapp:
//! - Configuration snapshot built from the environment and serving location
//! - SHA-512 hashing to lowercase hex
//! - Country code lookup
//! - Error types and handling

pub mod config;
pub mod countries;
pub mod crypto;
pub mod error;

pub use config::{Config, ConfigState, Location};
pub use countries::{country_name, Country, CountryBlocklist, CountryIndex, UNKNOWN_COUNTRY};
pub use crypto::{hash_sha512, hash_sha512_str, sha512_hex};
pub use error::{Error, Result};
