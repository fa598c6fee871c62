//! Vendly Shared Types and Utilities
//!
//! This crate contains tenant types and validation shared across the Vendly platform.

pub mod error;
pub mod tenant;

pub use error::*;
pub use tenant::*;
