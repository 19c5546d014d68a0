//! Domain model for memsym
//!
//! This module contains core domain types and errors that provide:
//! - Borrowed, parse-once views of dump records
//! - Structured error handling

pub mod errors;
pub mod types;

pub use types::{Address, Record};

pub use errors::{ResolverError, SymbolizeError};
