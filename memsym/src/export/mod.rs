//! Output formats
//!
//! This module provides the writers for symbolized stacks.
//! Currently supports the collapsed stack format read by flamegraph tools.

pub mod collapsed;

pub use collapsed::{format_collapsed, CollapsedStackWriter};
