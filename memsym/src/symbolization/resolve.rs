//! Address resolution seam
//!
//! The pipeline only ever sees the text a resolver produces for an address,
//! so any source of symbol names (DWARF, a canned table in tests, an external
//! tool) can sit behind this trait.

/// Text produced for an address that could not be symbolized.
pub const UNRESOLVED: &str = "?? ??:0";

/// Maps one address token to a block of frame descriptions.
///
/// The block holds zero or more newline-separated lines, innermost inlined
/// frame first, in `addr2line -Cfpi` style:
///
/// ```text
/// inner() at src/alloc.cc:12
///  (inlined by) outer() at src/alloc.cc:40
/// ```
///
/// Failures are reported in-band as text starting with `??`, never as errors.
pub trait Resolve {
    fn resolve(&self, address: &str) -> String;
}

impl<R: Resolve + ?Sized> Resolve for &R {
    fn resolve(&self, address: &str) -> String {
        (**self).resolve(address)
    }
}
