//! # Symbol Resolution
//!
//! Converts the raw return addresses recorded by an allocation sampler into
//! the text a flamegraph needs: function names, with every function the
//! compiler inlined at that address listed as its own frame.
//!
//! ## Output Shape
//!
//! Each address resolves to a text block in the format `addr2line -Cfpi`
//! prints, innermost frame first:
//!
//! ```text
//! seastar::memory::allocate(unsigned long) at core/memory.cc:1590
//!  (inlined by) operator new(unsigned long) at core/memory.cc:2010
//! ```
//!
//! Addresses that cannot be resolved come back as `?? ??:0`. The frame filter
//! downstream strips the locations, the `(inlined by)` markers and the `??`
//! placeholders; this module does not.
//!
//! ## Resolution Order
//!
//! 1. DWARF (`.debug_info`, `.debug_line`, ...) via `addr2line`/`gimli`,
//!    which also yields the inline chain and source locations
//! 2. The ELF symbol table, for addresses or frames DWARF doesn't name
//! 3. `??`
//!
//! Names are demangled (Rust and C++) in both cases.
//!
//! **Libraries used**:
//! - `gimli`: Low-level DWARF parser
//! - `addr2line`: High-level symbolization library built on gimli
//! - `object`: ELF binary parser
//!
//! ## Limitations
//!
//! - Addresses are looked up as-is. Dumps taken from a PIE binary must
//!   already be relative to the binary's load address.
//! - Split DWARF (`.dwo`/`.dwp`) is not followed; those frames resolve from
//!   the symbol table only.
//!
//! ## Example
//!
//! ```rust,ignore
//! let symbolizer = Symbolizer::new("/path/to/binary")?;
//! let block = symbolizer.resolve("0x4a3f10");
//! ```

pub mod resolve;
pub mod symbolizer;

pub use resolve::{Resolve, UNRESOLVED};
pub use symbolizer::{DebugInfo, InlinedFrame, ResolvedFrame, SourceLocation, Symbolizer};
