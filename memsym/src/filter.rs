//! Frame filtering for resolver output.
//!
//! A resolver block for one address looks like:
//!
//! ```text
//! seastar::memory::get_backtrace() at core/memory.cc:1301
//!  (inlined by) seastar::memory::allocate(unsigned long) at core/memory.cc:1590
//! ?? ??:0
//! ```
//!
//! Only the function names survive: source locations are cut off, the inline
//! marker is removed, and frames that say nothing about who allocated (the
//! sampler's own backtrace capture, functor trampolines, unresolved `??`)
//! are dropped. Frame order is never changed.

/// Start of the source location suffix in a resolved line
const LOCATION_MARKER: &str = " at ";

/// Prefix the resolver puts on frames an address was inlined into
const INLINED_BY_PREFIX: &str = "(inlined by) ";

/// Placeholder for a function or location the resolver could not name
const UNRESOLVED_MARKER: &str = "??";

// =============================================================================
// NOISE TABLES
// =============================================================================

/// Frames dropped when their name contains one of these
const NOISE_SUBSTRINGS: &[&str] = &[
    // Task-local backtrace capture inside the memory sampler
    "current_backtrace_tasklocal",
];

/// Frames dropped when their name is exactly one of these
const NOISE_SYMBOLS: &[&str] = &[
    // Allocator entry into backtrace capture
    "seastar::memory::get_backtrace()",
    // Lambda call operator, carries no caller information
    "operator()",
];

/// Clean one resolver block into the frame names worth keeping.
///
/// The returned slices borrow from `block`, in the order the resolver
/// emitted them (innermost inlined frame first).
#[must_use]
pub fn filter_frames(block: &str) -> Vec<&str> {
    block.split('\n').filter_map(filter_frame).collect()
}

/// Clean a single resolver line, or `None` if it should be dropped.
#[must_use]
pub fn filter_frame(line: &str) -> Option<&str> {
    let line = strip_location(line).trim();

    if line.is_empty() || line.starts_with(UNRESOLVED_MARKER) {
        return None;
    }

    let line = line.strip_prefix(INLINED_BY_PREFIX).unwrap_or(line);

    // `(inlined by) ?? at ??:0`
    if line.starts_with(UNRESOLVED_MARKER) {
        return None;
    }

    if is_noise(line) {
        return None;
    }

    Some(line)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Cut the line at the first ` at ` marker, if any.
fn strip_location(line: &str) -> &str {
    line.find(LOCATION_MARKER).map_or(line, |idx| &line[..idx])
}

/// Check whether a cleaned frame name is a known uninformative frame.
fn is_noise(frame: &str) -> bool {
    NOISE_SUBSTRINGS.iter().any(|pattern| frame.contains(pattern))
        || NOISE_SYMBOLS.contains(&frame)
}
