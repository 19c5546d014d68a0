//! # memsym - Allocation Backtrace Symbolizer
//!
//! memsym turns the raw allocation backtraces dumped by a memory sampler
//! into collapsed stacks that flamegraph tools render directly.
//!
//! ## Architecture Overview
//!
//! ```text
//!  stdin                                                        stdout
//!  "4096 3 0x4a3f10 0x4a4020"                 "alloc();handler();main 4096"
//!    │                                                             ▲
//!    ▼                                                             │
//! ┌────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   Record   │──▶│  Symbolizer  │──▶│    Frame     │──▶│  Collapsed   │
//! │   Parser   │   │   (DWARF)    │   │    Filter    │   │    Writer    │
//! └────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!   domain          symbolization       filter              export
//! ```
//!
//! Every record is processed completely before the next line is read. The
//! only long-lived value is the [`symbolization::Symbolizer`], created once
//! for the target binary and passed by reference to [`pipeline::symbolize_stream`].
//!
//! ## Module Structure
//!
//! - [`domain`]: Dump records, addresses and error types
//! - [`symbolization`]: The [`symbolization::Resolve`] seam and its DWARF-backed implementation
//! - [`filter`]: Reduces resolver text to clean frame names
//! - [`export`]: Collapsed stack formatting
//! - [`pipeline`]: Wires the stages together over any reader/writer pair
//! - [`preflight`]: Target binary checks run before symbols are loaded
//! - [`cli`]: Command-line argument parsing
//!
//! ## Typical Usage
//!
//! ```bash
//! dump_allocs | memsym ./build/release/app | flamegraph.pl - > allocs.svg
//! ```

pub mod cli;
pub mod domain;
pub mod export;
pub mod filter;
pub mod pipeline;
pub mod preflight;
pub mod symbolization;
