// String formatting intentionally uses format! for clarity
#![allow(clippy::format_push_string)]

use addr2line::Context;
use gimli::{EndianRcSlice, RunTimeEndian};
use log::{debug, info};
use object::{Object, ObjectSection, ObjectSymbol, SymbolKind};
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use super::resolve::{Resolve, UNRESOLVED};
use crate::domain::{Address, ResolverError};

/// Symbolizer for resolving instruction addresses against one binary
///
/// DWARF supplies function names, inline chains and source locations. The
/// symbol table fills in function names DWARF doesn't cover. Resolved blocks
/// are cached since allocation dumps repeat the same addresses on many lines.
pub struct Symbolizer {
    ctx: Context<EndianRcSlice<RunTimeEndian>>,
    /// Defined text symbols sorted by start address
    symbols: Vec<TextSymbol>,
    /// Cache of rendered blocks by address
    cache: RefCell<HashMap<Address, String>>,
    debug_info: DebugInfo,
}

/// How much symbol information a binary carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugInfo {
    /// DWARF present: names, inline chains and locations
    Full,
    /// Symbol table only: outermost function names, no inlining
    SymbolsOnly,
    /// Neither: nothing resolves
    Stripped,
}

#[derive(Debug, Clone)]
struct TextSymbol {
    start: u64,
    size: u64,
    name: String,
}

impl Symbolizer {
    /// Create a new symbolizer for the given binary
    ///
    /// A binary without debug info is accepted; lookups then fall back to
    /// the symbol table.
    ///
    /// # Errors
    /// Returns an error if the binary cannot be read, is not an object file,
    /// or carries DWARF that gimli refuses to load
    pub fn new<P: AsRef<Path>>(binary_path: P) -> Result<Self, ResolverError> {
        let path = binary_path.as_ref();
        let binary_data = fs::read(path).map_err(|source| ResolverError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let obj_file = object::File::parse(&*binary_data).map_err(|source| {
            ResolverError::ParseFailed { path: path.display().to_string(), source }
        })?;

        // Load DWARF debug info
        let endian =
            if obj_file.is_little_endian() { RunTimeEndian::Little } else { RunTimeEndian::Big };

        let load_section =
            |id: gimli::SectionId| -> Result<EndianRcSlice<RunTimeEndian>, gimli::Error> {
                let data = obj_file
                    .section_by_name(id.name())
                    .and_then(|section| section.uncompressed_data().ok())
                    .unwrap_or(Cow::Borrowed(&[][..]));
                Ok(EndianRcSlice::new(Rc::from(&*data), endian))
            };

        let dwarf = gimli::Dwarf::load(&load_section)?;
        let ctx = Context::from_dwarf(dwarf)?;

        let symbols = collect_text_symbols(&obj_file);
        let debug_info = debug_info_status(&obj_file);
        info!(
            "Loaded {} ({:?}, {:?}, {} text symbols)",
            path.display(),
            obj_file.format(),
            debug_info,
            symbols.len()
        );

        Ok(Self { ctx, symbols, cache: RefCell::new(HashMap::new()), debug_info })
    }

    /// Debug info found in the binary when it was loaded
    #[must_use]
    pub fn debug_info(&self) -> DebugInfo {
        self.debug_info
    }

    /// Resolve an address to its frame chain
    ///
    /// The first frame is the innermost inlined function; later frames are
    /// the functions it was inlined into.
    #[must_use]
    pub fn lookup(&self, addr: Address) -> ResolvedFrame {
        let mut frames = Vec::new();

        if let Ok(mut frame_iter) = self.ctx.find_frames(addr.0).skip_all_loads() {
            while let Ok(Some(frame)) = frame_iter.next() {
                let function = frame
                    .function
                    .and_then(|f| f.demangle().ok().map(|s| s.to_string()))
                    .or_else(|| self.symbol_name(addr.0))
                    .unwrap_or_else(|| "??".to_string());

                let location = frame.location.map(|loc| SourceLocation {
                    file: loc.file.map(std::string::ToString::to_string),
                    line: loc.line,
                    column: loc.column,
                });

                frames.push(InlinedFrame { function, location });
            }
        }

        if frames.is_empty() {
            if let Some(function) = self.symbol_name(addr.0) {
                frames.push(InlinedFrame { function, location: None });
            }
        }

        ResolvedFrame { addr, frames }
    }

    /// Name of the text symbol whose range covers `addr`, demangled
    fn symbol_name(&self, addr: u64) -> Option<String> {
        let idx = self.symbols.partition_point(|sym| sym.start <= addr);
        let nearest_start = self.symbols[..idx].last()?.start;
        // Aliases share a start address but may differ in size
        self.symbols[..idx]
            .iter()
            .rev()
            .take_while(|sym| sym.start == nearest_start)
            .find(|sym| addr - sym.start < sym.size)
            .map(|sym| addr2line::demangle_auto(Cow::Borrowed(sym.name.as_str()), None).into_owned())
    }
}

impl Resolve for Symbolizer {
    fn resolve(&self, address: &str) -> String {
        let Some(addr) = Address::parse(address) else {
            debug!("Address token {address:?} is not hexadecimal, leaving unresolved");
            return UNRESOLVED.to_string();
        };

        if let Some(cached) = self.cache.borrow().get(&addr) {
            return cached.clone();
        }

        let block = self.lookup(addr).render();
        debug!("{addr} -> {block:?}");
        self.cache.borrow_mut().insert(addr, block.clone());
        block
    }
}

fn debug_info_status(obj_file: &object::File<'_>) -> DebugInfo {
    // Check for .debug_info section (DWARF debug info)
    let has_debug_info = obj_file.section_by_name(".debug_info").is_some_and(|s| s.size() > 0);

    // Check for .symtab (symbol table - present in non-stripped binaries)
    let has_symtab = obj_file.section_by_name(".symtab").is_some_and(|s| s.size() > 0);

    match (has_debug_info, has_symtab) {
        (true, _) => DebugInfo::Full,
        (false, true) => DebugInfo::SymbolsOnly,
        (false, false) => DebugInfo::Stripped,
    }
}

fn collect_text_symbols(obj_file: &object::File<'_>) -> Vec<TextSymbol> {
    let mut symbols: Vec<TextSymbol> = obj_file
        .symbols()
        .filter(|sym| sym.kind() == SymbolKind::Text && sym.is_definition() && sym.size() > 0)
        .filter_map(|sym| {
            let name = sym.name().ok()?;
            Some(TextSymbol { start: sym.address(), size: sym.size(), name: name.to_string() })
        })
        .collect();
    symbols.sort_by_key(|sym| sym.start);
    symbols
}

/// A resolved address (may contain multiple inlined frames)
#[derive(Debug, Clone)]
pub struct ResolvedFrame {
    pub addr: Address,
    pub frames: Vec<InlinedFrame>,
}

/// An inlined frame within a resolved frame
#[derive(Debug, Clone)]
pub struct InlinedFrame {
    pub function: String,
    pub location: Option<SourceLocation>,
}

/// Source code location
#[derive(Debug, Clone)]
pub struct SourceLocation {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl ResolvedFrame {
    /// Render the frame chain the way `addr2line -Cfpi` prints it
    #[must_use]
    pub fn render(&self) -> String {
        if self.frames.is_empty() {
            return UNRESOLVED.to_string();
        }

        let mut output = String::new();

        for (idx, inlined) in self.frames.iter().enumerate() {
            if idx > 0 {
                output.push_str("\n (inlined by) ");
            }

            let (file, line) = match inlined.location {
                Some(ref loc) => (
                    loc.file.as_deref().unwrap_or("??"),
                    loc.line.map_or_else(|| "?".to_string(), |l| l.to_string()),
                ),
                None => ("??", "?".to_string()),
            };

            output.push_str(&format!("{} at {}:{}", inlined.function, file, line));
        }

        output
    }
}
