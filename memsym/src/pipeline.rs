//! Dump symbolization pipeline
//!
//! Reads records line by line, resolves every address, filters the resolver
//! text down to frame names and writes one collapsed stack per record. Each
//! record is written before the next line is read.

use log::{debug, info};
use std::io::{BufRead, Write};

use crate::domain::{Record, SymbolizeError};
use crate::export::CollapsedStackWriter;
use crate::filter::filter_frames;
use crate::symbolization::Resolve;

/// Counters for one run over a dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub records: u64,
    pub frames_emitted: u64,
    pub frames_dropped: u64,
}

/// Resolve every address of a record, in address order.
///
/// Returns the resolver blocks; frame names borrow from them, so callers
/// filter with [`filter_frames`] while the blocks are alive.
pub fn resolve_record<R: Resolve + ?Sized>(resolver: &R, record: &Record<'_>) -> Vec<String> {
    record.addresses.iter().map(|address| resolver.resolve(address)).collect()
}

/// Symbolize a whole dump from `input` into collapsed stacks on `output`.
///
/// # Errors
/// Fails on the first malformed record or I/O error. Lines already written
/// stay written.
pub fn symbolize_stream<R, I, W>(resolver: &R, input: I, output: W) -> Result<Summary, SymbolizeError>
where
    R: Resolve + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut writer = CollapsedStackWriter::new(output);
    let mut summary = Summary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let record = Record::parse(&line)
            .ok_or_else(|| SymbolizeError::MalformedRecord { line_number: idx + 1, line: line.clone() })?;

        let blocks = resolve_record(resolver, &record);
        let frames: Vec<&str> = blocks.iter().flat_map(|block| filter_frames(block)).collect();

        let raw_lines: usize = blocks.iter().map(|block| block.split('\n').count()).sum();
        summary.frames_emitted += frames.len() as u64;
        summary.frames_dropped += raw_lines.saturating_sub(frames.len()) as u64;
        summary.records += 1;

        debug!(
            "Record {}: size={} count={} addresses={} frames={}",
            idx + 1,
            record.size,
            record.count,
            record.addresses.len(),
            frames.len()
        );

        writer.write_stack(&frames, record.size)?;
    }

    writer.finish()?;

    info!(
        "Symbolized {} records ({} frames kept, {} dropped)",
        summary.records, summary.frames_emitted, summary.frames_dropped
    );

    Ok(summary)
}
