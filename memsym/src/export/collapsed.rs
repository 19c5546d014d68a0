//! Collapsed stack output
//!
//! Format: `frame_1;frame_2;...;frame_k <size>`, one line per dump record.
//! This is what `flamegraph.pl` and inferno's `flamegraph` read.

use std::io::{self, Write};

/// Separator between frames in a collapsed stack
const FRAME_SEPARATOR: &str = ";";

/// Render one collapsed stack line without the line terminator.
///
/// An empty frame list is not special-cased: the result is ` <size>`.
#[must_use]
pub fn format_collapsed(frames: &[&str], size: &str) -> String {
    format!("{} {}", frames.join(FRAME_SEPARATOR), size)
}

/// Writes collapsed stacks, one per record, to an underlying writer
pub struct CollapsedStackWriter<W: Write> {
    writer: W,
    lines_written: u64,
}

impl<W: Write> CollapsedStackWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines_written: 0 }
    }

    /// Write one stack line
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails
    pub fn write_stack(&mut self, frames: &[&str], size: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", format_collapsed(frames, size))?;
        self.lines_written += 1;
        Ok(())
    }

    #[must_use]
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush and hand back the underlying writer
    ///
    /// # Errors
    /// Returns an error if flushing fails
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
