//! # memsym - Main Entry Point
//!
//! Reads a backtrace dump from stdin and writes collapsed stacks to stdout.
//! Errors go to stderr and select the exit code.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io;

use memsym::cli::Args;
use memsym::domain::{ResolverError, SymbolizeError};
use memsym::pipeline::symbolize_stream;
use memsym::preflight::{report_debug_info, run_preflight_checks};
use memsym::symbolization::Symbolizer;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DATAERR: i32 = 65;
const EXIT_NOINPUT: i32 = 66;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(SymbolizeError::MalformedRecord { .. }) = err.downcast_ref::<SymbolizeError>() {
        EXIT_DATAERR
    } else if err.downcast_ref::<ResolverError>().is_some() {
        EXIT_NOINPUT
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    run_preflight_checks(&args.binary)?;

    info!("memsym v{}", env!("CARGO_PKG_VERSION"));
    info!("target: {}", args.binary.display());

    let symbolizer = Symbolizer::new(&args.binary).context("Failed to create symbolizer")?;
    report_debug_info(symbolizer.debug_info());

    let stdin = io::stdin().lock();
    // Line buffered, so each stack reaches the consumer as soon as it is written
    let stdout = io::stdout().lock();

    symbolize_stream(&symbolizer, stdin, stdout).context("Failed to symbolize dump")?;

    Ok(())
}
