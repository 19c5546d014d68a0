//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "memsym",
    version,
    about = "Symbolize allocation backtrace dumps into collapsed stacks for flamegraphs",
    after_help = "\
INPUT (stdin), one record per line:
    <size> <count> <addr_1> <addr_2> ... <addr_n>

OUTPUT (stdout), one line per record:
    <frame_1>;<frame_2>;...;<frame_k> <size>

EXAMPLES:
    dump_allocs | memsym ./build/release/app | flamegraph.pl - > allocs.svg
    RUST_LOG=debug memsym ./app < dump.txt > stacks.folded"
)]
pub struct Args {
    /// Binary the dumped addresses belong to (used for symbol resolution)
    #[arg(value_name = "BINARY")]
    pub binary: PathBuf,
}
