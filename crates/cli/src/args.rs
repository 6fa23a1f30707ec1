use clap::Parser;

/// Count lines of code per file type under the current directory.
///
/// Hidden files and directories are skipped. Set `RUST_LOG=debug` to see
/// which paths could not be read.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "linetally", version, about, long_about = None)]
pub struct Args {}
