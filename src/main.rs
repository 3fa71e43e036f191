//! The minic compiler CLI.
//!
//! This binary takes a minic program as its single command-line argument,
//! compiles it, and writes the resulting x86-64 assembly to stdout. Any
//! compile error is rendered on stderr and the process exits nonzero.

use clap::Parser;
use minic::driver;

mod diagnostics;

/// Command-line interface for the minic compiler.
#[derive(Parser)]
#[command(name = "minic")]
#[command(about = "Compile a tiny C-like program to x86-64 assembly", long_about = None)]
struct Cli {
    /// The program text to compile, e.g. '{ return 42; }'.
    source: String,
}

/// Entry point for the minic compiler.
fn main() {
    let cli = Cli::parse();

    match driver::compile(&cli.source) {
        Ok(assembly) => print!("{}", assembly),
        Err(error) => {
            diagnostics::report_error(&cli.source, &error);
            std::process::exit(1);
        }
    }
}
