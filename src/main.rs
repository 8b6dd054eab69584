//! Adjugate Codegen - CLI
//!
//! Prints the nine symbolic cofactor formulas of a 3x3 matrix inverse as a
//! nested list literal on stdout. The output is fixed; there is nothing to
//! configure.

use std::io::{self, Write};

use adjugate_codegen::codegen::write_adjugate;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "adjugate_codegen",
    about = "Prints the symbolic cofactor formulas for a 3x3 matrix inverse",
    version,
    author
)]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_adjugate(&mut out)?;
    out.flush()?;

    Ok(())
}
