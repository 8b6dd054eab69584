//! Nested-list block emission
//!
//! Writes the nine cofactor formulas wrapped in bracket punctuation so the
//! block reads as a nested list-of-lists literal. The nesting order is the
//! original generator's: the outer bracket groups share a column, not a
//! row, and that transposition is preserved deliberately.

use std::io::{self, Write};

use crate::codegen::Formula;
use crate::core::{Cell, ORDER};

/// Write the complete adjugate block to the given sink
///
/// The output is fixed: an opening `[` line, three row blocks (each an
/// opening `[` line, three formulas inline separated by `, `, and a
/// closing `],` line), and a final `]` line.
///
/// # Errors
/// Returns any `io::Error` raised by the sink. Nothing is retried; a
/// partial block may have been written when this fails.
///
/// # Panics
/// Will not panic - the `expect()` call is guaranteed safe by the loop
/// bounds.
pub fn write_adjugate<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "[")?;
    for col in 0..ORDER {
        writeln!(out, "[")?;
        for row in 0..ORDER {
            let cell = Cell::new(row, col).expect("loop bounds keep indices in range");
            write!(out, "{}, ", Formula::for_cell(cell))?;
        }
        writeln!(out, "],")?;
    }
    writeln!(out, "]")?;
    Ok(())
}

/// Render the complete adjugate block into a `String`
///
/// Infallible convenience over [`write_adjugate`] for tests and callers
/// that embed the block rather than streaming it.
///
/// # Examples
/// ```
/// use adjugate_codegen::codegen::render_adjugate;
///
/// let block = render_adjugate();
/// assert!(block.starts_with("[\n"));
/// assert!(block.ends_with("]\n"));
/// ```
///
/// # Panics
/// Will not panic - writing to a `Vec` cannot fail and the emitter
/// produces ASCII only.
#[must_use]
pub fn render_adjugate() -> String {
    let mut buf = Vec::new();
    write_adjugate(&mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("emitter produces ASCII only")
}
