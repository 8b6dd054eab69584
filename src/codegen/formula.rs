//! Symbolic cofactor formula rendering
//!
//! Each formula is the text of one adjugate entry, expressed against a
//! matrix named `self` and a determinant named `d` in the destination
//! program. The names are fixed: the output is meant to be pasted into an
//! `inverse` method body, not adapted to arbitrary code.

use std::fmt;

use crate::core::Cell;

/// Matrix variable name used in the generated text
pub const MATRIX_VAR: &str = "self";

/// Determinant variable name used in the generated text
pub const DET_VAR: &str = "d";

/// The cofactor formula for one cell of the adjugate grid
///
/// Renders via `Display` as
/// `(self[r1][c1] * self[r2][c2] - self[r1][c2] * self[r2][c1]) / d`
/// with the cell's minor indices substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula(Cell);

impl Formula {
    /// Create the formula for a specific cell
    #[inline]
    #[must_use]
    pub const fn for_cell(cell: Cell) -> Self {
        Self(cell)
    }

    /// Get the cell this formula belongs to
    #[inline]
    #[must_use]
    pub const fn cell(self) -> Cell {
        self.0
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0.minor();
        write!(
            f,
            "({mat}[{r1}][{c1}] * {mat}[{r2}][{c2}] - {mat}[{r1}][{c2}] * {mat}[{r2}][{c1}]) / {det}",
            mat = MATRIX_VAR,
            det = DET_VAR,
            r1 = m.r1,
            r2 = m.r2,
            c1 = m.c1,
            c2 = m.c2,
        )
    }
}

/// Iterate the formulas of all nine adjugate entries in emission order
pub fn adjugate_formulas() -> impl Iterator<Item = Formula> {
    Cell::generation_order().map(Formula::for_cell)
}
