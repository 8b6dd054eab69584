//! Cofactor cell positions and minor index arithmetic
//!
//! Each entry of the adjugate of a 3x3 matrix is a 2x2 minor built from the
//! two rows and two columns other than the entry's own, taken in cyclic
//! order: row `i` selects rows `(i+1) % 3` and `(i+2) % 3`, and likewise
//! for columns.

use std::fmt;

/// Order of the generated matrix (the generator is specific to 3x3)
pub const ORDER: usize = 3;

/// One cell of the generated adjugate grid
///
/// Both components are in `[0, 3)`. The column is the outer generation
/// index and the row is the inner one, matching the emitted nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
}

/// Error type for out-of-range cell positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    RowOutOfRange(usize),
    ColOutOfRange(usize),
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfRange(row) => {
                write!(f, "Row index must be less than {ORDER}, got {row}")
            }
            Self::ColOutOfRange(col) => {
                write!(f, "Column index must be less than {ORDER}, got {col}")
            }
        }
    }
}

impl std::error::Error for CellError {}

/// The four matrix indices referenced by one cofactor formula
///
/// `r1`/`r2` are the two rows other than the cell's own, cyclically offset
/// by 1 and 2; `c1`/`c2` are the analogous columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinorIndices {
    pub r1: usize,
    pub r2: usize,
    pub c1: usize,
    pub c2: usize,
}

impl Cell {
    /// Create a new cell at the given grid position
    ///
    /// # Errors
    /// Returns `CellError` if either index is 3 or greater.
    ///
    /// # Examples
    /// ```
    /// use adjugate_codegen::core::Cell;
    ///
    /// let cell = Cell::new(1, 2).unwrap();
    /// assert_eq!(cell.row(), 1);
    /// assert_eq!(cell.col(), 2);
    ///
    /// assert!(Cell::new(3, 0).is_err());
    /// ```
    pub const fn new(row: usize, col: usize) -> Result<Self, CellError> {
        if row >= ORDER {
            return Err(CellError::RowOutOfRange(row));
        }
        if col >= ORDER {
            return Err(CellError::ColOutOfRange(col));
        }
        Ok(Self { row, col })
    }

    /// Get the cell's row index (0-2)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Get the cell's column index (0-2)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Derive the four minor indices for this cell's cofactor formula
    ///
    /// # Examples
    /// ```
    /// use adjugate_codegen::core::Cell;
    ///
    /// let minor = Cell::new(0, 0).unwrap().minor();
    /// assert_eq!((minor.r1, minor.r2), (1, 2));
    /// assert_eq!((minor.c1, minor.c2), (1, 2));
    /// ```
    #[inline]
    #[must_use]
    pub const fn minor(self) -> MinorIndices {
        MinorIndices {
            r1: (self.row + 1) % ORDER,
            r2: (self.row + 2) % ORDER,
            c1: (self.col + 1) % ORDER,
            c2: (self.col + 2) % ORDER,
        }
    }

    /// Iterate all nine cells in emission order
    ///
    /// The column varies slowest, the row fastest. This preserves the
    /// original generator's nesting rather than conventional row-major
    /// order.
    pub fn generation_order() -> impl Iterator<Item = Self> {
        (0..ORDER).flat_map(|col| (0..ORDER).map(move |row| Self { row, col }))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn cell_creation_valid() {
        for row in 0..ORDER {
            for col in 0..ORDER {
                let cell = Cell::new(row, col).unwrap();
                assert_eq!(cell.row(), row);
                assert_eq!(cell.col(), col);
            }
        }
    }

    #[test]
    fn cell_creation_out_of_range() {
        assert!(matches!(Cell::new(3, 0), Err(CellError::RowOutOfRange(3))));
        assert!(matches!(Cell::new(0, 3), Err(CellError::ColOutOfRange(3))));
        assert!(matches!(
            Cell::new(7, 1),
            Err(CellError::RowOutOfRange(7))
        ));
        // Row is checked first when both are out of range
        assert!(matches!(Cell::new(5, 5), Err(CellError::RowOutOfRange(5))));
    }

    #[test]
    fn minor_modular_arithmetic() {
        for row in 0..ORDER {
            for col in 0..ORDER {
                let minor = Cell::new(row, col).unwrap().minor();
                assert_eq!(minor.r1, (row + 1) % 3);
                assert_eq!(minor.r2, (row + 2) % 3);
                assert_eq!(minor.c1, (col + 1) % 3);
                assert_eq!(minor.c2, (col + 2) % 3);
            }
        }
    }

    #[test]
    fn minor_excludes_own_row_and_column() {
        for row in 0..ORDER {
            for col in 0..ORDER {
                let minor = Cell::new(row, col).unwrap().minor();
                assert_ne!(minor.r1, row);
                assert_ne!(minor.r2, row);
                assert_ne!(minor.r1, minor.r2);
                assert_ne!(minor.c1, col);
                assert_ne!(minor.c2, col);
                assert_ne!(minor.c1, minor.c2);
            }
        }
    }

    #[test]
    fn generation_order_covers_grid() {
        let cells: Vec<Cell> = Cell::generation_order().collect();
        assert_eq!(cells.len(), 9);

        // Column varies slowest
        assert_eq!(cells[0], Cell::new(0, 0).unwrap());
        assert_eq!(cells[1], Cell::new(1, 0).unwrap());
        assert_eq!(cells[2], Cell::new(2, 0).unwrap());
        assert_eq!(cells[3], Cell::new(0, 1).unwrap());
        assert_eq!(cells[8], Cell::new(2, 2).unwrap());

        // No duplicates
        let unique: FxHashSet<Cell> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn minor_quadruples_all_distinct() {
        let quadruples: FxHashSet<(usize, usize, usize, usize)> = Cell::generation_order()
            .map(|cell| {
                let m = cell.minor();
                (m.r1, m.c1, m.r2, m.c2)
            })
            .collect();

        assert_eq!(quadruples.len(), 9);
    }

    #[test]
    fn cell_display() {
        let cell = Cell::new(2, 1).unwrap();
        assert_eq!(format!("{cell}"), "(2, 1)");
    }

    #[test]
    fn cell_error_display() {
        assert_eq!(
            CellError::RowOutOfRange(4).to_string(),
            "Row index must be less than 3, got 4"
        );
        assert_eq!(
            CellError::ColOutOfRange(9).to_string(),
            "Column index must be less than 3, got 9"
        );
    }
}
