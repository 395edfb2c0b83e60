//! Runtime row state.

use crate::schema::{RowSpec, row_span};

/// One horizontal stripe of the stack.
///
/// `length` never changes after construction; only `offset` moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// Number of lit pixels.
    pub length: u32,
    /// Horizontal displacement of the midpoint from the canvas center.
    pub offset: i32,
}

impl Row {
    pub fn new(length: u32, offset: i32) -> Self {
        Self { length, offset }
    }

    /// Column of the row's midpoint.
    #[inline]
    pub fn midpoint(&self, width: i32) -> i32 {
        width / 2 + self.offset
    }

    /// First lit column.
    #[inline]
    pub fn left(&self, width: i32) -> i32 {
        row_span(width, self.length, self.offset).0
    }

    /// One past the last lit column.
    #[inline]
    pub fn right(&self, width: i32) -> i32 {
        row_span(width, self.length, self.offset).1
    }

    /// Whether the whole span lies inside `[0, width)`.
    #[inline]
    pub fn fits(&self, width: i32) -> bool {
        let (left, right) = row_span(width, self.length, self.offset);
        left >= 0 && right <= width
    }

    /// Copy of this row shifted by `distance` columns.
    #[inline]
    pub fn shifted(&self, distance: i32) -> Self {
        Self {
            length: self.length,
            offset: self.offset + distance,
        }
    }
}

impl From<&RowSpec> for Row {
    fn from(spec: &RowSpec) -> Self {
        Self::new(spec.length, spec.offset)
    }
}

/// Whether every pair of vertically adjacent rows is within one column.
pub fn rows_aligned(rows: &[Row]) -> bool {
    rows.windows(2)
        .all(|pair| (pair[0].offset - pair[1].offset).abs() <= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_geometry() {
        let row = Row::new(6, 0);
        assert_eq!(row.midpoint(8), 4);
        assert_eq!(row.left(8), 1);
        assert_eq!(row.right(8), 7);
        assert!(row.fits(8));
    }

    #[test]
    fn test_shifted_row_bounds() {
        let row = Row::new(6, 0);
        assert!(row.shifted(-1).fits(8));
        assert!(row.shifted(1).fits(8));
        assert!(!row.shifted(-2).fits(8));
        assert!(!row.shifted(2).fits(8));
        assert_eq!(row.shifted(1).length, 6);
    }

    #[test]
    fn test_rows_aligned() {
        let rows = [Row::new(3, 0), Row::new(2, 1), Row::new(1, 0)];
        assert!(rows_aligned(&rows));

        let rows = [Row::new(3, 0), Row::new(2, 2)];
        assert!(!rows_aligned(&rows));

        assert!(rows_aligned(&[]));
    }
}
