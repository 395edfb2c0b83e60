//! Row stack definitions for the initial state of the animation.

use serde::{Deserialize, Serialize};

/// Initial definition of one horizontal bar in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpec {
    /// Number of lit pixels in the row. Fixed for the whole run.
    pub length: u32,
    /// Starting horizontal displacement from the canvas center.
    #[serde(default)]
    pub offset: i32,
}

impl RowSpec {
    /// Centered row of the given length.
    pub const fn centered(length: u32) -> Self {
        Self { length, offset: 0 }
    }
}

/// The tornado funnel: wide at the top, tapering to a single pixel.
pub fn tornado_rows() -> Vec<RowSpec> {
    [6, 6, 5, 5, 4, 3, 2, 1]
        .into_iter()
        .map(RowSpec::centered)
        .collect()
}

/// Half-open column span `[left, right)` of a row on a canvas of `width`.
///
/// The row's midpoint sits at `width / 2 + offset`; the span starts
/// `length / 2` columns left of it.
#[inline]
pub fn row_span(width: i32, length: u32, offset: i32) -> (i32, i32) {
    let midpoint = width / 2 + offset;
    let left = midpoint - (length / 2) as i32;
    (left, left + length as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tornado_rows() {
        let rows = tornado_rows();
        let lengths: Vec<u32> = rows.iter().map(|r| r.length).collect();
        assert_eq!(lengths, vec![6, 6, 5, 5, 4, 3, 2, 1]);
        assert!(rows.iter().all(|r| r.offset == 0));
    }

    #[test]
    fn test_row_span_centered() {
        assert_eq!(row_span(8, 6, 0), (1, 7));
        assert_eq!(row_span(8, 5, 0), (2, 7));
        assert_eq!(row_span(8, 1, 0), (4, 5));
    }

    #[test]
    fn test_row_span_offset() {
        assert_eq!(row_span(8, 6, -1), (0, 6));
        assert_eq!(row_span(8, 6, 1), (2, 8));
        assert_eq!(row_span(8, 2, -4), (-1, 1));
    }

    #[test]
    fn test_row_spec_offset_defaults_to_zero() {
        let spec: RowSpec = serde_json::from_str(r#"{"length": 3}"#).unwrap();
        assert_eq!(spec, RowSpec::centered(3));
    }
}
