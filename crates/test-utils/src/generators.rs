//! Test data generators for creating synthetic glacier-like data.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite.

use viz_common::Field;

/// Evenly spaced 1D coordinate axis from `start` to `end` inclusive.
///
/// # Example
///
/// ```
/// use test_utils::coordinate_axis;
///
/// let x = coordinate_axis(0.0, 10.0, 5);
/// assert_eq!(x.values(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
/// ```
pub fn coordinate_axis(start: f64, end: f64, n: usize) -> Field {
    let values = match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    };
    Field::from_vec(values)
}

/// Bedrock elevation grid `[rows, cols]` rising linearly with the row index
/// from `low` on row 0 to `high` on the last row.
///
/// Every row is constant, so the minimum and maximum are exactly `low` and
/// `high`.
pub fn create_bedrock_grid(rows: usize, cols: usize, low: f64, high: f64) -> Field {
    let step = if rows > 1 {
        (high - low) / (rows - 1) as f64
    } else {
        0.0
    };

    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for _ in 0..cols {
            data.push(low + step * row as f64);
        }
    }
    Field::grid(rows, cols, data).expect("bedrock grid has rows * cols values")
}

/// Binary outline mask `[rows, cols]`: 1 inside the rectangle
/// `row_range x col_range`, 0 elsewhere.
pub fn create_outline_mask(
    rows: usize,
    cols: usize,
    row_range: std::ops::Range<usize>,
    col_range: std::ops::Range<usize>,
) -> Field {
    let mut data = vec![0.0; rows * cols];
    for row in row_range {
        for col in col_range.clone() {
            if row < rows && col < cols {
                data[row * cols + col] = 1.0;
            }
        }
    }
    Field::grid(rows, cols, data).expect("mask has rows * cols values")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_axis_endpoints() {
        let axis = coordinate_axis(-5.0, 5.0, 11);
        assert_eq!(axis.len(), 11);
        assert_eq!(axis.values()[0], -5.0);
        assert_eq!(axis.values()[10], 5.0);
        assert_eq!(coordinate_axis(3.0, 9.0, 1).values(), &[3.0]);
        assert!(coordinate_axis(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_bedrock_grid_range() {
        let grid = create_bedrock_grid(5, 3, 100.0, 200.0);
        assert_eq!(grid.shape(), &[5, 3]);
        let range = grid.range().unwrap();
        assert_eq!(range.min, 100.0);
        assert_eq!(range.max, 200.0);
        assert_eq!(grid.get2(2, 1), Some(150.0));
    }

    #[test]
    fn test_outline_mask_rectangle() {
        let mask = create_outline_mask(4, 4, 1..3, 1..3);
        assert_eq!(mask.get2(0, 0), Some(0.0));
        assert_eq!(mask.get2(1, 1), Some(1.0));
        assert_eq!(mask.get2(2, 2), Some(1.0));
        assert_eq!(mask.get2(3, 3), Some(0.0));
        assert_eq!(mask.values().iter().filter(|&&v| v == 1.0).count(), 4);
    }
}
