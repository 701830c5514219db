//! Shape-validated chip matrices

use thiserror::Error;

/// Why a `chipHistory` payload could not become a matrix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("chip history is empty")]
    Empty,
    #[error("chip history row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Dense row-major matrix of chip counts.
///
/// Built from a `chipHistory` payload as turns x players; transposed to
/// players x turns for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipMatrix {
    rows: usize,
    cols: usize,
    values: Vec<u32>,
}

impl ChipMatrix {
    /// Build from nested rows, rejecting empty or ragged input.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, ShapeError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || expected == 0 {
            return Err(ShapeError::Empty);
        }

        let mut values = Vec::with_capacity(rows.len() * expected);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != expected {
                return Err(ShapeError::Ragged {
                    row,
                    len: entries.len(),
                    expected,
                });
            }
            values.extend_from_slice(entries);
        }

        Ok(Self {
            rows: rows.len(),
            cols: expected,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.values[row * self.cols + col]
    }

    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn transpose(&self) -> ChipMatrix {
        let mut values = Vec::with_capacity(self.values.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                values.push(self.get(row, col));
            }
        }
        ChipMatrix {
            rows: self.cols,
            cols: self.rows,
            values,
        }
    }
}
