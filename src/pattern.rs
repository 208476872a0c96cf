// src/pattern.rs

//! Pattern construction from the leading segment of the digest.
//!
//! The first 15 hex characters are read as 15 independent nibbles. Nibble
//! parity decides which cells of a 5x5 grid are filled: nibbles 0-4 drive
//! the center column, 5-9 the inner column pair, 10-14 the outer column
//! pair. The pairs are written to both sides at once, so left-right
//! mirror symmetry holds by construction and is never re-checked.

use serde::{Deserialize, Serialize};

/// Grid edge length, in cells.
pub const GRID_SIZE: usize = 5;

/// Number of digest characters consumed by the pattern.
pub const PATTERN_SEGMENT_LEN: usize = 3 * GRID_SIZE;

/// The 5x5 boolean fill grid and the digest segment it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternGrid {
    /// Raw 15-character pattern segment, `digest[0..15]`.
    pub segment: String,
    /// Row-major cells; `true` means filled with the foreground color.
    pub cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl PatternGrid {
    /// Builds the grid from a well-formed 32-character lowercase hex
    /// digest.
    ///
    /// # Panics
    /// Panics if the digest is shorter than 15 characters or contains a
    /// non-hexadecimal character in its pattern segment. Digests produced
    /// by [`crate::digest::digest`] always satisfy the contract.
    pub fn from_digest(digest: &str) -> Self {
        let segment = &digest[..PATTERN_SEGMENT_LEN];
        let nibbles: Vec<u8> = segment
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .expect("digest pattern segment is not hexadecimal") as u8
            })
            .collect();

        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
        for (row, row_cells) in cells.iter_mut().enumerate() {
            // Zero counts as even.
            if nibbles[row] % 2 == 0 {
                row_cells[2] = true;
            }
            if nibbles[row + GRID_SIZE] % 2 == 0 {
                row_cells[1] = true;
                row_cells[3] = true;
            }
            if nibbles[row + 2 * GRID_SIZE] % 2 == 0 {
                row_cells[0] = true;
                row_cells[4] = true;
            }
        }

        Self {
            segment: segment.to_owned(),
            cells,
        }
    }

    /// Whether the cell at `(row, col)` is filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::digest;

    fn as_ints(grid: &PatternGrid) -> [[u8; 5]; 5] {
        let mut out = [[0u8; 5]; 5];
        for r in 0..5 {
            for c in 0..5 {
                out[r][c] = grid.cells[r][c] as u8;
            }
        }
        out
    }

    #[test]
    fn empty_identifier_grid() {
        let grid = PatternGrid::from_digest("d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(grid.segment, "d41d8cd98f00b20");
        assert_eq!(
            as_ints(&grid),
            [
                [1, 1, 0, 1, 1],
                [1, 0, 1, 0, 1],
                [0, 0, 0, 0, 0],
                [1, 1, 0, 1, 1],
                [1, 0, 1, 0, 1],
            ]
        );
    }

    #[test]
    fn known_identifier_grid() {
        let grid = PatternGrid::from_digest(&digest("1"));
        assert_eq!(grid.segment, "c4ca4238a0b9238");
        assert_eq!(
            as_ints(&grid),
            [
                [0, 1, 1, 1, 0],
                [0, 0, 1, 0, 0],
                [1, 1, 1, 1, 1],
                [0, 1, 1, 1, 0],
                [1, 1, 1, 1, 1],
            ]
        );
    }

    #[test]
    fn mirror_symmetry_holds_for_many_inputs() {
        for n in 0..64 {
            let grid = PatternGrid::from_digest(&digest(&n.to_string()));
            for row in 0..GRID_SIZE {
                assert_eq!(grid.cells[row][0], grid.cells[row][4]);
                assert_eq!(grid.cells[row][1], grid.cells[row][3]);
            }
        }
    }

    #[test]
    fn all_even_nibbles_fill_everything() {
        let grid = PatternGrid::from_digest("00000000000000000000000000000000");
        assert_eq!(grid.filled_count(), 25);
    }

    #[test]
    fn all_odd_nibbles_fill_nothing() {
        let grid = PatternGrid::from_digest("ffffffffffffffffffffffffffffffff");
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn nibble_banks_drive_their_columns() {
        // Bank 0 (chars 0-4) even, banks 1 and 2 odd: center column only.
        let grid = PatternGrid::from_digest("00000ffffffffffff000000000000000");
        for row in 0..GRID_SIZE {
            assert!(grid.is_filled(row, 2));
            assert!(!grid.is_filled(row, 1));
            assert!(!grid.is_filled(row, 0));
        }

        // Bank 1 (chars 5-9) even: inner pair only.
        let grid = PatternGrid::from_digest("fffff00000fffff00000000000000000");
        for row in 0..GRID_SIZE {
            assert!(!grid.is_filled(row, 2));
            assert!(grid.is_filled(row, 1) && grid.is_filled(row, 3));
            assert!(!grid.is_filled(row, 0));
        }

        // Bank 2 (chars 10-14) even: outer pair only.
        let grid = PatternGrid::from_digest("ffffffffff00000f0000000000000000");
        for row in 0..GRID_SIZE {
            assert!(!grid.is_filled(row, 2));
            assert!(!grid.is_filled(row, 1));
            assert!(grid.is_filled(row, 0) && grid.is_filled(row, 4));
        }
    }
}
