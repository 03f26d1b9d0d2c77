//! Board module - manages one playfield grid
//!
//! A grid is 10 columns x 24 rows of binary occupancy.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..23 (top to bottom), col ranges 0..9

use crate::shape::{Piece, Position};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// One playfield - flat row-major occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [bool; BOARD_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i32 || col < 0 || col >= BOARD_WIDTH as i32 {
            return None;
        }
        Some((row as usize) * BOARD_WIDTH + (col as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, filled: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(true))
    }

    /// Within bounds and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(false))
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * BOARD_WIDTH;
        &self.cells[start..start + BOARD_WIDTH]
    }

    /// Fill every cell of a row
    pub fn fill_row(&mut self, row: usize) {
        if row < BOARD_HEIGHT {
            let start = row * BOARD_WIDTH;
            self.cells[start..start + BOARD_WIDTH].fill(true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < BOARD_HEIGHT && self.row(row).iter().all(|&cell| cell)
    }

    /// Remove a row and shift all rows above down by one.
    /// Row 0 becomes empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= BOARD_HEIGHT {
            return;
        }

        // copy_within handles overlapping ranges safely
        for r in (1..=row).rev() {
            let src_start = (r - 1) * BOARD_WIDTH;
            self.cells
                .copy_within(src_start..src_start + BOARD_WIDTH, r * BOARD_WIDTH);
        }

        self.cells[..BOARD_WIDTH].fill(false);
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Scans bottom to top. After a removal the same row index is scanned again,
    /// since the row above has shifted into it.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = BOARD_HEIGHT;

        while row > 0 {
            if self.is_row_full(row - 1) {
                self.clear_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }

        cleared
    }

    /// Whether `piece` anchored at `pos` lies inside the grid without overlapping
    /// filled cells. An empty piece never fits.
    pub fn fits(&self, piece: &Piece, pos: Position) -> bool {
        if piece.is_empty() {
            return false;
        }
        piece.cells().all(|(r, c)| {
            self.is_free(pos.row as i32 + r as i32, pos.col as i32 + c as i32)
        })
    }

    /// Lock a piece onto the grid.
    /// Returns false (and writes nothing) if the piece does not fit.
    pub fn lock_piece(&mut self, piece: &Piece, pos: Position) -> bool {
        if !self.fits(piece, pos) {
            return false;
        }

        for (r, c) in piece.cells() {
            self.set(pos.row as i32 + r as i32, pos.col as i32 + c as i32, true);
        }

        true
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
