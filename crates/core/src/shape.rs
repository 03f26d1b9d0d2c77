//! Shape module - tetromino masks and naive rotation
//!
//! Each piece is a rectangular boolean mask anchored at its top-left corner.
//! Rotation transposes and mirrors the mask (90° clockwise) without any wall
//! kicks: a rotation that does not fit in place is simply rejected by the caller.

use crate::types::PieceKind;

/// Largest mask dimension of any catalog piece
pub const MAX_PIECE_SIZE: usize = 4;

/// Top-left anchor of a piece on the board (row grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Position shifted by (drow, dcol)
    pub fn offset(self, drow: i8, dcol: i8) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

/// Row masks for each catalog shape
pub fn shape_rows(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
    }
}

/// A rectangular piece mask.
///
/// Stored inline (no allocation) with the logical size in `rows` x `cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    rows: u8,
    cols: u8,
    mask: [[bool; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl Piece {
    /// Build the spawn-orientation mask for a catalog shape
    pub fn of(kind: PieceKind) -> Self {
        Self::from_rows(shape_rows(kind))
    }

    /// Build a mask from 0/1 rows.
    ///
    /// Rows are truncated to `MAX_PIECE_SIZE`; the width is taken from the first row.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_PIECE_SIZE);
        let width = rows
            .first()
            .map_or(0, |row| row.len().min(MAX_PIECE_SIZE));

        let mut mask = [[false; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (r, row) in rows.iter().take(height).enumerate() {
            for (c, &cell) in row.iter().take(width).enumerate() {
                mask[r][c] = cell != 0;
            }
        }

        Self {
            rows: height as u8,
            cols: width as u8,
            mask,
        }
    }

    /// A single filled cell, used when a piece has no usable dimensions
    pub fn single_cell() -> Self {
        Self::from_rows(&[&[1]])
    }

    /// A piece with zero dimensions
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            mask: [[false; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// True when the mask has no dimensions or no filled cell
    pub fn is_empty(&self) -> bool {
        self.cells().next().is_none()
    }

    /// Whether (row, col) inside the mask is filled
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.mask[row][col]
    }

    /// Offsets of all filled cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |r| (0..self.cols()).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.mask[r][c])
    }

    /// The mask rotated 90° clockwise.
    ///
    /// `new[c][rows - 1 - r] = old[r][c]`, so the dimensions swap.
    pub fn rotated(&self) -> Self {
        let rows = self.rows();
        let mut mask = [[false; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for r in 0..rows {
            for c in 0..self.cols() {
                mask[c][rows - 1 - r] = self.mask[r][c];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            mask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_dimensions() {
        assert_eq!((Piece::of(PieceKind::I).rows(), Piece::of(PieceKind::I).cols()), (1, 4));
        assert_eq!((Piece::of(PieceKind::O).rows(), Piece::of(PieceKind::O).cols()), (2, 2));
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            let piece = Piece::of(kind);
            assert_eq!((piece.rows(), piece.cols()), (2, 3), "{:?}", kind);
        }
    }

    #[test]
    fn test_every_catalog_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Piece::of(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_t_piece() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = Piece::of(PieceKind::T).rotated();
        assert_eq!(rotated, Piece::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]));
    }

    #[test]
    fn test_rotate_i_piece_is_vertical() {
        let rotated = Piece::of(PieceKind::I).rotated();
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
        assert_eq!(rotated.cells().count(), 4);
    }

    #[test]
    fn test_four_rotations_round_trip() {
        for kind in PieceKind::ALL {
            let piece = Piece::of(kind);
            let back = piece.rotated().rotated().rotated().rotated();
            assert_eq!(back, piece, "{:?}", kind);
        }
    }

    #[test]
    fn test_empty_piece() {
        assert!(Piece::empty().is_empty());
        assert!(Piece::from_rows(&[&[0, 0]]).is_empty());
        assert!(!Piece::single_cell().is_empty());
        assert_eq!(Piece::empty().rotated(), Piece::empty());
    }

    #[test]
    fn test_get_outside_mask() {
        let piece = Piece::of(PieceKind::O);
        assert!(piece.get(1, 1));
        assert!(!piece.get(2, 0));
        assert!(!piece.get(0, 2));
    }
}
