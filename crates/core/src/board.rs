//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or hold one block.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (column, row) where column ranges 0..9 (left to right), row ranges 0..19 (top to bottom)
//!
//! A stored block always carries the coordinates of the cell it sits in: `set`
//! re-stamps the block before storing it.

use tetrix_types::{Block, NUMBER_OF_COLUMNS, NUMBER_OF_ROWS};

use crate::shape::Shape;

/// Total number of cells on the board
const BOARD_SIZE: usize = (NUMBER_OF_COLUMNS as usize) * (NUMBER_OF_ROWS as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + column)
    cells: [Option<Block>; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(column: i8, row: i8) -> Option<usize> {
        if column < 0 || column >= NUMBER_OF_COLUMNS || row < 0 || row >= NUMBER_OF_ROWS {
            return None;
        }
        Some((row as usize) * (NUMBER_OF_COLUMNS as usize) + (column as usize))
    }

    pub fn columns(&self) -> i8 {
        NUMBER_OF_COLUMNS
    }

    pub fn rows(&self) -> i8 {
        NUMBER_OF_ROWS
    }

    /// Check if (column, row) addresses a cell of the board
    pub fn contains(&self, column: i8, row: i8) -> bool {
        Self::index(column, row).is_some()
    }

    /// Get the block at (column, row)
    /// Returns None for empty cells and for coordinates outside the grid
    pub fn get(&self, column: i8, row: i8) -> Option<Block> {
        Self::index(column, row).and_then(|idx| self.cells[idx])
    }

    /// Set the cell at (column, row)
    ///
    /// A stored block takes the cell's coordinates. Returns false if out of bounds.
    pub fn set(&mut self, column: i8, row: i8, block: Option<Block>) -> bool {
        match Self::index(column, row) {
            Some(idx) => {
                self.cells[idx] = block.map(|b| Block { column, row, ..b });
                true
            }
            None => false,
        }
    }

    /// Store a block at its own coordinates
    pub fn place(&mut self, block: Block) -> bool {
        self.set(block.column, block.row, Some(block))
    }

    /// Remove and return the block at (column, row)
    pub fn take(&mut self, column: i8, row: i8) -> Option<Block> {
        Self::index(column, row).and_then(|idx| self.cells[idx].take())
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, column: i8, row: i8) -> bool {
        self.get(column, row).is_some()
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, column: i8, row: i8) -> bool {
        matches!(Self::index(column, row), Some(idx) if self.cells[idx].is_none())
    }

    /// Check if every block of the shape is inside the grid on an empty cell
    pub fn is_legal(&self, shape: &Shape) -> bool {
        shape
            .blocks()
            .iter()
            .all(|b| self.is_vacant(b.column, b.row))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i8) -> bool {
        if !(0..NUMBER_OF_ROWS).contains(&row) {
            return false;
        }
        let start = row as usize * NUMBER_OF_COLUMNS as usize;
        let end = start + NUMBER_OF_COLUMNS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Blocks of one row, left to right
    pub fn row_blocks(&self, row: i8) -> impl Iterator<Item = Block> + '_ {
        (0..NUMBER_OF_COLUMNS).filter_map(move |column| self.get(column, row))
    }

    /// Every stored block, row by row from the top
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Height of each column's stack, measured from the floor
    pub fn column_heights(&self) -> [u8; NUMBER_OF_COLUMNS as usize] {
        let mut heights = [0u8; NUMBER_OF_COLUMNS as usize];
        for (column, height) in heights.iter_mut().enumerate() {
            if let Some(top) = (0..NUMBER_OF_ROWS).find(|&row| self.is_occupied(column as i8, row)) {
                *height = (NUMBER_OF_ROWS - top) as u8;
            }
        }
        heights
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrix_types::BlockColor;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_set_restamps_coordinates() {
        let mut board = Board::new();
        let stray = Block::new(0, 0, BlockColor::Teal);

        assert!(board.set(5, 10, Some(stray)));

        let stored = board.get(5, 10).unwrap();
        assert_eq!((stored.column, stored.row), (5, 10));
        assert_eq!(stored.color, BlockColor::Teal);
        assert_eq!(board.cells[10 * 10 + 5], Some(stored));
    }

    #[test]
    fn test_column_heights() {
        let mut board = Board::new();
        board.place(Block::new(0, 19, BlockColor::Red));
        board.place(Block::new(3, 15, BlockColor::Red));
        board.place(Block::new(3, 19, BlockColor::Red));

        let heights = board.column_heights();
        assert_eq!(heights[0], 1);
        assert_eq!(heights[1], 0);
        assert_eq!(heights[3], 5);
    }
}
