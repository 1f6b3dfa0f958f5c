//! Shape module - polyomino geometry
//!
//! Every shape is four blocks placed at fixed offsets from a pivot cell. The
//! offsets depend on the shape kind and its orientation, and a second table
//! names the blocks that are lowest in their column (the "bottom blocks")
//! used to test whether a shape is resting on something.
//!
//! Both tables are total over `ShapeKind` x `Orientation`. Block positions are
//! always recomputed from the pivot, never nudged incrementally, so
//! `block[i] == pivot + offsets(kind, orientation)[i]` holds after every
//! rotation or translation.
//!
//! Nothing here looks at the board; collision handling lives in the game.

use arrayvec::ArrayVec;
use std::fmt;

use tetrix_types::{
    Block, BlockColor, Orientation, ShapeKind, BLOCKS_PER_SHAPE, PREVIEW_COLUMN, PREVIEW_ROW,
};

use crate::rng::SimpleRng;

/// Offset of a single block relative to the pivot: (column diff, row diff)
pub type BlockOffset = (i8, i8);

/// The four block offsets of a shape in one orientation
pub type ShapeOffsets = [BlockOffset; BLOCKS_PER_SHAPE];

/// Get the block offsets for a shape kind and orientation
pub fn offsets(kind: ShapeKind, orientation: Orientation) -> ShapeOffsets {
    match kind {
        ShapeKind::Line => line_offsets(orientation),
        ShapeKind::Square => square_offsets(orientation),
        ShapeKind::T => t_offsets(orientation),
        ShapeKind::S => s_offsets(orientation),
        ShapeKind::Z => z_offsets(orientation),
        ShapeKind::J => j_offsets(orientation),
        ShapeKind::L => l_offsets(orientation),
    }
}

/// Line shapes
///
/// ```text
/// 0 / 180      90 / 270
///  |0*|        |0|1*|2|3|
///  |1 |
///  |2 |
///  |3 |
/// ```
/// `*` marks the pivot. Hinges about the second block when lying flat.
fn line_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (0, 2), (0, 3)],
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (1, 0), (2, 0)],
    }
}

/// Square shape (identical in every orientation, so it never visibly turns)
///
/// ```text
/// |0*|1|
/// |2 |3|
/// ```
fn square_offsets(_orientation: Orientation) -> ShapeOffsets {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// T shapes
///
/// ```text
///   0          90         180        270
/// *  |0|      *|1|      *            *  |1|
/// |1|2|3|      |2|0|    |1|2|3|      |0|2|
///              |3|        |0|           |3|
/// ```
fn t_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::Ninety => [(2, 1), (1, 0), (1, 1), (1, 2)],
        Orientation::OneEighty => [(1, 2), (0, 1), (1, 1), (2, 1)],
        Orientation::TwoSeventy => [(0, 1), (1, 0), (1, 1), (1, 2)],
    }
}

/// S shapes
///
/// ```text
/// 0 / 180     90 / 270
/// |0*|        *  |1|0|
/// |1 |2|      |3|2|
///     |3|
/// ```
fn s_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (1, 1), (1, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(2, 0), (1, 0), (1, 1), (0, 1)],
    }
}

/// Z shapes
///
/// ```text
/// 0 / 180     90 / 270
/// *  |0|      |0|1*|
/// |2|1|           |2|3|
/// |3|
/// ```
fn z_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(1, 0), (1, 1), (0, 1), (0, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (0, 1), (1, 1)],
    }
}

/// J shapes, pivoting about block 1
///
/// ```text
///   0         90          180        270
/// *  |0|     |3*|        |2*|3|     |0*|1|2|
///    |1|     |2 |1|0|    |1 |            |3|
/// |3|2|                  |0 |
/// ```
fn j_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(1, 0), (1, 1), (1, 2), (0, 2)],
        Orientation::Ninety => [(2, 1), (1, 1), (0, 1), (0, 0)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (1, 0)],
        Orientation::TwoSeventy => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

/// L shapes, pivoting about block 1
///
/// ```text
///   0          90          180         270
/// |0*|            *       |3|2*|         *|3|
/// |1 |       |2|1|0|         |1|     |0|1|2|
/// |2 |3|     |3|             |0|
/// ```
fn l_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Orientation::Ninety => [(1, 1), (0, 1), (-1, 1), (-1, 2)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (-1, 0)],
        Orientation::TwoSeventy => [(-1, 1), (0, 1), (1, 1), (1, 0)],
    }
}

/// Indices of the blocks that are lowest in their column
pub fn bottom_block_indices(kind: ShapeKind, orientation: Orientation) -> &'static [usize] {
    use Orientation::*;

    match (kind, orientation) {
        (ShapeKind::Line, Zero | OneEighty) => &[3],
        (ShapeKind::Line, Ninety | TwoSeventy) => &[0, 1, 2, 3],

        (ShapeKind::Square, _) => &[2, 3],

        (ShapeKind::T, Zero) => &[1, 2, 3],
        (ShapeKind::T, Ninety) => &[0, 3],
        (ShapeKind::T, OneEighty) => &[0, 1, 3],
        (ShapeKind::T, TwoSeventy) => &[0, 3],

        (ShapeKind::S, Zero | OneEighty) => &[1, 3],
        (ShapeKind::S, Ninety | TwoSeventy) => &[0, 2, 3],

        (ShapeKind::Z, Zero | OneEighty) => &[1, 3],
        (ShapeKind::Z, Ninety | TwoSeventy) => &[0, 2, 3],

        (ShapeKind::J, Zero) => &[2, 3],
        (ShapeKind::J, Ninety) => &[0, 1, 2],
        (ShapeKind::J, OneEighty) => &[0, 3],
        (ShapeKind::J, TwoSeventy) => &[0, 1, 3],

        (ShapeKind::L, Zero) => &[2, 3],
        (ShapeKind::L, Ninety) => &[0, 1, 3],
        (ShapeKind::L, OneEighty) => &[0, 3],
        (ShapeKind::L, TwoSeventy) => &[0, 1, 2],
    }
}

/// A shape: kind, color, orientation, pivot, and its four blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    color: BlockColor,
    orientation: Orientation,
    column: i8,
    row: i8,
    blocks: [Block; BLOCKS_PER_SHAPE],
}

impl Shape {
    /// Create a shape with its pivot at (column, row)
    pub fn new(
        kind: ShapeKind,
        column: i8,
        row: i8,
        color: BlockColor,
        orientation: Orientation,
    ) -> Self {
        let mut shape = Self {
            kind,
            color,
            orientation,
            column,
            row,
            blocks: [Block::new(column, row, color); BLOCKS_PER_SHAPE],
        };
        shape.reposition_blocks();
        shape
    }

    /// Random kind, color and orientation, all uniform
    pub fn random(rng: &mut SimpleRng, column: i8, row: i8) -> Self {
        let kind = rng.shape_kind();
        let color = rng.color();
        let orientation = rng.orientation();
        Self::new(kind, column, row, color, orientation)
    }

    /// Random shape waiting in the preview slot
    pub fn random_preview(rng: &mut SimpleRng) -> Self {
        Self::random(rng, PREVIEW_COLUMN, PREVIEW_ROW)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn column(&self) -> i8 {
        self.column
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn blocks(&self) -> &[Block; BLOCKS_PER_SHAPE] {
        &self.blocks
    }

    /// The blocks that are lowest in their column for the current orientation
    pub fn bottom_blocks(&self) -> ArrayVec<Block, BLOCKS_PER_SHAPE> {
        bottom_block_indices(self.kind, self.orientation)
            .iter()
            .map(|&i| self.blocks[i])
            .collect()
    }

    /// Recompute all four block positions from the pivot and orientation
    fn reposition_blocks(&mut self) {
        let table = offsets(self.kind, self.orientation);
        for (block, (dc, dr)) in self.blocks.iter_mut().zip(table) {
            block.column = self.column + dc;
            block.row = self.row + dr;
        }
    }

    /// Turn to `orientation` about the unchanged pivot
    pub fn rotate_to(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.reposition_blocks();
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate_to(self.orientation.rotate(true));
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotate_to(self.orientation.rotate(false));
    }

    /// Move the pivot by (columns, rows)
    pub fn shift_by(&mut self, columns: i8, rows: i8) {
        self.column += columns;
        self.row += rows;
        self.reposition_blocks();
    }

    /// Move the pivot to (column, row)
    pub fn move_to(&mut self, column: i8, row: i8) {
        self.column = column;
        self.row = row;
        self.reposition_blocks();
    }

    pub fn lower_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.blocks;
        write!(
            f,
            "{} {} facing {}: {}, {}, {}, {}",
            self.color,
            self.kind.as_str(),
            self.orientation,
            a,
            b,
            c,
            d
        )
    }
}
