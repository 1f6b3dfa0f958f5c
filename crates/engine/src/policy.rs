//! Placement policy - greedy one-shape lookahead over a weighted board score
//!
//! Every orientation is tried at every pivot column from the shape's current
//! row. Each legal candidate is dropped to its landing row, settled on a copy
//! of the board, and line clears run with the game's own rules. The settled
//! board is then scored:
//!
//! | Feature          | Meaning                                        |
//! |------------------|------------------------------------------------|
//! | aggregate height | sum of column heights                          |
//! | holes            | empty cells below the top block of a column    |
//! | bumpiness        | sum of height differences of adjacent columns  |
//! | lines            | rows removed by the placement                  |

use tetrix_core::{Board, Shape, TetrixGame};
use tetrix_types::{Orientation, NUMBER_OF_ROWS};

use crate::place::{landing_shape, PIVOT_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub aggregate_height: f64,
    pub holes: f64,
    pub bumpiness: f64,
    pub lines: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            aggregate_height: -0.510066,
            holes: -0.35663,
            bumpiness: -0.184483,
            lines: 0.760666,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardFeatures {
    pub aggregate_height: u32,
    pub holes: u32,
    pub bumpiness: u32,
    pub lines: u32,
}

impl BoardFeatures {
    /// Features of a settled board; `lines` is left at zero
    pub fn of(board: &Board) -> Self {
        let heights = board.column_heights();
        let aggregate_height = heights.iter().map(|&h| h as u32).sum();
        let bumpiness = heights
            .windows(2)
            .map(|w| (w[0] as i32 - w[1] as i32).unsigned_abs())
            .sum();

        let mut holes = 0;
        for (column, &height) in heights.iter().enumerate() {
            let top = NUMBER_OF_ROWS - height as i8;
            for row in top..NUMBER_OF_ROWS {
                if board.is_vacant(column as i8, row) {
                    holes += 1;
                }
            }
        }

        Self {
            aggregate_height,
            holes,
            bumpiness,
            lines: 0,
        }
    }

    pub fn score(&self, weights: &Weights) -> f64 {
        weights.aggregate_height * self.aggregate_height as f64
            + weights.holes * self.holes as f64
            + weights.bumpiness * self.bumpiness as f64
            + weights.lines * self.lines as f64
    }
}

/// A chosen target for [`apply_place`](crate::place::apply_place)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub column: i8,
    pub orientation: Orientation,
    pub features: BoardFeatures,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicPolicy {
    weights: Weights,
}

impl HeuristicPolicy {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Best placement for `shape` on `board`, or `None` if no candidate is legal
    ///
    /// Ties keep the first candidate in orientation-then-column order.
    pub fn choose(&self, board: &Board, shape: &Shape) -> Option<Placement> {
        let mut best: Option<Placement> = None;

        for orientation in Orientation::ALL {
            for column in PIVOT_COLUMNS {
                let mut candidate = *shape;
                candidate.rotate_to(orientation);
                candidate.move_to(column, shape.row());
                if !board.is_legal(&candidate) {
                    continue;
                }

                let features = evaluate(board, &landing_shape(board, &candidate));
                let score = features.score(&self.weights);
                if best.map_or(true, |b| score > b.score) {
                    best = Some(Placement {
                        column,
                        orientation,
                        features,
                        score,
                    });
                }
            }
        }

        best
    }
}

/// Settle `resting` on a copy of `board`, clear lines, and measure the result
pub fn evaluate(board: &Board, resting: &Shape) -> BoardFeatures {
    let mut settled = board.clone();
    for block in resting.blocks() {
        settled.place(*block);
    }

    let mut scratch = TetrixGame::new(0).with_board(settled);
    let mut lines = 0;
    loop {
        let clear = scratch.remove_completed_lines();
        if clear.is_empty() {
            break;
        }
        lines += clear.lines() as u32;
    }

    BoardFeatures {
        lines,
        ..BoardFeatures::of(scratch.board())
    }
}
