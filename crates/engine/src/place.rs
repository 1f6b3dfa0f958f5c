use tetrix_core::{Board, GameListener, GamePhase, Shape, TetrixGame};
use tetrix_types::{Orientation, NUMBER_OF_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotPlayable,
    RotationBlocked,
    ColumnOutOfBounds,
    ColumnBlocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::RotationBlocked
            | PlaceError::ColumnOutOfBounds
            | PlaceError::ColumnBlocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "no shape is falling",
            PlaceError::RotationBlocked => "could not rotate to target orientation",
            PlaceError::ColumnOutOfBounds => "target column would place shape out of bounds",
            PlaceError::ColumnBlocked => "could not move to target column due to collision",
        }
    }
}

/// Where `shape` comes to rest if dropped straight down from its current row
pub fn landing_shape(board: &Board, shape: &Shape) -> Shape {
    let mut resting = *shape;
    let mut probe = resting;
    probe.lower_by_one_row();
    while board.is_legal(&probe) {
        resting = probe;
        probe.lower_by_one_row();
    }
    resting
}

/// Pivot columns from which some kind and orientation can still touch the grid
pub const PIVOT_COLUMNS: std::ops::Range<i8> = -2..NUMBER_OF_COLUMNS + 2;

/// Whether every block of `shape` would be inside the grid horizontally
fn fits_columns(shape: &Shape) -> bool {
    shape
        .blocks()
        .iter()
        .all(|b| (0..NUMBER_OF_COLUMNS).contains(&b.column))
}

/// Rotate the falling shape to `target_orientation`, shift its pivot to
/// `target_column`, then hard-drop it.
///
/// Only the game's own commands are used, so every step obeys the usual
/// collision rules. On failure the game is restored to its state before the call.
pub fn apply_place<L: GameListener + Clone>(
    game: &mut TetrixGame<L>,
    target_column: i8,
    target_orientation: Orientation,
) -> Result<(), PlaceError> {
    if game.phase() != GamePhase::Playing {
        return Err(PlaceError::NotPlayable);
    }
    let Some(&start) = game.falling_shape() else {
        return Err(PlaceError::NotPlayable);
    };

    if !PIVOT_COLUMNS.contains(&target_column) {
        return Err(PlaceError::ColumnOutOfBounds);
    }

    let mut target = start;
    target.rotate_to(target_orientation);
    target.move_to(target_column, start.row());
    if !fits_columns(&target) {
        return Err(PlaceError::ColumnOutOfBounds);
    }

    let snapshot = game.clone();

    // Clockwise is the only rotation command; at most three turns reach any orientation.
    let turns = (target_orientation.index() + 4 - start.orientation().index()) % 4;
    for _ in 0..turns {
        let before = game.falling_shape().map(Shape::orientation);
        game.rotate_shape();
        if game.falling_shape().map(Shape::orientation) == before {
            *game = snapshot;
            return Err(PlaceError::RotationBlocked);
        }
    }

    loop {
        let Some(column) = game.falling_shape().map(Shape::column) else {
            *game = snapshot;
            return Err(PlaceError::NotPlayable);
        };
        if column == target_column {
            break;
        }
        if column > target_column {
            game.move_shape_left();
        } else {
            game.move_shape_right();
        }
        if game.falling_shape().map(Shape::column) == Some(column) {
            *game = snapshot;
            return Err(PlaceError::ColumnBlocked);
        }
    }

    game.drop_shape();
    Ok(())
}
