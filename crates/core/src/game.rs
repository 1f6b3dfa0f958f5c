//! Game module - the falling-shape state machine
//!
//! `TetrixGame` owns the board, the falling shape and the next shape, and runs
//! every rule: collision checks, landing, line clears, gravity collapse,
//! scoring and level progression.
//!
//! Illegal moves are not errors. A move, rotation or fall that would leave the
//! shape outside the grid or on an occupied cell is simply not committed, and
//! no notification is sent. The only terminal condition is a shape with no
//! legal position, which ends the game (score and level reset).
//!
//! Notifications go to the game's [`GameListener`] synchronously, before the
//! command that caused them returns.

use tetrix_types::{
    Block, GameAction, GameEvent, NUMBER_OF_COLUMNS, NUMBER_OF_ROWS, PREVIEW_COLUMN, PREVIEW_ROW,
    STARTING_COLUMN, STARTING_ROW,
};

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::scoring::{points_for_lines, should_level_up};
use crate::shape::Shape;
use crate::snapshot::GameSnapshot;

/// Receiver of game notifications
pub trait GameListener {
    fn on_event(&mut self, event: GameEvent, game: GameView<'_>);
}

/// Silent listener
impl GameListener for () {
    fn on_event(&mut self, _event: GameEvent, _game: GameView<'_>) {}
}

/// Records every event in order
impl GameListener for Vec<GameEvent> {
    fn on_event(&mut self, event: GameEvent, _game: GameView<'_>) {
        self.push(event);
    }
}

/// Read-only view of a game, handed to listeners and renderers
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    board: &'a Board,
    falling_shape: Option<&'a Shape>,
    next_shape: Option<&'a Shape>,
    score: u32,
    level: u32,
}

impl<'a> GameView<'a> {
    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn falling_shape(&self) -> Option<&'a Shape> {
        self.falling_shape
    }

    pub fn next_shape(&self) -> Option<&'a Shape> {
        self.next_shape
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

/// Lifecycle state, derived from the game flags and the falling shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// `begin_game` has not run yet
    NotStarted,
    /// A shape is falling
    Playing,
    /// No shape is falling yet: either the last one landed and lines are
    /// being cleared, or `begin_game` ran and the first spawn is pending
    LineClearing,
    /// A shape found no legal position; waiting for `begin_game`
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "notStarted",
            GamePhase::Playing => "playing",
            GamePhase::LineClearing => "lineClearing",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Result of [`TetrixGame::remove_completed_lines`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Blocks of each removed row, bottom-most row first
    pub removed_lines: Vec<Vec<Block>>,
    /// Blocks that fell after the clear, one group per column, at their new rows
    pub fallen_blocks: Vec<Vec<Block>>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.removed_lines.is_empty()
    }

    pub fn lines(&self) -> usize {
        self.removed_lines.len()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct TetrixGame<L = ()> {
    board: Board,
    falling_shape: Option<Shape>,
    next_shape: Option<Shape>,
    rng: SimpleRng,
    score: u32,
    level: u32,
    started: bool,
    game_over: bool,
    listener: L,
}

impl TetrixGame {
    /// Create a new game with the given RNG seed and no listener
    pub fn new(seed: u32) -> Self {
        Self::with_listener(seed, ())
    }
}

impl Default for TetrixGame {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<L: GameListener> TetrixGame<L> {
    /// Create a new game that reports to `listener`
    pub fn with_listener(seed: u32, listener: L) -> Self {
        Self {
            board: Board::new(),
            falling_shape: None,
            next_shape: None,
            rng: SimpleRng::new(seed),
            score: 0,
            level: 1,
            started: false,
            game_over: false,
            listener,
        }
    }

    /// Start from a prepared board instead of an empty one
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn falling_shape(&self) -> Option<&Shape> {
        self.falling_shape.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next_shape.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.falling_shape.is_some() {
            GamePhase::Playing
        } else if self.started {
            GamePhase::LineClearing
        } else {
            GamePhase::NotStarted
        }
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: &self.board,
            falling_shape: self.falling_shape.as_ref(),
            next_shape: self.next_shape.as_ref(),
            score: self.score,
            level: self.level,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_from(self.view(), self.phase());
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn emit(&mut self, event: GameEvent) {
        let view = GameView {
            board: &self.board,
            falling_shape: self.falling_shape.as_ref(),
            next_shape: self.next_shape.as_ref(),
            score: self.score,
            level: self.level,
        };
        self.listener.on_event(event, view);
    }

    /// Start (or restart) a game
    ///
    /// Resets score and level and seeds the preview slot if it is empty. An
    /// existing next shape is kept, so a restart shows the shape that was
    /// waiting when the last game ended. The board is left as it is; drain it
    /// with [`remove_all_blocks`](Self::remove_all_blocks) first.
    pub fn begin_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.started = true;
        self.game_over = false;

        if self.next_shape.is_none() {
            self.next_shape = Some(Shape::random_preview(&mut self.rng));
        }

        self.emit(GameEvent::Began);
    }

    /// Promote the next shape to the falling shape and draw a new next shape
    ///
    /// Returns `(falling, next)`. If the spawn point is already blocked the
    /// game ends: the candidate goes back to the preview slot and `None` is
    /// returned. Also returns `None` before `begin_game` and after game over.
    pub fn spawn_next(&mut self) -> Option<(Shape, Shape)> {
        if !self.started || self.game_over {
            return None;
        }

        let mut candidate = match self.next_shape.take() {
            Some(shape) => shape,
            None => Shape::random_preview(&mut self.rng),
        };
        let next = Shape::random_preview(&mut self.rng);

        candidate.move_to(STARTING_COLUMN, STARTING_ROW);

        if !self.board.is_legal(&candidate) {
            candidate.move_to(PREVIEW_COLUMN, PREVIEW_ROW);
            self.next_shape = Some(candidate);
            self.end_game();
            return None;
        }

        self.falling_shape = Some(candidate);
        self.next_shape = Some(next);
        Some((candidate, next))
    }

    /// Hard drop: move the falling shape straight down onto its resting row
    ///
    /// The shape is not settled here; the following tick lands it.
    pub fn drop_shape(&mut self) {
        let Some(mut shape) = self.falling_shape else {
            return;
        };

        let mut probe = shape;
        probe.lower_by_one_row();
        while self.board.is_legal(&probe) {
            shape = probe;
            probe.lower_by_one_row();
        }

        self.falling_shape = Some(shape);
        self.emit(GameEvent::Dropped);
    }

    /// Gravity tick: lower the falling shape one row
    ///
    /// If the lower row is blocked the shape settles where it is (or the game
    /// ends when even that position is illegal). If it moved and is now
    /// resting on the floor or a block, it settles immediately.
    pub fn let_shape_fall(&mut self) {
        let Some(shape) = self.falling_shape else {
            return;
        };

        let mut lowered = shape;
        lowered.lower_by_one_row();

        if !self.board.is_legal(&lowered) {
            if self.board.is_legal(&shape) {
                self.settle_shape();
            } else {
                self.end_game();
            }
            return;
        }

        self.falling_shape = Some(lowered);
        self.emit(GameEvent::Moved);

        if self.detect_touch() {
            self.settle_shape();
        }
    }

    /// Rotate the falling shape clockwise about its pivot, if the result is legal
    pub fn rotate_shape(&mut self) {
        self.try_transform(Shape::rotate_clockwise);
    }

    pub fn move_shape_left(&mut self) {
        self.try_transform(Shape::shift_left_by_one_column);
    }

    pub fn move_shape_right(&mut self) {
        self.try_transform(Shape::shift_right_by_one_column);
    }

    /// Apply `transform` to a copy of the falling shape and commit it when legal
    fn try_transform(&mut self, transform: impl FnOnce(&mut Shape)) {
        let Some(mut shape) = self.falling_shape else {
            return;
        };

        transform(&mut shape);
        if !self.board.is_legal(&shape) {
            return;
        }

        self.falling_shape = Some(shape);
        self.emit(GameEvent::Moved);
    }

    /// Apply an input command
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_shape_left(),
            GameAction::MoveRight => self.move_shape_right(),
            GameAction::Rotate => self.rotate_shape(),
            GameAction::Drop => self.drop_shape(),
            GameAction::Tick => self.let_shape_fall(),
        }
    }

    /// Commit the falling shape's blocks to the board
    fn settle_shape(&mut self) {
        let Some(shape) = self.falling_shape.take() else {
            return;
        };

        for block in shape.blocks() {
            self.board.place(*block);
        }

        self.emit(GameEvent::Landed);
    }

    /// Whether any bottom block rests on the floor or on a settled block
    fn detect_touch(&self) -> bool {
        let Some(shape) = self.falling_shape else {
            return false;
        };

        shape.bottom_blocks().iter().any(|b| {
            b.row == NUMBER_OF_ROWS - 1 || self.board.is_occupied(b.column, b.row + 1)
        })
    }

    fn end_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.falling_shape = None;
        self.game_over = true;

        self.emit(GameEvent::Ended);
    }

    /// Remove every complete row, score it, and collapse the stacks above
    ///
    /// Rows are scanned from the floor up to row 1; row 0 is the spawn row and
    /// is never cleared. When nothing is complete the result is empty and the
    /// score is untouched. Otherwise the clear scores
    /// `lines * POINTS_PER_LINE * level`, the level goes up at most once, and
    /// every block above the lowest cleared row drops to the lowest empty
    /// cell beneath it in its column.
    pub fn remove_completed_lines(&mut self) -> LineClear {
        let mut removed_lines = Vec::new();

        for row in (1..NUMBER_OF_ROWS).rev() {
            if !self.board.is_row_full(row) {
                continue;
            }
            let mut line = Vec::with_capacity(NUMBER_OF_COLUMNS as usize);
            for column in 0..NUMBER_OF_COLUMNS {
                if let Some(block) = self.board.take(column, row) {
                    line.push(block);
                }
            }
            removed_lines.push(line);
        }

        if removed_lines.is_empty() {
            return LineClear::default();
        }

        let points = points_for_lines(removed_lines.len(), self.level);
        self.score = self.score.saturating_add(points);

        if should_level_up(self.score, self.level) {
            self.level += 1;
            self.emit(GameEvent::LeveledUp);
        }

        let lowest_removed_row = removed_lines[0][0].row;
        let fallen_blocks = self.collapse_above(lowest_removed_row);

        LineClear {
            removed_lines,
            fallen_blocks,
        }
    }

    /// Let every block in rows `1..row` fall to the lowest empty cell beneath it
    ///
    /// Columns are compacted bottom-up, so blocks keep their order. Returns the
    /// blocks that moved, grouped by column.
    fn collapse_above(&mut self, row: i8) -> Vec<Vec<Block>> {
        let mut fallen_blocks = Vec::new();

        for column in 0..NUMBER_OF_COLUMNS {
            let mut fallen = Vec::new();

            for from_row in (1..row).rev() {
                let Some(block) = self.board.take(column, from_row) else {
                    continue;
                };

                let mut to_row = from_row;
                while to_row < NUMBER_OF_ROWS - 1 && !self.board.is_occupied(column, to_row + 1) {
                    to_row += 1;
                }

                self.board.set(column, to_row, Some(block));
                if to_row != from_row {
                    fallen.push(Block { row: to_row, ..block });
                }
            }

            if !fallen.is_empty() {
                fallen_blocks.push(fallen);
            }
        }

        fallen_blocks
    }

    /// Empty the board, returning its blocks grouped by row (index = row)
    pub fn remove_all_blocks(&mut self) -> Vec<Vec<Block>> {
        let mut rows = Vec::with_capacity(NUMBER_OF_ROWS as usize);

        for row in 0..NUMBER_OF_ROWS {
            let mut blocks = Vec::new();
            for column in 0..NUMBER_OF_COLUMNS {
                if let Some(block) = self.board.take(column, row) {
                    blocks.push(block);
                }
            }
            rows.push(blocks);
        }

        rows
    }
}
