use tetrix_types::{BlockColor, Orientation, ShapeKind, NUMBER_OF_COLUMNS, NUMBER_OF_ROWS};

use crate::game::{GamePhase, GameView};
use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeSnapshot {
    pub kind: ShapeKind,
    pub color: BlockColor,
    pub orientation: Orientation,
    pub column: i8,
    pub row: i8,
}

impl From<&Shape> for ShapeSnapshot {
    fn from(value: &Shape) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            orientation: value.orientation(),
            column: value.column(),
            row: value.row(),
        }
    }
}

/// Plain-data copy of a game, for renderers and reports
///
/// Board cells hold 0 for empty, otherwise the block color index + 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; NUMBER_OF_COLUMNS as usize]; NUMBER_OF_ROWS as usize],
    pub falling: Option<ShapeSnapshot>,
    pub next: Option<ShapeSnapshot>,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; NUMBER_OF_COLUMNS as usize]; NUMBER_OF_ROWS as usize];
        self.falling = None;
        self.next = None;
        self.phase = GamePhase::NotStarted;
        self.score = 0;
        self.level = 1;
    }

    /// Overwrite with the state seen through `view`; does not allocate
    pub fn fill_from(&mut self, view: GameView<'_>, phase: GamePhase) {
        for (row, cells) in self.board.iter_mut().enumerate() {
            for (column, cell) in cells.iter_mut().enumerate() {
                *cell = view
                    .board()
                    .get(column as i8, row as i8)
                    .map_or(0, |b| b.color.index() as u8 + 1);
            }
        }
        self.falling = view.falling_shape().map(ShapeSnapshot::from);
        self.next = view.next_shape().map(ShapeSnapshot::from);
        self.phase = phase;
        self.score = view.score();
        self.level = view.level();
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Number of occupied board cells
    pub fn filled_cells(&self) -> usize {
        self.board.iter().flatten().filter(|&&c| c != 0).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; NUMBER_OF_COLUMNS as usize]; NUMBER_OF_ROWS as usize],
            falling: None,
            next: None,
            phase: GamePhase::NotStarted,
            score: 0,
            level: 1,
        };
        s.clear();
        s
    }
}
