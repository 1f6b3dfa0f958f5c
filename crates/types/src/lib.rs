//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain `Copy` data with no external dependencies, so they can be
//! handed to any consumer (rules engine, headless drivers, presentation layers).
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn point**: column 4, row 0
//! - **Preview point**: column 12, row 1 (outside the grid, where the next shape waits)
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 10 | Points per cleared line, multiplied by the level |
//! | `LEVEL_THRESHOLD` | 500 | Level `n` ends once the score reaches `n * 500` |
//! | `TICK_LENGTH_LEVEL_ONE_MS` | 600 | Gravity tick interval on level 1 |
//!
//! # Examples
//!
//! ```
//! use tetrix_types::{BlockColor, GameAction, Orientation, ShapeKind, NUMBER_OF_COLUMNS};
//!
//! assert_eq!(ShapeKind::from_str("line"), Some(ShapeKind::Line));
//! assert_eq!(BlockColor::Teal.as_str(), "teal");
//!
//! let o = Orientation::TwoSeventy.rotate(true);
//! assert_eq!(o, Orientation::Zero);
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert_eq!(NUMBER_OF_COLUMNS, 10);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const NUMBER_OF_COLUMNS: i8 = 10;

/// Board height in cells (20 rows)
pub const NUMBER_OF_ROWS: i8 = 20;

/// Pivot column where a falling shape enters the board
pub const STARTING_COLUMN: i8 = 4;

/// Pivot row where a falling shape enters the board
pub const STARTING_ROW: i8 = 0;

/// Pivot column of the next-shape preview slot
pub const PREVIEW_COLUMN: i8 = 12;

/// Pivot row of the next-shape preview slot
pub const PREVIEW_ROW: i8 = 1;

/// Points awarded per cleared line at level 1
pub const POINTS_PER_LINE: u32 = 10;

/// Score needed per level before levelling up (`level * LEVEL_THRESHOLD`)
pub const LEVEL_THRESHOLD: u32 = 500;

/// Gravity tick interval on level 1
pub const TICK_LENGTH_LEVEL_ONE_MS: u32 = 600;

/// Lowest gravity tick interval reachable by levelling up
pub const TICK_LENGTH_FLOOR_MS: u32 = 50;

/// Number of blocks in every shape
pub const BLOCKS_PER_SHAPE: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(NUMBER_OF_COLUMNS, 10);
        assert_eq!(NUMBER_OF_ROWS, 20);
        assert_eq!((STARTING_COLUMN, STARTING_ROW), (4, 0));
        assert_eq!((PREVIEW_COLUMN, PREVIEW_ROW), (12, 1));
        assert_eq!(POINTS_PER_LINE, 10);
        assert_eq!(LEVEL_THRESHOLD, 500);
    }

    #[test]
    fn orientation_round_trip() {
        for o in Orientation::ALL {
            assert_eq!(o.rotate(true).rotate(false), o);
            assert_eq!(o.rotate(false).rotate(true), o);
        }
    }

    #[test]
    fn orientation_wraps_both_ways() {
        assert_eq!(Orientation::TwoSeventy.rotate_cw(), Orientation::Zero);
        assert_eq!(Orientation::Zero.rotate_ccw(), Orientation::TwoSeventy);
        assert_eq!(Orientation::from_index(5), Orientation::Ninety);
    }

    #[test]
    fn block_display() {
        let block = Block::new(3, 7, BlockColor::Red);
        assert_eq!(block.to_string(), "red: [3, 7]");
    }

    #[test]
    fn blocks_with_different_colors_are_distinct() {
        let a = Block::new(1, 1, BlockColor::Blue);
        let b = Block::new(1, 1, BlockColor::Yellow);
        assert_ne!(a, b);
        assert_eq!(a, Block::new(1, 1, BlockColor::Blue));
    }
}

/// The six block colors
///
/// Colors are cosmetic: they carry no rules beyond identity. The string form
/// matches the sprite names a presentation layer looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    /// Every color, in index order
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];

    /// Position of this color in [`BlockColor::ALL`]
    pub fn index(&self) -> usize {
        match self {
            BlockColor::Blue => 0,
            BlockColor::Orange => 1,
            BlockColor::Purple => 2,
            BlockColor::Red => 3,
            BlockColor::Teal => 4,
            BlockColor::Yellow => 5,
        }
    }

    /// Parse a color from its sprite name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrix_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("Purple"), Some(BlockColor::Purple));
    /// assert_eq!(BlockColor::from_str("green"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(BlockColor::Blue),
            "orange" => Some(BlockColor::Orange),
            "purple" => Some(BlockColor::Purple),
            "red" => Some(BlockColor::Red),
            "teal" => Some(BlockColor::Teal),
            "yellow" => Some(BlockColor::Yellow),
            _ => None,
        }
    }

    /// Sprite name of the color
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for BlockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four rotational states of a shape
///
/// The cycle goes: 0° → 90° → 180° → 270° → 0° when rotating clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    /// Every orientation, in rotation order
    pub const ALL: [Orientation; 4] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Rotation index (0..=3)
    pub fn index(&self) -> u8 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 1,
            Orientation::OneEighty => 2,
            Orientation::TwoSeventy => 3,
        }
    }

    /// Orientation for a rotation index, wrapping modulo 4
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Advance (clockwise) or retreat (counter-clockwise) by one step, with wraparound
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrix_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate(true), Orientation::Ninety);
    /// assert_eq!(Orientation::Zero.rotate(false), Orientation::TwoSeventy);
    /// ```
    pub fn rotate(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::Ninety => Orientation::Zero,
        }
    }

    /// Rotation in degrees
    pub fn degrees(&self) -> u16 {
        self.index() as u16 * 90
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// The seven shape variants
///
/// - **Line**: four in a row
/// - **Square**: 2x2, never visibly rotates
/// - **T**, **S**, **Z**, **J**, **L**: the remaining tetrominoes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Square,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every shape kind
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Line,
        ShapeKind::Square,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrix_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("T"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "line" | "i" => Some(ShapeKind::Line),
            "square" | "o" => Some(ShapeKind::Square),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Square => "square",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// A single occupied cell: position plus color
///
/// Equality covers all three fields, so two blocks on the same cell with
/// different colors are distinct. Rendering handles are not stored here; a
/// presentation layer keys its own sprites by block identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub column: i8,
    pub row: i8,
    pub color: BlockColor,
}

impl Block {
    pub fn new(column: i8, row: i8, color: BlockColor) -> Self {
        Self { column, row, color }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}, {}]", self.color, self.column, self.row)
    }
}

/// Notifications emitted by the rules engine
///
/// Each is delivered synchronously, before the command that caused it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// `begin_game` ran; a next shape is waiting in the preview slot
    Began,
    /// A spawn or fall found no legal position; score and level were reset
    Ended,
    /// The falling shape was committed to the board
    Landed,
    /// The falling shape moved, rotated, or fell one row
    Moved,
    /// The falling shape was hard-dropped onto its resting row
    Dropped,
    /// The level went up after a line clear
    LeveledUp,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Began => "began",
            GameEvent::Ended => "ended",
            GameEvent::Landed => "landed",
            GameEvent::Moved => "moved",
            GameEvent::Dropped => "dropped",
            GameEvent::LeveledUp => "leveledUp",
        }
    }
}

/// Commands an input source can issue against the falling shape
///
/// These are used by both human input and automated drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move shape one column left
    MoveLeft,
    /// Move shape one column right
    MoveRight,
    /// Rotate shape 90° clockwise
    Rotate,
    /// Hard-drop shape onto its resting row
    Drop,
    /// Gravity tick: lower shape one row
    Tick,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrix_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "drop" => Some(GameAction::Drop),
            "tick" => Some(GameAction::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Drop => "drop",
            GameAction::Tick => "tick",
        }
    }
}
