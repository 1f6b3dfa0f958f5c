//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the rules of the falling-block game. It has **no
//! dependencies** on rendering, sound, input devices or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same sequence of shapes
//! - **Testable**: every rule is a synchronous call on plain data
//! - **Portable**: any presentation layer can drive it through commands and a listener
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of optional blocks
//! - [`shape`]: per-kind offset tables, bottom-block tables, and the `Shape` value
//! - [`game`]: `TetrixGame`, the state machine that owns board and shapes
//! - [`rng`]: seeded uniform selection of kinds, colors and orientations
//! - [`scoring`]: line points, level thresholds, gravity pacing
//! - [`snapshot`]: plain-data copies for renderers
//!
//! # Example
//!
//! ```
//! use tetrix_core::{GamePhase, TetrixGame};
//! use tetrix_types::GameEvent;
//!
//! let mut game = TetrixGame::with_listener(12345, Vec::new());
//! game.begin_game();
//! game.spawn_next().unwrap();
//!
//! game.move_shape_left();
//! game.drop_shape();
//! game.let_shape_fall(); // lands the dropped shape
//!
//! assert_eq!(game.phase(), GamePhase::LineClearing);
//! assert_eq!(game.listener().last(), Some(&GameEvent::Landed));
//! assert!(game.remove_completed_lines().is_empty());
//! ```
//!
//! # Driving a game
//!
//! The caller runs the loop: a timer calls
//! [`let_shape_fall`](game::TetrixGame::let_shape_fall), input calls the move,
//! rotate and drop commands, and on `Landed` the caller clears lines until none
//! remain and spawns the next shape. Calls must not overlap; the game has no
//! internal locking.

pub mod board;
pub mod game;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use tetrix_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{GameListener, GamePhase, GameView, LineClear, TetrixGame};
pub use rng::SimpleRng;
pub use scoring::{points_for_lines, tick_interval_ms};
pub use shape::{bottom_block_indices, offsets, Shape};
pub use snapshot::{GameSnapshot, ShapeSnapshot};
