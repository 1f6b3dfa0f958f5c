//! Simulation run and its report
//!
//! The report is plain data with a stable JSON shape:
//!
//! ```json
//! {
//!   "seed": 1,
//!   "games_played": 1,
//!   "pieces_spawned": 1000,
//!   "lines_cleared": 391,
//!   "level_ups": 7,
//!   "best_score": 8830,
//!   "best_level": 8,
//!   "finished": false,
//!   "phase": "playing",
//!   "score": 8830,
//!   "level": 8,
//!   "board": ["..........", "...", "rrt.yyb..."]
//! }
//! ```
//!
//! Board rows run top to bottom; each cell is `.` or the first letter of its
//! block color.

use anyhow::Result;
use serde::Serialize;

use tetrix_core::GameSnapshot;
use tetrix_engine::{HeuristicPolicy, Session, SessionConfig};
use tetrix_types::BlockColor;

use crate::config::SimConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimReport {
    pub seed: u32,
    pub games_played: u32,
    pub pieces_spawned: u64,
    pub lines_cleared: u64,
    pub level_ups: u32,
    pub best_score: u32,
    pub best_level: u32,
    /// Every requested game ended before the piece limit
    pub finished: bool,
    pub phase: String,
    pub score: u32,
    pub level: u32,
    pub board: Vec<String>,
}

impl SimReport {
    pub fn from_session(session: &Session) -> Self {
        let stats = session.stats();
        let game = session.game();
        let snapshot = game.snapshot();

        Self {
            seed: session.config().seed,
            games_played: stats.games_played,
            pieces_spawned: stats.pieces_spawned,
            lines_cleared: stats.lines_cleared,
            level_ups: stats.level_ups,
            best_score: stats.best_score,
            best_level: stats.best_level,
            finished: session.is_finished(),
            phase: snapshot.phase.as_str().to_string(),
            score: game.score(),
            level: game.level(),
            board: board_rows(&snapshot),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "seed={} games={} pieces={} lines={} best_score={} best_level={}",
            self.seed,
            self.games_played,
            self.pieces_spawned,
            self.lines_cleared,
            self.best_score,
            self.best_level
        )
    }
}

fn board_rows(snapshot: &GameSnapshot) -> Vec<String> {
    snapshot
        .board
        .iter()
        .map(|row| row.iter().map(|&cell| cell_char(cell)).collect())
        .collect()
}

fn cell_char(cell: u8) -> char {
    if cell == 0 {
        return '.';
    }
    BlockColor::ALL
        .get(cell as usize - 1)
        .and_then(|color| color.as_str().chars().next())
        .unwrap_or('?')
}

/// Play with the heuristic policy until the piece limit or the last game ends
pub fn run(config: &SimConfig) -> SimReport {
    let mut session = Session::new(SessionConfig {
        seed: config.seed,
        max_games: Some(config.games),
    });
    session.start();

    let policy = HeuristicPolicy::default();
    while !session.is_finished() && session.stats().pieces_spawned < config.pieces {
        session.autoplay_step(&policy);
    }

    SimReport::from_session(&session)
}
