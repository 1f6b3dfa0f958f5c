//! Session - headless controller loop around a game
//!
//! A presentation layer reacts to game notifications in a fixed way: a
//! landing clears lines until none remain and spawns the next shape, a hard
//! drop is followed by an immediate gravity tick, a level-up shortens the
//! tick, and a finished game drains the board and starts over. `Session`
//! runs that loop without a display so games can be simulated, benchmarked
//! and tested.

use tetrix_core::scoring::next_tick_interval_ms;
use tetrix_core::{GamePhase, TetrixGame};
use tetrix_types::{GameAction, GameEvent, Orientation, TICK_LENGTH_LEVEL_ONE_MS};

use crate::place::{apply_place, PlaceError};
use crate::policy::{HeuristicPolicy, Placement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    /// Stop restarting once this many games have ended; `None` restarts forever
    pub max_games: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_games: Some(1),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: u32,
    pub pieces_spawned: u64,
    pub lines_cleared: u64,
    pub level_ups: u32,
    pub best_score: u32,
    pub best_level: u32,
}

#[derive(Debug, Clone)]
pub struct Session {
    game: TetrixGame<Vec<GameEvent>>,
    config: SessionConfig,
    stats: SessionStats,
    tick_interval_ms: u32,
    elapsed_ms: u32,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: TetrixGame::with_listener(config.seed, Vec::new()),
            config,
            stats: SessionStats::default(),
            tick_interval_ms: TICK_LENGTH_LEVEL_ONE_MS,
            elapsed_ms: 0,
        }
    }

    pub fn game(&self) -> &TetrixGame<Vec<GameEvent>> {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// True once the last permitted game has ended
    pub fn is_finished(&self) -> bool {
        self.game.phase() == GamePhase::GameOver
    }

    /// Begin the first game and spawn its shape
    pub fn start(&mut self) {
        self.game.begin_game();
        self.process_events();
    }

    /// Run one input command and everything it triggers
    pub fn apply(&mut self, action: GameAction) {
        self.game.apply_action(action);
        self.process_events();
    }

    /// Move the falling shape to a target and drop it
    pub fn place(&mut self, column: i8, orientation: Orientation) -> Result<(), PlaceError> {
        let result = apply_place(&mut self.game, column, orientation);
        self.process_events();
        result
    }

    /// Let `elapsed_ms` of wall time pass; returns the number of gravity ticks run
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.game.phase() != GamePhase::Playing {
            return 0;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let mut ticks = 0;
        while self.elapsed_ms >= self.tick_interval_ms {
            self.elapsed_ms -= self.tick_interval_ms;
            self.apply(GameAction::Tick);
            ticks += 1;
            if self.is_finished() {
                self.elapsed_ms = 0;
                break;
            }
        }
        ticks
    }

    /// Place the falling shape where `policy` scores best
    ///
    /// Falls back to a plain hard drop when no placement is reachable. Returns
    /// the placement that was applied, if any.
    pub fn autoplay_step(&mut self, policy: &HeuristicPolicy) -> Option<Placement> {
        let shape = *self.game.falling_shape()?;
        let chosen = policy.choose(self.game.board(), &shape);

        match chosen {
            Some(p) if self.place(p.column, p.orientation).is_ok() => Some(p),
            _ => {
                self.apply(GameAction::Drop);
                None
            }
        }
    }

    /// React to queued notifications until the queue stays empty
    fn process_events(&mut self) {
        loop {
            let events = std::mem::take(self.game.listener_mut());
            if events.is_empty() {
                break;
            }
            for event in events {
                self.handle(event);
            }
        }
    }

    fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::Began => {
                self.tick_interval_ms = TICK_LENGTH_LEVEL_ONE_MS;
                self.elapsed_ms = 0;
                self.spawn();
            }
            GameEvent::Dropped => self.game.let_shape_fall(),
            GameEvent::Landed => {
                loop {
                    let clear = self.game.remove_completed_lines();
                    if clear.is_empty() {
                        break;
                    }
                    self.stats.lines_cleared += clear.lines() as u64;
                }
                self.stats.best_score = self.stats.best_score.max(self.game.score());
                self.stats.best_level = self.stats.best_level.max(self.game.level());
                self.spawn();
            }
            GameEvent::LeveledUp => {
                self.stats.level_ups += 1;
                self.tick_interval_ms = next_tick_interval_ms(self.tick_interval_ms);
            }
            GameEvent::Ended => {
                self.stats.games_played += 1;
                let limit_reached = self
                    .config
                    .max_games
                    .is_some_and(|max| self.stats.games_played >= max);
                if !limit_reached {
                    self.game.remove_all_blocks();
                    self.game.begin_game();
                }
            }
            GameEvent::Moved => {}
        }
    }

    fn spawn(&mut self) {
        if self.game.spawn_next().is_some() {
            self.stats.pieces_spawned += 1;
        }
    }
}
