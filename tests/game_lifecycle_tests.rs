//! Game lifecycle tests - commands, notifications and line clears end to end

use tetrix::core::{Board, GameListener, GamePhase, GameView, TetrixGame};
use tetrix::types::{
    Block, BlockColor, GameAction, GameEvent, NUMBER_OF_COLUMNS, NUMBER_OF_ROWS, STARTING_COLUMN,
    STARTING_ROW,
};

fn full_row(board: &mut Board, row: i8) {
    for column in 0..NUMBER_OF_COLUMNS {
        board.place(Block::new(column, row, BlockColor::Blue));
    }
}

/// Listener that records the score seen with every notification
#[derive(Default)]
struct ScoreLog {
    entries: Vec<(GameEvent, u32, u32)>,
}

impl GameListener for ScoreLog {
    fn on_event(&mut self, event: GameEvent, game: GameView<'_>) {
        self.entries.push((event, game.score(), game.level()));
    }
}

#[test]
fn test_spawn_uses_previous_preview() {
    let mut game = TetrixGame::with_listener(5, Vec::new());
    game.begin_game();

    for _ in 0..5 {
        let preview = *game.next_shape().unwrap();
        let (falling, _) = game.spawn_next().unwrap();

        assert_eq!((falling.column(), falling.row()), (STARTING_COLUMN, STARTING_ROW));
        assert_eq!(falling.kind(), preview.kind());
        assert_eq!(falling.color(), preview.color());
        assert_eq!(falling.orientation(), preview.orientation());

        game.drop_shape();
        game.let_shape_fall();
        assert!(game.remove_completed_lines().is_empty());
    }
}

#[test]
fn test_drop_on_empty_board_reaches_floor() {
    let mut game = TetrixGame::new(77);
    game.begin_game();
    game.spawn_next().unwrap();

    game.drop_shape();

    let shape = *game.falling_shape().unwrap();
    let lowest = shape.blocks().iter().map(|b| b.row).max().unwrap();
    assert_eq!(lowest, NUMBER_OF_ROWS - 1);
    assert!(shape.bottom_blocks().iter().any(|b| b.row == NUMBER_OF_ROWS - 1));

    let mut lower = shape;
    lower.lower_by_one_row();
    assert!(!game.board().is_legal(&lower));
}

#[test]
fn test_move_left_stops_at_wall_silently() {
    let mut game = TetrixGame::with_listener(77, Vec::new());
    game.begin_game();
    game.spawn_next().unwrap();

    for _ in 0..NUMBER_OF_COLUMNS {
        game.move_shape_left();
    }
    let at_wall = *game.falling_shape().unwrap();
    assert_eq!(at_wall.blocks().iter().map(|b| b.column).min(), Some(0));
    let events = game.listener().len();

    game.move_shape_left();

    assert_eq!(game.falling_shape(), Some(&at_wall));
    assert_eq!(game.listener().len(), events);
}

#[test]
fn test_no_complete_rows_changes_nothing() {
    let mut board = Board::new();
    for column in 1..NUMBER_OF_COLUMNS {
        board.place(Block::new(column, 19, BlockColor::Red));
    }
    let mut game = TetrixGame::new(1).with_board(board.clone());
    game.begin_game();

    let clear = game.remove_completed_lines();

    assert!(clear.removed_lines.is_empty());
    assert!(clear.fallen_blocks.is_empty());
    assert_eq!(game.board(), &board);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_clear_collapses_stack_above() {
    let mut board = Board::new();
    full_row(&mut board, 19);
    board.place(Block::new(2, 18, BlockColor::Red));
    board.place(Block::new(2, 16, BlockColor::Teal));
    board.place(Block::new(7, 17, BlockColor::Orange));
    let mut game = TetrixGame::new(1).with_board(board);
    game.begin_game();

    let clear = game.remove_completed_lines();

    assert_eq!(clear.lines(), 1);
    assert_eq!(clear.removed_lines[0].len(), NUMBER_OF_COLUMNS as usize);
    assert_eq!(game.score(), 10);

    // Column 2 compacts without gaps, keeping order; column 7 falls to the floor
    assert_eq!(game.board().get(2, 19).map(|b| b.color), Some(BlockColor::Red));
    assert_eq!(game.board().get(2, 18).map(|b| b.color), Some(BlockColor::Teal));
    assert_eq!(game.board().get(7, 19).map(|b| b.color), Some(BlockColor::Orange));
    assert_eq!(game.board().occupied_count(), 3);

    let moved: usize = clear.fallen_blocks.iter().map(Vec::len).sum();
    assert_eq!(moved, 3);
    assert!(clear
        .fallen_blocks
        .iter()
        .flatten()
        .all(|b| game.board().get(b.column, b.row) == Some(*b)));
}

#[test]
fn test_spawn_row_is_never_cleared() {
    let mut board = Board::new();
    full_row(&mut board, 0);
    let mut game = TetrixGame::new(1).with_board(board);
    game.begin_game();

    assert!(game.remove_completed_lines().is_empty());
    assert!(game.board().is_row_full(0));
}

#[test]
fn test_score_and_level_progression() {
    let mut game = TetrixGame::with_listener(1, ScoreLog::default());
    game.begin_game();

    let mut last_score = 0;
    let mut last_level = 1;
    for _ in 0..20 {
        let mut board = Board::new();
        for row in 16..NUMBER_OF_ROWS {
            full_row(&mut board, row);
        }
        game = game.with_board(board);

        let clear = game.remove_completed_lines();
        assert_eq!(clear.lines(), 4);

        assert_eq!(game.score(), last_score + 40 * last_level);
        assert!(game.level() == last_level || game.level() == last_level + 1);
        last_score = game.score();
        last_level = game.level();
    }

    let level_ups: Vec<_> = game
        .listener()
        .entries
        .iter()
        .filter(|(event, _, _)| *event == GameEvent::LeveledUp)
        .collect();
    assert_eq!(level_ups.len() as u32, last_level - 1);
    // Listener sees the already-raised level
    assert!(level_ups.iter().all(|(_, score, level)| *score >= (level - 1) * 500));
}

#[test]
fn test_game_over_and_restart() {
    let mut game = TetrixGame::with_listener(3, Vec::new());
    game.begin_game();

    let mut spawned = 0;
    while game.spawn_next().is_some() {
        spawned += 1;
        game.apply_action(GameAction::Drop);
        game.apply_action(GameAction::Tick);
        while !game.remove_completed_lines().is_empty() {}
        assert!(spawned < 200);
    }

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.listener().last(), Some(&GameEvent::Ended));
    assert_eq!((game.score(), game.level()), (0, 1));
    let preview = *game.next_shape().unwrap();

    let rows = game.remove_all_blocks();
    assert_eq!(rows.len(), NUMBER_OF_ROWS as usize);
    assert!(rows.iter().flatten().count() > 0);
    assert!(game.board().is_empty());

    game.begin_game();
    assert_eq!(game.listener().last(), Some(&GameEvent::Began));
    let (falling, _) = game.spawn_next().unwrap();
    assert_eq!(falling.kind(), preview.kind());
    assert_eq!(game.phase(), GamePhase::Playing);
}
