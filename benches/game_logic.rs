use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrix::core::{Board, Shape, TetrixGame};
use tetrix::engine::{HeuristicPolicy, Session, SessionConfig};
use tetrix::types::{Block, BlockColor, GameAction, Orientation, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = TetrixGame::new(12345);
    game.begin_game();

    c.bench_function("let_shape_fall", |b| {
        b.iter(|| {
            if game.falling_shape().is_none() && game.spawn_next().is_none() {
                game.remove_all_blocks();
                game.begin_game();
                game.spawn_next();
            }
            game.let_shape_fall();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    for row in 16..20 {
        for column in 0..10 {
            board.place(Block::new(column, row, BlockColor::Teal));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut game = TetrixGame::new(1).with_board(board.clone());
            black_box(game.remove_completed_lines());
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut game = TetrixGame::new(12345);
    game.begin_game();
    game.spawn_next();

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            game.apply_action(black_box(GameAction::MoveLeft));
            game.apply_action(black_box(GameAction::Rotate));
            game.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_policy_choose(c: &mut Criterion) {
    let policy = HeuristicPolicy::default();
    let mut board = Board::new();
    for column in 0..9 {
        board.place(Block::new(column, 19, BlockColor::Red));
    }
    let shape = Shape::new(ShapeKind::T, 4, 0, BlockColor::Purple, Orientation::Zero);

    c.bench_function("policy_choose", |b| {
        b.iter(|| black_box(policy.choose(&board, &shape)))
    });
}

fn bench_autoplay_game(c: &mut Criterion) {
    let policy = HeuristicPolicy::default();

    c.bench_function("autoplay_100_pieces", |b| {
        b.iter(|| {
            let mut session = Session::new(SessionConfig {
                seed: 7,
                max_games: Some(1),
            });
            session.start();
            while !session.is_finished() && session.stats().pieces_spawned < 100 {
                session.autoplay_step(&policy);
            }
            black_box(session.stats().lines_cleared)
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move_and_rotate,
    bench_policy_choose,
    bench_autoplay_game
);
criterion_main!(benches);
