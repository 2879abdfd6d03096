//! Board layout and selection tests against the public API

use tui_triples::core::{generate_deck, Board, RandomSource, SimpleRng};
use tui_triples::types::GameConfig;

fn dealt_board(seed: u32) -> (Board, GameConfig) {
    let config = GameConfig::default();
    let mut rng = SimpleRng::new(seed);
    let deck = generate_deck(&config, &mut rng as &mut dyn RandomSource);
    let mut board = Board::place(&config, &mut rng).unwrap();
    board.distribute(deck, &config);
    (board, config)
}

#[test]
fn test_layout_has_no_overlapping_stacks() {
    for seed in [1, 42, 999, 123456] {
        let (board, config) = dealt_board(seed);
        let min_sep = config.piece_size_px * 3 / 2;

        for (i, a) in board.stacks().iter().enumerate() {
            for b in &board.stacks()[i + 1..] {
                let dx = (a.x() - b.x()).abs();
                let dy = (a.y() - b.y()).abs();
                assert!(
                    dx >= min_sep || dy >= min_sep,
                    "seed {}: stacks at ({},{}) and ({},{}) overlap",
                    seed,
                    a.x(),
                    a.y(),
                    b.x(),
                    b.y()
                );
            }
        }
    }
}

#[test]
fn test_layout_respects_margins() {
    let (board, config) = dealt_board(2024);
    let min = config.margin_px;
    let max = config.board_size_px - config.piece_size_px - config.margin_px;

    for stack in board.stacks() {
        assert!((min..=max).contains(&stack.x()));
        assert!((min..=max).contains(&stack.y()));
    }
}

#[test]
fn test_every_stack_is_dealt_to_height() {
    let (board, config) = dealt_board(7);

    assert_eq!(board.stacks().len(), config.stack_count);
    for stack in board.stacks() {
        assert_eq!(stack.len(), config.max_stack_height);
    }
}

#[test]
fn test_impossible_layout_reports_error() {
    let config = GameConfig {
        stack_count: 100,
        ..GameConfig::default()
    };
    let mut rng = SimpleRng::new(1);

    let err = Board::place(&config, &mut rng).unwrap_err();
    assert!(err.stack < config.stack_count);
    assert_eq!(err.attempts, config.placement_attempt_limit);
}

#[test]
fn test_draining_a_stack_exposes_each_piece_in_turn() {
    let (mut board, config) = dealt_board(31337);
    let stack = board.stack_mut(0).unwrap();

    for step in 0..config.max_stack_height {
        let top_id = stack.top().unwrap().id;
        assert!(stack.is_selectable(top_id), "step {}: top not selectable", step);
        assert!(stack.try_select(top_id).is_some());
    }
    assert!(stack.is_empty());
    assert!(stack.top().is_none());
}
