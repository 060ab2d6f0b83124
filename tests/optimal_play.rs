//! Integration tests of the exhaustive search against every possible opponent
use std::str::FromStr;

use enum_iterator::all;
use xoxo_minimax::{
    evaluate, find_best_move, has_remaining_moves, minimax, Board, Move, Role, WIN_SCORE,
};

/// Let `ai` answer with the best move, and try every reply for the other side.
/// Returns the number of finished games visited.
fn explore_all_opponents(board: &mut Board, ai: Role, turn: Role) -> usize {
    let value = evaluate(board);
    if value != 0 || !has_remaining_moves(board) {
        assert_ne!(
            value,
            ai.other().win_score(),
            "{ai} lost this game:\n{board}"
        );
        return 1;
    }
    if turn == ai {
        let before = *board;
        let mv = find_best_move(board, ai).unwrap();
        assert_eq!(*board, before, "search must not leave marks behind");
        board.place_mark(mv, ai).unwrap();
        let n = explore_all_opponents(board, ai, turn.other());
        *board = before;
        n
    } else {
        let before = *board;
        let mut n = 0;
        for mv in before.valid_moves() {
            board.place_mark(mv, turn).unwrap();
            n += explore_all_opponents(board, ai, turn.other());
            *board = before;
        }
        n
    }
}

#[test]
fn optimal_player_is_never_beaten() {
    for ai in all::<Role>() {
        for first in all::<Role>() {
            let mut board = Board::new();
            let games = explore_all_opponents(&mut board, ai, first);
            assert!(games > 0);
            assert_eq!(board, Board::new());
        }
    }
}

#[test]
fn perfect_play_from_start_is_draw() {
    let mut board = Board::new();
    let mut turn = Role::Maximizer;
    while evaluate(&board) == 0 && has_remaining_moves(&board) {
        let mv = find_best_move(&mut board, turn).unwrap();
        board.place_mark(mv, turn).unwrap();
        turn = turn.other();
    }
    assert_eq!(evaluate(&board), 0);
    assert!(!has_remaining_moves(&board));
}

#[test]
fn completes_the_top_row() {
    let mut board = Board::from_str("xx_/oo_/___").unwrap();
    let mv = find_best_move(&mut board, Role::Maximizer).unwrap();
    assert_eq!(mv, Move::new(0, 2).unwrap());
}

#[test]
fn must_block_vertical_threat() {
    // x threatens column 0, o to move must play (2,0)
    let mut board = Board::from_str("x__/xo_/___").unwrap();
    let mv = find_best_move(&mut board, Role::Minimizer).unwrap();
    assert_eq!(mv, Move::new(2, 0).unwrap());
}

#[test]
fn depth_adjusts_terminal_scores() {
    let mut board = Board::from_str("x_o/_xo/__x").unwrap();
    assert_eq!(minimax(&mut board, 0, Role::Minimizer), WIN_SCORE);
    assert_eq!(minimax(&mut board, 3, Role::Minimizer), WIN_SCORE - 3);
}
