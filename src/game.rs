use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    core::{GameEndStatus, Player, Role},
    error::GameError,
    game::tictactoe::{Board, Move},
};

pub mod tictactoe;

/// Everything that happened in one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// The board the game started from
    pub initial_board: Board,
    /// Who moved first
    pub first: Role,
    /// Moves in the order they were played
    pub moves: Vec<(Role, Move)>,
    pub final_board: Board,
    pub result: GameEndStatus,
}

/// Let two players alternate on `board`, starting with `first`,
/// until someone wins or the board is full.
///
/// A board that is already finished gives its result without any moves being asked for.
pub fn run_game(
    board: Board,
    first: Role,
    maximizer: &mut dyn Player,
    minimizer: &mut dyn Player,
) -> Result<GameRecord, GameError> {
    if maximizer.role() != Role::Maximizer || minimizer.role() != Role::Minimizer {
        return Err(GameError::InvalidState(format!(
            "players are seated wrong: {} plays the maximizer seat, {} the minimizer seat",
            maximizer.role(),
            minimizer.role()
        )));
    }
    let initial_board = board;
    let mut board = board;
    let mut moves = Vec::new();
    let mut current_player = first;
    let result = loop {
        if let Ok(end) = GameEndStatus::try_from(board.game_status()) {
            break end;
        }
        let player: &mut dyn Player = match current_player {
            Role::Maximizer => &mut *maximizer,
            Role::Minimizer => &mut *minimizer,
        };
        let action = player.play(&board)?;
        board.place_mark(action, current_player)?;
        debug!("Player {} played {}", current_player, action);
        debug!("\n{}", board);
        moves.push((current_player, action));
        current_player = current_player.other();
    };
    info!("Game ended with {} after {} moves", result, moves.len());
    Ok(GameRecord {
        initial_board,
        first,
        moves,
        final_board: board,
        result,
    })
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use enum_iterator::all;

    use super::*;
    use crate::{
        core::GameStatus,
        player::{MinMaxAi, RandomAi},
    };

    #[test]
    fn optimal_play_is_a_draw() {
        for first in all::<Role>() {
            let mut p1 = MinMaxAi::new(Role::Maximizer);
            let mut p2 = MinMaxAi::new(Role::Minimizer);
            let record = run_game(Board::new(), first, &mut p1, &mut p2).unwrap();
            assert_eq!(record.result, GameEndStatus::Draw, "{first} started");
            assert_eq!(record.result.score(), 0);
            assert_eq!(record.moves.len(), 9);
            assert_eq!(record.moves[0].0, first);
            assert_eq!(record.final_board.game_status(), GameStatus::Draw);
        }
    }

    #[test]
    fn optimal_player_never_loses_to_random() {
        for seed in 0..6 {
            for first in all::<Role>() {
                let mut p1 = MinMaxAi::new(Role::Maximizer);
                let mut p2 = RandomAi::new(Role::Minimizer, Some(seed));
                let record = run_game(Board::new(), first, &mut p1, &mut p2).unwrap();
                assert_ne!(record.result, GameEndStatus::Won(Role::Minimizer));

                let mut p1 = RandomAi::new(Role::Maximizer, Some(seed));
                let mut p2 = MinMaxAi::new(Role::Minimizer);
                let record = run_game(Board::new(), first, &mut p1, &mut p2).unwrap();
                assert_ne!(record.result, GameEndStatus::Won(Role::Maximizer));
            }
        }
    }

    #[test]
    fn moves_alternate_and_replay_to_final_board() {
        let mut p1 = RandomAi::new(Role::Maximizer, Some(3));
        let mut p2 = RandomAi::new(Role::Minimizer, Some(4));
        let record = run_game(Board::new(), Role::Minimizer, &mut p1, &mut p2).unwrap();
        let mut replay = record.initial_board;
        let mut expected = Role::Minimizer;
        for &(role, mv) in record.moves.iter() {
            assert_eq!(role, expected);
            replay.place_mark(mv, role).unwrap();
            expected = expected.other();
        }
        assert_eq!(replay, record.final_board);
    }

    #[test]
    fn continues_from_a_given_board() {
        let b = Board::from_str("xx_/oo_/___").unwrap();
        let mut p1 = MinMaxAi::new(Role::Maximizer);
        let mut p2 = MinMaxAi::new(Role::Minimizer);
        let record = run_game(b, Role::Maximizer, &mut p1, &mut p2).unwrap();
        assert_eq!(record.moves, vec![(Role::Maximizer, Move::new(0, 2).unwrap())]);
        assert_eq!(record.result, GameEndStatus::Won(Role::Maximizer));
        assert_eq!(record.result.score(), 100);
    }

    #[test]
    fn finished_board_needs_no_moves() {
        let b = Board::from_str("ooo/xx_/x__").unwrap();
        let mut p1 = MinMaxAi::new(Role::Maximizer);
        let mut p2 = MinMaxAi::new(Role::Minimizer);
        let record = run_game(b, Role::Maximizer, &mut p1, &mut p2).unwrap();
        assert!(record.moves.is_empty());
        assert_eq!(record.result, GameEndStatus::Won(Role::Minimizer));
    }

    #[test]
    fn players_must_sit_in_their_seats() {
        let mut p1 = MinMaxAi::new(Role::Minimizer);
        let mut p2 = MinMaxAi::new(Role::Minimizer);
        assert!(matches!(
            run_game(Board::new(), Role::Maximizer, &mut p1, &mut p2),
            Err(GameError::InvalidState(_))
        ));
    }
}
