use log::debug;

use crate::{
    core::{Player, Role, Score, WIN_SCORE},
    error::GameError,
    game::tictactoe::{evaluate, has_remaining_moves, Board, Cell, Move},
};

/// Plain exhaustive minimax, with a counter of how many terminal positions it scored.
#[derive(Debug, Default)]
struct Search {
    n_leafs_evaluated: usize,
}

impl Search {
    /// Compute the value of `node` by use of minimax, with `turn` to move.
    ///
    /// It is good to win. It is bad to lose.
    /// If we can win, we want to win fast,
    /// If we must lose, we want to lose slowly
    fn minimax(&mut self, node: &mut Board, depth: usize, turn: Role) -> Score {
        let value = evaluate(node);
        if value == WIN_SCORE {
            self.n_leafs_evaluated += 1;
            return value - depth as Score;
        }
        if value == -WIN_SCORE {
            self.n_leafs_evaluated += 1;
            return value + depth as Score;
        }
        if !has_remaining_moves(node) {
            self.n_leafs_evaluated += 1;
            return 0;
        }
        let mut best = turn.worst_score();
        for mv in Move::all() {
            if !node.is_empty_at(mv) {
                continue;
            }
            node.set(mv, turn.mark());
            let value = self.minimax(node, depth + 1, turn.other());
            node.set(mv, Cell::Empty);
            best = match turn {
                Role::Maximizer => best.max(value),
                Role::Minimizer => best.min(value),
            };
        }
        best
    }

    fn find_best_move(
        &mut self,
        board: &mut Board,
        turn: Role,
    ) -> Result<(Move, Score), GameError> {
        let mut best: Option<(Move, Score)> = None;
        for mv in Move::all() {
            if !board.is_empty_at(mv) {
                continue;
            }
            board.set(mv, turn.mark());
            // every candidate is searched from depth 0 again
            let value = self.minimax(board, 0, turn.other());
            board.set(mv, Cell::Empty);
            let incumbent = best.map_or(turn.worst_score(), |(_, score)| score);
            if best.is_none() || turn.prefers(value, incumbent) {
                best = Some((mv, value));
            }
        }
        best.ok_or_else(|| GameError::InvalidState("no empty square left to play in".into()))
    }
}

/// The game-theoretic value of `board` with `turn` to move, searched all the way to the end.
///
/// A maximizer win found `depth` plies below the call scores `100 - depth`,
/// a minimizer win `-100 + depth`, a draw 0. The board is back in its original state on return.
pub fn minimax(board: &mut Board, depth: usize, turn: Role) -> Score {
    Search::default().minimax(board, depth, turn)
}

/// The best square for `turn` to play on `board`.
///
/// Squares are tried in row-major order and ties go to the first one.
/// The board is back in its original state on return.
/// Errors with [`GameError::InvalidState`] if the board has no empty square.
pub fn find_best_move(board: &mut Board, turn: Role) -> Result<Move, GameError> {
    Search::default()
        .find_best_move(board, turn)
        .map(|(mv, _)| mv)
}

/// A player that always picks the move [`find_best_move`] would.
pub struct MinMaxAi {
    my_role: Role,
    /// A performance counter over all moves this player made
    n_leafs_evaluated: usize,
}

impl MinMaxAi {
    pub fn new(role: Role) -> Self {
        Self {
            my_role: role,
            n_leafs_evaluated: 0,
        }
    }

    pub fn n_leafs_evaluated(&self) -> usize {
        self.n_leafs_evaluated
    }
}

impl Player for MinMaxAi {
    fn role(&self) -> Role {
        self.my_role
    }

    fn play(&mut self, b: &Board) -> Result<Move, GameError> {
        let mut scratch = *b;
        let mut search = Search::default();
        let (mv, score) = search.find_best_move(&mut scratch, self.my_role)?;
        self.n_leafs_evaluated += search.n_leafs_evaluated;
        debug!(
            "minimax {} picked {} worth {} after {} leaf evaluations",
            self.my_role, mv, score, search.n_leafs_evaluated
        );
        Ok(mv)
    }
}

impl Drop for MinMaxAi {
    fn drop(&mut self) {
        debug!(
            "MinMaxAi {} evaluated {} leaf nodes",
            self.my_role, self.n_leafs_evaluated
        );
    }
}
