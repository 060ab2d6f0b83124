use std::{fmt::Display, str::FromStr};

use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::{
    core::{GameStatus, Role, Score, WIN_SCORE},
    error::GameError,
};

/// Side length of the board
pub const SIDE: usize = 3;

/// The eight lines that win the game, in the order they are checked:
/// 3 rows (top to bottom), 3 columns (left to right) and two diagonals
/// (first the one that points to southeast, then the one to southwest)
pub const WINNING_LINES: [[(usize, usize); SIDE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// What a single square holds
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Maximizer,
    Minimizer,
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Cell::Empty => '_',
            Cell::Maximizer => 'x',
            Cell::Minimizer => 'o',
        };
        write!(f, "{c}")
    }
}

impl TryFrom<char> for Cell {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'x' | 'X' => Ok(Cell::Maximizer),
            'o' | 'O' => Ok(Cell::Minimizer),
            '_' | '.' | ' ' => Ok(Cell::Empty),
            other => Err(GameError::InvalidBoard(format!(
                "unknown cell symbol {other:?}, expected one of x o _ . or space"
            ))),
        }
    }
}

/// Represents a coordinate on the board, zero-based
///
///  (0,0) (0,1) (0,2)
///  (1,0) (1,1) (1,2)
///  (2,0) (2,1) (2,2)
///
/// invariant: row and col are both in 0..3
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIDE || col >= SIDE {
            return Err(GameError::InvalidBoard(format!(
                "coordinate ({row}, {col}) is outside the {SIDE}x{SIDE} board"
            )));
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Every square of the board in row-major order.
    /// This is the order the search tries moves in, so it also decides ties.
    pub fn all() -> impl Iterator<Item = Move> {
        iproduct!(0..SIDE, 0..SIDE).map(|(row, col)| Move { row, col })
    }
}

impl TryFrom<(usize, usize)> for Move {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Move::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid, indexed `[row][col]`.
/// It is `Copy` so that players can search on a scratch copy without touching the game board.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board([[Cell; SIDE]; SIDE]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Cell; SIDE]; SIDE]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.0
    }

    pub fn get(&self, mv: Move) -> Cell {
        self.0[mv.row][mv.col]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Unchecked write, used by the search to try and undo moves
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.0[mv.row][mv.col] = cell;
    }

    /// Place the mark of `role` at `mv`. The square must be empty.
    pub fn place_mark(&mut self, mv: Move, role: Role) -> Result<(), GameError> {
        if !self.is_empty_at(mv) {
            return Err(GameError::InvalidState(format!(
                "there is already a marker at {mv}"
            )));
        }
        self.set(mv, role.mark());
        Ok(())
    }

    /// The empty squares, in row-major order
    pub fn valid_moves(&self) -> Vec<Move> {
        Move::all().filter(|&mv| self.is_empty_at(mv)).collect()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.0.iter().flatten().filter(|&&c| c == cell).count()
    }

    pub fn n_moves_made(&self) -> usize {
        SIDE * SIDE - self.count(Cell::Empty)
    }

    /// Number of maximizer marks minus number of minimizer marks.
    /// In a legal game this is -1, 0 or 1 depending on who started.
    pub fn mark_balance(&self) -> isize {
        self.count(Cell::Maximizer) as isize - self.count(Cell::Minimizer) as isize
    }

    /// Is there a winner?
    pub fn winner(&self) -> Option<Role> {
        match evaluate(self) {
            WIN_SCORE => Some(Role::Maximizer),
            s if s == -WIN_SCORE => Some(Role::Minimizer),
            _ => None,
        }
    }

    pub fn game_status(&self) -> GameStatus {
        if let Some(role) = self.winner() {
            GameStatus::Won(role)
        } else if !has_remaining_moves(self) {
            GameStatus::Draw
        } else {
            GameStatus::Undecided
        }
    }

    pub fn game_is_over(&self) -> bool {
        !matches!(self.game_status(), GameStatus::Undecided)
    }
}

/// Score a board without looking ahead.
///
/// Returns +100 if the maximizer owns a full line, -100 if the minimizer does, and 0 otherwise.
/// Zero means both "draw" and "nobody has won yet"; use [`has_remaining_moves`] to tell them apart.
/// Lines are checked in the order of [`WINNING_LINES`] and the first full one decides,
/// which only matters for boards that cannot arise in a real game.
pub fn evaluate(board: &Board) -> Score {
    for line in WINNING_LINES {
        let [a, b, c] = line.map(|(row, col)| board.0[row][col]);
        if a == b && b == c {
            match a {
                Cell::Maximizer => return WIN_SCORE,
                Cell::Minimizer => return -WIN_SCORE,
                Cell::Empty => {}
            }
        }
    }
    0
}

/// Is there at least one empty square left?
pub fn has_remaining_moves(board: &Board) -> bool {
    board.0.iter().flatten().any(|&c| c == Cell::Empty)
}

/// Parses nine cells in row-major order, e.g. `"xx_oo____"` or `"xx /oo /   "`.
/// `/` and line breaks are ignored so rows can be separated.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '/' | '\n' | '\r'))
            .collect();
        if symbols.len() != SIDE * SIDE {
            return Err(GameError::InvalidBoard(format!(
                "expected {} cells, got {}",
                SIDE * SIDE,
                symbols.len()
            )));
        }
        let mut board = Board::new();
        for (mv, &symbol) in Move::all().zip(symbols.iter()) {
            board.set(mv, Cell::try_from(symbol)?);
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " ------- ")?;
        for row in self.0.iter() {
            write!(f, "| ")?;
            row.iter().try_for_each(|cell| write!(f, "{cell} "))?;
            writeln!(f, "|")?;
        }
        writeln!(f, " ------- ")
    }
}
