use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    core::{Player, Role},
    error::GameError,
    game::tictactoe::{Board, Move},
};

/// Plays a uniformly random empty square. Useful as a sparring partner.
pub struct RandomAi<R> {
    rng: R,
    my_role: Role,
}

impl<R> Player for RandomAi<R>
where
    R: rand::Rng,
{
    fn role(&self) -> Role {
        self.my_role
    }

    fn play(&mut self, b: &Board) -> Result<Move, GameError> {
        let moves = b.valid_moves();
        let mv = *moves
            .choose(&mut self.rng)
            .ok_or_else(|| GameError::InvalidState("no empty square left to play in".into()))?;
        debug!("Random AI {} plays {}", self.my_role, mv);
        Ok(mv)
    }
}

impl RandomAi<StdRng> {
    pub fn new(role: Role, seed: Option<u64>) -> Self {
        Self {
            my_role: role,
            rng: match seed {
                None => StdRng::from_entropy(),
                Some(seed) => StdRng::seed_from_u64(seed),
            },
        }
    }
}
