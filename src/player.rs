pub mod min_max;
pub mod random;

pub use min_max::MinMaxAi;
pub use random::RandomAi;
