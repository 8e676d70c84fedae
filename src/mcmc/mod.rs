pub mod anneal;
pub mod exchange;

pub use anneal::{anneal, MoveCounts};
pub use exchange::{metropolis_step, Move};
