pub mod initialize;
pub mod place_bet;
pub mod resolve_bet;

pub use initialize::*;
pub use place_bet::*;
pub use resolve_bet::*;
