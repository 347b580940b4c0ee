//! Core types: sides, cards, players, deals, history, RNG, move errors.
//!
//! Everything here is plain data with small invariant-preserving methods.
//! The rules, engine, and controller modules build on these.

pub mod card;
pub mod deal;
pub mod error;
pub mod history;
pub mod player;
pub mod rng;
pub mod side;

pub use card::{Card, CardId, Token};
pub use deal::{Deal, DealError};
pub use error::{IllegalMove, MoveKind};
pub use history::RoundRecord;
pub use player::{Player, DECK_SIZE};
pub use rng::SeededRng;
pub use side::{PerSide, Side};
