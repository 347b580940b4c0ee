//! Legal-move validation.
//!
//! Pure predicates over a state snapshot; rejection, never mutation.

pub mod legality;

pub use legality::{
    can_place_token, can_place_token_pair, can_play, can_reveal, check_place_token,
    check_place_token_pair, check_play, check_reveal,
};
