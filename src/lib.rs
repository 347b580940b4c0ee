//! # plus-minus
//!
//! A two-player, nine-round card duel engine. Each round both sides attach
//! a +1 and a -1 token to their own cards, optionally flip one opponent
//! card, then secretly commit a card to a head-to-head comparison. Higher
//! token-adjusted value takes the round; level scores after nine rounds
//! fall to the lower sum of winning raw values; level again is a draw.
//!
//! ## Design Principles
//!
//! 1. **Explicit state, explicit transitions**: one controller owns all
//!    match state; phases are direct method calls, never timers or ambient
//!    globals.
//!
//! 2. **Reject, don't abort**: every human or provider move is validated
//!    against pure legality rules first. Illegal requests come back as
//!    [`IllegalMove`] and nothing advances; broken engine invariants panic.
//!
//! 3. **Pluggable opponent**: the automated side is anything implementing
//!    [`MoveProvider`] — a remote model, a heuristic, a scripted stub. A
//!    failing provider is silently replaced by a deterministic fallback.
//!
//! 4. **Reproducible by construction**: deals come from explicit
//!    permutations or seeds, and the shipped [`SeededRandom`] strategy
//!    replays identically from its seed.
//!
//! ## Modules
//!
//! - `core`: sides, cards, players, deals, history, RNG, move errors
//! - `rules`: pure legality predicates
//! - `provider`: the opponent move boundary and reference strategies
//! - `engine`: the round state machine
//! - `game`: the match controller and verdict

pub mod core;
pub mod engine;
pub mod game;
pub mod provider;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Deal, DealError, IllegalMove, MoveKind, PerSide, Player, RoundRecord, SeededRng,
    Side, Token, DECK_SIZE,
};

pub use crate::rules::{can_place_token, can_place_token_pair, can_play, can_reveal};

pub use crate::provider::{
    BattlePlay, FirstAvailable, MoveProvider, OpponentCard, OwnCard, ProviderError, ProviderView,
    RevealChoice, SeededRandom, TokenPlacement,
};

pub use crate::engine::{Phase, PlacementReport, RevealReport, Round};

pub use crate::game::{Match, MatchResult, MatchState, Progress, ResumeError, ROUNDS_PER_MATCH};
