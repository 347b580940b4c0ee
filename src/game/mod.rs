//! The match controller and final verdict.

pub mod controller;
pub mod verdict;

pub use controller::{Match, MatchState, Progress, ResumeError, ROUNDS_PER_MATCH};
pub use verdict::MatchResult;
