//! The round engine: phase sequencing, move application, resolution.

pub mod round;

pub use round::{Phase, PlacementReport, RevealReport, Round};
